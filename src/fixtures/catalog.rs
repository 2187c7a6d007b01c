//! Catalog Fixtures

use serde::Deserialize;

use crate::catalog::{Catalog, CatalogError, Product};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products, in catalog order
    pub products: Vec<Product>,
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = CatalogError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        Catalog::with_products(fixture.products)
    }
}
