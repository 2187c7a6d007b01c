//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use salesdesk::catalog::Product;
use serde::{Deserialize, Serialize};

salesdesk::time_ordered_id! {
    /// Product UUID
    pub struct ProductUuid;
}

/// Product Record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub code: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub size_type: String,
    pub dimensions: String,

    /// Sale price by country name
    pub prices: FxHashMap<String, Decimal>,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl ProductRecord {
    /// Seed a record from a catalog entry.
    pub fn from_catalog(product: &Product, now: Timestamp) -> Self {
        Self {
            uuid: ProductUuid::new(),
            code: product.code.clone(),
            name: product.description.clone(),
            category: product.category.clone(),
            subcategory: product.subcategory.clone(),
            size_type: String::new(),
            dimensions: product.dimension.clone(),
            prices: product
                .prices
                .iter()
                .map(|(country, price)| (country.clone(), price.price))
                .collect(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub(crate) fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.code, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
