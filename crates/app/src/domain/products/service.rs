//! Products service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use salesdesk::catalog::Catalog;

use crate::domain::products::{
    data::{NewProduct, ProductUpdate, check_fields},
    errors::ProductsServiceError,
    records::{ProductRecord, ProductUuid},
    repository::InMemoryProductsRepository,
};

#[derive(Debug, Default)]
pub struct InMemoryProductsService {
    repository: InMemoryProductsRepository,
}

impl InMemoryProductsService {
    /// Seed the service with one record per catalog product.
    #[must_use]
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let now = Timestamp::now();

        Self {
            repository: InMemoryProductsRepository::with_records(
                catalog
                    .iter()
                    .map(|product| ProductRecord::from_catalog(product, now)),
            ),
        }
    }
}

#[async_trait]
impl ProductsService for InMemoryProductsService {
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        Ok(self.repository.list_products())
    }

    async fn search_products(
        &self,
        term: &str,
    ) -> Result<Vec<ProductRecord>, ProductsServiceError> {
        let needle = term.trim().to_lowercase();

        let mut products = self.repository.list_products();
        products.retain(|product| product.matches(&needle));

        Ok(products)
    }

    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .get_product(product)
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError> {
        if product.code.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        check_fields(&product.name, &product.category, &product.prices)?;

        self.repository.create_product(product, Timestamp::now())
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError> {
        check_fields(&update.name, &update.category, &update.prices)?;

        self.repository
            .update_product(product, update, Timestamp::now())
            .ok_or(ProductsServiceError::NotFound)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let rows_affected = self.repository.delete_product(product, Timestamp::now());

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products, ordered by category.
    async fn list_products(&self) -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Products whose name, code or category contains `term`, ignoring case.
    async fn search_products(&self, term: &str)
    -> Result<Vec<ProductRecord>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid)
    -> Result<ProductRecord, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(
        &self,
        product: NewProduct,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Updates a product with the given UUID and update.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<ProductRecord, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
