//! Products Repository

use jiff::Timestamp;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::domain::products::{
    ProductsServiceError,
    data::{NewProduct, ProductUpdate},
    records::{ProductRecord, ProductUuid},
};

/// Product records keyed by uuid. Deleted records are kept with `deleted_at` set.
#[derive(Debug, Default)]
pub(crate) struct InMemoryProductsRepository {
    records: RwLock<FxHashMap<ProductUuid, ProductRecord>>,
}

impl InMemoryProductsRepository {
    pub(crate) fn with_records(records: impl IntoIterator<Item = ProductRecord>) -> Self {
        Self {
            records: RwLock::new(
                records
                    .into_iter()
                    .map(|record| (record.uuid, record))
                    .collect(),
            ),
        }
    }

    pub(crate) fn list_products(&self) -> Vec<ProductRecord> {
        let mut products: Vec<_> = self
            .records
            .read()
            .values()
            .filter(|record| record.deleted_at.is_none())
            .cloned()
            .collect();

        products.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.code.cmp(&b.code)));

        products
    }

    pub(crate) fn get_product(&self, uuid: ProductUuid) -> Option<ProductRecord> {
        self.records
            .read()
            .get(&uuid)
            .filter(|record| record.deleted_at.is_none())
            .cloned()
    }

    pub(crate) fn create_product(
        &self,
        product: NewProduct,
        now: Timestamp,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let mut records = self.records.write();

        if records
            .values()
            .any(|record| record.deleted_at.is_none() && record.code == product.code)
        {
            return Err(ProductsServiceError::AlreadyExists);
        }

        let record = ProductRecord {
            uuid: ProductUuid::new(),
            code: product.code,
            name: product.name,
            category: product.category,
            subcategory: product.subcategory,
            size_type: product.size_type,
            dimensions: product.dimensions,
            prices: product.prices,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        records.insert(record.uuid, record.clone());

        Ok(record)
    }

    pub(crate) fn update_product(
        &self,
        uuid: ProductUuid,
        update: ProductUpdate,
        now: Timestamp,
    ) -> Option<ProductRecord> {
        let mut records = self.records.write();
        let record = records
            .get_mut(&uuid)
            .filter(|record| record.deleted_at.is_none())?;

        record.name = update.name;
        record.category = update.category;
        record.subcategory = update.subcategory;
        record.size_type = update.size_type;
        record.dimensions = update.dimensions;
        record.prices = update.prices;
        record.updated_at = now;

        Some(record.clone())
    }

    /// Returns the number of records deleted.
    pub(crate) fn delete_product(&self, uuid: ProductUuid, now: Timestamp) -> u64 {
        match self.records.write().get_mut(&uuid) {
            Some(record) if record.deleted_at.is_none() => {
                record.deleted_at = Some(now);
                1
            }
            _ => 0,
        }
    }
}
