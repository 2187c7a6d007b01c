//! Products Data

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::domain::products::ProductsServiceError;

/// New Product Data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProduct {
    pub code: String,
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub size_type: String,
    pub dimensions: String,
    pub prices: FxHashMap<String, Decimal>,
}

/// Product Update Data
///
/// Replaces every editable field; the code is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub category: String,
    pub subcategory: String,
    pub size_type: String,
    pub dimensions: String,
    pub prices: FxHashMap<String, Decimal>,
}

pub(crate) fn check_fields(
    name: &str,
    category: &str,
    prices: &FxHashMap<String, Decimal>,
) -> Result<(), ProductsServiceError> {
    if name.trim().is_empty() || category.trim().is_empty() {
        return Err(ProductsServiceError::MissingRequiredData);
    }

    if prices.values().any(Decimal::is_sign_negative) {
        return Err(ProductsServiceError::InvalidPrice);
    }

    Ok(())
}
