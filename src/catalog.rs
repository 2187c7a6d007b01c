//! Catalog
//!
//! Static list of sellable products with per-country price and cost.

use jiff::civil::Date;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::info;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two products share the same code.
    #[error("duplicate product code: {0}")]
    DuplicateCode(String),
}

/// Price of a product in one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPrice {
    /// Sale price
    pub price: Decimal,

    /// Date the price takes effect
    pub effective_date: Date,
}

/// Cost of a product in one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCost {
    /// Unit cost
    pub cost: Decimal,

    /// Date the cost takes effect
    pub effective_date: Date,
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product code
    pub code: String,

    /// Description shown on order lines
    pub description: String,

    /// Package dimensions
    pub dimension: String,

    /// Category
    pub category: String,

    /// Subcategory
    pub subcategory: String,

    /// Price by country name
    pub prices: FxHashMap<String, CountryPrice>,

    /// Cost by country name
    pub costs: FxHashMap<String, CountryCost>,
}

impl Product {
    /// Sale price in `country`, if listed.
    pub fn price_in(&self, country: &str) -> Option<Decimal> {
        self.prices.get(country).map(|price| price.price)
    }

    /// Unit cost in `country`, if listed.
    pub fn cost_in(&self, country: &str) -> Option<Decimal> {
        self.costs.get(country).map(|cost| cost.cost)
    }

    fn matches(&self, needle: &str) -> bool {
        self.description.to_lowercase().contains(needle)
            || self.code.to_lowercase().contains(needle)
    }
}

/// Product draft entered from the order screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product code
    pub code: String,

    /// Description
    pub description: String,

    /// Package dimensions
    pub dimension: String,

    /// Category
    pub category: String,

    /// Subcategory
    pub subcategory: String,
}

/// In-memory product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: SlotMap<ProductKey, Product>,
    codes: FxHashMap<String, ProductKey>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCode`] if two products share a code.
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for product in products {
            if catalog.codes.contains_key(&product.code) {
                return Err(CatalogError::DuplicateCode(product.code));
            }

            let code = product.code.clone();
            let key = catalog.products.insert(product);

            catalog.codes.insert(code, key);
        }

        Ok(catalog)
    }

    /// Look up a product by code.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.codes
            .get(code)
            .and_then(|key| self.products.get(*key))
    }

    /// Sale price of `code` in `country`.
    pub fn price_for(&self, code: &str, country: &str) -> Option<Decimal> {
        self.get(code).and_then(|product| product.price_in(country))
    }

    /// Unit cost of `code` in `country`.
    pub fn cost_for(&self, code: &str, country: &str) -> Option<Decimal> {
        self.get(code).and_then(|product| product.cost_in(country))
    }

    /// All products, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Products whose description or code contains `term`, ignoring case.
    ///
    /// An empty term matches everything.
    pub fn search(&self, term: &str) -> SmallVec<[&Product; 8]> {
        let needle = term.trim().to_lowercase();

        self.iter()
            .filter(|product| product.matches(&needle))
            .collect()
    }

    /// Record a product draft entered from the order screen.
    ///
    /// The draft is logged and handed back. It is neither persisted nor added
    /// to this catalog.
    pub fn create(&self, draft: NewProduct) -> NewProduct {
        info!(
            code = %draft.code,
            description = %draft.description,
            category = %draft.category,
            "product creation requested from order screen; not persisted"
        );

        draft
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use rustc_hash::FxHashMap;

    use super::{CountryCost, CountryPrice, Product};

    /// Builds a product priced in the given countries.
    pub(crate) fn product(code: &str, description: &str, prices: &[(&str, i64)]) -> Product {
        let effective_date = date(2024, 1, 1);

        let prices: FxHashMap<_, _> = prices
            .iter()
            .map(|(country, price)| {
                (
                    (*country).to_string(),
                    CountryPrice {
                        price: Decimal::from(*price),
                        effective_date,
                    },
                )
            })
            .collect();

        let costs = prices
            .iter()
            .map(|(country, price)| {
                (
                    country.clone(),
                    CountryCost {
                        cost: price.price / Decimal::TWO,
                        effective_date,
                    },
                )
            })
            .collect();

        Product {
            code: code.to_string(),
            description: description.to_string(),
            dimension: "30x20x10 cm".to_string(),
            category: "Hogar".to_string(),
            subcategory: "Estándar".to_string(),
            prices,
            costs,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{test_support::product, *};

    fn catalog() -> Result<Catalog, CatalogError> {
        Catalog::with_products([
            product("PROD001", "Producto Premium A", &[("Venezuela", 150), ("Colombia", 180)]),
            product("PROD003", "Colchon", &[("Venezuela", 380)]),
        ])
    }

    #[test]
    fn get_by_code() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(catalog.get("PROD003").map(|p| p.description.as_str()), Some("Colchon"));
        assert!(catalog.get("PROD999").is_none());

        Ok(())
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let result = Catalog::with_products([
            product("PROD001", "A", &[]),
            product("PROD001", "B", &[]),
        ]);

        assert_eq!(result.err(), Some(CatalogError::DuplicateCode("PROD001".to_string())));
    }

    #[test]
    fn price_and_cost_by_country() -> TestResult {
        let catalog = catalog()?;

        assert_eq!(catalog.price_for("PROD001", "Colombia"), Some(Decimal::from(180)));
        assert_eq!(catalog.cost_for("PROD001", "Colombia"), Some(Decimal::from(90)));
        assert_eq!(catalog.price_for("PROD003", "Colombia"), None);
        assert_eq!(catalog.price_for("PROD999", "Colombia"), None);

        Ok(())
    }

    #[test]
    fn search_matches_description_or_code_ignoring_case() -> TestResult {
        let catalog = catalog()?;

        let by_description = catalog.search("colch");
        let by_code = catalog.search("prod001");

        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description.first().map(|p| p.code.as_str()), Some("PROD003"));
        assert_eq!(by_code.first().map(|p| p.code.as_str()), Some("PROD001"));
        assert_eq!(catalog.search("").len(), 2);
        assert!(catalog.search("sofa").is_empty());

        Ok(())
    }

    #[test]
    fn create_does_not_touch_the_catalog() -> TestResult {
        let catalog = catalog()?;

        let draft = NewProduct {
            code: "PROD004".to_string(),
            description: "Almohada".to_string(),
            ..NewProduct::default()
        };

        let returned = catalog.create(draft.clone());

        assert_eq!(returned, draft);
        assert!(catalog.get("PROD004").is_none());
        assert_eq!(catalog.len(), 2);

        Ok(())
    }

    #[test]
    fn iterates_in_insertion_order() -> TestResult {
        let catalog = catalog()?;

        let codes: Vec<_> = catalog.iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, ["PROD001", "PROD003"]);

        Ok(())
    }
}
