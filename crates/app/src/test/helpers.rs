//! Test Helpers

use jiff::{Timestamp, civil::date};
use rust_decimal::Decimal;
use testresult::TestResult;
use salesdesk::{
    catalog::Catalog,
    customers::CustomerField,
    fixtures::{FixtureError, default_catalog},
    form::{SalesForm, SalesSubmission},
    orders::OrderChange,
};

use crate::domain::products::data::NewProduct;

pub(crate) fn demo_catalog() -> Result<Catalog, FixtureError> {
    default_catalog()
}

pub(crate) fn new_product(code: &str) -> NewProduct {
    NewProduct {
        code: code.to_string(),
        name: format!("Producto {code}"),
        category: "Hogar".to_string(),
        subcategory: "Estándar".to_string(),
        size_type: "Individual".to_string(),
        dimensions: "10x10x10 cm".to_string(),
        prices: [("Venezuela".to_string(), Decimal::from(99))]
            .into_iter()
            .collect(),
    }
}

/// A valid one-line Venezuelan order, submitted from the review step.
pub(crate) fn submission() -> TestResult<SalesSubmission> {
    let catalog = demo_catalog()?;
    let mut form = SalesForm::with_date(date(2025, 3, 1));

    for (field, value) in [
        (CustomerField::Identification, "V-12345678"),
        (CustomerField::Name, "María Pérez"),
        (CustomerField::Email, "maria@example.com"),
        (CustomerField::Phone, "+58 412 0000000"),
        (CustomerField::Address, "Av. Principal 1"),
        (CustomerField::Country, "Venezuela"),
        (CustomerField::State, "Miranda"),
        (CustomerField::City, "Baruta"),
    ] {
        form.set_customer_field(field, value);
    }

    form.advance_at(Timestamp::from_millisecond(1_735_689_600_123)?)?;

    form.change_order(OrderChange::Seller("Luis".to_string()));
    form.change_order(OrderChange::SalesChannel("store".to_string()));
    form.change_order(OrderChange::PaymentMethod("cash".to_string()));
    form.select_product(&catalog, "PROD001");
    form.add_line()?;
    form.advance()?;

    Ok(form.submit()?)
}
