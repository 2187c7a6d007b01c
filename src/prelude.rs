//! Salesdesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogError, CountryCost, CountryPrice, NewProduct, Product, ProductKey},
    customers::{Customer, CustomerField},
    fixtures::{Fixture, FixtureError, default_catalog, default_locations},
    form::{FormError, SalesData, SalesForm, SalesSubmission, Step},
    ids::{LineId, PaymentId},
    locations::{Country, LocationTable, State},
    orders::{
        Order, OrderChange, OrderType, PAYMENT_METHODS, SALES_CHANNELS,
        lines::{LineDraft, LineUpdate, OrderLine, OrderLines, SelectedProduct},
        number::OrderNumber,
        payments::{PartialPayment, PartialPayments, PaymentUpdate},
    },
    review::{Review, ReviewError, format_amount},
    validation::{Field, FieldErrors, validate_customer, validate_order},
};
