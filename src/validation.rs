//! Validation
//!
//! Pure checks over the customer and order records. A failed check produces a
//! [`FieldErrors`] map keyed by the first-level field that failed; when several
//! checks fail for the same field, the last one wins.

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    customers::{Customer, CustomerField},
    orders::Order,
};

static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$"));

/// Minimum length of a customer name, in characters.
pub const MIN_NAME_CHARS: usize = 2;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Customer identification
    Identification,
    /// Customer name
    Name,
    /// Customer email
    Email,
    /// Customer phone
    Phone,
    /// Customer address
    Address,
    /// Customer reference
    Reference,
    /// Customer country
    Country,
    /// Customer state
    State,
    /// Customer city
    City,
    /// Order date
    OrderDate,
    /// Order type
    OrderType,
    /// Seller
    Seller,
    /// Sales channel
    SalesChannel,
    /// Payment method
    PaymentMethod,
    /// Carrier
    Carrier,
    /// Delivery date
    DeliveryDate,
    /// Order notes
    Notes,
    /// Order lines
    Products,
    /// Partial payments
    PartialPayments,
}

impl Field {
    /// Field name as used by form clients.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identification => "identification",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::Reference => "reference",
            Self::Country => "country",
            Self::State => "state",
            Self::City => "city",
            Self::OrderDate => "orderDate",
            Self::OrderType => "orderType",
            Self::Seller => "seller",
            Self::SalesChannel => "salesChannel",
            Self::PaymentMethod => "paymentMethod",
            Self::Carrier => "carrier",
            Self::DeliveryDate => "deliveryDate",
            Self::Notes => "notes",
            Self::Products => "products",
            Self::PartialPayments => "partialPayments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CustomerField> for Field {
    fn from(field: CustomerField) -> Self {
        match field {
            CustomerField::Identification => Self::Identification,
            CustomerField::Name => Self::Name,
            CustomerField::Email => Self::Email,
            CustomerField::Phone => Self::Phone,
            CustomerField::Address => Self::Address,
            CustomerField::Reference => Self::Reference,
            CustomerField::Country => Self::Country,
            CustomerField::State => Self::State,
            CustomerField::City => Self::City,
        }
    }
}

/// Field-keyed validation messages, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Record a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Message recorded for `field`.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Whether `field` has a message.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the message for `field`, if any.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    /// Drop all messages.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Fields and their messages, in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Number of fields with a message.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field has a message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Whether `email` looks like a deliverable address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX
        .as_ref()
        .is_ok_and(|regex| regex.is_match(email))
}

fn require(errors: &mut FieldErrors, field: Field, value: &str, message: &str) {
    if value.is_empty() {
        errors.insert(field, message);
    }
}

/// Validate the customer record.
///
/// # Errors
///
/// Returns the [`FieldErrors`] for every field that failed.
pub fn validate_customer(customer: &Customer) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    require(
        &mut errors,
        Field::Identification,
        &customer.identification,
        "Identification is required",
    );

    if customer.name.chars().count() < MIN_NAME_CHARS {
        errors.insert(Field::Name, "Name must be at least 2 characters");
    }

    if !is_valid_email(&customer.email) {
        errors.insert(Field::Email, "Email is not valid");
    }

    require(&mut errors, Field::Phone, &customer.phone, "Phone is required");
    require(&mut errors, Field::Address, &customer.address, "Address is required");
    require(&mut errors, Field::Country, &customer.country, "Country is required");
    require(&mut errors, Field::State, &customer.state, "State is required");
    require(&mut errors, Field::City, &customer.city, "City is required");

    errors.into_result()
}

/// Validate the order record, including its lines and partial payments.
///
/// Carrier and delivery date stay optional for both order types.
///
/// # Errors
///
/// Returns the [`FieldErrors`] for every field that failed.
pub fn validate_order(order: &Order) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    if order.date.is_none() {
        errors.insert(Field::OrderDate, "Order date is required");
    }

    require(&mut errors, Field::Seller, &order.seller, "Seller is required");
    require(
        &mut errors,
        Field::SalesChannel,
        &order.sales_channel,
        "Sales channel is required",
    );
    require(
        &mut errors,
        Field::PaymentMethod,
        &order.payment_method,
        "Payment method is required",
    );

    if order.lines.is_empty() {
        errors.insert(Field::Products, "At least one product must be added");
    }

    for line in order.lines.iter() {
        if line.quantity() < 1 {
            errors.insert(Field::Products, "Quantity must be at least 1");
        }

        if line.unit_price() < Decimal::ZERO {
            errors.insert(Field::Products, "Unit price cannot be negative");
        }

        if line.discount() < Decimal::ZERO || line.discount() > Decimal::ONE_HUNDRED {
            errors.insert(Field::Products, "Discount must be between 0 and 100");
        }
    }

    for payment in order.payments.iter() {
        if payment.amount() < Decimal::ZERO {
            errors.insert(Field::PartialPayments, "Payment amount cannot be negative");
        }
    }

    if order.total().is_err() {
        errors.insert(Field::Products, "Order total is too large");
    } else if order.remaining().is_err() {
        errors.insert(Field::PartialPayments, "Payment total is too large");
    }

    errors.into_result()
}
