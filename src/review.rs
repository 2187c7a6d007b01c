//! Review
//!
//! Read-only rendering of a sales session for the confirmation step.

use std::io;

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Money, iso};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    customers::Customer,
    form::SalesData,
    orders::{AmountOverflow, Order, PAYMENT_METHODS, SALES_CHANNELS},
};

/// Errors that can occur when rendering a review.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Amount does not fit in minor currency units.
    #[error("amount out of range: {0}")]
    AmountOutOfRange(Decimal),

    /// An order total overflowed.
    #[error(transparent)]
    Amount(#[from] AmountOverflow),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Read-only view over the customer and order.
#[derive(Debug, Clone, Copy)]
pub struct Review<'a> {
    customer: &'a Customer,
    order: &'a Order,
}

impl<'a> Review<'a> {
    /// Review the given sales data.
    pub fn new(data: &'a SalesData) -> Self {
        Self {
            customer: &data.customer,
            order: &data.order,
        }
    }

    /// Customer being reviewed.
    pub fn customer(&self) -> &'a Customer {
        self.customer
    }

    /// Order being reviewed.
    pub fn order(&self) -> &'a Order {
        self.order
    }

    /// Sum of line totals.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the sum does not fit in a [`Decimal`].
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        self.order.total()
    }

    /// Sum of partial payments.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the sum does not fit in a [`Decimal`].
    pub fn paid(&self) -> Result<Decimal, AmountOverflow> {
        self.order.paid()
    }

    /// Total minus payments; negative when overpaid.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when any of the amounts does not fit in a [`Decimal`].
    pub fn remaining(&self) -> Result<Decimal, AmountOverflow> {
        self.order.remaining()
    }

    /// Writes the review to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount cannot be displayed or writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReviewError> {
        write_header(&mut out, self)?;
        write_lines_table(&mut out, self.order)?;
        write_payments(&mut out, self.order)?;
        write_summary(&mut out, self)
    }
}

/// Formats `amount` as US dollars, rounded to cents.
///
/// # Errors
///
/// Returns [`ReviewError::AmountOutOfRange`] when the amount overflows minor units.
pub fn format_amount(amount: Decimal) -> Result<String, ReviewError> {
    let minor = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round_dp(0))
        .and_then(|cents| cents.to_i64())
        .ok_or(ReviewError::AmountOutOfRange(amount))?;

    Ok(Money::from_minor(minor, iso::USD).to_string())
}

fn label_for<'a>(options: &'a [(&'a str, &'a str)], value: &'a str) -> &'a str {
    options
        .iter()
        .find(|(key, _)| *key == value)
        .map_or(value, |&(_, label)| label)
}

fn write_header(out: &mut impl io::Write, review: &Review<'_>) -> Result<(), ReviewError> {
    let customer = review.customer;
    let order = review.order;

    let number = order.number.as_ref().map_or("-", |number| number.as_str());
    let date = order.date.map_or_else(|| "-".to_string(), |date| date.to_string());

    let mut rows = vec![
        ("Order", number.to_string()),
        ("Date", date),
        ("Type", order.order_type.as_str().to_string()),
        ("Seller", order.seller.clone()),
        ("Channel", label_for(&SALES_CHANNELS, &order.sales_channel).to_string()),
        ("Payment", label_for(&PAYMENT_METHODS, &order.payment_method).to_string()),
        ("Customer", format!("{} ({})", customer.name, customer.identification)),
        ("Contact", format!("{} / {}", customer.email, customer.phone)),
        (
            "Location",
            format!("{}, {}, {}", customer.city, customer.state, customer.country),
        ),
        ("Address", customer.address.clone()),
    ];

    if let Some(carrier) = &order.carrier {
        rows.push(("Carrier", carrier.clone()));
    }

    if let Some(delivery) = order.delivery_date {
        rows.push(("Delivery", delivery.to_string()));
    }

    if !order.notes.is_empty() {
        rows.push(("Notes", order.notes.clone()));
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    for (label, value) in rows {
        writeln!(out, " {label:>width$}: {value}").map_err(|_err| ReviewError::IO)?;
    }

    Ok(())
}

fn write_lines_table(out: &mut impl io::Write, order: &Order) -> Result<(), ReviewError> {
    let mut builder = Builder::default();

    builder.push_record(["Code", "Description", "Qty", "Unit Price", "Discount", "Total"]);

    for line in order.lines.iter() {
        let discount = if line.negotiated_discount() {
            format!("{}% *", line.discount().normalize())
        } else {
            format!("{}%", line.discount().normalize())
        };

        builder.push_record([
            line.code().to_string(),
            line.description().to_string(),
            line.quantity().to_string(),
            format_amount(line.unit_price())?,
            discount,
            format_amount(line.total()?)?,
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..6), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReviewError::IO)
}

fn write_payments(out: &mut impl io::Write, order: &Order) -> Result<(), ReviewError> {
    if order.payments.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n Partial payments:").map_err(|_err| ReviewError::IO)?;

    for payment in order.payments.iter() {
        writeln!(out, "   {}  {}", payment.date(), format_amount(payment.amount())?)
            .map_err(|_err| ReviewError::IO)?;
    }

    Ok(())
}

fn write_summary(out: &mut impl io::Write, review: &Review<'_>) -> Result<(), ReviewError> {
    let rows = [
        (" Total:", format_amount(review.total()?)?),
        (" Paid:", format_amount(review.paid()?)?),
        (" Remaining:", format_amount(review.remaining()?)?),
    ];

    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    writeln!(out).map_err(|_err| ReviewError::IO)?;

    for (label, value) in rows {
        writeln!(out, "{label:>label_width$}  {value:>value_width$}")
            .map_err(|_err| ReviewError::IO)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::{
        catalog::{Catalog, test_support::product},
        customers::CustomerField,
        form::SalesForm,
        orders::{OrderChange, payments::PaymentUpdate},
    };

    use super::*;

    fn form() -> TestResult<SalesForm> {
        let catalog = Catalog::with_products([product(
            "PROD001",
            "Producto Premium A",
            &[("Venezuela", 150)],
        )])?;

        let mut form = SalesForm::with_date(date(2025, 3, 1));
        form.set_customer_field(CustomerField::Name, "María Pérez");
        form.set_customer_field(CustomerField::Country, "Venezuela");
        form.change_order(OrderChange::SalesChannel("store".to_string()));
        form.change_order(OrderChange::PaymentMethod("cash".to_string()));
        form.select_product(&catalog, "PROD001");
        form.draft_mut().set_quantity(2);
        form.draft_mut().set_discount(Decimal::TEN);
        form.add_line()?;

        let payment = form.add_payment_on(date(2025, 3, 2));
        form.update_payment(payment, PaymentUpdate::Amount(Decimal::from(70)));

        Ok(form)
    }

    #[test]
    fn format_amount_rounds_to_cents() -> TestResult {
        assert_eq!(format_amount(Decimal::new(245_006, 3))?, "$245.01");
        assert_eq!(format_amount(Decimal::from(100))?, "$100.00");

        Ok(())
    }

    #[test]
    fn format_amount_out_of_range() {
        assert!(matches!(
            format_amount(Decimal::MAX),
            Err(ReviewError::AmountOutOfRange(_))
        ));
    }

    #[test]
    fn totals() -> TestResult {
        let form = form()?;
        let review = form.review();

        assert_eq!(review.total()?, Decimal::from(270));
        assert_eq!(review.paid()?, Decimal::from(70));
        assert_eq!(review.remaining()?, Decimal::from(200));

        Ok(())
    }

    #[test]
    fn overflowing_totals_fail_to_render() -> TestResult {
        let mut form = form()?;
        form.draft_mut().set_product("PROD002", "Producto Estándar B");
        form.draft_mut().set_unit_price(Decimal::MAX);
        form.add_line()?;

        assert_eq!(form.review().total(), Err(AmountOverflow));
        assert!(matches!(
            form.review().write_to(Vec::new()),
            Err(ReviewError::AmountOutOfRange(_))
        ));

        Ok(())
    }

    #[test]
    fn write_to_renders_lines_and_summary() -> TestResult {
        let form = form()?;
        let mut out = Vec::new();

        form.review().write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        assert!(text.contains("PROD001"), "missing line code");
        assert!(text.contains("Producto Premium A"), "missing description");
        assert!(text.contains("$270.00"), "missing total");
        assert!(text.contains("$200.00"), "missing remaining");
        assert!(text.contains("Physical store"), "channel label");
        assert!(text.contains("2025-03-02"), "payment date");

        Ok(())
    }
}
