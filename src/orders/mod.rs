//! Orders

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    orders::{lines::OrderLines, number::OrderNumber, payments::PartialPayments},
    validation::Field,
};

pub mod lines;
pub mod number;
pub mod payments;

/// An order amount does not fit in a [`Decimal`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("order amount overflowed")]
pub struct AmountOverflow;

/// Known sales channels as `(value, label)` pairs.
pub const SALES_CHANNELS: [(&str, &str); 6] = [
    ("online", "Online"),
    ("store", "Physical store"),
    ("phone", "Phone"),
    ("whatsapp", "WhatsApp"),
    ("social", "Social media"),
    ("referral", "Referral"),
];

/// Known payment methods as `(value, label)` pairs.
pub const PAYMENT_METHODS: [(&str, &str); 8] = [
    ("cash", "Cash"),
    ("credit_card", "Credit card"),
    ("debit_card", "Debit card"),
    ("bank_transfer", "Bank transfer"),
    ("mobile_payment", "Mobile payment"),
    ("check", "Check"),
    ("crypto", "Cryptocurrency"),
    ("financing", "Financing"),
];

/// Order fulfilment type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Delivered straight away
    #[default]
    Immediate,

    /// Reserved for later delivery
    Reservation,
}

impl OrderType {
    /// Wire value of the order type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::Reservation => "reservation",
        }
    }
}

/// Order record captured in the second step of the sales form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order date
    pub date: Option<Date>,

    /// Generated order number, set once the customer step passes
    pub number: Option<OrderNumber>,

    /// Fulfilment type
    pub order_type: OrderType,

    /// Seller name
    pub seller: String,

    /// Sales channel, see [`SALES_CHANNELS`]
    pub sales_channel: String,

    /// Payment method, see [`PAYMENT_METHODS`]
    pub payment_method: String,

    /// Carrier, optional regardless of order type
    pub carrier: Option<String>,

    /// Delivery date, optional regardless of order type
    pub delivery_date: Option<Date>,

    /// Free-form notes
    pub notes: String,

    /// Committed lines
    pub lines: OrderLines,

    /// Partial payments
    pub payments: PartialPayments,
}

impl Order {
    /// A blank immediate order dated `date`.
    pub fn new(date: Date) -> Self {
        Self {
            date: Some(date),
            number: None,
            order_type: OrderType::Immediate,
            seller: String::new(),
            sales_channel: String::new(),
            payment_method: String::new(),
            carrier: None,
            delivery_date: None,
            notes: String::new(),
            lines: OrderLines::default(),
            payments: PartialPayments::default(),
        }
    }

    /// Sum of line totals.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the sum does not fit in a [`Decimal`].
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        self.lines.total()
    }

    /// Sum of partial payments.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the sum does not fit in a [`Decimal`].
    pub fn paid(&self) -> Result<Decimal, AmountOverflow> {
        self.payments.total()
    }

    /// Total minus payments, without a floor at zero.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when any of the amounts does not fit in a [`Decimal`].
    pub fn remaining(&self) -> Result<Decimal, AmountOverflow> {
        payments::remaining(self.total()?, self.paid()?)
    }

    /// Apply a single field change.
    pub fn apply(&mut self, change: OrderChange) {
        match change {
            OrderChange::Date(date) => self.date = date,
            OrderChange::Type(order_type) => self.order_type = order_type,
            OrderChange::Seller(seller) => self.seller = seller,
            OrderChange::SalesChannel(channel) => self.sales_channel = channel,
            OrderChange::PaymentMethod(method) => self.payment_method = method,
            OrderChange::Carrier(carrier) => self.carrier = carrier,
            OrderChange::DeliveryDate(date) => self.delivery_date = date,
            OrderChange::Notes(notes) => self.notes = notes,
        }
    }
}

/// A change to one order header field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderChange {
    /// Order date
    Date(Option<Date>),
    /// Order type
    Type(OrderType),
    /// Seller
    Seller(String),
    /// Sales channel
    SalesChannel(String),
    /// Payment method
    PaymentMethod(String),
    /// Carrier
    Carrier(Option<String>),
    /// Delivery date
    DeliveryDate(Option<Date>),
    /// Notes
    Notes(String),
}

impl OrderChange {
    /// The form field this change targets.
    pub fn field(&self) -> Field {
        match self {
            Self::Date(_) => Field::OrderDate,
            Self::Type(_) => Field::OrderType,
            Self::Seller(_) => Field::Seller,
            Self::SalesChannel(_) => Field::SalesChannel,
            Self::PaymentMethod(_) => Field::PaymentMethod,
            Self::Carrier(_) => Field::Carrier,
            Self::DeliveryDate(_) => Field::DeliveryDate,
            Self::Notes(_) => Field::Notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_order_defaults() -> TestResult {
        let order = Order::new(date(2025, 3, 1));

        assert_eq!(order.date, Some(date(2025, 3, 1)));
        assert_eq!(order.order_type, OrderType::Immediate);
        assert!(order.number.is_none());
        assert_eq!(order.total()?, Decimal::ZERO);
        assert_eq!(order.remaining()?, Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn huge_payments_overflow_remaining() -> TestResult {
        let mut order = Order::new(date(2025, 3, 1));
        let id = order.payments.add(date(2025, 3, 1));
        order.payments.update(id, payments::PaymentUpdate::Amount(Decimal::MIN));

        assert_eq!(order.paid()?, Decimal::MIN);
        assert_eq!(order.remaining(), Ok(Decimal::MAX));

        let id = order.payments.add(date(2025, 3, 2));
        order.payments.update(id, payments::PaymentUpdate::Amount(Decimal::MIN));

        assert_eq!(order.remaining(), Err(AmountOverflow));

        Ok(())
    }

    #[test]
    fn apply_changes() {
        let mut order = Order::new(date(2025, 3, 1));

        order.apply(OrderChange::Type(OrderType::Reservation));
        order.apply(OrderChange::Seller("Luis".to_string()));
        order.apply(OrderChange::DeliveryDate(Some(date(2025, 4, 1))));
        order.apply(OrderChange::Date(None));

        assert_eq!(order.order_type, OrderType::Reservation);
        assert_eq!(order.seller, "Luis");
        assert_eq!(order.delivery_date, Some(date(2025, 4, 1)));
        assert!(order.date.is_none());
    }

    #[test]
    fn change_fields() {
        assert_eq!(OrderChange::Notes(String::new()).field(), Field::Notes);
        assert_eq!(OrderChange::Type(OrderType::Immediate).field(), Field::OrderType);
    }

    #[test]
    fn order_type_wire_values() {
        assert_eq!(OrderType::Immediate.as_str(), "immediate");
        assert_eq!(OrderType::Reservation.as_str(), "reservation");
    }
}
