//! Partial Payments

use jiff::{Zoned, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{ids::PaymentId, orders::AmountOverflow};

/// A scheduled or recorded installment toward the order total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialPayment {
    id: PaymentId,
    amount: Decimal,
    date: Date,
}

impl PartialPayment {
    /// Payment identifier
    pub fn id(&self) -> PaymentId {
        self.id
    }

    /// Amount paid
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Payment date
    pub fn date(&self) -> Date {
        self.date
    }
}

/// A change to one field of a partial payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentUpdate {
    /// New amount
    Amount(Decimal),
    /// New date
    Date(Date),
}

/// Partial payments of an order, in entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartialPayments(Vec<PartialPayment>);

impl PartialPayments {
    /// Append a zero-amount payment dated `date`.
    pub fn add(&mut self, date: Date) -> PaymentId {
        let id = PaymentId::new();

        self.0.push(PartialPayment {
            id,
            amount: Decimal::ZERO,
            date,
        });

        id
    }

    /// Append a zero-amount payment dated today, in the system time zone.
    pub fn add_today(&mut self) -> PaymentId {
        self.add(Zoned::now().date())
    }

    /// Apply `update` to the payment with `id`. Returns `false` if there is no such payment.
    pub fn update(&mut self, id: PaymentId, update: PaymentUpdate) -> bool {
        let Some(payment) = self.0.iter_mut().find(|payment| payment.id == id) else {
            return false;
        };

        match update {
            PaymentUpdate::Amount(amount) => payment.amount = amount,
            PaymentUpdate::Date(date) => payment.date = date,
        }

        true
    }

    /// Remove the payment with `id`. Returns `false` if there is no such payment.
    pub fn remove(&mut self, id: PaymentId) -> bool {
        let before = self.0.len();

        self.0.retain(|payment| payment.id != id);

        self.0.len() != before
    }

    /// Payment with `id`.
    pub fn get(&self, id: PaymentId) -> Option<&PartialPayment> {
        self.0.iter().find(|payment| payment.id == id)
    }

    /// Payments in entry order.
    pub fn iter(&self) -> impl Iterator<Item = &PartialPayment> {
        self.0.iter()
    }

    /// Number of payments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no payments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all payment amounts.
    ///
    /// # Errors
    ///
    /// Returns [`AmountOverflow`] when the sum does not fit in a [`Decimal`].
    pub fn total(&self) -> Result<Decimal, AmountOverflow> {
        self.0.iter().try_fold(Decimal::ZERO, |sum, payment| {
            sum.checked_add(payment.amount).ok_or(AmountOverflow)
        })
    }
}

/// Amount still owed. Negative when payments exceed the total.
///
/// # Errors
///
/// Returns [`AmountOverflow`] when the difference does not fit in a [`Decimal`].
pub fn remaining(order_total: Decimal, paid: Decimal) -> Result<Decimal, AmountOverflow> {
    order_total.checked_sub(paid).ok_or(AmountOverflow)
}
