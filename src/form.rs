//! Sales Form
//!
//! Three-step order entry session: customer, order and products, review. The
//! form owns the sales data for the lifetime of the session; each step only
//! advances once its record validates.

use jiff::{Timestamp, Zoned, civil::Date};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    catalog::Catalog,
    customers::{Customer, CustomerField},
    ids::{LineId, PaymentId},
    locations::LocationTable,
    orders::{
        AmountOverflow, Order, OrderChange,
        lines::{LineDraft, LineUpdate},
        number::OrderNumber,
        payments::PaymentUpdate,
    },
    review::Review,
    validation::{Field, FieldErrors, validate_customer, validate_order},
};

/// Errors raised by form actions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    /// The current record failed validation.
    #[error(transparent)]
    Validation(#[from] FieldErrors),

    /// Submission is only possible from the review step.
    #[error("orders can only be submitted from the review step")]
    NotOnReview,

    /// A line was added before a product was selected.
    #[error("no product selected")]
    NoProductSelected,

    /// The order number was never generated.
    #[error("order number has not been generated")]
    MissingOrderNumber,

    /// An order amount overflowed.
    #[error(transparent)]
    Amount(#[from] AmountOverflow),
}

/// Form steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    /// Customer details
    Customer = 1,

    /// Order header, products and payments
    Products = 2,

    /// Read-only review
    Review = 3,
}

impl Step {
    /// Number of steps in the form.
    pub const COUNT: u8 = 3;

    /// One-based step number.
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Step title.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Customer => "Customer details",
            Self::Products => "Products and services",
            Self::Review => "Review and confirmation",
        }
    }

    const fn next(self) -> Option<Self> {
        match self {
            Self::Customer => Some(Self::Products),
            Self::Products => Some(Self::Review),
            Self::Review => None,
        }
    }

    const fn previous(self) -> Option<Self> {
        match self {
            Self::Customer => None,
            Self::Products => Some(Self::Customer),
            Self::Review => Some(Self::Products),
        }
    }
}

/// Customer and order captured by one form session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesData {
    /// Customer record
    pub customer: Customer,

    /// Order record
    pub order: Order,
}

/// Owned snapshot of a validated order, ready to hand to an order store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesSubmission {
    /// Generated order number
    pub number: OrderNumber,

    /// Customer record
    pub customer: Customer,

    /// Order record
    pub order: Order,

    /// Sum of line totals
    pub total: Decimal,

    /// Sum of partial payments
    pub paid: Decimal,

    /// Total minus payments
    pub remaining: Decimal,

    /// When the submission was taken
    pub submitted_at: Timestamp,
}

/// Sales order entry session.
#[derive(Debug, Clone)]
pub struct SalesForm {
    step: Step,
    data: SalesData,
    draft: LineDraft,
    errors: FieldErrors,
}

impl Default for SalesForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SalesForm {
    /// A blank form with today's date as the order date.
    pub fn new() -> Self {
        Self::with_date(Zoned::now().date())
    }

    /// A blank form with `date` as the order date.
    pub fn with_date(date: Date) -> Self {
        Self {
            step: Step::Customer,
            data: SalesData {
                customer: Customer::default(),
                order: Order::new(date),
            },
            draft: LineDraft::default(),
            errors: FieldErrors::default(),
        }
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Completion, in percent.
    pub fn progress(&self) -> Decimal {
        (Decimal::from(self.step.number()) * Decimal::ONE_HUNDRED / Decimal::from(Step::COUNT))
            .round_dp(2)
    }

    /// Sales data captured so far.
    pub fn data(&self) -> &SalesData {
        &self.data
    }

    /// Customer record.
    pub fn customer(&self) -> &Customer {
        &self.data.customer
    }

    /// Order record.
    pub fn order(&self) -> &Order {
        &self.data.order
    }

    /// Errors from the last failed step validation.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Line draft.
    pub fn draft(&self) -> &LineDraft {
        &self.draft
    }

    /// Line draft, for editing quantity, price, discount and flag.
    pub fn draft_mut(&mut self) -> &mut LineDraft {
        &mut self.draft
    }

    /// Set a customer field, clearing any pending error for it.
    pub fn set_customer_field(&mut self, field: CustomerField, value: impl Into<String>) {
        self.data.customer.set(field, value);
        self.errors.remove(field.into());
    }

    /// Change an order header field, clearing any pending error for it.
    pub fn change_order(&mut self, change: OrderChange) {
        self.errors.remove(change.field());
        self.data.order.apply(change);
    }

    /// States available for the customer's country.
    pub fn available_states<'a>(&self, locations: &'a LocationTable) -> Vec<&'a str> {
        locations.states(&self.data.customer.country).collect()
    }

    /// Cities available for the customer's country and state.
    pub fn available_cities<'a>(&self, locations: &'a LocationTable) -> &'a [String] {
        locations.cities(&self.data.customer.country, &self.data.customer.state)
    }

    /// Select a catalog product for the next line.
    ///
    /// Unknown codes, or an unset customer country, leave the draft unchanged.
    pub fn select_product(&mut self, catalog: &Catalog, code: &str) -> bool {
        self.draft.select(catalog, code, &self.data.customer.country)
    }

    /// Commit the draft as a new line.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::NoProductSelected`] when no product is selected.
    pub fn add_line(&mut self) -> Result<LineId, FormError> {
        let id = self
            .data
            .order
            .lines
            .commit(&mut self.draft)
            .ok_or(FormError::NoProductSelected)?;

        self.errors.remove(Field::Products);

        Ok(id)
    }

    /// Update one field of a line. Returns `false` for an unknown id.
    pub fn update_line(&mut self, id: LineId, update: LineUpdate) -> bool {
        self.data.order.lines.update(id, update)
    }

    /// Remove a line. Returns `false` for an unknown id.
    pub fn remove_line(&mut self, id: LineId) -> bool {
        self.data.order.lines.remove(id)
    }

    /// Add a zero-amount partial payment dated today.
    pub fn add_payment(&mut self) -> PaymentId {
        self.data.order.payments.add_today()
    }

    /// Add a zero-amount partial payment dated `date`.
    pub fn add_payment_on(&mut self, date: Date) -> PaymentId {
        self.data.order.payments.add(date)
    }

    /// Update a partial payment. Returns `false` for an unknown id.
    pub fn update_payment(&mut self, id: PaymentId, update: PaymentUpdate) -> bool {
        self.data.order.payments.update(id, update)
    }

    /// Remove a partial payment. Returns `false` for an unknown id.
    pub fn remove_payment(&mut self, id: PaymentId) -> bool {
        self.data.order.payments.remove(id)
    }

    /// Validate the current step and move to the next one.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] when the current step's record is
    /// invalid. The errors are also kept on the form and the step is unchanged.
    pub fn advance(&mut self) -> Result<Step, FormError> {
        self.advance_at(Timestamp::now())
    }

    /// [`SalesForm::advance`] with an explicit clock reading for the order number.
    ///
    /// # Errors
    ///
    /// See [`SalesForm::advance`].
    pub fn advance_at(&mut self, now: Timestamp) -> Result<Step, FormError> {
        let result = match self.step {
            Step::Customer => validate_customer(&self.data.customer),
            Step::Products => validate_order(&self.data.order),
            Step::Review => return Ok(self.step),
        };

        if let Err(errors) = result {
            debug!(step = self.step.number(), failed = errors.len(), "step validation failed");

            self.errors = errors.clone();

            return Err(FormError::Validation(errors));
        }

        self.errors.clear();

        if self.step == Step::Customer {
            let number = OrderNumber::generate(&self.data.customer.country, now);

            debug!(%number, "order number generated");

            self.data.order.number = Some(number);
        }

        if let Some(next) = self.step.next() {
            self.step = next;
        }

        debug!(step = self.step.number(), "advanced");

        Ok(self.step)
    }

    /// Move back one step, without validation.
    pub fn retreat(&mut self) -> Step {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }

        self.step
    }

    /// Read-only view of the order for the review step.
    pub fn review(&self) -> Review<'_> {
        Review::new(&self.data)
    }

    /// Take an owned snapshot of the order for submission.
    ///
    /// Nothing is persisted here; the caller hands the snapshot to an order store.
    ///
    /// # Errors
    ///
    /// - [`FormError::NotOnReview`] when the form is not on the review step.
    /// - [`FormError::Validation`] when either record no longer validates.
    /// - [`FormError::MissingOrderNumber`] when no order number was generated.
    pub fn submit(&self) -> Result<SalesSubmission, FormError> {
        self.submit_at(Timestamp::now())
    }

    /// [`SalesForm::submit`] with an explicit submission time.
    ///
    /// # Errors
    ///
    /// See [`SalesForm::submit`].
    pub fn submit_at(&self, now: Timestamp) -> Result<SalesSubmission, FormError> {
        if self.step != Step::Review {
            return Err(FormError::NotOnReview);
        }

        validate_customer(&self.data.customer)?;
        validate_order(&self.data.order)?;

        let number = self
            .data
            .order
            .number
            .clone()
            .ok_or(FormError::MissingOrderNumber)?;

        let order = &self.data.order;
        let total = order.total()?;

        info!(%number, lines = order.lines.len(), %total, "order submitted");

        Ok(SalesSubmission {
            number,
            customer: self.data.customer.clone(),
            order: order.clone(),
            total,
            paid: order.paid()?,
            remaining: order.remaining()?,
            submitted_at: now,
        })
    }
}
