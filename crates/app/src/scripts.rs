//! Scripted form sessions
//!
//! A YAML document describing what a seller would type into each step. The
//! script is replayed through [`SalesForm`] so it goes through the same cascade,
//! pricing and validation as interactive entry.

use jiff::civil::Date;
use rust_decimal::Decimal;
use salesdesk::{
    catalog::Catalog,
    customers::{Customer, CustomerField},
    form::{FormError, SalesForm, Step},
    orders::{OrderChange, OrderType, payments::PaymentUpdate},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    context::AppContext,
    domain::orders::{OrdersServiceError, records::OrderRecord},
};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to parse session script")]
    Yaml(#[from] serde_norway::Error),

    #[error("unknown product code or no customer country: {0}")]
    UnknownProduct(String),

    #[error("step {} rejected", .step.number())]
    Rejected { step: Step, source: FormError },

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("sign in first")]
    NotSignedIn,

    #[error("failed to store order")]
    Store(#[from] OrdersServiceError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderHeaderScript {
    pub order_type: OrderType,
    pub seller: String,
    pub sales_channel: String,
    pub payment_method: String,
    pub carrier: Option<String>,
    pub delivery_date: Option<Date>,
    pub notes: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineScript {
    pub code: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Overrides the country price when set
    #[serde(default)]
    pub unit_price: Option<Decimal>,

    #[serde(default)]
    pub discount: Decimal,

    #[serde(default)]
    pub negotiated_discount: bool,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentScript {
    pub amount: Decimal,

    /// Defaults to today
    #[serde(default)]
    pub date: Option<Date>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderScript {
    /// Order date; defaults to today
    #[serde(default)]
    pub date: Option<Date>,

    pub customer: Customer,

    #[serde(default)]
    pub order: OrderHeaderScript,

    #[serde(default)]
    pub lines: Vec<LineScript>,

    #[serde(default)]
    pub payments: Vec<PaymentScript>,
}

impl OrderScript {
    /// Parse a script from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid script.
    pub fn from_yaml(contents: &str) -> Result<Self, ScriptError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Drive a fresh form through both entry steps, ending on review.
    ///
    /// # Errors
    ///
    /// - [`ScriptError::Rejected`] when a step fails validation; the form's
    ///   errors hold the field messages.
    /// - [`ScriptError::UnknownProduct`] when a line cannot be selected.
    pub fn replay(&self, catalog: &Catalog) -> Result<SalesForm, ScriptError> {
        let mut form = self.date.map_or_else(SalesForm::new, SalesForm::with_date);

        for field in CustomerField::ALL {
            form.set_customer_field(field, self.customer.get(field));
        }

        advance(&mut form)?;

        let header = &self.order;

        for change in [
            OrderChange::Type(header.order_type),
            OrderChange::Seller(header.seller.clone()),
            OrderChange::SalesChannel(header.sales_channel.clone()),
            OrderChange::PaymentMethod(header.payment_method.clone()),
            OrderChange::Carrier(header.carrier.clone()),
            OrderChange::DeliveryDate(header.delivery_date),
            OrderChange::Notes(header.notes.clone()),
        ] {
            form.change_order(change);
        }

        for line in &self.lines {
            if !form.select_product(catalog, &line.code) {
                return Err(ScriptError::UnknownProduct(line.code.clone()));
            }

            let draft = form.draft_mut();
            draft.set_quantity(line.quantity);
            draft.set_discount(line.discount);
            draft.set_negotiated_discount(line.negotiated_discount);

            if let Some(unit_price) = line.unit_price {
                draft.set_unit_price(unit_price);
            }

            form.add_line()?;
        }

        for payment in &self.payments {
            let id = match payment.date {
                Some(date) => form.add_payment_on(date),
                None => form.add_payment(),
            };

            form.update_payment(id, PaymentUpdate::Amount(payment.amount));
        }

        advance(&mut form)?;

        debug!(lines = self.lines.len(), payments = self.payments.len(), "script replayed");

        Ok(form)
    }
}

/// A replayed form and the order it produced.
#[derive(Debug)]
pub struct StoredOrder {
    pub form: SalesForm,
    pub record: OrderRecord,
}

impl OrderScript {
    /// Replay the script for the signed-in user, submit it and store the order.
    ///
    /// # Errors
    ///
    /// - [`ScriptError::NotSignedIn`] when nobody is signed in.
    /// - Any replay error, see [`OrderScript::replay`].
    /// - [`ScriptError::Store`] when the order store rejects the submission.
    pub async fn submit(&self, app: &AppContext) -> Result<StoredOrder, ScriptError> {
        let user = app.auth.current_user().ok_or(ScriptError::NotSignedIn)?;

        let form = self.replay(&app.catalog)?;
        let submission = form.submit()?;

        debug!(seller = %user.email, number = %submission.number, "submitting scripted order");

        let record = app.orders.create_order(submission).await?;

        Ok(StoredOrder { form, record })
    }
}

fn advance(form: &mut SalesForm) -> Result<(), ScriptError> {
    let step = form.step();

    form.advance()
        .map(|_| ())
        .map_err(|source| ScriptError::Rejected { step, source })
}
