//! Order Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use salesdesk::{form::SalesSubmission, orders::number::OrderNumber};
use serde::{Deserialize, Serialize};

salesdesk::time_ordered_id! {
    /// Order UUID
    pub struct OrderUuid;
}

/// Stored order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub submission: SalesSubmission,
    pub created_at: Timestamp,
}

impl OrderRecord {
    pub fn number(&self) -> &OrderNumber {
        &self.submission.number
    }
}

/// Stored order summary for listings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OrderSummary {
    pub uuid: OrderUuid,
    pub number: OrderNumber,
    pub customer: String,
    pub lines: usize,
    pub total: Decimal,
    pub remaining: Decimal,
    pub created_at: Timestamp,
}

impl From<&OrderRecord> for OrderSummary {
    fn from(record: &OrderRecord) -> Self {
        Self {
            uuid: record.uuid,
            number: record.submission.number.clone(),
            customer: record.submission.customer.name.clone(),
            lines: record.submission.order.lines.len(),
            total: record.submission.total,
            remaining: record.submission.remaining,
            created_at: record.created_at,
        }
    }
}
