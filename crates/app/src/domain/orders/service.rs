//! Orders service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use parking_lot::RwLock;
use salesdesk::form::SalesSubmission;
use tracing::info;

use crate::domain::orders::{
    errors::OrdersServiceError,
    records::{OrderRecord, OrderSummary, OrderUuid},
};

/// Order store kept in process memory, in submission order.
#[derive(Debug, Default)]
pub struct InMemoryOrdersService {
    orders: RwLock<Vec<OrderRecord>>,
}

#[async_trait]
impl OrdersService for InMemoryOrdersService {
    async fn create_order(
        &self,
        submission: SalesSubmission,
    ) -> Result<OrderRecord, OrdersServiceError> {
        let mut orders = self.orders.write();

        if orders
            .iter()
            .any(|order| order.submission.number == submission.number)
        {
            return Err(OrdersServiceError::AlreadyExists);
        }

        let record = OrderRecord {
            uuid: OrderUuid::new(),
            submission,
            created_at: Timestamp::now(),
        };

        info!(uuid = %record.uuid, number = %record.number(), "order stored");

        orders.push(record.clone());

        Ok(record)
    }

    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError> {
        self.orders
            .read()
            .iter()
            .find(|record| record.uuid == order)
            .cloned()
            .ok_or(OrdersServiceError::NotFound)
    }

    async fn list_orders(&self) -> Result<Vec<OrderSummary>, OrdersServiceError> {
        Ok(self.orders.read().iter().map(OrderSummary::from).collect())
    }
}

#[automock]
#[async_trait]
pub trait OrdersService: Send + Sync {
    /// Stores a submitted order. Order numbers are unique.
    ///
    /// The number suffix wraps every 1,000 seconds, so two valid submissions
    /// made that far apart for the same country prefix collide and the second
    /// is rejected with [`OrdersServiceError::AlreadyExists`].
    async fn create_order(
        &self,
        submission: SalesSubmission,
    ) -> Result<OrderRecord, OrdersServiceError>;

    /// Retrieve a single order.
    async fn get_order(&self, order: OrderUuid) -> Result<OrderRecord, OrdersServiceError>;

    /// Summaries of all stored orders, oldest first.
    async fn list_orders(&self) -> Result<Vec<OrderSummary>, OrdersServiceError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salesdesk::orders::number::OrderNumber;
    use testresult::TestResult;

    use crate::test::helpers::submission;

    use super::*;

    #[tokio::test]
    async fn create_then_get_order() -> TestResult {
        let orders = InMemoryOrdersService::default();

        let created = orders.create_order(submission()?).await?;
        let fetched = orders.get_order(created.uuid).await?;

        assert_eq!(fetched, created);
        assert_eq!(fetched.submission.total, Decimal::from(150));

        Ok(())
    }

    #[tokio::test]
    async fn duplicate_numbers_are_rejected() -> TestResult {
        let orders = InMemoryOrdersService::default();
        let submission = submission()?;

        orders.create_order(submission.clone()).await?;

        assert_eq!(
            orders.create_order(submission).await,
            Err(OrdersServiceError::AlreadyExists)
        );

        Ok(())
    }

    #[tokio::test]
    async fn suffix_wraparound_collides() -> TestResult {
        let orders = InMemoryOrdersService::default();

        let mut first = submission()?;
        first.number = OrderNumber::generate("Venezuela", Timestamp::from_millisecond(42)?);

        let mut later = submission()?;
        later.number =
            OrderNumber::generate("Venezuela", Timestamp::from_millisecond(1_000_042)?);

        assert_eq!(first.number, later.number);

        orders.create_order(first).await?;

        assert_eq!(
            orders.create_order(later).await,
            Err(OrdersServiceError::AlreadyExists)
        );

        Ok(())
    }

    #[tokio::test]
    async fn list_orders_summarises_in_submission_order() -> TestResult {
        let orders = InMemoryOrdersService::default();

        let first = orders.create_order(submission()?).await?;

        let mut second = submission()?;
        second.number = OrderNumber::generate("Colombia", Timestamp::from_millisecond(1)?);
        let second = orders.create_order(second).await?;

        let summaries = orders.list_orders().await?;

        assert_eq!(
            summaries.iter().map(|s| s.uuid).collect::<Vec<_>>(),
            [first.uuid, second.uuid]
        );
        assert_eq!(summaries.first().map(|s| s.lines), Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() -> TestResult {
        let orders = InMemoryOrdersService::default();

        assert_eq!(
            orders.get_order(OrderUuid::new()).await,
            Err(OrdersServiceError::NotFound)
        );

        Ok(())
    }
}
