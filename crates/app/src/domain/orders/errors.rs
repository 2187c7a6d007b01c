//! Orders service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrdersServiceError {
    #[error("order already exists")]
    AlreadyExists,

    #[error("order not found")]
    NotFound,
}
