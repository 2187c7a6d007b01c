//! Products service errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid price value")]
    InvalidPrice,
}
