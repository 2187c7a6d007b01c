//! Authentication

mod errors;
mod models;
mod service;
pub mod session;
mod store;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use session::{SESSION_FILE, SessionStore};
pub use store::UserStore;
