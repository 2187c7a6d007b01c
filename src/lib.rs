//! Salesdesk
//!
//! Salesdesk is a multi-step sales order entry engine: customer capture with a
//! country, state and city cascade, order lines priced per country from a static
//! catalog, partial payments, and a read-only review before submission.

pub mod catalog;
pub mod customers;
pub mod fixtures;
pub mod form;
pub mod ids;
pub mod locations;
pub mod orders;
pub mod prelude;
pub mod review;
pub mod validation;
