//! Application services around the sales form: mock authentication, product
//! and order stores, configuration and scripted form sessions.

pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod scripts;

#[cfg(test)]
mod test;
