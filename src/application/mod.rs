//! Application layer services.
//!
//! Services consume repository traits and expose the operations HTTP
//! handlers need.
//!
//! - [`services::customer_service::CustomerService`] - Customer listing, lookup, save and delete

pub mod services;
