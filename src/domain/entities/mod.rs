//! Core domain entities.
//!
//! Entities are plain data structures without business logic.
//!
//! - [`Customer`] - A customer with a name and a postal address line

pub mod customer;

pub use customer::Customer;
