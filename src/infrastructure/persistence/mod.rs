//! Repository implementations.
//!
//! - [`InMemoryCustomerRepository`] - Customer storage kept in process memory

pub mod in_memory_customer_repository;

pub use in_memory_customer_repository::InMemoryCustomerRepository;
