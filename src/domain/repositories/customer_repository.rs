//! Repository trait for customer storage.

use crate::domain::entities::Customer;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns every stored customer ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage backend fails.
    async fn find_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage backend fails.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Inserts or replaces a customer.
    ///
    /// A customer without an id receives a freshly assigned one. The stored
    /// copy is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage backend fails.
    async fn save(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Removes a customer. Returns `false` if nothing was stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the storage backend fails.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
