//! Customer service.

use crate::domain::entities::Customer;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

/// Operations the web layer needs on customers.
///
/// The controller holds this as `Arc<dyn CustomerService>`, so tests can
/// substitute any implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// Lists every customer.
    async fn list_all(&self) -> Result<Vec<Customer>, AppError>;

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this id.
    async fn get_by_id(&self, id: i64) -> Result<Customer, AppError>;

    /// Saves a new customer or updates an existing one.
    ///
    /// Returns the stored customer, with its id assigned.
    async fn save_or_update(&self, customer: Customer) -> Result<Customer, AppError>;

    /// Deletes a customer. Deleting an unknown id is not an error.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

/// [`CustomerService`] backed by a [`CustomerRepository`].
pub struct RepositoryCustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> RepositoryCustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: CustomerRepository + 'static> CustomerService for RepositoryCustomerService<R> {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all().await
    }

    async fn get_by_id(&self, id: i64) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Customer not found", json!({"id": id})))
    }

    async fn save_or_update(&self, customer: Customer) -> Result<Customer, AppError> {
        let is_new = !customer.is_persisted();
        let saved = self.repository.save(customer).await?;

        if is_new {
            tracing::info!(id = ?saved.id, "Customer created");
        } else {
            tracing::info!(id = ?saved.id, "Customer updated");
        }

        Ok(saved)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            tracing::info!(id, "Customer deleted");
        } else {
            tracing::debug!(id, "Delete requested for unknown customer");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;
    use mockall::predicate::eq;

    fn create_test_customer(id: Option<i64>) -> Customer {
        Customer::new(
            id,
            "Imene".to_string(),
            "Smati".to_string(),
            "118 rue Regent".to_string(),
        )
    }

    #[tokio::test]
    async fn test_list_all() {
        let mut mock_repo = MockCustomerRepository::new();

        let customers = vec![create_test_customer(Some(1)), create_test_customer(Some(2))];
        mock_repo
            .expect_find_all()
            .times(1)
            .returning(move || Ok(customers.clone()));

        let service = RepositoryCustomerService::new(Arc::new(mock_repo));

        let result = service.list_all().await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_success() {
        let mut mock_repo = MockCustomerRepository::new();

        let customer = create_test_customer(Some(1));
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(move |_| Ok(Some(customer.clone())));

        let service = RepositoryCustomerService::new(Arc::new(mock_repo));

        let result = service.get_by_id(1).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().first_name, "Imene");
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = RepositoryCustomerService::new(Arc::new(mock_repo));

        let result = service.get_by_id(42).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_save_or_update_returns_stored_customer() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_save()
            .withf(|c| c.id.is_none() && c.first_name == "Imene")
            .times(1)
            .returning(|mut c| {
                c.id = Some(5);
                Ok(c)
            });

        let service = RepositoryCustomerService::new(Arc::new(mock_repo));

        let saved = service
            .save_or_update(create_test_customer(None))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(5));
        assert_eq!(saved.last_name, "Smati");
    }

    #[tokio::test]
    async fn test_delete_unknown_is_ok() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_delete()
            .with(eq(9))
            .times(1)
            .returning(|_| Ok(false));

        let service = RepositoryCustomerService::new(Arc::new(mock_repo));

        assert!(service.delete(9).await.is_ok());
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut mock_repo = MockCustomerRepository::new();

        mock_repo
            .expect_find_all()
            .times(1)
            .returning(|| Err(AppError::internal("Storage unavailable", json!({}))));

        let service = RepositoryCustomerService::new(Arc::new(mock_repo));

        let result = service.list_all().await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }
}
