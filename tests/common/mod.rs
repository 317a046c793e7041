#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use customer_mvc::api::handlers::health_handler;
use customer_mvc::application::services::{CustomerService, RepositoryCustomerService};
use customer_mvc::domain::entities::Customer;
use customer_mvc::error::AppError;
use customer_mvc::infrastructure::persistence::InMemoryCustomerRepository;
use customer_mvc::state::AppState;
use customer_mvc::web::routes::customer_routes;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A service call observed by [`RecordingCustomerService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListAll,
    GetById(i64),
    SaveOrUpdate(Customer),
    Delete(i64),
}

/// Stub service returning canned data and recording every call.
#[derive(Default)]
pub struct RecordingCustomerService {
    calls: Mutex<Vec<Call>>,
    customers: Vec<Customer>,
    by_id: HashMap<i64, Customer>,
    save_result: Option<Customer>,
    failing: bool,
}

impl RecordingCustomerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_customer(mut self, id: i64, customer: Customer) -> Self {
        self.by_id.insert(id, customer);
        self
    }

    pub fn with_save_result(mut self, customer: Customer) -> Self {
        self.save_result = Some(customer);
        self
    }

    /// Every call fails with an internal error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), AppError> {
        self.calls.lock().unwrap().push(call);
        if self.failing {
            return Err(AppError::internal("Storage unavailable", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerService for RecordingCustomerService {
    async fn list_all(&self) -> Result<Vec<Customer>, AppError> {
        self.record(Call::ListAll)?;
        Ok(self.customers.clone())
    }

    async fn get_by_id(&self, id: i64) -> Result<Customer, AppError> {
        self.record(Call::GetById(id))?;
        self.by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Customer not found", json!({"id": id})))
    }

    async fn save_or_update(&self, customer: Customer) -> Result<Customer, AppError> {
        self.record(Call::SaveOrUpdate(customer.clone()))?;
        Ok(self.save_result.clone().unwrap_or(customer))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.record(Call::Delete(id))?;
        Ok(())
    }
}

pub fn imene(id: i64) -> Customer {
    Customer::new(
        Some(id),
        "Imene".to_string(),
        "Smati".to_string(),
        "118 rue Regent".to_string(),
    )
}

pub fn create_test_router(service: Arc<dyn CustomerService>) -> Router {
    Router::new()
        .merge(customer_routes())
        .route("/health", get(health_handler))
        .with_state(AppState::new(service))
}

pub fn create_test_server(service: Arc<RecordingCustomerService>) -> TestServer {
    TestServer::new(create_test_router(service)).unwrap()
}

/// Server backed by the real service over an empty in-memory store.
pub fn create_in_memory_server() -> TestServer {
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let service = Arc::new(RepositoryCustomerService::new(repository));
    TestServer::new(create_test_router(service)).unwrap()
}
