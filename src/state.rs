//! Shared application state.

use std::sync::Arc;

use crate::application::services::CustomerService;
use crate::web::controller::CustomerController;

/// State injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub customer_controller: Arc<CustomerController>,
}

impl AppState {
    /// Builds the state around a customer service.
    pub fn new(customer_service: Arc<dyn CustomerService>) -> Self {
        Self {
            customer_controller: Arc::new(CustomerController::new(customer_service)),
        }
    }
}
