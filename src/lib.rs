//! # Customer MVC
//!
//! A small server-rendered customer management service built with Axum and
//! Askama.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Customer` entity and the storage trait
//! - **Application Layer** ([`application`]) - The customer service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage
//! - **Web Layer** ([`web`]) - Controller, route table, form binding and views
//! - **API Layer** ([`api`]) - Health endpoint and tracing middleware
//!
//! A request flows through the route table to a handler, which asks
//! [`web::controller::CustomerController`] for a [`web::model::ModelAndView`]
//! and renders it with [`web::views::render`].
//!
//! ## Quick Start
//!
//! ```bash
//! export SEED_SAMPLE_DATA=true  # Optional
//! cargo run
//! # open http://localhost:8080/customer/list
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CustomerService, RepositoryCustomerService};
    pub use crate::domain::entities::Customer;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::web::model::{Attribute, Model, ModelAndView, View};
}
