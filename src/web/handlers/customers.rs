//! Customer page handlers.
//!
//! Each handler extracts path or form input, delegates to
//! [`crate::web::controller::CustomerController`] and renders the result
//! through [`crate::web::views::render`].

use axum::{
    Form,
    extract::{Path, State},
    response::Response,
};

use crate::domain::entities::Customer;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::form::CustomerForm;
use crate::web::views::render;

/// Lists all customers.
///
/// # Endpoint
///
/// `GET /customer/list`
pub async fn list_customers_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    render(state.customer_controller.list().await?)
}

/// Shows a single customer.
///
/// # Endpoint
///
/// `GET /customer/show/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the customer does not exist.
pub async fn show_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    render(state.customer_controller.show(id).await?)
}

/// Renders the form pre-filled with an existing customer.
///
/// # Endpoint
///
/// `GET /product/edit/{id}`
pub async fn edit_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    render(state.customer_controller.edit(id).await?)
}

/// Renders an empty form.
///
/// # Endpoint
///
/// `GET /product/new`
pub async fn new_customer_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    render(state.customer_controller.new_customer())
}

/// Saves a new or existing customer and redirects to its page.
///
/// # Endpoint
///
/// `POST /customer` (`application/x-www-form-urlencoded`)
///
/// # Errors
///
/// Returns 400 if `id` is present but not an integer.
pub async fn save_customer_handler(
    State(state): State<AppState>,
    Form(form): Form<CustomerForm>,
) -> Result<Response, AppError> {
    let customer = Customer::try_from(form)?;
    render(state.customer_controller.save_or_update(customer).await?)
}

/// Deletes a customer and redirects to the list.
///
/// # Endpoint
///
/// `GET /customer/delete/{id}`
pub async fn delete_customer_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    render(state.customer_controller.delete(id).await?)
}
