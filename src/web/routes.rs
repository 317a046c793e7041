//! Customer route table.

use crate::state::AppState;
use crate::web::handlers::{
    delete_customer_handler, edit_customer_handler, list_customers_handler, new_customer_handler,
    save_customer_handler, show_customer_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Customer pages.
///
/// # Endpoints
///
/// - `GET  /customer/list`        - Customer table
/// - `GET  /customer/show/{id}`   - Customer details
/// - `GET  /product/edit/{id}`    - Edit form for an existing customer
/// - `GET  /product/new`          - Empty customer form
/// - `POST /customer`             - Save form, redirect to the show page
/// - `GET  /customer/delete/{id}` - Delete, redirect to the list
///
/// The edit and new forms live under `/product` while everything else lives
/// under `/customer`; links in the templates rely on these exact paths.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customer/list", get(list_customers_handler))
        .route("/customer/show/{id}", get(show_customer_handler))
        .route("/product/edit/{id}", get(edit_customer_handler))
        .route("/product/new", get(new_customer_handler))
        .route("/customer", post(save_customer_handler))
        .route("/customer/delete/{id}", get(delete_customer_handler))
}
