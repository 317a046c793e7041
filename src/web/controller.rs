//! Customer controller.
//!
//! Maps each customer route onto a service call and a [`ModelAndView`].
//! Handlers in [`crate::web::handlers`] do the HTTP extraction and hand the
//! result to [`crate::web::views`].
//!
//! | Route                     | Service call       | View                          |
//! |---------------------------|--------------------|-------------------------------|
//! | `GET /customer/list`      | `list_all`         | `customer/list`               |
//! | `GET /customer/show/{id}` | `get_by_id`        | `customer/show`               |
//! | `GET /product/edit/{id}`  | `get_by_id`        | `product/productform`         |
//! | `GET /product/new`        | none               | `product/productform`         |
//! | `POST /customer`          | `save_or_update`   | `redirect:/customer/show/{id}`|
//! | `GET /customer/delete/{id}` | `delete`         | `redirect:/customer/list`     |

use serde_json::json;
use std::sync::Arc;

use crate::application::services::CustomerService;
use crate::domain::entities::Customer;
use crate::error::AppError;
use crate::web::model::{ModelAndView, View};

pub const LIST_VIEW: &str = "customer/list";
pub const SHOW_VIEW: &str = "customer/show";
pub const FORM_VIEW: &str = "product/productform";

pub const CUSTOMERS_ATTR: &str = "customers";
pub const CUSTOMER_ATTR: &str = "customer";
pub const PRODUCT_ATTR: &str = "product";

/// Request-to-view mapping for customers.
pub struct CustomerController {
    customer_service: Arc<dyn CustomerService>,
}

impl CustomerController {
    /// Creates a controller around the given service.
    pub fn new(customer_service: Arc<dyn CustomerService>) -> Self {
        Self { customer_service }
    }

    /// The injected service.
    pub fn service(&self) -> &Arc<dyn CustomerService> {
        &self.customer_service
    }

    /// `GET /customer/list`
    pub async fn list(&self) -> Result<ModelAndView, AppError> {
        let customers = self.customer_service.list_all().await?;

        Ok(ModelAndView::new(View::template(LIST_VIEW)).with_attribute(CUSTOMERS_ATTR, customers))
    }

    /// `GET /customer/show/{id}`
    pub async fn show(&self, id: i64) -> Result<ModelAndView, AppError> {
        let customer = self.customer_service.get_by_id(id).await?;

        Ok(ModelAndView::new(View::template(SHOW_VIEW)).with_attribute(CUSTOMER_ATTR, customer))
    }

    /// `GET /product/edit/{id}`
    pub async fn edit(&self, id: i64) -> Result<ModelAndView, AppError> {
        let customer = self.customer_service.get_by_id(id).await?;

        Ok(ModelAndView::new(View::template(FORM_VIEW)).with_attribute(PRODUCT_ATTR, customer))
    }

    /// `GET /product/new`
    ///
    /// Never touches the service.
    pub fn new_customer(&self) -> ModelAndView {
        ModelAndView::new(View::template(FORM_VIEW)).with_attribute(PRODUCT_ATTR, Customer::default())
    }

    /// `POST /customer`
    ///
    /// Redirects to the show page of whatever id the service assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the service hands back a customer
    /// without an id.
    pub async fn save_or_update(&self, customer: Customer) -> Result<ModelAndView, AppError> {
        let saved = self.customer_service.save_or_update(customer).await?;

        let id = saved.id.ok_or_else(|| {
            AppError::internal("Saved customer has no id", json!({"customer": format!("{saved:?}")}))
        })?;

        Ok(ModelAndView::new(View::redirect(format!("/customer/show/{id}")))
            .with_attribute(CUSTOMER_ATTR, saved))
    }

    /// `GET /customer/delete/{id}`
    pub async fn delete(&self, id: i64) -> Result<ModelAndView, AppError> {
        self.customer_service.delete(id).await?;

        Ok(ModelAndView::new(View::redirect("/customer/list")))
    }
}
