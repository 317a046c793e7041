//! View resolution.
//!
//! Turns a [`ModelAndView`] into an HTTP response. Redirect views become
//! `302 Found`; template views are rendered by the Askama template
//! registered for their name.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::domain::entities::Customer;
use crate::error::AppError;
use crate::web::controller::{
    CUSTOMER_ATTR, CUSTOMERS_ATTR, FORM_VIEW, LIST_VIEW, PRODUCT_ATTR, SHOW_VIEW,
};
use crate::web::model::{Attribute, Model, ModelAndView, View};

/// Customer table, `templates/customer/list.html`.
#[derive(Template, WebTemplate)]
#[template(path = "customer/list.html")]
pub struct CustomerListTemplate {
    pub customers: Vec<Customer>,
}

/// Single customer details, `templates/customer/show.html`.
#[derive(Template, WebTemplate)]
#[template(path = "customer/show.html")]
pub struct CustomerShowTemplate {
    pub customer: Customer,
}

/// Create/edit form posting to `/customer`, `templates/product/productform.html`.
#[derive(Template, WebTemplate)]
#[template(path = "product/productform.html")]
pub struct CustomerFormTemplate {
    pub product: Customer,
}

/// Renders a controller result.
///
/// # Errors
///
/// Returns [`AppError::Internal`] for an unknown view name or when the
/// model lacks the attribute the template needs.
pub fn render(mav: ModelAndView) -> Result<Response, AppError> {
    let ModelAndView { view, mut model } = mav;

    match view {
        View::Redirect(location) => {
            tracing::debug!(%location, "Redirecting");
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        View::Template(LIST_VIEW) => {
            let customers = take_customers(&mut model, LIST_VIEW, CUSTOMERS_ATTR)?;
            Ok(CustomerListTemplate { customers }.into_response())
        }
        View::Template(SHOW_VIEW) => {
            let customer = take_customer(&mut model, SHOW_VIEW, CUSTOMER_ATTR)?;
            Ok(CustomerShowTemplate { customer }.into_response())
        }
        View::Template(FORM_VIEW) => {
            let product = take_customer(&mut model, FORM_VIEW, PRODUCT_ATTR)?;
            Ok(CustomerFormTemplate { product }.into_response())
        }
        View::Template(other) => Err(AppError::internal(
            "Unknown view",
            json!({"view": other}),
        )),
    }
}

fn take_customer(model: &mut Model, view: &str, name: &str) -> Result<Customer, AppError> {
    match model.take(name) {
        Some(Attribute::Customer(customer)) => Ok(customer),
        _ => Err(missing_attribute(view, name)),
    }
}

fn take_customers(model: &mut Model, view: &str, name: &str) -> Result<Vec<Customer>, AppError> {
    match model.take(name) {
        Some(Attribute::Customers(customers)) => Ok(customers),
        _ => Err(missing_attribute(view, name)),
    }
}

fn missing_attribute(view: &str, name: &str) -> AppError {
    AppError::internal(
        "Model attribute missing for view",
        json!({"view": view, "attribute": name}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn imene() -> Customer {
        Customer::new(
            Some(1),
            "Imene".to_string(),
            "Smati".to_string(),
            "118 rue Regent".to_string(),
        )
    }

    #[test]
    fn test_redirect_response() {
        let response = render(ModelAndView::new(View::redirect("/customer/list"))).unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/customer/list"
        );
    }

    #[test]
    fn test_template_response_ok() {
        let mav = ModelAndView::new(View::template(SHOW_VIEW)).with_attribute(CUSTOMER_ATTR, imene());

        let response = render(mav).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_missing_attribute_is_internal_error() {
        let result = render(ModelAndView::new(View::template(LIST_VIEW)));

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_wrong_attribute_kind_is_internal_error() {
        let mav = ModelAndView::new(View::template(LIST_VIEW)).with_attribute(CUSTOMERS_ATTR, imene());

        assert!(render(mav).is_err());
    }

    #[test]
    fn test_unknown_view() {
        let result = render(ModelAndView::new(View::template("order/list")));

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[test]
    fn test_list_template_renders_rows() {
        let html = CustomerListTemplate {
            customers: vec![imene()],
        }
        .render()
        .unwrap();

        assert!(html.contains("Imene"));
        assert!(html.contains("/customer/show/1"));
        assert!(html.contains("/customer/delete/1"));
    }

    #[test]
    fn test_form_template_for_new_customer() {
        let html = CustomerFormTemplate {
            product: Customer::default(),
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"action="/customer""#));
        assert!(html.contains(r#"name="firstName""#));
        assert!(html.contains(r#"name="addressLine1""#));
    }

    #[test]
    fn test_show_template_escapes_html() {
        let mut customer = imene();
        customer.first_name = "<b>Imene</b>".to_string();

        let html = CustomerShowTemplate { customer }.render().unwrap();

        assert!(!html.contains("<b>Imene</b>"));
    }
}
