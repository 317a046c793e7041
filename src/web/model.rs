//! View selection and model attributes produced by the controller.
//!
//! A [`ModelAndView`] is the controller's whole answer to a request: which
//! view to render (or where to redirect) and the named attributes the view
//! reads. Turning it into an HTTP response is the job of
//! [`crate::web::views`].

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::entities::Customer;

const REDIRECT_PREFIX: &str = "redirect:";

/// Target of a controller response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A template identified by its view name, e.g. `customer/list`.
    Template(&'static str),
    /// A client redirect to the given path.
    Redirect(String),
}

impl View {
    pub fn template(name: &'static str) -> Self {
        Self::Template(name)
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }

    /// The view name token, `redirect:`-prefixed for redirects.
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Template(name) => f.write_str(name),
            View::Redirect(path) => write!(f, "{REDIRECT_PREFIX}{path}"),
        }
    }
}

/// A model attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    Customer(Customer),
    Customers(Vec<Customer>),
}

impl From<Customer> for Attribute {
    fn from(customer: Customer) -> Self {
        Attribute::Customer(customer)
    }
}

impl From<Vec<Customer>> for Attribute {
    fn from(customers: Vec<Customer>) -> Self {
        Attribute::Customers(customers)
    }
}

/// Attribute name to value map handed to the view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    attributes: BTreeMap<&'static str, Attribute>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an attribute.
    pub fn add_attribute(&mut self, name: &'static str, value: impl Into<Attribute>) {
        self.attributes.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the attribute if it holds a single customer.
    pub fn customer(&self, name: &str) -> Option<&Customer> {
        match self.get(name)? {
            Attribute::Customer(customer) => Some(customer),
            Attribute::Customers(_) => None,
        }
    }

    /// Returns the attribute if it holds a customer collection.
    pub fn customers(&self, name: &str) -> Option<&[Customer]> {
        match self.get(name)? {
            Attribute::Customers(customers) => Some(customers),
            Attribute::Customer(_) => None,
        }
    }

    /// Removes an attribute, handing ownership to the caller.
    pub fn take(&mut self, name: &str) -> Option<Attribute> {
        self.attributes.remove(name)
    }
}

/// A view together with the model it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAndView {
    pub view: View,
    pub model: Model,
}

impl ModelAndView {
    pub fn new(view: View) -> Self {
        Self {
            view,
            model: Model::new(),
        }
    }

    /// Builder-style [`Model::add_attribute`].
    pub fn with_attribute(mut self, name: &'static str, value: impl Into<Attribute>) -> Self {
        self.model.add_attribute(name, value);
        self
    }

    pub fn view_name(&self) -> String {
        self.view.name()
    }
}
