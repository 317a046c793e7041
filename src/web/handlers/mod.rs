//! Page handlers for the customer web interface.

mod customers;

pub use customers::{
    delete_customer_handler, edit_customer_handler, list_customers_handler,
    new_customer_handler, save_customer_handler, show_customer_handler,
};
