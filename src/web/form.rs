//! Customer form binding.

use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::Customer;
use crate::error::AppError;

/// Raw `application/x-www-form-urlencoded` fields of the customer form.
///
/// Every field is optional on the wire; [`Customer::try_from`] decides what
/// a missing value means.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerForm {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address_line1: Option<String>,
}

impl TryFrom<CustomerForm> for Customer {
    type Error = AppError;

    /// Maps form fields onto a customer.
    ///
    /// Missing text fields become empty strings. A missing or blank `id`
    /// means a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `id` is present but not an integer.
    fn try_from(form: CustomerForm) -> Result<Self, Self::Error> {
        let id = match form.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
                AppError::bad_request("Invalid customer id", json!({"id": raw}))
            })?),
        };

        Ok(Customer {
            id,
            first_name: form.first_name.unwrap_or_default(),
            last_name: form.last_name.unwrap_or_default(),
            address_line1: form.address_line1.unwrap_or_default(),
        })
    }
}
