//! Customer entity.

/// A customer record.
///
/// `id` is `None` until the record has been saved; identity is always
/// assigned by the storage layer, never by the web layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address_line1: String,
}

impl Customer {
    /// Creates a customer with every field populated.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let customer = Customer::new(
    ///     Some(1),
    ///     "Imene".to_string(),
    ///     "Smati".to_string(),
    ///     "118 rue Regent".to_string(),
    /// );
    /// ```
    pub fn new(
        id: Option<i64>,
        first_name: String,
        last_name: String,
        address_line1: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            address_line1,
        }
    }

    /// Returns `true` once the storage layer has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_default_is_unpopulated() {
        let customer = Customer::default();

        assert!(customer.id.is_none());
        assert!(!customer.is_persisted());
        assert!(customer.first_name.is_empty());
        assert!(customer.last_name.is_empty());
        assert!(customer.address_line1.is_empty());
    }

    #[test]
    fn test_customer_creation() {
        let customer = Customer::new(
            Some(7),
            "Imene".to_string(),
            "Smati".to_string(),
            "118 rue Regent".to_string(),
        );

        assert_eq!(customer.id, Some(7));
        assert!(customer.is_persisted());
        assert_eq!(customer.first_name, "Imene");
        assert_eq!(customer.last_name, "Smati");
        assert_eq!(customer.address_line1, "118 rue Regent");
    }
}
