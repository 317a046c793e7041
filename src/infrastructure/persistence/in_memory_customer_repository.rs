//! In-memory implementation of the customer repository.

use async_trait::async_trait;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::Customer;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Stored customers plus the next id to hand out.
///
/// `next_id` is `None` once `i64::MAX` has been used.
struct CustomerStore {
    customers: BTreeMap<i64, Customer>,
    next_id: Option<i64>,
}

/// Process-local customer storage.
///
/// Ids start at 1. Saving a record with an explicit id stores it under that
/// id and pushes the counter past it, so assigned ids never collide with
/// caller-chosen ones. The counter never wraps.
pub struct InMemoryCustomerRepository {
    store: RwLock<CustomerStore>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            store: RwLock::new(CustomerStore {
                customers: BTreeMap::new(),
                next_id: Some(1),
            }),
        }
    }

    /// Creates a repository preloaded with a handful of sample customers.
    pub fn with_sample_data() -> Self {
        let samples = [
            ("Micheal", "Weston", "1 Main St"),
            ("Fiona", "Glenanne", "1 Key Biscayne Ave"),
            ("Sam", "Axe", "1 Little Cuba Road"),
        ];

        let mut customers = BTreeMap::new();
        for (index, (first, last, address)) in samples.into_iter().enumerate() {
            let id = index as i64 + 1;
            customers.insert(
                id,
                Customer::new(
                    Some(id),
                    first.to_string(),
                    last.to_string(),
                    address.to_string(),
                ),
            );
        }

        let next_id = Some(customers.len() as i64 + 1);
        Self {
            store: RwLock::new(CustomerStore { customers, next_id }),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_all(&self) -> Result<Vec<Customer>, AppError> {
        let store = self.store.read().await;
        Ok(store.customers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let store = self.store.read().await;
        Ok(store.customers.get(&id).cloned())
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer, AppError> {
        let mut store = self.store.write().await;

        let id = match customer.id {
            Some(id) => id,
            None => store.next_id.ok_or_else(|| {
                AppError::internal("Customer id space exhausted", json!({"max_id": i64::MAX}))
            })?,
        };

        // Counter only moves forward; `None` stays exhausted.
        if let Some(next) = store.next_id
            && id >= next
        {
            store.next_id = id.checked_add(1);
        }

        customer.id = Some(id);
        store.customers.insert(id, customer.clone());

        Ok(customer)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut store = self.store.write().await;
        Ok(store.customers.remove(&id).is_some())
    }
}
