//! Business logic helpers for managing customers.

use uuid::Uuid;

use crate::domain::{Customer, Store};
use crate::services::{ServiceError, ServiceResult};

/// Provides validated append helpers for customers.
pub struct CustomerService;

impl CustomerService {
    /// Appends a customer after validating required fields.
    pub fn add(store: &mut Store, customer: Customer) -> ServiceResult<Uuid> {
        if customer.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Customer name is required".into()));
        }
        Ok(store.add_customer(customer))
    }

    /// Returns a snapshot of the customer list.
    pub fn list(store: &Store) -> Vec<&Customer> {
        store.customers.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CustomerType;

    #[test]
    fn rejects_blank_name() {
        let mut store = Store::new("Shop");
        let customer = Customer::new("", "0812", "x@mail.com", "@x", CustomerType::Regular);
        assert!(CustomerService::add(&mut store, customer).is_err());
        assert!(store.customers.is_empty());
    }
}
