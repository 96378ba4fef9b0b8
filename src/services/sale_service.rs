//! Business logic helpers for recording sales.

use uuid::Uuid;

use crate::domain::{Sale, Store};
use crate::services::{ServiceError, ServiceResult};

/// Provides validated append helpers for sales.
pub struct SaleService;

impl SaleService {
    /// Appends a sale after validating the submission.
    ///
    /// The referenced customer and product must be named (non-nil ids), but
    /// they are not required to exist: a reference that dangles later is a
    /// display concern, not a write error.
    pub fn add(store: &mut Store, sale: Sale) -> ServiceResult<Uuid> {
        if sale.customer_id.is_nil() {
            return Err(ServiceError::Invalid("Customer is required".into()));
        }
        if sale.product_id.is_nil() {
            return Err(ServiceError::Invalid("Product is required".into()));
        }
        if sale.quantity == 0 {
            return Err(ServiceError::Invalid("Quantity must be at least 1".into()));
        }
        Ok(store.add_sale(sale))
    }

    /// Returns a snapshot of recorded sales.
    pub fn list(store: &Store) -> Vec<&Sale> {
        store.sales.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::PaymentMethod;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn rejects_nil_customer_reference() {
        let mut store = Store::new("Shop");
        let sale = Sale::new(
            sample_date(),
            Uuid::nil(),
            Uuid::new_v4(),
            1,
            100.0,
            PaymentMethod::Cash,
        );
        assert!(SaleService::add(&mut store, sale).is_err());
        assert!(store.sales.is_empty());
    }

    #[test]
    fn rejects_zero_quantity() {
        let mut store = Store::new("Shop");
        let sale = Sale::new(
            sample_date(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            0,
            100.0,
            PaymentMethod::Cash,
        );
        assert!(SaleService::add(&mut store, sale).is_err());
    }

    #[test]
    fn accepts_dangling_but_named_references() {
        let mut store = Store::new("Shop");
        let sale = Sale::new(
            sample_date(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            1,
            100.0,
            PaymentMethod::Cash,
        );
        SaleService::add(&mut store, sale).expect("dangling references are accepted");
        assert_eq!(store.sales.len(), 1);
    }
}
