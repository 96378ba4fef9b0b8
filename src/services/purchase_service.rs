//! Business logic helpers for recording stock purchases.

use uuid::Uuid;

use crate::domain::{Purchase, Store};
use crate::services::{ServiceError, ServiceResult};

/// Provides validated append helpers for purchases.
pub struct PurchaseService;

impl PurchaseService {
    /// Appends a purchase after validating the submission.
    pub fn add(store: &mut Store, purchase: Purchase) -> ServiceResult<Uuid> {
        if purchase.product_id.is_nil() {
            return Err(ServiceError::Invalid("Product is required".into()));
        }
        if purchase.quantity == 0 {
            return Err(ServiceError::Invalid("Quantity must be at least 1".into()));
        }
        Ok(store.add_purchase(purchase))
    }

    /// Returns a snapshot of recorded purchases.
    pub fn list(store: &Store) -> Vec<&Purchase> {
        store.purchases.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn rejects_nil_product_reference() {
        let mut store = Store::new("Shop");
        let purchase = Purchase::new(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            "Distributor A",
            Uuid::nil(),
            5,
            40.0,
        );
        assert!(PurchaseService::add(&mut store, purchase).is_err());
        assert!(store.purchases.is_empty());
    }
}
