//! Business logic helpers for managing catalog products.

use uuid::Uuid;

use crate::domain::{Product, Store};
use crate::services::{ServiceError, ServiceResult};

/// Provides validated append helpers for products.
pub struct ProductService;

impl ProductService {
    /// Appends a product after validating required fields.
    pub fn add(store: &mut Store, product: Product) -> ServiceResult<Uuid> {
        if product.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Product name is required".into()));
        }
        Ok(store.add_product(product))
    }

    /// Returns a snapshot of the catalog.
    pub fn list(store: &Store) -> Vec<&Product> {
        store.products.iter().collect()
    }
}
