//! Validated append operations over the record store.
//!
//! Services are the only mutation path the presentation layer uses: each
//! one checks the submission before anything is written, so a rejected
//! request leaves the store untouched.

pub mod customer_service;
pub mod expense_service;
pub mod product_service;
pub mod purchase_service;
pub mod sale_service;

pub use customer_service::CustomerService;
pub use expense_service::ExpenseService;
pub use product_service::ProductService;
pub use purchase_service::PurchaseService;
pub use sale_service::SaleService;

use crate::errors::ShopError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Shop(#[from] ShopError),
    #[error("{0}")]
    Invalid(String),
}
