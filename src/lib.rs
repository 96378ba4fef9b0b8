#![doc(test(attr(deny(warnings))))]

//! Shop Core provides the record store, cash-flow derivation, and reporting
//! primitives behind a small designer-toy resale storefront and its admin shell.

pub mod auth;
pub mod cashflow;
pub mod cli;
pub mod config;
pub mod currency;
pub mod demo;
pub mod domain;
pub mod errors;
pub mod reports;
pub mod services;
pub mod storefront;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Shop Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
