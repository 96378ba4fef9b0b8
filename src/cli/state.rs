use crate::auth::AdminGate;
use crate::config::Config;
use crate::currency::{self, CurrencyCode, LocaleConfig};
use crate::domain::Store;
use crate::storefront::Cart;

/// Shared CLI runtime state.
///
/// Holds the record store, the visitor's cart, the admin gate, and the
/// formatting configuration derived from the config file.
pub struct CliState {
    pub store: Store,
    pub cart: Cart,
    gate: AdminGate,
    config: Config,
    currency: CurrencyCode,
    locale: LocaleConfig,
}

impl CliState {
    pub fn new(store: Store, config: Config) -> Self {
        let currency = CurrencyCode::new(config.currency.clone());
        let locale = LocaleConfig::from_tag(&config.locale);
        let gate = AdminGate::new(config.admin_password.clone());
        Self {
            store,
            cart: Cart::new(),
            gate,
            config,
            currency,
            locale,
        }
    }

    pub fn gate(&self) -> &AdminGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut AdminGate {
        &mut self.gate
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Formats an amount with the configured currency and locale.
    pub fn format_amount(&self, amount: f64) -> String {
        currency::format_amount(amount, &self.currency, &self.locale)
    }
}
