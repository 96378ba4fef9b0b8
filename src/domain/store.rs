use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cashflow::{self, CashFlowEntry};
use crate::errors::ShopError;

use super::{Customer, Expense, Product, Purchase, Sale};

/// In-memory record store for the five entity collections.
///
/// Collections are append-only and keep insertion order. The derived
/// cash-flow feed is refreshed synchronously after every mutation of sales,
/// purchases, or expenses, and is never serialized: a loaded store rebuilds
/// it from the canonical collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub sales: Vec<Sale>,
    #[serde(default)]
    pub purchases: Vec<Purchase>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    cash_flow: Vec<CashFlowEntry>,
}

impl Store {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            products: Vec::new(),
            customers: Vec::new(),
            sales: Vec::new(),
            purchases: Vec::new(),
            expenses: Vec::new(),
            created_at: now,
            updated_at: now,
            cash_flow: Vec::new(),
        }
    }

    pub fn add_product(&mut self, product: Product) -> Uuid {
        let id = product.id;
        self.products.push(product);
        self.touch();
        id
    }

    pub fn add_customer(&mut self, customer: Customer) -> Uuid {
        let id = customer.id;
        self.customers.push(customer);
        self.touch();
        id
    }

    /// Appends a sale and takes the sold quantity out of stock.
    pub fn add_sale(&mut self, sale: Sale) -> Uuid {
        let id = sale.id;
        let product_id = sale.product_id;
        let quantity = i64::from(sale.quantity);
        self.sales.push(sale);
        self.apply_stock_delta(product_id, -quantity);
        self.refresh_cash_flow();
        self.touch();
        id
    }

    /// Appends a purchase and puts the ordered quantity into stock.
    pub fn add_purchase(&mut self, purchase: Purchase) -> Uuid {
        let id = purchase.id;
        let product_id = purchase.product_id;
        let quantity = i64::from(purchase.quantity);
        self.purchases.push(purchase);
        self.apply_stock_delta(product_id, quantity);
        self.refresh_cash_flow();
        self.touch();
        id
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        self.refresh_cash_flow();
        self.touch();
        id
    }

    /// Adjusts a product's stock by a signed amount.
    ///
    /// Unknown product ids are ignored, and stock is allowed to go negative.
    pub fn apply_stock_delta(&mut self, product_id: Uuid, delta: i64) {
        if let Some(product) = self.products.iter_mut().find(|p| p.id == product_id) {
            product.stock_quantity += delta;
        } else {
            tracing::debug!(%product_id, delta, "stock delta for unknown product ignored");
        }
    }

    pub fn product(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    pub fn sale(&self, id: Uuid) -> Option<&Sale> {
        self.sales.iter().find(|sale| sale.id == id)
    }

    /// The derived cash-flow feed, chronological.
    pub fn cash_flow(&self) -> &[CashFlowEntry] {
        &self.cash_flow
    }

    /// Rebuilds the cash-flow feed from the current collections, replacing
    /// the previous feed wholesale.
    pub fn refresh_cash_flow(&mut self) {
        self.cash_flow = cashflow::derive_parts(&self.sales, &self.purchases, &self.expenses);
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Deserializes a store and rebuilds its derived feed.
    pub fn from_json(data: &str) -> Result<Self, ShopError> {
        let mut store: Store = serde_json::from_str(data)?;
        store.refresh_cash_flow();
        Ok(store)
    }

    pub fn to_json(&self) -> Result<String, ShopError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        ExpenseCategory, PaymentMethod, ProductCondition, ProductSeries, SaleStatus,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with_product(stock: i64) -> (Store, Uuid) {
        let mut store = Store::new("Test Shop");
        let product = Product::new(
            "HRN01",
            "Hirono The Other One",
            ProductSeries::Hirono,
            ProductCondition::New,
            150_000.0,
            250_000.0,
        )
        .with_stock(stock);
        let id = store.add_product(product);
        (store, id)
    }

    #[test]
    fn sale_then_purchase_adjusts_stock_sequentially() {
        let (mut store, product_id) = store_with_product(10);
        let customer = Customer::new(
            "Andi",
            "0812",
            "andi@mail.com",
            "@andi",
            crate::domain::CustomerType::Collector,
        );
        let customer_id = store.add_customer(customer);

        store.add_sale(
            Sale::new(
                date(2026, 3, 1),
                customer_id,
                product_id,
                3,
                250_000.0,
                PaymentMethod::Transfer,
            )
            .with_status(SaleStatus::Paid),
        );
        assert_eq!(store.product(product_id).unwrap().stock_quantity, 7);

        store.add_purchase(Purchase::new(
            date(2026, 3, 2),
            "Distributor A",
            product_id,
            5,
            150_000.0,
        ));
        assert_eq!(store.product(product_id).unwrap().stock_quantity, 12);
    }

    #[test]
    fn oversell_drives_stock_negative() {
        let (mut store, product_id) = store_with_product(2);
        store.add_sale(Sale::new(
            date(2026, 3, 1),
            Uuid::new_v4(),
            product_id,
            5,
            250_000.0,
            PaymentMethod::Cash,
        ));
        assert_eq!(store.product(product_id).unwrap().stock_quantity, -3);
    }

    #[test]
    fn stock_delta_for_unknown_product_is_ignored() {
        let (mut store, product_id) = store_with_product(4);
        store.apply_stock_delta(Uuid::new_v4(), -10);
        assert_eq!(store.product(product_id).unwrap().stock_quantity, 4);
    }

    #[test]
    fn json_round_trip_rebuilds_cash_flow() {
        let (mut store, product_id) = store_with_product(10);
        store.add_sale(
            Sale::new(
                date(2026, 3, 1),
                Uuid::new_v4(),
                product_id,
                1,
                250_000.0,
                PaymentMethod::Qris,
            )
            .with_status(SaleStatus::Paid),
        );
        store.add_expense(Expense::new(
            date(2026, 3, 2),
            ExpenseCategory::Shipping,
            "Courier",
            25_000.0,
        ));
        assert_eq!(store.cash_flow().len(), 2);

        let json = store.to_json().unwrap();
        let loaded = Store::from_json(&json).unwrap();
        assert_eq!(loaded.cash_flow(), store.cash_flow());
    }
}
