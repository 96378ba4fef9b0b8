//! Public storefront surface: featured products and the shopping cart.
//!
//! Checkout is simulated — it acknowledges the buyer and clears the cart
//! without recording a sale or touching stock.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{ProductSeries, Store};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Buyer name and email are required")]
    MissingBuyerDetails,
}

/// A catalog item as shown on the landing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeaturedItem {
    pub product_id: Uuid,
    pub name: String,
    pub series: ProductSeries,
    pub price: f64,
}

/// Lists catalog items currently available to buyers (stock on hand).
pub fn featured(store: &Store) -> Vec<FeaturedItem> {
    store
        .products
        .iter()
        .filter(|product| product.stock_quantity > 0)
        .map(|product| FeaturedItem {
            product_id: product.id,
            name: product.name.clone(),
            series: product.series,
            price: product.selling_price,
        })
        .collect()
}

/// One line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: Uuid,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// The visitor's shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of the item, merging with an existing line.
    pub fn add(&mut self, item: &FeaturedItem) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            line.quantity += 1;
        } else {
            self.items.push(CartItem {
                product_id: item.product_id,
                name: item.name.clone(),
                unit_price: item.price,
                quantity: 1,
            });
        }
    }

    /// Sets a line's quantity; anything below one removes the line.
    pub fn set_quantity(&mut self, product_id: Uuid, quantity: u32) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = quantity;
        }
    }

    pub fn remove(&mut self, product_id: Uuid) {
        self.items.retain(|line| line.product_id != product_id);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|line| f64::from(line.quantity) * line.unit_price)
            .sum()
    }

    /// Simulated checkout: validates buyer details, clears the cart, and
    /// returns the confirmation message shown to the buyer.
    pub fn checkout(&mut self, buyer_name: &str, buyer_email: &str) -> Result<String, CheckoutError> {
        if self.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        if buyer_name.trim().is_empty() || buyer_email.trim().is_empty() {
            return Err(CheckoutError::MissingBuyerDetails);
        }
        self.items.clear();
        Ok(format!(
            "Thank you, {buyer_name}! Your order is being processed. A confirmation will be sent to {buyer_email}."
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: f64) -> FeaturedItem {
        FeaturedItem {
            product_id: Uuid::new_v4(),
            name: name.into(),
            series: ProductSeries::Hirono,
            price,
        }
    }

    #[test]
    fn adding_same_item_merges_lines() {
        let mut cart = Cart::new();
        let hirono = item("Hirono", 250.0);
        cart.add(&hirono);
        cart.add(&hirono);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total(), 500.0);
    }

    #[test]
    fn zero_quantity_removes_the_line() {
        let mut cart = Cart::new();
        let hirono = item("Hirono", 250.0);
        cart.add(&hirono);
        cart.set_quantity(hirono.product_id, 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn checkout_clears_cart_and_greets_buyer() {
        let mut cart = Cart::new();
        cart.add(&item("Kubo", 260.0));
        let message = cart.checkout("Citra", "citra@mail.com").unwrap();
        assert!(message.contains("Citra"));
        assert!(message.contains("citra@mail.com"));
        assert!(cart.is_empty());
    }

    #[test]
    fn checkout_requires_details_and_a_non_empty_cart() {
        let mut cart = Cart::new();
        assert_eq!(cart.checkout("A", "a@b.c"), Err(CheckoutError::EmptyCart));
        cart.add(&item("Kubo", 260.0));
        assert_eq!(
            cart.checkout("", "a@b.c"),
            Err(CheckoutError::MissingBuyerDetails)
        );
        assert_eq!(cart.item_count(), 1);
    }
}
