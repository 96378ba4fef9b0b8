//! Domain types representing catalog products.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A catalog item the shop resells, with pricing and stock on hand.
///
/// Stock is signed: sales recorded against thin inventory may drive it
/// negative (backorders), and nothing in the store clamps it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub series: ProductSeries,
    pub condition: ProductCondition,
    pub purchase_price: f64,
    pub selling_price: f64,
    pub stock_quantity: i64,
}

impl Product {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        series: ProductSeries,
        condition: ProductCondition,
        purchase_price: f64,
        selling_price: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            name: name.into(),
            series,
            condition,
            purchase_price,
            selling_price,
            stock_quantity: 0,
        }
    }

    /// Sets the opening stock level.
    pub fn with_stock(mut self, stock_quantity: i64) -> Self {
        self.stock_quantity = stock_quantity;
        self
    }
}

impl Identifiable for Product {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Product {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Product {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.code)
    }
}

/// Product lines carried by the shop.
///
/// Variants are declared in display-name order so that keyed maps iterate
/// alphabetically.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProductSeries {
    Crybaby,
    Hirono,
    Kubo,
    Labubu,
    TinyTiny,
}

impl ProductSeries {
    pub const ALL: [ProductSeries; 5] = [
        ProductSeries::Crybaby,
        ProductSeries::Hirono,
        ProductSeries::Kubo,
        ProductSeries::Labubu,
        ProductSeries::TinyTiny,
    ];
}

impl fmt::Display for ProductSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductSeries::Crybaby => "Crybaby",
            ProductSeries::Hirono => "Hirono",
            ProductSeries::Kubo => "Kubo",
            ProductSeries::Labubu => "Labubu",
            ProductSeries::TinyTiny => "TinyTiny",
        };
        f.write_str(label)
    }
}

/// Item condition as advertised to buyers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProductCondition {
    New,
    PreOrder,
    Second,
}

impl ProductCondition {
    pub const ALL: [ProductCondition; 3] = [
        ProductCondition::New,
        ProductCondition::PreOrder,
        ProductCondition::Second,
    ];
}

impl fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProductCondition::New => "New",
            ProductCondition::PreOrder => "Pre-order",
            ProductCondition::Second => "Second",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_order_matches_display_names() {
        let mut names: Vec<String> = ProductSeries::ALL.iter().map(|s| s.to_string()).collect();
        let sorted = {
            let mut copy = names.clone();
            copy.sort();
            copy
        };
        assert_eq!(names, sorted);
        names.dedup();
        assert_eq!(names.len(), ProductSeries::ALL.len());
    }
}
