//! Domain types representing stock replenishment.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A replenishment order placed with a supplier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: Uuid,
    pub date: NaiveDate,
    pub supplier_name: String,
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Purchase {
    pub fn new(
        date: NaiveDate,
        supplier_name: impl Into<String>,
        product_id: Uuid,
        quantity: u32,
        unit_cost: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            supplier_name: supplier_name.into(),
            product_id,
            quantity,
            unit_cost,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Total cost of the order.
    pub fn total_cost(&self) -> f64 {
        f64::from(self.quantity) * self.unit_cost
    }
}

impl Identifiable for Purchase {
    fn id(&self) -> Uuid {
        self.id
    }
}
