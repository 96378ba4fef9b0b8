//! Domain types representing operating expenses.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// An operating expense outside of stock purchases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: ExpenseCategory,
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt: Option<String>,
}

impl Expense {
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        description: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            category,
            description: description.into(),
            amount,
            receipt: None,
        }
    }

    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = Some(receipt.into());
        self
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Expense buckets used on the cash-flow feed and reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseCategory {
    Shipping,
    Packaging,
    Marketing,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Shipping,
        ExpenseCategory::Packaging,
        ExpenseCategory::Marketing,
        ExpenseCategory::Other,
    ];
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseCategory::Shipping => "Shipping",
            ExpenseCategory::Packaging => "Packaging",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Other => "Other",
        };
        f.write_str(label)
    }
}
