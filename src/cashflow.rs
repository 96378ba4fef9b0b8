//! Derivation of the unified cash-flow feed.
//!
//! Every paid sale becomes an inflow; every purchase and expense becomes an
//! outflow. The feed is a pure function of the three source collections:
//! deriving twice from unchanged inputs yields an identical sequence.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Expense, Purchase, Sale, Store};

/// Direction of money movement.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FlowDirection {
    Inflow,
    Outflow,
}

impl fmt::Display for FlowDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlowDirection::Inflow => "Inflow",
            FlowDirection::Outflow => "Outflow",
        };
        f.write_str(label)
    }
}

/// One money-in/money-out event on the derived feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CashFlowEntry {
    pub id: String,
    pub date: NaiveDate,
    pub direction: FlowDirection,
    pub source: String,
    pub amount: f64,
}

/// A feed entry paired with the running balance up to and including it.
///
/// Balances are a presentation-time overlay; the canonical feed never
/// stores them.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BalancedEntry {
    pub entry: CashFlowEntry,
    pub balance: f64,
}

/// Derives the chronological cash-flow feed for a store.
pub fn derive(store: &Store) -> Vec<CashFlowEntry> {
    derive_parts(&store.sales, &store.purchases, &store.expenses)
}

/// Derives the feed from the raw collections.
///
/// Entries are gathered as sales, then purchases, then expenses, each in
/// insertion order, and stable-sorted by date; same-date entries therefore
/// keep that relative order.
pub(crate) fn derive_parts(
    sales: &[Sale],
    purchases: &[Purchase],
    expenses: &[Expense],
) -> Vec<CashFlowEntry> {
    let mut entries: Vec<CashFlowEntry> = Vec::new();

    entries.extend(sales.iter().filter(|sale| sale.is_paid()).map(|sale| {
        CashFlowEntry {
            id: format!("cfi_{}", sale.id.simple()),
            date: sale.date,
            direction: FlowDirection::Inflow,
            source: format!("Sale #{}", sale.id.simple()),
            amount: sale.total(),
        }
    }));

    entries.extend(purchases.iter().map(|purchase| CashFlowEntry {
        id: format!("cfo_p_{}", purchase.id.simple()),
        date: purchase.date,
        direction: FlowDirection::Outflow,
        source: format!("Purchase from {}", purchase.supplier_name),
        amount: purchase.total_cost(),
    }));

    entries.extend(expenses.iter().map(|expense| CashFlowEntry {
        id: format!("cfo_e_{}", expense.id.simple()),
        date: expense.date,
        direction: FlowDirection::Outflow,
        source: format!("{}: {}", expense.category, expense.description),
        amount: expense.amount,
    }));

    entries.sort_by_key(|entry| entry.date);
    entries
}

/// Attaches a running balance to an already-sorted feed, starting from zero.
pub fn with_running_balance(entries: &[CashFlowEntry]) -> Vec<BalancedEntry> {
    let mut balance = 0.0;
    entries
        .iter()
        .map(|entry| {
            match entry.direction {
                FlowDirection::Inflow => balance += entry.amount,
                FlowDirection::Outflow => balance -= entry.amount,
            }
            BalancedEntry {
                entry: entry.clone(),
                balance,
            }
        })
        .collect()
}

/// Sum of all inflow amounts.
pub fn total_inflow(entries: &[CashFlowEntry]) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.direction == FlowDirection::Inflow)
        .map(|entry| entry.amount)
        .sum()
}

/// Sum of all outflow amounts.
pub fn total_outflow(entries: &[CashFlowEntry]) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.direction == FlowDirection::Outflow)
        .map(|entry| entry.amount)
        .sum()
}
