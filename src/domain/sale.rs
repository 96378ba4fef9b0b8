//! Domain types representing recorded sales.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A single sale line: one product sold to one customer.
///
/// `customer_id` and `product_id` are lookup-only references; the records
/// they point at may be absent, and consumers must render "N/A" rather than
/// fail when resolution comes up empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sale {
    pub id: Uuid,
    pub date: NaiveDate,
    pub customer_id: Uuid,
    pub product_id: Uuid,
    pub quantity: u32,
    pub unit_price: f64,
    pub payment_method: PaymentMethod,
    pub status: SaleStatus,
}

impl Sale {
    pub fn new(
        date: NaiveDate,
        customer_id: Uuid,
        product_id: Uuid,
        quantity: u32,
        unit_price: f64,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            customer_id,
            product_id,
            quantity,
            unit_price,
            payment_method,
            status: SaleStatus::Pending,
        }
    }

    pub fn with_status(mut self, status: SaleStatus) -> Self {
        self.status = status;
        self
    }

    /// Gross amount of the line.
    pub fn total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }

    pub fn is_paid(&self) -> bool {
        matches!(self.status, SaleStatus::Paid)
    }
}

impl Identifiable for Sale {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// How the buyer settled the sale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentMethod {
    Transfer,
    Qris,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Transfer,
        PaymentMethod::Qris,
        PaymentMethod::Cash,
    ];
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::Qris => "QRIS",
            PaymentMethod::Cash => "Cash",
        };
        f.write_str(label)
    }
}

/// Settlement state of a sale. Any value may be set at creation; there is no
/// enforced transition graph.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SaleStatus {
    Paid,
    Pending,
    Cancelled,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [SaleStatus::Paid, SaleStatus::Pending, SaleStatus::Cancelled];
}

impl fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaleStatus::Paid => "Paid",
            SaleStatus::Pending => "Pending",
            SaleStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}
