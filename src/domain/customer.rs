//! Domain types representing shop customers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A buyer known to the shop. Immutable once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub social_handle: String,
    pub customer_type: CustomerType,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        social_handle: impl Into<String>,
        customer_type: CustomerType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            social_handle: social_handle.into(),
            customer_type,
        }
    }
}

impl Identifiable for Customer {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Customer {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Customer {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.customer_type)
    }
}

/// Buyer segments used for revenue breakdowns.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CustomerType {
    Collector,
    Regular,
    Reseller,
}

impl CustomerType {
    pub const ALL: [CustomerType; 3] = [
        CustomerType::Collector,
        CustomerType::Regular,
        CustomerType::Reseller,
    ];
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerType::Collector => "Collector",
            CustomerType::Regular => "Regular",
            CustomerType::Reseller => "Reseller",
        };
        f.write_str(label)
    }
}
