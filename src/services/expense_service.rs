//! Business logic helpers for recording expenses.

use uuid::Uuid;

use crate::domain::{Expense, Store};
use crate::services::{ServiceError, ServiceResult};

/// Provides validated append helpers for expenses.
pub struct ExpenseService;

impl ExpenseService {
    /// Appends an expense after validating the submission.
    pub fn add(store: &mut Store, expense: Expense) -> ServiceResult<Uuid> {
        if expense.description.trim().is_empty() {
            return Err(ServiceError::Invalid(
                "Expense description is required".into(),
            ));
        }
        if expense.amount <= 0.0 {
            return Err(ServiceError::Invalid(
                "Expense amount must be greater than zero".into(),
            ));
        }
        Ok(store.add_expense(expense))
    }

    /// Returns a snapshot of recorded expenses.
    pub fn list(store: &Store) -> Vec<&Expense> {
        store.expenses.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::ExpenseCategory;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn rejects_blank_description() {
        let mut store = Store::new("Shop");
        let expense = Expense::new(sample_date(), ExpenseCategory::Other, "  ", 10.0);
        assert!(ExpenseService::add(&mut store, expense).is_err());
    }

    #[test]
    fn rejects_non_positive_amount() {
        let mut store = Store::new("Shop");
        let expense = Expense::new(sample_date(), ExpenseCategory::Other, "Misc", 0.0);
        assert!(ExpenseService::add(&mut store, expense).is_err());
        assert!(store.expenses.is_empty());
    }
}
