//! In-memory expense ledger
//!
//! The ordered expense list a caller owns and edits. Analytics and reports
//! take a snapshot via `list()`; nothing here is shared or locked.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Expense, ExpenseUpdate, NewExpense};

#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// Expenses in insertion order
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Append a new expense with the next free id (largest + 1)
    pub fn add(&mut self, new: NewExpense) -> Result<Expense> {
        validate_cost(new.cost)?;

        let id = self.next_id()?;
        let expense = new.into_expense(id);
        self.expenses.push(expense.clone());

        debug!(id, cost = expense.cost, "Expense added");
        Ok(expense)
    }

    /// Apply a partial update, returning the updated expense
    pub fn update(&mut self, id: i64, update: ExpenseUpdate) -> Result<Expense> {
        if let Some(cost) = update.cost {
            validate_cost(cost)?;
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("Expense {}", id)))?;
        update.apply(expense);

        debug!(id, "Expense updated");
        Ok(expense.clone())
    }

    pub fn remove(&mut self, id: i64) -> Result<Expense> {
        let idx = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("Expense {}", id)))?;

        debug!(id, "Expense removed");
        Ok(self.expenses.remove(idx))
    }

    fn next_id(&self) -> Result<i64> {
        let max = self.expenses.iter().map(|e| e.id).max().unwrap_or(0);
        max.checked_add(1)
            .ok_or_else(|| Error::InvalidData(format!("no free id after {}", max)))
    }
}

fn validate_cost(cost: f64) -> Result<()> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidData(format!(
            "cost must be a non-negative number, got {}",
            cost
        )))
    }
}
