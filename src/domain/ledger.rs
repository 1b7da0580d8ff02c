use super::{Amount, Expense};

/// In-memory record of the monthly budget and every expense recorded against it.
/// Expenses are append-only and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    monthly_budget: Amount,
    expenses: Vec<Expense>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn monthly_budget(&self) -> Amount {
        self.monthly_budget
    }

    /// Replace the monthly budget. Earlier values are discarded, not summed.
    pub fn set_budget(&mut self, amount: Amount) {
        self.monthly_budget = amount;
    }

    /// Append an expense and return a reference to the stored entry.
    pub fn record(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        &self.expenses[self.expenses.len() - 1]
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn total_expenses(&self) -> Amount {
        total_expenses(&self.expenses)
    }

    /// Budget minus total expenses. Goes negative when overspent.
    pub fn remaining_budget(&self) -> Amount {
        self.monthly_budget - self.total_expenses()
    }
}

/// Sum of amounts over a list of expenses.
/// Folds from positive zero so an empty ledger totals "0.0", not "-0.0".
pub fn total_expenses(expenses: &[Expense]) -> Amount {
    expenses.iter().fold(0.0, |total, e| total + e.amount)
}
