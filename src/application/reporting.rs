use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Expense, format_amount};

pub const REPORT_HEADER: &str = "--- Monthly Financial Report ---";

/// `Total Monthly Expenses: $<total>`
pub fn total_expenses_line(total: Amount) -> String {
    format!("Total Monthly Expenses: ${}", format_amount(total))
}

/// `Remaining Budget: $<remaining>`
pub fn remaining_budget_line(remaining: Amount) -> String {
    format!("Remaining Budget: ${}", format_amount(remaining))
}

/// Snapshot of the ledger at the time the report was requested.
/// Always covers every expense recorded so far.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub generated_at: DateTime<Utc>,
    pub monthly_budget: Amount,
    pub expenses: Vec<Expense>,
    pub total_expenses: Amount,
    pub remaining_budget: Amount,
}

impl MonthlyReport {
    /// Header, one line per expense in insertion order, then the total.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.expenses.len() + 2);
        lines.push(REPORT_HEADER.to_string());
        lines.extend(self.expenses.iter().map(Expense::describe));
        lines.push(total_expenses_line(self.total_expenses));
        lines
    }
}

impl std::fmt::Display for MonthlyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
