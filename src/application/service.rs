use chrono::Utc;

use crate::domain::{Amount, Expense, Ledger, parse_amount};

use super::{AppError, MonthlyReport};

/// Application service wrapping the ledger.
/// This is the primary interface for any client (terminal session, tests, etc.):
/// it takes raw user text, parses it and applies it to the ledger.
/// Input is always parsed before the ledger is touched, so a rejected intent
/// leaves the ledger as it was.
#[derive(Debug, Default)]
pub struct LedgerService {
    ledger: Ledger,
}

/// Result of adding an expense
#[derive(Debug, Clone)]
pub struct RecordedExpense {
    pub expense: Expense,
    /// Line to append to the report stream.
    pub description: String,
    pub remaining_budget: Amount,
}

impl LedgerService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ledger(ledger: Ledger) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Set the monthly budget from user input.
    /// Returns the recomputed remaining budget.
    pub fn set_budget(&mut self, text: &str) -> Result<Amount, AppError> {
        let amount = parse_amount(text).inspect_err(|e| {
            tracing::info!(input = text, error = %e, "rejected budget amount");
        })?;

        self.ledger.set_budget(amount);
        let remaining = self.ledger.remaining_budget();
        tracing::debug!(budget = amount, remaining, "monthly budget set");
        Ok(remaining)
    }

    /// Record an expense from user input.
    /// Unknown kinds are recorded as Savings.
    pub fn add_expense(
        &mut self,
        name: &str,
        amount_text: &str,
        kind: &str,
    ) -> Result<RecordedExpense, AppError> {
        let amount = parse_amount(amount_text).inspect_err(|e| {
            tracing::info!(input = amount_text, error = %e, "rejected expense amount");
        })?;

        let expense = self.ledger.record(Expense::create(kind, name, amount)).clone();
        let remaining_budget = self.ledger.remaining_budget();

        tracing::debug!(
            id = %expense.id,
            kind = %expense.kind,
            amount,
            remaining_budget,
            "expense recorded"
        );

        Ok(RecordedExpense {
            description: expense.describe(),
            expense,
            remaining_budget,
        })
    }

    /// Build a report over every expense recorded so far.
    /// Does not clear anything: calling it again reprints the full history.
    pub fn generate_report(&self) -> MonthlyReport {
        let report = MonthlyReport {
            generated_at: Utc::now(),
            monthly_budget: self.ledger.monthly_budget(),
            expenses: self.ledger.expenses().to_vec(),
            total_expenses: self.ledger.total_expenses(),
            remaining_budget: self.ledger.remaining_budget(),
        };
        tracing::debug!(expenses = report.expenses.len(), "report generated");
        report
    }

    pub fn remaining_budget(&self) -> Amount {
        self.ledger.remaining_budget()
    }

    pub fn total_expenses(&self) -> Amount {
        self.ledger.total_expenses()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ExpenseKind;

    #[test]
    fn test_set_budget_returns_remaining() {
        let mut service = LedgerService::new();
        assert_eq!(service.set_budget("1000"), Ok(1000.0));
        assert_eq!(service.ledger().monthly_budget(), 1000.0);
    }

    #[test]
    fn test_set_budget_accepts_negative() {
        let mut service = LedgerService::new();
        assert_eq!(service.set_budget("-20"), Ok(-20.0));
    }

    #[test]
    fn test_invalid_budget_leaves_previous_value() {
        let mut service = LedgerService::new();
        service.set_budget("500").unwrap();

        let result = service.set_budget("abc");
        assert!(matches!(result, Err(AppError::InvalidAmount(_))));
        assert_eq!(service.ledger().monthly_budget(), 500.0);
    }

    #[test]
    fn test_add_expense() {
        let mut service = LedgerService::new();
        service.set_budget("1000").unwrap();

        let recorded = service.add_expense("Rent", "300", "Fixed").unwrap();
        assert_eq!(recorded.description, "Fixed Expense - Rent: $300.0");
        assert_eq!(recorded.expense.kind, ExpenseKind::Fixed);
        assert_eq!(recorded.remaining_budget, 700.0);
        assert_eq!(service.remaining_budget(), 700.0);
    }

    #[test]
    fn test_invalid_expense_amount_is_not_recorded() {
        let mut service = LedgerService::new();
        service.add_expense("Rent", "300", "Fixed").unwrap();

        let result = service.add_expense("Food", "xyz", "Variable");
        assert!(matches!(result, Err(AppError::InvalidAmount(_))));
        assert_eq!(service.ledger().len(), 1);
        assert_eq!(service.total_expenses(), 300.0);
    }

    #[test]
    fn test_generate_report_does_not_mutate() {
        let mut service = LedgerService::new();
        service.set_budget("100").unwrap();
        service.add_expense("Food", "40", "Variable").unwrap();

        let first = service.generate_report();
        let second = service.generate_report();
        assert_eq!(first.lines(), second.lines());
        assert_eq!(service.ledger().len(), 1);
        assert_eq!(second.remaining_budget, 60.0);
    }
}
