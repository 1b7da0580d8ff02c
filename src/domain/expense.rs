use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Amount, format_amount};

pub type ExpenseId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseKind {
    /// Recurring costs that do not change month to month (rent, subscriptions)
    Fixed,
    /// Costs that vary with usage (food, fuel)
    Variable,
    /// Money set aside rather than spent
    Savings,
}

impl ExpenseKind {
    pub const ALL: [ExpenseKind; 3] = [
        ExpenseKind::Fixed,
        ExpenseKind::Variable,
        ExpenseKind::Savings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseKind::Fixed => "Fixed",
            ExpenseKind::Variable => "Variable",
            ExpenseKind::Savings => "Savings",
        }
    }

    /// Label used when describing an expense of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseKind::Fixed => "Fixed Expense",
            ExpenseKind::Variable => "Variable Expense",
            ExpenseKind::Savings => "Savings",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fixed" => Some(ExpenseKind::Fixed),
            "variable" => Some(ExpenseKind::Variable),
            "savings" => Some(ExpenseKind::Savings),
            _ => None,
        }
    }

    /// Resolve a kind selected by the user. Anything that is not Fixed or
    /// Variable is recorded as Savings.
    pub fn from_selection(s: &str) -> Self {
        Self::from_str(s).unwrap_or(ExpenseKind::Savings)
    }
}

impl std::fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded outflow. Never modified once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Amount,
    pub kind: ExpenseKind,
    pub recorded_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(name: impl Into<String>, amount: Amount, kind: ExpenseKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            kind,
            recorded_at: Utc::now(),
        }
    }

    /// Build an expense from the kind string the user picked.
    pub fn create(kind: &str, name: impl Into<String>, amount: Amount) -> Self {
        Self::new(name, amount, ExpenseKind::from_selection(kind))
    }

    /// Format as `<Label> - <name>: $<amount>`.
    pub fn describe(&self) -> String {
        format!(
            "{} - {}: ${}",
            self.kind.label(),
            self.name,
            format_amount(self.amount)
        )
    }
}

impl std::fmt::Display for Expense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
