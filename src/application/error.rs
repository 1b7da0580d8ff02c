use thiserror::Error;

use crate::domain::ParseAmountError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<ParseAmountError> for AppError {
    fn from(err: ParseAmountError) -> Self {
        AppError::InvalidAmount(err.to_string())
    }
}
