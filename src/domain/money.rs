use std::fmt;

/// Amounts are plain floating-point numbers, as typed by the user.
/// No currency rounding is applied anywhere.
pub type Amount = f64;

/// Format an amount in default decimal form, always keeping at least one
/// fractional digit. Non-finite values print as "Infinity", "-Infinity"
/// and "NaN".
/// Example: 1000.0 -> "1000.0", 12.5 -> "12.5", -3.0 -> "-3.0"
pub fn format_amount(amount: Amount) -> String {
    if amount.is_nan() {
        "NaN".to_string()
    } else if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        format!("{}Infinity", sign)
    } else {
        format!("{:?}", amount)
    }
}

/// Parse user input into an amount.
/// Surrounding whitespace is ignored. Anything the float parser accepts is
/// taken as is, including negative, overflowing ("1e400") and non-finite
/// ("Infinity", "NaN") values.
/// Example: "1000" -> 1000.0, " 12.5 " -> 12.5, "-3" -> -3.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| ParseAmountError::InvalidFormat(trimmed.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat(String),
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat(input) => write!(f, "'{}' is not a number", input),
        }
    }
}

impl std::error::Error for ParseAmountError {}
