use thiserror::Error;

const CURRENCY_SYMBOL: char = '$';
const THOUSANDS_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("price text is empty")]
    Empty,
    #[error("price text {0:?} is not a decimal number")]
    Invalid(String),
}

/// "$1,234.50" → 1234.5. Rejects anything that is not a finite decimal numeral.
pub fn normalize_price(text: &str) -> Result<f64, ParseError> {
    let stripped: String = text
        .chars()
        .filter(|&c| c != CURRENCY_SYMBOL && c != THOUSANDS_SEPARATOR)
        .collect();
    let stripped = stripped.trim();

    if stripped.is_empty() {
        return Err(ParseError::Empty);
    }

    // f64::from_str also takes "inf", "NaN" and exponents; none of those are prices.
    if !stripped
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == '+' || c == '-')
    {
        return Err(ParseError::Invalid(text.to_string()));
    }

    match stripped.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::Invalid(text.to_string())),
    }
}
