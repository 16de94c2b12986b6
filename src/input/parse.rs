//! Guess parsing.

use thiserror::Error;

/// Failure to extract a number from guess text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no decimal digits.
    #[error("guess contains no digits")]
    Empty,
}

/// Parse free-form guess text into a non-negative integer.
///
/// Every character that is not a decimal digit is discarded, not validated:
/// currency symbols, thousands separators, and whitespace all pass silently.
/// The surviving digits are read left-to-right as a base-10 integer.
///
/// Accumulation saturates at `u64::MAX`; a guess that long is still a valid
/// (terrible) guess, not an error.
///
/// ## Example
///
/// ```
/// use auction_guess::input::parse_guess;
///
/// assert_eq!(parse_guess("$75,000"), Ok(75_000));
/// assert_eq!(parse_guess("1 234 567"), Ok(1_234_567));
/// assert!(parse_guess("no numbers here").is_err());
/// ```
pub fn parse_guess(raw: &str) -> Result<u64, ParseError> {
    let mut value: u64 = 0;
    let mut seen_digit = false;

    for c in raw.chars() {
        if let Some(d) = c.to_digit(10) {
            seen_digit = true;
            value = value.saturating_mul(10).saturating_add(u64::from(d));
        }
    }

    if seen_digit {
        Ok(value)
    } else {
        Err(ParseError::Empty)
    }
}
