//! Live input formatting and currency display.
//!
//! The guess field is reformatted on every keystroke: non-digits and leading
//! zeros are stripped, and the remaining digits are echoed back with a
//! currency prefix and space-grouped thousands. No validation happens here;
//! that is [`super::parse_guess`]'s job at submit time.

use serde::{Deserialize, Serialize};

/// Currency prefix used by the live field and result display.
pub const CURRENCY_SYMBOL: &str = "$";

/// Reformatted guess field content.
///
/// `cursor` is the character position the input cursor must move to after the
/// text is applied. Reformatting changes the text length, so it is always
/// pinned to the end of the field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedGuess {
    /// Text to place in the field. Empty means clear the field.
    pub text: String,

    /// Character position for the input cursor.
    pub cursor: usize,
}

/// Reformat raw field text for display.
///
/// Strips non-digits, strips leading zeros, and renders the rest as
/// `$`-prefixed digits grouped in threes from the right. If no digits
/// survive, the field is cleared.
///
/// ## Example
///
/// ```
/// use auction_guess::input::live_format;
///
/// let field = live_format("1234567");
/// assert_eq!(field.text, "$1 234 567");
/// assert_eq!(field.cursor, field.text.chars().count());
///
/// assert!(live_format("€€€").text.is_empty());
/// ```
#[must_use]
pub fn live_format(raw: &str) -> FormattedGuess {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let digits = digits.trim_start_matches('0');

    if digits.is_empty() {
        return FormattedGuess::default();
    }

    let text = format!("{}{}", CURRENCY_SYMBOL, group_thousands(digits));
    let cursor = text.chars().count();
    FormattedGuess { text, cursor }
}

/// Format a price for display, e.g. `75000` → `"$75 000"`.
#[must_use]
pub fn format_currency(value: u64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(&value.to_string()))
}

/// Insert a space every three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(c);
    }

    out
}
