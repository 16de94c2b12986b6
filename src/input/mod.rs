//! Input normalization: guess parsing and live field formatting.
//!
//! - `parse_guess`: free-form text to a non-negative integer
//! - `live_format`: per-keystroke cosmetic echo of the digits typed so far
//! - `format_currency`: display formatting for prices and results

mod format;
mod parse;

pub use format::{format_currency, live_format, FormattedGuess, CURRENCY_SYMBOL};
pub use parse::{parse_guess, ParseError};
