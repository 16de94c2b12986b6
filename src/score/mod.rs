//! Scoring: linear in relative error.
//!
//! A round awards `round(1000 * (1 - ratio))` points, where `ratio` is the
//! guess's relative error against the reference price, capped at 1. An exact
//! guess scores 1000; a guess off by the full reference price or more scores
//! 0.

/// Maximum points awardable in a single round.
pub const MAX_POINTS: u32 = 1000;

/// Score a guess against a reference price.
///
/// `ratio = min(1, |guess - reference| / reference)` when `reference > 0`;
/// a zero reference price fixes the ratio at 1, so such a round always
/// scores 0.
///
/// ## Example
///
/// ```
/// use auction_guess::score::score_guess;
///
/// assert_eq!(score_guess(70_000, 70_000), 1000);
/// assert_eq!(score_guess(11, 22), 500);
/// assert_eq!(score_guess(0, 8_000), 0);
/// ```
#[must_use]
pub fn score_guess(guess: u64, reference_price: u64) -> u32 {
    let ratio = if reference_price > 0 {
        let diff = guess.abs_diff(reference_price);
        (diff as f64 / reference_price as f64).min(1.0)
    } else {
        1.0
    };

    let points = (f64::from(MAX_POINTS) * (1.0 - ratio)).round();
    points.clamp(0.0, f64::from(MAX_POINTS)) as u32
}
