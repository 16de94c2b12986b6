//! Session state types: phases, round results, summaries.

use serde::{Deserialize, Serialize};

/// Where the session is within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// A round is on display and a guess has not been scored yet.
    AwaitingGuess,
    /// The current round's result is on display.
    ShowingResult,
    /// All rounds played; the final score is on display.
    Finished,
}

/// Outcome of one scored guess.
///
/// Transient display data, but also kept in the session's result history so
/// the finish screen can show a per-round breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// Round index this result belongs to (0-based).
    pub round: usize,

    /// The normalized guess.
    pub guess: u64,

    /// The reference price the guess was scored against.
    pub reference_price: u64,

    /// Points awarded, in `[0, 1000]`.
    pub points: u32,
}

/// Final standing of a finished session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Sum of points over all rounds.
    pub total_score: u32,

    /// Number of rounds played.
    pub round_count: usize,

    /// Highest total the catalog allowed (`1000 * round_count`).
    pub max_score: u32,
}
