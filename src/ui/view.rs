//! Outbound view data.
//!
//! Plain serde-friendly structs; the host surface renders them however it
//! likes. Prices arrive pre-formatted so every surface shows them the same
//! way.

use serde::{Deserialize, Serialize};

use crate::input::format_currency;
use crate::session::{GameSession, RoundResult};

/// Display fields for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundView {
    /// 1-based round number for display.
    pub round_number: usize,

    /// Total number of rounds.
    pub round_count: usize,

    /// Artwork title.
    pub title: String,

    /// Artist name.
    pub artist: String,

    /// Year of creation, free-form.
    pub year: String,

    /// Image reference for the host to resolve.
    pub image_ref: String,
}

impl RoundView {
    /// Build the view for the session's current round.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let artwork = session.current_artwork();
        Self {
            round_number: session.round_index() + 1,
            round_count: session.round_count(),
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            year: artwork.year.clone(),
            image_ref: artwork.image_ref.clone(),
        }
    }
}

/// Display fields for a scored guess.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultView {
    /// The guess, currency-formatted.
    pub guess: String,

    /// The reference price, currency-formatted.
    pub reference_price: String,

    /// Points awarded this round.
    pub points: u32,

    /// Whether this was the final round.
    pub is_last_round: bool,

    /// Label for the advance control.
    pub advance_label: String,
}

impl ResultView {
    /// Build the view for a round result.
    #[must_use]
    pub fn from_result(result: &RoundResult, is_last_round: bool) -> Self {
        let advance_label = if is_last_round {
            "See final score"
        } else {
            "Next artwork"
        };

        Self {
            guess: format_currency(result.guess),
            reference_price: format_currency(result.reference_price),
            points: result.points,
            is_last_round,
            advance_label: advance_label.to_string(),
        }
    }
}

/// Display fields for the finish screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Final score total.
    pub total_score: u32,

    /// Highest total the catalog allowed.
    pub max_score: u32,

    /// Number of rounds played.
    pub round_count: usize,

    /// Per-round results, in play order.
    pub breakdown: Vec<RoundResult>,
}

impl SummaryView {
    /// Build the finish-screen view from the session.
    #[must_use]
    pub fn from_session(session: &GameSession) -> Self {
        let summary = session.summary();
        Self {
            total_score: summary.total_score,
            max_score: summary.max_score,
            round_count: summary.round_count,
            breakdown: session.results().iter().copied().collect(),
        }
    }
}
