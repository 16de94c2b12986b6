//! # auction-guess
//!
//! Core logic for an auction price guessing game: the player is shown an
//! artwork, guesses its sale price, and is scored on relative error over a
//! fixed sequence of rounds.
//!
//! ## Design Principles
//!
//! 1. **Explicit State Machine**: All round progression lives in
//!    [`GameSession`], a three-phase state machine
//!    (`AwaitingGuess` → `ShowingResult` → … → `Finished`). The host UI never
//!    decides what an event means; it asks the session.
//!
//! 2. **No Ambient State**: The session owns the catalog, round index, and
//!    running total. Nothing module-level, nothing global.
//!
//! 3. **Recoverable Input Errors Only**: Malformed guesses are reported and
//!    leave the session unchanged. There is no fatal-error path.
//!
//! ## Modules
//!
//! - `catalog`: Artwork records and the ordered round catalog
//! - `input`: Guess parsing and live currency formatting
//! - `score`: The linear relative-error scoring formula
//! - `session`: The round controller state machine
//! - `ui`: Presentation adapter boundary (views, events, dispatch)
//! - `rng`: Deterministic RNG for per-session round order

pub mod catalog;
pub mod input;
pub mod rng;
pub mod score;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use crate::catalog::{ArtworkCatalog, ArtworkRecord};

pub use crate::input::{
    format_currency, live_format, parse_guess, FormattedGuess, ParseError, CURRENCY_SYMBOL,
};

pub use crate::score::{score_guess, MAX_POINTS};

pub use crate::session::{
    AdvanceOutcome, GameSession, Phase, RoundResult, SessionError, SessionSummary,
};

pub use crate::ui::{
    dispatch, Presenter, ResultView, RoundView, SummaryView, UiEvent, INVALID_GUESS_MESSAGE,
};

pub use crate::rng::SessionRng;
