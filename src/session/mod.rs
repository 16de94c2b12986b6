//! Round controller: the session state machine.
//!
//! A session moves through three phases per round:
//! `AwaitingGuess` → (submit) → `ShowingResult` → (advance) → next round or
//! `Finished`. `restart` returns to round 0 from anywhere.

mod controller;
mod state;

pub use controller::{AdvanceOutcome, GameSession, SessionError};
pub use state::{Phase, RoundResult, SessionSummary};
