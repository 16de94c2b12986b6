//! The `GameSession` round controller.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::state::{Phase, RoundResult, SessionSummary};
use crate::catalog::{ArtworkCatalog, ArtworkRecord};
use crate::input::{parse_guess, ParseError};
use crate::rng::SessionRng;
use crate::score::{score_guess, MAX_POINTS};

/// Error from a session operation.
///
/// Both variants are fully recoverable: the session is left exactly as it
/// was, still accepting the operations its phase allows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The submitted guess had no usable digits.
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] ParseError),

    /// The operation is not valid in the session's current phase.
    #[error("operation requires {expected:?}, session is in {actual:?}")]
    Phase {
        /// Phase the operation needs.
        expected: Phase,
        /// Phase the session was in.
        actual: Phase,
    },
}

/// What `advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the round at this index; back to `AwaitingGuess`.
    NextRound(usize),
    /// That was the last round; the session is `Finished`.
    Finished(SessionSummary),
}

/// One play-through of the catalog.
///
/// Owns the catalog and all mutable session state. All state transitions go
/// through [`submit_guess`](Self::submit_guess),
/// [`advance`](Self::advance), and [`restart`](Self::restart); the host UI
/// reads phase and views between events.
///
/// Cloning is cheap: the result history is a persistent `im::Vector`, so a
/// host can snapshot the session before an event if it wants undo.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameSession {
    catalog: ArtworkCatalog,
    phase: Phase,
    round_index: usize,
    total_score: u32,
    results: Vector<RoundResult>,
}

impl GameSession {
    /// Create a session over the catalog, in round order.
    ///
    /// Starts in `AwaitingGuess` at round 0 with a zero total.
    ///
    /// Panics if the catalog is empty.
    #[must_use]
    pub fn new(catalog: ArtworkCatalog) -> Self {
        assert!(!catalog.is_empty(), "Catalog must have at least one artwork");

        Self {
            catalog,
            phase: Phase::AwaitingGuess,
            round_index: 0,
            total_score: 0,
            results: Vector::new(),
        }
    }

    /// Create a session with a seeded one-time shuffle of the round order.
    ///
    /// The order is fixed for the whole session; the same seed over the same
    /// catalog reproduces the same order.
    #[must_use]
    pub fn shuffled(catalog: ArtworkCatalog, seed: u64) -> Self {
        let mut rng = SessionRng::new(seed);
        Self::new(catalog.shuffled(&mut rng))
    }

    // === Accessors ===

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current round index (0-based). Stays within the catalog even after
    /// the session finishes.
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.round_index
    }

    /// Number of rounds in the session.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.catalog.len()
    }

    /// Running score total.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// The artwork for the current round.
    #[must_use]
    pub fn current_artwork(&self) -> &ArtworkRecord {
        self.catalog
            .get(self.round_index)
            .expect("round index within catalog")
    }

    /// The catalog this session plays through, in session order.
    #[must_use]
    pub fn catalog(&self) -> &ArtworkCatalog {
        &self.catalog
    }

    /// Whether the current round is the last one.
    #[must_use]
    pub fn is_last_round(&self) -> bool {
        self.round_index + 1 == self.catalog.len()
    }

    /// The result currently on display, if any.
    ///
    /// `None` in `AwaitingGuess`: advancing to a new round clears the
    /// displayed result.
    #[must_use]
    pub fn last_result(&self) -> Option<&RoundResult> {
        match self.phase {
            Phase::AwaitingGuess => None,
            Phase::ShowingResult | Phase::Finished => self.results.back(),
        }
    }

    /// All results recorded so far, in round order.
    #[must_use]
    pub fn results(&self) -> &Vector<RoundResult> {
        &self.results
    }

    /// Final standing (valid at any point; `total_score` is the running
    /// total until the session finishes).
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            total_score: self.total_score,
            round_count: self.catalog.len(),
            max_score: MAX_POINTS * self.catalog.len() as u32,
        }
    }

    // === Transitions ===

    /// Score a raw guess against the current round.
    ///
    /// Valid only in `AwaitingGuess`. On success the result is recorded,
    /// the total updated, and the session moves to `ShowingResult`. Any
    /// failure leaves the session unchanged, still awaiting a guess.
    pub fn submit_guess(&mut self, raw: &str) -> Result<RoundResult, SessionError> {
        self.require_phase(Phase::AwaitingGuess)?;

        let guess = parse_guess(raw)?;
        let reference_price = self.current_artwork().reference_price;
        let points = score_guess(guess, reference_price);

        let result = RoundResult {
            round: self.round_index,
            guess,
            reference_price,
            points,
        };

        self.total_score += points;
        self.results.push_back(result);
        self.phase = Phase::ShowingResult;

        debug_assert_eq!(
            self.total_score,
            self.results.iter().map(|r| r.points).sum::<u32>()
        );

        log::debug!(
            "round {} scored: guess {} vs reference {} -> {} points (total {})",
            self.round_index,
            guess,
            reference_price,
            points,
            self.total_score
        );

        Ok(result)
    }

    /// Leave the current result screen.
    ///
    /// Valid only in `ShowingResult`. Moves to the next round, or to
    /// `Finished` after the last one.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        self.require_phase(Phase::ShowingResult)?;

        if self.is_last_round() {
            self.phase = Phase::Finished;
            let summary = self.summary();
            log::debug!(
                "session finished: {} of {} points over {} rounds",
                summary.total_score,
                summary.max_score,
                summary.round_count
            );
            Ok(AdvanceOutcome::Finished(summary))
        } else {
            self.round_index += 1;
            self.phase = Phase::AwaitingGuess;
            log::trace!("advanced to round {}", self.round_index);
            Ok(AdvanceOutcome::NextRound(self.round_index))
        }
    }

    /// Reset to round 0 with a zero total.
    ///
    /// Valid from any phase. The round order is kept as-is.
    pub fn restart(&mut self) {
        self.phase = Phase::AwaitingGuess;
        self.round_index = 0;
        self.total_score = 0;
        self.results = Vector::new();
        log::debug!("session restarted");
    }

    fn require_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::Phase {
                expected,
                actual: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_round_session() -> GameSession {
        GameSession::new(ArtworkCatalog::from_records(vec![
            ArtworkRecord::new("First", "Artist", 10_000),
            ArtworkRecord::new("Second", "Artist", 20_000),
        ]))
    }

    #[test]
    fn test_initial_state() {
        let session = two_round_session();

        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.round_index(), 0);
        assert_eq!(session.total_score(), 0);
        assert_eq!(session.current_artwork().title, "First");
        assert!(session.last_result().is_none());
    }

    #[test]
    #[should_panic(expected = "at least one artwork")]
    fn test_empty_catalog_panics() {
        let _ = GameSession::new(ArtworkCatalog::new());
    }

    #[test]
    fn test_submit_records_result() {
        let mut session = two_round_session();

        let result = session.submit_guess("10 000").unwrap();

        assert_eq!(result.guess, 10_000);
        assert_eq!(result.reference_price, 10_000);
        assert_eq!(result.points, 1000);
        assert_eq!(session.phase(), Phase::ShowingResult);
        assert_eq!(session.total_score(), 1000);
        assert_eq!(session.last_result(), Some(&result));
    }

    #[test]
    fn test_invalid_guess_leaves_state_unchanged() {
        let mut session = two_round_session();

        let err = session.submit_guess("no digits").unwrap_err();

        assert_eq!(err, SessionError::InvalidGuess(ParseError::Empty));
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.total_score(), 0);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_submit_gated_by_phase() {
        let mut session = two_round_session();
        session.submit_guess("5000").unwrap();

        let err = session.submit_guess("5000").unwrap_err();
        assert!(matches!(err, SessionError::Phase { actual: Phase::ShowingResult, .. }));
        assert_eq!(session.results().len(), 1);
    }

    #[test]
    fn test_advance_gated_by_phase() {
        let mut session = two_round_session();

        let err = session.advance().unwrap_err();
        assert!(matches!(err, SessionError::Phase { actual: Phase::AwaitingGuess, .. }));
        assert_eq!(session.round_index(), 0);
    }

    #[test]
    fn test_advance_moves_to_next_round() {
        let mut session = two_round_session();
        session.submit_guess("9000").unwrap();

        let outcome = session.advance().unwrap();

        assert_eq!(outcome, AdvanceOutcome::NextRound(1));
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.current_artwork().title, "Second");
        assert!(session.last_result().is_none()); // cleared on round load
        assert!(session.is_last_round());
    }

    #[test]
    fn test_advance_from_last_round_finishes() {
        let mut session = two_round_session();
        session.submit_guess("10000").unwrap();
        session.advance().unwrap();
        session.submit_guess("20000").unwrap();

        let outcome = session.advance().unwrap();

        match outcome {
            AdvanceOutcome::Finished(summary) => {
                assert_eq!(summary.total_score, 2000);
                assert_eq!(summary.round_count, 2);
                assert_eq!(summary.max_score, 2000);
            }
            other => panic!("expected Finished, got {:?}", other),
        }
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn test_total_is_sum_of_results() {
        let mut session = two_round_session();
        session.submit_guess("5000").unwrap(); // 500 points
        session.advance().unwrap();
        session.submit_guess("30000").unwrap(); // 500 points

        let sum: u32 = session.results().iter().map(|r| r.points).sum();
        assert_eq!(session.total_score(), sum);
        assert_eq!(session.total_score(), 1000);
    }

    #[test]
    fn test_restart_from_every_phase() {
        let mut session = two_round_session();

        // From AwaitingGuess
        session.restart();
        assert_eq!(session.phase(), Phase::AwaitingGuess);

        // From ShowingResult
        session.submit_guess("1").unwrap();
        session.restart();
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.round_index(), 0);
        assert_eq!(session.total_score(), 0);
        assert!(session.results().is_empty());

        // From Finished
        session.submit_guess("1").unwrap();
        session.advance().unwrap();
        session.submit_guess("1").unwrap();
        session.advance().unwrap();
        assert_eq!(session.phase(), Phase::Finished);

        session.restart();
        assert_eq!(session.phase(), Phase::AwaitingGuess);
        assert_eq!(session.round_index(), 0);
        assert_eq!(session.total_score(), 0);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut session = two_round_session();
        let snapshot = session.clone();

        session.submit_guess("10000").unwrap();

        assert_eq!(snapshot.phase(), Phase::AwaitingGuess);
        assert_eq!(snapshot.total_score(), 0);
        assert_eq!(session.total_score(), 1000);
    }

    #[test]
    fn test_shuffled_session_plays_whole_catalog() {
        let catalog = ArtworkCatalog::from_records(vec![
            ArtworkRecord::new("A", "Artist", 100),
            ArtworkRecord::new("B", "Artist", 200),
            ArtworkRecord::new("C", "Artist", 300),
        ]);

        let mut session = GameSession::shuffled(catalog, 42);
        let mut seen = Vec::new();

        loop {
            seen.push(session.current_artwork().title.clone());
            session.submit_guess("1").unwrap();
            match session.advance().unwrap() {
                AdvanceOutcome::NextRound(_) => {}
                AdvanceOutcome::Finished(_) => break,
            }
        }

        seen.sort();
        assert_eq!(seen, vec!["A", "B", "C"]);
    }
}
