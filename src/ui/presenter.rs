//! The `Presenter` trait and event dispatch.
//!
//! `dispatch` is the single place that decides what an event means. The
//! original DOM version wired overlapping listeners per element and stopped
//! propagation by hand; here the session phase is the one source of truth,
//! so Enter has exactly one interpretation at any moment.

use crate::input::{live_format, FormattedGuess};
use crate::session::{AdvanceOutcome, GameSession, SessionError};

use super::event::UiEvent;
use super::view::{ResultView, RoundView, SummaryView};

/// Validation message shown for a guess with no digits.
pub const INVALID_GUESS_MESSAGE: &str =
    "Please enter a valid non-negative number for your guess.";

/// The display surface, as seen from the core.
///
/// Implementations push state to whatever actually renders: a DOM shell, a
/// terminal, a test recorder. All methods are fire-and-forget; the core
/// never reads back.
pub trait Presenter {
    /// Show a round's artwork fields and prompt for a guess.
    fn render_round(&mut self, view: &RoundView);

    /// Show a scored result over the current round.
    fn render_result(&mut self, view: &ResultView);

    /// Show the finish screen.
    fn render_summary(&mut self, view: &SummaryView);

    /// Show a validation message, leaving the round on display.
    fn render_error(&mut self, message: &str);

    /// Replace the guess field's text and cursor position.
    fn set_guess_field(&mut self, field: &FormattedGuess);

    /// Clear the guess field.
    fn clear_guess_field(&mut self);
}

/// Route one user event through the session and back out to the presenter.
///
/// Phase-dependent events (`EnterPressed`) are resolved by consulting
/// [`GameSession::phase`]. Events that make no sense in the current phase
/// are ignored.
pub fn dispatch<P: Presenter>(session: &mut GameSession, presenter: &mut P, event: UiEvent) {
    use crate::session::Phase;

    match event {
        UiEvent::InputChanged(raw) => {
            presenter.set_guess_field(&live_format(&raw));
        }
        UiEvent::SubmitPressed(raw) => submit(session, presenter, &raw),
        UiEvent::AdvancePressed => advance(session, presenter),
        UiEvent::RestartPressed => restart(session, presenter),
        UiEvent::EnterPressed(raw) => match session.phase() {
            Phase::AwaitingGuess => submit(session, presenter, &raw),
            Phase::ShowingResult => advance(session, presenter),
            Phase::Finished => restart(session, presenter),
        },
    }
}

fn submit<P: Presenter>(session: &mut GameSession, presenter: &mut P, raw: &str) {
    match session.submit_guess(raw) {
        Ok(result) => {
            let view = ResultView::from_result(&result, session.is_last_round());
            presenter.render_result(&view);
        }
        Err(SessionError::InvalidGuess(_)) => {
            presenter.render_error(INVALID_GUESS_MESSAGE);
        }
        Err(err @ SessionError::Phase { .. }) => {
            log::debug!("ignoring submit: {}", err);
        }
    }
}

fn advance<P: Presenter>(session: &mut GameSession, presenter: &mut P) {
    match session.advance() {
        Ok(AdvanceOutcome::NextRound(_)) => {
            presenter.clear_guess_field();
            presenter.render_round(&RoundView::from_session(session));
        }
        Ok(AdvanceOutcome::Finished(_)) => {
            presenter.render_summary(&SummaryView::from_session(session));
        }
        Err(err) => {
            log::debug!("ignoring advance: {}", err);
        }
    }
}

fn restart<P: Presenter>(session: &mut GameSession, presenter: &mut P) {
    session.restart();
    presenter.clear_guess_field();
    presenter.render_round(&RoundView::from_session(session));
}
