//! Inbound user events.

/// A discrete user action, as reported by the host surface.
///
/// Events that carry a `String` carry the guess field's raw text at the
/// moment of the action; the core does its own normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The guess field changed (keystroke, paste).
    InputChanged(String),

    /// The submit control was activated.
    SubmitPressed(String),

    /// The advance control was activated.
    AdvancePressed,

    /// The restart control was activated.
    RestartPressed,

    /// Enter was pressed anywhere. What it means depends on the session
    /// phase; [`super::dispatch`] resolves it.
    EnterPressed(String),
}
