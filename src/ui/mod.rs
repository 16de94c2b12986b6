//! Presentation adapter boundary.
//!
//! The host surface (DOM, TUI, test double) implements [`Presenter`] and
//! feeds [`UiEvent`]s into [`dispatch`]. View structs carry everything the
//! surface needs to render; the session itself never crosses the boundary.

mod event;
mod presenter;
mod view;

pub use event::UiEvent;
pub use presenter::{dispatch, Presenter, INVALID_GUESS_MESSAGE};
pub use view::{ResultView, RoundView, SummaryView};
