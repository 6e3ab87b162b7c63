//! View models behind the admin pages.
//!
//! A view is mounted per page request: it fetches what it shows, takes the
//! user's action, and is discarded once the response is rendered.

pub mod detail;
pub mod list;
pub mod lookups;
pub mod match_history;
pub mod notice;
pub mod page;
pub mod render;

use thiserror::Error;

use crate::client::SubmitOutcome;
use crate::domain::{FormError, ValidationError};

pub use detail::EntityDetailView;
pub use list::EntityListView;
pub use match_history::{HistorySubject, MatchHistoryView};
pub use notice::{Notice, NoticeLevel, ScrollTarget};
pub use render::Renderer;

/// Result of submitting a create or edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    /// Blocked by validation; no request was sent.
    Invalid(ValidationError),
    Sent(SubmitOutcome),
}

impl FormSubmission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, FormSubmission::Sent(SubmitOutcome::Accepted))
    }
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("select the change option before submitting edits")]
    ChangeModeRequired,
    #[error("select the delete option before confirming deletion")]
    DeleteModeRequired,
    #[error(transparent)]
    Form(#[from] FormError),
}
