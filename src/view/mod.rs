//! Guestbook page
//!
//! - **state**: the single state record and its transitions
//! - **controller**: fetch/submit/delete/edit routines against the API
//! - **prompt**: confirmation and notification seam
//! - **render**: text projection of the state

pub mod controller;
pub mod prompt;
pub mod render;
pub mod state;

pub use controller::{DeleteOutcome, GuestbookView, LoadingHook, SubmitOutcome};
pub use prompt::{AssumeYes, Prompt, TerminalPrompt};
pub use render::render;
pub use state::{FormDraft, Phase, ViewState, FETCH_FAILED_MESSAGE};
