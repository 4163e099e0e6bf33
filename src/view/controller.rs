//! GuestbookView routines
//!
//! Fetch, submit, delete and edit handling on top of [`ViewState`].
//! Writes never patch the local list: every successful write is
//! followed by exactly one [`GuestbookView::refresh`].
//!
//! Overlapping actions are not serialized beyond what `&mut self`
//! enforces. Two views sharing one API can interleave, and then the last
//! list response to arrive wins.

use crate::client::{Entry, EntryId, GuestbookApi};

use super::prompt::{Prompt, CONFIRM_DELETE_MESSAGE, DELETE_FAILED_MESSAGE, SAVE_FAILED_MESSAGE};
use super::state::ViewState;

/// Result of [`GuestbookView::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated,
    /// The write failed; the draft is untouched
    Failed,
}

/// Result of [`GuestbookView::delete`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent
    Cancelled,
    Failed,
}

/// Called with the state right after a fetch starts
pub type LoadingHook = Box<dyn FnMut(&ViewState)>;

/// One guestbook page bound to an API and a prompt
pub struct GuestbookView<A, P> {
    api: A,
    prompt: P,
    state: ViewState,
    on_loading: Option<LoadingHook>,
}

impl<A: GuestbookApi, P: Prompt> GuestbookView<A, P> {
    pub fn new(api: A, prompt: P) -> Self {
        Self {
            api,
            prompt,
            state: ViewState::new(),
            on_loading: None,
        }
    }

    /// Redraw hook run after the phase turns Loading, before the read is awaited
    pub fn on_loading(&mut self, hook: impl FnMut(&ViewState) + 'static) {
        self.on_loading = Some(Box::new(hook));
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Initial load of the page
    pub async fn mount(&mut self) -> bool {
        self.refresh().await
    }

    /// Re-read the full entry list from the server
    ///
    /// Returns whether the fetch succeeded. On failure the previous list
    /// is kept and the page shows the waking-up message.
    pub async fn refresh(&mut self) -> bool {
        self.state.begin_fetch();
        if let Some(hook) = self.on_loading.as_mut() {
            hook(&self.state);
        }

        match self.api.list_entries().await {
            Ok(entries) => {
                tracing::debug!(count = entries.len(), "Fetched guestbook entries");
                self.state.fetch_succeeded(entries);
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch guestbook entries");
                self.state.fetch_failed();
                false
            }
        }
    }

    /// Create a new entry, or update the one being edited
    pub async fn submit(&mut self) -> SubmitOutcome {
        let draft = self.state.draft();
        let payload = draft.payload();

        let (result, outcome) = match &draft.editing_id {
            Some(id) => (
                self.api.update_entry(id, &payload).await,
                SubmitOutcome::Updated,
            ),
            None => (self.api.create_entry(&payload).await, SubmitOutcome::Created),
        };

        match result {
            Ok(()) => {
                tracing::info!(?outcome, "Saved guestbook entry");
                self.state.submit_succeeded();
                self.refresh().await;
                outcome
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to save guestbook entry");
                self.prompt.notify(SAVE_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete an entry after the user confirms
    pub async fn delete(&mut self, id: &EntryId) -> DeleteOutcome {
        if !self.prompt.confirm(CONFIRM_DELETE_MESSAGE) {
            return DeleteOutcome::Cancelled;
        }

        match self.api.delete_entry(id).await {
            Ok(()) => {
                tracing::info!(%id, "Deleted guestbook entry");
                self.refresh().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::warn!(%id, error = %e, "Failed to delete guestbook entry");
                self.prompt.notify(DELETE_FAILED_MESSAGE);
                DeleteOutcome::Failed
            }
        }
    }

    pub fn start_edit(&mut self, entry: &Entry) {
        self.state.start_edit(entry);
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.set_name(name);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.state.set_message(message);
    }
}
