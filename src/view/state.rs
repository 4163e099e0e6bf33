//! GuestbookView state record
//!
//! All page state lives in one [`ViewState`]. It only changes through
//! the transition methods below, so the Loading/Error/Ready machine
//! stays exhaustive:
//!
//! ```text
//!            begin_fetch
//! Ready ─────────────────┐
//! Error ─────────────────┤
//!                        ▼
//!                     Loading ──fetch_succeeded──▶ Ready
//!                        │
//!                        └──────fetch_failed─────▶ Error
//! ```

use crate::client::{Entry, EntryId, EntryPayload};

/// Inline message shown when the entry list cannot be read
pub const FETCH_FAILED_MESSAGE: &str = "The server is waking up... please wait a moment.";

/// Where the list part of the page currently is
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// A fetch is in flight
    #[default]
    Loading,
    /// The last fetch failed; carries the user-facing message
    Error(String),
    /// The last fetch succeeded
    Ready,
}

/// The user's in-progress form input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormDraft {
    pub name: String,
    pub message: String,
    /// Entry being edited; `None` means submitting creates a new entry
    pub editing_id: Option<EntryId>,
}

impl FormDraft {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Both fields hold something other than whitespace
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.message.trim().is_empty()
    }

    pub fn payload(&self) -> EntryPayload {
        EntryPayload::new(self.name.clone(), self.message.clone())
    }
}

/// Complete state of one guestbook page
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    entries: Vec<Entry>,
    draft: FormDraft,
    phase: Phase,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server's last-known list, in server order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Entry at a 1-based position in the rendered list
    pub fn entry_at(&self, position: usize) -> Option<&Entry> {
        position.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn begin_fetch(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Replace the list wholesale with the server's response
    pub fn fetch_succeeded(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.phase = Phase::Ready;
    }

    /// Keep the previous list and surface the read-failure message
    pub fn fetch_failed(&mut self) {
        self.phase = Phase::Error(FETCH_FAILED_MESSAGE.to_string());
    }

    /// Leave edit mode and empty the form after a confirmed write
    pub fn submit_succeeded(&mut self) {
        self.draft = FormDraft::default();
    }

    /// Load an entry into the form, discarding any unsaved draft
    pub fn start_edit(&mut self, entry: &Entry) {
        self.draft = FormDraft {
            name: entry.name.clone(),
            message: entry.message.clone(),
            editing_id: Some(entry.id.clone()),
        };
    }

    /// Leave edit mode; the draft text stays as typed
    pub fn cancel_edit(&mut self) {
        self.draft.editing_id = None;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.draft.message = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str, message: &str) -> Entry {
        Entry {
            id: EntryId::new(id),
            name: name.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = ViewState::new();
        assert!(state.is_loading());
        assert!(state.entries().is_empty());
        assert_eq!(state.draft(), &FormDraft::default());
    }

    #[test]
    fn test_fetch_transitions() {
        let mut state = ViewState::new();
        state.fetch_succeeded(vec![entry("1", "Ann", "hi")]);
        assert_eq!(state.phase(), &Phase::Ready);

        state.begin_fetch();
        assert!(state.is_loading());
        assert_eq!(state.entries().len(), 1);

        state.fetch_failed();
        assert_eq!(state.error(), Some(FETCH_FAILED_MESSAGE));
        assert_eq!(state.entries(), &[entry("1", "Ann", "hi")]);

        state.begin_fetch();
        assert_eq!(state.error(), None);
        state.fetch_succeeded(Vec::new());
        assert_eq!(state.phase(), &Phase::Ready);
        assert!(state.entries().is_empty());
    }

    #[test]
    fn test_start_edit_overwrites_draft() {
        let mut state = ViewState::new();
        state.set_name("Someone else");
        state.set_message("half typed");

        state.start_edit(&entry("1", "Ann", "hi"));

        assert_eq!(state.draft().name, "Ann");
        assert_eq!(state.draft().message, "hi");
        assert_eq!(state.draft().editing_id, Some(EntryId::new("1")));
    }

    #[test]
    fn test_start_edit_replaces_previous_edit() {
        let mut state = ViewState::new();
        state.start_edit(&entry("1", "Ann", "hi"));
        state.start_edit(&entry("2", "Bo", "hey"));
        assert_eq!(state.draft().editing_id, Some(EntryId::new("2")));
    }

    #[test]
    fn test_cancel_edit_keeps_text() {
        let mut state = ViewState::new();
        state.start_edit(&entry("1", "Ann", "hi"));
        state.set_message("hello");

        state.cancel_edit();

        assert!(!state.draft().is_editing());
        assert_eq!(state.draft().name, "Ann");
        assert_eq!(state.draft().message, "hello");
    }

    #[test]
    fn test_submit_succeeded_resets_draft() {
        let mut state = ViewState::new();
        state.start_edit(&entry("1", "Ann", "hi"));
        state.submit_succeeded();
        assert_eq!(state.draft(), &FormDraft::default());
    }

    #[test]
    fn test_submittable() {
        let mut draft = FormDraft::default();
        assert!(!draft.is_submittable());
        draft.name = "Ann".to_string();
        draft.message = "   ".to_string();
        assert!(!draft.is_submittable());
        draft.message = "hi".to_string();
        assert!(draft.is_submittable());
    }

    #[test]
    fn test_entry_at_is_one_based() {
        let mut state = ViewState::new();
        state.fetch_succeeded(vec![entry("a", "Ann", "hi"), entry("b", "Bo", "hey")]);
        assert_eq!(state.entry_at(0), None);
        assert_eq!(state.entry_at(1).map(|e| e.name.as_str()), Some("Ann"));
        assert_eq!(state.entry_at(2).map(|e| e.name.as_str()), Some("Bo"));
        assert_eq!(state.entry_at(3), None);
    }
}
