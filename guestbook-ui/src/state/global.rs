//! Guestbook Page State
//!
//! Reactive state using Leptos signals. Every field is written only by
//! the routines on [`GuestbookState`]; writes are never merged into the
//! list locally, a successful write always refetches.

use leptos::*;
use serde::{Deserialize, Deserializer};

use crate::api;

/// Inline message shown when the list cannot be read
pub const FETCH_FAILED_MESSAGE: &str = "The server is waking up... please wait a moment.";

const CONFIRM_DELETE_MESSAGE: &str = "Are you sure?";
const SAVE_FAILED_MESSAGE: &str = "Failed to save entry.";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete.";

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct GuestbookState {
    /// Server's last-known list
    pub entries: RwSignal<Vec<Entry>>,
    /// Draft name
    pub name: RwSignal<String>,
    /// Draft message
    pub message: RwSignal<String>,
    /// Entry being edited, if any
    pub editing_id: RwSignal<Option<String>>,
    /// Loading / error / ready
    pub phase: RwSignal<Phase>,
}

/// List phase
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error(String),
    Ready,
}

/// Guestbook entry from the API
#[derive(Clone, Debug, serde::Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    pub message: String,
}

/// Body of create and update requests
#[derive(Clone, Debug, serde::Serialize, PartialEq, Eq)]
pub struct EntryPayload {
    pub name: String,
    pub message: String,
}

/// Ids arrive as numbers or strings; keep the text either way
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported entry id: {}",
            other
        ))),
    }
}

/// Provide page state to the component tree
pub fn provide_guestbook_state() {
    let state = GuestbookState {
        entries: create_rw_signal(Vec::new()),
        name: create_rw_signal(String::new()),
        message: create_rw_signal(String::new()),
        editing_id: create_rw_signal(None),
        phase: create_rw_signal(Phase::Loading),
    };

    provide_context(state);
}

impl GuestbookState {
    /// Refetch the full list
    pub async fn refresh(self) {
        self.phase.set(Phase::Loading);

        match api::fetch_entries().await {
            Ok(entries) => {
                self.entries.set(entries);
                self.phase.set(Phase::Ready);
            }
            Err(e) => {
                web_sys::console::error_1(&e.into());
                self.phase.set(Phase::Error(FETCH_FAILED_MESSAGE.to_string()));
            }
        }
    }

    /// Create, or update the entry being edited
    pub async fn submit(self) {
        let payload = EntryPayload {
            name: self.name.get_untracked(),
            message: self.message.get_untracked(),
        };

        let result = match self.editing_id.get_untracked() {
            Some(id) => api::update_entry(&id, &payload).await,
            None => api::create_entry(&payload).await,
        };

        match result {
            Ok(()) => {
                self.editing_id.set(None);
                self.name.set(String::new());
                self.message.set(String::new());
                self.refresh().await;
            }
            Err(e) => {
                web_sys::console::warn_1(&e.into());
                alert(SAVE_FAILED_MESSAGE);
            }
        }
    }

    /// Delete after confirmation
    pub async fn delete(self, id: String) {
        if !confirm(CONFIRM_DELETE_MESSAGE) {
            return;
        }

        match api::delete_entry(&id).await {
            Ok(()) => self.refresh().await,
            Err(e) => {
                web_sys::console::warn_1(&e.into());
                alert(DELETE_FAILED_MESSAGE);
            }
        }
    }

    /// Load an entry into the form, replacing the unsaved draft
    pub fn start_edit(self, entry: &Entry) {
        self.editing_id.set(Some(entry.id.clone()));
        self.name.set(entry.name.clone());
        self.message.set(entry.message.clone());
    }

    /// Leave edit mode; the form text stays
    pub fn cancel_edit(self) {
        self.editing_id.set(None);
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_ids_as_text() {
        let entries: Vec<Entry> = serde_json::from_str(
            r#"[{"id": 1, "name": "Ann", "message": "hi"},
                {"id": "x/1", "name": "Bo", "message": "hey"}]"#,
        )
        .unwrap();

        assert_eq!(entries[0].id, "1");
        assert_eq!(entries[1].id, "x/1");
    }

    #[test]
    fn test_rejects_object_id() {
        let result: Result<Entry, _> =
            serde_json::from_str(r#"{"id": {"oid": 1}, "name": "Ann", "message": "hi"}"#);
        assert!(result.is_err());
    }
}
