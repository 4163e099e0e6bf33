//! Guestbook API Client
//!
//! The guestbook itself lives on a remote server. This module describes
//! the four calls the frontends need ([`GuestbookApi`]) and provides the
//! `reqwest` implementation ([`GuestbookClient`]).
//!
//! ```text
//! GET    {base}        -> [Entry]
//! POST   {base}        <- EntryPayload
//! PUT    {base}/{id}   <- EntryPayload
//! DELETE {base}/{id}
//! ```

mod error;
mod http;
mod types;

pub use error::{ClientError, ClientResult};
pub use http::GuestbookClient;
pub use types::{Entry, EntryId, EntryPayload};

use async_trait::async_trait;

/// Calls against the guestbook API
#[async_trait]
pub trait GuestbookApi: Send + Sync {
    /// Fetch the full entry list, in server order
    async fn list_entries(&self) -> ClientResult<Vec<Entry>>;

    /// Create a new entry
    async fn create_entry(&self, payload: &EntryPayload) -> ClientResult<()>;

    /// Replace the name and message of an existing entry
    async fn update_entry(&self, id: &EntryId, payload: &EntryPayload) -> ClientResult<()>;

    /// Remove an entry
    async fn delete_entry(&self, id: &EntryId) -> ClientResult<()>;
}
