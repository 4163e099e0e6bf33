//! API Access
//!
//! HTTP calls against the guestbook API.

pub mod client;

pub use client::{create_entry, delete_entry, fetch_entries, get_api_base, update_entry};
