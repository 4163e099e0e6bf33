//! State Management
//!
//! Page state and the routines that change it.

pub mod global;

pub use global::{provide_guestbook_state, Entry, EntryPayload, GuestbookState, Phase};
