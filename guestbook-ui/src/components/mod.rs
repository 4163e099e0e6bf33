//! UI Components
//!
//! Pieces of the guestbook page.

pub mod entry_form;
pub mod entry_list;
pub mod loading;

pub use entry_form::EntryForm;
pub use entry_list::EntryList;
pub use loading::Loading;
