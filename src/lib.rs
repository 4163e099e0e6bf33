//! # Guestbook
//!
//! Sign, browse, edit and delete guestbook messages stored behind a
//! remote HTTP API.
//!
//! The server owns the data. The page never assigns ids and never patches
//! its list locally: after every successful write it refetches the whole
//! list.
//!
//! ## Modules
//!
//! - [`client`]: HTTP API client
//! - [`view`]: page state, routines and rendering
//! - [`config`]: TOML + environment configuration
//! - [`logging`]: tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use guestbook::{GuestbookClient, GuestbookView, TerminalPrompt};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GuestbookClient::new("http://127.0.0.1:5000/guestbook", None)?;
//!     let mut view = GuestbookView::new(client, TerminalPrompt::new());
//!
//!     view.mount().await;
//!     view.set_name("Ann");
//!     view.set_message("hi");
//!     view.submit().await;
//!
//!     println!("{}", guestbook::view::render(view.state()));
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod logging;
pub mod view;

pub use client::{
    ClientError, ClientResult, Entry, EntryId, EntryPayload, GuestbookApi, GuestbookClient,
};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, DEFAULT_API_URL};

pub use view::{
    AssumeYes, DeleteOutcome, FormDraft, GuestbookView, Phase, Prompt, SubmitOutcome,
    TerminalPrompt, ViewState,
};
