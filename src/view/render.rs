//! Text projection of the page
//!
//! `render` is pure: same state in, same text out.

use std::fmt::Write;

use super::state::{Phase, ViewState};

pub const LOADING_MESSAGE: &str =
    "Waking up the server... This may take 30 seconds on the first load.";
pub const EMPTY_MESSAGE: &str = "No entries yet. Be the first!";

const RULE_WIDTH: usize = 40;

/// Render the form and the list
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    render_form(state, &mut out);
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    render_list(state, &mut out);
    out
}

fn render_form(state: &ViewState, out: &mut String) {
    let draft = state.draft();

    out.push_str("Guestbook\n\n");
    match &draft.editing_id {
        Some(id) => {
            let _ = writeln!(out, "[Update Entry] editing #{} (type `cancel` to stop)", id);
        }
        None => out.push_str("[Sign Guestbook]\n"),
    }
    let _ = writeln!(out, "  Name:    {}", draft.name);
    let _ = writeln!(out, "  Message: {}", indent_continuation(&draft.message, 11));
}

fn render_list(state: &ViewState, out: &mut String) {
    match state.phase() {
        Phase::Loading => {
            let _ = writeln!(out, "{}", LOADING_MESSAGE);
        }
        Phase::Error(message) => {
            let _ = writeln!(out, "{}", message);
        }
        Phase::Ready if state.entries().is_empty() => {
            let _ = writeln!(out, "{}", EMPTY_MESSAGE);
        }
        Phase::Ready => {
            let width = state.entries().len().to_string().len();
            for (i, entry) in state.entries().iter().enumerate() {
                let _ = writeln!(out, "{:>width$}. {}", i + 1, entry.name, width = width);
                let _ = writeln!(
                    out,
                    "{}{}",
                    " ".repeat(width + 2),
                    indent_continuation(&entry.message, width + 2)
                );
            }
        }
    }
}

/// Keep multi-line text aligned under its first line
fn indent_continuation(text: &str, indent: usize) -> String {
    let pad = format!("\n{}", " ".repeat(indent));
    text.lines().collect::<Vec<_>>().join(&pad)
}
