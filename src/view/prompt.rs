//! Confirmation and notification seam
//!
//! Deleting asks the user first, and failed writes interrupt them with a
//! one-shot notice. Frontends decide how; the view only calls [`Prompt`].

use std::io::{self, BufRead, Write};

/// Question asked before deleting an entry
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure?";
/// Notice after a failed create or update
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save entry.";
/// Notice after a failed delete
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete.";

/// Blocking user interaction
pub trait Prompt {
    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to see before continuing
    fn notify(&mut self, message: &str);
}

/// Prompt over the process's stdin/stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt {
    pause_on_notify: bool,
}

impl TerminalPrompt {
    /// Notices are printed and the user is not held up
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices wait for Enter, like a modal dialog
    pub fn interactive() -> Self {
        Self {
            pause_on_notify: true,
        }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let stdin = io::stdin();
        ask_yes_no(&mut stdin.lock(), &mut io::stdout(), message).unwrap_or_else(|e| {
            tracing::warn!("Could not read confirmation: {}", e);
            false
        })
    }

    fn notify(&mut self, message: &str) {
        if self.pause_on_notify {
            let stdin = io::stdin();
            if let Err(e) = acknowledge(&mut stdin.lock(), &mut io::stdout(), message) {
                tracing::warn!("Could not show notice: {}", e);
            }
        } else {
            eprintln!("{}", message);
        }
    }
}

/// Confirms everything; notices go to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }

    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Print `message [y/N] ` and read one answer; EOF counts as no
pub fn ask_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<bool> {
    write!(output, "{} [y/N] ", message)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Print a notice and wait for a line (or EOF)
pub fn acknowledge<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> io::Result<()> {
    write!(output, "! {} (press Enter) ", message)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
