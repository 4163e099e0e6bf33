//! Guestbook
//!
//! Interactive terminal rendition of the guestbook page. The form and the
//! list are redrawn after every command.
//!
//! # Configuration
//!
//! See [`guestbook::config`]. `--api-url` beats `GUESTBOOK_API_URL`, which
//! beats the config file.

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use guestbook::view::render;
use guestbook::{Config, GuestbookApi, GuestbookClient, GuestbookView, Prompt, TerminalPrompt};

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sign the guestbook from your terminal")]
struct Args {
    /// Guestbook collection URL
    #[arg(long)]
    api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// A line typed at the page prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageCommand {
    Sign,
    Edit(usize),
    Cancel,
    Delete(usize),
    Refresh,
    Help,
    Quit,
}

impl PageCommand {
    fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default().to_ascii_lowercase();
        let position = words.next();

        let at = |position: Option<&str>| -> Result<usize, String> {
            position
                .ok_or_else(|| format!("Usage: {} <number>", command))?
                .parse()
                .map_err(|_| format!("Not an entry number: {}", position.unwrap_or_default()))
        };

        match command.as_str() {
            "sign" | "s" | "update" => Ok(Self::Sign),
            "edit" | "e" => at(position).map(Self::Edit),
            "cancel" | "c" => Ok(Self::Cancel),
            "delete" | "d" | "rm" => at(position).map(Self::Delete),
            "refresh" | "r" => Ok(Self::Refresh),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(format!("Unknown command: {} (try `help`)", other)),
        }
    }
}

const HELP: &str = "\
Commands:
  sign          fill in the form and submit it (updates while editing)
  edit <n>      load entry n into the form
  cancel        stop editing (the form text is kept)
  delete <n>    delete entry n
  refresh       reload the list
  help          show this help
  quit          leave";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::resolve(args.config.as_deref())?;
    if let Some(url) = args.api_url {
        config.api.url = url;
    }
    guestbook::logging::init(&config.logging);

    tracing::info!("Guestbook v{} using {}", env!("CARGO_PKG_VERSION"), config.api.url);

    let client = GuestbookClient::from_config(&config.api)?;
    let mut view = GuestbookView::new(client, TerminalPrompt::interactive());
    // draw the waking-up page while a fetch is pending
    view.on_loading(|state| {
        print!("\n{}", render(state));
        let _ = io::stdout().flush();
    });

    view.mount().await;

    loop {
        print!("\n{}\n> ", render(view.state()));
        io::stdout().flush()?;

        let Some(line) = read_line(&mut io::stdin().lock())? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match PageCommand::parse(&line) {
            Err(message) => println!("{}", message),
            Ok(PageCommand::Quit) => break,
            Ok(PageCommand::Help) => println!("{}", HELP),
            Ok(PageCommand::Refresh) => {
                view.refresh().await;
            }
            Ok(PageCommand::Cancel) => view.cancel_edit(),
            Ok(PageCommand::Edit(n)) => match view.state().entry_at(n).cloned() {
                Some(entry) => view.start_edit(&entry),
                None => println!("No entry #{}", n),
            },
            Ok(PageCommand::Delete(n)) => match view.state().entry_at(n).map(|e| e.id.clone()) {
                Some(id) => {
                    view.delete(&id).await;
                }
                None => println!("No entry #{}", n),
            },
            Ok(PageCommand::Sign) => {
                if fill_draft(&mut view)? {
                    view.submit().await;
                }
            }
        }
    }

    Ok(())
}

/// Ask for both form fields; `false` when input ended first
fn fill_draft<A: GuestbookApi, P: Prompt>(view: &mut GuestbookView<A, P>) -> io::Result<bool> {
    let current = view.state().draft().name.clone();
    let Some(name) = read_field(&mut io::stdin().lock(), &mut io::stdout(), "Your Name", &current)?
    else {
        return Ok(false);
    };
    view.set_name(name);

    let current = view.state().draft().message.clone();
    let Some(message) = read_field(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        "Leave a message...",
        &current,
    )?
    else {
        return Ok(false);
    };
    view.set_message(message);

    Ok(view.state().draft().is_submittable())
}

/// Read one required form field
///
/// An empty answer keeps `current`; the field is asked again while the
/// result would still be blank. `None` on end of input.
fn read_field<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<String>> {
    loop {
        if current.is_empty() {
            write!(output, "{}: ", label)?;
        } else {
            write!(output, "{} [{}]: ", label, current)?;
        }
        output.flush()?;

        let Some(answer) = read_line(input)? else {
            return Ok(None);
        };

        let value = if answer.is_empty() {
            current.to_string()
        } else {
            answer
        };
        if !value.trim().is_empty() {
            return Ok(Some(value));
        }
        writeln!(output, "{} is required.", label)?;
    }
}

/// One line without its terminator; `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_commands() {
        assert_eq!(PageCommand::parse("sign"), Ok(PageCommand::Sign));
        assert_eq!(PageCommand::parse("  EDIT 2 "), Ok(PageCommand::Edit(2)));
        assert_eq!(PageCommand::parse("d 1"), Ok(PageCommand::Delete(1)));
        assert_eq!(PageCommand::parse("cancel"), Ok(PageCommand::Cancel));
        assert_eq!(PageCommand::parse("q"), Ok(PageCommand::Quit));
        assert!(PageCommand::parse("edit").is_err());
        assert!(PageCommand::parse("delete two").is_err());
        assert!(PageCommand::parse("dance").is_err());
    }

    #[test]
    fn test_read_field_reasks_until_filled() {
        let mut input = Cursor::new(b"\n   \nAnn\n".to_vec());
        let mut output = Vec::new();

        let value = read_field(&mut input, &mut output, "Your Name", "").unwrap();

        assert_eq!(value.as_deref(), Some("Ann"));
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Your Name is required.").count(), 2);
    }

    #[test]
    fn test_read_field_keeps_current_on_empty_answer() {
        let mut input = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let value = read_field(&mut input, &mut output, "Your Name", "Ann").unwrap();

        assert_eq!(value.as_deref(), Some("Ann"));
        assert_eq!(String::from_utf8(output).unwrap(), "Your Name [Ann]: ");
    }

    #[test]
    fn test_read_field_end_of_input() {
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();
        assert_eq!(
            read_field(&mut input, &mut output, "Your Name", "").unwrap(),
            None
        );
    }
}
