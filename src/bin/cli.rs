//! Guestbook CLI
//!
//! One-shot guestbook operations for scripting:
//! - List entries
//! - Sign, edit and delete entries
//! - Print a default config file

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use guestbook::config::generate_default_config;
use guestbook::view::{render, DeleteOutcome, SubmitOutcome};
use guestbook::{
    AssumeYes, Config, EntryId, GuestbookClient, GuestbookView, Prompt, TerminalPrompt,
};

#[derive(Parser)]
#[command(name = "guestbook-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scriptable access to the guestbook")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Guestbook collection URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all entries
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Sign the guestbook
    Sign {
        /// Your name
        name: String,
        /// Your message
        message: String,
    },

    /// Edit an existing entry
    Edit {
        /// Entry id
        id: String,
        /// New name (default: keep)
        #[arg(short, long)]
        name: Option<String>,
        /// New message (default: keep)
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    guestbook::logging::init(&config.logging);

    let client = GuestbookClient::from_config(&config.api)?;

    let ok = match cli.command {
        Commands::List { format } => list(client, format).await?,
        Commands::Sign { name, message } => {
            let mut view = GuestbookView::new(client, TerminalPrompt::new());
            view.set_name(name);
            view.set_message(message);
            save(&mut view).await
        }
        Commands::Edit { id, name, message } => edit(client, id, name, message).await,
        Commands::Delete { id, yes } => {
            let id = EntryId::new(id);
            if yes {
                delete(GuestbookView::new(client, AssumeYes), &id).await
            } else {
                delete(GuestbookView::new(client, TerminalPrompt::new()), &id).await
            }
        }
        Commands::Config { .. } => unreachable!("handled above"),
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

async fn list(client: GuestbookClient, format: OutputFormat) -> anyhow::Result<bool> {
    let mut view = GuestbookView::new(client, TerminalPrompt::new());
    if !view.mount().await {
        eprintln!("Cannot reach the guestbook at {}", view.api().base_url());
        if let Some(message) = view.state().error() {
            eprintln!("{}", message);
        }
        return Ok(false);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(view.state().entries())?);
        }
        OutputFormat::Table => {
            if view.state().entries().is_empty() {
                println!("{}", guestbook::view::render::EMPTY_MESSAGE);
            } else {
                println!("{:<12} {:<20} {}", "ID", "Name", "Message");
                println!("{}", "-".repeat(60));
                for entry in view.state().entries() {
                    println!(
                        "{:<12} {:<20} {}",
                        entry.id,
                        entry.name,
                        entry.message.replace('\n', " ")
                    );
                }
            }
        }
    }
    Ok(true)
}

async fn edit(
    client: GuestbookClient,
    id: String,
    name: Option<String>,
    message: Option<String>,
) -> bool {
    let id = EntryId::new(id);
    let mut view = GuestbookView::new(client, TerminalPrompt::new());

    // the current values come from the server, never from local memory
    if !view.mount().await {
        eprintln!("{}", view.state().error().unwrap_or_default());
        return false;
    }
    let Some(entry) = view.state().entries().iter().find(|e| e.id == id).cloned() else {
        eprintln!("No entry with id {}", id);
        return false;
    };

    view.start_edit(&entry);
    if let Some(name) = name {
        view.set_name(name);
    }
    if let Some(message) = message {
        view.set_message(message);
    }
    save(&mut view).await
}

async fn save<P: Prompt>(view: &mut GuestbookView<GuestbookClient, P>) -> bool {
    if !view.state().draft().is_submittable() {
        eprintln!("Both name and message are required.");
        return false;
    }

    match view.submit().await {
        SubmitOutcome::Created => println!("Signed."),
        SubmitOutcome::Updated => println!("Updated."),
        SubmitOutcome::Failed => return false,
    }
    print!("{}", render(view.state()));
    true
}

async fn delete<P: Prompt>(mut view: GuestbookView<GuestbookClient, P>, id: &EntryId) -> bool {
    match view.delete(id).await {
        DeleteOutcome::Deleted => {
            println!("Deleted {}.", id);
            true
        }
        DeleteOutcome::Cancelled => {
            println!("Nothing deleted.");
            true
        }
        DeleteOutcome::Failed => false,
    }
}
