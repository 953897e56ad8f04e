//! `contactbook` command-line front end.
//!
//! # Responsibility
//! - Act as record editor (add/edit) and record presenter (list/show/delete).
//! - Route every change through `ContactStore`.

mod cli;
mod render;

use cli::{Cli, Commands};
use contactbook_core::{
    default_log_level, init_logging, ContactCard, ContactId, ContactStore, EditorSession,
    IntentEffect, LoggingError, SqliteStorage, StorageError, SubmitOutcome,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const DB_FILE_NAME: &str = "contactbook.sqlite3";
const LOG_DIR_NAME: &str = "logs";

#[derive(Debug)]
enum CliError {
    Io(std::io::Error),
    Logging(LoggingError),
    Storage(StorageError),
    Json(serde_json::Error),
    NotFound(ContactId),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Logging(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
        }
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<LoggingError> for CliError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl From<StorageError> for CliError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    use clap::Parser;

    let cli = Cli::parse();
    if let Commands::Ping = cli.command {
        println!("contactbook_core ping={}", contactbook_core::ping());
        println!("contactbook_core version={}", contactbook_core::core_version());
        return Ok(());
    }

    let data_dir = absolute_dir(&cli.data_dir)?;
    std::fs::create_dir_all(&data_dir)?;
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    let log_dir = data_dir.join(LOG_DIR_NAME);
    init_logging(level, &log_dir.to_string_lossy())?;

    let storage = SqliteStorage::open(data_dir.join(DB_FILE_NAME))?;
    let mut store = ContactStore::open(storage);
    if !cli.no_wait {
        eprintln!("Loading contacts ...");
        store.wait_until_ready();
    }
    info!(
        "event=cli_ready module=cli status=ok source={} count={}",
        store.source().as_str(),
        store.len()
    );

    match cli.command {
        Commands::List(args) => {
            let visible = store.visible(&args.search);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&visible.items)?);
            } else if let Some(empty) = visible.empty_state {
                println!("{}", empty.message());
            } else {
                let cards = visible
                    .items
                    .iter()
                    .map(|contact| render::render_card(contact))
                    .collect::<Vec<_>>();
                println!("{}", cards.join("\n\n"));
            }
        }
        Commands::Show(args) => {
            let id = ContactId::from(args.id);
            let contact = store.get(&id).ok_or(CliError::NotFound(id))?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(contact)?);
            } else {
                println!("{}", render::render_card(contact));
            }
        }
        Commands::Add(args) => {
            let patch = args.details.into_patch(Some(args.name), Some(args.email));
            let outcome = store.apply_outcome(EditorSession::create().commit(patch));
            if let Some(SubmitOutcome::Created(id)) = outcome {
                println!("created {id}");
            }
        }
        Commands::Edit(args) => {
            let id = ContactId::from(args.id);
            let contact = store.get(&id).ok_or_else(|| CliError::NotFound(id.clone()))?;
            let intent = ContactCard::new(contact).edit_intent();
            let IntentEffect::OpenEditor(session) = store.apply_intent(intent) else {
                return Ok(());
            };
            let patch = args.details.into_patch(args.name, args.email);
            match store.apply_outcome(session.commit(patch)) {
                Some(SubmitOutcome::Updated(id)) => println!("updated {id}"),
                _ => return Err(CliError::NotFound(id)),
            }
        }
        Commands::Delete(args) => {
            let id = ContactId::from(args.id);
            let contact = store.get(&id).ok_or_else(|| CliError::NotFound(id.clone()))?;
            let card = ContactCard::new(contact);
            let confirmed = args.yes || confirm(&card.delete_prompt())?;
            match card.confirm_delete(confirmed) {
                Some(intent) => {
                    store.apply_intent(intent);
                    println!("deleted {id}");
                }
                None => println!("cancelled"),
            }
        }
        Commands::Ping => {}
    }

    Ok(())
}

fn absolute_dir(path: &Path) -> Result<PathBuf, CliError> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn confirm(prompt: &str) -> Result<bool, CliError> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{prompt} Continue? [y/N] ")?;
    stdout.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
