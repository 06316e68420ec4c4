//! Entry point for the `lazytodo` binary.
//!
//! # Responsibility
//! - Resolve the fixed storage path under the user's home directory.
//! - Apply at most one mutation through the core service.
//! - Render the listing and map every failure to a nonzero exit.

use clap::Parser;
use cli::Cli;
use lazytodo_core::{
    default_log_level, init_logging, JsonFileRepository, ServiceError, TodoList, TodoService,
};
use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod cli;

const STORE_FILE_NAME: &str = "lazytodo.json";
const LOG_LEVEL_ENV: &str = "LAZYTODO_LOG";

#[derive(Debug)]
enum CliError {
    HomeNotFound,
    DataDir {
        path: PathBuf,
        source: std::io::Error,
    },
    ConflictingOperations,
    Service(ServiceError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeNotFound => write!(f, "could not resolve the home directory"),
            Self::DataDir { path, source } => write!(
                f,
                "failed to create data directory `{}`: {source}",
                path.display()
            ),
            Self::ConflictingOperations => write!(f, "Only one operation at a time"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DataDir { source, .. } => Some(source),
            Self::Service(err) => Some(err),
            Self::HomeNotFound | Self::ConflictingOperations => None,
        }
    }
}

impl From<ServiceError> for CliError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    // Reject conflicting flags before anything touches the filesystem.
    if cli.new.is_some() && cli.mark_done.is_some() {
        return Err(CliError::ConflictingOperations);
    }

    let data_dir = resolve_data_dir()?;
    setup_logging(&data_dir);

    let service = TodoService::new(JsonFileRepository::new(data_dir.join(STORE_FILE_NAME)));

    let list = if let Some(content) = &cli.new {
        service.add_todo(content.clone())?
    } else if let Some(position) = cli.mark_done {
        service.mark_done(position)?
    } else {
        service.list()?
    };

    if cli.all {
        render_all(&list);
    } else {
        render_pending(&list);
    }

    Ok(())
}

/// Resolves `<home>/.local/share`, creating it when missing.
///
/// The storage path itself is fixed; it is not configurable via flag or
/// environment variable.
fn resolve_data_dir() -> Result<PathBuf, CliError> {
    let home = home::home_dir().ok_or(CliError::HomeNotFound)?;
    let data_dir = home.join(".local").join("share");
    fs::create_dir_all(&data_dir).map_err(|source| CliError::DataDir {
        path: data_dir.clone(),
        source,
    })?;
    Ok(data_dir)
}

/// Bootstraps file logging; a failure degrades to a stderr warning instead
/// of blocking the tool.
fn setup_logging(data_dir: &Path) {
    let level =
        std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    let log_dir = data_dir.join("lazytodo").join("logs");
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
}

/// One line per undone item; positions are absolute within the full stored
/// sequence, so done items do not renumber what follows them.
fn render_pending(list: &TodoList) {
    for (position, item) in list.pending() {
        println!("{position}. {}", item.content);
    }
}

fn render_all(list: &TodoList) {
    for (position, item) in list.entries() {
        let marker = if item.done { 'x' } else { ' ' };
        println!("{position}. [{marker}] {}", item.content);
    }
}
