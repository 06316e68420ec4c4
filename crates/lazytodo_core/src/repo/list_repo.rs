//! Todo list repository contract and JSON file implementation.
//!
//! # Responsibility
//! - Map one storage file path to a `TodoList` value.
//! - Provide create-on-first-use load and full-document save.
//!
//! # Invariants
//! - Load and save are independent scoped file operations; no handle is
//!   held open across calls.
//! - Malformed documents abort the operation; they are never repaired,
//!   partially recovered, or quarantined.
//! - There is no schema-version check; any structurally valid document is
//!   accepted regardless of which tool version produced it.

use crate::model::todo::TodoList;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for todo list persistence.
#[derive(Debug)]
pub enum RepoError {
    /// Environment failure: the file or its parent directory is inaccessible.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Data failure: file contents are not a valid serialized todo list.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The in-memory list failed to serialize.
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "todo file `{}` is inaccessible: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid todo data in `{}`: {source}", path.display())
            }
            Self::Serialize(source) => write!(f, "failed to serialize todo list: {source}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(source) => Some(source),
        }
    }
}

/// Repository interface for loading and saving the full todo list.
///
/// The trait is the seam for callers that want to substitute storage (or a
/// test double) without touching service orchestration.
pub trait ListRepository {
    fn load(&self) -> RepoResult<TodoList>;
    fn save(&self, list: &TodoList) -> RepoResult<()>;
}

/// JSON-file-backed repository over a single document.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> RepoError {
        RepoError::Io {
            path: self.path.clone(),
            source,
        }
    }

    /// Writes the serialized empty list so a first load behaves like every
    /// later one.
    fn initialize(&self) -> RepoResult<TodoList> {
        let list = TodoList::new();
        let json = serde_json::to_string_pretty(&list).map_err(RepoError::Serialize)?;
        fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        Ok(list)
    }

    fn read_document(&self) -> RepoResult<TodoList> {
        let contents = fs::read_to_string(&self.path).map_err(|source| self.io_error(source))?;
        serde_json::from_str(&contents).map_err(|source| RepoError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl ListRepository for JsonFileRepository {
    /// Loads the stored list, creating the empty document on first use.
    ///
    /// # Side effects
    /// - May create the storage file.
    /// - Emits `list_load` logging events with duration and status.
    fn load(&self) -> RepoResult<TodoList> {
        let started_at = Instant::now();
        let mode = if self.path.exists() { "file" } else { "init" };

        let result = if mode == "init" {
            self.initialize()
        } else {
            self.read_document()
        };

        match result {
            Ok(list) => {
                info!(
                    "event=list_load module=repo status=ok mode={mode} duration_ms={} items={}",
                    started_at.elapsed().as_millis(),
                    list.len()
                );
                Ok(list)
            }
            Err(err) => {
                error!(
                    "event=list_load module=repo status=error mode={mode} duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }

    /// Serializes the full list and overwrites the entire document.
    ///
    /// The write is a scoped open-truncate-write-close; it is not atomic
    /// against a concurrent reader or writer of the same path, and a crash
    /// mid-write can leave a truncated document. Accepted limitation for a
    /// single-user, single-process tool.
    ///
    /// # Side effects
    /// - Emits `list_save` logging events with duration and status.
    fn save(&self, list: &TodoList) -> RepoResult<()> {
        let started_at = Instant::now();

        let result = serde_json::to_string_pretty(list)
            .map_err(RepoError::Serialize)
            .and_then(|json| fs::write(&self.path, json).map_err(|source| self.io_error(source)));

        match result {
            Ok(()) => {
                info!(
                    "event=list_save module=repo status=ok duration_ms={} items={}",
                    started_at.elapsed().as_millis(),
                    list.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=list_save module=repo status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err)
            }
        }
    }
}
