//! Todo use-case service.
//!
//! Each call runs one independent load-mutate-save cycle: the list is read
//! in full, mutated at most once, written back in full, and dropped. Nothing
//! is cached between calls.

use crate::model::todo::{PositionError, TodoList};
use crate::repo::list_repo::{ListRepository, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surfaced by service operations.
///
/// Keeps repository (environment/data) failures distinguishable from
/// position (usage) failures so a caller can decide whether to retry,
/// prompt, or abort instead of being forced into process termination.
#[derive(Debug)]
pub enum ServiceError {
    Repo(RepoError),
    Position(PositionError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Position(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Position(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<PositionError> for ServiceError {
    fn from(value: PositionError) -> Self {
        Self::Position(value)
    }
}

/// Use-case service wrapper over a list repository.
pub struct TodoService<R: ListRepository> {
    repo: R,
}

impl<R: ListRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads the current list without mutating it.
    ///
    /// Still creates the storage document on first use.
    pub fn list(&self) -> ServiceResult<TodoList> {
        Ok(self.repo.load()?)
    }

    /// Appends a new undone item and persists the updated list.
    ///
    /// # Contract
    /// - `content` is accepted verbatim, the empty string included.
    /// - Returns the updated list for rendering.
    pub fn add_todo(&self, content: impl Into<String>) -> ServiceResult<TodoList> {
        let mut list = self.repo.load()?;
        list.add(content);
        self.repo.save(&list)?;
        Ok(list)
    }

    /// Marks the item at a 1-based `position` as done and persists the list.
    ///
    /// # Contract
    /// - The position is validated before any write; an out-of-range
    ///   position leaves the stored document byte-for-byte untouched.
    /// - Re-marking a done item succeeds and persists unchanged data.
    /// - Returns the updated list for rendering.
    pub fn mark_done(&self, position: usize) -> ServiceResult<TodoList> {
        let mut list = self.repo.load()?;
        list.mark_done(position)?;
        self.repo.save(&list)?;
        Ok(list)
    }
}
