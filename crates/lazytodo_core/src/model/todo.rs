//! Todo list domain model.
//!
//! # Responsibility
//! - Define the canonical list/item records shared by storage and rendering.
//! - Provide the append and mark-done mutation helpers.
//!
//! # Invariants
//! - Wire field names are exactly `todos`, `content`, `done`; files written
//!   by earlier versions of the tool keep round-tripping unchanged.
//! - The 1-based/0-based position translation happens only in `mark_done`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One todo entry as persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Free-form item text. Not validated; the empty string is a valid item.
    pub content: String,
    /// Completion flag. Marking is one-way; there is no un-done operation.
    pub done: bool,
}

/// Ordered todo list, the full persisted document.
///
/// The item vector is private so every position-addressed mutation funnels
/// through [`TodoList::mark_done`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    todos: Vec<TodoItem>,
}

/// Usage error for a position outside the current list bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionError {
    /// The 1-based position the caller asked for.
    pub given: usize,
    /// List length at call time.
    pub len: usize,
}

impl Display for PositionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid position {}, valid range is 1-{}",
            self.given, self.len
        )
    }
}

impl Error for PositionError {}

impl TodoList {
    /// Creates an empty list, the initial state of a fresh storage file.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Appends a new undone item at the end of the sequence.
    ///
    /// # Contract
    /// - Always succeeds; `content` is stored verbatim, empty included.
    /// - Prior items keep their positions.
    pub fn add(&mut self, content: impl Into<String>) {
        self.todos.push(TodoItem {
            content: content.into(),
            done: false,
        });
    }

    /// Marks the item at a 1-based `position` as done.
    ///
    /// # Contract
    /// - A `position` outside `1..=len` returns [`PositionError`] and leaves
    ///   the list unchanged.
    /// - Marking an already-done item succeeds silently.
    pub fn mark_done(&mut self, position: usize) -> Result<(), PositionError> {
        if position == 0 || position > self.todos.len() {
            return Err(PositionError {
                given: position,
                len: self.todos.len(),
            });
        }
        self.todos[position - 1].done = true;
        Ok(())
    }

    /// Iterates all items with their 1-based positions.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &TodoItem)> {
        self.todos.iter().enumerate().map(|(i, item)| (i + 1, item))
    }

    /// Iterates undone items with their absolute 1-based positions.
    ///
    /// Done items are skipped but do not shift the numbering of the items
    /// after them.
    pub fn pending(&self) -> impl Iterator<Item = (usize, &TodoItem)> {
        self.entries().filter(|(_, item)| !item.done)
    }
}
