//! Repository layer abstraction and persistence implementation.
//!
//! # Responsibility
//! - Define the load/save data access contract for the todo list.
//! - Isolate file-format and I/O details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors distinguishing environment
//!   failures (`Io`) from data failures (`Parse`).
//! - A failed load never leaves a half-initialized document behind other
//!   than what the filesystem itself produced.

pub mod list_repo;
