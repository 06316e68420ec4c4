//! Core domain logic for LazyTodo.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{PositionError, TodoItem, TodoList};
pub use repo::list_repo::{JsonFileRepository, ListRepository, RepoError, RepoResult};
pub use service::todo_service::{ServiceError, ServiceResult, TodoService};
