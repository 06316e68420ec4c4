//! Use-case service layer.
//!
//! # Responsibility
//! - Provide stable entry points for one-shot CLI invocations.
//! - Orchestrate the load-mutate-save cycle over a repository.
//!
//! # Invariants
//! - Every mutating call validates before the save; a rejected mutation
//!   leaves the stored document untouched.
//! - Service layer remains storage-agnostic.

pub mod todo_service;
