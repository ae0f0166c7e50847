//! Command implementations
//!
//! Commands are organized into two categories:
//!
//! - `plumbing`: Low-level building blocks shared by several commands (writing a commit)
//! - `porcelain`: User-facing commands (init, add, commit, log, merge, etc.)
//!
//! Every command is an `impl Repository` block operating on the loaded repository;
//! the caller persists the repository once the command succeeds.

pub mod plumbing;
pub mod porcelain;
