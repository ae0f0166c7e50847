//! Gitlet: a small local version-control system
//!
//! - `areas`: on-disk state (object database, staging area, refs, working tree)
//! - `artifacts`: data structures and algorithms (objects, branches, merge, status)
//! - `commands`: one `impl Repository` block per command

pub mod areas;
pub mod artifacts;
pub mod commands;
