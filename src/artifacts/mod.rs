//! Gitlet data structures and algorithms
//!
//! This module contains the core types and algorithms:
//!
//! - `branch`: Branch names, branch records and the branch table
//! - `checkout`: Working tree migrations
//! - `core`: Shared utilities (user errors, pager wrapper)
//! - `log`: Commit history traversal and display
//! - `merge`: Split point search and three-way resolution
//! - `objects`: Object types (blob, commit)
//! - `stage`: On-disk format of the staging area
//! - `status`: Working tree status inspection

pub mod branch;
pub mod checkout;
pub mod core;
pub mod log;
pub mod merge;
pub mod objects;
pub mod stage;
pub mod status;
