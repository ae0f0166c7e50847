//! Plumbing commands
//!
//! ## Commands
//!
//! - `write_commit`: Fold the staging area into a new commit on the active branch

mod write_commit;
