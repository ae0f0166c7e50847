//! Porcelain commands (user-facing Gitlet operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage a file for the next commit
//! - `commit`: Create a new commit
//! - `rm`: Unstage a file or mark it for removal
//! - `log`: Show the active branch history, every commit, or commits by message
//! - `status`: Show branches, staging area and working tree status
//! - `branch`: Create or delete branches
//! - `checkout`: Switch branches or restore files
//! - `reset`: Move the active branch to a commit
//! - `merge`: Merge a branch into the active branch

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod init;
pub mod log;
pub mod merge;
pub mod reset;
pub mod rm;
pub mod status;
