//! User-facing error kinds
//!
//! Every expected failure of a command maps to exactly one variant here, and the
//! variant's `Display` output is the message printed to the user. Anything else
//! (I/O failures, corrupt objects, bad checksums) travels as a plain
//! `anyhow::Error` and aborts the command as a fatal error.
//!
//! Operations return `anyhow::Result`, so callers recover the user error with
//! `err.downcast_ref::<GitletError>()`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitletError {
    #[error("Please enter a command.")]
    MissingCommand,

    #[error("No command with that name exists.")]
    NoSuchCommand,

    #[error("Incorrect operands.")]
    IncorrectOperands,

    #[error("Not in an initialized Gitlet directory.")]
    NotInitialized,

    #[error("A Gitlet version-control system already exists in the current directory.")]
    AlreadyInitialized,

    #[error("File does not exist.")]
    FileNotFound,

    #[error("No changes added to the commit.")]
    NothingToCommit,

    #[error("Please enter a commit message.")]
    EmptyCommitMessage,

    #[error("No reason to remove the file.")]
    NothingToRemove,

    #[error("A branch with that name already exists.")]
    BranchExists,

    /// Raised by `rm-branch` and `merge`
    #[error("A branch with that name does not exist.")]
    BranchNotFound,

    /// Raised by `checkout <branch>`
    #[error("No such branch exists.")]
    NoSuchBranch,

    #[error("Invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("Cannot remove the current branch.")]
    CannotDeleteActiveBranch,

    #[error("No need to checkout the current branch.")]
    SameBranch,

    #[error("There is an untracked file in the way; delete it, or add and commit it first.")]
    UntrackedFileConflict,

    #[error("No commit with that id exists.")]
    CommitNotFound,

    #[error("More than one commit starts with {0}; use a longer id.")]
    AmbiguousCommitId(String),

    #[error("File does not exist in that commit.")]
    FileNotInCommit,

    #[error("Found no commit with that message.")]
    NoCommitWithMessage,

    #[error("You have uncommitted changes.")]
    UncommittedChanges,

    #[error("Cannot merge a branch with itself.")]
    CannotMergeSelf,

    #[error("Given branch is an ancestor of the current branch.")]
    AlreadyUpToDate,
}
