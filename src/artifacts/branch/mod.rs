//! Branches
//!
//! A branch is a named, mutable pointer to a commit. Branch records live in
//! `.gitlet/refs/heads/<name>` and the active branch is named by `.gitlet/HEAD`.

pub mod branch_name;
pub mod branch_record;
pub mod branch_table;

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";

/// Branch created by `init`
pub const DEFAULT_BRANCH: &str = "master";
