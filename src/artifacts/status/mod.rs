//! Working tree status inspection
//!
//! Compares the working tree against the staging area and the head commit.
//!
//! ## Components
//!
//! - `file_change`: Kinds of unstaged modifications
//! - `inspector`: Core logic for detecting changes
//! - `status_info`: Status report aggregation and display

pub mod file_change;
pub mod inspector;
pub mod status_info;
