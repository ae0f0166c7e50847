//! Commit history display
//!
//! - `log_entry`: the block printed for one commit by `log` and `global-log`
//! - `rev_list`: first-parent history walk and store-wide ordering

pub mod log_entry;
pub mod rev_list;
