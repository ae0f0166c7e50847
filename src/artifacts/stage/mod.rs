//! Staging file format
//!
//! The staging area records pending additions (with a snapshot of the content
//! taken at `add` time) and pending removals.
//!
//! ## File Format
//!
//! ```text
//! Header (12 bytes):
//!   - Signature: "STAG" (4 bytes)
//!   - Version: 1 (4 bytes)
//!   - Entry count (4 bytes)
//!
//! Entries (variable length):
//!   - Kind: 'A' (addition) or 'R' (removal) (1 byte)
//!   - Name length (4 bytes) followed by the name
//!   - Additions only: content length (4 bytes) followed by the content
//!
//! Checksum (20 bytes):
//!   - SHA-1 hash of all preceding bytes
//! ```
//!
//! All integers are stored in network byte order.

pub mod checksum;
pub mod stage_entry;
pub mod stage_header;

/// Size of SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Size of staging file header in bytes
pub const HEADER_SIZE: usize = 12;

/// Magic signature identifying staging files
pub const SIGNATURE: &str = "STAG";

/// Staging file format version
pub const VERSION: u32 = 1;
