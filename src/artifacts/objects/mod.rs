//! Stored object types and operations
//!
//! Everything the repository remembers is an immutable object identified by the
//! SHA-1 hash of its serialized form. There are two kinds:
//!
//! - **Blob**: one file's content together with the file's name
//! - **Commit**: a snapshot of every tracked file plus lineage and metadata
//!
//! All objects serialize to the framed format `<type> <size>\0<payload>`, and the
//! object ID is the hash of those framed bytes.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of the abbreviated hash shown in merge log entries
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
