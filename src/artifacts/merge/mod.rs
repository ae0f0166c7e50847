//! Merge algorithms
//!
//! - `split_finder`: split point (merge base) search over the commit graph
//! - `resolution`: three-way classification of every file and conflict markers

pub mod resolution;
pub mod split_finder;
