//! Checkout planning
//!
//! Switching the working tree between snapshots (branch checkout, reset, merge
//! fast-forward) is planned as a [`migration::Migration`] and then applied by the
//! workspace in one pass: deletions first, then writes.

pub mod migration;
