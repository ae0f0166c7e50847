//! Core repository components
//!
//! This module contains the on-disk areas of a Gitlet repository:
//!
//! - `database`: Object database for storing blobs and commits
//! - `stage`: Staging area of pending additions and removals
//! - `refs`: Branch records and HEAD
//! - `repository`: Repository context threaded through every command
//! - `workspace`: Working directory file system operations

pub mod database;
pub mod refs;
pub mod repository;
pub mod stage;
pub mod workspace;
