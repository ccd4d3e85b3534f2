//! Core repository components
//!
//! This module contains the on-disk building blocks read by the tool:
//!
//! - `database`: Loose object store, read for commit parents
//! - `refs`: Branch references under `refs/heads`
//! - `repository`: Repository discovery and coordination

pub(crate) mod database;
pub(crate) mod refs;
pub mod repository;
