//! Data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `core`: Output destination (stdout or pager)
//! - `graph`: Commit graph construction, linearization and rendering
//! - `objects`: Object identifiers and headers

pub mod branch;
pub mod core;
pub mod graph;
pub mod objects;
