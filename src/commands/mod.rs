//! Command implementations
//!
//! - `porcelain`: User-facing operations (topo-order)

pub mod porcelain;
