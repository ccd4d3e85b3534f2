//! Topological listing of a git repository's commit history
//!
//! Every commit reachable from a branch under `refs/heads` is printed once,
//! descendants before ancestors, with the branches pointing at it. Where the
//! printed order jumps between commits that are not parent and child, the
//! output carries `parents=` / `=children` markers so the graph can be
//! reconstructed from the flat text.
//!
//! - `areas`: On-disk repository components (objects, refs, discovery)
//! - `artifacts`: Graph algorithms and supporting types
//! - `commands`: The `topo-order` operation

pub mod areas;
pub mod artifacts;
pub mod commands;
