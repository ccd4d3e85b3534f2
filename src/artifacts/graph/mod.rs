//! Commit ancestry graph and its text rendering
//!
//! - `commit_graph`: Graph construction by traversal from branch tips
//! - `topo_order`: Destructive linearization, descendants before ancestors
//! - `branch_index`: Commit to branch-name lookup
//! - `segment_renderer`: Line rendering with segment boundary markers
//!
//! ## Pipeline
//!
//! ```text
//! branch tips ──build──> CommitGraph ──into_topo_order──> Vec<ObjectId>
//!                             │ clone                          │
//!                             └──────────> SegmentRenderer <───┘
//! ```

pub mod branch_index;
pub mod commit_graph;
pub mod segment_renderer;
pub mod topo_order;

#[cfg(test)]
pub(crate) mod test_support;
