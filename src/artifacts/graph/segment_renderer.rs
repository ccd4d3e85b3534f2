//! Segmented rendering of a linearized commit graph
//!
//! Each commit of the order gets one line: its hash followed by the branches
//! pointing at it. Consecutive lines form a segment while every commit is
//! followed by one of its own parents. When the next commit is not a parent,
//! the segment is closed and a new one opened:
//!
//! ```text
//! <hash> <branches>
//! <parent hashes>=      closing line, a lone `=` for a root commit
//!                       blank separator
//! =<children hashes>    opening line for the next commit
//! <hash> <branches>
//! ```
//!
//! The opening line always lists the children the graph records for the next
//! commit, even if some of them were printed in earlier segments.

use crate::artifacts::graph::branch_index::BranchIndex;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::VecDeque;
use std::iter::Peekable;

/// Lazy, single-pass iterator over the rendered lines
pub struct SegmentRenderer<'g> {
    order: Peekable<std::vec::IntoIter<ObjectId>>,
    branch_index: &'g BranchIndex,
    graph: &'g CommitGraph,
    /// Boundary lines waiting to be yielded before the next commit line
    pending: VecDeque<String>,
    /// First commit of the current segment, `None` right after a boundary
    segment_start: Option<ObjectId>,
}

impl<'g> SegmentRenderer<'g> {
    /// # Arguments
    ///
    /// * `order` - Linearized commit IDs, descendants first
    /// * `branch_index` - Branch labels per commit
    /// * `graph` - An intact graph for parent/child lookups; the graph that
    ///   produced `order` has been consumed and cannot be used here
    pub fn new(order: Vec<ObjectId>, branch_index: &'g BranchIndex, graph: &'g CommitGraph) -> Self {
        Self {
            order: order.into_iter().peekable(),
            branch_index,
            graph,
            pending: VecDeque::new(),
            segment_start: None,
        }
    }

    fn commit_line(&self, commit_oid: &ObjectId) -> String {
        format!(
            "{} {}",
            commit_oid,
            self.branch_index.joined_labels(commit_oid)
        )
        .trim_end()
        .to_string()
    }

    fn close_segment(&mut self, commit_oid: &ObjectId) {
        let graph = self.graph;
        let parents = graph.parents_of(commit_oid);

        if parents.is_empty() {
            self.pending.push_back("=".to_string());
        } else {
            self.pending.push_back(format!("{}=", join_oids(parents)));
        }
        self.pending.push_back(String::new());

        self.segment_start = None;
    }

    fn open_segment(&mut self, next_oid: ObjectId) {
        let graph = self.graph;
        let children = graph.children_of(&next_oid);
        self.pending.push_back(format!("={}", join_oids(children)));

        self.segment_start = Some(next_oid);
    }
}

impl Iterator for SegmentRenderer<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(line);
        }

        let commit_oid = self.order.next()?;
        let line = self.commit_line(&commit_oid);

        // the last commit never closes its segment
        let Some(next_oid) = self.order.peek().cloned() else {
            return Some(line);
        };

        if self.graph.parents_of(&commit_oid).contains(&next_oid) {
            self.segment_start = Some(commit_oid);
        } else {
            self.close_segment(&commit_oid);
        }

        if self.segment_start.is_none() {
            self.open_segment(next_oid);
        }

        Some(line)
    }
}

fn join_oids(oids: &[ObjectId]) -> String {
    oids.iter()
        .map(|oid| oid.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}
