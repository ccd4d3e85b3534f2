//! Topological linearization of the commit graph
//!
//! Produces a total order where every commit comes before all of its parents
//! (descendants first). This is Kahn's algorithm run from the childless end:
//!
//! 1. Seed a ready stack with every commit that has no children, in commit ID order
//! 2. Pop a commit, emit it, and detach it from each of its parents
//! 3. A parent whose last child was detached becomes ready
//!
//! The ready list is a LIFO stack, so the most recently freed parent is emitted
//! next. That keeps first-parent chains together and makes the output fully
//! deterministic for a given graph.
//!
//! The pass consumes the graph: parent and child lists are emptied as commits
//! are emitted. Callers that still need the links afterwards must keep their
//! own copy.

use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

impl CommitGraph {
    /// Linearize the graph, descendants before ancestors
    ///
    /// # Errors
    ///
    /// Fails when some commits can never become ready, which only happens if
    /// the graph contains a cycle or a commit cut off from every childless one.
    pub fn into_topo_order(mut self) -> anyhow::Result<Vec<ObjectId>> {
        let commits_count = self.len();
        let nodes = self.nodes_mut();

        let mut ready = nodes
            .values()
            .filter(|node| node.children.is_empty())
            .map(|node| node.oid().clone())
            .collect::<Vec<_>>();
        let mut order = Vec::with_capacity(commits_count);

        while let Some(commit_oid) = ready.pop() {
            let parent_oids = nodes
                .get_mut(&commit_oid)
                .map(|node| std::mem::take(&mut node.parents))
                .with_context(|| format!("commit {} is not part of the graph", commit_oid))?;

            for parent_oid in parent_oids {
                let parent = nodes
                    .get_mut(&parent_oid)
                    .with_context(|| format!("parent {} is not part of the graph", parent_oid))?;

                if let Some(position) = parent.children.iter().position(|c| c == &commit_oid) {
                    parent.children.remove(position);

                    if parent.children.is_empty() {
                        ready.push(parent_oid);
                    }
                }
            }

            order.push(commit_oid);
        }

        if order.len() != commits_count {
            anyhow::bail!(
                "inconsistent commit graph: topological order covers {} of {} commits",
                order.len(),
                commits_count
            );
        }

        tracing::debug!(commits = order.len(), "linearized commit graph");

        Ok(order)
    }
}
