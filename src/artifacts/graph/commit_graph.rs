//! Commit graph construction
//!
//! The graph is discovered by a worklist traversal starting from the branch
//! tips. Each visited commit is asked for its parent list through a loader
//! function, which keeps the traversal independent of where commits are stored
//! (loose object files, an in-memory map in tests, ...).
//!
//! ## Missing records
//!
//! A loader returning `Ok(None)` means the commit record could not be found.
//! Such a commit stays in the graph as a node without parents, so shallow or
//! partial object stores still produce a complete (if truncated) history.
//!
//! ## Invariants
//!
//! - every hash listed as a parent or child of some node is itself a node
//! - `p` is in `c.parents` exactly as many times as `c` is in `p.children`

use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;
use std::collections::{BTreeMap, HashSet};

/// One commit and its links in both directions
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommitNode {
    oid: ObjectId,
    /// Parent commit IDs in record order (first parent is the mainline)
    #[new(default)]
    pub(super) parents: Vec<ObjectId>,
    /// Child commit IDs in discovery order
    #[new(default)]
    pub(super) children: Vec<ObjectId>,
}

impl CommitNode {
    pub fn oid(&self) -> &ObjectId {
        &self.oid
    }

    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }
}

/// Mapping from commit ID to its node
///
/// Backed by an ordered map so that iteration, and therefore everything derived
/// from it, does not depend on hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGraph {
    nodes: BTreeMap<ObjectId, CommitNode>,
}

impl CommitGraph {
    /// Discover every commit reachable from `tips`
    ///
    /// # Arguments
    ///
    /// * `tips` - Starting commits, typically the branch tips
    /// * `parents_loader` - Returns the parent IDs of a commit, `None` if the
    ///   commit record is missing. Errors abort the build.
    pub fn build<'t, ParentsLoaderFn>(
        tips: impl IntoIterator<Item = &'t ObjectId>,
        mut parents_loader: ParentsLoaderFn,
    ) -> anyhow::Result<Self>
    where
        ParentsLoaderFn: FnMut(&ObjectId) -> anyhow::Result<Option<Vec<ObjectId>>>,
    {
        let mut nodes = BTreeMap::<ObjectId, CommitNode>::new();
        let mut visited = HashSet::<ObjectId>::new();
        let mut worklist = tips.into_iter().cloned().collect::<Vec<_>>();

        while let Some(commit_oid) = worklist.pop() {
            if visited.contains(&commit_oid) {
                continue;
            }

            nodes
                .entry(commit_oid.clone())
                .or_insert_with(|| CommitNode::new(commit_oid.clone()));

            let Some(parent_oids) = parents_loader(&commit_oid)? else {
                tracing::debug!(
                    commit = %commit_oid.to_short_oid(),
                    "commit record not found, treating it as a root"
                );
                visited.insert(commit_oid);
                continue;
            };

            for parent_oid in parent_oids {
                nodes
                    .entry(parent_oid.clone())
                    .or_insert_with(|| CommitNode::new(parent_oid.clone()))
                    .children
                    .push(commit_oid.clone());

                if let Some(commit_node) = nodes.get_mut(&commit_oid) {
                    commit_node.parents.push(parent_oid.clone());
                }

                if !visited.contains(&parent_oid) {
                    worklist.push(parent_oid);
                }
            }

            visited.insert(commit_oid);
        }

        tracing::debug!(commits = nodes.len(), "built commit graph");

        Ok(Self { nodes })
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.nodes.contains_key(oid)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in commit ID order
    pub fn iter(&self) -> impl Iterator<Item = &CommitNode> {
        self.nodes.values()
    }

    /// Parents of `oid`, empty for roots and for commits outside the graph
    pub fn parents_of(&self, oid: &ObjectId) -> &[ObjectId] {
        self.nodes.get(oid).map(CommitNode::parents).unwrap_or_default()
    }

    /// Children of `oid`, empty for tips and for commits outside the graph
    pub fn children_of(&self, oid: &ObjectId) -> &[ObjectId] {
        self.nodes
            .get(oid)
            .map(CommitNode::children)
            .unwrap_or_default()
    }

    pub(super) fn nodes_mut(&mut self) -> &mut BTreeMap<ObjectId, CommitNode> {
        &mut self.nodes
    }
}
