//! In-memory commit store shared by the graph unit tests

use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::objects::object_id::ObjectId;
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::{BTreeMap, HashSet};

/// Commit parents keyed by commit ID, standing in for the object database
#[derive(Debug, Clone, Default)]
pub struct InMemoryCommitStore {
    commits: BTreeMap<ObjectId, Vec<ObjectId>>,
}

impl InMemoryCommitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_commit(&mut self, name: &str, parents: &[&str]) {
        self.commits.insert(
            create_oid(name),
            parents.iter().map(|parent| create_oid(parent)).collect(),
        );
    }

    pub fn load_parents(&self, oid: &ObjectId) -> anyhow::Result<Option<Vec<ObjectId>>> {
        Ok(self.commits.get(oid).cloned())
    }

    pub fn build_graph(&self, tips: &[&str]) -> anyhow::Result<CommitGraph> {
        let tips = tips.iter().map(|tip| create_oid(tip)).collect::<Vec<_>>();
        CommitGraph::build(&tips, |oid| self.load_parents(oid))
    }

    /// Build from every commit that no other commit lists as a parent
    pub fn build_graph_from_childless(&self) -> anyhow::Result<CommitGraph> {
        let tips = self.childless();
        CommitGraph::build(&tips, |oid| self.load_parents(oid))
    }

    pub fn childless(&self) -> Vec<ObjectId> {
        let parents = self.commits.values().flatten().collect::<HashSet<_>>();
        self.commits
            .keys()
            .filter(|oid| !parents.contains(oid))
            .cloned()
            .collect()
    }

    pub fn parents(&self, oid: &ObjectId) -> &[ObjectId] {
        self.commits.get(oid).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Random DAG of up to `max_commits` commits, each with up to three
    /// distinct parents chosen among the commits created before it
    pub fn arbitrary_dag(max_commits: usize) -> impl Strategy<Value = Self> {
        (1..=max_commits)
            .prop_flat_map(|count| {
                proptest::collection::vec(proptest::collection::vec(any::<Index>(), 0..=3), count)
            })
            .prop_map(|parent_picks| {
                let mut store = Self::new();
                for (position, picks) in parent_picks.iter().enumerate() {
                    let mut parents = Vec::new();
                    if position > 0 {
                        for pick in picks {
                            let parent = format!("c{}", pick.index(position));
                            if !parents.contains(&parent) {
                                parents.push(parent);
                            }
                        }
                    }
                    let parents = parents.iter().map(String::as_str).collect::<Vec<_>>();
                    store.add_commit(&format!("c{position}"), &parents);
                }
                store
            })
    }
}

/// Deterministic 40-character hex ObjectId derived from a readable name
pub fn create_oid(id: &str) -> ObjectId {
    let mut hex_string = String::new();

    for byte in id.as_bytes().iter() {
        hex_string.push_str(&format!("{:02x}", byte));
    }

    while hex_string.len() < 40 {
        hex_string.push('0');
    }
    hex_string.truncate(40);

    ObjectId::try_parse(hex_string).expect("Invalid test ObjectId")
}
