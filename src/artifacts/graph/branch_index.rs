use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Branch names grouped by the commit they point at
///
/// Names for one commit are kept sorted so labels print in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchIndex {
    labels: HashMap<ObjectId, BTreeSet<BranchName>>,
}

impl BranchIndex {
    pub fn new(branches: &BTreeMap<BranchName, ObjectId>) -> Self {
        let labels = branches
            .iter()
            .fold(HashMap::new(), |mut acc, (branch_name, oid)| {
                acc.entry(oid.clone())
                    .or_insert_with(BTreeSet::new)
                    .insert(branch_name.clone());
                acc
            });

        Self { labels }
    }

    /// Branches pointing at `oid`, in lexicographic order
    pub fn labels(&self, oid: &ObjectId) -> impl Iterator<Item = &BranchName> {
        self.labels.get(oid).into_iter().flatten()
    }

    /// Space-joined labels of `oid`, empty when no branch points at it
    pub fn joined_labels(&self, oid: &ObjectId) -> String {
        self.labels(oid)
            .map(|branch_name| branch_name.as_ref())
            .collect::<Vec<&str>>()
            .join(" ")
    }
}
