use crate::areas::repository::Repository;
use crate::artifacts::graph::branch_index::BranchIndex;
use crate::artifacts::graph::commit_graph::CommitGraph;
use crate::artifacts::graph::segment_renderer::SegmentRenderer;
use std::io::Write;

impl Repository {
    /// Print all commits reachable from any branch, descendants first
    ///
    /// The graph is built once; the linearizer consumes one copy while the
    /// renderer reads the links from an untouched clone.
    pub fn topo_order(&self) -> anyhow::Result<()> {
        let branches = self.refs().list_branches()?;
        let branch_index = BranchIndex::new(&branches);

        let graph = CommitGraph::build(branches.values(), |commit_oid| {
            self.database().read_parents(commit_oid)
        })?;
        let order = graph.clone().into_topo_order()?;

        let mut writer = self.writer();
        for line in SegmentRenderer::new(order, &branch_index, &graph) {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;

        Ok(())
    }
}
