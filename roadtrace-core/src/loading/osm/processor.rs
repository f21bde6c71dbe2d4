//! Resolution of scanned extract data into a road graph.

use std::io::Read;

use super::parser::{self, RawWay};
use crate::diagnostics::DiagnosticSink;
use crate::error::Error;
use crate::model::{RoadGraph, Way};

/// Two-pass builder turning one map extract into a [`RoadGraph`].
///
/// The first pass scans the document and collects nodes and ways in
/// declaration order. The second pass resolves every way node reference
/// against the id index over the collected nodes. References to unknown
/// nodes are dropped by default, [`strict_refs`](Self::strict_refs)
/// turns them into a hard error.
///
/// Any failure aborts the whole build, a partial graph is never returned.
pub struct RoadGraphBuilder<'a> {
    sink: &'a dyn DiagnosticSink,
    strict_refs: bool,
}

impl<'a> RoadGraphBuilder<'a> {
    pub fn new(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            sink,
            strict_refs: false,
        }
    }

    /// Treat a way reference to a missing node as a hard error.
    #[must_use]
    pub fn strict_refs(mut self, strict: bool) -> Self {
        self.strict_refs = strict;
        self
    }

    /// Parses a whole map extract document into a graph.
    ///
    /// # Errors
    ///
    /// `MalformedDocument` when the input is not well-formed XML,
    /// `AttributeFormat` when a required attribute is missing or not
    /// numeric, `DanglingNodeRef` in strict mode.
    pub fn build<R: Read>(&self, document: R) -> Result<RoadGraph, Error> {
        let extract = parser::scan(document)?;

        let mut graph = RoadGraph::default();
        let mut duplicate_nodes = 0usize;
        for node in extract.nodes {
            let id = node.id;
            if !graph.insert_node(node) {
                self.sink.debug(&format!("Dropping repeated node id {id}"));
                duplicate_nodes += 1;
            }
        }

        let mut dropped_refs = 0usize;
        for RawWay { id, node_refs, tags } in extract.ways {
            let mut nodes = Vec::with_capacity(node_refs.len());
            for node_id in node_refs {
                if graph.contains_node(node_id) {
                    nodes.push(node_id);
                } else if self.strict_refs {
                    return Err(Error::DanglingNodeRef { way_id: id, node_id });
                } else {
                    self.sink
                        .debug(&format!("Way {id} references missing node {node_id}"));
                    dropped_refs += 1;
                }
            }
            graph.push_way(Way { id, nodes, tags });
        }

        self.sink.debug(&format!(
            "Built road graph with {} nodes and {} ways ({duplicate_nodes} repeated node ids, \
             {dropped_refs} unresolved references dropped)",
            graph.node_count(),
            graph.way_count()
        ));
        Ok(graph)
    }
}
