//! Road network structures produced from a map extract

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

/// Identifier of a node in the source extract
pub type NodeId = i64;
/// Identifier of a way in the source extract
pub type WayId = i64;

/// A single geographic point of the road network
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

/// An ordered path through nodes, annotated with key/value tags
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub id: WayId,
    /// Member nodes in path order, referenced by id
    pub nodes: Vec<NodeId>,
    /// Raw tags, later occurrences of a key overwrite earlier ones
    pub tags: HashMap<String, String>,
}

/// Immutable node/way graph built from one map extract.
///
/// Nodes and ways keep the order in which the extract declared them.
/// Node lookup by id goes through an index, not a scan.
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    nodes: Vec<Node>,
    ways: Vec<Way>,
    node_index: HashMap<NodeId, usize>,
}

impl RoadGraph {
    /// Adds a node, keeping the first occurrence when an id repeats.
    ///
    /// Returns `false` when the id was already present and the node
    /// was discarded.
    pub(crate) fn insert_node(&mut self, node: Node) -> bool {
        match self.node_index.entry(node.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(self.nodes.len());
                self.nodes.push(node);
                true
            }
        }
    }

    pub(crate) fn push_way(&mut self, way: Way) {
        self.ways.push(way);
    }

    /// Node with the given id, if the extract declared one.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.node_index.get(&id).map(|&slot| &self.nodes[slot])
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// All nodes in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All ways in declaration order.
    pub fn ways(&self) -> &[Way] {
        &self.ways
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn way_count(&self) -> usize {
        self.ways.len()
    }
}
