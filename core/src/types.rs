/// Dense numeric identifier of a node, assigned in insertion order.
pub type NodeID = usize;

/// An undirected weighted edge between two nodes of an [`InteractionGraph`](crate::InteractionGraph).
///
/// `source` and `target` keep the orientation in which the edge was first
/// added, but `(a, b)` and `(b, a)` always refer to the same edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeID,
    pub target: NodeID,
    pub weight: f64,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// A single row of an interaction report.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    pub node1: String,
    pub node2: String,
    pub weight: f64,
}

impl InteractionRecord {
    pub fn new<S1: Into<String>, S2: Into<String>>(node1: S1, node2: S2, weight: f64) -> Self {
        InteractionRecord {
            node1: node1.into(),
            node2: node2.into(),
            weight,
        }
    }
}

/// Position of a node in layout coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}
