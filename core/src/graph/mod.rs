use itertools::{Itertools, MinMaxResult};
use rustc_hash::FxHashMap;

use crate::types::{Edge, InteractionRecord, NodeID};


/// Undirected graph of agents connected by weighted interactions.
///
/// Nodes and edges keep their insertion order, which is also the order used
/// by the layout and the renderer. Adding an edge that already exists (in
/// either orientation) overwrites its weight.
#[derive(Debug, Default, Clone)]
pub struct InteractionGraph {
    nodes: Vec<String>,
    node_ids: FxHashMap<String, NodeID>,
    edges: Vec<Edge>,
    edge_index: FxHashMap<(NodeID, NodeID), usize>,
}

fn edge_key(a: NodeID, b: NodeID) -> (NodeID, NodeID) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl InteractionGraph {
    pub fn new() -> InteractionGraph {
        InteractionGraph::default()
    }

    /// Build a graph from the parsed reports.
    ///
    /// The endpoints of the interactions are added first, row by row, and
    /// agents not referenced by any interaction are appended afterwards.
    pub fn from_records(agents: &[String], interactions: &[InteractionRecord]) -> InteractionGraph {
        let mut g = InteractionGraph::new();
        for i in interactions {
            g.add_edge(&i.node1, &i.node2, i.weight);
        }
        for a in agents {
            g.add_node(a);
        }
        g
    }

    /// Add a node if it does not exist yet and return its ID.
    pub fn add_node(&mut self, name: &str) -> NodeID {
        if let Some(id) = self.node_ids.get(name) {
            return *id;
        }
        let id = self.nodes.len();
        self.nodes.push(name.to_string());
        self.node_ids.insert(name.to_string(), id);
        id
    }

    /// Add an undirected edge, creating missing nodes.
    ///
    /// Returns the previous weight if the edge already existed.
    pub fn add_edge(&mut self, node1: &str, node2: &str, weight: f64) -> Option<f64> {
        let source = self.add_node(node1);
        let target = self.add_node(node2);
        let key = edge_key(source, target);
        if let Some(idx) = self.edge_index.get(&key) {
            let existing = &mut self.edges[*idx];
            let old = existing.weight;
            existing.weight = weight;
            trace!(
                "overwriting weight of edge {} -- {} ({} -> {})",
                node1,
                node2,
                old,
                weight
            );
            Some(old)
        } else {
            self.edge_index.insert(key, self.edges.len());
            self.edges.push(Edge {
                source,
                target,
                weight,
            });
            None
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node_name(&self, id: NodeID) -> Option<&str> {
        self.nodes.get(id).map(|n| n.as_str())
    }

    pub fn node_id(&self, name: &str) -> Option<NodeID> {
        self.node_ids.get(name).copied()
    }

    /// All node names in insertion order. The index of a name is its [`NodeID`].
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.as_str())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the edge between the two nodes, independent of the orientation.
    pub fn weight(&self, node1: &str, node2: &str) -> Option<f64> {
        let source = self.node_id(node1)?;
        let target = self.node_id(node2)?;
        let idx = self.edge_index.get(&edge_key(source, target))?;
        Some(self.edges[*idx].weight)
    }

    /// Minimum and maximum edge weight or `None` if there are no edges.
    pub fn weight_range(&self) -> Option<(f64, f64)> {
        match self.edges.iter().map(|e| e.weight).minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(w) => Some((w, w)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// Convert the edges back into records, e.g. for writing an interaction report.
    pub fn to_records(&self) -> Vec<InteractionRecord> {
        self.edges
            .iter()
            .map(|e| InteractionRecord {
                node1: self.nodes[e.source].clone(),
                node2: self.nodes[e.target].clone(),
                weight: e.weight,
            })
            .collect()
    }
}
