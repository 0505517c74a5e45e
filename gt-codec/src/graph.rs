//! In-memory graph store

use crate::sink::{EdgeId, GraphSink, NodeId};
use gt_format::{GraphHeader, Value};
use serde::Serialize;
use std::collections::BTreeMap;

/// Named attribute collection.
pub type Attributes = BTreeMap<String, Value>;

/// A node and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Node id
    pub id: NodeId,
    /// Node attributes
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

/// An edge and its attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Edge id
    pub id: EdgeId,
    /// Node the edge was listed under
    pub source: NodeId,
    /// Neighbor node
    pub target: NodeId,
    /// Edge attributes
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
}

impl Edge {
    /// Whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Multigraph with self-loops and three attribute namespaces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph {
    directed: bool,
    attributes: Attributes,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            ..Self::default()
        }
    }

    /// Whether the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in id order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Graph-level attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Attribute of node `id`.
    pub fn node_attribute(&self, id: NodeId, name: &str) -> Option<&Value> {
        self.node(id).and_then(|node| node.attributes.get(name))
    }

    /// Attribute of edge `id`.
    pub fn edge_attribute(&self, id: EdgeId, name: &str) -> Option<&Value> {
        self.edge(id).and_then(|edge| edge.attributes.get(name))
    }

    /// Edges leaving `id`; for undirected graphs, every edge touching it.
    pub fn incident_edges(&self, id: NodeId) -> impl Iterator<Item = &Edge> + '_ {
        let directed = self.directed;
        self.edges
            .iter()
            .filter(move |edge| edge.source == id || (!directed && edge.target == id))
    }

    /// Nodes reachable from `id` over one edge, once per edge.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.incident_edges(id)
            .map(|edge| {
                if edge.source == id {
                    edge.target
                } else {
                    edge.source
                }
            })
            .collect()
    }

    /// Export as a JSON document.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl GraphSink for Graph {
    fn begin(&mut self, header: &GraphHeader) {
        // A decode always starts from an empty graph.
        *self = Graph::new(header.directed);
    }

    fn create_node(&mut self, id: NodeId) {
        debug_assert_eq!(id, self.nodes.len(), "nodes are created in id order");
        self.nodes.push(Node {
            id,
            attributes: Attributes::new(),
        });
    }

    fn create_edge(&mut self, id: EdgeId, source: NodeId, target: NodeId) {
        debug_assert_eq!(id, self.edges.len(), "edges are created in id order");
        self.edges.push(Edge {
            id,
            source,
            target,
            attributes: Attributes::new(),
        });
    }

    fn set_graph_attribute(&mut self, name: &str, value: Value) {
        self.attributes.insert(name.to_string(), value);
    }

    fn set_node_attribute(&mut self, id: NodeId, name: &str, value: Value) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.attributes.insert(name.to_string(), value);
        }
    }

    fn set_edge_attribute(&mut self, id: EdgeId, name: &str, value: Value) {
        if let Some(edge) = self.edges.get_mut(id) {
            edge.attributes.insert(name.to_string(), value);
        }
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
