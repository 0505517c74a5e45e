//! Graph store interface driven by the decoder

use gt_format::{GraphHeader, Value};

/// Node identifier: dense, `0..node_count`.
pub type NodeId = usize;

/// Edge identifier: dense, `0..edge_count`, in neighbor-list scan order.
pub type EdgeId = usize;

/// Destination of a decode.
///
/// The decoder calls [`begin`](GraphSink::begin) once, then creates every
/// node in ascending id order, then every edge in ascending id order, and
/// finally sets attributes. Implementations must accept self-loops and
/// parallel edges. Attribute setters are only called with ids that were
/// already created.
pub trait GraphSink {
    /// Called once the header is decoded, before any node exists.
    fn begin(&mut self, header: &GraphHeader);

    /// Create node `id`.
    fn create_node(&mut self, id: NodeId);

    /// Create edge `id` from `source` to `target`.
    fn create_edge(&mut self, id: EdgeId, source: NodeId, target: NodeId);

    /// Set a graph-level attribute.
    fn set_graph_attribute(&mut self, name: &str, value: Value);

    /// Set an attribute on node `id`.
    fn set_node_attribute(&mut self, id: NodeId, name: &str, value: Value);

    /// Set an attribute on edge `id`.
    fn set_edge_attribute(&mut self, id: EdgeId, name: &str, value: Value);

    /// Number of nodes created so far.
    fn node_count(&self) -> usize;

    /// Number of edges created so far.
    fn edge_count(&self) -> usize;

    /// Whether the graph is directed.
    fn is_directed(&self) -> bool;
}
