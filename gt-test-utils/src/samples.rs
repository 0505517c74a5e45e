//! Named sample graphs with documented sizes

use crate::{wire, GtBuilder, WireValue};
use gt_format::{Endianness, Value, ValueType};

/// A sample stream and the counts a correct decode reports for it.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Short identifier
    pub name: &'static str,
    /// Encoded `.gt` bytes
    pub bytes: Vec<u8>,
    /// Expected node count
    pub nodes: usize,
    /// Expected edge count
    pub edges: usize,
    /// Expected directedness
    pub directed: bool,
}

impl Sample {
    fn from_builder(name: &'static str, builder: GtBuilder, nodes: usize, edges: usize, directed: bool) -> Self {
        Self {
            name,
            bytes: builder.build(),
            nodes,
            edges,
            directed,
        }
    }
}

/// Undirected path `0 - 1 - 2`, each edge listed from both ends.
///
/// Neighbor lists `[{1}, {0, 2}, {1}]`: 3 nodes and 4 edges, one per entry.
pub fn triangle_lists() -> GtBuilder {
    GtBuilder::new(false).adjacency(vec![vec![1], vec![0, 2], vec![1]])
}

/// Directed ring over `n` nodes, big-endian.
pub fn ring(n: usize) -> GtBuilder {
    let adjacency = (0..n).map(|i| vec![((i + 1) % n) as u64]).collect();
    GtBuilder::new(true)
        .endianness(Endianness::Big)
        .comment("ring")
        .adjacency(adjacency)
}

/// Undirected star with `leaves` leaves; edges listed once, from the hub.
pub fn star(leaves: usize) -> GtBuilder {
    let hub = (1..=leaves as u64).collect();
    let mut adjacency = vec![hub];
    adjacency.extend(std::iter::repeat(Vec::new()).take(leaves));
    GtBuilder::new(false).adjacency(adjacency)
}

/// Directed multigraph with self-loops and parallel edges.
pub fn multigraph() -> GtBuilder {
    GtBuilder::new(true).adjacency(vec![vec![0, 1, 1], vec![1], vec![], vec![0, 0]])
}

/// Small graph carrying one property map of every supported type.
pub fn all_property_types() -> GtBuilder {
    let builder = GtBuilder::new(true)
        .comment("all property types")
        .adjacency(vec![vec![1], vec![0]]);
    builder
        .graph_property(
            "description",
            ValueType::String,
            WireValue::Value(Value::String("two nodes".into())),
        )
        .graph_property("year", ValueType::Int64, WireValue::Value(Value::Int64(1 << 60)))
        .vertex_property(
            "flag",
            ValueType::Bool,
            wire([Value::Bool(true), Value::Bool(false)]),
        )
        .vertex_property(
            "small",
            ValueType::Int16,
            wire([Value::Int16(-1), Value::Int16(i16::MAX)]),
        )
        .vertex_property(
            "medium",
            ValueType::Int32,
            wire([Value::Int32(i32::MIN), Value::Int32(0)]),
        )
        .vertex_property(
            "large",
            ValueType::Int64,
            wire([Value::Int64(-(1 << 53) - 1), Value::Int64(1 << 53)]),
        )
        .vertex_property(
            "weight",
            ValueType::Double,
            wire([Value::Double(0.25), Value::Double(-8.0)]),
        )
        .vertex_property(
            "label",
            ValueType::String,
            wire([Value::String("a".into()), Value::String("βeta".into())]),
        )
        .edge_property(
            "bits",
            ValueType::VectorBool,
            wire([Value::VectorBool(vec![true]), Value::VectorBool(vec![])]),
        )
        .edge_property(
            "shorts",
            ValueType::VectorInt16,
            wire([Value::VectorInt16(vec![1, 2]), Value::VectorInt16(vec![-3])]),
        )
        .edge_property(
            "ints",
            ValueType::VectorInt32,
            wire([Value::VectorInt32(vec![7]), Value::VectorInt32(vec![8, 9])]),
        )
        .edge_property(
            "longs",
            ValueType::VectorInt64,
            wire([Value::VectorInt64(vec![i64::MIN]), Value::VectorInt64(vec![])]),
        )
        .edge_property(
            "doubles",
            ValueType::VectorDouble,
            wire([
                Value::VectorDouble(vec![1.5, 2.5]),
                Value::VectorDouble(vec![f64::INFINITY]),
            ]),
        )
        .edge_property(
            "names",
            ValueType::VectorString,
            wire([
                Value::VectorString(vec!["x".into(), "y".into()]),
                Value::VectorString(vec![String::new()]),
            ]),
        )
}

/// Every named sample with its expected `(nodes, edges, directed)`.
pub fn all() -> Vec<Sample> {
    vec![
        Sample::from_builder("empty", GtBuilder::new(true), 0, 0, true),
        Sample::from_builder("triangle_lists", triangle_lists(), 3, 4, false),
        Sample::from_builder("ring_300", ring(300), 300, 300, true),
        Sample::from_builder("star_1000", star(1000), 1001, 1000, false),
        Sample::from_builder("ring_70000", ring(70_000), 70_000, 70_000, true),
        Sample::from_builder("multigraph", multigraph(), 4, 6, true),
        Sample::from_builder("all_property_types", all_property_types(), 2, 2, true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_edge_counts_match_builders() {
        assert_eq!(triangle_lists().edge_count(), 4);
        assert_eq!(ring(300).edge_count(), 300);
        assert_eq!(star(1000).edge_count(), 1000);
        assert_eq!(multigraph().edge_count(), 6);
    }

    #[test]
    fn test_sample_names_unique() {
        let samples = all();
        let mut names: Vec<_> = samples.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), samples.len());
    }
}
