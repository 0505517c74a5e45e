//! Proptest strategies for random graphs

use crate::GtBuilder;
use gt_format::Endianness;
use proptest::prelude::*;

/// Either byte order.
pub fn arb_endianness() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Little), Just(Endianness::Big)]
}

/// Neighbor lists over up to `max_nodes` nodes, each list up to `max_degree` long.
///
/// Neighbor ids are always in range; self-loops and repeats occur naturally.
pub fn arb_adjacency(max_nodes: usize, max_degree: usize) -> impl Strategy<Value = Vec<Vec<u64>>> {
    (0..=max_nodes).prop_flat_map(move |n| {
        let neighbor = if n == 0 { 0..1u64 } else { 0..n as u64 };
        let degree = if n == 0 { 0..1usize } else { 0..max_degree + 1 };
        prop::collection::vec(prop::collection::vec(neighbor, degree), n)
    })
}

/// A structurally valid builder with random topology, direction and byte order.
pub fn arb_topology(max_nodes: usize, max_degree: usize) -> impl Strategy<Value = GtBuilder> {
    (
        arb_adjacency(max_nodes, max_degree),
        any::<bool>(),
        arb_endianness(),
        "[a-z ]{0,16}",
    )
        .prop_map(|(adjacency, directed, endianness, comment)| {
            GtBuilder::new(directed)
                .endianness(endianness)
                .comment(&comment)
                .adjacency(adjacency)
        })
}
