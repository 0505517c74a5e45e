#![no_main]

use gt_codec::{decode_with, DecodeOptions, Limits};
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    max_nodes: u16,
    max_edges: u16,
    max_property_maps: u8,
    max_string_len: u16,
    max_vector_len: u16,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let opts = DecodeOptions {
        limits: Limits {
            max_nodes: input.max_nodes as usize,
            max_edges: input.max_edges as usize,
            max_property_maps: input.max_property_maps as usize,
            max_string_len: input.max_string_len as usize,
            max_vector_len: input.max_vector_len as usize,
        },
        verify_magic: false,
        allow_trailing_bytes: false,
    };

    if let Ok(decoded) = decode_with(&input.data, &opts) {
        assert!(decoded.report.node_count <= opts.limits.max_nodes);
        assert!(decoded.report.edge_count <= opts.limits.max_edges);
        assert!(decoded.report.property_maps.len() <= opts.limits.max_property_maps);
        assert_eq!(decoded.report.bytes_consumed, input.data.len());
    }
});
