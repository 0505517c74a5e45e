#![no_main]

use gt_codec::{decode_with, DecodeOptions, Limits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let opts = DecodeOptions {
        limits: Limits::unbounded(),
        verify_magic: false,
        allow_trailing_bytes: true,
    };

    if let Ok(decoded) = decode_with(data, &opts) {
        assert!(decoded.report.bytes_consumed <= data.len());
        assert_eq!(decoded.graph.node_count(), decoded.report.node_count);
        assert_eq!(decoded.graph.edge_count(), decoded.report.edge_count);
        let _ = serde_json::to_string(&decoded.report);
    }
});
