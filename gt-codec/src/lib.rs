//! gt Codec - Graph reconstruction from `.gt` files
//!
//! This crate turns a `.gt` byte stream into a graph:
//!
//! - The value codec table for the 15 property value types
//! - The single-pass format decoder
//! - The graph store interface it drives, plus an in-memory implementation
//!
//! Decoding is synchronous and needs the whole file in memory: later
//! sections can only be located after the counts before them are read.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod decoder;
pub mod graph;
pub mod sink;
pub mod value_codec;

// Re-export commonly used types
pub use gt_format::{
    Diagnostic, DiagnosticKind, Endianness, GraphHeader, GtError, IntWidth, KeyType, Limits,
    Result, Value, ValueType,
};

// Re-export our own types
pub use decoder::{DecodeReport, DecodeStage, FormatDecoder, PropertySummary};
pub use graph::{Attributes, Edge, Graph, Node};
pub use sink::{EdgeId, GraphSink, NodeId};
pub use value_codec::ValueCodec;

use std::io::Read;

/// Decoding options
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Resource limits
    pub limits: Limits,
    /// Reject files whose magic bytes are not `⛾ gt`
    pub verify_magic: bool,
    /// Report bytes after the last property map as a diagnostic instead of failing
    pub allow_trailing_bytes: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            verify_magic: true,
            allow_trailing_bytes: false,
        }
    }
}

/// A decoded graph together with its decode report.
#[derive(Debug, Clone)]
pub struct DecodedGraph {
    /// The reconstructed graph
    pub graph: Graph,
    /// Header, counts, property summaries and diagnostics
    pub report: DecodeReport,
}

/// Decode a `.gt` file with default options.
pub fn decode(bytes: &[u8]) -> Result<DecodedGraph> {
    decode_with(bytes, &DecodeOptions::default())
}

/// Decode a `.gt` file into the in-memory [`Graph`].
pub fn decode_with(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedGraph> {
    let mut graph = Graph::default();
    let report = decode_into(bytes, &mut graph, options)?;
    Ok(DecodedGraph { graph, report })
}

/// Decode a `.gt` file into any graph store.
///
/// On error the sink may already hold part of the graph and should be discarded.
pub fn decode_into<S: GraphSink + ?Sized>(
    bytes: &[u8],
    sink: &mut S,
    options: &DecodeOptions,
) -> Result<DecodeReport> {
    FormatDecoder::new(bytes, sink, options).run()
}

/// Read a whole `.gt` stream into memory and decode it.
pub fn read_graph<R: Read>(mut input: R, options: &DecodeOptions) -> Result<DecodedGraph> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    decode_with(&bytes, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = DecodeOptions::default();
        assert!(options.verify_magic);
        assert!(!options.allow_trailing_bytes);
        assert_eq!(options.limits, Limits::default());
    }

    #[test]
    fn test_empty_input_is_truncated() {
        assert!(matches!(
            decode(&[]),
            Err(GtError::TruncatedBuffer { offset: 0, .. })
        ));
    }
}
