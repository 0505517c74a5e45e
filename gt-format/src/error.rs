//! Error types for the gt format

use thiserror::Error;

/// Fatal decode errors.
///
/// Any of these aborts the decode; a graph store that received partial
/// mutations before the failure should be discarded by the caller.
#[derive(Debug, Error)]
pub enum GtError {
    /// A read requested more bytes than remain in the buffer.
    #[error("Truncated buffer at offset {offset}: needed {requested} bytes, {remaining} remaining")]
    TruncatedBuffer {
        /// Cursor offset when the read was attempted.
        offset: usize,
        /// Bytes the read needed.
        requested: usize,
        /// Bytes left in the buffer.
        remaining: usize,
    },
    /// The file header failed its sanity checks.
    #[error("Malformed header at offset {offset}: {reason}")]
    MalformedHeader {
        /// Offset of the offending header field.
        offset: usize,
        /// What was wrong with it.
        reason: String,
    },
    /// Property map value type tag outside 0..=14.
    #[error("Unsupported value type {tag} at offset {offset}")]
    UnsupportedValueType {
        /// The raw tag byte.
        tag: u8,
        /// Offset of the tag byte.
        offset: usize,
    },
    /// Property map key type outside graph/vertex/edge.
    #[error("Unsupported key type {tag} at offset {offset}")]
    UnsupportedKeyType {
        /// The raw key type byte.
        tag: u8,
        /// Offset of the key type byte.
        offset: usize,
    },
    /// Node count needs a neighbor index wider than 32 bits.
    #[error("Unsupported graph size: {node_count} nodes need {required_bits}-bit neighbor indices")]
    UnsupportedGraphSize {
        /// Declared node count.
        node_count: u64,
        /// Bits needed to address every node.
        required_bits: u32,
    },
    /// An edge refers to a node id the graph does not have.
    #[error("Neighbor {neighbor} of node {node} at offset {offset} is out of range")]
    NeighborOutOfRange {
        /// Node whose neighbor list is being read.
        node: usize,
        /// The out-of-range neighbor id.
        neighbor: u64,
        /// Offset of the neighbor id.
        offset: usize,
    },
    /// A configured decode limit was exceeded.
    #[error("Limit exceeded: {0}")]
    LimitExceeded(String),
    /// Bytes remain after the last property map.
    #[error("{remaining} trailing bytes after offset {offset}")]
    TrailingBytes {
        /// Offset where decoding finished.
        offset: usize,
        /// Number of unread bytes.
        remaining: usize,
    },
    /// I/O operation failed while acquiring the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GtError {
    /// Byte offset the error was detected at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            GtError::TruncatedBuffer { offset, .. }
            | GtError::MalformedHeader { offset, .. }
            | GtError::UnsupportedValueType { offset, .. }
            | GtError::UnsupportedKeyType { offset, .. }
            | GtError::NeighborOutOfRange { offset, .. }
            | GtError::TrailingBytes { offset, .. } => Some(*offset),
            GtError::UnsupportedGraphSize { .. }
            | GtError::LimitExceeded(_)
            | GtError::Io(_) => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GtError>;
