//! Decode limits for untrusted input

/// Resource caps applied while decoding.
///
/// Counts read from the stream are also checked against the bytes that
/// remain, so these limits only need to bound what a well-formed but
/// oversized file could make the decoder allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum node count (default: 2^32 - 1, the widest neighbor index)
    pub max_nodes: usize,
    /// Maximum total edge count (default: 2^32 - 1)
    pub max_edges: usize,
    /// Maximum number of property maps (default: 65,536)
    pub max_property_maps: usize,
    /// Maximum byte length of a single string (default: 256 MiB)
    pub max_string_len: usize,
    /// Maximum element count of a single vector value (default: 64 Mi)
    pub max_vector_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: u32::MAX as usize,
            max_edges: u32::MAX as usize,
            max_property_maps: 65_536,
            max_string_len: 256 * 1024 * 1024,
            max_vector_len: 64 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Limits that only reject what the input bytes cannot back.
    pub fn unbounded() -> Self {
        Self {
            max_nodes: usize::MAX,
            max_edges: usize::MAX,
            max_property_maps: usize::MAX,
            max_string_len: usize::MAX,
            max_vector_len: usize::MAX,
        }
    }
}
