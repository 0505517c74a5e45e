//! Constants and magic numbers for the gt format

/// File magic bytes: "⛾ gt" encoded as UTF-8
pub const GT_MAGIC: [u8; 6] = [0xE2, 0x9B, 0xBE, 0x20, 0x67, 0x74]; // "\u{26FE} gt"

/// Format version written by graph-tool.
pub const GT_VERSION: u8 = 1;

/// Width in bytes of every length prefix and element count.
pub const LENGTH_PREFIX_BYTES: usize = 8;

/// Width in bytes of a `long double` value on disk.
pub const LONG_DOUBLE_BYTES: usize = 16;

/// Key type for a graph-scoped property map.
pub const KEY_GRAPH: u8 = 0;
/// Key type for a vertex-scoped property map.
pub const KEY_VERTEX: u8 = 1;
/// Key type for an edge-scoped property map.
pub const KEY_EDGE: u8 = 2;

/// Value type tag for `bool`.
pub const TAG_BOOL: u8 = 0;
/// Value type tag for `int16_t`.
pub const TAG_INT16: u8 = 1;
/// Value type tag for `int32_t`.
pub const TAG_INT32: u8 = 2;
/// Value type tag for `int64_t`.
pub const TAG_INT64: u8 = 3;
/// Value type tag for `double`.
pub const TAG_DOUBLE: u8 = 4;
/// Value type tag for `long double` (read but not decoded).
pub const TAG_LONG_DOUBLE: u8 = 5;
/// Value type tag for `string`.
pub const TAG_STRING: u8 = 6;
/// Value type tag for `vector<bool>`.
pub const TAG_VECTOR_BOOL: u8 = 7;
/// Value type tag for `vector<int16_t>`.
pub const TAG_VECTOR_INT16: u8 = 8;
/// Value type tag for `vector<int32_t>`.
pub const TAG_VECTOR_INT32: u8 = 9;
/// Value type tag for `vector<int64_t>`.
pub const TAG_VECTOR_INT64: u8 = 10;
/// Value type tag for `vector<double>`.
pub const TAG_VECTOR_DOUBLE: u8 = 11;
/// Value type tag for `vector<long double>` (read but not decoded).
pub const TAG_VECTOR_LONG_DOUBLE: u8 = 12;
/// Value type tag for `vector<string>`.
pub const TAG_VECTOR_STRING: u8 = 13;
/// Value type tag for a pickled Python object.
pub const TAG_PYTHON_OBJECT: u8 = 14;
