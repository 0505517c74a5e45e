//! gt Test Utilities
//!
//! This crate provides shared testing utilities and helpers for the gt project:
//! a builder that writes `.gt` byte streams (well-formed or deliberately
//! broken), named sample graphs, and proptest strategies.

use gt_format::constants::{GT_MAGIC, GT_VERSION, LONG_DOUBLE_BYTES};
use gt_format::{Endianness, GraphHeader, IntWidth, KeyType, Value, ValueType};

pub mod samples;
pub mod strategies;

/// A value as it is laid out on the wire, including types the decoder skips.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// Any supported value
    Value(Value),
    /// A 16-byte `long double` (written as zeros)
    LongDouble,
    /// A `vector<long double>` with this many elements
    VectorLongDouble(usize),
    /// Pickled Python object bytes
    PythonObject(Vec<u8>),
    /// Bytes written verbatim
    Raw(Vec<u8>),
}

impl From<Value> for WireValue {
    fn from(value: Value) -> Self {
        WireValue::Value(value)
    }
}

/// Endian-aware byte sink used by [`GtBuilder`].
#[derive(Debug, Clone)]
pub struct WireWriter {
    out: Vec<u8>,
    endianness: Endianness,
}

impl WireWriter {
    /// Append to `out` using `endianness` for numeric fields.
    pub fn new(out: Vec<u8>, endianness: Endianness) -> Self {
        Self { out, endianness }
    }

    /// Finish writing.
    pub fn into_bytes(self) -> Vec<u8> {
        self.out
    }

    fn put<const N: usize>(&mut self, le: [u8; N], be: [u8; N]) {
        match self.endianness {
            Endianness::Little => self.out.extend_from_slice(&le),
            Endianness::Big => self.out.extend_from_slice(&be),
        }
    }

    /// Write one byte.
    pub fn u8(&mut self, v: u8) {
        self.out.push(v);
    }

    /// Write an unsigned integer truncated to `width`.
    pub fn uint(&mut self, v: u64, width: IntWidth) {
        match width {
            IntWidth::One => self.u8(v as u8),
            IntWidth::Two => self.put((v as u16).to_le_bytes(), (v as u16).to_be_bytes()),
            IntWidth::Four => self.put((v as u32).to_le_bytes(), (v as u32).to_be_bytes()),
            IntWidth::Eight => self.u64(v),
        }
    }

    /// Write an 8-byte unsigned integer.
    pub fn u64(&mut self, v: u64) {
        self.put(v.to_le_bytes(), v.to_be_bytes());
    }

    /// Write a length-prefixed byte string.
    pub fn bytes(&mut self, v: &[u8]) {
        self.u64(v.len() as u64);
        self.out.extend_from_slice(v);
    }

    /// Write a length-prefixed string.
    pub fn string(&mut self, v: &str) {
        self.bytes(v.as_bytes());
    }

    /// Write a value in the layout of its type.
    pub fn value(&mut self, value: &WireValue) {
        match value {
            WireValue::Value(value) => self.supported(value),
            WireValue::LongDouble => self.out.extend_from_slice(&[0u8; LONG_DOUBLE_BYTES]),
            WireValue::VectorLongDouble(len) => {
                self.u64(*len as u64);
                for _ in 0..*len {
                    self.out.extend_from_slice(&[0u8; LONG_DOUBLE_BYTES]);
                }
            }
            WireValue::PythonObject(pickled) => self.bytes(pickled),
            WireValue::Raw(raw) => self.out.extend_from_slice(raw),
        }
    }

    fn supported(&mut self, value: &Value) {
        match value {
            Value::Bool(v) => self.u8(*v as u8),
            Value::Int16(v) => self.put(v.to_le_bytes(), v.to_be_bytes()),
            Value::Int32(v) => self.put(v.to_le_bytes(), v.to_be_bytes()),
            Value::Int64(v) => self.put(v.to_le_bytes(), v.to_be_bytes()),
            Value::Double(v) => self.put(v.to_le_bytes(), v.to_be_bytes()),
            Value::String(v) => self.string(v),
            Value::VectorBool(items) => {
                self.u64(items.len() as u64);
                for v in items {
                    self.u8(*v as u8);
                }
            }
            Value::VectorInt16(items) => {
                self.u64(items.len() as u64);
                for v in items {
                    self.put(v.to_le_bytes(), v.to_be_bytes());
                }
            }
            Value::VectorInt32(items) => {
                self.u64(items.len() as u64);
                for v in items {
                    self.put(v.to_le_bytes(), v.to_be_bytes());
                }
            }
            Value::VectorInt64(items) => {
                self.u64(items.len() as u64);
                for v in items {
                    self.put(v.to_le_bytes(), v.to_be_bytes());
                }
            }
            Value::VectorDouble(items) => {
                self.u64(items.len() as u64);
                for v in items {
                    self.put(v.to_le_bytes(), v.to_be_bytes());
                }
            }
            Value::VectorString(items) => {
                self.u64(items.len() as u64);
                for v in items {
                    self.string(v);
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
struct PropertyMap {
    key_tag: u8,
    name: String,
    value_tag: u8,
    values: Vec<WireValue>,
}

/// Builder for `.gt` byte streams.
#[derive(Debug, Clone)]
pub struct GtBuilder {
    magic: [u8; 6],
    header: GraphHeader,
    declared_nodes: Option<u64>,
    index_width: Option<IntWidth>,
    adjacency: Vec<Vec<u64>>,
    properties: Vec<PropertyMap>,
    trailing: Vec<u8>,
}

impl GtBuilder {
    /// Start an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            magic: GT_MAGIC,
            header: GraphHeader {
                version: GT_VERSION,
                endianness: Endianness::Little,
                comment: String::new(),
                directed,
            },
            declared_nodes: None,
            index_width: None,
            adjacency: Vec::new(),
            properties: Vec::new(),
            trailing: Vec::new(),
        }
    }

    /// Byte order for every field after the header flag.
    pub fn endianness(mut self, endianness: Endianness) -> Self {
        self.header.endianness = endianness;
        self
    }

    /// Header comment.
    pub fn comment(mut self, comment: &str) -> Self {
        self.header.comment = comment.to_string();
        self
    }

    /// Header version byte.
    pub fn version(mut self, version: u8) -> Self {
        self.header.version = version;
        self
    }

    /// Override the magic bytes.
    pub fn magic(mut self, magic: [u8; 6]) -> Self {
        self.magic = magic;
        self
    }

    /// Use `count` nodes with no edges.
    pub fn nodes(mut self, count: usize) -> Self {
        self.adjacency = vec![Vec::new(); count];
        self
    }

    /// Use the given neighbor lists; the node count is their length.
    pub fn adjacency(mut self, adjacency: Vec<Vec<u64>>) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Append `target` to the neighbor list of `source`, growing the node set as needed.
    pub fn edge(mut self, source: usize, target: u64) -> Self {
        let needed = source.max(target as usize) + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize(needed, Vec::new());
        }
        self.adjacency[source].push(target);
        self
    }

    /// Write this node count instead of the adjacency length.
    pub fn declared_nodes(mut self, count: u64) -> Self {
        self.declared_nodes = Some(count);
        self
    }

    /// Write neighbor ids with this width instead of the one the node count implies.
    pub fn index_width(mut self, width: IntWidth) -> Self {
        self.index_width = Some(width);
        self
    }

    /// Number of edges the neighbor lists describe.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Add a graph-scoped property.
    pub fn graph_property(self, name: &str, value_type: ValueType, value: WireValue) -> Self {
        self.property(KeyType::Graph, name, value_type, vec![value])
    }

    /// Add a vertex-scoped property with one value per node.
    pub fn vertex_property(self, name: &str, value_type: ValueType, values: Vec<WireValue>) -> Self {
        self.property(KeyType::Vertex, name, value_type, values)
    }

    /// Add an edge-scoped property with one value per edge.
    pub fn edge_property(self, name: &str, value_type: ValueType, values: Vec<WireValue>) -> Self {
        self.property(KeyType::Edge, name, value_type, values)
    }

    /// Add a property map with a typed key and value type.
    pub fn property(
        self,
        key_type: KeyType,
        name: &str,
        value_type: ValueType,
        values: Vec<WireValue>,
    ) -> Self {
        self.raw_property(key_type as u8, name, value_type.tag(), values)
    }

    /// Add a property map with arbitrary tag bytes.
    pub fn raw_property(
        mut self,
        key_tag: u8,
        name: &str,
        value_tag: u8,
        values: Vec<WireValue>,
    ) -> Self {
        self.properties.push(PropertyMap {
            key_tag,
            name: name.to_string(),
            value_tag,
            values,
        });
        self
    }

    /// Append bytes after the last property map.
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    /// Write the stream.
    pub fn build(&self) -> Vec<u8> {
        let mut header_bytes = self.header.encode();
        header_bytes[..GT_MAGIC.len()].copy_from_slice(&self.magic);

        let mut w = WireWriter::new(header_bytes, self.header.endianness);

        let node_count = self
            .declared_nodes
            .unwrap_or(self.adjacency.len() as u64);
        w.u64(node_count);

        let width = self
            .index_width
            .or_else(|| gt_format::neighbor_index_width(node_count).ok())
            .unwrap_or(IntWidth::Four);
        for neighbors in &self.adjacency {
            w.u64(neighbors.len() as u64);
            for neighbor in neighbors {
                w.uint(*neighbor, width);
            }
        }

        w.u64(self.properties.len() as u64);
        for map in &self.properties {
            w.u8(map.key_tag);
            w.string(&map.name);
            w.u8(map.value_tag);
            for value in &map.values {
                w.value(value);
            }
        }

        let mut bytes = w.into_bytes();
        bytes.extend_from_slice(&self.trailing);
        bytes
    }
}

/// Install a test-writer tracing subscriber; repeated calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// Wrap supported values for the builder.
pub fn wire<I>(values: I) -> Vec<WireValue>
where
    I: IntoIterator<Item = Value>,
{
    values.into_iter().map(WireValue::Value).collect()
}
