//! Single-pass `.gt` decoder

use crate::sink::GraphSink;
use crate::value_codec::ValueCodec;
use crate::DecodeOptions;
use gt_format::constants::{GT_VERSION, LENGTH_PREFIX_BYTES};
use gt_format::{
    neighbor_index_width, ByteCursor, DecodedValue, Diagnostic, DiagnosticKind, GraphHeader,
    GtError, IntWidth, KeyType, Result, Value, ValueType,
};
use serde::Serialize;

/// Decoder progress; stages only ever advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeStage {
    /// Reading magic, version, byte order, comment and directedness
    Header,
    /// Reading the node count and creating nodes
    Nodes,
    /// Reading neighbor lists and creating edges
    Edges,
    /// Reading property maps and attaching attributes
    PropertyMaps,
    /// Every declared section was consumed
    Done,
}

/// What happened to one property map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertySummary {
    /// Property name
    pub name: String,
    /// Scope of the property
    pub key_type: KeyType,
    /// Wire type of its values
    pub value_type: ValueType,
    /// Whether its values were attached to the graph
    pub attached: bool,
}

/// Outcome of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeReport {
    /// Decoded file header
    pub header: GraphHeader,
    /// Nodes created
    pub node_count: usize,
    /// Edges created
    pub edge_count: usize,
    /// Property maps in stream order
    pub property_maps: Vec<PropertySummary>,
    /// Bytes read from the input
    pub bytes_consumed: usize,
    /// Non-fatal conditions in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

/// Decoder state machine: header, nodes, edges, property maps, done.
pub struct FormatDecoder<'a, 's, S: GraphSink + ?Sized> {
    cursor: ByteCursor<'a>,
    sink: &'s mut S,
    verify_magic: bool,
    allow_trailing_bytes: bool,
    stage: DecodeStage,
    node_count: usize,
    edge_count: usize,
    index_width: IntWidth,
    property_maps: Vec<PropertySummary>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, 's, S: GraphSink + ?Sized> FormatDecoder<'a, 's, S> {
    /// Prepare to decode `bytes` into `sink`.
    pub fn new(bytes: &'a [u8], sink: &'s mut S, options: &DecodeOptions) -> Self {
        Self {
            cursor: ByteCursor::with_limits(bytes, options.limits.clone()),
            sink,
            verify_magic: options.verify_magic,
            allow_trailing_bytes: options.allow_trailing_bytes,
            stage: DecodeStage::Header,
            node_count: 0,
            edge_count: 0,
            index_width: IntWidth::One,
            property_maps: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Run every stage to completion.
    pub fn run(mut self) -> Result<DecodeReport> {
        let header = self.decode_header()?;
        self.decode_nodes()?;
        self.decode_edges()?;
        self.decode_property_maps()?;
        self.finish(header)
    }

    fn enter(&mut self, stage: DecodeStage) {
        debug_assert!(stage > self.stage);
        tracing::debug!(?stage, offset = self.cursor.offset(), "entering decode stage");
        self.stage = stage;
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(
            kind = ?diagnostic.kind,
            offset = diagnostic.offset,
            property = diagnostic.property.as_deref(),
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    fn decode_header(&mut self) -> Result<GraphHeader> {
        let header = GraphHeader::decode(&mut self.cursor, self.verify_magic)?;
        if header.version != GT_VERSION {
            self.record(Diagnostic::new(
                DiagnosticKind::UnknownVersion,
                gt_format::constants::GT_MAGIC.len(),
                format!(
                    "format version {} (expected {})",
                    header.version, GT_VERSION
                ),
            ));
        }
        tracing::debug!(
            version = header.version,
            endianness = ?header.endianness,
            directed = header.directed,
            comment = %header.comment,
            "header decoded"
        );
        self.sink.begin(&header);
        Ok(header)
    }

    fn decode_nodes(&mut self) -> Result<()> {
        self.enter(DecodeStage::Nodes);

        let declared = self.cursor.read_u64()?;
        self.index_width = neighbor_index_width(declared)?;

        let limits = self.cursor.limits();
        let node_count = usize::try_from(declared)
            .ok()
            .filter(|count| *count <= limits.max_nodes)
            .ok_or_else(|| {
                GtError::LimitExceeded(format!(
                    "Node count {} exceeds limit {}",
                    declared, limits.max_nodes
                ))
            })?;

        // Every node is followed by at least its neighbor count.
        let remaining = self.cursor.remaining();
        let requested = node_count.saturating_mul(LENGTH_PREFIX_BYTES);
        if requested > remaining {
            return Err(GtError::TruncatedBuffer {
                offset: self.cursor.offset(),
                requested,
                remaining,
            });
        }

        for id in 0..node_count {
            self.sink.create_node(id);
        }
        self.node_count = node_count;

        tracing::debug!(
            nodes = node_count,
            index_width = self.index_width.bytes(),
            "nodes created"
        );
        Ok(())
    }

    fn decode_edges(&mut self) -> Result<()> {
        self.enter(DecodeStage::Edges);

        let width = self.index_width;
        let max_edges = self.cursor.limits().max_edges;
        let mut next_edge = 0usize;

        for node in 0..self.node_count {
            let neighbor_count = self.cursor.read_length()?;

            let remaining = self.cursor.remaining();
            let requested = neighbor_count.saturating_mul(width.bytes());
            if requested > remaining {
                return Err(GtError::TruncatedBuffer {
                    offset: self.cursor.offset(),
                    requested,
                    remaining,
                });
            }
            match next_edge.checked_add(neighbor_count) {
                Some(total) if total <= max_edges => {}
                _ => {
                    return Err(GtError::LimitExceeded(format!(
                        "Edge count exceeds limit {} at node {}",
                        max_edges, node
                    )))
                }
            }

            for _ in 0..neighbor_count {
                let offset = self.cursor.offset();
                let neighbor = self.cursor.read_unsigned_int(width)?;
                let target = usize::try_from(neighbor)
                    .ok()
                    .filter(|target| *target < self.node_count)
                    .ok_or(GtError::NeighborOutOfRange {
                        node,
                        neighbor,
                        offset,
                    })?;
                self.sink.create_edge(next_edge, node, target);
                next_edge += 1;
            }
        }
        self.edge_count = next_edge;

        tracing::debug!(edges = next_edge, "edges created");
        Ok(())
    }

    fn decode_property_maps(&mut self) -> Result<()> {
        self.enter(DecodeStage::PropertyMaps);

        let map_count = self.cursor.read_length()?;
        let max_property_maps = self.cursor.limits().max_property_maps;
        if map_count > max_property_maps {
            return Err(GtError::LimitExceeded(format!(
                "Property map count {} exceeds limit {}",
                map_count, max_property_maps
            )));
        }
        tracing::debug!(property_maps = map_count, "reading property maps");

        for _ in 0..map_count {
            let summary = self.decode_property_map()?;
            tracing::trace!(
                name = %summary.name,
                key_type = ?summary.key_type,
                value_type = summary.value_type.name(),
                attached = summary.attached,
                "property map decoded"
            );
            self.property_maps.push(summary);
        }
        Ok(())
    }

    fn decode_property_map(&mut self) -> Result<PropertySummary> {
        let key_offset = self.cursor.offset();
        let key_tag = self.cursor.read_u8()?;
        let name = self.cursor.read_length_prefixed_string()?;
        let type_offset = self.cursor.offset();
        let value_tag = self.cursor.read_u8()?;

        // The value type decides the layout of what follows, so it is checked first.
        let codec = ValueCodec::for_tag(value_tag, type_offset)?;
        let key_type = KeyType::from_u8(key_tag).ok_or(GtError::UnsupportedKeyType {
            tag: key_tag,
            offset: key_offset,
        })?;

        let unsupported = codec.unsupported_reason();
        if let Some(reason) = unsupported {
            self.record(
                Diagnostic::new(DiagnosticKind::UnsupportedFeature, type_offset, reason)
                    .with_property(name.as_str()),
            );
        }

        let attached = match key_type {
            KeyType::Graph => match codec.decode(&mut self.cursor)? {
                DecodedValue::Usable(value) => {
                    self.sink.set_graph_attribute(&name, value);
                    true
                }
                DecodedValue::Unusable(_) => false,
            },
            KeyType::Vertex => {
                let values = codec.decode_many(&mut self.cursor, self.node_count)?;
                let sink = &mut *self.sink;
                attach_all(values, |id, value| sink.set_node_attribute(id, &name, value))
            }
            KeyType::Edge => {
                let values = codec.decode_many(&mut self.cursor, self.edge_count)?;
                let sink = &mut *self.sink;
                attach_all(values, |id, value| sink.set_edge_attribute(id, &name, value))
            }
        };

        Ok(PropertySummary {
            name,
            key_type,
            value_type: codec.value_type(),
            // An unsupported map on zero elements attaches nothing either.
            attached: attached && unsupported.is_none(),
        })
    }

    fn finish(mut self, header: GraphHeader) -> Result<DecodeReport> {
        self.enter(DecodeStage::Done);

        let offset = self.cursor.offset();
        let remaining = self.cursor.remaining();
        if remaining > 0 {
            if !self.allow_trailing_bytes {
                return Err(GtError::TrailingBytes { offset, remaining });
            }
            self.record(Diagnostic::new(
                DiagnosticKind::TrailingBytes,
                offset,
                format!("{} bytes after the last property map were ignored", remaining),
            ));
        }

        debug_assert_eq!(self.sink.node_count(), self.node_count);
        debug_assert_eq!(self.sink.edge_count(), self.edge_count);

        Ok(DecodeReport {
            header,
            node_count: self.node_count,
            edge_count: self.edge_count,
            property_maps: self.property_maps,
            bytes_consumed: offset,
            diagnostics: self.diagnostics,
        })
    }
}

/// Attach a vertex or edge property, or nothing at all when its first value is unusable.
fn attach_all<F>(values: Vec<DecodedValue>, mut set: F) -> bool
where
    F: FnMut(usize, Value),
{
    if values.first().is_some_and(DecodedValue::is_unusable) {
        return false;
    }
    for (id, value) in values.into_iter().enumerate() {
        if let DecodedValue::Usable(value) = value {
            set(id, value);
        }
    }
    true
}
