//! Key type and value type enumerations

use crate::constants::*;
use crate::cursor::IntWidth;
use crate::error::{GtError, Result};
use serde::Serialize;

/// Scope of a property map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum KeyType {
    /// One value for the whole graph
    Graph = KEY_GRAPH,
    /// One value per node, in node-id order
    Vertex = KEY_VERTEX,
    /// One value per edge, in edge-id order
    Edge = KEY_EDGE,
}

impl KeyType {
    /// Convert from u8
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            KEY_GRAPH => Some(KeyType::Graph),
            KEY_VERTEX => Some(KeyType::Vertex),
            KEY_EDGE => Some(KeyType::Edge),
            _ => None,
        }
    }
}

/// Property map value type tags (graph-tool's `value_types` order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum ValueType {
    /// `bool`
    Bool = TAG_BOOL,
    /// `int16_t`
    Int16 = TAG_INT16,
    /// `int32_t`
    Int32 = TAG_INT32,
    /// `int64_t`
    Int64 = TAG_INT64,
    /// `double`
    Double = TAG_DOUBLE,
    /// `long double`; skipped
    LongDouble = TAG_LONG_DOUBLE,
    /// `string`
    String = TAG_STRING,
    /// `vector<bool>`
    VectorBool = TAG_VECTOR_BOOL,
    /// `vector<int16_t>`
    VectorInt16 = TAG_VECTOR_INT16,
    /// `vector<int32_t>`
    VectorInt32 = TAG_VECTOR_INT32,
    /// `vector<int64_t>`
    VectorInt64 = TAG_VECTOR_INT64,
    /// `vector<double>`
    VectorDouble = TAG_VECTOR_DOUBLE,
    /// `vector<long double>`; skipped
    VectorLongDouble = TAG_VECTOR_LONG_DOUBLE,
    /// `vector<string>`
    VectorString = TAG_VECTOR_STRING,
    /// Pickled `python::object`; read as raw bytes
    PythonObject = TAG_PYTHON_OBJECT,
}

impl ValueType {
    /// Convert from u8; `None` for tags outside 0..=14.
    pub fn from_u8(val: u8) -> Option<Self> {
        let value_type = match val {
            TAG_BOOL => ValueType::Bool,
            TAG_INT16 => ValueType::Int16,
            TAG_INT32 => ValueType::Int32,
            TAG_INT64 => ValueType::Int64,
            TAG_DOUBLE => ValueType::Double,
            TAG_LONG_DOUBLE => ValueType::LongDouble,
            TAG_STRING => ValueType::String,
            TAG_VECTOR_BOOL => ValueType::VectorBool,
            TAG_VECTOR_INT16 => ValueType::VectorInt16,
            TAG_VECTOR_INT32 => ValueType::VectorInt32,
            TAG_VECTOR_INT64 => ValueType::VectorInt64,
            TAG_VECTOR_DOUBLE => ValueType::VectorDouble,
            TAG_VECTOR_LONG_DOUBLE => ValueType::VectorLongDouble,
            TAG_VECTOR_STRING => ValueType::VectorString,
            TAG_PYTHON_OBJECT => ValueType::PythonObject,
            _ => return None,
        };
        Some(value_type)
    }

    /// Raw tag byte.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Whether values of this type decode to something usable.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            ValueType::LongDouble | ValueType::VectorLongDouble | ValueType::PythonObject
        )
    }

    /// Whether values of this type are length-prefixed vectors.
    pub fn is_vector(self) -> bool {
        matches!(
            self,
            ValueType::VectorBool
                | ValueType::VectorInt16
                | ValueType::VectorInt32
                | ValueType::VectorInt64
                | ValueType::VectorDouble
                | ValueType::VectorLongDouble
                | ValueType::VectorString
        )
    }

    /// graph-tool's name for this type.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int16 => "int16_t",
            ValueType::Int32 => "int32_t",
            ValueType::Int64 => "int64_t",
            ValueType::Double => "double",
            ValueType::LongDouble => "long double",
            ValueType::String => "string",
            ValueType::VectorBool => "vector<bool>",
            ValueType::VectorInt16 => "vector<int16_t>",
            ValueType::VectorInt32 => "vector<int32_t>",
            ValueType::VectorInt64 => "vector<int64_t>",
            ValueType::VectorDouble => "vector<double>",
            ValueType::VectorLongDouble => "vector<long double>",
            ValueType::VectorString => "vector<string>",
            ValueType::PythonObject => "python::object",
        }
    }
}

/// Bits needed to address every id in `0..node_count`.
pub fn required_index_bits(node_count: u64) -> u32 {
    if node_count <= 1 {
        0
    } else {
        u64::BITS - (node_count - 1).leading_zeros()
    }
}

/// Byte width of neighbor ids in the edge table for a graph of `node_count` nodes.
pub fn neighbor_index_width(node_count: u64) -> Result<IntWidth> {
    match required_index_bits(node_count) {
        0..=8 => Ok(IntWidth::One),
        9..=16 => Ok(IntWidth::Two),
        17..=32 => Ok(IntWidth::Four),
        required_bits => Err(GtError::UnsupportedGraphSize {
            node_count,
            required_bits,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_from_u8_valid() {
        for tag in 0..=14u8 {
            let value_type = ValueType::from_u8(tag).expect("known tag");
            assert_eq!(value_type.tag(), tag);
        }
    }

    #[test]
    fn test_value_type_from_u8_invalid() {
        assert!(ValueType::from_u8(15).is_none());
        assert!(ValueType::from_u8(255).is_none());
    }

    #[test]
    fn test_unsupported_types() {
        let unsupported: Vec<_> = (0..=14u8)
            .filter_map(ValueType::from_u8)
            .filter(|t| !t.is_supported())
            .collect();
        assert_eq!(
            unsupported,
            vec![
                ValueType::LongDouble,
                ValueType::VectorLongDouble,
                ValueType::PythonObject
            ]
        );
    }

    #[test]
    fn test_vector_types() {
        assert!(ValueType::VectorBool.is_vector());
        assert!(ValueType::VectorLongDouble.is_vector());
        assert!(!ValueType::String.is_vector());
        assert!(!ValueType::PythonObject.is_vector());
    }

    #[test]
    fn test_key_type_from_u8() {
        assert_eq!(KeyType::from_u8(0), Some(KeyType::Graph));
        assert_eq!(KeyType::from_u8(1), Some(KeyType::Vertex));
        assert_eq!(KeyType::from_u8(2), Some(KeyType::Edge));
        assert_eq!(KeyType::from_u8(3), None);
    }

    #[test]
    fn test_neighbor_index_width_boundaries() {
        assert_eq!(neighbor_index_width(0).unwrap(), IntWidth::One);
        assert_eq!(neighbor_index_width(1).unwrap(), IntWidth::One);
        assert_eq!(neighbor_index_width(256).unwrap(), IntWidth::One);
        assert_eq!(neighbor_index_width(257).unwrap(), IntWidth::Two);
        assert_eq!(neighbor_index_width(65_536).unwrap(), IntWidth::Two);
        assert_eq!(neighbor_index_width(65_537).unwrap(), IntWidth::Four);
        assert_eq!(neighbor_index_width(1 << 32).unwrap(), IntWidth::Four);
    }

    #[test]
    fn test_neighbor_index_width_too_large() {
        match neighbor_index_width((1 << 32) + 1) {
            Err(GtError::UnsupportedGraphSize { required_bits, .. }) => {
                assert_eq!(required_bits, 33);
            }
            other => panic!("expected UnsupportedGraphSize, got {other:?}"),
        }
    }
}
