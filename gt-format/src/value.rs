//! Decoded property values

use crate::types::ValueType;
use serde::Serialize;

/// A property value of one of the supported types.
///
/// 64-bit integers are kept as `i64`, so values above 2^53 survive exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// `bool`
    Bool(bool),
    /// `int16_t`
    Int16(i16),
    /// `int32_t`
    Int32(i32),
    /// `int64_t`
    Int64(i64),
    /// `double`
    Double(f64),
    /// `string`
    String(String),
    /// `vector<bool>`
    VectorBool(Vec<bool>),
    /// `vector<int16_t>`
    VectorInt16(Vec<i16>),
    /// `vector<int32_t>`
    VectorInt32(Vec<i32>),
    /// `vector<int64_t>`
    VectorInt64(Vec<i64>),
    /// `vector<double>`
    VectorDouble(Vec<f64>),
    /// `vector<string>`
    VectorString(Vec<String>),
}

impl Value {
    /// The wire type this value was decoded from.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int16(_) => ValueType::Int16,
            Value::Int32(_) => ValueType::Int32,
            Value::Int64(_) => ValueType::Int64,
            Value::Double(_) => ValueType::Double,
            Value::String(_) => ValueType::String,
            Value::VectorBool(_) => ValueType::VectorBool,
            Value::VectorInt16(_) => ValueType::VectorInt16,
            Value::VectorInt32(_) => ValueType::VectorInt32,
            Value::VectorInt64(_) => ValueType::VectorInt64,
            Value::VectorDouble(_) => ValueType::VectorDouble,
            Value::VectorString(_) => ValueType::VectorString,
        }
    }

    /// Scalar integer types widened to `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int16(v) => Some(*v as i64),
            Value::Int32(v) => Some(*v as i64),
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// `double` payload.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// `bool` payload.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// `string` payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

/// Bytes that were consumed for a value the decoder cannot represent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnusableValue {
    /// A skipped 16-byte `long double`.
    LongDouble,
    /// A `vector<long double>` whose elements were skipped.
    LongDoubleVector {
        /// Number of skipped elements.
        len: usize,
    },
    /// Raw bytes of a pickled Python object.
    PythonObject(Vec<u8>),
}

/// Outcome of decoding one value.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// A value that can be attached to the graph.
    Usable(Value),
    /// A value that was read to keep the stream aligned but must not be attached.
    Unusable(UnusableValue),
}

impl DecodedValue {
    /// Whether this value must not be attached.
    pub fn is_unusable(&self) -> bool {
        matches!(self, DecodedValue::Unusable(_))
    }

    /// The usable value, if any.
    pub fn into_usable(self) -> Option<Value> {
        match self {
            DecodedValue::Usable(value) => Some(value),
            DecodedValue::Unusable(_) => None,
        }
    }
}
