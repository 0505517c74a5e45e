//! Property value codec table

use gt_format::constants::{LENGTH_PREFIX_BYTES, LONG_DOUBLE_BYTES};
use gt_format::{
    ByteCursor, DecodedValue, GtError, IntWidth, Result, UnusableValue, Value, ValueType,
};

/// Decoder for the values of one property map, selected by its value type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueCodec {
    value_type: ValueType,
}

impl ValueCodec {
    /// Codec for a known value type.
    pub fn new(value_type: ValueType) -> Self {
        Self { value_type }
    }

    /// Look up the codec for a raw tag read at `offset`.
    ///
    /// An unknown tag is fatal: without it the width of the values that
    /// follow cannot be known.
    pub fn for_tag(tag: u8, offset: usize) -> Result<Self> {
        ValueType::from_u8(tag)
            .map(Self::new)
            .ok_or(GtError::UnsupportedValueType { tag, offset })
    }

    /// Value type this codec decodes.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Why values of this type cannot be attached, if they cannot.
    pub fn unsupported_reason(&self) -> Option<&'static str> {
        match self.value_type {
            ValueType::LongDouble => Some("long double values are skipped"),
            ValueType::VectorLongDouble => Some("vector<long double> values are skipped"),
            ValueType::PythonObject => Some("pickled python objects cannot be decoded"),
            _ => None,
        }
    }

    /// Decode a single value.
    pub fn decode(&self, cursor: &mut ByteCursor<'_>) -> Result<DecodedValue> {
        let value = match self.value_type {
            ValueType::Bool => Value::Bool(cursor.read_bool()?),
            ValueType::Int16 => Value::Int16(cursor.read_i16()?),
            ValueType::Int32 => Value::Int32(cursor.read_i32()?),
            ValueType::Int64 => Value::Int64(cursor.read_i64()?),
            ValueType::Double => Value::Double(cursor.read_f64()?),
            ValueType::LongDouble => {
                cursor.advance(LONG_DOUBLE_BYTES)?;
                return Ok(DecodedValue::Unusable(UnusableValue::LongDouble));
            }
            ValueType::String => Value::String(cursor.read_length_prefixed_string()?),
            ValueType::VectorBool => Value::VectorBool(cursor.read_vector(|c| c.read_bool())?),
            ValueType::VectorInt16 => Value::VectorInt16(cursor.read_vector(|c| c.read_i16())?),
            ValueType::VectorInt32 => Value::VectorInt32(cursor.read_vector(|c| c.read_i32())?),
            ValueType::VectorInt64 => Value::VectorInt64(cursor.read_vector(|c| c.read_i64())?),
            ValueType::VectorDouble => {
                Value::VectorDouble(cursor.read_vector(|c| c.read_f64())?)
            }
            ValueType::VectorLongDouble => {
                let skipped = cursor.read_vector(|c| c.advance(LONG_DOUBLE_BYTES))?;
                return Ok(DecodedValue::Unusable(UnusableValue::LongDoubleVector {
                    len: skipped.len(),
                }));
            }
            ValueType::VectorString => {
                Value::VectorString(cursor.read_vector(|c| c.read_length_prefixed_string())?)
            }
            ValueType::PythonObject => {
                let pickled = cursor.read_length_prefixed_bytes()?;
                return Ok(DecodedValue::Unusable(UnusableValue::PythonObject(
                    pickled.to_vec(),
                )));
            }
        };
        Ok(DecodedValue::Usable(value))
    }

    /// Decode `count` consecutive values.
    pub fn decode_many(
        &self,
        cursor: &mut ByteCursor<'_>,
        count: usize,
    ) -> Result<Vec<DecodedValue>> {
        let remaining = cursor.remaining();
        let requested = count.saturating_mul(self.min_encoded_len());
        if requested > remaining {
            return Err(GtError::TruncatedBuffer {
                offset: cursor.offset(),
                requested,
                remaining,
            });
        }

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(self.decode(cursor)?);
        }
        Ok(values)
    }

    /// Minimum bytes one encoded value occupies.
    pub fn min_encoded_len(&self) -> usize {
        match self.value_type {
            ValueType::Bool => 1,
            ValueType::Int16 => IntWidth::Two.bytes(),
            ValueType::Int32 => IntWidth::Four.bytes(),
            ValueType::Int64 | ValueType::Double => IntWidth::Eight.bytes(),
            ValueType::LongDouble => LONG_DOUBLE_BYTES,
            ValueType::String
            | ValueType::VectorBool
            | ValueType::VectorInt16
            | ValueType::VectorInt32
            | ValueType::VectorInt64
            | ValueType::VectorDouble
            | ValueType::VectorLongDouble
            | ValueType::VectorString
            | ValueType::PythonObject => LENGTH_PREFIX_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gt_format::Endianness;

    fn le_len(n: u64) -> Vec<u8> {
        n.to_le_bytes().to_vec()
    }

    #[test]
    fn test_unknown_tag_is_fatal() {
        match ValueCodec::for_tag(15, 33) {
            Err(GtError::UnsupportedValueType { tag, offset }) => {
                assert_eq!(tag, 15);
                assert_eq!(offset, 33);
            }
            other => panic!("expected UnsupportedValueType, got {other:?}"),
        }
    }

    #[test]
    fn test_scalar_decoding() {
        let mut bytes = vec![1u8];
        bytes.extend_from_slice(&(-7i16).to_le_bytes());
        bytes.extend_from_slice(&123_456i32.to_le_bytes());
        bytes.extend_from_slice(&(i64::MAX).to_le_bytes());
        bytes.extend_from_slice(&2.5f64.to_le_bytes());
        let mut cursor = ByteCursor::new(&bytes);

        let expected = [
            (ValueType::Bool, Value::Bool(true)),
            (ValueType::Int16, Value::Int16(-7)),
            (ValueType::Int32, Value::Int32(123_456)),
            (ValueType::Int64, Value::Int64(i64::MAX)),
            (ValueType::Double, Value::Double(2.5)),
        ];
        for (value_type, value) in expected {
            let decoded = ValueCodec::new(value_type).decode(&mut cursor).unwrap();
            assert_eq!(decoded, DecodedValue::Usable(value));
        }
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_big_endian_vector_int32() {
        let mut bytes = 2u64.to_be_bytes().to_vec();
        bytes.extend_from_slice(&1i32.to_be_bytes());
        bytes.extend_from_slice(&(-1i32).to_be_bytes());
        let mut cursor = ByteCursor::new(&bytes);
        cursor.set_endianness(Endianness::Big);

        let decoded = ValueCodec::new(ValueType::VectorInt32)
            .decode(&mut cursor)
            .unwrap();
        assert_eq!(decoded, DecodedValue::Usable(Value::VectorInt32(vec![1, -1])));
    }

    #[test]
    fn test_vector_string() {
        let mut bytes = le_len(2);
        bytes.extend(le_len(1));
        bytes.extend_from_slice(b"a");
        bytes.extend(le_len(0));
        let mut cursor = ByteCursor::new(&bytes);

        let decoded = ValueCodec::new(ValueType::VectorString)
            .decode(&mut cursor)
            .unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Usable(Value::VectorString(vec!["a".into(), String::new()]))
        );
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_long_double_consumes_sixteen_bytes() {
        let bytes = [0xAAu8; 17];
        let mut cursor = ByteCursor::new(&bytes);

        let decoded = ValueCodec::new(ValueType::LongDouble)
            .decode(&mut cursor)
            .unwrap();
        assert_eq!(decoded, DecodedValue::Unusable(UnusableValue::LongDouble));
        assert_eq!(cursor.offset(), 16);
    }

    #[test]
    fn test_vector_long_double_stays_aligned() {
        let mut bytes = le_len(3);
        bytes.extend_from_slice(&[0u8; 48]);
        bytes.push(1);
        let mut cursor = ByteCursor::new(&bytes);

        let decoded = ValueCodec::new(ValueType::VectorLongDouble)
            .decode(&mut cursor)
            .unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Unusable(UnusableValue::LongDoubleVector { len: 3 })
        );
        assert!(cursor.read_bool().unwrap());
    }

    #[test]
    fn test_python_object_is_unusable() {
        let mut bytes = le_len(3);
        bytes.extend_from_slice(&[0x80, 0x04, 0x4B]);
        let mut cursor = ByteCursor::new(&bytes);

        let codec = ValueCodec::new(ValueType::PythonObject);
        assert!(codec.unsupported_reason().is_some());
        let decoded = codec.decode(&mut cursor).unwrap();
        assert_eq!(
            decoded,
            DecodedValue::Unusable(UnusableValue::PythonObject(vec![0x80, 0x04, 0x4B]))
        );
    }

    #[test]
    fn test_decode_many_rejects_impossible_count() {
        let bytes = [1u8, 0, 1];
        let mut cursor = ByteCursor::new(&bytes);

        let codec = ValueCodec::new(ValueType::Bool);
        assert!(matches!(
            codec.decode_many(&mut cursor, 4),
            Err(GtError::TruncatedBuffer { .. })
        ));
        let values = codec.decode_many(&mut cursor, 3).unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_supported_types_have_no_reason() {
        for tag in 0..=14u8 {
            let codec = ValueCodec::for_tag(tag, 0).unwrap();
            assert_eq!(
                codec.unsupported_reason().is_none(),
                codec.value_type().is_supported()
            );
        }
    }
}
