//! Sequential byte cursor with a switchable byte order

use crate::constants::LENGTH_PREFIX_BYTES;
use crate::error::{GtError, Result};
use crate::limits::Limits;
use serde::Serialize;

/// Byte order applied to multi-byte numeric reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
    /// Least significant byte first (the state before the header flag is read).
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl Endianness {
    /// Map the header's big-endian flag to a byte order.
    pub fn from_flag(big_endian: bool) -> Self {
        if big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// Whether this is big-endian.
    pub fn is_big(self) -> bool {
        self == Endianness::Big
    }
}

/// Width of a fixed-size integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IntWidth {
    /// 1 byte
    One = 1,
    /// 2 bytes
    Two = 2,
    /// 4 bytes
    Four = 4,
    /// 8 bytes
    Eight = 8,
}

impl IntWidth {
    /// Width in bytes.
    pub fn bytes(self) -> usize {
        self as usize
    }
}

macro_rules! read_endian {
    ($cursor:expr, $ty:ty) => {{
        let bytes = $cursor.take_array()?;
        match $cursor.endianness {
            Endianness::Big => <$ty>::from_be_bytes(bytes),
            Endianness::Little => <$ty>::from_le_bytes(bytes),
        }
    }};
}

/// Forward-only reader over an immutable byte buffer.
///
/// Every read advances the offset by exactly the bytes it consumes, and a
/// read that would run past the end fails with [`GtError::TruncatedBuffer`].
/// A failed fixed-size read leaves the cursor where it was. Length-prefixed
/// reads ([`read_vector`](Self::read_vector),
/// [`read_length_prefixed_string`](Self::read_length_prefixed_string),
/// [`read_length_prefixed_bytes`](Self::read_length_prefixed_bytes)) consume
/// their 8-byte count first, so on failure the cursor sits after the count.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
    endianness: Endianness,
    limits: Limits,
}

impl<'a> ByteCursor<'a> {
    /// Create a little-endian cursor at offset 0 with default limits.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_limits(buf, Limits::default())
    }

    /// Create a cursor that enforces the given string and vector limits.
    pub fn with_limits(buf: &'a [u8], limits: Limits) -> Self {
        Self {
            buf,
            offset: 0,
            endianness: Endianness::Little,
            limits,
        }
    }

    /// Current read offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total buffer length.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Whether every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.offset == self.buf.len()
    }

    /// Byte order currently applied to numeric reads.
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Switch the byte order for all subsequent reads.
    pub fn set_endianness(&mut self, endianness: Endianness) {
        self.endianness = endianness;
    }

    /// Limits this cursor enforces.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(GtError::TruncatedBuffer {
                offset: self.offset,
                requested: len,
                remaining,
            });
        }
        let bytes = &self.buf[self.offset..self.offset + len];
        self.offset += len;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Borrow the next `len` raw bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Skip `len` bytes.
    pub fn advance(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    /// Decode the next `len` bytes as UTF-8.
    ///
    /// Invalid sequences are replaced with U+FFFD rather than rejected;
    /// graph-tool stores `std::string` payloads without validating them.
    pub fn read_string(&mut self, len: usize) -> Result<String> {
        if len > self.limits.max_string_len {
            return Err(GtError::LimitExceeded(format!(
                "String length {} at offset {} exceeds limit {}",
                len, self.offset, self.limits.max_string_len
            )));
        }
        let bytes = self.take(len)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    /// Read an 8-byte length or element count.
    pub fn read_length(&mut self) -> Result<usize> {
        let offset = self.offset;
        let raw = self.read_u64()?;
        usize::try_from(raw).map_err(|_| GtError::TruncatedBuffer {
            offset,
            requested: usize::MAX,
            remaining: self.remaining(),
        })
    }

    /// Read an 8-byte length followed by that many raw bytes.
    pub fn read_length_prefixed_bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.read_length()?;
        self.take(len)
    }

    /// Read an 8-byte length followed by that many UTF-8 bytes.
    pub fn read_length_prefixed_string(&mut self) -> Result<String> {
        let len = self.read_length()?;
        self.read_string(len)
    }

    /// Read one byte; any nonzero value is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_u8()? != 0)
    }

    /// Read one unsigned byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.take_array::<1>()?;
        Ok(byte)
    }

    /// Read a signed integer of the given width, sign-extended to 64 bits.
    pub fn read_signed_int(&mut self, width: IntWidth) -> Result<i64> {
        Ok(match width {
            IntWidth::One => read_endian!(self, i8) as i64,
            IntWidth::Two => read_endian!(self, i16) as i64,
            IntWidth::Four => read_endian!(self, i32) as i64,
            IntWidth::Eight => read_endian!(self, i64),
        })
    }

    /// Read an unsigned integer of the given width.
    pub fn read_unsigned_int(&mut self, width: IntWidth) -> Result<u64> {
        Ok(match width {
            IntWidth::One => read_endian!(self, u8) as u64,
            IntWidth::Two => read_endian!(self, u16) as u64,
            IntWidth::Four => read_endian!(self, u32) as u64,
            IntWidth::Eight => read_endian!(self, u64),
        })
    }

    /// Read a 2-byte signed integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(read_endian!(self, i16))
    }

    /// Read a 4-byte signed integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(read_endian!(self, i32))
    }

    /// Read an 8-byte signed integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(read_endian!(self, i64))
    }

    /// Read an 8-byte unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        Ok(read_endian!(self, u64))
    }

    /// Read an 8-byte IEEE-754 double.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(read_endian!(self, f64))
    }

    /// Read an 8-byte element count, then that many elements.
    ///
    /// Every element occupies at least one byte, so a count larger than the
    /// remaining input is rejected before anything is allocated.
    pub fn read_vector<T, F>(&mut self, mut read_element: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let count = self.read_length()?;
        if count > self.limits.max_vector_len {
            return Err(GtError::LimitExceeded(format!(
                "Vector length {} at offset {} exceeds limit {}",
                count,
                self.offset - LENGTH_PREFIX_BYTES,
                self.limits.max_vector_len
            )));
        }
        let remaining = self.remaining();
        if count > remaining {
            return Err(GtError::TruncatedBuffer {
                offset: self.offset,
                requested: count,
                remaining,
            });
        }

        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            elements.push(read_element(self)?);
        }
        Ok(elements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_by_width() {
        let bytes = [1u8, 0x34, 0x12, 0, 0, 0, 0x80, 0xFF];
        let mut cursor = ByteCursor::new(&bytes);

        assert!(cursor.read_bool().unwrap());
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.read_i16().unwrap(), 0x1234);
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.read_unsigned_int(IntWidth::Four).unwrap(), 0x8000_0000);
        assert_eq!(cursor.offset(), 7);
        assert_eq!(cursor.read_u8().unwrap(), 0xFF);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_endianness_switch_applies_to_later_reads_only() {
        let bytes = [0x01, 0x00, 0x00, 0x01];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_unsigned_int(IntWidth::Two).unwrap(), 1);
        cursor.set_endianness(Endianness::Big);
        assert_eq!(cursor.read_unsigned_int(IntWidth::Two).unwrap(), 1);
        assert_eq!(cursor.endianness(), Endianness::Big);
    }

    #[test]
    fn test_signed_reads_sign_extend() {
        let bytes = [0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_signed_int(IntWidth::One).unwrap(), -1);
        assert_eq!(cursor.read_signed_int(IntWidth::Two).unwrap(), -2);
        assert_eq!(cursor.read_signed_int(IntWidth::Four).unwrap(), -1);
    }

    #[test]
    fn test_i64_keeps_full_precision() {
        let value = (1i64 << 53) + 1;
        let bytes = value.to_be_bytes();
        let mut cursor = ByteCursor::new(&bytes);
        cursor.set_endianness(Endianness::Big);

        assert_eq!(cursor.read_i64().unwrap(), value);
    }

    #[test]
    fn test_double_both_orders() {
        let mut bytes = 1.5f64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&(-2.25f64).to_be_bytes());
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_f64().unwrap(), 1.5);
        cursor.set_endianness(Endianness::Big);
        assert_eq!(cursor.read_f64().unwrap(), -2.25);
    }

    #[test]
    fn test_truncated_read_leaves_offset() {
        let bytes = [0u8; 3];
        let mut cursor = ByteCursor::new(&bytes);
        cursor.advance(1).unwrap();

        match cursor.read_u64() {
            Err(GtError::TruncatedBuffer {
                offset,
                requested,
                remaining,
            }) => {
                assert_eq!(offset, 1);
                assert_eq!(requested, 8);
                assert_eq!(remaining, 2);
            }
            other => panic!("expected TruncatedBuffer, got {other:?}"),
        }
        assert_eq!(cursor.offset(), 1);
    }

    #[test]
    fn test_length_prefixed_string() {
        let mut bytes = 5u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"hello");
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_length_prefixed_string().unwrap(), "hello");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let bytes = [b'a', 0xFF, b'b'];
        let mut cursor = ByteCursor::new(&bytes);

        assert_eq!(cursor.read_string(3).unwrap(), "a\u{FFFD}b");
    }

    #[test]
    fn test_string_limit() {
        let limits = Limits {
            max_string_len: 2,
            ..Limits::default()
        };
        let bytes = *b"abc";
        let mut cursor = ByteCursor::with_limits(&bytes, limits);

        assert!(matches!(
            cursor.read_string(3),
            Err(GtError::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_vector_reads_count_then_elements() {
        let mut bytes = 3u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[1, 0, 7]);
        let mut cursor = ByteCursor::new(&bytes);

        let values = cursor.read_vector(|c| c.read_bool()).unwrap();
        assert_eq!(values, vec![true, false, true]);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_empty_vector() {
        let bytes = 0u64.to_le_bytes();
        let mut cursor = ByteCursor::new(&bytes);

        let values: Vec<f64> = cursor.read_vector(|c| c.read_f64()).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_vector_count_beyond_input_rejected_early() {
        let mut bytes = u64::MAX.to_le_bytes().to_vec();
        bytes.push(1);
        let mut cursor = ByteCursor::new(&bytes);

        let result = cursor.read_vector(|c| c.read_bool());
        assert!(matches!(
            result,
            Err(GtError::TruncatedBuffer { .. }) | Err(GtError::LimitExceeded(_))
        ));
    }

    #[test]
    fn test_failed_length_prefixed_read_consumes_count() {
        let mut bytes = 4u64.to_le_bytes().to_vec();
        bytes.extend_from_slice(b"ab");
        let mut cursor = ByteCursor::new(&bytes);

        assert!(matches!(
            cursor.read_length_prefixed_string(),
            Err(GtError::TruncatedBuffer { offset: 8, requested: 4, remaining: 2 })
        ));
        assert_eq!(cursor.offset(), 8);
    }
}
