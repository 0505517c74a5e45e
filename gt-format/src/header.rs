//! File header structures

use crate::constants::{GT_MAGIC, GT_VERSION};
use crate::cursor::{ByteCursor, Endianness};
use crate::error::{GtError, Result};
use serde::Serialize;

/// File header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphHeader {
    /// Format version byte
    pub version: u8,
    /// Byte order of every multi-byte field after the header flag
    pub endianness: Endianness,
    /// Free-form comment written by the producer
    pub comment: String,
    /// Whether edges are directed
    pub directed: bool,
}

impl Default for GraphHeader {
    fn default() -> Self {
        Self {
            version: GT_VERSION,
            endianness: Endianness::Little,
            comment: String::new(),
            directed: true,
        }
    }
}

impl GraphHeader {
    /// Encode header to bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(GT_MAGIC.len() + 2 + 8 + self.comment.len() + 1);

        // Magic bytes
        result.extend_from_slice(&GT_MAGIC);

        // Version
        result.push(self.version);

        // Endianness flag
        result.push(self.endianness.is_big() as u8);

        // Comment, length-prefixed in the declared byte order
        let len = self.comment.len() as u64;
        match self.endianness {
            Endianness::Big => result.extend_from_slice(&len.to_be_bytes()),
            Endianness::Little => result.extend_from_slice(&len.to_le_bytes()),
        }
        result.extend_from_slice(self.comment.as_bytes());

        // Directed flag
        result.push(self.directed as u8);

        result
    }

    /// Decode the header at the cursor and switch the cursor to the declared byte order.
    ///
    /// With `verify_magic` set, a magic mismatch is a [`GtError::MalformedHeader`];
    /// otherwise the six bytes are consumed unchecked.
    pub fn decode(cursor: &mut ByteCursor<'_>, verify_magic: bool) -> Result<Self> {
        // Magic bytes
        let magic_offset = cursor.offset();
        let magic = cursor.read_bytes(GT_MAGIC.len())?;
        if verify_magic && magic != GT_MAGIC {
            return Err(GtError::MalformedHeader {
                offset: magic_offset,
                reason: format!("bad magic bytes {:02x?}", magic),
            });
        }

        // Version
        let version = cursor.read_u8()?;

        // Endianness flag, effective immediately
        let endianness = Endianness::from_flag(cursor.read_bool()?);
        cursor.set_endianness(endianness);

        // Comment
        let comment = cursor.read_length_prefixed_string()?;

        // Directed flag
        let directed = cursor.read_bool()?;

        Ok(Self {
            version,
            endianness,
            comment,
            directed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = GraphHeader {
            version: 1,
            endianness: Endianness::Little,
            comment: "hi".to_string(),
            directed: false,
        };
        let encoded = header.encode();

        assert_eq!(&encoded[..6], &GT_MAGIC);
        assert_eq!(encoded[6], 1);
        assert_eq!(encoded[7], 0);
        assert_eq!(&encoded[8..16], &2u64.to_le_bytes());
        assert_eq!(&encoded[16..18], b"hi");
        assert_eq!(encoded[18], 0);
        assert_eq!(encoded.len(), 19);
    }

    #[test]
    fn test_header_decode_switches_endianness() {
        let header = GraphHeader {
            version: 1,
            endianness: Endianness::Big,
            comment: "graph-tool binary file".to_string(),
            directed: true,
        };
        let encoded = header.encode();
        let mut cursor = ByteCursor::new(&encoded);

        let decoded = GraphHeader::decode(&mut cursor, true).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(cursor.endianness(), Endianness::Big);
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn test_header_invalid_magic() {
        let mut encoded = GraphHeader::default().encode();
        encoded[0] = b'X';

        let mut cursor = ByteCursor::new(&encoded);
        match GraphHeader::decode(&mut cursor, true) {
            Err(GtError::MalformedHeader { offset, reason }) => {
                assert_eq!(offset, 0);
                assert!(reason.contains("magic"));
            }
            other => panic!("expected MalformedHeader, got {other:?}"),
        }

        let mut cursor = ByteCursor::new(&encoded);
        assert!(GraphHeader::decode(&mut cursor, false).is_ok());
    }

    #[test]
    fn test_header_truncated() {
        let encoded = GraphHeader::default().encode();
        let mut cursor = ByteCursor::new(&encoded[..10]);

        assert!(matches!(
            GraphHeader::decode(&mut cursor, true),
            Err(GtError::TruncatedBuffer { .. })
        ));
    }
}
