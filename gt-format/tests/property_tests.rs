//! Property-based tests for gt format primitives

use gt_format::{neighbor_index_width, required_index_bits, ByteCursor, Endianness, GtError, IntWidth};
use proptest::prelude::*;

fn encode_u64(value: u64, endianness: Endianness) -> [u8; 8] {
    match endianness {
        Endianness::Little => value.to_le_bytes(),
        Endianness::Big => value.to_be_bytes(),
    }
}

fn arb_endianness() -> impl Strategy<Value = Endianness> {
    prop_oneof![Just(Endianness::Little), Just(Endianness::Big)]
}

fn arb_width() -> impl Strategy<Value = IntWidth> {
    prop_oneof![
        Just(IntWidth::One),
        Just(IntWidth::Two),
        Just(IntWidth::Four),
        Just(IntWidth::Eight),
    ]
}

proptest! {
    #[test]
    fn u64_read_respects_endianness(value in any::<u64>(), endianness in arb_endianness()) {
        let bytes = encode_u64(value, endianness);
        let mut cursor = ByteCursor::new(&bytes);
        cursor.set_endianness(endianness);

        prop_assert_eq!(cursor.read_u64().unwrap(), value);
        prop_assert!(cursor.is_exhausted());
    }

    #[test]
    fn signed_read_sign_extends(value in any::<i16>(), endianness in arb_endianness()) {
        let bytes = match endianness {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        };
        let mut cursor = ByteCursor::new(&bytes);
        cursor.set_endianness(endianness);

        prop_assert_eq!(cursor.read_signed_int(IntWidth::Two).unwrap(), value as i64);
    }

    #[test]
    fn offset_advances_by_width(
        bytes in prop::collection::vec(any::<u8>(), 0..64),
        widths in prop::collection::vec(arb_width(), 0..16),
    ) {
        let mut cursor = ByteCursor::new(&bytes);
        let mut expected = 0usize;

        for width in widths {
            let before = cursor.offset();
            match cursor.read_unsigned_int(width) {
                Ok(_) => {
                    expected += width.bytes();
                    prop_assert_eq!(cursor.offset(), before + width.bytes());
                }
                Err(GtError::TruncatedBuffer { offset, requested, remaining }) => {
                    prop_assert_eq!(offset, before);
                    prop_assert_eq!(requested, width.bytes());
                    prop_assert!(remaining < requested);
                    // A failed read consumes nothing.
                    prop_assert_eq!(cursor.offset(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error {}", other),
            }
            prop_assert_eq!(cursor.offset(), expected);
            prop_assert!(cursor.offset() <= bytes.len());
        }
    }

    #[test]
    fn vector_count_never_overallocates(count in any::<u64>(), tail in prop::collection::vec(any::<u8>(), 0..32)) {
        let mut bytes = count.to_le_bytes().to_vec();
        bytes.extend_from_slice(&tail);
        let mut cursor = ByteCursor::new(&bytes);

        match cursor.read_vector(|c| c.read_u8()) {
            Ok(elements) => {
                prop_assert_eq!(elements.len() as u64, count);
                prop_assert_eq!(&elements[..], &tail[..count as usize]);
            }
            Err(err) => prop_assert!(count > tail.len() as u64, "unexpected {}", err),
        }
    }

    #[test]
    fn strings_never_fail_on_content(content in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut bytes = (content.len() as u64).to_le_bytes().to_vec();
        bytes.extend_from_slice(&content);
        let mut cursor = ByteCursor::new(&bytes);

        let decoded = cursor.read_length_prefixed_string().unwrap();
        prop_assert_eq!(decoded, String::from_utf8_lossy(&content).into_owned());
        prop_assert!(cursor.is_exhausted());
    }

    #[test]
    fn index_width_covers_every_node(node_count in 1u64..=(1 << 32)) {
        let width = neighbor_index_width(node_count).unwrap();
        let max_id = node_count - 1;

        prop_assert!(required_index_bits(node_count) <= (width.bytes() * 8) as u32);
        if width != IntWidth::Eight {
            prop_assert!(max_id < 1u64 << (width.bytes() * 8));
        }
    }
}
