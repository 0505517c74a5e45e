#![no_main]

use gt_format::{ByteCursor, Endianness, IntWidth};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&mode, rest)) = data.split_first() else {
        return;
    };
    let mut cursor = ByteCursor::new(rest);
    cursor.set_endianness(Endianness::from_flag(mode & 1 == 1));

    let widths = [IntWidth::One, IntWidth::Two, IntWidth::Four, IntWidth::Eight];
    let _ = cursor.read_unsigned_int(widths[(mode >> 1) as usize % 4]);
    let _ = cursor.read_length_prefixed_string();
    let _ = cursor.read_vector(|c| c.read_i16());
    let _ = cursor.read_vector(|c| c.read_length_prefixed_string());
    let _ = cursor.read_f64();

    assert!(cursor.offset() <= rest.len());
});
