// Integration tests for byte inspection

use showbytes::inspect::{
    inspect, inspect_address, inspect_double, inspect_float, inspect_int, inspect_text,
    inspect_value, render, Endianness, InspectError,
};
use showbytes::report::word_prefixes;

/// Expected rendering of 0x12345678 on this host
fn word_layout() -> &'static str {
    match Endianness::native() {
        Endianness::Little => "78 56 34 12",
        Endianness::Big => "12 34 56 78",
    }
}

#[test]
fn test_word_storage_order() {
    let word: i32 = 0x1234_5678;
    let view = inspect_value(&word, 4).expect("4 bytes fit in an i32");
    assert_eq!(render(view), word_layout());
    assert_eq!(inspect_int(word).unwrap(), word_layout());
}

#[test]
fn test_rendered_length_for_every_prefix() {
    let word: i32 = 0x1234_5678;
    for n in 0..=4 {
        let view = inspect_value(&word, n).unwrap();
        assert_eq!(view.len(), n);

        let rendered = render(view);
        let expected_len = if n == 0 { 0 } else { 3 * n - 1 };
        assert_eq!(rendered.len(), expected_len, "prefix {}", n);
    }
    assert_eq!(render(inspect_value(&word, 4).unwrap()).len(), 11);
}

#[test]
fn test_inspect_is_idempotent() {
    let value: f32 = 3.5;
    let first = inspect_value(&value, 4).unwrap();
    let second = inspect_value(&value, 4).unwrap();
    assert_eq!(first, second);
    assert_eq!(render(first), render(second));
    assert_eq!(value, 3.5);
}

#[test]
fn test_empty_inspection() {
    let value: i32 = -1;
    let view = inspect_value(&value, 0).unwrap();
    assert!(view.is_empty());
    assert_eq!(render(view), "");
}

#[test]
fn test_out_of_bounds() {
    let value: i32 = 0x1234_5678;
    assert_eq!(
        inspect_value(&value, 5),
        Err(InspectError::OutOfBounds {
            requested: 5,
            available: 4
        })
    );

    let region = [1u8, 2];
    assert!(inspect(&region, 3).is_err());
}

#[test]
fn test_text_is_order_independent() {
    assert_eq!(inspect_text("AB").unwrap(), "41 42");
    assert_eq!(inspect_text("ABCDEF").unwrap(), "41 42 43 44 45 46");
    assert_eq!(inspect_text("").unwrap(), "");
}

#[test]
fn test_float_layout() {
    // 12345.0f32 is 0x4640e400
    let expected = match Endianness::native() {
        Endianness::Little => "00 e4 40 46",
        Endianness::Big => "46 40 e4 00",
    };
    assert_eq!(inspect_float(12345.0).unwrap(), expected);

    // 1.0f64 is 0x3ff0000000000000
    let expected = match Endianness::native() {
        Endianness::Little => "00 00 00 00 00 00 f0 3f",
        Endianness::Big => "3f f0 00 00 00 00 00 00",
    };
    assert_eq!(inspect_double(1.0).unwrap(), expected);
}

#[test]
fn test_address_is_pointer_width() {
    let value = 0u8;
    let rendered = inspect_address(&value).unwrap();
    let width = std::mem::size_of::<usize>();
    assert_eq!(rendered.len(), 3 * width - 1);

    let address = &value as *const u8 as usize;
    assert_eq!(rendered, render(address.to_ne_bytes()));
}

#[test]
fn test_word_prefixes_follow_host_layout() {
    let prefixes = word_prefixes(0x1234_5678, 3).unwrap();
    let hex: Vec<&str> = prefixes.iter().map(|p| p.hex.as_str()).collect();
    let full = word_layout();
    assert_eq!(hex, vec![&full[..2], &full[..5], &full[..8]]);
}
