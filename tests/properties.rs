//! Property tests for the LZY codec.

use lzy::{
    decode, decode_to_text, encode, encode_from_text, encode_from_utf8_bytes, encode_strict,
    encoded_len, is_continuation_byte, is_lead_byte, is_valid_codepoint, LzyError, Width,
};
use proptest::prelude::*;

/// Any Unicode scalar value, as a code point.
fn scalar() -> impl Strategy<Value = u32> {
    any::<char>().prop_map(u32::from)
}

fn surrogate() -> impl Strategy<Value = u32> {
    0xD800u32..=0xDFFF
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn round_trip(code_points in prop::collection::vec(scalar(), 1..128)) {
        let encoded = encode(&code_points);
        prop_assert_eq!(encoded.len(), encoded_len(&code_points));
        prop_assert_eq!(decode(&encoded).unwrap(), code_points);
    }

    #[test]
    fn run_shape(code_point in scalar()) {
        let encoded = encode(&[code_point]);
        prop_assert_eq!(encoded.len(), Width::of(code_point).byte_len());
        let expected = match code_point {
            0..=0x7F => 1,
            0x80..=0x3FFF => 2,
            _ => 3,
        };
        prop_assert_eq!(encoded.len(), expected);
        prop_assert!(is_lead_byte(encoded[0]));
        prop_assert!(encoded[1..].iter().all(|&byte| is_continuation_byte(byte)));
    }

    #[test]
    fn text_round_trip(text in "\\PC{1,64}") {
        let encoded = encode_from_text(&text);
        prop_assert_eq!(decode_to_text(&encoded).unwrap(), text.clone());
        prop_assert_eq!(encode_from_utf8_bytes(text.as_bytes()).unwrap(), encoded);
    }

    #[test]
    fn surrogates_never_decode(
        prefix in prop::collection::vec(scalar(), 0..8),
        bad in surrogate(),
    ) {
        let mut code_points = prefix;
        code_points.push(bad);
        let result = decode(&encode(&code_points));
        let is_invalid_code_point = matches!(
            result,
            Err(LzyError::InvalidCodePoint { code_point, .. }) if code_point == bad
        );
        prop_assert!(is_invalid_code_point);
        prop_assert!(encode_strict(&code_points).is_err());
    }

    #[test]
    fn arbitrary_bytes_decode_to_scalars_or_fail(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        match decode(&bytes) {
            Ok(code_points) => {
                prop_assert!(!code_points.is_empty());
                prop_assert!(code_points.iter().all(|&code_point| is_valid_codepoint(code_point)));
            }
            Err(LzyError::InvalidEncoding(_)) | Err(LzyError::InvalidCodePoint { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {other}"),
        }
    }

    #[test]
    fn orphan_prefix_is_ignored(
        prefix in prop::collection::vec(0x80u8..=0xFF, 1..4),
        code_points in prop::collection::vec(scalar(), 1..16),
    ) {
        let mut buffer = prefix;
        buffer.extend(encode(&code_points));
        prop_assert_eq!(decode(&buffer).unwrap(), code_points);
    }

    #[test]
    fn all_continuation_bytes_fail(bytes in prop::collection::vec(0x80u8..=0xFF, 1..32)) {
        prop_assert!(matches!(decode(&bytes), Err(LzyError::InvalidEncoding(_))));
    }
}
