//! Byte encodings of the UTF-8 representation of a string, with decoders.

use crate::error::{DecodeStage, Result, TransformError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Separator between per-byte groups
pub const GROUP_SEPARATOR: &str = " ";

/// Each UTF-8 byte as an 8 digit binary group, space separated
pub fn to_binary_string(text: &str) -> String {
    text.bytes()
        .map(|b| format!("{:08b}", b))
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}

/// Each UTF-8 byte as two uppercase hex digits, space separated
pub fn to_hex_string(text: &str) -> String {
    text.bytes()
        .map(|b| hex::encode_upper([b]))
        .collect::<Vec<_>>()
        .join(GROUP_SEPARATOR)
}

/// Standard base64 (with padding) of the UTF-8 bytes, on a single line
pub fn to_base64_string(text: &str) -> String {
    STANDARD.encode(text.as_bytes()).trim_end().to_string()
}

/// Decode whitespace separated binary groups of one to eight digits
pub fn decode_binary(encoded: &str) -> Result<Vec<u8>> {
    encoded
        .split_whitespace()
        .map(|group| {
            if group.len() > 8 || !group.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(invalid_group(DecodeStage::Binary, group));
            }
            u8::from_str_radix(group, 2).map_err(|_| invalid_group(DecodeStage::Binary, group))
        })
        .collect()
}

/// Decode whitespace separated hex groups; each group holds whole bytes
pub fn decode_hex(encoded: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    for group in encoded.split_whitespace() {
        bytes.extend(hex::decode(group)?);
    }
    Ok(bytes)
}

/// Decode standard base64. Embedded line breaks are tolerated.
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

/// Interpret decoded bytes as UTF-8 text
pub fn bytes_to_string(bytes: Vec<u8>) -> Result<String> {
    Ok(String::from_utf8(bytes)?)
}

fn invalid_group(stage: DecodeStage, group: &str) -> TransformError {
    TransformError::InvalidGroup {
        stage,
        group: group.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_ascii() {
        assert_eq!(to_binary_string("Hi"), "01001000 01101001");
        assert_eq!(to_binary_string(""), "");
    }

    #[test]
    fn test_binary_multibyte() {
        // é is two bytes in UTF-8
        assert_eq!(to_binary_string("é"), "11000011 10101001");
    }

    #[test]
    fn test_hex_uppercase_and_padded() {
        assert_eq!(to_hex_string("Hi\n"), "48 69 0A");
        assert_eq!(to_hex_string("🐱"), "F0 9F 90 B1");
    }

    #[test]
    fn test_base64_padding() {
        assert_eq!(to_base64_string("f"), "Zg==");
        assert_eq!(to_base64_string("fo"), "Zm8=");
        assert_eq!(to_base64_string("foo"), "Zm9v");
        assert_eq!(to_base64_string(""), "");
    }

    #[test]
    fn test_base64_long_input_single_line() {
        let text = "x".repeat(120);
        assert!(!to_base64_string(&text).contains('\n'));
    }

    #[test]
    fn test_decoders_invert_encoders() {
        let text = "Ünïcode ✓ text 🐱";
        assert_eq!(decode_binary(&to_binary_string(text)).unwrap(), text.as_bytes());
        assert_eq!(decode_hex(&to_hex_string(text)).unwrap(), text.as_bytes());
        assert_eq!(decode_base64(&to_base64_string(text)).unwrap(), text.as_bytes());
    }

    #[test]
    fn test_decode_binary_rejects_bad_groups() {
        assert!(matches!(
            decode_binary("0100 2"),
            Err(TransformError::InvalidGroup { stage: DecodeStage::Binary, .. })
        ));
        assert!(decode_binary("101010101").is_err());
        assert_eq!(decode_binary("1 10").unwrap(), vec![1, 2]);
        assert!(matches!(
            decode_binary("+1"),
            Err(TransformError::InvalidGroup { stage: DecodeStage::Binary, .. })
        ));
        assert!(decode_binary("0100000-").is_err());
    }

    #[test]
    fn test_decode_hex_errors() {
        assert!(matches!(decode_hex("4"), Err(TransformError::Hex(_))));
        assert!(matches!(decode_hex("ZZ"), Err(TransformError::Hex(_))));
        assert_eq!(decode_hex("4869 0a").unwrap(), b"Hi\n");
    }

    #[test]
    fn test_decode_base64_with_line_breaks() {
        assert_eq!(decode_base64("Zm9v\nYmFy\n").unwrap(), b"foobar");
        assert!(matches!(decode_base64("Zm9"), Err(TransformError::Base64(_))));
    }

    #[test]
    fn test_bytes_to_string() {
        assert_eq!(bytes_to_string(b"ok".to_vec()).unwrap(), "ok");
        assert!(matches!(
            bytes_to_string(vec![0xff, 0xfe]),
            Err(TransformError::Utf8(_))
        ));
    }
}
