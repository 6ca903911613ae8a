//! Turning raw input bytes into text, using chardetng and `encoding_rs`.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use simdutf8::basic::from_utf8;
use std::borrow::Cow;

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (`EF BB BF`).
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// How the input bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingInfo {
    /// Name of the source encoding.
    pub encoding: &'static str,
    /// Whether a byte order mark was present.
    pub has_bom: bool,
    /// Whether the bytes had to be transcoded to UTF-8.
    pub transcoded: bool,
}

/// Decode raw bytes into text.
///
/// A UTF-8 BOM is skipped and valid UTF-8 is borrowed as-is. UTF-16 input
/// with a BOM, and legacy single or multi byte encodings guessed by
/// chardetng (Windows-125x, ISO-8859-x, GBK, ...), are transcoded.
pub fn decode_text(data: &[u8]) -> (Cow<'_, str>, EncodingInfo) {
    if data.starts_with(&[0xFF, 0xFE]) {
        return transcode(&data[2..], UTF_16LE, true);
    }
    if data.starts_with(&[0xFE, 0xFF]) {
        return transcode(&data[2..], UTF_16BE, true);
    }

    let has_bom = has_utf8_bom(data);
    let body = skip_bom(data);
    if let Ok(text) = from_utf8(body) {
        let info = EncodingInfo {
            encoding: UTF_8.name(),
            has_bom,
            transcoded: false,
        };
        return (Cow::Borrowed(text), info);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    let encoding = detector.guess(None, true);
    transcode(body, encoding, has_bom)
}

fn transcode<'a>(
    data: &'a [u8],
    encoding: &'static Encoding,
    has_bom: bool,
) -> (Cow<'a, str>, EncodingInfo) {
    // BOM sniffing is done above; decode without it so the label is kept.
    let (text, had_errors) = encoding.decode_without_bom_handling(data);
    if had_errors {
        tracing::warn!(encoding = encoding.name(), "input contained undecodable bytes");
    }
    let transcoded = matches!(text, Cow::Owned(_));
    let info = EncodingInfo {
        encoding: encoding.name(),
        has_bom,
        transcoded,
    };
    (text, info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_utf8() {
        assert!(is_utf8(b"Hello, World!"));
        assert!(is_utf8("こんにちは".as_bytes()));
        assert!(is_utf8(b""));
        assert!(!is_utf8(&[0x80, 0x81, 0x82]));
    }

    #[test]
    fn test_utf8_bom() {
        let with_bom = [0xEF, 0xBB, 0xBF, b'a', b'b', b'c'];
        assert!(has_utf8_bom(&with_bom));
        assert_eq!(skip_bom(&with_bom), b"abc");
        assert_eq!(skip_bom(b"abc"), b"abc");
    }

    #[test]
    fn test_decode_utf8_borrowed() {
        let (text, info) = decode_text("a,b\nü,ß".as_bytes());
        assert!(matches!(text, Cow::Borrowed(_)));
        assert_eq!(text, "a,b\nü,ß");
        assert_eq!(info.encoding, "UTF-8");
        assert!(!info.transcoded);
    }

    #[test]
    fn test_decode_skips_utf8_bom() {
        let (text, info) = decode_text(&[0xEF, 0xBB, 0xBF, b'x', b';', b'y']);
        assert_eq!(text, "x;y");
        assert!(info.has_bom);
    }

    #[test]
    fn test_decode_utf16_le() {
        let data: &[u8] = &[0xFF, 0xFE, b'a', 0x00, b',', 0x00, b'b', 0x00];
        let (text, info) = decode_text(data);
        assert_eq!(text, "a,b");
        assert_eq!(info.encoding, "UTF-16LE");
        assert!(info.has_bom);
        assert!(info.transcoded);
    }

    #[test]
    fn test_decode_legacy_encoding() {
        // "abc" followed by a lone Latin-1 style byte, invalid as UTF-8.
        let (text, info) = decode_text(&[b'a', b'b', b'c', 0xE9]);
        assert!(info.transcoded);
        assert_ne!(info.encoding, "UTF-8");
        assert!(text.starts_with("abc"));
    }
}
