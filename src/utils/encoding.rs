//! Source file reading with encoding detection.
//!
//! Handles:
//! - BOM detection (UTF-8, UTF-16 LE/BE)
//! - UTF-8 fast path with strict validation
//! - Fallback detection using chardetng for legacy encodings
//! - Replacement characters as a last resort

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::io;
use std::path::Path;

const DEFAULT_SAMPLE_SIZE: usize = 8192;

/// Detect the encoding of a byte buffer.
///
/// Strategy:
/// 1. BOM markers (most reliable)
/// 2. Strict UTF-8
/// 3. chardetng guess over the leading sample
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let sample = &bytes[..bytes.len().min(DEFAULT_SAMPLE_SIZE)];
    let mut detector = EncodingDetector::new();
    detector.feed(sample, true);
    detector.guess(None, true)
}

/// Decode `bytes` to text, stripping any BOM.
///
/// Returns the text and the name of the encoding that was used.
pub fn decode_bytes(bytes: &[u8]) -> (String, &'static str) {
    let encoding = detect_encoding(bytes);
    // decode() sniffs and removes the BOM itself.
    let (decoded, used, _had_errors) = encoding.decode(bytes);
    (decoded.into_owned(), used.name())
}

/// Read a source file as text regardless of its encoding.
///
/// Files that are not valid UTF-8 are decoded with the detected encoding;
/// undecodable sequences become U+FFFD.
pub fn read_source(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    let (content, encoding) = decode_bytes(&bytes);
    if encoding != UTF_8.name() && encoding != UTF_16LE.name() && encoding != UTF_16BE.name() {
        tracing::debug!(path = %path.display(), encoding, "decoded non-unicode source");
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_detect_utf8() {
        assert_eq!(detect_encoding("Hello, world!".as_bytes()), UTF_8);
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("Hello".as_bytes());
        let (content, encoding) = decode_bytes(&bytes);
        assert_eq!(content, "Hello");
        assert_eq!(encoding, "UTF-8");
    }

    #[test]
    fn test_utf16le_bom() {
        let bytes = [0xff, 0xfe, b'h', 0x00, b'i', 0x00];
        let (content, encoding) = decode_bytes(&bytes);
        assert_eq!(content, "hi");
        assert_eq!(encoding, "UTF-16LE");
    }

    #[test]
    fn test_latin1_falls_back_to_detection() {
        let text = "Le café est très bon, même à Paris où l'été est chaud.";
        let (bytes, _, _) = encoding_rs::WINDOWS_1252.encode(text);
        assert!(std::str::from_utf8(&bytes).is_err());
        let (content, _) = decode_bytes(&bytes);
        assert!(content.contains("café"));
    }

    #[test]
    fn test_read_source_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("Test content 🚀".as_bytes()).unwrap();
        file.flush().unwrap();

        let content = read_source(file.path()).unwrap();
        assert_eq!(content, "Test content 🚀");
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_source(&dir.path().join("missing.cs")).is_err());
    }
}
