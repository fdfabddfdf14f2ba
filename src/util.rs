//! Text decoding and normalization helpers.

use std::borrow::Cow;

/// Decode raw HTML bytes to a string.
///
/// Saga pages predate UTF-8 more often than not, so this:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the `<meta charset=...>` declaration
/// 3. Falls back to Windows-1251 (the common legacy encoding of the corpus)
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
pub fn decode_html(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(label) = extract_html_encoding(bytes)
        && let Some(encoding) = encoding_rs::Encoding::for_label(label.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1251.decode(bytes);
    result
}

/// Extract the encoding label from an HTML `charset` declaration.
///
/// Handles both `<meta charset="...">` and the legacy
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
/// form. Only the first 1024 bytes are checked.
pub fn extract_html_encoding(bytes: &[u8]) -> Option<&str> {
    let head = &bytes[..bytes.len().min(1024)];

    let pos = head
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?
        + 8;
    let rest = &head[pos..];

    let rest = match rest.first() {
        Some(b'"') | Some(b'\'') => &rest[1..],
        _ => rest,
    };
    let end = rest
        .iter()
        .position(|&b| matches!(b, b'"' | b'\'' | b' ' | b'>' | b';' | b'/'))
        .unwrap_or(rest.len());

    std::str::from_utf8(&rest[..end])
        .ok()
        .filter(|s| !s.is_empty())
}

/// Collapse every run of whitespace (newlines and tabs included) to a single
/// space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8_borrows() {
        let bytes = "Сага об Инглингах".as_bytes();
        let decoded = decode_html(bytes);
        assert_eq!(decoded, "Сага об Инглингах");
        assert!(matches!(decoded, Cow::Borrowed(_)));
    }

    #[test]
    fn test_decode_windows_1251_fallback() {
        // "Сага" in Windows-1251
        let bytes = [0xD1, 0xE0, 0xE3, 0xE0];
        assert_eq!(decode_html(&bytes), "Сага");
    }

    #[test]
    fn test_decode_with_meta_charset() {
        let (encoded, _, _) =
            encoding_rs::WINDOWS_1251.encode(r#"<meta charset="windows-1251"><p>Конунг</p>"#);
        let decoded = decode_html(&encoded);
        assert!(decoded.contains("Конунг"));
    }

    #[test]
    fn test_extract_charset_variants() {
        assert_eq!(
            extract_html_encoding(br#"<meta charset="utf-8">"#),
            Some("utf-8")
        );
        assert_eq!(
            extract_html_encoding(b"<meta charset=koi8-r>"),
            Some("koi8-r")
        );
        assert_eq!(
            extract_html_encoding(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1251">"#
            ),
            Some("windows-1251")
        );
        assert_eq!(extract_html_encoding(b"<html><head></head>"), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  "), "a b");
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace(" \n "), "");
    }
}
