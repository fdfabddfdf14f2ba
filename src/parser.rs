//! Parse entry points.

use std::fs;
use std::path::Path;

use crate::chapters::{ChapterMap, extract_chapters};
use crate::dom::Document;
use crate::error::Result;
use crate::util::decode_html;

/// Parse a saga HTML document into its chapter/sentence structure.
///
/// Tolerates malformed markup: whatever tree the HTML parser recovers is
/// processed as-is, and a document without valid chapter headings yields an
/// empty mapping rather than an error. Each call builds its own document
/// tree, so concurrent calls need no coordination.
pub fn parse(html: &str) -> ChapterMap {
    let mut doc = Document::parse(html);
    extract_chapters(&mut doc)
}

/// Read a saga HTML file, decode it and parse it.
///
/// Decoding tries UTF-8, then the declared `<meta charset=...>`, then
/// Windows-1251. The only failure mode is I/O.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ChapterMap> {
    let bytes = fs::read(path)?;
    let html = decode_html(&bytes);
    Ok(parse(&html))
}
