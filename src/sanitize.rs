//! Paragraph sanitization.
//!
//! Saga editions interleave the narrative with footnote reference links,
//! centered image blocks and bare images. Cleaning a paragraph walks its
//! subtree, skips those, and returns the remaining text with whitespace
//! collapsed. The walk only reads the tree; the source document is not
//! touched.

use crate::dom::{Document, NodeId};
use crate::util::collapse_whitespace;

/// Wrapper classes used for illustrations in the source editions.
const IMAGE_CONTAINER_CLASSES: [&str; 3] = ["imgcenter", "imgleft300", "imgright"];

/// Normalized plain text of one paragraph node, possibly empty.
///
/// Empty output means the paragraph contributed nothing (e.g. it was purely
/// an image caption); callers must not let it introduce extra spacing.
pub fn clean_paragraph(doc: &Document, paragraph: NodeId) -> String {
    let mut raw = String::new();
    collect_narrative_text(doc, paragraph, &mut raw);
    collapse_whitespace(&raw)
}

fn collect_narrative_text(doc: &Document, id: NodeId, out: &mut String) {
    for child in doc.children(id) {
        if let Some(text) = doc.text(child) {
            out.push_str(text);
            continue;
        }
        if is_excluded(doc, child) {
            continue;
        }
        collect_narrative_text(doc, child, out);
    }
}

/// Footnote reference links, image containers and bare images are dropped
/// wherever they are nested.
fn is_excluded(doc: &Document, id: NodeId) -> bool {
    let Some(tag) = doc.tag(id) else {
        return false;
    };
    match tag.as_ref() {
        "a" => doc.has_class(id, "note"),
        "div" => IMAGE_CONTAINER_CLASSES
            .iter()
            .any(|class| doc.has_class(id, class)),
        "img" => true,
        _ => false,
    }
}
