//! Chapter extraction.
//!
//! Walks the document, locates the notes boundary, collects the content run
//! of every chapter heading and segments it into sentences.

use crate::dom::{Document, NodeId};
use crate::roman;
use crate::sanitize::clean_paragraph;
use crate::sentence::split_sentences;

/// Heading text that opens the end-notes section. Everything from there on
/// is excluded.
const NOTES_MARKER: &str = "Примечания";

/// Ordered mapping from chapter numeral to its sentence sequence.
///
/// Iteration order is the document order of each numeral's first valid
/// heading; a later heading with the same numeral overwrites the sentences
/// but keeps the original position, matching the mapping semantics of the
/// source editions' tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChapterMap {
    entries: Vec<(String, Vec<String>)>,
}

impl ChapterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chapter. Last write wins on a duplicate numeral.
    pub fn insert(&mut self, numeral: String, sentences: Vec<String>) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == numeral) {
            entry.1 = sentences;
        } else {
            self.entries.push((numeral, sentences));
        }
    }

    /// Sentences of one chapter.
    pub fn get(&self, numeral: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == numeral)
            .map(|(_, v)| v.as_slice())
    }

    /// Chapter numerals in insertion order.
    pub fn numerals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// All chapters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChapterMap {
    /// Serializes as a JSON object with chapter key order preserved.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (numeral, sentences) in &self.entries {
            map.serialize_entry(numeral, sentences)?;
        }
        map.end()
    }
}

/// Extract every chapter from a parsed document.
///
/// Finding nothing is not an error: the result is simply an empty or
/// partial mapping.
pub fn extract_chapters(doc: &mut Document) -> ChapterMap {
    doc.remove_by_tag("script");
    doc.remove_by_tag("style");
    remove_notes_section(doc);

    let mut chapters = ChapterMap::new();
    for heading in chapter_headings(doc) {
        let numeral = doc
            .element_id(heading)
            .expect("chapter heading carries an id")
            .to_string();
        let body = collect_chapter_text(doc, heading);
        chapters.insert(numeral, split_sentences(&body));
    }
    chapters
}

/// Drop the first level-2 "Примечания" heading and every element sibling
/// after it. Absent the marker, the whole document stays eligible.
fn remove_notes_section(doc: &mut Document) {
    for h2 in doc.elements_by_tag("h2") {
        if doc.text_content(h2).trim() != NOTES_MARKER {
            continue;
        }

        let mut trailing = Vec::new();
        let mut next = doc.next_element_sibling(h2);
        while let Some(id) = next {
            trailing.push(id);
            next = doc.next_element_sibling(id);
        }
        for id in trailing {
            doc.detach(id);
        }
        doc.detach(h2);
        break;
    }
}

/// Level-3 headings whose id is a valid chapter numeral, in document order.
fn chapter_headings(doc: &Document) -> Vec<NodeId> {
    doc.elements_by_tag("h3")
        .into_iter()
        .filter(|&h| {
            doc.element_id(h)
                .is_some_and(roman::is_valid_chapter_numeral)
        })
        .collect()
}

/// Accumulate the sanitized text of the paragraphs between a heading and
/// the next level-3 heading (valid or not). Non-paragraph siblings are
/// skipped without terminating the run.
fn collect_chapter_text(doc: &Document, heading: NodeId) -> String {
    let mut content = String::new();
    let mut current = doc.next_element_sibling(heading);

    while let Some(id) = current {
        let tag = doc.tag(id).expect("sibling walk yields elements");
        if tag.as_ref() == "h3" {
            break;
        }
        if tag.as_ref() == "p" {
            let cleaned = clean_paragraph(doc, id);
            if !cleaned.is_empty() {
                content.push_str(&cleaned);
                content.push(' ');
            }
        }
        current = doc.next_element_sibling(id);
    }

    content.trim().to_string()
}
