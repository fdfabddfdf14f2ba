//! # kringla
//!
//! Extracts chapter and sentence structure from HTML editions of saga
//! texts. The editions mark chapters with `<h3>` headings whose `id` is a
//! Roman numeral (I..L) and close with a "Примечания" end-notes section;
//! this crate turns such a page into an ordered mapping from chapter
//! numeral to a clean list of sentences.
//!
//! ## Features
//!
//! - Tolerant HTML parsing (html5ever); malformed markup never fails
//! - Footnote references, image blocks, scripts and styles stripped
//! - Sentence segmentation with a stable, deliberately simple boundary rule
//! - Windows-1251 and `<meta charset>` aware file loading
//! - Cross-referencing of spelled-out number words with chapter context
//!
//! ## Quick Start
//!
//! ```
//! let chapters = kringla::parse(
//!     r#"<h3 id="I">I</h3><p>Конунг умер. Сын его правил</p>"#,
//! );
//!
//! let sentences = chapters.get("I").unwrap();
//! assert_eq!(sentences, ["Конунг умер.", "Сын его правил."]);
//! ```
//!
//! An empty or chapter-less document is not an error; `parse` simply
//! returns an empty mapping and the caller decides whether that is worth
//! reporting.

pub mod analysis;
pub mod chapters;
pub mod dom;
pub mod error;
pub mod parser;
pub mod roman;
pub mod sanitize;
pub mod sentence;
mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use analysis::{NumberMention, analyze};
pub use chapters::ChapterMap;
pub use error::{Error, Result};
pub use parser::{parse, parse_file};
pub use roman::is_valid_chapter_numeral;
pub use sentence::split_sentences;
pub use util::decode_html;
