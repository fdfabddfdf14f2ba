//! Number cross-reference.
//!
//! Finds spelled-out Russian number words in the narrative and associates
//! each hit with its chapter and a context sentence. Reuses the chapter
//! extractor and the sentence segmenter, so boundaries here are exactly the
//! ones `parse` produces.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::parser::parse;

/// Cardinal number words of the source language, lowercase.
static NUMBER_WORDS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    HashMap::from([
        ("один", 1),
        ("одна", 1),
        ("одно", 1),
        ("два", 2),
        ("две", 2),
        ("три", 3),
        ("четыре", 4),
        ("пять", 5),
        ("шесть", 6),
        ("семь", 7),
        ("восемь", 8),
        ("девять", 9),
        ("десять", 10),
        ("одиннадцать", 11),
        ("двенадцать", 12),
        ("тринадцать", 13),
        ("четырнадцать", 14),
        ("пятнадцать", 15),
        ("шестнадцать", 16),
        ("семнадцать", 17),
        ("восемнадцать", 18),
        ("девятнадцать", 19),
        ("двадцать", 20),
        ("тридцать", 30),
        ("сорок", 40),
        ("пятьдесят", 50),
        ("шестьдесят", 60),
        ("семьдесят", 70),
        ("восемьдесят", 80),
        ("девяносто", 90),
        ("сто", 100),
        ("двести", 200),
        ("триста", 300),
        ("четыреста", 400),
        ("пятьсот", 500),
        ("тысяча", 1000),
    ])
});

/// Roman-numeral tokens are edition artifacts (chapter references), not
/// prose; they are scrubbed from context sentences.
static ROMAN_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:^|\s|\.)[IVXLC]+(?:\s|$)").expect("valid regex"));

/// One spelled-out number found in a block of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberHit {
    pub number: u32,
    /// The matched word, lowercased and stripped of punctuation.
    pub word: String,
    /// Word index within the text.
    pub position: usize,
}

/// One number word located in a chapter, with its context sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumberMention {
    /// Numeral of the chapter the sentence belongs to.
    pub chapter: String,
    pub number: u32,
    pub word: String,
    /// The sentence, with Roman-numeral tokens scrubbed.
    pub context: String,
}

/// Find every spelled-out number word in a block of text.
pub fn find_numbers(text: &str) -> Vec<NumberHit> {
    let lowered = text.to_lowercase();
    let mut found = Vec::new();
    for (position, raw) in lowered.split_whitespace().enumerate() {
        let word: String = raw
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | '!' | '?'))
            .collect();
        if let Some(&number) = NUMBER_WORDS.get(word.as_str()) {
            found.push(NumberHit {
                number,
                word,
                position,
            });
        }
    }
    found
}

/// Scrub Roman-numeral tokens from a context sentence.
pub fn clean_context(text: &str) -> String {
    ROMAN_TOKEN.replace_all(text, " ").trim().to_string()
}

/// Cross-reference spelled-out number words with chapter context.
///
/// Parses the document, then scans every chapter's sentences in order. Each
/// hit becomes one mention carrying the chapter numeral and the scrubbed
/// sentence.
pub fn analyze(html: &str) -> Vec<NumberMention> {
    let chapters = parse(html);

    let mut mentions = Vec::new();
    for (numeral, sentences) in chapters.iter() {
        for sentence in sentences {
            for hit in find_numbers(sentence) {
                mentions.push(NumberMention {
                    chapter: numeral.to_string(),
                    number: hit.number,
                    word: hit.word,
                    context: clean_context(sentence),
                });
            }
        }
    }
    mentions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_numbers_basic() {
        let hits = find_numbers("У конунга было три сына и семь дочерей.");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].number, 3);
        assert_eq!(hits[0].word, "три");
        assert_eq!(hits[0].position, 3);
        assert_eq!(hits[1].number, 7);
        assert_eq!(hits[1].word, "семь");
    }

    #[test]
    fn test_find_numbers_strips_punctuation_and_case() {
        let hits = find_numbers("Двенадцать! Потом ещё два.");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].number, 12);
        assert_eq!(hits[0].word, "двенадцать");
        assert_eq!(hits[1].number, 2);
    }

    #[test]
    fn test_find_numbers_none() {
        assert!(find_numbers("Ни единого числа здесь нет.").is_empty());
    }

    #[test]
    fn test_clean_context_scrubs_roman_tokens() {
        assert_eq!(clean_context("Глава X гласит"), "Глава гласит");
        assert_eq!(clean_context("XIV пришли позже"), "пришли позже");
    }

    #[test]
    fn test_clean_context_keeps_cyrillic() {
        assert_eq!(clean_context("Снорри сказал так"), "Снорри сказал так");
    }

    #[test]
    fn test_analyze_links_chapters() {
        let html = r#"
            <h3 id="I">I</h3><p>У него было два корабля.</p>
            <h3 id="II">II</h3><p>Прошло пять зим. Ничего не случилось.</p>
        "#;

        let mentions = analyze(html);

        assert_eq!(mentions.len(), 2);
        assert_eq!(mentions[0].chapter, "I");
        assert_eq!(mentions[0].number, 2);
        assert_eq!(mentions[0].context, "У него было два корабля.");
        assert_eq!(mentions[1].chapter, "II");
        assert_eq!(mentions[1].number, 5);
    }

    #[test]
    fn test_analyze_ignores_notes() {
        let html = r#"
            <h3 id="I">I</h3><p>Было три брата.</p>
            <h2>Примечания</h2>
            <h3 id="II">II</h3><p>Сорок сносок.</p>
        "#;

        let mentions = analyze(html);

        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].chapter, "I");
        assert_eq!(mentions[0].number, 3);
    }
}
