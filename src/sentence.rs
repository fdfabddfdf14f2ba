//! Sentence segmentation over plain text.
//!
//! A boundary is a terminal `.`, `!` or `?` whose successor is whitespace or
//! end of input. The emitted sentence is the trimmed preceding text plus
//! that one terminal; a trailing fragment with no terminal gets `.` appended.
//! Deliberately no abbreviation handling: initials like "Х. К. Андерсен"
//! split, and downstream storage depends on exactly this granularity.

/// Split text into an ordered sequence of sentences.
///
/// Every returned sentence is trimmed, non-empty, and ends in `.`, `!` or
/// `?`. Empty input yields an empty sequence. Pure function; shared by the
/// chapter extractor and the number cross-reference.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some(&(_, next)) => next.is_whitespace(),
        };
        if !at_boundary {
            continue;
        }

        // A run of terminals boundary-matches only on its last character, so
        // the piece keeps the preceding ones: "Так!!!" stays "Так!!!".
        let piece = text[start..i].trim();
        if !piece.is_empty() {
            sentences.push(format!("{piece}{c}"));
        }
        start = i + c.len_utf8();
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(format!("{tail}."));
    }

    sentences
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_basic_split() {
        assert_eq!(
            split_sentences("Первое предложение. Второе предложение!"),
            ["Первое предложение.", "Второе предложение!"]
        );
    }

    #[test]
    fn test_trailing_fragment_gets_period() {
        assert_eq!(split_sentences("Первое. Второе"), ["Первое.", "Второе."]);
        assert_eq!(split_sentences("Второе"), ["Второе."]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(split_sentences(""), Vec::<String>::new());
        assert_eq!(split_sentences("   "), Vec::<String>::new());
        assert_eq!(split_sentences(". . ."), Vec::<String>::new());
    }

    #[test]
    fn test_terminal_runs_kept() {
        assert_eq!(split_sentences("Как же так!!! Вот."), ["Как же так!!!", "Вот."]);
        assert_eq!(split_sentences("Неужели?!"), ["Неужели?!"]);
    }

    #[test]
    fn test_punctuation_inside_word_is_not_a_boundary() {
        assert_eq!(split_sentences("Версия 1.5 вышла."), ["Версия 1.5 вышла."]);
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(
            split_sentences("Кто здесь? Никого! Тишина."),
            ["Кто здесь?", "Никого!", "Тишина."]
        );
    }

    #[test]
    fn test_initials_split_by_design() {
        // No abbreviation special-casing
        assert_eq!(
            split_sentences("Его звали Х. К. Андерсен."),
            ["Его звали Х.", "К.", "Андерсен."]
        );
    }

    proptest! {
        #[test]
        fn prop_sentences_are_trimmed_nonempty_terminated(s in "\\PC{0,200}") {
            for sentence in split_sentences(&s) {
                prop_assert!(!sentence.is_empty());
                prop_assert_eq!(sentence.trim(), sentence.as_str());
                let last = sentence.chars().last().unwrap();
                prop_assert!(matches!(last, '.' | '!' | '?'));
            }
        }

        #[test]
        fn prop_deterministic(s in "\\PC{0,200}") {
            prop_assert_eq!(split_sentences(&s), split_sentences(&s));
        }
    }
}
