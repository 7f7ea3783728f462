use alloc::{string::String, vec::Vec};

use super::{
    WordUnit,
    text_utils::{count_words, next_word_at, paragraphs},
    timing::{SlowingConfig, calculate_orp, delay_multiplier, ends_sentence},
};

/// Turns raw text into the ordered sequence of timed word units.
///
/// Paragraphs are separated by blank lines. The first token of every paragraph
/// after the first one, blank leading paragraphs included, carries the
/// paragraph-break factor. A sentence ends after any token
/// whose last character is `.`, `!` or `?`; the paragraph end closes a
/// sentence left open. Sentence indices run across the whole document and
/// empty paragraphs or sentences never consume an index.
pub fn tokenize(text: &str, config: &SlowingConfig) -> Vec<WordUnit> {
    let config = config.sanitized();
    let mut words = Vec::with_capacity(count_words(text));
    let mut sentence_index = 0u32;

    for (ordinal, paragraph) in paragraphs(text).enumerate() {
        let mut first_in_paragraph = ordinal > 0;
        let mut sentence_open = false;
        let mut cursor = 0usize;

        while let Some((token, next_cursor)) = next_word_at(paragraph, cursor) {
            cursor = next_cursor;

            words.push(WordUnit {
                text: String::from(token),
                orp_index: calculate_orp(token),
                delay_multiplier: delay_multiplier(token, first_in_paragraph, &config),
                sentence_index,
            });
            first_in_paragraph = false;
            sentence_open = true;

            // Inside a paragraph every token is followed by whitespace.
            if ends_sentence(token) {
                sentence_index = sentence_index.saturating_add(1);
                sentence_open = false;
            }
        }

        if sentence_open {
            sentence_index = sentence_index.saturating_add(1);
        }
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn indices(words: &[WordUnit]) -> Vec<u32> {
        words.iter().map(WordUnit::sentence_index).collect()
    }

    #[test]
    fn empty_and_blank_text_yield_nothing() {
        let config = SlowingConfig::default();
        assert!(tokenize("", &config).is_empty());
        assert!(tokenize("   ", &config).is_empty());
        assert!(tokenize("\n\n\n \t\n", &config).is_empty());
    }

    #[test]
    fn sentence_end_slows_last_word() {
        let config = SlowingConfig::default();
        let words = tokenize("Hello world.", &config);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "Hello");
        assert_eq!(words[0].delay_multiplier(), 1.0);
        assert_eq!(words[1].text(), "world.");
        assert_eq!(words[1].delay_multiplier(), config.sentence_end_multiplier);
        assert_eq!(indices(&words), [0, 0]);
    }

    #[test]
    fn paragraph_break_advances_sentence_and_slows() {
        let config = SlowingConfig::default();
        let words = tokenize("A.\n\nB.", &config);

        assert_eq!(words.len(), 2);
        assert_eq!(indices(&words), [0, 1]);
        assert_eq!(words[0].delay_multiplier(), config.sentence_end_multiplier);
        assert_eq!(
            words[1].delay_multiplier(),
            config.paragraph_break_multiplier * config.sentence_end_multiplier
        );
    }

    #[test]
    fn empty_paragraphs_leave_no_gap() {
        let config = SlowingConfig::default();
        let words = tokenize("One two\n\n\n\n   \n\nThree. Four", &config);

        assert_eq!(indices(&words), [0, 0, 1, 2]);
        assert_eq!(words[2].delay_multiplier(), 9.0);
        assert_eq!(words[3].delay_multiplier(), 1.0);
    }

    #[test]
    fn leading_blank_paragraph_still_marks_a_break() {
        let config = SlowingConfig::default();
        let words = tokenize("\n\nStart here", &config);

        assert_eq!(words[0].delay_multiplier(), config.paragraph_break_multiplier);
        assert_eq!(words[1].delay_multiplier(), 1.0);
        assert_eq!(indices(&words), [0, 0]);
    }

    #[test]
    fn text_without_blank_lines_has_no_break() {
        let config = SlowingConfig::default();
        let words = tokenize("Start here", &config);

        assert_eq!(words[0].delay_multiplier(), 1.0);
    }

    #[test]
    fn punctuation_mid_token_is_not_a_boundary() {
        let config = SlowingConfig::default();
        let words = tokenize("v1.2 ships today! Really? Yes.", &config);

        assert_eq!(indices(&words), [0, 0, 0, 1, 2]);
    }

    #[test]
    fn single_newlines_stay_inside_a_paragraph() {
        let config = SlowingConfig::default();
        let words = tokenize("line one\nline two", &config);

        assert_eq!(words.len(), 4);
        assert!(words.iter().all(|w| w.delay_multiplier() == 1.0));
        assert_eq!(indices(&words), [0, 0, 0, 0]);
    }

    #[test]
    fn units_carry_orp_and_source_order() {
        let config = SlowingConfig::default();
        let words = tokenize("an amazing cat", &config);

        let texts: Vec<&str> = words.iter().map(WordUnit::text).collect();
        assert_eq!(texts, ["an", "amazing", "cat"]);
        assert_eq!(words[1].orp_index(), 2);
        assert_eq!(words[2].orp_index(), 0);
    }

    #[test]
    fn custom_config_is_applied() {
        let config = SlowingConfig {
            sentence_end_multiplier: 4.0,
            long_word_threshold: 3,
            ..SlowingConfig::default()
        };
        let words = tokenize("tiny words.", &config);

        assert_eq!(words[0].delay_multiplier(), 2.0);
        assert_eq!(words[1].delay_multiplier(), 8.0);
    }
}
