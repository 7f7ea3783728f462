//! App-level view models consumed by a presentation layer.

/// A word cut around its recognition point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordView<'a> {
    pub before: &'a str,
    pub pivot: &'a str,
    pub after: &'a str,
}

impl<'a> WordView<'a> {
    /// Splits `word` at character `orp_index`. An index past the end pins the
    /// pivot to the last character.
    pub fn split(word: &'a str, orp_index: usize) -> Self {
        let char_count = word.chars().count();
        if char_count == 0 {
            return Self {
                before: "",
                pivot: "",
                after: "",
            };
        }

        let pivot_char = orp_index.min(char_count - 1);
        let mut boundaries = word
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(word.len()))
            .skip(pivot_char);
        let start = boundaries.next().unwrap_or(0);
        let end = boundaries.next().unwrap_or(word.len());

        Self {
            before: &word[..start],
            pivot: &word[start..end],
            after: &word[end..],
        }
    }
}

/// Positional progress through the loaded text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProgressView<'a> {
    /// 1-based position of the displayed word.
    pub word_index: usize,
    pub word_total: usize,
    pub percent: &'a str,
    pub elapsed: &'a str,
    pub remaining: &'a str,
}

/// Screen handed to the renderer on each redraw.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen<'a> {
    /// Nothing loaded or the text had no words.
    Ready {
        title: &'a str,
        line1: &'a str,
        line2: &'a str,
        wpm: u16,
    },
    Reading {
        title: &'a str,
        word: WordView<'a>,
        sentence_index: u32,
        wpm: u16,
        playing: bool,
        completed: bool,
        progress: ProgressView<'a>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_highlights_orp_character() {
        let view = WordView::split("amazing", 2);
        assert_eq!((view.before, view.pivot, view.after), ("am", "a", "zing"));

        let view = WordView::split("a", 0);
        assert_eq!((view.before, view.pivot, view.after), ("", "a", ""));
    }

    #[test]
    fn split_respects_multibyte_characters() {
        let view = WordView::split("años", 1);
        assert_eq!((view.before, view.pivot, view.after), ("a", "ñ", "os"));
    }

    #[test]
    fn split_clamps_out_of_range_index() {
        let view = WordView::split("cat", 9);
        assert_eq!((view.before, view.pivot, view.after), ("ca", "t", ""));

        let view = WordView::split("", 0);
        assert_eq!(view.pivot, "");
    }
}
