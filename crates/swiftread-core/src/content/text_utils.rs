/// Returns the next whitespace-delimited token starting the scan at byte `cursor`,
/// together with the byte offset just past it.
pub(super) fn next_word_at(text: &str, cursor: usize) -> Option<(&str, usize)> {
    let rest = text.get(cursor..)?;

    let (start_rel, _) = rest.char_indices().find(|(_, ch)| !ch.is_whitespace())?;
    let start = cursor + start_rel;

    let end = text[start..]
        .char_indices()
        .find(|(_, ch)| ch.is_whitespace())
        .map_or(text.len(), |(idx, _)| start + idx);

    Some((&text[start..end], end))
}

pub(super) fn count_words(text: &str) -> usize {
    let mut count = 0usize;
    let mut cursor = 0usize;

    while let Some((_, next_cursor)) = next_word_at(text, cursor) {
        count += 1;
        cursor = next_cursor;
    }

    count
}

/// Splits text into paragraphs on runs containing two or more `\n`.
///
/// `\r` inside a newline run is part of the separator so CRLF text splits
/// the same way as LF text.
pub(super) fn paragraphs(text: &str) -> Paragraphs<'_> {
    Paragraphs {
        text,
        cursor: 0,
        done: false,
    }
}

pub(super) struct Paragraphs<'a> {
    text: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> Iterator for Paragraphs<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let bytes = self.text.as_bytes();
        let len = bytes.len();
        let start = self.cursor;
        let mut scan = start;

        while scan < len {
            if bytes[scan] != b'\n' && bytes[scan] != b'\r' {
                scan += 1;
                continue;
            }

            let run_start = scan;
            let mut newlines = 0usize;
            while scan < len && (bytes[scan] == b'\n' || bytes[scan] == b'\r') {
                if bytes[scan] == b'\n' {
                    newlines += 1;
                }
                scan += 1;
            }

            if newlines >= 2 {
                self.cursor = scan;
                return Some(&self.text[start..run_start]);
            }
        }

        self.done = true;
        Some(&self.text[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn words_split_on_unicode_whitespace() {
        let text = "  uno\u{3000}dos\ttres ";
        let (first, cursor) = next_word_at(text, 0).unwrap();
        assert_eq!(first, "uno");
        let (second, cursor) = next_word_at(text, cursor).unwrap();
        assert_eq!(second, "dos");
        let (third, cursor) = next_word_at(text, cursor).unwrap();
        assert_eq!(third, "tres");
        assert!(next_word_at(text, cursor).is_none());
        assert_eq!(count_words(text), 3);
    }

    #[test]
    fn single_newline_does_not_split_paragraphs() {
        let parts: Vec<&str> = paragraphs("one\ntwo\n\n\nthree\r\n\r\nfour").collect();
        assert_eq!(parts, ["one\ntwo", "three", "four"]);
    }

    #[test]
    fn blank_runs_yield_empty_paragraphs() {
        let parts: Vec<&str> = paragraphs("\n\nbody").collect();
        assert_eq!(parts, ["", "body"]);
        assert_eq!(paragraphs("").count(), 1);
    }
}
