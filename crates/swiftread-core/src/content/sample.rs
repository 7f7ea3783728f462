use alloc::string::String;

/// Built-in practice text offered when no other source is loaded.
pub const SAMPLE_PARAGRAPHS: [&str; 5] = [
    "Speed reading is the process of rapidly recognizing and absorbing phrases or sentences on a \
page all at once, rather than identifying individual words.",
    "The amount of information we process seems to be growing by the day. Whether it's emails, \
reports and websites at work or social media, books and magazines at home, we're all constantly \
taking in written content.",
    "Most people read at an average rate of 250 words per minute, though some are naturally faster \
than others. However, the ability to speed read could mean that you double this rate.",
    "With some practice and the right technique, you can significantly increase your reading speed \
while maintaining comprehension. The key is to minimize subvocalization, reduce regression, and \
use visual recognition patterns.",
    "This speed reading application uses the RSVP technique: Rapid Serial Visual Presentation. Each \
word flashes on screen one at a time, with the optimal recognition point highlighted. This \
minimizes eye movement and allows your brain to process words more efficiently.",
];

/// Sample paragraphs joined with blank lines, ready for tokenizing.
pub fn sample_text() -> String {
    SAMPLE_PARAGRAPHS.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SlowingConfig, tokenize};

    #[test]
    fn sample_keeps_paragraph_structure() {
        let words = tokenize(&sample_text(), &SlowingConfig::default());
        assert!(!words.is_empty());
        assert_eq!(words[0].text(), "Speed");

        let breaks = words
            .iter()
            .zip(words.iter().skip(1))
            .filter(|(prev, next)| next.sentence_index() != prev.sentence_index())
            .count();
        assert!(breaks >= SAMPLE_PARAGRAPHS.len() - 1);
    }
}
