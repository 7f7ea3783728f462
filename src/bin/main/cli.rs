use std::path::PathBuf;

use clap::Parser;
use swiftread_core::{app::ReaderConfig, content::SlowingConfig};

use super::source::TextSource;

/// Speed reading in the terminal, one word at a time.
#[derive(Debug, Parser)]
#[command(name = "swiftread", version)]
pub(super) struct Cli {
    /// Plain-text file to read; the built-in sample is used when omitted.
    pub file: Option<PathBuf>,

    /// Read the built-in sample text even when a file is given.
    #[arg(long)]
    pub sample: bool,

    /// Starting speed in words per minute (clamped to 100..=1000).
    #[arg(long, env = "SWIFTREAD_WPM", default_value_t = 300)]
    pub wpm: u32,

    /// Start playing as soon as the text is loaded.
    #[arg(long)]
    pub autoplay: bool,

    /// Dwell factor for words ending a sentence (. ! ?).
    #[arg(long)]
    pub sentence_end: Option<f32>,

    /// Dwell factor for words ending a clause (, ; :).
    #[arg(long)]
    pub clause_end: Option<f32>,

    /// Dwell factor for words longer than --long-word-threshold.
    #[arg(long)]
    pub long_word: Option<f32>,

    /// Dwell factor for the first word of a new paragraph.
    #[arg(long)]
    pub paragraph_break: Option<f32>,

    /// Character count above which a word counts as long.
    #[arg(long)]
    pub long_word_threshold: Option<usize>,
}

impl Cli {
    pub fn reader_config(&self) -> ReaderConfig {
        ReaderConfig {
            wpm: self.wpm.min(u16::MAX as u32) as u16,
            ..ReaderConfig::default()
        }
    }

    pub fn slowing_config(&self) -> SlowingConfig {
        let defaults = SlowingConfig::default();
        SlowingConfig {
            sentence_end_multiplier: self
                .sentence_end
                .unwrap_or(defaults.sentence_end_multiplier),
            clause_end_multiplier: self.clause_end.unwrap_or(defaults.clause_end_multiplier),
            long_word_multiplier: self.long_word.unwrap_or(defaults.long_word_multiplier),
            paragraph_break_multiplier: self
                .paragraph_break
                .unwrap_or(defaults.paragraph_break_multiplier),
            long_word_threshold: self
                .long_word_threshold
                .unwrap_or(defaults.long_word_threshold),
        }
    }

    pub fn text_source(&self) -> TextSource {
        match (&self.file, self.sample) {
            (Some(path), false) => TextSource::File(path.clone()),
            _ => TextSource::Sample,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_core_defaults() {
        let cli = Cli::try_parse_from(["swiftread"]).unwrap();
        assert_eq!(cli.slowing_config(), SlowingConfig::default());
        assert_eq!(cli.text_source(), TextSource::Sample);
        assert!(!cli.autoplay);
    }

    #[test]
    fn overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "swiftread",
            "--wpm",
            "450",
            "--sentence-end",
            "4",
            "--long-word-threshold",
            "8",
            "book.txt",
        ])
        .unwrap();

        assert_eq!(cli.reader_config().wpm, 450);
        let slowing = cli.slowing_config();
        assert_eq!(slowing.sentence_end_multiplier, 4.0);
        assert_eq!(slowing.long_word_threshold, 8);
        assert_eq!(slowing.clause_end_multiplier, 1.5);
        assert_eq!(
            cli.text_source(),
            TextSource::File(PathBuf::from("book.txt"))
        );
    }

    #[test]
    fn sample_flag_wins_over_file() {
        let cli = Cli::try_parse_from(["swiftread", "--sample", "book.txt"]).unwrap();
        assert_eq!(cli.text_source(), TextSource::Sample);
    }
}
