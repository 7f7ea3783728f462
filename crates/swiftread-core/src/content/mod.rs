//! Text sources and the tokenizer that turns them into timed word units.

mod sample;
mod text_utils;
mod timing;
mod tokenizer;

use alloc::string::String;

pub use sample::{SAMPLE_PARAGRAPHS, sample_text};
pub use timing::{
    SlowingConfig, calculate_orp, delay_multiplier, ends_clause, ends_sentence,
};
pub use tokenizer::tokenize;

/// One display unit produced by [`tokenize`]. Never mutated after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct WordUnit {
    text: String,
    orp_index: usize,
    delay_multiplier: f32,
    sentence_index: u32,
}

impl WordUnit {
    /// Literal token, a contiguous run of non-whitespace characters.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character offset of the optimal recognition point.
    pub fn orp_index(&self) -> usize {
        self.orp_index
    }

    /// Factor (`>= 1.0`) applied to the base per-word interval.
    pub fn delay_multiplier(&self) -> f32 {
        self.delay_multiplier
    }

    pub fn sentence_index(&self) -> u32 {
        self.sentence_index
    }
}
