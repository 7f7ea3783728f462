//! Per-word timing: optimal recognition point and smart slowing.

/// Multipliers applied on top of the base per-word interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlowingConfig {
    pub sentence_end_multiplier: f32,
    pub clause_end_multiplier: f32,
    pub long_word_multiplier: f32,
    pub paragraph_break_multiplier: f32,
    /// Words longer than this many characters get the long-word factor.
    pub long_word_threshold: usize,
}

impl Default for SlowingConfig {
    fn default() -> Self {
        Self {
            sentence_end_multiplier: 3.0,
            clause_end_multiplier: 1.5,
            long_word_multiplier: 2.0,
            paragraph_break_multiplier: 3.0,
            long_word_threshold: 12,
        }
    }
}

impl SlowingConfig {
    /// Copy with every factor raised to at least `1.0` (NaN becomes `1.0`).
    pub fn sanitized(self) -> Self {
        Self {
            sentence_end_multiplier: at_least_one(self.sentence_end_multiplier),
            clause_end_multiplier: at_least_one(self.clause_end_multiplier),
            long_word_multiplier: at_least_one(self.long_word_multiplier),
            paragraph_break_multiplier: at_least_one(self.paragraph_break_multiplier),
            long_word_threshold: self.long_word_threshold,
        }
    }
}

fn at_least_one(factor: f32) -> f32 {
    if factor >= 1.0 { factor } else { 1.0 }
}

pub fn ends_sentence(word: &str) -> bool {
    matches!(word.chars().next_back(), Some('.' | '!' | '?'))
}

pub fn ends_clause(word: &str) -> bool {
    matches!(word.chars().next_back(), Some(',' | ';' | ':'))
}

/// Character index of the optimal recognition point, roughly the first third
/// of the word.
pub fn calculate_orp(word: &str) -> usize {
    let len = word.chars().count();
    if len <= 1 {
        return 0;
    }

    len * 3 / 10
}

/// Dimensionless factor scaling the base interval of `word`.
///
/// Factors compose multiplicatively. Only the last character is inspected for
/// punctuation, so sentence and clause endings never both apply.
pub fn delay_multiplier(word: &str, is_paragraph_break: bool, config: &SlowingConfig) -> f32 {
    let mut multiplier = 1.0f32;

    if is_paragraph_break {
        multiplier *= config.paragraph_break_multiplier;
    }

    if ends_sentence(word) {
        multiplier *= config.sentence_end_multiplier;
    } else if ends_clause(word) {
        multiplier *= config.clause_end_multiplier;
    }

    if word.chars().count() > config.long_word_threshold {
        multiplier *= config.long_word_multiplier;
    }

    multiplier
}
