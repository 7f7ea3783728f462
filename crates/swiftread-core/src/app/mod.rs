//! Playback scheduler: advances through the word sequence in real time.
//!
//! The app is polled. Every command and every [`ReaderApp::tick`] receives the
//! caller's monotonic clock in milliseconds, so tests drive it with a simulated
//! clock and firmware or terminal hosts pass their own uptime.

use alloc::{boxed::Box, vec::Vec};

use log::debug;

use crate::{
    content::{SlowingConfig, WordUnit, tokenize},
    input::{Command, InputProvider},
    render::{ProgressView, Screen, WordView},
    text_policy::{CLOCK_LABEL_BYTES, PERCENT_LABEL_BYTES, clock_label, percent_label},
};

const MS_PER_MINUTE: f32 = 60_000.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
    /// The traversal reached its end since the previous tick.
    Completed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderConfig {
    pub wpm: u16,
    pub min_wpm: u16,
    pub max_wpm: u16,
    /// Speed change applied by [`Command::SpeedUp`] / [`Command::SpeedDown`].
    pub wpm_step: u16,
    /// Reading time skipped by one step command.
    pub step_seconds: u16,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            wpm: 300,
            min_wpm: 100,
            max_wpm: 1_000,
            wpm_step: 50,
            step_seconds: 5,
        }
    }
}

/// The single scheduled advance of a playing reader.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PendingAdvance {
    /// Clock value when this dwell was (re)scheduled.
    pub scheduled_at_ms: u64,
    /// Dwell already spent on the word before scheduling, from a prior pause.
    pub carried_ms: u64,
    /// Full dwell of the word at the speed in effect when scheduled.
    pub dwell_ms: u64,
}

impl PendingAdvance {
    const fn new(now_ms: u64, carried_ms: u64, dwell_ms: u64) -> Self {
        Self {
            scheduled_at_ms: now_ms,
            carried_ms,
            dwell_ms,
        }
    }

    pub const fn due_ms(self) -> u64 {
        self.scheduled_at_ms + self.dwell_ms.saturating_sub(self.carried_ms)
    }

    /// Dwell spent on the word at `now_ms`, clamped to `[0, dwell_ms)`.
    pub fn elapsed_at(self, now_ms: u64) -> u64 {
        let elapsed = self
            .carried_ms
            .saturating_add(now_ms.saturating_sub(self.scheduled_at_ms));
        elapsed.min(self.dwell_ms.saturating_sub(1))
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackState {
    /// No words loaded.
    Idle,
    Paused {
        elapsed_ms: u64,
    },
    Playing {
        pending: PendingAdvance,
    },
    /// End reached; behaves like `Paused` on the last word.
    Completed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AdvanceWordResult {
    Advanced,
    EndOfText,
}

pub struct ReaderApp<IN>
where
    IN: InputProvider,
{
    input: IN,
    config: ReaderConfig,
    slowing: SlowingConfig,
    app_title: &'static str,
    words: Vec<WordUnit>,
    current_index: usize,
    state: PlaybackState,
    completion_signaled: bool,
    completion_unreported: bool,
    on_complete: Option<Box<dyn FnMut()>>,
    pending_redraw: bool,
    words_since_drain: u32,
}

include!("view.rs");
include!("input.rs");
include!("runtime.rs");
include!("navigation.rs");

fn word_dwell_ms(word: &WordUnit, wpm: u16) -> u64 {
    let base = MS_PER_MINUTE / wpm.max(1) as f32;
    ((base * word.delay_multiplier()) as u64).max(1)
}
