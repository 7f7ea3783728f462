impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    /// Replaces the sequence with a fresh tokenization of `text` and stops
    /// playback. Text without words leaves the reader `Idle`.
    pub fn load_text(&mut self, text: &str) {
        self.words = tokenize(text, &self.slowing);
        self.current_index = 0;
        self.completion_signaled = false;
        self.completion_unreported = false;
        self.state = if self.words.is_empty() {
            PlaybackState::Idle
        } else {
            PlaybackState::Paused { elapsed_ms: 0 }
        };
        self.pending_redraw = true;

        debug!(
            "reader: loaded words={} sentences={}",
            self.words.len(),
            self.words
                .last()
                .map_or(0, |word| word.sentence_index().saturating_add(1))
        );
    }

    /// Back to the first word, paused, with completion re-armed.
    pub fn restart(&mut self) {
        if matches!(self.state, PlaybackState::Idle) {
            return;
        }

        debug!("reader: restart from index={}", self.current_index + 1);
        self.current_index = 0;
        self.completion_signaled = false;
        self.completion_unreported = false;
        self.state = PlaybackState::Paused { elapsed_ms: 0 };
        self.pending_redraw = true;
    }

    /// Moves by `delta_words` (negative is backward), clamped to the sequence.
    /// Playback continues from the target's full dwell when it was running.
    pub fn seek(&mut self, delta_words: isize, now_ms: u64) {
        if self.words.is_empty() {
            return;
        }

        let last = self.words.len() - 1;
        let target = self.current_index.saturating_add_signed(delta_words).min(last);
        let was_playing = self.is_playing();

        debug!(
            "reader: seek delta={} index={} -> {} playing={}",
            delta_words,
            self.current_index + 1,
            target + 1,
            was_playing
        );

        self.current_index = target;
        self.state = if was_playing {
            PlaybackState::Playing {
                pending: PendingAdvance::new(now_ms, 0, self.current_dwell_ms()),
            }
        } else {
            PlaybackState::Paused { elapsed_ms: 0 }
        };
        self.pending_redraw = true;
    }

    pub fn step_back(&mut self, now_ms: u64) {
        let step = self.step_words().min(isize::MAX as usize) as isize;
        self.seek(-step, now_ms);
    }

    pub fn step_forward(&mut self, now_ms: u64) {
        let step = self.step_words().min(isize::MAX as usize) as isize;
        self.seek(step, now_ms);
    }
}
