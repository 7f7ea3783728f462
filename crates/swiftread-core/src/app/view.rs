impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    pub fn new(
        input: IN,
        mut config: ReaderConfig,
        slowing: SlowingConfig,
        app_title: &'static str,
    ) -> Self {
        if config.max_wpm < config.min_wpm {
            core::mem::swap(&mut config.max_wpm, &mut config.min_wpm);
        }
        config.min_wpm = config.min_wpm.max(1);
        config.max_wpm = config.max_wpm.max(config.min_wpm);
        config.wpm = config.wpm.clamp(config.min_wpm, config.max_wpm);

        Self {
            input,
            config,
            slowing: slowing.sanitized(),
            app_title,
            words: Vec::new(),
            current_index: 0,
            state: PlaybackState::Idle,
            completion_signaled: false,
            completion_unreported: false,
            on_complete: None,
            pending_redraw: true,
            words_since_drain: 0,
        }
    }

    /// Registers the callback fired once per traversal that reaches the end.
    pub fn set_on_complete<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn config(&self) -> ReaderConfig {
        self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn wpm(&self) -> u16 {
        self.config.wpm
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, PlaybackState::Completed)
    }

    pub fn words(&self) -> &[WordUnit] {
        &self.words
    }

    pub fn sequence_len(&self) -> usize {
        self.words.len()
    }

    /// Index of the displayed word; `0` when nothing is loaded.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_word(&self) -> Option<&WordUnit> {
        self.words.get(self.current_index)
    }

    /// Dwell already spent on the current word at `now_ms`.
    pub fn dwell_elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.state {
            PlaybackState::Paused { elapsed_ms } => elapsed_ms,
            PlaybackState::Playing { pending } => pending.elapsed_at(now_ms),
            PlaybackState::Idle | PlaybackState::Completed => 0,
        }
    }

    /// Words skipped by one step command, about `step_seconds` of reading.
    pub fn step_words(&self) -> usize {
        self.config.wpm as usize * self.config.step_seconds as usize / 60
    }

    /// Fraction of the sequence before the current word, in `[0, 1)`.
    pub fn progress_fraction(&self) -> f32 {
        if self.words.is_empty() {
            return 0.0;
        }

        self.current_index as f32 / self.words.len() as f32
    }

    /// Reading time of the whole sequence at the current speed.
    pub fn total_seconds(&self) -> f32 {
        let base_ms = MS_PER_MINUTE as f64 / self.config.wpm.max(1) as f64;
        let total_ms: f64 = self
            .words
            .iter()
            .map(|word| base_ms * word.delay_multiplier() as f64)
            .sum();
        (total_ms / 1_000.0) as f32
    }

    /// Positional estimate: progress fraction applied to the total reading
    /// time. It is not the real time spent, and drifts from it whenever
    /// multipliers vary along the text.
    pub fn elapsed_seconds(&self) -> f32 {
        self.progress_fraction() * self.total_seconds()
    }

    /// Complement of [`Self::elapsed_seconds`], with the same approximation.
    pub fn remaining_seconds(&self) -> f32 {
        let total = self.total_seconds();
        total - self.progress_fraction() * total
    }

    /// Words advanced by playback since the previous call.
    pub fn drain_word_updates(&mut self) -> u32 {
        let count = self.words_since_drain;
        self.words_since_drain = 0;
        count
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let Some(word) = self.current_word() else {
            f(Screen::Ready {
                title: self.app_title,
                line1: "Ready",
                line2: "Input text to start",
                wpm: self.config.wpm,
            });
            return;
        };

        let mut percent_buf = [0u8; PERCENT_LABEL_BYTES];
        let mut elapsed_buf = [0u8; CLOCK_LABEL_BYTES];
        let mut remaining_buf = [0u8; CLOCK_LABEL_BYTES];
        let percent = (self.progress_fraction() * 100.0 + 0.5) as u8;
        let progress = ProgressView {
            word_index: self.current_index + 1,
            word_total: self.words.len(),
            percent: percent_label(percent, &mut percent_buf),
            elapsed: clock_label(self.elapsed_seconds() as u32, &mut elapsed_buf),
            remaining: clock_label(self.remaining_seconds() as u32, &mut remaining_buf),
        };

        f(Screen::Reading {
            title: self.app_title,
            word: WordView::split(word.text(), word.orp_index()),
            sentence_index: word.sentence_index(),
            wpm: self.config.wpm,
            playing: self.is_playing(),
            completed: self.is_completed(),
            progress,
        });
    }
}
