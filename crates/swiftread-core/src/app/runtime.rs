impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    /// Drains queued input, then fires the pending advance if it is due.
    ///
    /// At most one word advances per tick and the next dwell starts at
    /// `now_ms`, so a late tick delays reading instead of skipping words.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        let mut advanced = false;
        if let PlaybackState::Playing { pending } = self.state
            && now_ms >= pending.due_ms()
        {
            advanced = self.advance_word(now_ms) == AdvanceWordResult::Advanced;
        }

        if self.completion_unreported {
            self.completion_unreported = false;
            self.pending_redraw = false;
            return TickResult::Completed;
        }

        if advanced || self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Starts or resumes playback from `Paused`, honouring dwell already spent
    /// on the current word. On the last word the traversal completes at once.
    pub fn play(&mut self, now_ms: u64) {
        let PlaybackState::Paused { elapsed_ms } = self.state else {
            return;
        };

        if self.is_last_index() {
            self.finish_traversal();
            return;
        }

        let pending = PendingAdvance::new(now_ms, elapsed_ms, self.current_dwell_ms());
        debug!(
            "reader: play index={}/{} wpm={} dwell_ms={} carried_ms={}",
            self.current_index + 1,
            self.words.len(),
            self.config.wpm,
            pending.dwell_ms,
            elapsed_ms
        );
        self.state = PlaybackState::Playing { pending };
        self.pending_redraw = true;
    }

    /// Cancels the pending advance and records the dwell spent so far.
    pub fn pause(&mut self, now_ms: u64) {
        let PlaybackState::Playing { pending } = self.state else {
            return;
        };

        let elapsed_ms = pending.elapsed_at(now_ms);
        debug!(
            "reader: pause index={}/{} elapsed_ms={}/{}",
            self.current_index + 1,
            self.words.len(),
            elapsed_ms,
            pending.dwell_ms
        );
        self.state = PlaybackState::Paused { elapsed_ms };
        self.pending_redraw = true;
    }

    pub fn toggle_play_pause(&mut self, now_ms: u64) {
        if self.is_playing() {
            self.pause(now_ms);
        } else {
            self.play(now_ms);
        }
    }

    /// Moves to the next word, scheduling its full dwell from `now_ms`.
    fn advance_word(&mut self, now_ms: u64) -> AdvanceWordResult {
        if self.is_last_index() {
            self.finish_traversal();
            return AdvanceWordResult::EndOfText;
        }

        self.current_index += 1;
        self.words_since_drain = self.words_since_drain.saturating_add(1);
        self.state = PlaybackState::Playing {
            pending: PendingAdvance::new(now_ms, 0, self.current_dwell_ms()),
        };
        AdvanceWordResult::Advanced
    }

    fn finish_traversal(&mut self) {
        self.state = PlaybackState::Completed;
        self.pending_redraw = true;

        if self.completion_signaled {
            return;
        }

        debug!("reader: completed words={}", self.words.len());
        self.completion_signaled = true;
        self.completion_unreported = true;
        if let Some(callback) = self.on_complete.as_mut() {
            callback();
        }
    }

    fn is_last_index(&self) -> bool {
        self.current_index + 1 >= self.words.len()
    }

    fn current_dwell_ms(&self) -> u64 {
        self.current_word()
            .map_or(1, |word| word_dwell_ms(word, self.config.wpm))
    }
}
