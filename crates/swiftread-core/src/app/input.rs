impl<IN> ReaderApp<IN>
where
    IN: InputProvider,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(command)) => self.apply_command(command, now_ms),
                Ok(None) => break,
                Err(_) => {
                    debug!("reader: input provider failed; skipping remaining input this tick");
                    break;
                }
            }
        }
    }

    /// Applies one user command. Keyboard, UI controls and scripted input all
    /// funnel through here, in arrival order.
    pub fn apply_command(&mut self, command: Command, now_ms: u64) {
        match command {
            Command::TogglePlayPause => self.toggle_play_pause(now_ms),
            Command::Play => self.play(now_ms),
            Command::Pause => self.pause(now_ms),
            Command::StepBack => self.step_back(now_ms),
            Command::StepForward => self.step_forward(now_ms),
            Command::SpeedUp => self.adjust_speed(true),
            Command::SpeedDown => self.adjust_speed(false),
            Command::SetSpeed(wpm) => self.set_speed(wpm as u32),
            Command::Restart => self.restart(),
        }
    }

    /// Sets the reading speed, clamped to the configured range. A pending
    /// advance keeps its dwell; the new speed applies from the next one.
    pub fn set_speed(&mut self, wpm: u32) {
        let clamped = wpm.clamp(self.config.min_wpm as u32, self.config.max_wpm as u32) as u16;
        if clamped == self.config.wpm {
            return;
        }

        debug!("reader: speed {} -> {} wpm", self.config.wpm, clamped);
        self.config.wpm = clamped;
        self.pending_redraw = true;
    }

    /// Steps the speed by `wpm_step`, staying inside the configured range.
    pub fn adjust_speed(&mut self, increase: bool) {
        let next = if increase {
            self.config
                .wpm
                .saturating_add(self.config.wpm_step)
                .min(self.config.max_wpm)
        } else {
            self.config
                .wpm
                .saturating_sub(self.config.wpm_step)
                .max(self.config.min_wpm)
        };

        self.set_speed(next as u32);
    }
}
