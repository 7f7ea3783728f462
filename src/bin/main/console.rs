//! Line-based keyboard commands read on a side thread.
//!
//! The thread only enqueues; the UI loop drains the queue through
//! [`ChannelInput`] so every state change happens on the executor.

use core::convert::Infallible;
use std::{
    io::{self, BufRead},
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::warn;
use swiftread_core::input::{Command, InputProvider};

const COMMAND_QUEUE_DEPTH: usize = 16;

static COMMANDS: Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH> = Channel::new();
static QUIT_REQUESTED: AtomicBool = AtomicBool::new(false);

pub(super) const HELP: &str = "keys (then Enter): \
<Enter>/p play-pause  h/l back/forward 5s  k/j speed +/-  w N set wpm  r restart  q quit";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum ConsoleLine {
    Command(Command),
    Quit,
    Help,
    Unknown,
}

pub(super) fn parse_line(line: &str) -> ConsoleLine {
    let mut parts = line.split_whitespace();
    match parts.next() {
        None | Some("p") => ConsoleLine::Command(Command::TogglePlayPause),
        Some("h") => ConsoleLine::Command(Command::StepBack),
        Some("l") => ConsoleLine::Command(Command::StepForward),
        Some("k" | "+") => ConsoleLine::Command(Command::SpeedUp),
        Some("j" | "-") => ConsoleLine::Command(Command::SpeedDown),
        Some("r") => ConsoleLine::Command(Command::Restart),
        Some("w") => match parts.next().and_then(|value| value.parse::<i64>().ok()) {
            Some(wpm) => {
                ConsoleLine::Command(Command::SetSpeed(wpm.clamp(0, u16::MAX as i64) as u16))
            }
            None => ConsoleLine::Unknown,
        },
        Some("q") => ConsoleLine::Quit,
        Some("?") => ConsoleLine::Help,
        Some(_) => ConsoleLine::Unknown,
    }
}

pub(super) fn spawn_stdin_reader() -> io::Result<()> {
    thread::Builder::new()
        .name("stdin-commands".into())
        .spawn(|| {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else {
                    break;
                };

                match parse_line(&line) {
                    ConsoleLine::Command(command) => {
                        if COMMANDS.try_send(command).is_err() {
                            warn!("console: command queue full; dropped {:?}", command);
                        }
                    }
                    ConsoleLine::Quit => break,
                    ConsoleLine::Help => eprintln!("{HELP}"),
                    ConsoleLine::Unknown => {
                        warn!("console: unrecognised input {:?}; ? for help", line.trim())
                    }
                }
            }

            QUIT_REQUESTED.store(true, Ordering::Release);
        })?;

    Ok(())
}

pub(super) fn quit_requested() -> bool {
    QUIT_REQUESTED.load(Ordering::Acquire)
}

/// Input provider backed by the shared command queue.
#[derive(Default, Debug, Clone, Copy)]
pub(super) struct ChannelInput;

impl InputProvider for ChannelInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(COMMANDS.try_receive().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(parse_line(""), ConsoleLine::Command(Command::TogglePlayPause));
        assert_eq!(parse_line(" p "), ConsoleLine::Command(Command::TogglePlayPause));
        assert_eq!(parse_line("h"), ConsoleLine::Command(Command::StepBack));
        assert_eq!(parse_line("l"), ConsoleLine::Command(Command::StepForward));
        assert_eq!(parse_line("+"), ConsoleLine::Command(Command::SpeedUp));
        assert_eq!(parse_line("j"), ConsoleLine::Command(Command::SpeedDown));
        assert_eq!(parse_line("r"), ConsoleLine::Command(Command::Restart));
        assert_eq!(parse_line("q"), ConsoleLine::Quit);
        assert_eq!(parse_line("?"), ConsoleLine::Help);
        assert_eq!(parse_line("zzz"), ConsoleLine::Unknown);
    }

    #[test]
    fn speed_values_are_clamped_not_rejected() {
        assert_eq!(parse_line("w 450"), ConsoleLine::Command(Command::SetSpeed(450)));
        assert_eq!(parse_line("w -20"), ConsoleLine::Command(Command::SetSpeed(0)));
        assert_eq!(
            parse_line("w 99999999"),
            ConsoleLine::Command(Command::SetSpeed(u16::MAX))
        );
        assert_eq!(parse_line("w fast"), ConsoleLine::Unknown);
    }

    #[test]
    fn channel_input_drains_queue() {
        let mut input = ChannelInput;
        COMMANDS.try_send(Command::Restart).unwrap();
        assert_eq!(input.poll_event(), Ok(Some(Command::Restart)));
        assert_eq!(input.poll_event(), Ok(None));
    }
}
