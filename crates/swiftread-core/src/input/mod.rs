//! Input abstraction layer.

mod queued;

pub use queued::QueuedInput;

/// Logical commands consumed by the reader app, whatever device produced them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    TogglePlayPause,
    Play,
    Pause,
    StepBack,
    StepForward,
    SpeedUp,
    SpeedDown,
    SetSpeed(u16),
    Restart,
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<Command>, Self::Error>;
}
