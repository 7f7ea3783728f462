use heapless::Deque;

use super::{Command, InputProvider};

/// Bounded FIFO of commands pushed by the host and drained on each tick.
#[derive(Debug, Default)]
pub struct QueuedInput<const N: usize> {
    pending: Deque<Command, N>,
}

impl<const N: usize> QueuedInput<N> {
    pub const fn new() -> Self {
        Self {
            pending: Deque::new(),
        }
    }

    /// Queues a command, handing it back when the queue is full.
    pub fn push(&mut self, command: Command) -> Result<(), Command> {
        self.pending.push_back(command)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<const N: usize> InputProvider for QueuedInput<N> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<Command>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}
