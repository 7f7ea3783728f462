use core::fmt::Write as _;
use std::io::{self, Write};

use heapless::String as HeaplessString;
use swiftread_core::render::{Screen, WordView};

const STATUS_LINE_BYTES: usize = 160;
/// Column the recognition point is pinned to, so the eye never moves.
const PIVOT_COLUMN: usize = 18;
const TAIL_COLUMNS: usize = 24;

const CLEAR_LINE: &str = "\r\x1b[2K";
const PIVOT_STYLE: &str = "\x1b[1;31m";
const RESET_STYLE: &str = "\x1b[0m";

/// Single-line ANSI renderer for [`Screen`] view models.
pub(super) struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        match screen {
            Screen::Ready {
                title,
                line1,
                line2,
                wpm,
            } => {
                write!(self.out, "{CLEAR_LINE}{title}  {line1}: {line2}  [{wpm} wpm]")?;
            }
            Screen::Reading {
                word,
                wpm,
                playing,
                completed,
                progress,
                ..
            } => {
                let state = if completed {
                    "done"
                } else if playing {
                    "play"
                } else {
                    "paused"
                };

                let mut status = HeaplessString::<STATUS_LINE_BYTES>::new();
                let _ = write!(
                    status,
                    "Elapsed {}  {}  Remaining {}  {} wpm  [{}] {}/{}",
                    progress.elapsed,
                    progress.percent,
                    progress.remaining,
                    wpm,
                    state,
                    progress.word_index,
                    progress.word_total
                );

                write!(self.out, "{CLEAR_LINE}")?;
                self.write_word(word)?;
                write!(self.out, "  {status}")?;
            }
        }

        self.out.flush()
    }

    /// Leaves the cursor on a fresh line.
    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    fn write_word(&mut self, word: WordView<'_>) -> io::Result<()> {
        let lead = PIVOT_COLUMN.saturating_sub(word.before.chars().count());
        let tail = TAIL_COLUMNS.saturating_sub(word.after.chars().count());
        write!(
            self.out,
            "{:lead$}{}{PIVOT_STYLE}{}{RESET_STYLE}{}{:tail$}",
            "", word.before, word.pivot, word.after, ""
        )
    }
}
