//! Progress reporting for long running sorts.

use std::io::{self, Write};

/// Glyphs cycled through by [`Spinner`], in display order.
pub const GLYPHS: [char; 4] = ['|', '/', '-', '\\'];

/// Receives one call per non-trivial recursive step of a sort.
///
/// Purely observational, implementations must not influence the sort.
pub trait Progress {
    fn advance(&mut self);
}

/// Discards every step.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline(always)]
    fn advance(&mut self) {}
}

impl<F: FnMut()> Progress for F {
    #[inline]
    fn advance(&mut self) {
        self()
    }
}

/// Rotating single character spinner, redrawn in place with a carriage return.
#[derive(Debug)]
pub struct Spinner<W> {
    out: W,
    ticks: u64,
}

impl Spinner<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Spinner<W> {
    pub fn new(out: W) -> Self {
        Self { out, ticks: 0 }
    }

    /// Number of times the spinner was advanced.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The glyph shown last, `None` before the first advance.
    pub fn current(&self) -> Option<char> {
        self.ticks
            .checked_sub(1)
            .map(|i| GLYPHS[(i % GLYPHS.len() as u64) as usize])
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for Spinner<W> {
    fn advance(&mut self) {
        self.ticks += 1;
        let glyph = GLYPHS[((self.ticks - 1) % GLYPHS.len() as u64) as usize];

        // A broken display must not abort the sort.
        let _ = write!(self.out, "\r{glyph}");
        let _ = self.out.flush();
    }
}
