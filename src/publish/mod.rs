//! Publishing the status line to its display target.

#[cfg(feature = "x11")]
pub mod x11;

#[cfg(feature = "x11")]
pub use x11::RootWindowPublisher;

use crate::error::Result;
use std::io::{self, Write};

/// Makes a status line visible.
///
/// Must be callable repeatedly; publishing the empty string clears the
/// display.
pub trait Publisher {
    /// Replace the visible status text.
    fn publish(&mut self, text: &str) -> Result<()>;

    /// Clear the visible status text.
    fn clear(&mut self) -> Result<()> {
        self.publish("")
    }
}

impl<P: Publisher + ?Sized> Publisher for Box<P> {
    fn publish(&mut self, text: &str) -> Result<()> {
        (**self).publish(text)
    }

    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }
}

/// Writes one status line per output line, for bars that read a pipe.
pub struct StdoutPublisher<W: Write = io::Stdout> {
    out: W,
}

impl StdoutPublisher {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutPublisher<W> {
    /// Publish into any writer.
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Publisher for StdoutPublisher<W> {
    fn publish(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }
}
