//! Traits for metric collection.

use crate::config::MetricKind;
use crate::metrics::data::CommandOutput;
use async_trait::async_trait;
use std::io;
use std::path::Path;

/// Access to the machine state the readers sample.
///
/// [`LiveSource`](crate::metrics::source::LiveSource) talks to sysfs and
/// spawns real processes; tests substitute an in-memory source.
#[async_trait]
pub trait SystemSource: Send + Sync {
    /// Read a whole text file.
    async fn read_file(&self, path: &Path) -> io::Result<String>;

    /// Whether a path exists.
    async fn exists(&self, path: &Path) -> bool;

    /// Run `program` with `args` and capture its standard output.
    ///
    /// A non-zero exit is reported through [`CommandOutput::success`];
    /// `Err` means the process could not run or did not finish in time.
    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput>;
}

/// Produces one metric's fragment for the current tick.
///
/// Implementations absorb every read failure: the result is either a
/// rendered fragment, the unknown marker, or an empty string meaning the
/// metric contributes nothing.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Which metric this collector renders.
    fn kind(&self) -> MetricKind;

    /// Sample the readers and render the fragment.
    async fn fragment(&self, source: &dyn SystemSource) -> String;
}
