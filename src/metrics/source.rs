//! The real system source: sysfs files and external commands.

use crate::metrics::data::CommandOutput;
use crate::metrics::traits::SystemSource;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time;

/// Reads the live machine state.
///
/// Every command is bounded by `command_timeout`; a command that overruns
/// is killed and reported as a timed-out I/O error so one stuck process
/// cannot stall the whole tick.
#[derive(Debug, Clone)]
pub struct LiveSource {
    command_timeout: Duration,
}

impl LiveSource {
    /// Create a source whose commands are bounded by `command_timeout`.
    pub fn new(command_timeout: Duration) -> Self {
        Self { command_timeout }
    }

    /// Upper bound applied to every command.
    pub fn command_timeout(&self) -> Duration {
        self.command_timeout
    }
}

impl Default for LiveSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::DEFAULT_COMMAND_TIMEOUT_MS))
    }
}

#[async_trait]
impl SystemSource for LiveSource {
    async fn read_file(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn run(&self, program: &str, args: &[String]) -> io::Result<CommandOutput> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output();

        let output = time::timeout(self.command_timeout, child)
            .await
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("{} did not finish within {:?}", program, self.command_timeout),
                )
            })??;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_file_and_exists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("capacity");
        fs::write(&path, "57\n").unwrap();

        let source = LiveSource::default();
        assert_eq!(source.read_file(&path).await.unwrap(), "57\n");
        assert!(source.exists(&path).await);
        assert!(!source.exists(&dir.path().join("missing")).await);
        assert!(source.read_file(&dir.path().join("missing")).await.is_err());
    }

    #[tokio::test]
    async fn test_run_captures_stdout_and_status() {
        let source = LiveSource::default();

        let ok = source.run("sh", &["-c".to_string(), "echo hello".to_string()]).await;
        let ok = ok.unwrap();
        assert!(ok.success);
        assert_eq!(ok.stdout.trim(), "hello");

        let failed = source.run("sh", &["-c".to_string(), "exit 3".to_string()]).await;
        assert!(!failed.unwrap().success);
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let source = LiveSource::default();
        let result = source.run("dwmstat-no-such-program", &[]).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_slow_command_times_out() {
        let source = LiveSource::new(Duration::from_millis(50));
        let result = source.run("sleep", &["5".to_string()]).await;
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::TimedOut);
    }
}
