//! Process signals mapped onto scheduler control requests.
//!
//! `SIGINT` and `SIGTERM` terminate, `SIGUSR1` forces a refresh.

use crate::error::Result;
use crate::status::Control;
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Install the handlers and forward requests into `tx`.
///
/// Handlers are registered before this returns, so a signal that arrives
/// while the first status line is being built is not lost. The task ends
/// after forwarding a terminate request or once the receiver is gone.
pub fn forward_signals(tx: mpsc::Sender<Control>) -> Result<JoinHandle<()>> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut refresh = signal(SignalKind::user_defined1())?;

    Ok(tokio::spawn(async move {
        loop {
            let request = tokio::select! {
                _ = interrupt.recv() => Control::Terminate,
                _ = terminate.recv() => Control::Terminate,
                _ = refresh.recv() => Control::Refresh,
            };
            debug!(?request, "signal received");

            if tx.send(request).await.is_err() || request == Control::Terminate {
                break;
            }
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use std::time::Duration;
    use tokio::time::timeout;

    const WAIT: Duration = Duration::from_secs(5);

    fn raise(signal: &str) {
        let status = Command::new("kill")
            .arg(format!("-{}", signal))
            .arg(std::process::id().to_string())
            .status()
            .unwrap();
        assert!(status.success());
    }

    async fn next(rx: &mut mpsc::Receiver<Control>) -> Option<Control> {
        timeout(WAIT, rx.recv()).await.unwrap()
    }

    // One test so concurrent listeners in this process never see each
    // other's signals.
    #[tokio::test]
    async fn test_signal_mapping() {
        // USR1 refreshes, TERM terminates and ends the task
        let (tx, mut rx) = mpsc::channel(4);
        let handle = forward_signals(tx).unwrap();
        raise("USR1");
        assert_eq!(next(&mut rx).await, Some(Control::Refresh));
        raise("TERM");
        assert_eq!(next(&mut rx).await, Some(Control::Terminate));
        assert_eq!(next(&mut rx).await, None);
        timeout(WAIT, handle).await.unwrap().unwrap();

        // INT terminates as well
        let (tx, mut rx) = mpsc::channel(4);
        let handle = forward_signals(tx).unwrap();
        raise("INT");
        assert_eq!(next(&mut rx).await, Some(Control::Terminate));
        assert_eq!(next(&mut rx).await, None);
        timeout(WAIT, handle).await.unwrap().unwrap();

        // A dropped receiver stops the task on the next signal
        let (tx, rx) = mpsc::channel(4);
        let handle = forward_signals(tx).unwrap();
        drop(rx);
        raise("USR1");
        timeout(WAIT, handle).await.unwrap().unwrap();
    }
}
