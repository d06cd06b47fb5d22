//! X11 root window publisher (dwm reads the root window's `WM_NAME`).

use super::Publisher;
use crate::error::{Result, StatusError};
use tracing::info;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, PropMode, Window};
use x11rb::rust_connection::RustConnection;
use x11rb::wrapper::ConnectionExt as _;

/// Sets `WM_NAME` on the default screen's root window.
pub struct RootWindowPublisher {
    conn: RustConnection,
    root: Window,
}

impl RootWindowPublisher {
    /// Connect to `display`, or to `$DISPLAY` when `None`.
    ///
    /// Failing here is fatal for the binary: without a connection there is
    /// nowhere to publish.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) = x11rb::connect(display).map_err(|e| {
            StatusError::publish_error(format!("Failed to connect to X server: {}", e))
        })?;

        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| {
                StatusError::publish_error(format!("X server has no screen {}", screen_num))
            })?;

        info!(screen = screen_num, root, "connected to X server");
        Ok(Self { conn, root })
    }
}

impl Publisher for RootWindowPublisher {
    fn publish(&mut self, text: &str) -> Result<()> {
        self.conn
            .change_property8(
                PropMode::REPLACE,
                self.root,
                AtomEnum::WM_NAME,
                AtomEnum::STRING,
                text.as_bytes(),
            )
            .map_err(|e| StatusError::publish_error(format!("Failed to set WM_NAME: {}", e)))?;

        self.conn
            .flush()
            .map_err(|e| StatusError::publish_error(format!("Failed to flush X connection: {}", e)))?;

        Ok(())
    }
}
