//! # dwmstat - dwm status line generator
//!
//! Periodically samples a few local machine metrics, renders them into a
//! single line and publishes it as the X root window name, where dwm shows
//! it in its bar.
//!
//! ## Pipeline
//!
//! - **Value readers** read one sysfs file or one command output.
//! - **Collectors** (network, battery, audio, time) render a fragment each.
//! - The **aggregator** drops empty fragments, joins and wraps the rest.
//! - The **scheduler** publishes on startup, on every tick and on demand,
//!   and clears the display on shutdown.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dwmstat::{Aggregator, LiveSource, StatusConfig, StdoutPublisher, Scheduler};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = StatusConfig::default();
//!     let source = Arc::new(LiveSource::new(config.command_timeout()));
//!     let aggregator = Aggregator::from_config(&config, source);
//!
//!     let (tx, rx) = tokio::sync::mpsc::channel(8);
//!     dwmstat::signals::forward_signals(tx)?;
//!     Scheduler::new(aggregator, StdoutPublisher::new(), config.interval())
//!         .run(rx)
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod publish;
pub mod signals;
pub mod status;

// Re-export public API
pub use config::{IconSet, LineFormat, MetricKind, StatusConfig};
pub use error::{ReadError, Result, StatusError};
pub use metrics::{Collector, LiveSource, SystemSource};
pub use publish::{Publisher, StdoutPublisher};
pub use status::{Aggregator, Control, Scheduler};

#[cfg(feature = "x11")]
pub use publish::RootWindowPublisher;

/// The default refresh interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;

/// The default upper bound on a single external command in milliseconds
pub const DEFAULT_COMMAND_TIMEOUT_MS: u64 = 2_000;
