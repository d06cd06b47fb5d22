//! The refresh scheduler.
//!
//! Publishes once at startup, then on every period tick and on every
//! [`Control::Refresh`], until [`Control::Terminate`] arrives or every
//! control sender is dropped. The display is cleared on the way out.

use crate::error::{Result, StatusError};
use crate::publish::Publisher;
use crate::status::aggregator::Aggregator;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// External requests handled between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Publish now without moving the periodic schedule
    Refresh,
    /// Clear the display and stop
    Terminate,
}

/// Drives aggregation and publishing.
pub struct Scheduler<P> {
    aggregator: Aggregator,
    publisher: P,
    period: Duration,
}

impl<P: Publisher> Scheduler<P> {
    pub fn new(aggregator: Aggregator, publisher: P, period: Duration) -> Self {
        Self {
            aggregator,
            publisher,
            period,
        }
    }

    /// Aggregate and publish once. A publish failure is logged, never fatal.
    async fn update(&mut self, reason: &'static str) {
        let line = self.aggregator.status_line().await;
        match self.publisher.publish(&line) {
            Ok(()) => debug!(reason, "status published"),
            Err(err) => warn!(reason, %err, "failed to publish status"),
        }
    }

    /// Run until terminated, then clear the display.
    ///
    /// Returns the publisher so callers can inspect or reuse it. A zero
    /// period is rejected before anything is published.
    pub async fn run(mut self, mut control: mpsc::Receiver<Control>) -> Result<P> {
        if self.period.is_zero() {
            return Err(StatusError::config_error("scheduler period must be greater than 0"));
        }

        info!(
            period_ms = self.period.as_millis() as u64,
            metrics = self.aggregator.len(),
            "scheduler starting"
        );

        self.update("startup").await;

        let mut ticker = time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        // The first tick completes immediately; startup already published.
        ticker.tick().await;

        loop {
            tokio::select! {
                biased;

                request = control.recv() => match request {
                    Some(Control::Refresh) => self.update("refresh").await,
                    Some(Control::Terminate) => {
                        info!("terminate requested");
                        break;
                    }
                    None => {
                        info!("control channel closed");
                        break;
                    }
                },

                _ = ticker.tick() => self.update("tick").await,
            }
        }

        self.publisher.clear()?;
        info!("scheduler stopped, status cleared");
        Ok(self.publisher)
    }
}
