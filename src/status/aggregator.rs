//! The aggregator: runs collectors in order and builds the status line.

use crate::config::{LineFormat, StatusConfig};
use crate::metrics::collector::build_collector;
use crate::metrics::traits::{Collector, SystemSource};
use crate::status::format::join_fragments;
use std::sync::Arc;
use tracing::{debug, trace};

/// Runs the configured collectors strictly one after another.
///
/// Holds no state between calls: the same machine state always produces
/// the same line.
pub struct Aggregator {
    collectors: Vec<Box<dyn Collector>>,
    format: LineFormat,
    source: Arc<dyn SystemSource>,
}

impl Aggregator {
    /// Build one collector per configured metric, in configured order.
    pub fn from_config(config: &StatusConfig, source: Arc<dyn SystemSource>) -> Self {
        let collectors = config
            .metrics
            .iter()
            .map(|kind| build_collector(*kind, config))
            .collect();
        Self::new(collectors, config.line.clone(), source)
    }

    /// Use an explicit collector list.
    pub fn new(
        collectors: Vec<Box<dyn Collector>>,
        format: LineFormat,
        source: Arc<dyn SystemSource>,
    ) -> Self {
        Self {
            collectors,
            format,
            source,
        }
    }

    /// Number of active collectors.
    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    /// Whether no metric is configured.
    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Render every collector's fragment for this tick.
    pub async fn fragments(&self) -> Vec<String> {
        let mut fragments = Vec::with_capacity(self.collectors.len());
        for collector in &self.collectors {
            let fragment = collector.fragment(self.source.as_ref()).await;
            trace!(metric = collector.kind().name(), %fragment, "collected");
            fragments.push(fragment);
        }
        fragments
    }

    /// Produce the status line for this tick.
    pub async fn status_line(&self) -> String {
        let line = join_fragments(&self.fragments().await, &self.format);
        debug!(%line, "status line");
        line
    }
}
