//! Status line aggregation and refresh scheduling.

pub mod aggregator;
pub mod format;
pub mod scheduler;

pub use aggregator::Aggregator;
pub use format::join_fragments;
pub use scheduler::{Control, Scheduler};
