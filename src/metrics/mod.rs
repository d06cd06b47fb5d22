//! Metric collection: value readers, typed readings and collectors.
//!
//! Readers sample one sysfs file or one command output. Collectors combine
//! readers for a named metric and render a display fragment, absorbing any
//! read failure on the way.

pub mod collector;
pub mod data;
pub mod reader;
pub mod source;
pub mod traits;

// Re-export commonly used items
pub use collector::{
    build_collector, AudioCollector, BatteryCollector, NetworkCollector, TimeCollector,
};
pub use data::{AudioReading, BatteryReading, ChargeState, CommandOutput, LinkState, WirelessLink};
pub use source::LiveSource;
pub use traits::{Collector, SystemSource};
