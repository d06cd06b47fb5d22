//! Status line configuration.
//!
//! One immutable [`StatusConfig`] value is built at startup (defaults, an
//! optional JSON file, then CLI overrides) and handed to the aggregator and
//! scheduler. Nothing reads configuration from process-wide state.

pub mod presets;

pub use presets::{ChargeSymbols, IconSet};

use crate::error::{Result, StatusError};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The metrics a status line can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Network,
    Battery,
    Audio,
    Time,
}

impl MetricKind {
    /// Name used in logs and configuration.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Network => "network",
            MetricKind::Battery => "battery",
            MetricKind::Audio => "audio",
            MetricKind::Time => "time",
        }
    }
}

/// How non-empty fragments are joined and wrapped into the status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineFormat {
    /// Placed between two non-empty fragments
    pub separator: String,
    /// Placed before the joined fragments
    pub prefix: String,
    /// Placed after the joined fragments
    pub suffix: String,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            prefix: " ".to_string(),
            suffix: " ".to_string(),
        }
    }
}

/// Rendering of an associated wireless interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WifiFormat {
    /// `<icon><ssid>/<bitrate>/<signal>`
    #[default]
    Full,
    /// `<icon><ssid>`
    Ssid,
}

/// Rendering of a wired interface that is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiredFormat {
    /// `<icon><speed>`
    #[default]
    Speed,
    /// `<icon>` only
    Bare,
}

/// Rendering of the audio volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioFormat {
    /// `<icon><percent>`
    #[default]
    Percent,
    /// `<icon>` only, still switching between volume and mute icons
    IconOnly,
}

/// Network collector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Interfaces to report, in display order
    pub interfaces: Vec<String>,
    /// Directory holding one entry per interface (`operstate`, `speed`, `wireless`)
    pub sysfs_root: PathBuf,
    pub wifi_icon: String,
    pub wired_icon: String,
    pub wifi_format: WifiFormat,
    pub wired_format: WiredFormat,
    /// Placed between the fragments of two interfaces
    pub separator: String,
    /// Wireless link query; `{iface}` is replaced by the interface name
    pub link_command: Vec<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            interfaces: vec!["wlan0".to_string(), "eth0".to_string()],
            sysfs_root: PathBuf::from("/sys/class/net"),
            wifi_icon: "ω".to_string(),
            wired_icon: "ε".to_string(),
            wifi_format: WifiFormat::default(),
            wired_format: WiredFormat::default(),
            separator: " ".to_string(),
            link_command: ["iw", "dev", "{iface}", "link"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl NetworkConfig {
    /// Link query for one interface, with the placeholder substituted.
    pub fn link_command_for(&self, iface: &str) -> Vec<String> {
        self.link_command
            .iter()
            .map(|arg| arg.replace("{iface}", iface))
            .collect()
    }
}

/// Battery collector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Battery identifiers, in display order
    pub batteries: Vec<String>,
    /// Directory holding one entry per battery (`capacity`, `status`)
    pub sysfs_root: PathBuf,
    pub icon: String,
    /// Placed between the fragments of two batteries
    pub separator: String,
    pub symbols: ChargeSymbols,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            batteries: vec!["BAT0".to_string()],
            sysfs_root: PathBuf::from("/sys/class/power_supply"),
            icon: "β".to_string(),
            separator: "/".to_string(),
            symbols: ChargeSymbols::standard(),
        }
    }
}

/// Audio collector configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Mixer query whose output carries `[NN%]` and `[on]`/`[off]`
    pub volume_command: Vec<String>,
    /// Optional command that exits 0 iff the output is muted
    pub mute_command: Option<Vec<String>>,
    pub volume_icon: String,
    pub mute_icon: String,
    pub format: AudioFormat,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            volume_command: ["amixer", "get", "Master"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            mute_command: None,
            volume_icon: "ν".to_string(),
            mute_icon: "μ".to_string(),
            format: AudioFormat::default(),
        }
    }
}

/// Clock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub icon: String,
    /// strftime layout
    pub layout: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            icon: "τ".to_string(),
            layout: "%m/%d-%H:%M".to_string(),
        }
    }
}

/// Complete configuration for one dwmstat process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Refresh period in milliseconds
    pub interval_ms: u64,
    /// Upper bound on any single external command, in milliseconds
    pub command_timeout_ms: u64,
    /// Active metrics in display order
    pub metrics: Vec<MetricKind>,
    pub line: LineFormat,
    /// Substituted when a battery or audio reading fails
    pub unknown: String,
    pub network: NetworkConfig,
    pub battery: BatteryConfig,
    pub audio: AudioConfig,
    pub time: TimeConfig,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            interval_ms: crate::DEFAULT_INTERVAL_MS,
            command_timeout_ms: crate::DEFAULT_COMMAND_TIMEOUT_MS,
            metrics: vec![
                MetricKind::Network,
                MetricKind::Battery,
                MetricKind::Audio,
                MetricKind::Time,
            ],
            line: LineFormat::default(),
            unknown: "?".to_string(),
            network: NetworkConfig::default(),
            battery: BatteryConfig::default(),
            audio: AudioConfig::default(),
            time: TimeConfig::default(),
        }
    }
}

impl StatusConfig {
    /// Load a configuration file, falling back to defaults for missing keys.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            StatusError::config_error(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    /// Parse a JSON configuration document.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: StatusConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Set the refresh period.
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Set the active metrics and their order.
    pub fn with_metrics(mut self, metrics: Vec<MetricKind>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the monitored network interfaces.
    pub fn with_interfaces(mut self, interfaces: Vec<String>) -> Self {
        self.network.interfaces = interfaces;
        self
    }

    /// Set the monitored batteries.
    pub fn with_batteries(mut self, batteries: Vec<String>) -> Self {
        self.battery.batteries = batteries;
        self
    }

    /// Set the overall join/wrap formatting.
    pub fn with_line_format(mut self, line: LineFormat) -> Self {
        self.line = line;
        self
    }

    /// Replace every metric icon with one preset.
    pub fn with_icons(mut self, icons: IconSet) -> Self {
        icons.apply(&mut self);
        self
    }

    /// Set the battery charge-state symbols.
    pub fn with_charge_symbols(mut self, symbols: ChargeSymbols) -> Self {
        self.battery.symbols = symbols;
        self
    }

    /// Refresh period as a [`Duration`].
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Command timeout as a [`Duration`].
    pub fn command_timeout(&self) -> Duration {
        Duration::from_millis(self.command_timeout_ms)
    }

    /// Check values that would otherwise only fail once the loop is running.
    pub fn validate(&self) -> Result<()> {
        if self.interval_ms == 0 {
            return Err(StatusError::config_error("interval_ms must be greater than 0"));
        }
        if self.command_timeout_ms == 0 {
            return Err(StatusError::config_error(
                "command_timeout_ms must be greater than 0",
            ));
        }
        if self.metrics.is_empty() {
            return Err(StatusError::config_error("at least one metric must be enabled"));
        }

        let mut seen = HashSet::new();
        for metric in &self.metrics {
            if !seen.insert(metric) {
                return Err(StatusError::config_error(format!(
                    "metric '{}' is listed more than once",
                    metric.name()
                )));
            }
        }

        if self.network.link_command.is_empty() {
            return Err(StatusError::config_error("network.link_command is empty"));
        }
        if self.audio.volume_command.is_empty() {
            return Err(StatusError::config_error("audio.volume_command is empty"));
        }
        if matches!(&self.audio.mute_command, Some(cmd) if cmd.is_empty()) {
            return Err(StatusError::config_error("audio.mute_command is empty"));
        }
        if StrftimeItems::new(&self.time.layout).any(|item| matches!(item, Item::Error)) {
            return Err(StatusError::config_error(format!(
                "invalid time layout '{}'",
                self.time.layout
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = StatusConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.metrics.len(), 4);
        assert_eq!(config.metrics[0], MetricKind::Network);
        assert_eq!(config.metrics[3], MetricKind::Time);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = StatusConfig::from_json(
            r#"{ "interval_ms": 1000, "battery": { "batteries": ["BAT0", "BAT1"] } }"#,
        )
        .unwrap();

        assert_eq!(config.interval_ms, 1000);
        assert_eq!(config.battery.batteries, vec!["BAT0", "BAT1"]);
        assert_eq!(config.battery.separator, "/");
        assert_eq!(config.unknown, "?");
        assert_eq!(config.network, NetworkConfig::default());
    }

    #[test]
    fn test_metric_order_from_json() {
        let config = StatusConfig::from_json(r#"{ "metrics": ["time", "audio"] }"#).unwrap();
        assert_eq!(config.metrics, vec![MetricKind::Time, MetricKind::Audio]);
    }

    #[test]
    fn test_unknown_metric_is_rejected() {
        let err = StatusConfig::from_json(r#"{ "metrics": ["cpu"] }"#).unwrap_err();
        assert!(matches!(err, StatusError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = StatusConfig::default().with_interval_ms(0);
        assert!(matches!(zero.validate(), Err(StatusError::Config(_))));

        let empty = StatusConfig::default().with_metrics(Vec::new());
        assert!(empty.validate().is_err());

        let duplicate =
            StatusConfig::default().with_metrics(vec![MetricKind::Time, MetricKind::Time]);
        let msg = duplicate.validate().unwrap_err().to_string();
        assert!(msg.contains("time"));

        let mut layout = StatusConfig::default();
        layout.time.layout = "%Q".to_string();
        assert!(layout.validate().is_err());

        let mut mute = StatusConfig::default();
        mute.audio.mute_command = Some(Vec::new());
        assert!(mute.validate().is_err());
    }

    #[test]
    fn test_link_command_substitution() {
        let network = NetworkConfig::default();
        assert_eq!(
            network.link_command_for("wlp3s0"),
            vec!["iw", "dev", "wlp3s0", "link"]
        );
    }

    #[test]
    fn test_builder_methods() {
        let config = StatusConfig::default()
            .with_interval_ms(250)
            .with_interfaces(vec!["enp0s25".to_string()])
            .with_batteries(Vec::new())
            .with_charge_symbols(ChargeSymbols::inverted());

        assert_eq!(config.interval(), Duration::from_millis(250));
        assert_eq!(config.network.interfaces, vec!["enp0s25"]);
        assert!(config.battery.batteries.is_empty());
        assert_eq!(config.battery.symbols.charging, "-");
    }
}
