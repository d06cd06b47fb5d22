//! Metric collectors: network, battery, audio and clock.

use crate::config::{
    AudioConfig, AudioFormat, BatteryConfig, MetricKind, NetworkConfig, StatusConfig, TimeConfig,
    WifiFormat, WiredFormat,
};
use crate::error::ReadResult;
use crate::metrics::data::*;
use crate::metrics::reader;
use crate::metrics::traits::{Collector, SystemSource};
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};
use tracing::debug;

/// Build the collector for one configured metric.
pub fn build_collector(kind: MetricKind, config: &StatusConfig) -> Box<dyn Collector> {
    match kind {
        MetricKind::Network => Box::new(NetworkCollector::new(config.network.clone())),
        MetricKind::Battery => Box::new(BatteryCollector::new(
            config.battery.clone(),
            config.unknown.clone(),
        )),
        MetricKind::Audio => Box::new(AudioCollector::new(
            config.audio.clone(),
            config.unknown.clone(),
        )),
        MetricKind::Time => Box::new(TimeCollector::new(
            config.time.clone(),
            config.unknown.clone(),
        )),
    }
}

/// Reports each configured interface that is up.
///
/// A down interface, or one whose details cannot be read, contributes
/// nothing; when every interface is omitted the fragment is empty.
pub struct NetworkCollector {
    config: NetworkConfig,
}

impl NetworkCollector {
    pub fn new(config: NetworkConfig) -> Self {
        Self { config }
    }

    /// Render an associated wireless interface.
    pub fn render_wireless(&self, state: LinkState, link: &WirelessLink) -> String {
        if !state.is_up() {
            return String::new();
        }
        match self.config.wifi_format {
            WifiFormat::Full => format!(
                "{}{}/{}/{}",
                self.config.wifi_icon, link.ssid, link.bitrate, link.signal
            ),
            WifiFormat::Ssid => format!("{}{}", self.config.wifi_icon, link.ssid),
        }
    }

    /// Render a wired interface with its negotiated speed in Mb/s.
    pub fn render_wired(&self, state: LinkState, speed: i64) -> String {
        if !state.is_up() {
            return String::new();
        }
        match self.config.wired_format {
            WiredFormat::Speed => format!("{}{}", self.config.wired_icon, speed),
            WiredFormat::Bare => self.config.wired_icon.clone(),
        }
    }

    async fn link_kind(&self, source: &dyn SystemSource, iface: &str) -> LinkKind {
        let marker = self.config.sysfs_root.join(iface).join("wireless");
        if source.exists(&marker).await {
            LinkKind::Wireless
        } else {
            LinkKind::Wired
        }
    }

    async fn link_state(&self, source: &dyn SystemSource, iface: &str) -> LinkState {
        let path = self.config.sysfs_root.join(iface).join("operstate");
        match reader::read_string(source, &path).await {
            Ok(raw) => LinkState::from_operstate(&raw),
            Err(err) => {
                debug!(iface, %err, "treating interface as down");
                LinkState::Down
            }
        }
    }

    async fn interface_fragment(&self, source: &dyn SystemSource, iface: &str) -> String {
        let state = self.link_state(source, iface).await;
        if !state.is_up() {
            return String::new();
        }

        let fragment = match self.link_kind(source, iface).await {
            LinkKind::Wireless => {
                let command = self.config.link_command_for(iface);
                reader::wireless_link(source, &command)
                    .await
                    .map(|link| self.render_wireless(state, &link))
            }
            LinkKind::Wired => {
                let path = self.config.sysfs_root.join(iface).join("speed");
                reader::read_int(source, &path)
                    .await
                    .map(|speed| self.render_wired(state, speed))
            }
        };

        fragment.unwrap_or_else(|err| {
            debug!(iface, %err, "omitting interface");
            String::new()
        })
    }
}

#[async_trait]
impl Collector for NetworkCollector {
    fn kind(&self) -> MetricKind {
        MetricKind::Network
    }

    async fn fragment(&self, source: &dyn SystemSource) -> String {
        let mut parts = Vec::with_capacity(self.config.interfaces.len());
        for iface in &self.config.interfaces {
            let part = self.interface_fragment(source, iface).await;
            if !part.is_empty() {
                parts.push(part);
            }
        }
        parts.join(&self.config.separator)
    }
}

/// Reports capacity and charge state of each configured battery.
pub struct BatteryCollector {
    config: BatteryConfig,
    unknown: String,
}

impl BatteryCollector {
    pub fn new(config: BatteryConfig, unknown: String) -> Self {
        Self { config, unknown }
    }

    fn symbol(&self, state: &ChargeState) -> &str {
        let symbols = &self.config.symbols;
        match state {
            ChargeState::Charging => &symbols.charging,
            ChargeState::Discharging => &symbols.discharging,
            ChargeState::Full => &symbols.full,
            ChargeState::NotCharging => &symbols.not_charging,
            ChargeState::Unknown => &symbols.unknown,
        }
    }

    /// Render one battery, without the collector icon.
    pub fn render_battery(&self, reading: &BatteryReading) -> String {
        format!("{}{}", reading.percent, self.symbol(&reading.state))
    }

    /// Join per-battery parts and prefix the icon.
    pub fn render(&self, parts: &[String]) -> String {
        if parts.is_empty() {
            return String::new();
        }
        format!("{}{}", self.config.icon, parts.join(&self.config.separator))
    }

    async fn read_battery(&self, source: &dyn SystemSource, id: &str) -> ReadResult<BatteryReading> {
        let dir = self.config.sysfs_root.join(id);
        let percent = reader::read_int(source, &dir.join("capacity")).await?;
        let status = reader::read_string(source, &dir.join("status")).await?;
        Ok(BatteryReading {
            percent,
            state: ChargeState::from_status(&status),
        })
    }
}

#[async_trait]
impl Collector for BatteryCollector {
    fn kind(&self) -> MetricKind {
        MetricKind::Battery
    }

    async fn fragment(&self, source: &dyn SystemSource) -> String {
        let mut parts = Vec::with_capacity(self.config.batteries.len());
        for id in &self.config.batteries {
            let part = match self.read_battery(source, id).await {
                Ok(reading) => self.render_battery(&reading),
                Err(err) => {
                    debug!(battery = %id, %err, "battery reading unavailable");
                    self.unknown.clone()
                }
            };
            parts.push(part);
        }
        self.render(&parts)
    }
}

/// Reports mixer volume, switching icons when muted.
pub struct AudioCollector {
    config: AudioConfig,
    unknown: String,
}

impl AudioCollector {
    pub fn new(config: AudioConfig, unknown: String) -> Self {
        Self { config, unknown }
    }

    pub fn render(&self, reading: &AudioReading) -> String {
        let icon = if reading.muted {
            &self.config.mute_icon
        } else {
            &self.config.volume_icon
        };
        match self.config.format {
            AudioFormat::Percent => format!("{}{}", icon, reading.percent),
            AudioFormat::IconOnly => icon.clone(),
        }
    }

    async fn read(&self, source: &dyn SystemSource) -> ReadResult<AudioReading> {
        match &self.config.mute_command {
            Some(mute_command) => {
                let percent = reader::volume_percent(source, &self.config.volume_command).await?;
                let muted = reader::command_succeeds(source, mute_command).await?;
                Ok(AudioReading { percent, muted })
            }
            None => reader::volume(source, &self.config.volume_command).await,
        }
    }
}

#[async_trait]
impl Collector for AudioCollector {
    fn kind(&self) -> MetricKind {
        MetricKind::Audio
    }

    async fn fragment(&self, source: &dyn SystemSource) -> String {
        match self.read(source).await {
            Ok(reading) => self.render(&reading),
            Err(err) => {
                debug!(%err, "audio reading unavailable");
                self.unknown.clone()
            }
        }
    }
}

/// Reports the local wall-clock time.
pub struct TimeCollector {
    config: TimeConfig,
    unknown: String,
}

impl TimeCollector {
    pub fn new(config: TimeConfig, unknown: String) -> Self {
        Self { config, unknown }
    }

    /// Render `now` with the configured icon and layout.
    pub fn render<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = self.config.icon.clone();
        // Layouts are checked by StatusConfig::validate; this only guards
        // configurations built without it.
        if write!(out, "{}", now.format(&self.config.layout)).is_err() {
            return self.unknown.clone();
        }
        out
    }
}

#[async_trait]
impl Collector for TimeCollector {
    fn kind(&self) -> MetricKind {
        MetricKind::Time
    }

    async fn fragment(&self, _source: &dyn SystemSource) -> String {
        self.render(&Local::now())
    }
}
