//! Icon and symbol presets.
//!
//! Deployments disagree on glyphs and on which of `+`/`-` means charging,
//! so these are startup choices rather than fixed behaviour.

use super::StatusConfig;
use serde::{Deserialize, Serialize};

/// A complete set of metric icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum IconSet {
    /// Single Greek letters, readable in any font
    #[default]
    Greek,
    /// FontAwesome private-use glyphs
    FontAwesome,
}

struct Icons {
    wifi: &'static str,
    wired: &'static str,
    battery: &'static str,
    volume: &'static str,
    mute: &'static str,
    time: &'static str,
}

impl IconSet {
    fn icons(&self) -> Icons {
        match self {
            IconSet::Greek => Icons {
                wifi: "ω",
                wired: "ε",
                battery: "β",
                volume: "ν",
                mute: "μ",
                time: "τ",
            },
            IconSet::FontAwesome => Icons {
                wifi: "\u{f1eb}",
                wired: "\u{f0e8}",
                battery: "\u{f240}",
                volume: "\u{f028}",
                mute: "\u{f026}",
                time: "\u{f017}",
            },
        }
    }

    /// Overwrite every icon in `config` with this preset.
    pub fn apply(&self, config: &mut StatusConfig) {
        let icons = self.icons();
        config.network.wifi_icon = icons.wifi.to_string();
        config.network.wired_icon = icons.wired.to_string();
        config.battery.icon = icons.battery.to_string();
        config.audio.volume_icon = icons.volume.to_string();
        config.audio.mute_icon = icons.mute.to_string();
        config.time.icon = icons.time.to_string();
    }
}

/// Suffix appended to a battery percentage for each charge state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChargeSymbols {
    pub charging: String,
    pub discharging: String,
    pub full: String,
    pub not_charging: String,
    /// Used for `Unknown` and for states the kernel reports that we do not know
    pub unknown: String,
}

impl Default for ChargeSymbols {
    fn default() -> Self {
        Self::standard()
    }
}

impl ChargeSymbols {
    /// `+` while charging, `-` while discharging.
    pub fn standard() -> Self {
        Self {
            charging: "+".to_string(),
            discharging: "-".to_string(),
            full: String::new(),
            not_charging: String::new(),
            unknown: String::new(),
        }
    }

    /// `-` while charging, `+` while discharging.
    pub fn inverted() -> Self {
        Self {
            charging: "-".to_string(),
            discharging: "+".to_string(),
            ..Self::standard()
        }
    }
}
