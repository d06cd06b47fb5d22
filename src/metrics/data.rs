//! Typed readings produced by the value readers.
//!
//! Every reading is recomputed on each tick and dropped once the fragment
//! is rendered.

use std::fmt;

/// Captured result of one external command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Whether the process exited with status 0
    pub success: bool,
    /// Standard output, lossily decoded
    pub stdout: String,
}

impl CommandOutput {
    /// Output of a command that exited 0.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
        }
    }

    /// Output of a command that exited non-zero.
    pub fn failed() -> Self {
        Self {
            success: false,
            stdout: String::new(),
        }
    }
}

/// Physical kind of a network interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Wireless,
    Wired,
}

/// Operational state of an interface as reported by `operstate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Up,
    Down,
}

impl LinkState {
    /// Anything other than `up` counts as down.
    pub fn from_operstate(raw: &str) -> Self {
        if raw == "up" {
            LinkState::Up
        } else {
            LinkState::Down
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, LinkState::Up)
    }
}

/// Association details of a wireless interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessLink {
    /// Network name
    pub ssid: String,
    /// Transmit bit rate in MBit/s, 0 when not reported
    pub bitrate: i64,
    /// Signal strength in dBm, 0 when not reported
    pub signal: i64,
}

/// Battery charge state from the `status` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChargeState {
    Charging,
    Discharging,
    Full,
    NotCharging,
    Unknown,
}

impl ChargeState {
    /// Map the kernel's status string; unrecognised values are `Unknown`.
    pub fn from_status(raw: &str) -> Self {
        match raw {
            "Charging" => ChargeState::Charging,
            "Discharging" => ChargeState::Discharging,
            "Full" => ChargeState::Full,
            "Not charging" => ChargeState::NotCharging,
            _ => ChargeState::Unknown,
        }
    }
}

impl fmt::Display for ChargeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChargeState::Charging => "Charging",
            ChargeState::Discharging => "Discharging",
            ChargeState::Full => "Full",
            ChargeState::NotCharging => "Not charging",
            ChargeState::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// One battery's capacity and charge state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryReading {
    /// Capacity percentage
    pub percent: i64,
    pub state: ChargeState,
}

/// Mixer volume and mute flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioReading {
    /// Volume percentage
    pub percent: i64,
    pub muted: bool,
}
