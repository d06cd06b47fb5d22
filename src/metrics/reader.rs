//! Value readers.
//!
//! A reader fetches one raw fact (a sysfs file or the output of a fixed
//! command) and returns a typed value or a [`ReadError`]. Readers never
//! retry; the collector decides what a failure looks like on screen.

use crate::error::{ReadError, ReadResult};
use crate::metrics::data::{AudioReading, WirelessLink};
use crate::metrics::traits::SystemSource;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref SSID_RE: Regex = Regex::new(r"SSID:[ \t]*(.*)").unwrap();
    static ref BITRATE_RE: Regex = Regex::new(r"tx bitrate:\s+(\d+)").unwrap();
    static ref SIGNAL_RE: Regex = Regex::new(r"signal:\s+(-?\d+)").unwrap();
    static ref VOLUME_RE: Regex = Regex::new(r"\[(\d+)%\]").unwrap();
    static ref VOLUME_SWITCH_RE: Regex = Regex::new(r"\[(\d+)%\][^\n]*?\[(on|off)\]").unwrap();
}

/// Read a file and trim surrounding whitespace.
pub async fn read_string(source: &dyn SystemSource, path: &Path) -> ReadResult<String> {
    source
        .read_file(path)
        .await
        .map(|raw| raw.trim().to_string())
        .map_err(|e| ReadError::unavailable(path.display().to_string(), e))
}

/// Read a file holding a single integer.
pub async fn read_int(source: &dyn SystemSource, path: &Path) -> ReadResult<i64> {
    let raw = read_string(source, path).await?;
    raw.parse::<i64>()
        .map_err(|e| ReadError::parse_failed(path.display().to_string(), e))
}

/// Run a command and return its standard output; a non-zero exit fails.
pub async fn read_output(source: &dyn SystemSource, command: &[String]) -> ReadResult<String> {
    let (program, args) = split_command(command)?;
    let output = source
        .run(program, args)
        .await
        .map_err(|e| ReadError::unavailable(program, e))?;

    if !output.success {
        return Err(ReadError::unavailable(program, "exited with non-zero status"));
    }
    Ok(output.stdout)
}

/// Run a command and report whether it exited 0.
///
/// Only a failure to run at all is an error.
pub async fn command_succeeds(source: &dyn SystemSource, command: &[String]) -> ReadResult<bool> {
    let (program, args) = split_command(command)?;
    source
        .run(program, args)
        .await
        .map(|output| output.success)
        .map_err(|e| ReadError::unavailable(program, e))
}

/// Query the association details of a wireless interface.
///
/// The network name is required; bit rate and signal fall back to 0 when
/// the driver does not report them.
pub async fn wireless_link(source: &dyn SystemSource, command: &[String]) -> ReadResult<WirelessLink> {
    let out = read_output(source, command).await?;
    parse_wireless_link(&out)
}

/// Query the mixer volume and its on/off switch.
pub async fn volume(source: &dyn SystemSource, command: &[String]) -> ReadResult<AudioReading> {
    let out = read_output(source, command).await?;
    parse_volume(&out)
}

/// Query only the mixer volume percentage.
pub async fn volume_percent(source: &dyn SystemSource, command: &[String]) -> ReadResult<i64> {
    let out = read_output(source, command).await?;
    capture_int(&VOLUME_RE, &out, 1, "volume")
}

pub fn parse_wireless_link(out: &str) -> ReadResult<WirelessLink> {
    let ssid = SSID_RE
        .captures(out)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|ssid| !ssid.is_empty())
        .ok_or_else(|| ReadError::parse_failed("wireless link", "no SSID in output"))?;

    Ok(WirelessLink {
        ssid,
        bitrate: capture_int(&BITRATE_RE, out, 1, "tx bitrate").unwrap_or(0),
        signal: capture_int(&SIGNAL_RE, out, 1, "signal").unwrap_or(0),
    })
}

pub fn parse_volume(out: &str) -> ReadResult<AudioReading> {
    let caps = VOLUME_SWITCH_RE
        .captures(out)
        .ok_or_else(|| ReadError::parse_failed("volume", "no `[NN%] ... [on|off]` in output"))?;

    let percent = caps[1]
        .parse::<i64>()
        .map_err(|e| ReadError::parse_failed("volume", e))?;

    Ok(AudioReading {
        percent,
        muted: &caps[2] == "off",
    })
}

fn capture_int(re: &Regex, text: &str, group: usize, field: &str) -> ReadResult<i64> {
    let raw = re
        .captures(text)
        .and_then(|caps| caps.get(group))
        .ok_or_else(|| ReadError::parse_failed(field, "pattern not found"))?;

    raw.as_str()
        .parse::<i64>()
        .map_err(|e| ReadError::parse_failed(field, e))
}

fn split_command(command: &[String]) -> ReadResult<(&str, &[String])> {
    command
        .split_first()
        .map(|(program, args)| (program.as_str(), args))
        .ok_or_else(|| ReadError::unavailable("command", "empty command line"))
}
