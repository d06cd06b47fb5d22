use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dwmstat::{
    config::{LineFormat, MetricKind, StatusConfig},
    metrics::{reader, CommandOutput, SystemSource},
    status::join_fragments,
    Aggregator,
};
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IW_LINK: &str = "Connected to aa:bb:cc:dd:ee:ff (on wlan0)\n\
    \tSSID: home\n\
    \tsignal: -42 dBm\n\
    \ttx bitrate: 130.0 MBit/s\n";

const AMIXER: &str = "Simple mixer control 'Master',0\n\
    \x20 Mono: Playback 65 [75%] [-16.50dB] [on]\n";

/// Canned machine state so the benchmarks measure formatting, not I/O.
struct StaticSource {
    files: HashMap<PathBuf, String>,
}

impl StaticSource {
    fn new() -> Self {
        let mut files = HashMap::new();
        for (path, contents) in [
            ("/bench/net/wlan0/operstate", "up"),
            ("/bench/net/wlan0/wireless", ""),
            ("/bench/net/eth0/operstate", "up"),
            ("/bench/net/eth0/speed", "1000"),
            ("/bench/bat/BAT0/capacity", "57"),
            ("/bench/bat/BAT0/status", "Discharging"),
            ("/bench/bat/BAT1/capacity", "93"),
            ("/bench/bat/BAT1/status", "Charging"),
        ] {
            files.insert(PathBuf::from(path), contents.to_string());
        }
        Self { files }
    }
}

#[async_trait]
impl SystemSource for StaticSource {
    async fn read_file(&self, path: &Path) -> io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    async fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    async fn run(&self, program: &str, _args: &[String]) -> io::Result<CommandOutput> {
        match program {
            "iw" => Ok(CommandOutput::ok(IW_LINK)),
            "amixer" => Ok(CommandOutput::ok(AMIXER)),
            _ => Err(io::Error::from(io::ErrorKind::NotFound)),
        }
    }
}

fn bench_config() -> StatusConfig {
    let mut config = StatusConfig::default()
        .with_interfaces(vec!["wlan0".to_string(), "eth0".to_string()])
        .with_batteries(vec!["BAT0".to_string(), "BAT1".to_string()]);
    config.network.sysfs_root = PathBuf::from("/bench/net");
    config.battery.sysfs_root = PathBuf::from("/bench/bat");
    config
}

/// Benchmark a full status line over canned readings
fn bench_status_line(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Should create tokio runtime");
    let aggregator = Aggregator::from_config(&bench_config(), Arc::new(StaticSource::new()));

    c.bench_function("status_line", |b| {
        b.to_async(&rt).iter(|| aggregator.status_line())
    });
}

/// Benchmark each metric on its own
fn bench_single_metric(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("Should create tokio runtime");

    for kind in [
        MetricKind::Network,
        MetricKind::Battery,
        MetricKind::Audio,
        MetricKind::Time,
    ] {
        let config = bench_config().with_metrics(vec![kind]);
        let aggregator = Aggregator::from_config(&config, Arc::new(StaticSource::new()));

        c.bench_with_input(BenchmarkId::new("metric", kind.name()), &aggregator, |b, agg| {
            b.to_async(&rt).iter(|| agg.status_line())
        });
    }
}

/// Benchmark command output parsing
fn bench_output_parsing(c: &mut Criterion) {
    c.bench_function("parse_wireless_link", |b| {
        b.iter(|| reader::parse_wireless_link(IW_LINK).expect("Should parse iw output"))
    });

    c.bench_function("parse_volume", |b| {
        b.iter(|| reader::parse_volume(AMIXER).expect("Should parse amixer output"))
    });
}

/// Benchmark joining with omitted fragments
fn bench_join(c: &mut Criterion) {
    let fragments = ["ωhome/130/-42 ε1000", "", "β57-/93+", "ν75", "τ03/09-07:05"];
    let format = LineFormat {
        separator: " | ".to_string(),
        ..LineFormat::default()
    };

    c.bench_function("join_fragments", |b| b.iter(|| join_fragments(&fragments, &format)));
}

criterion_group!(
    benches,
    bench_status_line,
    bench_single_metric,
    bench_output_parsing,
    bench_join
);

criterion_main!(benches);
