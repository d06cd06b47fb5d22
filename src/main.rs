//! dwmstat - dwm status line generator binary.
//!
//! Publishes network, battery, audio and clock status to the X root window.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dwmstat::config::ChargeSymbols;
use dwmstat::{
    Aggregator, IconSet, LiveSource, Publisher, Scheduler, StatusConfig, StdoutPublisher,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "dwmstat")]
#[command(about = "Status line generator for dwm")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = "Samples network, battery, audio and time, and publishes them as the X root window name. \
Send SIGUSR1 to refresh immediately; SIGINT or SIGTERM clears the status and exits.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Refresh interval in milliseconds
    #[arg(short, long)]
    interval: Option<u64>,

    /// Network interface to report (repeatable)
    #[arg(long = "interface", value_name = "IFACE")]
    interfaces: Vec<String>,

    /// Battery identifier to report (repeatable)
    #[arg(long = "battery", value_name = "BAT")]
    batteries: Vec<String>,

    /// Icon preset
    #[arg(long, value_enum)]
    icons: Option<IconSet>,

    /// Use `-` for charging and `+` for discharging
    #[arg(long)]
    inverted_charge: bool,

    /// Print status lines to stdout instead of the X root window
    #[arg(long)]
    stdout: bool,

    /// X display to connect to (defaults to $DISPLAY)
    #[arg(long)]
    display: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish status until terminated (default)
    Run,

    /// Print a single status line and exit
    Once,

    /// Print the effective configuration as JSON
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let config = build_config(&cli)?;

    match cli.command.as_ref().unwrap_or(&Commands::Run) {
        Commands::Run => run_command(&cli, config).await,
        Commands::Once => once_command(config).await,
        Commands::Config => config_command(&config),
    }
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    Ok(())
}

/// Defaults, then the configuration file, then command-line overrides.
fn build_config(cli: &Cli) -> Result<StatusConfig> {
    let mut config = match &cli.config {
        Some(path) => StatusConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => StatusConfig::default(),
    };

    if let Some(interval) = cli.interval {
        config = config.with_interval_ms(interval);
    }
    if !cli.interfaces.is_empty() {
        config = config.with_interfaces(cli.interfaces.clone());
    }
    if !cli.batteries.is_empty() {
        config = config.with_batteries(cli.batteries.clone());
    }
    if let Some(icons) = cli.icons {
        config = config.with_icons(icons);
    }
    if cli.inverted_charge {
        config = config.with_charge_symbols(ChargeSymbols::inverted());
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn aggregator_for(config: &StatusConfig) -> Aggregator {
    let source = Arc::new(LiveSource::new(config.command_timeout()));
    Aggregator::from_config(config, source)
}

fn open_publisher(cli: &Cli) -> Result<Box<dyn Publisher + Send>> {
    if cli.stdout {
        info!("publishing to stdout");
        return Ok(Box::new(StdoutPublisher::new()));
    }

    #[cfg(feature = "x11")]
    {
        let publisher = dwmstat::RootWindowPublisher::connect(cli.display.as_deref())
            .context("Cannot open X display")?;
        Ok(Box::new(publisher))
    }

    #[cfg(not(feature = "x11"))]
    {
        anyhow::bail!("built without X11 support; use --stdout")
    }
}

async fn run_command(cli: &Cli, config: StatusConfig) -> Result<()> {
    let publisher = open_publisher(cli)?;

    let (tx, rx) = mpsc::channel(8);
    dwmstat::signals::forward_signals(tx).context("Failed to install signal handlers")?;

    info!(
        interval_ms = config.interval_ms,
        metrics = ?config.metrics,
        "starting dwmstat"
    );

    let scheduler = Scheduler::new(aggregator_for(&config), publisher, config.interval());
    scheduler.run(rx).await?;

    Ok(())
}

async fn once_command(config: StatusConfig) -> Result<()> {
    let line = aggregator_for(&config).status_line().await;
    println!("{}", line);
    Ok(())
}

fn config_command(config: &StatusConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dwmstat::MetricKind;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "dwmstat",
            "--interval",
            "1000",
            "--interface",
            "wlp3s0",
            "--interface",
            "enp0s25",
            "--battery",
            "BAT1",
            "--icons",
            "font-awesome",
            "--stdout",
        ])
        .unwrap();

        assert_eq!(cli.interval, Some(1000));
        assert_eq!(cli.interfaces, vec!["wlp3s0", "enp0s25"]);
        assert_eq!(cli.icons, Some(IconSet::FontAwesome));
        assert!(cli.stdout);
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::try_parse_from(["dwmstat"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.interfaces.is_empty());
        assert!(!cli.inverted_charge);

        let config = build_config(&cli).unwrap();
        assert_eq!(config, StatusConfig::default());
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let cli = Cli::try_parse_from([
            "dwmstat",
            "--battery",
            "BAT0",
            "--battery",
            "BAT1",
            "--inverted-charge",
            "once",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Once)));

        let config = build_config(&cli).unwrap();
        assert_eq!(config.battery.batteries, vec!["BAT0", "BAT1"]);
        assert_eq!(config.battery.symbols.charging, "-");
        assert_eq!(config.metrics[0], MetricKind::Network);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let cli = Cli::try_parse_from(["dwmstat", "--interval", "0"]).unwrap();
        assert!(build_config(&cli).is_err());
    }
}
