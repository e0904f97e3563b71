//! Hisense AirCon Bridge CLI
//!
//! Command-line harness for the bridge: runs the poll loop as a daemon or
//! fires one-shot status/command calls against the AirCon service.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use hisense_aircon::adapter::StatusCommandAdapter;
use hisense_aircon::config::{self, AdapterSettings};
use hisense_aircon::registry::{InMemoryRegistry, Slot};
use hisense_aircon::utils::parsing::{parse_power, parse_work_mode};

/// Cadence at which the run loop invokes the heartbeat entry point. The
/// adapter itself decides whether a tick actually polls.
const HEARTBEAT_PERIOD: Duration = Duration::from_secs(10);

// =============================================================================
// CLI Arguments
// =============================================================================

/// Hisense AirCon Bridge
#[derive(Parser, Debug)]
#[command(name = "hisense-aircon-cli")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// AirCon server address (host[:port])
    #[arg(short, long)]
    server: Option<String>,

    /// Refresh interval in minutes
    #[arg(short, long)]
    interval: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the bridge until Ctrl+C, polling the AirCon server on a timer
    Run,

    /// Poll the AirCon server once and show all device slots
    Status,

    /// Switch the unit on or off
    Power {
        /// "on" or "off"
        state: String,
    },

    /// Select the working mode
    Mode {
        /// off, fan, heat, cool, dry or auto
        mode: String,
    },

    /// Set the target temperature
    Temp {
        /// Target temperature in Celsius
        value: f64,
    },

    /// Write the effective settings to the settings file
    Init,
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = config::load_settings().context("Failed to load settings")?;
    if let Some(server) = args.server {
        settings.server = server;
    }
    if let Some(interval) = args.interval {
        settings.poll_minutes = interval;
    }
    if args.debug {
        settings.debug = true;
    }

    init_logging(&settings);

    match args.command {
        Command::Run => cmd_run(&settings),
        Command::Status => cmd_status(&settings),
        Command::Power { state } => cmd_power(&settings, &state),
        Command::Mode { mode } => cmd_mode(&settings, &mode),
        Command::Temp { value } => cmd_temp(&settings, value),
        Command::Init => cmd_init(&settings),
    }
}

fn init_logging(settings: &AdapterSettings) {
    let default_level = if settings.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn build_adapter(settings: &AdapterSettings) -> Result<StatusCommandAdapter> {
    StatusCommandAdapter::new(settings).context("Failed to build HTTP client")
}

// =============================================================================
// Command Implementations
// =============================================================================

fn cmd_run(settings: &AdapterSettings) -> Result<()> {
    let mut adapter = build_adapter(settings)?;
    let mut registry = InMemoryRegistry::new();

    // Setup Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();

    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl+C handler")?;

    adapter.on_start(&mut registry);
    println!(
        "🌡️  Bridging AirCon at {} every {} min (Ctrl+C to stop)...",
        settings.server, settings.poll_minutes
    );

    while running.load(Ordering::SeqCst) {
        adapter.on_heartbeat(&mut registry);
        std::thread::sleep(HEARTBEAT_PERIOD);
    }

    println!("\n👋 Bridge stopped.");
    Ok(())
}

fn cmd_status(settings: &AdapterSettings) -> Result<()> {
    let mut adapter = build_adapter(settings)?;
    let mut registry = InMemoryRegistry::new();

    // One-shot: skip the start-up probe, poll immediately
    adapter.ensure_devices(&mut registry);
    adapter.on_heartbeat(&mut registry);

    println!("AirCon slots ({}):", settings.server);
    for (unit, slot) in registry.iter() {
        println!(
            "  [{}] {:<17} nValue={:<3} sValue=\"{}\"",
            unit, slot.name, slot.n_value, slot.s_value
        );
    }
    Ok(())
}

fn cmd_power(settings: &AdapterSettings, state: &str) -> Result<()> {
    let power = parse_power(state)?;

    let mut adapter = build_adapter(settings)?;
    let mut registry = InMemoryRegistry::new();
    adapter.ensure_devices(&mut registry);
    adapter.on_command(&mut registry, Slot::Power.unit(), power.value(), 0.0);

    println!("✅ Power set to {}", power.s_value());
    Ok(())
}

fn cmd_mode(settings: &AdapterSettings, mode: &str) -> Result<()> {
    let mode = parse_work_mode(mode)?;

    let mut adapter = build_adapter(settings)?;
    let mut registry = InMemoryRegistry::new();
    adapter.ensure_devices(&mut registry);
    adapter.on_command(
        &mut registry,
        Slot::Mode.unit(),
        "Set Level",
        f64::from(mode.level()),
    );

    println!("✅ Mode set to {}", mode.label());
    Ok(())
}

fn cmd_temp(settings: &AdapterSettings, value: f64) -> Result<()> {
    let mut adapter = build_adapter(settings)?;
    let mut registry = InMemoryRegistry::new();
    adapter.ensure_devices(&mut registry);
    adapter.on_command(&mut registry, Slot::TargetTemp.unit(), "Set Level", value);

    println!("✅ Target temperature set to {value}°C");
    Ok(())
}

fn cmd_init(settings: &AdapterSettings) -> Result<()> {
    config::save_settings(settings).context("Failed to save settings")?;
    println!(
        "✅ Settings written to {}",
        config::settings_path()
            .context("Failed to resolve settings path")?
            .display()
    );
    Ok(())
}
