//! ThermoWatch — binary entry point.
//!
//! Wires the driven adapters to the monitor core:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  SimProbe        StdinLineSource   ConsoleSink           │
//! │  (SensorPort)    (InputPort)       (ReportSink + log)    │
//! │  SystemClock     SystemTimer       signal-hook -> bridge │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │        MonitorService (pure event loop)            │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Exit status: 0 on graceful shutdown (`OFF`, button, SIGINT/SIGTERM),
//! 1 on a usage error or any I/O failure.

use std::process;

use anyhow::{Context, Result};
use log::info;
use signal_hook::consts::{SIGINT, SIGTERM};

use thermowatch::adapters::clock::{SystemClock, SystemTimer};
use thermowatch::adapters::console::ConsoleSink;
use thermowatch::adapters::probe::SimProbe;
use thermowatch::adapters::stdin::StdinLineSource;
use thermowatch::app::service::MonitorService;
use thermowatch::cli::{self, USAGE};
use thermowatch::config::RuntimeConfig;
use thermowatch::interrupt::InterruptBridge;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = match cli::parse(std::env::args().skip(1)) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    info!(
        "thermowatch v{} starting (period={}s, scale={}, log={})",
        env!("CARGO_PKG_VERSION"),
        opts.period_secs,
        opts.scale,
        opts.log_path
            .as_deref()
            .map_or_else(|| "off".into(), |p| p.display().to_string()),
    );

    // Termination signals take the same path a button edge would: a single
    // atomic store into the bridge, observed by the loop at the next
    // tick/sleep-slice boundary.
    let bridge = InterruptBridge::new();
    for sig in [SIGINT, SIGTERM] {
        signal_hook::flag::register(sig, bridge.interrupt_handle())
            .with_context(|| format!("registering handler for signal {sig}"))?;
    }

    let mut sink = ConsoleSink::with_log(opts.log_path.as_deref())
        .context("creating the log file")?;
    let mut input = StdinLineSource::spawn().context("spawning the stdin reader")?;
    let mut probe = SimProbe::from_env();
    let clock = SystemClock;
    let mut timer = SystemTimer;

    let config = RuntimeConfig::new(opts.period_secs, opts.scale);
    let mut monitor = MonitorService::new(config, bridge);

    monitor
        .run(&mut probe, &mut input, &clock, &mut timer, &mut sink)
        .context("monitor loop failed")?;

    info!("graceful shutdown");
    Ok(())
}
