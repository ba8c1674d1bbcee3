//! Monitor service — the event-loop core.
//!
//! [`MonitorService`] owns the runtime configuration and merges the three
//! asynchronous event sources — the periodic sample timer, the stdin
//! command stream, and the interrupt bridge — into one deterministic
//! state machine:
//!
//! ```text
//!            ┌──────────── tick ────────────┐
//!            ▼                              │
//!   pending interrupt? ─▶ shut_down         │
//!   running flag clear? ─▶ Terminated       │
//!   drain input ─▶ interpret ─▶ apply       │
//!   paused? ─▶ short poll sleep ────────────┤
//!   sample ─▶ report ─▶ sleep one period ───┘
//! ```
//!
//! All I/O flows through the port traits in [`ports`](super::ports), so
//! the whole loop runs under test with scripted adapters.

use std::time::Duration;

use log::{info, warn};

use super::commands::Command;
use super::interpreter::interpret;
use super::ports::{ClockPort, InputPort, ReportSink, SensorPort, TimerPort};
use super::report::Report;
use crate::config::RuntimeConfig;
use crate::error::MonitorError;
use crate::interrupt::InterruptBridge;
use crate::sensors::thermistor;

/// Granularity of the period sleep. Between slices the loop re-checks the
/// interrupt bridge, bounding shutdown latency to one slice instead of one
/// full period.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

/// Poll interval while paused: long enough not to spin, short enough that
/// `START`, `OFF`, and signals feel immediate.
const PAUSED_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Observable loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Emitting periodic reports.
    Running,
    /// Polling input but suppressing sampling.
    Paused,
    /// The running flag is cleared; the loop has exited or will exit at
    /// the next boundary.
    Terminated,
}

/// The event-loop core. Construct, then call [`run`](Self::run).
pub struct MonitorService {
    config: RuntimeConfig,
    bridge: InterruptBridge,
    /// Temperature reports emitted since startup.
    report_count: u64,
}

impl MonitorService {
    pub fn new(config: RuntimeConfig, bridge: InterruptBridge) -> Self {
        Self {
            config,
            bridge,
            report_count: 0,
        }
    }

    /// Drive the loop to termination. Returns `Ok(())` on graceful
    /// shutdown; any sensor/input/sink failure is fatal and propagates.
    pub fn run(
        &mut self,
        sensor: &mut impl SensorPort,
        input: &mut impl InputPort,
        clock: &impl ClockPort,
        timer: &mut impl TimerPort,
        sink: &mut impl ReportSink,
    ) -> Result<(), MonitorError> {
        // One immediate report at t=0, then one period of sleep before the
        // first tick.
        self.sample_and_report(sensor, clock, sink)?;
        self.sleep_one_period(timer);

        loop {
            if self.bridge.take_interrupt() {
                self.bridge
                    .shut_down(clock, sink)
                    .map_err(MonitorError::Sink)?;
            }
            if !self.bridge.is_running() {
                break;
            }

            self.drain_input(input, clock, sink)?;
            if !self.bridge.is_running() {
                break;
            }

            if self.config.paused {
                timer.sleep(PAUSED_POLL_INTERVAL);
                continue;
            }

            self.sample_and_report(sensor, clock, sink)?;
            self.sleep_one_period(timer);
        }

        info!("loop terminated after {} reports", self.report_count);
        Ok(())
    }

    /// Apply every command from one input line, in protocol order. Each
    /// produced command mirrors the raw line to the log sink — a line
    /// matching two keywords is echoed twice, matching the wire behavior
    /// the protocol's consumers expect.
    pub fn handle_line(
        &mut self,
        line: &str,
        clock: &impl ClockPort,
        sink: &mut impl ReportSink,
    ) -> Result<(), MonitorError> {
        for cmd in interpret(line) {
            sink.mirror_raw(line).map_err(MonitorError::Sink)?;
            self.apply(cmd, clock, sink)?;
        }
        Ok(())
    }

    /// Sample the sensor, convert in the configured scale, emit one report.
    pub fn sample_and_report(
        &mut self,
        sensor: &mut impl SensorPort,
        clock: &impl ClockPort,
        sink: &mut impl ReportSink,
    ) -> Result<(), MonitorError> {
        let raw = sensor.read_raw()?;
        let temp = thermistor::reading_in(raw, self.config.scale)?;
        sink.emit(&Report::temperature(clock.now(), temp))
            .map_err(MonitorError::Sink)?;
        self.report_count += 1;
        Ok(())
    }

    /// Current loop state, derived from the running flag and the pause
    /// flag.
    pub fn state(&self) -> LoopState {
        if !self.bridge.is_running() {
            LoopState::Terminated
        } else if self.config.paused {
            LoopState::Paused
        } else {
            LoopState::Running
        }
    }

    /// The live configuration.
    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Temperature reports emitted since startup.
    pub fn report_count(&self) -> u64 {
        self.report_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn drain_input(
        &mut self,
        input: &mut impl InputPort,
        clock: &impl ClockPort,
        sink: &mut impl ReportSink,
    ) -> Result<(), MonitorError> {
        while let Some(line) = input.poll_line().map_err(MonitorError::Input)? {
            self.handle_line(&line, clock, sink)?;
            if !self.bridge.is_running() {
                break;
            }
        }
        Ok(())
    }

    fn apply(
        &mut self,
        cmd: Command,
        clock: &impl ClockPort,
        sink: &mut impl ReportSink,
    ) -> Result<(), MonitorError> {
        match cmd {
            Command::SetScale(scale) => {
                if self.config.scale != scale {
                    info!("scale -> {}", scale);
                }
                self.config.scale = scale;
            }
            Command::SetPeriod(Some(secs)) => {
                info!("period -> {}s", secs);
                self.config.period_secs = secs;
            }
            Command::SetPeriod(None) => {
                warn!(
                    "ignoring malformed PERIOD= value, keeping {}s",
                    self.config.period_secs
                );
            }
            Command::Stop => {
                self.config.paused = true;
            }
            Command::Start => {
                self.config.paused = false;
            }
            Command::Log(_) | Command::Unrecognized(_) => {
                // Mirrored by handle_line; no state change.
            }
            Command::Shutdown => {
                self.config.paused = true;
                self.bridge
                    .shut_down(clock, sink)
                    .map_err(MonitorError::Sink)?;
            }
        }
        Ok(())
    }

    /// Sleep `period_secs`, in slices, aborting as soon as an interrupt
    /// arrives or the running flag clears.
    fn sleep_one_period(&self, timer: &mut impl TimerPort) {
        let mut remaining = Duration::from_secs(self.config.period_secs);
        while !remaining.is_zero() {
            if self.bridge.interrupt_pending() || !self.bridge.is_running() {
                return;
            }
            let slice = remaining.min(SLEEP_SLICE);
            timer.sleep(slice);
            remaining -= slice;
        }
    }
}
