//! Mock port adapters for integration tests.
//!
//! Each mock records every call so tests can assert on the full history:
//! reports and echoes in order, sleep durations, sensor reads.

use std::cell::Cell;
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use thermowatch::app::ports::{ClockPort, InputPort, ReportSink, SensorPort, TimerPort};
use thermowatch::app::report::{Report, WallTime};
use thermowatch::error::SensorError;
use thermowatch::interrupt::InterruptBridge;

// ── Sensor ────────────────────────────────────────────────────

pub struct MockSensor {
    raw: u16,
    fail_with: Option<SensorError>,
    pub reads: u64,
}

#[allow(dead_code)]
impl MockSensor {
    pub fn new(raw: u16) -> Self {
        Self {
            raw,
            fail_with: None,
            reads: 0,
        }
    }

    pub fn failing(error: SensorError) -> Self {
        Self {
            raw: 0,
            fail_with: Some(error),
            reads: 0,
        }
    }
}

impl SensorPort for MockSensor {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        self.reads += 1;
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(self.raw),
        }
    }
}

// ── Input ─────────────────────────────────────────────────────

/// One scripted answer per `poll_line` call. `Quiet` models a poll that
/// finds nothing buffered; an exhausted script stays quiet forever.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Line(&'static str),
    Quiet,
    Fail,
}

pub struct ScriptedInput {
    script: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl InputPort for ScriptedInput {
    fn poll_line(&mut self) -> io::Result<Option<String>> {
        match self.script.pop_front() {
            Some(InputEvent::Line(s)) => Ok(Some(s.to_owned())),
            Some(InputEvent::Quiet) | None => Ok(None),
            Some(InputEvent::Fail) => Err(io::Error::other("scripted input failure")),
        }
    }
}

// ── Clock ─────────────────────────────────────────────────────

/// Advances one second per `now()` call, so consecutive reports carry
/// distinct timestamps.
pub struct TickingClock {
    secs: Cell<u64>,
}

impl TickingClock {
    pub fn new() -> Self {
        Self { secs: Cell::new(0) }
    }
}

impl ClockPort for TickingClock {
    fn now(&self) -> WallTime {
        let s = self.secs.get();
        self.secs.set(s + 1);
        WallTime {
            hour: ((s / 3600) % 24) as u8,
            minute: ((s / 60) % 60) as u8,
            second: (s % 60) as u8,
        }
    }
}

// ── Timer ─────────────────────────────────────────────────────

pub struct RecordingTimer {
    pub sleeps: Vec<Duration>,
    notify_after: Option<(InterruptBridge, usize)>,
}

#[allow(dead_code)]
impl RecordingTimer {
    pub fn new() -> Self {
        Self {
            sleeps: Vec::new(),
            notify_after: None,
        }
    }

    /// Fire `bridge.notify()` once the n-th sleep is recorded, simulating
    /// a signal arriving mid-sleep.
    pub fn with_notify_after(bridge: InterruptBridge, nth_sleep: usize) -> Self {
        Self {
            sleeps: Vec::new(),
            notify_after: Some((bridge, nth_sleep)),
        }
    }

    pub fn total_slept(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl TimerPort for RecordingTimer {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
        if let Some((bridge, nth)) = &self.notify_after {
            if self.sleeps.len() >= *nth {
                bridge.notify();
            }
        }
    }
}

// ── Sink ──────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemorySink {
    pub console: Vec<String>,
    pub log: Vec<String>,
    log_enabled: bool,
}

#[allow(dead_code)]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log() -> Self {
        Self {
            log_enabled: true,
            ..Self::default()
        }
    }
}

impl ReportSink for MemorySink {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        let line = report.to_string();
        if self.log_enabled {
            self.log.push(line.clone());
        }
        self.console.push(line);
        Ok(())
    }

    fn mirror_raw(&mut self, line: &str) -> io::Result<()> {
        if self.log_enabled {
            self.log.push(line.to_owned());
        }
        Ok(())
    }
}
