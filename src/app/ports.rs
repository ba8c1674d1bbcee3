//! Port traits — the boundary between the monitor core and the host.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (the analog probe, the stdin bridge, the wall clock,
//! the console/log sink, the sleeper) implement these traits. The
//! [`MonitorService`](super::service::MonitorService) consumes them via
//! generics, so the core never touches a file descriptor directly and the
//! whole loop runs under test with mock adapters.

use std::io;
use std::time::Duration;

use super::report::{Report, WallTime};
use crate::error::SensorError;

/// Read-side port for the analog front-end.
///
/// One call, one fresh sample — the monitor never caches readings.
pub trait SensorPort {
    /// Read the current raw 10-bit sample.
    fn read_raw(&mut self) -> Result<u16, SensorError>;
}

/// Zero-timeout poll of the command stream.
pub trait InputPort {
    /// Return the next pending line, or `None` immediately when nothing is
    /// buffered (or the stream has reached end-of-input). Must never block.
    fn poll_line(&mut self) -> io::Result<Option<String>>;
}

/// Local wall-clock provider.
pub trait ClockPort {
    fn now(&self) -> WallTime;
}

/// The loop's only way to give up the CPU.
pub trait TimerPort {
    fn sleep(&mut self, duration: Duration);
}

/// Where reports and raw command echoes go.
///
/// Adapters decide the destination: the production sink writes reports to
/// stdout plus the optional log mirror, and raw echoes to the log only.
pub trait ReportSink {
    /// Emit one report line.
    fn emit(&mut self, report: &Report) -> io::Result<()>;

    /// Mirror a raw command line, unmodified, to the log destination.
    /// A no-op when no log is configured.
    fn mirror_raw(&mut self, line: &str) -> io::Result<()>;
}
