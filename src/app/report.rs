//! Outbound reports.
//!
//! A report is one line of the monitor's output protocol: a local
//! wall-clock timestamp followed by either a temperature or a literal
//! status string. Reports are ephemeral — formatted and written
//! immediately, mirrored to the log sink when one is configured.

use core::fmt;

/// The literal payload of the final report before termination.
pub const SHUTDOWN_STATUS: &str = "SHUTDOWN";

/// Local wall-clock time of day, second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// What a report line carries after its timestamp.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportPayload {
    /// A converted temperature in the scale configured at sampling time.
    Temperature(f32),
    /// A literal status string, e.g. [`SHUTDOWN_STATUS`].
    Status(&'static str),
}

/// One line of monitor output.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub at: WallTime,
    pub payload: ReportPayload,
}

impl Report {
    pub fn temperature(at: WallTime, value: f32) -> Self {
        Self {
            at,
            payload: ReportPayload::Temperature(value),
        }
    }

    pub fn status(at: WallTime, status: &'static str) -> Self {
        Self {
            at,
            payload: ReportPayload::Status(status),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            ReportPayload::Temperature(t) => write!(f, "{} {:.1}", self.at, t),
            ReportPayload::Status(s) => write!(f, "{} {}", self.at, s),
        }
    }
}
