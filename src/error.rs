//! Unified error types for the monitor.
//!
//! Every fallible operation in the control loop funnels into
//! [`MonitorError`], keeping the loop's error handling uniform: all of
//! these are fatal, reported once, and never retried.

use std::io;

use thiserror::Error;

/// Failures from the analog front-end or the raw-to-temperature conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    /// Raw sample outside the usable 10-bit range `[1, 1023]`. A zero
    /// sample would divide by zero in the thermistor equation and is
    /// reported as a read fault rather than silently computed.
    #[error("raw sample {0} outside the usable 10-bit range [1, 1023]")]
    OutOfRange(u16),

    /// The underlying analog read primitive failed.
    #[error("analog read failed: {0}")]
    ReadFailed(String),
}

/// Every fatal condition the running monitor can hit.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("sensor: {0}")]
    Sensor(#[from] SensorError),

    /// The command input stream returned a read error.
    #[error("input stream: {0}")]
    Input(#[source] io::Error),

    /// Writing a report to the console or the log mirror failed.
    #[error("report sink: {0}")]
    Sink(#[source] io::Error),
}
