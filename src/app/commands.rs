//! Inbound commands to the monitor.
//!
//! These represent directives arriving on the stdin protocol that the
//! [`MonitorService`](super::service::MonitorService) applies to its
//! [`RuntimeConfig`](crate::config::RuntimeConfig). One input line may
//! carry several of them — see [`interpret`](super::interpreter::interpret)
//! for the matching rules.

use crate::config::Scale;

/// A parsed directive from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Switch the unit scale of subsequent reports.
    SetScale(Scale),

    /// Change the sampling period. `None` encodes a malformed or
    /// out-of-range value and leaves the previous period untouched.
    SetPeriod(Option<u64>),

    /// Suspend sampling; input is still polled.
    Stop,

    /// Resume sampling.
    Start,

    /// Informational passthrough: the raw line is mirrored to the log
    /// sink, nothing else happens. Message-bearing `LOG` bodies are a
    /// protocol extension this monitor does not implement.
    Log(String),

    /// Terminate the monitor through the same path as a button press or
    /// termination signal.
    Shutdown,

    /// The line matched no keyword at all; carried so the sink can still
    /// mirror it.
    Unrecognized(String),
}
