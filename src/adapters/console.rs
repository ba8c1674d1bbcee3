//! Console report sink with an optional append-only log mirror.
//!
//! Reports go to stdout and, when a log file is configured, verbatim to
//! the file as well. Raw command echoes go to the log only — stdout stays
//! a pure report stream. Once a log is enabled it stays enabled for the
//! life of the process.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::app::ports::ReportSink;
use crate::app::report::Report;

/// Production [`ReportSink`]: stdout plus the optional log file.
pub struct ConsoleSink {
    log: Option<File>,
}

impl ConsoleSink {
    /// Sink without a log mirror.
    pub fn new() -> Self {
        Self { log: None }
    }

    /// Sink with a log mirror at `path`, created or truncated now.
    /// Creation failure is a startup-fatal error for the caller.
    pub fn with_log(path: Option<&Path>) -> io::Result<Self> {
        let log = match path {
            Some(p) => Some(File::create(p)?),
            None => None,
        };
        Ok(Self { log })
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSink for ConsoleSink {
    fn emit(&mut self, report: &Report) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{report}")?;
        // Reports must be visible immediately even when stdout is a pipe.
        out.flush()?;
        if let Some(log) = &mut self.log {
            writeln!(log, "{report}")?;
        }
        Ok(())
    }

    fn mirror_raw(&mut self, line: &str) -> io::Result<()> {
        if let Some(log) = &mut self.log {
            log.write_all(line.as_bytes())?;
            log.write_all(b"\n")?;
        }
        Ok(())
    }
}
