//! Interrupt-to-shutdown bridge.
//!
//! Every shutdown origin — the `OFF` command, a button edge, a
//! termination signal — funnels through one code path so the final
//! behavior is identical regardless of source: one `SHUTDOWN` report,
//! running flag cleared, exit status zero.
//!
//! ```text
//! signal handler ──▶ notify() ──▶ pending ─┐
//! button edge    ──▶ notify() ──▶ pending ─┼─▶ loop observes ─▶ shut_down()
//! OFF command    ─────────────────────────┘    (same tick)
//! ```
//!
//! Asynchronous contexts get exactly one operation: [`notify`], a single
//! atomic store, which is all a signal handler may legally do. The report
//! emission and the flag flip happen on the control thread, at the next
//! tick or sleep-slice boundary. The running flag is monotonic — once
//! cleared it is never set again.

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::info;

use crate::app::ports::{ClockPort, ReportSink};
use crate::app::report::{Report, SHUTDOWN_STATUS};

/// Cloneable handle over the shared shutdown state.
#[derive(Clone)]
pub struct InterruptBridge {
    /// True until shutdown. Read once per loop iteration.
    running: Arc<AtomicBool>,
    /// Set from signal/edge context; consumed by the control thread.
    pending: Arc<AtomicBool>,
    /// Guards the single shutdown report across simultaneous origins.
    reported: Arc<AtomicBool>,
}

impl InterruptBridge {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
            pending: Arc::new(AtomicBool::new(false)),
            reported: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The raw pending flag, for `signal_hook::flag::register` or an edge
    /// callback registration.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.pending)
    }

    /// Record an asynchronous interrupt. Lock-free single store — safe to
    /// call from signal or interrupt context.
    pub fn notify(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Consume a pending interrupt, if any.
    pub fn take_interrupt(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    /// Peek at the pending flag without consuming it. Used by the sliced
    /// sleep to abort early.
    pub fn interrupt_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Whether the monitor should keep running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Run the shutdown transition: emit the `SHUTDOWN` report, then clear
    /// the running flag. Idempotent — later calls only re-clear the flag,
    /// so simultaneous origins still produce exactly one report.
    pub fn shut_down(
        &self,
        clock: &impl ClockPort,
        sink: &mut impl ReportSink,
    ) -> io::Result<()> {
        if !self.reported.swap(true, Ordering::AcqRel) {
            sink.emit(&Report::status(clock.now(), SHUTDOWN_STATUS))?;
            info!("shutdown report emitted");
        }
        self.running.store(false, Ordering::Release);
        Ok(())
    }
}

impl Default for InterruptBridge {
    fn default() -> Self {
        Self::new()
    }
}
