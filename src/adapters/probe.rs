//! Simulated analog probe.
//!
//! The physical ADC front-end is out of scope for this crate, so the
//! shipped binary reads from an atomic cell instead. The value can be
//! injected at startup through the `THERMOWATCH_RAW` environment variable
//! and changed at runtime through [`set_raw`](SimProbe::set_raw) — handy
//! for demos and for harnesses that twiddle the sample from another
//! thread.

use std::env;
use std::sync::atomic::{AtomicU16, Ordering};

use log::warn;

use crate::app::ports::SensorPort;
use crate::error::SensorError;

/// Environment variable consulted by [`SimProbe::from_env`].
pub const RAW_SAMPLE_ENV: &str = "THERMOWATCH_RAW";

/// Atomic-cell stand-in for the hardware sample provider.
pub struct SimProbe {
    raw: AtomicU16,
}

impl SimProbe {
    /// Default sample: divider midpoint, roughly 25 C.
    pub const DEFAULT_RAW: u16 = 512;

    pub fn new(raw: u16) -> Self {
        Self {
            raw: AtomicU16::new(raw),
        }
    }

    /// Build from `THERMOWATCH_RAW`, falling back to the midpoint default
    /// when unset or unparseable.
    pub fn from_env() -> Self {
        let raw = match env::var(RAW_SAMPLE_ENV) {
            Ok(v) => match v.parse::<u16>() {
                Ok(raw) => raw,
                Err(_) => {
                    warn!("{RAW_SAMPLE_ENV}={v:?} is not a raw sample, using default");
                    Self::DEFAULT_RAW
                }
            },
            Err(_) => Self::DEFAULT_RAW,
        };
        Self::new(raw)
    }

    /// Inject a new raw sample.
    pub fn set_raw(&self, raw: u16) {
        self.raw.store(raw, Ordering::Relaxed);
    }
}

impl SensorPort for SimProbe {
    fn read_raw(&mut self) -> Result<u16, SensorError> {
        Ok(self.raw.load(Ordering::Relaxed))
    }
}
