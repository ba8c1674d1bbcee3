//! Wall-clock and sleep adapters.
//!
//! [`SystemClock`] reads local time via `chrono` and hands the core a
//! plain [`WallTime`] so no `chrono` type crosses the port boundary.
//! Unlike the C library's `time(2)`/`localtime(2)` pair, `Local::now()`
//! cannot fail, so there is no error path to surface.

use std::thread;
use std::time::Duration;

use chrono::{Local, Timelike};

use crate::app::ports::{ClockPort, TimerPort};
use crate::app::report::WallTime;

/// Local wall-clock provider.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> WallTime {
        let t = Local::now().time();
        WallTime {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        }
    }
}

/// Real thread sleeper.
pub struct SystemTimer;

impl TimerPort for SystemTimer {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
