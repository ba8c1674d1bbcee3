//! The stdin command interpreter.
//!
//! The protocol is substring-matched, not tokenized: every keyword is
//! checked independently against the whole line, so one line may yield
//! several commands at once (`"SCALE=C STOP"` pauses *and* switches to
//! Celsius). The check order below is fixed and doubles as the
//! application order, which gives the protocol its precedence rules:
//! `SCALE=C` is checked after `SCALE=F` and wins when both appear, and
//! `START` is checked after `STOP` so a line carrying both nets unpaused.
//!
//! The interpreter is total — any text, including an empty line, produces
//! at least one command and never an error.

use heapless::Vec;

use super::commands::Command;
use crate::config::Scale;

/// Upper bound on commands a single line can yield: seven keywords, or a
/// lone `Unrecognized`.
pub const MAX_COMMANDS_PER_LINE: usize = 8;

/// The ordered command sequence produced from one input line.
pub type CommandSeq = Vec<Command, MAX_COMMANDS_PER_LINE>;

/// Parse one input line into its ordered command sequence.
pub fn interpret(line: &str) -> CommandSeq {
    let mut out = CommandSeq::new();

    if line.contains("SCALE=F") {
        out.push(Command::SetScale(Scale::Fahrenheit)).ok();
    }
    if line.contains("SCALE=C") {
        out.push(Command::SetScale(Scale::Celsius)).ok();
    }
    if let Some(pos) = line.find("PERIOD=") {
        let tail = &line[pos + "PERIOD=".len()..];
        out.push(Command::SetPeriod(parse_period(tail))).ok();
    }
    if line.contains("STOP") {
        out.push(Command::Stop).ok();
    }
    if line.contains("START") {
        out.push(Command::Start).ok();
    }
    if line.contains("LOG") {
        out.push(Command::Log(line.to_owned())).ok();
    }
    if line.contains("OFF") {
        out.push(Command::Shutdown).ok();
    }

    if out.is_empty() {
        out.push(Command::Unrecognized(line.to_owned())).ok();
    }
    out
}

/// Parse the text following `PERIOD=`: skip leading whitespace, then read
/// the leading run of ASCII digits. No digits, overflow, or a value below
/// one second all yield `None`, which keeps the previous period.
fn parse_period(tail: &str) -> Option<u64> {
    let t = tail.trim_start();
    let end = t
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(t.len());
    let digits = &t[..end];
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u64>().ok().filter(|&secs| secs >= 1)
}
