//! Non-blocking stdin bridge.
//!
//! `std` offers no zero-timeout poll on stdin, so a dedicated reader
//! thread blocks on the line iterator and forwards into an unbounded
//! channel; the control thread's [`poll_line`](InputPort::poll_line) is a
//! `try_recv` and returns immediately, giving the loop the same
//! semantics as a zero-timeout `poll(2)` on the input descriptor.
//!
//! End-of-input simply closes the channel: the command stream goes quiet
//! and the monitor keeps running. A read error is forwarded once and is
//! fatal to the caller.

use std::io::{self, BufRead};
use std::thread;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::app::ports::InputPort;

/// Reader-thread-backed [`InputPort`] over stdin.
pub struct StdinLineSource {
    rx: Receiver<io::Result<String>>,
}

impl StdinLineSource {
    /// Spawn the reader thread. The thread parks on stdin for the life of
    /// the process and exits on end-of-input, a read error, or when the
    /// receiving side is dropped.
    pub fn spawn() -> io::Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("stdin-reader".into())
            .spawn(move || read_lines(&tx))?;
        Ok(Self { rx })
    }

    #[cfg(test)]
    fn with_receiver(rx: Receiver<io::Result<String>>) -> Self {
        Self { rx }
    }
}

fn read_lines(tx: &Sender<io::Result<String>>) {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let failed = line.is_err();
        if tx.send(line).is_err() || failed {
            break;
        }
    }
}

impl InputPort for StdinLineSource {
    fn poll_line(&mut self) -> io::Result<Option<String>> {
        match self.rx.try_recv() {
            Ok(Ok(line)) => Ok(Some(line)),
            Ok(Err(e)) => Err(e),
            Err(TryRecvError::Empty) => Ok(None),
            // Reader thread gone: end-of-input, stream stays quiet.
            Err(TryRecvError::Disconnected) => Ok(None),
        }
    }
}
