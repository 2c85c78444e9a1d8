// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::Transport;
use crate::{PlotError, PlotResult, ok};
use std::sync::{Arc, Mutex, PoisonError,
                atomic::{AtomicBool, Ordering}};

#[derive(Debug, Default)]
struct CommandLogInner {
    commands: Mutex<Vec<String>>,
    failing: AtomicBool,
    closed: AtomicBool,
}

/// Shared handle to everything a [`RecordingTransport`] received. Clone it before the
/// transport is moved into a session, then inspect it afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    inner: Arc<CommandLogInner>,
}

impl CommandLog {
    /// Every successfully sent command, in order, without its trailing newline.
    #[must_use]
    pub fn commands(&self) -> Vec<String> {
        self.inner
            .commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    #[must_use]
    pub fn last(&self) -> Option<String> { self.commands().pop() }

    /// While set, every send fails with [`PlotError::WriteFailed`] and is not recorded.
    pub fn set_failing(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    /// `true` once the transport was closed (explicitly or by being dropped).
    #[must_use]
    pub fn is_closed(&self) -> bool { self.inner.closed.load(Ordering::SeqCst) }

    fn push(&self, command: &str) {
        let command = command.strip_suffix('\n').unwrap_or(command);
        self.inner
            .commands
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(command.to_string());
    }
}

/// In memory [`Transport`] that records every command.
///
/// ```
/// use r3bl_gnuplot::{RecordingTransport, Transport};
/// let mut transport = RecordingTransport::default();
/// let log = transport.log();
/// transport.send("set minussign").unwrap();
/// assert_eq!(log.commands(), vec!["set minussign".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingTransport {
    log: CommandLog,
}

impl RecordingTransport {
    /// A transport whose every send fails, as if the pipe to gnuplot were already
    /// broken.
    #[must_use]
    pub fn failing() -> Self {
        let it = Self::default();
        it.log.set_failing(true);
        it
    }

    #[must_use]
    pub fn log(&self) -> CommandLog { self.log.clone() }
}

impl Transport for RecordingTransport {
    fn send(&mut self, command: &str) -> PlotResult<()> {
        if self.log.is_closed() {
            return Err(PlotError::TransportClosed);
        }
        if self.log.inner.failing.load(Ordering::SeqCst) {
            return Err(PlotError::WriteFailed {
                source: std::io::Error::from(std::io::ErrorKind::BrokenPipe),
            });
        }
        self.log.push(command);
        ok!()
    }

    fn is_open(&self) -> bool {
        !self.log.is_closed() && !self.log.inner.failing.load(Ordering::SeqCst)
    }

    fn close(&mut self) -> PlotResult<()> {
        self.log.inner.closed.store(true, Ordering::SeqCst);
        ok!()
    }
}

impl Drop for RecordingTransport {
    fn drop(&mut self) {
        // We don't care about the result of this operation.
        _ = self.close();
    }
}

#[cfg(test)]
mod tests_recording_transport {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_records_in_order_without_newline() {
        let mut transport = RecordingTransport::default();
        let log = transport.log();
        transport.send("set encoding utf8\n").unwrap();
        transport.send("set minussign").unwrap();
        assert_eq!(log.commands(), vec!["set encoding utf8", "set minussign"]);
        assert_eq!(log.last().as_deref(), Some("set minussign"));
    }

    #[test]
    fn test_failing() {
        let mut transport = RecordingTransport::failing();
        let log = transport.log();
        assert!(!transport.is_open());
        assert!(matches!(
            transport.send("plot sin(x)"),
            Err(PlotError::WriteFailed { .. })
        ));
        assert!(log.is_empty());

        log.set_failing(false);
        transport.send("plot sin(x)").unwrap();
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_drop_closes() {
        let transport = RecordingTransport::default();
        let log = transport.log();
        assert!(!log.is_closed());
        drop(transport);
        assert!(log.is_closed());
    }
}
