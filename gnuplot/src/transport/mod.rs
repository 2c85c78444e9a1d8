// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! One way command sinks. A [`Transport`] only ever writes, nothing is read back from
//! gnuplot.
//!
//! | Transport             | Sink                                 | Used by               |
//! |-----------------------|--------------------------------------|-----------------------|
//! | [`PipeTransport`]     | stdin of a spawned `gnuplot` process | [`crate::PlotSession`]|
//! | [`WriterTransport`]   | any [`std::io::Write`]               | `gplot --dry-run`     |
//! | [`RecordingTransport`]| a shared in memory command log       | tests                 |

// Attach sources.
pub mod pipe;
pub mod recording;
pub mod writer;

// Re-export.
pub use pipe::*;
pub use recording::*;
pub use writer::*;

use crate::PlotResult;
use std::{fmt::Debug, io::Write};

pub trait Transport: Debug {
    /// Send one command. A trailing newline is appended if `command` doesn't already end
    /// with one, and the sink is flushed right away.
    ///
    /// # Errors
    ///
    /// - [`crate::PlotError::TransportClosed`] after [`Transport::close`] or a previous
    ///   write failure.
    /// - [`crate::PlotError::WriteFailed`] if the sink rejects the bytes.
    fn send(&mut self, command: &str) -> PlotResult<()>;

    /// `false` once the transport is closed or broken.
    fn is_open(&self) -> bool;

    /// Signal end of input to the consumer. Calling this more than once is a no-op.
    ///
    /// # Errors
    ///
    /// [`crate::PlotError::CloseFailed`] if the consumer can't be shut down cleanly.
    fn close(&mut self) -> PlotResult<()>;
}

/// Write `command` plus a newline (unless it already ends with one) and flush.
pub(crate) fn write_line(sink: &mut impl Write, command: &str) -> std::io::Result<()> {
    sink.write_all(command.as_bytes())?;
    if !command.ends_with('\n') {
        sink.write_all(b"\n")?;
    }
    sink.flush()
}
