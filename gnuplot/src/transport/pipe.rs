// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Transport, write_line};
use crate::{PlotError, PlotResult, ok};
use std::process::{Child, ChildStdin, Command, ExitStatus, Stdio};

/// Flag that keeps gnuplot's plot windows open after its stdin is closed.
pub const PERSIST_FLAG: &str = "--persist";

/// The stdin of a spawned gnuplot process. gnuplot's own stdout and stderr are inherited,
/// so the `dumb` terminal and gnuplot's error messages show up in the terminal of the
/// calling process.
///
/// Dropping this struct closes the pipe and waits for gnuplot to exit.
#[derive(Debug)]
pub struct PipeTransport {
    program: String,
    child: Child,
    stdin: Option<ChildStdin>,
    exit_status: Option<ExitStatus>,
}

impl PipeTransport {
    /// Start `executable`, adding [`PERSIST_FLAG`] if `persist` is set.
    ///
    /// # Errors
    ///
    /// [`PlotError::SpawnFailed`] if the program can't be started (usually because it
    /// is not installed or not on the `PATH`).
    pub fn try_spawn(executable: &str, persist: bool) -> PlotResult<Self> {
        let mut command = Command::new(executable);
        if persist {
            command.arg(PERSIST_FLAG);
        }
        command.stdin(Stdio::piped());

        let mut child = command.spawn().map_err(|source| PlotError::SpawnFailed {
            program: executable.to_string(),
            source,
        })?;

        let Some(stdin) = child.stdin.take() else {
            return Err(PlotError::SpawnFailed {
                program: executable.to_string(),
                source: std::io::Error::other("stdin of the child process is not piped"),
            });
        };

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🚀 Spawned gnuplot",
            program = %executable,
            persist = ?persist,
            pid = ?child.id()
        );

        Ok(Self {
            program: executable.to_string(),
            child,
            stdin: Some(stdin),
            exit_status: None,
        })
    }

    #[must_use]
    pub fn program(&self) -> &str { &self.program }

    /// Only available after [`Transport::close`].
    #[must_use]
    pub fn exit_status(&self) -> Option<ExitStatus> { self.exit_status }
}

impl Transport for PipeTransport {
    fn send(&mut self, command: &str) -> PlotResult<()> {
        let Some(stdin) = self.stdin.as_mut() else {
            return Err(PlotError::TransportClosed);
        };

        match write_line(stdin, command) {
            Ok(()) => ok!(),
            Err(source) => {
                // A broken pipe stays broken. Drop our end so later sends fail fast.
                self.stdin = None;
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "🔌 Pipe to gnuplot broke",
                    program = %self.program,
                    error = %source
                );
                Err(PlotError::WriteFailed { source })
            }
        }
    }

    fn is_open(&self) -> bool { self.stdin.is_some() }

    fn close(&mut self) -> PlotResult<()> {
        if self.exit_status.is_some() {
            return ok!();
        }

        // Dropping stdin is what sends EOF to gnuplot.
        drop(self.stdin.take());

        let exit_status = self
            .child
            .wait()
            .map_err(|source| PlotError::CloseFailed { source })?;
        self.exit_status = Some(exit_status);

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔚 gnuplot exited",
            program = %self.program,
            exit_status = %exit_status
        );

        ok!()
    }
}

impl Drop for PipeTransport {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Could not close pipe to gnuplot",
                program = %self.program,
                error = %error
            );
        }
    }
}
