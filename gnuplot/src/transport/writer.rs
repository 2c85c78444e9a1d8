// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Transport, write_line};
use crate::{PlotError, PlotResult, ok};
use std::{fmt::{Debug, Formatter},
          io::Write};

/// Sends commands to any [`Write`] implementation, eg: [`std::io::stdout`] to print the
/// script that would have been piped to gnuplot, or a [`std::fs::File`] to save it.
pub struct WriterTransport<W: Write> {
    writer: Option<W>,
}

impl<W: Write> Debug for WriterTransport<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterTransport")
            .field("is_open", &self.writer.is_some())
            .finish()
    }
}

impl<W: Write> WriterTransport<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Some(writer),
        }
    }

    /// Close the transport and hand back the writer.
    pub fn into_inner(mut self) -> Option<W> { self.writer.take() }
}

impl<W: Write> Transport for WriterTransport<W> {
    fn send(&mut self, command: &str) -> PlotResult<()> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(PlotError::TransportClosed);
        };
        write_line(writer, command).map_err(|source| PlotError::WriteFailed { source })
    }

    fn is_open(&self) -> bool { self.writer.is_some() }

    fn close(&mut self) -> PlotResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .map_err(|source| PlotError::CloseFailed { source })?;
        }
        ok!()
    }
}

#[cfg(test)]
mod tests_writer_transport {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_writes_lines() {
        let mut transport = WriterTransport::new(Vec::<u8>::new());
        transport.send("set minussign").unwrap();
        transport.send("plot $data0 using 1:2 with lines title ''\n").unwrap();
        let bytes = transport.into_inner().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "set minussign\nplot $data0 using 1:2 with lines title ''\n"
        );
    }

    #[test]
    fn test_send_after_close() {
        let mut transport = WriterTransport::new(Vec::<u8>::new());
        transport.close().unwrap();
        assert!(!transport.is_open());
        assert!(matches!(
            transport.send("set minussign"),
            Err(PlotError::TransportClosed)
        ));
    }
}
