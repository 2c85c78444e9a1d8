// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineVec, TerminalMode, escape_quotes};
use std::path::{Path, PathBuf};

pub const DEFAULT_PNG_SIZE: &str = "800,600";
pub const DEFAULT_PDF_SIZE: &str = "16cm,12cm";
pub const DEFAULT_SVG_SIZE: &str = "800,600";
pub const DEFAULT_DUMB_WIDTH: u16 = 80;
pub const DEFAULT_DUMB_HEIGHT: u16 = 50;

/// Selects a gnuplot terminal (and output file). Pass one to
/// [`crate::PlotSession::redirect_to`].
///
/// `size` is handed to gnuplot as is: pixels for PNG and SVG (`800,600`), a length with
/// a unit for PDF (`16cm,12cm`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Png {
        path: PathBuf,
        size: String,
    },
    Pdf {
        path: PathBuf,
        size: String,
    },
    Svg {
        path: PathBuf,
        size: String,
    },
    /// Text plot. Without a path it is printed to gnuplot's stdout.
    Dumb {
        path: Option<PathBuf>,
        width: u16,
        height: u16,
        mode: TerminalMode,
    },
    /// Any other terminal, sent verbatim.
    Raw(String),
}

impl OutputTarget {
    #[must_use]
    pub fn png(path: impl AsRef<Path>) -> Self {
        OutputTarget::Png {
            path: path.as_ref().to_path_buf(),
            size: DEFAULT_PNG_SIZE.to_string(),
        }
    }

    #[must_use]
    pub fn pdf(path: impl AsRef<Path>) -> Self {
        OutputTarget::Pdf {
            path: path.as_ref().to_path_buf(),
            size: DEFAULT_PDF_SIZE.to_string(),
        }
    }

    #[must_use]
    pub fn svg(path: impl AsRef<Path>) -> Self {
        OutputTarget::Svg {
            path: path.as_ref().to_path_buf(),
            size: DEFAULT_SVG_SIZE.to_string(),
        }
    }

    #[must_use]
    pub fn dumb() -> Self {
        OutputTarget::Dumb {
            path: None,
            width: DEFAULT_DUMB_WIDTH,
            height: DEFAULT_DUMB_HEIGHT,
            mode: TerminalMode::default(),
        }
    }

    /// Replace the size of a PNG, PDF or SVG target. Other targets are returned as is.
    #[must_use]
    pub fn with_size(self, new_size: impl Into<String>) -> Self {
        match self {
            OutputTarget::Png { path, .. } => OutputTarget::Png {
                path,
                size: new_size.into(),
            },
            OutputTarget::Pdf { path, .. } => OutputTarget::Pdf {
                path,
                size: new_size.into(),
            },
            OutputTarget::Svg { path, .. } => OutputTarget::Svg {
                path,
                size: new_size.into(),
            },
            other @ (OutputTarget::Dumb { .. } | OutputTarget::Raw(_)) => other,
        }
    }

    /// The gnuplot commands that select this terminal, in the order they must be sent.
    #[must_use]
    pub fn commands(&self) -> InlineVec<String> {
        let mut acc = InlineVec::new();
        match self {
            OutputTarget::Png { path, size } => {
                acc.push(format!("set terminal pngcairo color enhanced size {size}"));
                acc.push(set_output(path));
            }
            OutputTarget::Pdf { path, size } => {
                acc.push(format!("set terminal pdfcairo color enhanced size {size}"));
                acc.push(set_output(path));
            }
            OutputTarget::Svg { path, size } => {
                acc.push(format!("set terminal svg enhanced mouse standalone size {size}"));
                acc.push(set_output(path));
            }
            OutputTarget::Dumb {
                path,
                width,
                height,
                mode,
            } => {
                acc.push(format!("set terminal dumb size {width} {height} {mode}"));
                if let Some(path) = path {
                    acc.push(set_output(path));
                }
            }
            OutputTarget::Raw(command) => acc.push(command.clone()),
        }
        acc
    }
}

fn set_output(path: &Path) -> String {
    format!("set output '{}'", escape_quotes(&path.to_string_lossy()))
}
