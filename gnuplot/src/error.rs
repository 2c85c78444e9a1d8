// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! | Variant                     | Kind          | Recoverable            |
//! |-----------------------------|---------------|------------------------|
//! | [`LengthMismatch`]          | invalid usage | yes, session unchanged |
//! | [`DimensionMismatch`]       | invalid usage | yes, session unchanged |
//! | [`ZeroBinCount`]            | invalid usage | yes, session unchanged |
//! | [`NonFiniteSample`]         | invalid usage | yes, session unchanged |
//! | [`UnrepresentableBinWidth`] | invalid usage | yes, session unchanged |
//! | [`TransportClosed`]         | transport     | no                     |
//! | [`SpawnFailed`]             | transport     | maybe                  |
//! | [`WriteFailed`]             | transport     | no                     |
//! | [`CloseFailed`]             | transport     | no                     |
//! | [`TempFile`]                | data files    | maybe                  |
//! | [`InvalidConfig`]           | configuration | yes                    |
//!
//! [`LengthMismatch`]: PlotError::LengthMismatch
//! [`DimensionMismatch`]: PlotError::DimensionMismatch
//! [`ZeroBinCount`]: PlotError::ZeroBinCount
//! [`NonFiniteSample`]: PlotError::NonFiniteSample
//! [`UnrepresentableBinWidth`]: PlotError::UnrepresentableBinWidth
//! [`TransportClosed`]: PlotError::TransportClosed
//! [`SpawnFailed`]: PlotError::SpawnFailed
//! [`WriteFailed`]: PlotError::WriteFailed
//! [`CloseFailed`]: PlotError::CloseFailed
//! [`TempFile`]: PlotError::TempFile
//! [`InvalidConfig`]: PlotError::InvalidConfig

use crate::Dimension;
use std::path::PathBuf;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PlotError {
    #[error("📏 Column {column} of the series has {actual} values, expected {expected}")]
    #[diagnostic(
        code(r3bl_gnuplot::usage::length_mismatch),
        help("Every column of a series must hold the same number of values")
    )]
    LengthMismatch {
        column: usize,
        expected: usize,
        actual: usize,
    },

    #[error("🧊 Can't add a {requested} series to a session that holds {current} series")]
    #[diagnostic(
        code(r3bl_gnuplot::usage::dimension_mismatch),
        help("Call `flush()` or `reset()` before switching between 2D and 3D series")
    )]
    DimensionMismatch {
        current: Dimension,
        requested: Dimension,
    },

    #[error("📊 A histogram needs at least one bin")]
    #[diagnostic(code(r3bl_gnuplot::usage::zero_bin_count))]
    ZeroBinCount,

    #[error("📊 Histogram sample #{index} is not a finite number: {value}")]
    #[diagnostic(
        code(r3bl_gnuplot::usage::non_finite_sample),
        help("Remove NaN and infinite values before binning")
    )]
    NonFiniteSample { index: usize, value: f64 },

    #[error("📊 Can't split [{min}, {max}] into {bin_count} bins of finite, non zero width")]
    #[diagnostic(
        code(r3bl_gnuplot::usage::unrepresentable_bin_width),
        help("Use more bins for a span this wide, or rescale the samples")
    )]
    UnrepresentableBinWidth { min: f64, max: f64, bin_count: usize },

    #[error("🔌 The pipe to gnuplot is closed")]
    #[diagnostic(code(r3bl_gnuplot::transport::closed))]
    TransportClosed,

    #[error("🚀 Could not start '{program}'")]
    #[diagnostic(
        code(r3bl_gnuplot::transport::spawn_failed),
        help("Make sure gnuplot is installed and on your PATH")
    )]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("🔽 Could not write command to gnuplot")]
    #[diagnostic(code(r3bl_gnuplot::transport::write_failed))]
    WriteFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("🔚 Could not close the pipe to gnuplot")]
    #[diagnostic(code(r3bl_gnuplot::transport::close_failed))]
    CloseFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("📄 Could not write data file '{}'", path.display())]
    #[diagnostic(code(r3bl_gnuplot::data_file))]
    TempFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("⚙️ Could not parse session config")]
    #[diagnostic(code(r3bl_gnuplot::config))]
    InvalidConfig {
        #[source]
        source: serde_json::Error,
    },
}

impl PlotError {
    /// `true` for contract violations by the caller (as opposed to failures of the
    /// pipe, the file system, or the config).
    #[must_use]
    pub fn is_invalid_usage(&self) -> bool {
        matches!(
            self,
            PlotError::LengthMismatch { .. }
                | PlotError::DimensionMismatch { .. }
                | PlotError::ZeroBinCount
                | PlotError::NonFiniteSample { .. }
                | PlotError::UnrepresentableBinWidth { .. }
        )
    }
}

#[cfg(test)]
mod tests_plot_error {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_invalid_usage() {
        assert!(PlotError::ZeroBinCount.is_invalid_usage());
        assert!(
            PlotError::DimensionMismatch {
                current: Dimension::ThreeD,
                requested: Dimension::TwoD,
            }
            .is_invalid_usage()
        );
        assert!(
            PlotError::UnrepresentableBinWidth {
                min: -1e308,
                max: 1e308,
                bin_count: 1,
            }
            .is_invalid_usage()
        );
        assert!(!PlotError::TransportClosed.is_invalid_usage());
    }

    #[test]
    fn test_display() {
        let error = PlotError::LengthMismatch {
            column: 1,
            expected: 5,
            actual: 4,
        };
        assert_eq!(
            error.to_string(),
            "📏 Column 1 of the series has 4 values, expected 5"
        );

        let error = PlotError::DimensionMismatch {
            current: Dimension::TwoD,
            requested: Dimension::ThreeD,
        };
        assert_eq!(
            error.to_string(),
            "🧊 Can't add a 3D series to a session that holds 2D series"
        );
    }
}
