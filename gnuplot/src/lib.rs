// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_gnuplot
//!
//! A thin client for [gnuplot](http://www.gnuplot.info/). It does not render anything by
//! itself. Instead it:
//!
//! 1. Accumulates numeric series (2D, 3D, histograms, error bars, vector fields) in a
//!    [`PlotSession`].
//! 2. Serializes each series into an inline data block (`$data0 << EOD`), or into a temp
//!    file when [`DataMode::TempFiles`] is selected.
//! 3. Composes a single `plot` / `splot` command from the buffered series and the axis
//!    ranges, and streams it over a one way pipe ([`Transport`]) to a running gnuplot
//!    process.
//!
//! Nothing is ever read back from gnuplot.
//!
//! # Example
//!
//! ```no_run
//! use r3bl_gnuplot::{Axis, LineStyle, OutputTarget, PlotResult, PlotSession};
//!
//! fn draw() -> PlotResult<()> {
//!     let mut session = PlotSession::try_new()?;
//!     session.redirect_to(&OutputTarget::png("simple.png"))?;
//!
//!     let x = [1, 2, 3, 4, 5];
//!     let y = [5.0, 4.0, 3.0, 2.0, 1.0];
//!     session.append_series_2d(&x, &y, "Series #1", LineStyle::Points)?;
//!     session.set_axis_label(Axis::X, "X axis")?;
//!     session.set_axis_label(Axis::Y, "Y axis")?;
//!
//!     // Always call `show()` (or `flush()`), otherwise nothing is drawn.
//!     session.show()
//! } // The session is dropped here, which closes the pipe and cleans up temp files.
//! ```
//!
//! # Invalid usage is an error, not a crash
//!
//! Mismatched column lengths, mixing 2D and 3D series in one plot, or a histogram with
//! zero bins return a [`PlotError`] (see [`PlotError::is_invalid_usage`]) and leave the
//! session unchanged.

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod error;
pub mod format;
pub mod series;
pub mod session;
pub mod transport;

// Re-export.
pub use crate::core::*;
pub use error::*;
pub use format::*;
pub use series::*;
pub use session::*;
pub use transport::*;
