// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// How the points of one series are drawn. The [`Display`] and [`AsRef<str>`] impls
/// produce the gnuplot keyword that follows `with` in a `plot` command.
#[derive(
    Debug,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[strum(ascii_case_insensitive)]
pub enum LineStyle {
    #[strum(serialize = "dots")]
    Dots,
    #[default]
    #[strum(serialize = "lines")]
    Lines,
    #[strum(serialize = "points")]
    Points,
    #[strum(serialize = "linespoints")]
    LinesPoints,
    #[strum(serialize = "steps")]
    Steps,
    #[strum(serialize = "boxes")]
    Boxes,
    #[strum(serialize = "xerrorbars")]
    XErrorBars,
    #[strum(serialize = "yerrorbars")]
    YErrorBars,
    #[strum(serialize = "xyerrorbars")]
    XYErrorBars,
    #[strum(serialize = "vectors")]
    Vectors,
}

impl LineStyle {
    #[must_use]
    pub fn keyword(self) -> &'static str { self.into() }

    /// Parse a gnuplot style keyword. Unknown keywords fall back to
    /// [`LineStyle::Lines`], the same style gnuplot itself uses by default.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self { keyword.parse().unwrap_or_default() }
}

#[derive(Debug, Display, AsRefStr, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Which axes use a logarithmic scale.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AxisScale {
    #[default]
    Linear,
    LogX,
    LogY,
    LogXY,
}

impl AxisScale {
    #[must_use]
    pub fn command(self) -> &'static str {
        match self {
            AxisScale::Linear => "unset logscale",
            AxisScale::LogX => "set logscale x",
            AxisScale::LogY => "set logscale y",
            AxisScale::LogXY => "set logscale xy",
        }
    }
}

/// Every series in one `plot` (or `splot`) shares a dimension.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    #[strum(serialize = "2D")]
    TwoD,
    #[strum(serialize = "3D")]
    ThreeD,
}

impl Dimension {
    #[must_use]
    pub fn plot_keyword(self) -> &'static str {
        match self {
            Dimension::TwoD => "plot",
            Dimension::ThreeD => "splot",
        }
    }
}

/// Color support of the `dumb` (text) terminal.
#[derive(Debug, Display, AsRefStr, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum TerminalMode {
    #[default]
    Mono,
    Ansi,
    Ansi256,
    AnsiRgb,
}
