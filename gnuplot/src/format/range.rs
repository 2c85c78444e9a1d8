// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineString, inline_string};
use std::fmt::{Display, Formatter};

/// The range of one axis. [`AxisRange::Auto`] lets gnuplot pick the bounds from the data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AxisRange {
    #[default]
    Auto,
    Bounded {
        min: f64,
        max: f64,
    },
}

impl AxisRange {
    /// A `NaN` (unset) bound on either side means [`AxisRange::Auto`]. So do infinite
    /// bounds, which gnuplot can't parse.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min.is_finite() && max.is_finite() {
            AxisRange::Bounded { min, max }
        } else {
            AxisRange::Auto
        }
    }

    #[must_use]
    pub fn is_auto(&self) -> bool { matches!(self, AxisRange::Auto) }
}

/// `[]` for auto, `[min:max]` otherwise.
impl Display for AxisRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisRange::Auto => write!(f, "[]"),
            AxisRange::Bounded { min, max } => write!(f, "[{min}:{max}]"),
        }
    }
}

/// Format an optional `(min, max)` pair as a gnuplot range expression.
///
/// ```
/// use r3bl_gnuplot::format_range;
/// assert_eq!(format_range(0.0, 5.0), "[0:5]");
/// assert_eq!(format_range(f64::NAN, 5.0), "[]");
/// ```
#[must_use]
pub fn format_range(min: f64, max: f64) -> InlineString {
    inline_string!("{}", AxisRange::new(min, max))
}

/// The ranges of all three axes, as they are applied to the next `plot` / `splot`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRanges {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

impl AxisRanges {
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.x.is_auto() && self.y.is_auto() && self.z.is_auto()
    }
}
