// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;
use std::fmt::{Debug, Display, Write};

/// A number that can be written into a data block cell.
///
/// Integers are written as plain decimals. Floats use Rust's shortest round trip
/// [`Display`] representation, which never depends on the locale and never loses
/// precision (`0.1` stays `0.1`, `5.0` becomes `5`). `NaN` and infinities are not
/// filtered, they are written as `NaN`, `inf` and `-inf`.
pub trait DataValue: Copy + Display + Debug + 'static {
    /// Used for binning (histograms) and finiteness checks.
    fn to_f64(self) -> f64;

    fn write_cell(self, acc: &mut impl Write) -> std::fmt::Result { write!(acc, "{self}") }
}

macro_rules! impl_data_value_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DataValue for $ty {
                fn to_f64(self) -> f64 { f64::from(self) }
            }
        )*
    };
}

macro_rules! impl_data_value_lossy {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DataValue for $ty {
                #[allow(clippy::cast_precision_loss)]
                fn to_f64(self) -> f64 { self as f64 }
            }
        )*
    };
}

impl_data_value_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_data_value_lossy!(i64, u64, isize, usize);

/// Format a single cell, mostly useful for tests and debugging.
///
/// ```
/// use r3bl_gnuplot::format_cell;
/// assert_eq!(format_cell(5.0_f64), "5");
/// assert_eq!(format_cell(0.1_f32), "0.1");
/// assert_eq!(format_cell(-3_i32), "-3");
/// ```
#[must_use]
pub fn format_cell<T: DataValue>(value: T) -> InlineString {
    let mut acc = InlineString::new();
    // We don't care about the result of this operation.
    _ = value.write_cell(&mut acc);
    acc
}
