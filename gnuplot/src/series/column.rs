// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DataValue;
use std::fmt::{Debug, Display, Formatter, Write};

/// One column of a series, type erased so that a single series can mix element types
/// (say `usize` x values with `f64` y values).
///
/// ```
/// use r3bl_gnuplot::DataColumn;
/// let xs: &[u32] = &[1, 2, 3];
/// let ys: &[f64] = &[0.5, 1.5, 2.5];
/// let columns: [&dyn DataColumn; 2] = [&xs, &ys];
/// assert_eq!(columns[1].len(), 3);
/// ```
pub trait DataColumn: Debug {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Write the cell at `row` into `acc`. `row` must be less than [`DataColumn::len`].
    ///
    /// Non-finite floats are written as they are (`NaN`, `inf`, `-inf`). gnuplot skips a
    /// `NaN` cell as an undefined point. Only [`crate::Histogram`] rejects them.
    ///
    /// # Errors
    ///
    /// Only fails if `acc` fails.
    fn write_cell(&self, row: usize, acc: &mut dyn Write) -> std::fmt::Result;
}

impl<T: DataValue> DataColumn for &[T] {
    fn len(&self) -> usize { <[T]>::len(self) }

    fn write_cell(&self, row: usize, acc: &mut dyn Write) -> std::fmt::Result {
        match self.get(row) {
            Some(value) => write!(acc, "{value}"),
            None => Err(std::fmt::Error),
        }
    }
}

/// The `using` clause of a series: which columns of its data block gnuplot reads, and
/// in what role.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ColumnSpec {
    /// `0:1`, the row number (gnuplot pseudo column 0) as x, column 1 as y.
    ImplicitIndex,
    /// `1:2`, x y.
    XY,
    /// `1:2:3`, x y z, or x y error.
    XYZ,
    /// `1:2:3:4`, x y x-error y-error, or x y dx dy.
    Four,
    /// `1:2:3:4:5:6`, x y z dx dy dz.
    Six,
}

impl ColumnSpec {
    /// Number of columns each row of the data block holds.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            ColumnSpec::ImplicitIndex => 1,
            ColumnSpec::XY => 2,
            ColumnSpec::XYZ => 3,
            ColumnSpec::Four => 4,
            ColumnSpec::Six => 6,
        }
    }
}

impl Display for ColumnSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnSpec::ImplicitIndex => write!(f, "0:1"),
            ColumnSpec::XY => write!(f, "1:2"),
            ColumnSpec::XYZ => write!(f, "1:2:3"),
            ColumnSpec::Four => write!(f, "1:2:3:4"),
            ColumnSpec::Six => write!(f, "1:2:3:4:5:6"),
        }
    }
}

#[cfg(test)]
mod tests_column {
    use super::*;
    use test_case::test_case;

    #[test_case(ColumnSpec::ImplicitIndex, "0:1", 1)]
    #[test_case(ColumnSpec::XY, "1:2", 2)]
    #[test_case(ColumnSpec::XYZ, "1:2:3", 3)]
    #[test_case(ColumnSpec::Four, "1:2:3:4", 4)]
    #[test_case(ColumnSpec::Six, "1:2:3:4:5:6", 6)]
    fn test_column_spec(spec: ColumnSpec, expected: &str, arity: usize) {
        assert_eq!(spec.to_string(), expected);
        assert_eq!(spec.arity(), arity);
    }

    #[test]
    fn test_write_cell() {
        let values: &[f32] = &[1.5, 2.0];
        let column: &dyn DataColumn = &values;
        let mut acc = String::new();
        column.write_cell(1, &mut acc).unwrap();
        assert_eq!(acc, "2");
        assert!(column.write_cell(2, &mut acc).is_err());
        assert!(!column.is_empty());
    }
}
