// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColumnSpec, DataColumn, LineStyle, PlotError, PlotResult, escape_quotes};
use std::fmt::Write;

/// Delimiter that opens and closes an inline data block (`$data0 << EOD`).
pub const DATA_BLOCK_DELIMITER: &str = "EOD";

/// One serialized series: the rows of its data block plus everything needed to write its
/// entry in the `plot` / `splot` command.
///
/// The rows are serialized once when the series is appended. Cells are separated by a
/// single space and every row (including the last one) ends with `\n`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    rows: String,
    row_count: usize,
    column_spec: ColumnSpec,
    style: LineStyle,
    title: String,
}

impl SeriesBuffer {
    /// Serialize `columns` row by row.
    ///
    /// Returns `Ok(None)` when the columns are empty, since series without rows are
    /// never buffered.
    ///
    /// # Errors
    ///
    /// [`PlotError::LengthMismatch`] if the columns don't all have the same length as
    /// the first one.
    ///
    /// # Panics
    ///
    /// In debug builds, if the number of columns doesn't match `column_spec`.
    pub fn try_from_columns(
        columns: &[&dyn DataColumn],
        column_spec: ColumnSpec,
        style: LineStyle,
        title: &str,
    ) -> PlotResult<Option<Self>> {
        debug_assert_eq!(columns.len(), column_spec.arity());

        let Some(first) = columns.first() else {
            return Ok(None);
        };
        let expected = first.len();
        for (column, it) in columns.iter().enumerate() {
            if it.len() != expected {
                return Err(PlotError::LengthMismatch {
                    column,
                    expected,
                    actual: it.len(),
                });
            }
        }

        if expected == 0 {
            return Ok(None);
        }

        let mut rows = String::with_capacity(expected * columns.len() * 4);
        for row in 0..expected {
            for (index, column) in columns.iter().enumerate() {
                if index > 0 {
                    rows.push(' ');
                }
                // We don't care about the result of this operation. Writing to a String
                // can't fail and `row` is in bounds for every column.
                _ = column.write_cell(row, &mut rows);
            }
            rows.push('\n');
        }

        Ok(Some(Self {
            rows,
            row_count: expected,
            column_spec,
            style,
            title: title.to_string(),
        }))
    }

    /// The serialized rows, newline terminated.
    #[must_use]
    pub fn rows(&self) -> &str { &self.rows }

    #[must_use]
    pub fn row_count(&self) -> usize { self.row_count }

    #[must_use]
    pub fn column_spec(&self) -> ColumnSpec { self.column_spec }

    #[must_use]
    pub fn style(&self) -> LineStyle { self.style }

    #[must_use]
    pub fn title(&self) -> &str { &self.title }

    /// Write this series as an inline data block named `name` (which must start with
    /// `$`) into `acc`, followed by a newline.
    pub fn write_data_block(&self, name: &str, acc: &mut String) {
        // We don't care about the result of this operation.
        _ = write!(
            acc,
            "{name} << {DATA_BLOCK_DELIMITER}\n{rows}{DATA_BLOCK_DELIMITER}\n",
            rows = self.rows
        );
    }

    /// The entry of this series in a `plot` / `splot` command. `data_ref` is either a
    /// data block name or an already quoted file path.
    #[must_use]
    pub fn plot_entry(&self, data_ref: &str) -> String {
        format!(
            "{data_ref} using {spec} with {style} title '{title}'",
            spec = self.column_spec,
            style = self.style,
            title = escape_quotes(&self.title)
        )
    }
}
