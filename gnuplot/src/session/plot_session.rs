// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Axis, AxisRange, AxisRanges, AxisScale, ColumnSpec, DataColumn, DataMode,
            DataValue, Dimension, Histogram, LineStyle, OutputTarget, PipeTransport,
            PlotError, PlotResult, SeriesBuffer, SessionConfig, TempDir, Transport,
            escape_quotes, inline_string, join_with_index, ok, try_create_temp_dir};
use std::fmt::Write as _;

/// Sent right before every `plot` / `splot` so that `boxes` (histograms) are filled.
pub const FILL_STYLE_COMMAND: &str = "set style fill solid 0.5";

/// Accumulates series for one `plot` / `splot` command and sends it to gnuplot on
/// [`PlotSession::flush`].
///
/// - All series buffered between two flushes (or resets) must have the same
///   [`Dimension`]. The first series appended decides which one.
/// - Appending an empty series does nothing. Invalid usage (mismatched column lengths,
///   mixing 2D and 3D, zero histogram bins) returns an error and changes nothing.
/// - Labels, titles, log scales, multiplot layouts and output redirection are sent
///   right away. Ranges are stored and applied by the next flush.
///
/// Dropping the session closes the [`Transport`] (gnuplot sees EOF). If temp data files
/// were written, it then waits [`SessionConfig::teardown_delay`] before the files are
/// deleted, so gnuplot has time to read them.
#[derive(Debug)]
pub struct PlotSession {
    config: SessionConfig,
    series: Vec<SeriesBuffer>,
    dimension: Option<Dimension>,
    ranges: AxisRanges,
    transport: Box<dyn Transport>,
    /// Only created in [`DataMode::TempFiles`], on the first flush. Declared after
    /// `transport` so it is dropped (deleted) after the pipe is closed.
    temp_dir: Option<TempDir>,
    data_file_count: usize,
}

impl PlotSession {
    /// Spawn `gnuplot --persist` with the default [`SessionConfig`].
    ///
    /// # Errors
    ///
    /// [`PlotError::SpawnFailed`] if gnuplot can't be started.
    pub fn try_new() -> PlotResult<Self> { Self::try_new_with_config(SessionConfig::default()) }

    /// # Errors
    ///
    /// [`PlotError::SpawnFailed`] if [`SessionConfig::executable`] can't be started.
    pub fn try_new_with_config(config: SessionConfig) -> PlotResult<Self> {
        let transport = PipeTransport::try_spawn(&config.executable, config.persist)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Use an already open transport, eg: a [`crate::RecordingTransport`] in tests or a
    /// [`crate::WriterTransport`] to print the commands instead of running gnuplot.
    ///
    /// The [`SessionConfig::init_commands`] are sent immediately. A failure to send them
    /// is logged, it does not prevent the session from being created.
    pub fn with_transport(config: SessionConfig, transport: impl Transport + 'static) -> Self {
        let mut it = Self {
            config,
            series: Vec::new(),
            dimension: None,
            ranges: AxisRanges::default(),
            transport: Box::new(transport),
            temp_dir: None,
            data_file_count: 0,
        };

        let init_commands = std::mem::take(&mut it.config.init_commands);
        for command in &init_commands {
            // Failures are already logged by `send_command`.
            _ = it.send_command(command);
        }
        it.config.init_commands = init_commands;

        it
    }

    // ┌────────────────────┐
    // │ State              │
    // └────────────────────┘

    #[must_use]
    pub fn config(&self) -> &SessionConfig { &self.config }

    /// Buffered series in draw (and legend) order.
    #[must_use]
    pub fn series(&self) -> &[SeriesBuffer] { &self.series }

    #[must_use]
    pub fn series_count(&self) -> usize { self.series.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// `None` while no series is buffered.
    #[must_use]
    pub fn dimension(&self) -> Option<Dimension> { self.dimension }

    #[must_use]
    pub fn ranges(&self) -> AxisRanges { self.ranges }

    /// Whether the transport to gnuplot is still open.
    #[must_use]
    pub fn is_ok(&self) -> bool { self.transport.is_open() }

    #[must_use]
    pub fn temp_dir(&self) -> Option<&TempDir> { self.temp_dir.as_ref() }

    // ┌────────────────────┐
    // │ Immediate commands │
    // └────────────────────┘

    /// Send a raw gnuplot command (a newline is appended if it is missing).
    ///
    /// # Errors
    ///
    /// The [`Transport`] error if the command could not be sent.
    pub fn send_command(&mut self, command: &str) -> PlotResult<()> {
        match self.transport.send(command) {
            Ok(()) => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "🔽 Sent command", command = %command);
                ok!()
            }
            Err(error) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Could not send command",
                    command = %command,
                    error = %error
                );
                Err(error)
            }
        }
    }

    /// `set xlabel '<text>'` (or `ylabel`, `zlabel`).
    ///
    /// # Errors
    ///
    /// The [`Transport`] error if the command could not be sent.
    pub fn set_axis_label(&mut self, axis: Axis, text: &str) -> PlotResult<()> {
        let command = inline_string!("set {axis}label '{}'", escape_quotes(text));
        self.send_command(&command)
    }

    /// `set title '<text>'`.
    ///
    /// # Errors
    ///
    /// The [`Transport`] error if the command could not be sent.
    pub fn set_title(&mut self, text: &str) -> PlotResult<()> {
        let command = inline_string!("set title '{}'", escape_quotes(text));
        self.send_command(&command)
    }

    /// # Errors
    ///
    /// The [`Transport`] error if the command could not be sent.
    pub fn set_log_scale(&mut self, scale: AxisScale) -> PlotResult<()> {
        self.send_command(scale.command())
    }

    /// `set multiplot layout <rows>, <cols> title '<title>'`. The buffered series are
    /// not affected.
    ///
    /// # Errors
    ///
    /// The [`Transport`] error if the command could not be sent.
    pub fn begin_multiplot(&mut self, rows: usize, cols: usize, title: &str) -> PlotResult<()> {
        let command = inline_string!(
            "set multiplot layout {rows}, {cols} title '{}'",
            escape_quotes(title)
        );
        self.send_command(&command)
    }

    /// # Errors
    ///
    /// The [`Transport`] error if the command could not be sent.
    pub fn end_multiplot(&mut self) -> PlotResult<()> { self.send_command("unset multiplot") }

    /// Select the terminal and output file used by the following plots.
    ///
    /// # Errors
    ///
    /// The [`Transport`] error for the first command that could not be sent.
    pub fn redirect_to(&mut self, target: &OutputTarget) -> PlotResult<()> {
        for command in target.commands() {
            self.send_command(&command)?;
        }
        ok!()
    }

    // ┌────────────────────┐
    // │ Ranges             │
    // └────────────────────┘

    /// Clamp `axis` to `[min:max]` in the next flush. A `NaN` bound on either side means
    /// auto.
    pub fn set_range(&mut self, axis: Axis, min: f64, max: f64) {
        *self.range_mut(axis) = AxisRange::new(min, max);
    }

    pub fn reset_range(&mut self, axis: Axis) { *self.range_mut(axis) = AxisRange::Auto; }

    fn range_mut(&mut self, axis: Axis) -> &mut AxisRange {
        match axis {
            Axis::X => &mut self.ranges.x,
            Axis::Y => &mut self.ranges.y,
            Axis::Z => &mut self.ranges.z,
        }
    }

    // ┌────────────────────┐
    // │ Append series      │
    // └────────────────────┘

    /// Plot `values` against their index (`using 0:1`).
    ///
    /// # Errors
    ///
    /// [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_series_1d<T: DataValue>(
        &mut self,
        values: &[T],
        title: &str,
        style: LineStyle,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 1] = [&values];
        self.try_append(&columns, ColumnSpec::ImplicitIndex, style, title, Dimension::TwoD)
    }

    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if `xs` and `ys` differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_series_2d<X: DataValue, Y: DataValue>(
        &mut self,
        xs: &[X],
        ys: &[Y],
        title: &str,
        style: LineStyle,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 2] = [&xs, &ys];
        self.try_append(&columns, ColumnSpec::XY, style, title, Dimension::TwoD)
    }

    /// Switches the session to `splot`.
    ///
    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if the columns differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 2D series.
    pub fn append_series_3d<X: DataValue, Y: DataValue, Z: DataValue>(
        &mut self,
        xs: &[X],
        ys: &[Y],
        zs: &[Z],
        title: &str,
        style: LineStyle,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 3] = [&xs, &ys, &zs];
        self.try_append(&columns, ColumnSpec::XYZ, style, title, Dimension::ThreeD)
    }

    /// Bin `values` into `bin_count` equal width bins (see [`Histogram`]) and plot one
    /// `(bin center, count)` row per bin. Use [`LineStyle::Boxes`] for a bar chart.
    ///
    /// # Errors
    ///
    /// - [`PlotError::ZeroBinCount`] if `bin_count` is 0.
    /// - [`PlotError::NonFiniteSample`] if a sample is `NaN` or infinite.
    /// - [`PlotError::UnrepresentableBinWidth`] if the bin width overflows or rounds to
    ///   zero.
    /// - [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_histogram<T: DataValue>(
        &mut self,
        values: &[T],
        bin_count: usize,
        title: &str,
        style: LineStyle,
    ) -> PlotResult<()> {
        let Some(histogram) = Histogram::try_new(values, bin_count)? else {
            return ok!();
        };
        let centers = histogram.centers();
        let counts = histogram.counts();
        let columns: [&dyn DataColumn; 2] = [&centers, &counts];
        self.try_append(&columns, ColumnSpec::XY, style, title, Dimension::TwoD)
    }

    /// Horizontal error bars of half width `x_errs`.
    ///
    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if the columns differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_error_series_x<X: DataValue, Y: DataValue, E: DataValue>(
        &mut self,
        xs: &[X],
        ys: &[Y],
        x_errs: &[E],
        title: &str,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 3] = [&xs, &ys, &x_errs];
        self.try_append(
            &columns,
            ColumnSpec::XYZ,
            LineStyle::XErrorBars,
            title,
            Dimension::TwoD,
        )
    }

    /// Vertical error bars of half height `y_errs`.
    ///
    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if the columns differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_error_series_y<X: DataValue, Y: DataValue, E: DataValue>(
        &mut self,
        xs: &[X],
        ys: &[Y],
        y_errs: &[E],
        title: &str,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 3] = [&xs, &ys, &y_errs];
        self.try_append(
            &columns,
            ColumnSpec::XYZ,
            LineStyle::YErrorBars,
            title,
            Dimension::TwoD,
        )
    }

    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if the columns differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_error_series_xy<X: DataValue, Y: DataValue, EX: DataValue, EY: DataValue>(
        &mut self,
        xs: &[X],
        ys: &[Y],
        x_errs: &[EX],
        y_errs: &[EY],
        title: &str,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 4] = [&xs, &ys, &x_errs, &y_errs];
        self.try_append(
            &columns,
            ColumnSpec::Four,
            LineStyle::XYErrorBars,
            title,
            Dimension::TwoD,
        )
    }

    /// One arrow per row, from `(x, y)` to `(x + dx, y + dy)`.
    ///
    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if the columns differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 3D series.
    pub fn append_vector_field_2d<T: DataValue>(
        &mut self,
        xs: &[T],
        ys: &[T],
        dxs: &[T],
        dys: &[T],
        title: &str,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 4] = [&xs, &ys, &dxs, &dys];
        self.try_append(
            &columns,
            ColumnSpec::Four,
            LineStyle::Vectors,
            title,
            Dimension::TwoD,
        )
    }

    /// One arrow per row, from `(x, y, z)` to `(x + dx, y + dy, z + dz)`. Switches the
    /// session to `splot`.
    ///
    /// # Errors
    ///
    /// - [`PlotError::LengthMismatch`] if the columns differ in length.
    /// - [`PlotError::DimensionMismatch`] if the session holds 2D series.
    #[allow(clippy::too_many_arguments)]
    pub fn append_vector_field_3d<T: DataValue>(
        &mut self,
        xs: &[T],
        ys: &[T],
        zs: &[T],
        dxs: &[T],
        dys: &[T],
        dzs: &[T],
        title: &str,
    ) -> PlotResult<()> {
        let columns: [&dyn DataColumn; 6] = [&xs, &ys, &zs, &dxs, &dys, &dzs];
        self.try_append(
            &columns,
            ColumnSpec::Six,
            LineStyle::Vectors,
            title,
            Dimension::ThreeD,
        )
    }

    /// Lengths are checked first, then emptiness, then the dimension. So an empty series
    /// of the "wrong" dimension is still a no-op.
    fn try_append(
        &mut self,
        columns: &[&dyn DataColumn],
        column_spec: ColumnSpec,
        style: LineStyle,
        title: &str,
        requested: Dimension,
    ) -> PlotResult<()> {
        let Some(buffer) = SeriesBuffer::try_from_columns(columns, column_spec, style, title)?
        else {
            // % is Display, ? is Debug.
            tracing::debug!(message = "Skipped empty series", title = %title);
            return ok!();
        };

        if let Some(current) = self.dimension
            && current != requested
        {
            return Err(PlotError::DimensionMismatch { current, requested });
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "➕ Appended series",
            title = %buffer.title(),
            rows = ?buffer.row_count(),
            style = %buffer.style(),
            dimension = %requested
        );

        self.dimension = Some(requested);
        self.series.push(buffer);
        ok!()
    }

    // ┌────────────────────┐
    // │ Flush / reset      │
    // └────────────────────┘

    /// Same as `flush(true)`.
    ///
    /// # Errors
    ///
    /// See [`PlotSession::flush`].
    pub fn show(&mut self) -> PlotResult<()> { self.flush(true) }

    /// Send every buffered series plus one `plot` / `splot` command as a single
    /// transport write. Doing this with no buffered series does nothing.
    ///
    /// With `auto_reset`, a successful send clears the series and the ranges (see
    /// [`PlotSession::reset`]). A failed send keeps them.
    ///
    /// # Errors
    ///
    /// - [`PlotError::TempFile`] if a data file can't be written in
    ///   [`DataMode::TempFiles`].
    /// - The [`Transport`] error if the command could not be sent.
    pub fn flush(&mut self, auto_reset: bool) -> PlotResult<()> {
        let Some(dimension) = self.dimension else {
            return ok!();
        };
        if self.series.is_empty() {
            return ok!();
        }

        let command = self.compose_flush_command(dimension)?;

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📈 Flushing series",
            series_count = ?self.series.len(),
            bytes = ?command.len(),
            data_mode = ?self.config.data_mode
        );

        self.send_command(&command)?;

        if auto_reset {
            self.reset();
        }
        ok!()
    }

    /// Clear the buffered series, the dimension, and all three ranges. Idempotent.
    pub fn reset(&mut self) {
        self.series.clear();
        self.dimension = None;
        self.ranges = AxisRanges::default();
    }

    /// Data blocks (inline mode only), then [`FILL_STYLE_COMMAND`], then
    /// `plot <x> <y> <entries>` or `splot <x> <y> <z> <entries>`.
    fn compose_flush_command(&mut self, dimension: Dimension) -> PlotResult<String> {
        let mut acc = String::new();

        let mut data_refs = Vec::with_capacity(self.series.len());
        match self.config.data_mode {
            DataMode::InlineDataBlocks => {
                for (index, buffer) in self.series.iter().enumerate() {
                    let name = inline_string!("$data{index}");
                    buffer.write_data_block(&name, &mut acc);
                    data_refs.push(name.to_string());
                }
            }
            DataMode::TempFiles => {
                for index in 0..self.series.len() {
                    data_refs.push(self.try_write_data_file(index)?);
                }
            }
        }

        let entries = join_with_index!(
            from: self.series,
            each: buffer,
            index: index,
            delim: ", ",
            format: "{}", buffer.plot_entry(data_refs.get(index).map_or("", String::as_str))
        );

        let ranges = self.ranges;
        // We don't care about the result of this operation.
        _ = match dimension {
            Dimension::TwoD => write!(
                acc,
                "{FILL_STYLE_COMMAND}\n{plot} {x} {y} {entries}",
                plot = dimension.plot_keyword(),
                x = ranges.x,
                y = ranges.y,
            ),
            Dimension::ThreeD => write!(
                acc,
                "{FILL_STYLE_COMMAND}\n{plot} {x} {y} {z} {entries}",
                plot = dimension.plot_keyword(),
                x = ranges.x,
                y = ranges.y,
                z = ranges.z,
            ),
        };

        Ok(acc)
    }

    /// Write the rows of series `index` to a new file in the temp dir and return its
    /// quoted, escaped path.
    fn try_write_data_file(&mut self, index: usize) -> PlotResult<String> {
        let temp_dir = match self.temp_dir.take() {
            Some(it) => it,
            None => try_create_temp_dir()?,
        };
        let temp_dir = self.temp_dir.insert(temp_dir);

        let path =
            temp_dir.join(inline_string!("series-{}.dat", self.data_file_count).as_str());
        self.data_file_count += 1;

        let rows = self.series.get(index).map_or("", SeriesBuffer::rows);
        std::fs::write(&path, rows).map_err(|source| PlotError::TempFile {
            path: path.clone(),
            source,
        })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "📄 Wrote data file", path = %path.display());

        Ok(format!("'{}'", escape_quotes(&path.to_string_lossy())))
    }
}

impl Drop for PlotSession {
    fn drop(&mut self) {
        if let Err(error) = self.transport.close() {
            // % is Display, ? is Debug.
            tracing::warn!(message = "Could not close transport", error = %error);
        }

        // gnuplot may still be reading the data files.
        if self.temp_dir.is_some() {
            std::thread::sleep(self.config.teardown_delay);
        }

        // % is Display, ? is Debug.
        tracing::debug!(
            message = "🔚 Plot session dropped",
            data_files = ?self.data_file_count
        );
    }
}

#[cfg(test)]
mod tests_plot_session {
    use super::*;
    use crate::{CommandLog, RecordingTransport};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn new_session() -> (PlotSession, CommandLog) {
        let transport = RecordingTransport::default();
        let log = transport.log();
        let config = SessionConfig::default().with_init_commands(vec![]);
        (PlotSession::with_transport(config, transport), log)
    }

    #[test]
    fn test_init_commands_are_sent_once() {
        let transport = RecordingTransport::default();
        let log = transport.log();
        let session = PlotSession::with_transport(SessionConfig::default(), transport);
        assert_eq!(log.commands(), vec!["set encoding utf8", "set minussign"]);
        assert_eq!(session.config().init_commands.len(), 2);
        assert!(session.is_ok());
    }

    #[test]
    fn test_empty_series_are_no_ops() {
        let (mut session, log) = new_session();
        let empty: [f64; 0] = [];
        session.append_series_1d(&empty, "", LineStyle::Lines).unwrap();
        session.append_series_2d(&empty, &empty, "", LineStyle::Lines).unwrap();
        session.append_series_3d(&empty, &empty, &empty, "", LineStyle::Lines).unwrap();
        session.append_histogram(&empty, 3, "", LineStyle::Boxes).unwrap();
        session.append_error_series_xy(&empty, &empty, &empty, &empty, "").unwrap();
        session.append_vector_field_2d(&empty, &empty, &empty, &empty, "").unwrap();
        session.append_error_series_x(&empty, &empty, &empty, "").unwrap();
        session.append_error_series_y(&empty, &empty, &empty, "").unwrap();
        session
            .append_vector_field_3d(&empty, &empty, &empty, &empty, &empty, &empty, "")
            .unwrap();
        assert_eq!(session.series_count(), 0);
        assert_eq!(session.dimension(), None);

        session.flush(true).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_flush_2d() {
        let (mut session, log) = new_session();
        session.set_range(Axis::X, 0.0, 5.0);
        session.append_series_2d(&[1, 2, 3], &[0.5, 1.0, 1.5], "up", LineStyle::Lines).unwrap();
        session.append_series_1d(&[3_u8, 2, 1], "down", LineStyle::Steps).unwrap();
        session.flush(true).unwrap();

        assert_eq!(
            log.commands(),
            vec![
                "$data0 << EOD\n1 0.5\n2 1\n3 1.5\nEOD\n\
                 $data1 << EOD\n3\n2\n1\nEOD\n\
                 set style fill solid 0.5\n\
                 plot [0:5] [] $data0 using 1:2 with lines title 'up', \
                 $data1 using 0:1 with steps title 'down'"
            ]
        );
        assert!(session.is_empty());
        assert!(session.ranges().is_auto());
        assert_eq!(session.dimension(), None);
    }

    #[test]
    fn test_flush_3d_uses_splot_and_z_range() {
        let (mut session, log) = new_session();
        session.set_range(Axis::Z, -1.0, 1.0);
        session.append_series_3d(&[0.0], &[1.0], &[0.5], "p", LineStyle::Points).unwrap();
        session.flush(false).unwrap();

        let command = log.last().unwrap();
        assert!(command.ends_with(
            "splot [] [] [-1:1] $data0 using 1:2:3 with points title 'p'"
        ));
        // No auto reset.
        assert_eq!(session.series_count(), 1);
        assert_eq!(session.dimension(), Some(Dimension::ThreeD));
        assert!(!session.ranges().z.is_auto());
    }

    #[test]
    fn test_dimension_mismatch_leaves_session_unchanged() {
        let (mut session, _log) = new_session();
        session.append_series_3d(&[1], &[2], &[3], "", LineStyle::Lines).unwrap();

        let error = session.append_series_2d(&[1], &[2], "", LineStyle::Lines).unwrap_err();
        assert!(matches!(
            error,
            PlotError::DimensionMismatch {
                current: Dimension::ThreeD,
                requested: Dimension::TwoD,
            }
        ));
        assert!(session.append_series_1d(&[1], "", LineStyle::Lines).is_err());
        assert_eq!(session.series_count(), 1);

        session.reset();
        session.append_series_2d(&[1], &[2], "", LineStyle::Lines).unwrap();
        assert_eq!(session.dimension(), Some(Dimension::TwoD));
        assert!(
            session
                .append_vector_field_3d(&[0], &[0], &[0], &[1], &[1], &[1], "")
                .is_err()
        );
    }

    #[test]
    fn test_length_mismatch() {
        let (mut session, _log) = new_session();
        let error = session
            .append_error_series_y(&[1, 2], &[1, 2], &[0.1], "")
            .unwrap_err();
        assert!(matches!(
            error,
            PlotError::LengthMismatch {
                column: 2,
                expected: 2,
                actual: 1
            }
        ));
        assert!(session.is_empty());
    }

    #[test]
    fn test_histogram_series() {
        let (mut session, _log) = new_session();
        assert!(matches!(
            session.append_histogram(&[1.0], 0, "", LineStyle::Boxes),
            Err(PlotError::ZeroBinCount)
        ));
        session.append_histogram(&[1, 2, 3, 4], 2, "hist", LineStyle::Boxes).unwrap();
        assert_eq!(session.series()[0].rows(), "1.75 2\n3.25 2\n");
    }

    #[test]
    fn test_error_and_vector_styles() {
        let (mut session, log) = new_session();
        session.append_error_series_x(&[1], &[2], &[0.5], "ex").unwrap();
        session.append_error_series_xy(&[1], &[2], &[0.5], &[0.25], "exy").unwrap();
        session.append_vector_field_2d(&[0], &[0], &[1], &[1], "v").unwrap();
        session.show().unwrap();

        let command = log.last().unwrap();
        assert!(command.contains("$data0 using 1:2:3 with xerrorbars title 'ex'"));
        assert!(command.contains("$data1 using 1:2:3:4 with xyerrorbars title 'exy'"));
        assert!(command.contains("$data2 using 1:2:3:4 with vectors title 'v'"));
    }

    #[test]
    fn test_immediate_commands_escape_text() {
        let (mut session, log) = new_session();
        session.set_axis_label(Axis::X, "O'Brien").unwrap();
        session.set_axis_label(Axis::Z, "depth").unwrap();
        session.set_title("it's a plot").unwrap();
        session.set_log_scale(AxisScale::LogY).unwrap();
        session.begin_multiplot(2, 1, "Bob's grid").unwrap();
        session.end_multiplot().unwrap();
        session.redirect_to(&OutputTarget::dumb()).unwrap();
        assert_eq!(
            log.commands(),
            vec![
                "set xlabel 'O''Brien'",
                "set zlabel 'depth'",
                "set title 'it''s a plot'",
                "set logscale y",
                "set multiplot layout 2, 1 title 'Bob''s grid'",
                "unset multiplot",
                "set terminal dumb size 80 50 mono",
            ]
        );
    }

    #[test]
    fn test_ranges() {
        let (mut session, _log) = new_session();
        session.set_range(Axis::Y, f64::NAN, 3.0);
        assert!(session.ranges().y.is_auto());
        session.set_range(Axis::Y, 1.0, 3.0);
        assert_eq!(session.ranges().y.to_string(), "[1:3]");
        session.reset_range(Axis::Y);
        assert!(session.ranges().is_auto());
    }

    #[test]
    fn test_failed_flush_keeps_state() {
        let (mut session, log) = new_session();
        session.set_range(Axis::X, 0.0, 1.0);
        session.append_series_2d(&[0.0], &[1.0], "", LineStyle::Dots).unwrap();

        log.set_failing(true);
        assert!(matches!(
            session.flush(true),
            Err(PlotError::WriteFailed { .. })
        ));
        assert_eq!(session.series_count(), 1);
        assert!(!session.ranges().x.is_auto());

        log.set_failing(false);
        session.flush(true).unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn test_temp_files_mode() {
        let transport = RecordingTransport::default();
        let log = transport.log();
        let config = SessionConfig::default()
            .with_init_commands(vec![])
            .with_data_mode(DataMode::TempFiles)
            .with_teardown_delay(Duration::ZERO);
        let mut session = PlotSession::with_transport(config, transport);

        session.append_series_2d(&[1, 2], &[3, 4], "a", LineStyle::Lines).unwrap();
        session.flush(true).unwrap();

        let temp_dir_path = session.temp_dir().unwrap().inner.clone();
        let data_file = temp_dir_path.join("series-0.dat");
        assert_eq!(std::fs::read_to_string(&data_file).unwrap(), "1 3\n2 4\n");

        let command = log.last().unwrap();
        assert!(!command.contains("EOD"));
        assert!(command.contains(&format!(
            "plot [] [] '{}' using 1:2 with lines title 'a'",
            data_file.display()
        )));

        drop(session);
        assert!(log.is_closed());
        assert!(!temp_dir_path.exists());
    }
}
