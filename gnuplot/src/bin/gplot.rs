// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Gallery of plots drawn with [`r3bl_gnuplot`]. Run `gplot --help` for the list.
//!
//! With `--dry-run` nothing is spawned, the gnuplot script is printed to stdout instead.
//! Eg: `gplot --dry-run histogram | gnuplot --persist`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use r3bl_gnuplot::{Axis, AxisScale, DataMode, LineStyle, OutputTarget, PlotResult,
                   PlotSession, SessionConfig, TerminalMode, WriterTransport, ok,
                   try_initialize_logging_global};
use std::{f64::consts::PI, path::PathBuf};

#[derive(Debug, Parser)]
#[command(bin_name = "gplot")]
#[command(about = "📈 Draw the r3bl_gnuplot gallery with gnuplot")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(global = true, long, short = 'o', value_enum, help = "Output format")]
    pub output: Option<OutputFormat>,

    #[arg(
        global = true,
        long,
        short = 'f',
        help = "Output file, defaults to the subcommand name plus the format extension"
    )]
    pub file: Option<PathBuf>,

    #[arg(
        global = true,
        long,
        short = 'd',
        help = "Print the gnuplot commands to stdout instead of running gnuplot"
    )]
    pub dry_run: bool,

    #[arg(
        global = true,
        long,
        short = 't',
        help = "Pass data to gnuplot through temp files instead of inline data blocks"
    )]
    pub temp_files: bool,

    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Png,
    Pdf,
    Svg,
    /// Text plot in the terminal.
    Dumb,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Subcommand)]
pub enum CLICommand {
    #[clap(about = "Two series of points with axis labels")]
    Simple,
    #[clap(about = "A 1D series (plotted against its index) and a 2D series")]
    MultipleSeries,
    #[clap(about = "Histogram of five values in two bins")]
    Histogram,
    #[clap(about = "2x2 multiplot with x, y and xy error bars")]
    ErrorBars,
    #[clap(about = "3D helix drawn with splot")]
    ThreeD,
    #[clap(about = "2D vector field pointing to the origin")]
    Vectors,
    #[clap(name = "vectors-3d", about = "3D vector field pointing to the z axis")]
    Vectors3d,
}

impl CLICommand {
    fn file_stem(self) -> &'static str {
        match self {
            CLICommand::Simple => "simple",
            CLICommand::MultipleSeries => "multiple-series",
            CLICommand::Histogram => "histogram",
            CLICommand::ErrorBars => "error-bars",
            CLICommand::ThreeD => "three-d",
            CLICommand::Vectors => "vectors",
            CLICommand::Vectors3d => "vectors-3d",
        }
    }
}

fn main() -> miette::Result<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG)?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let mut session = try_create_session(&cli_arg.global_options)?;
    if let Some(target) = output_target(&cli_arg) {
        session.redirect_to(&target)?;
    }
    draw(&mut session, cli_arg.command)?;

    if enable_logging {
        tracing::debug!(message = "Stop logging...");
    }
    ok!()
}

fn try_create_session(options: &GlobalOption) -> PlotResult<PlotSession> {
    let data_mode = if options.temp_files {
        DataMode::TempFiles
    } else {
        DataMode::InlineDataBlocks
    };
    let config = SessionConfig::default().with_data_mode(data_mode);

    if options.dry_run {
        Ok(PlotSession::with_transport(
            config,
            WriterTransport::new(std::io::stdout()),
        ))
    } else {
        PlotSession::try_new_with_config(config)
    }
}

fn output_target(cli_arg: &CLIArg) -> Option<OutputTarget> {
    let format = cli_arg.global_options.output?;
    let stem = cli_arg.command.file_stem();
    let file = |extension: &str| {
        cli_arg
            .global_options
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{stem}.{extension}")))
    };
    Some(match format {
        OutputFormat::Png => OutputTarget::png(file("png")),
        OutputFormat::Pdf => OutputTarget::pdf(file("pdf")),
        OutputFormat::Svg => OutputTarget::svg(file("svg")),
        OutputFormat::Dumb => OutputTarget::Dumb {
            path: cli_arg.global_options.file.clone(),
            width: 80,
            height: 30,
            mode: TerminalMode::Ansi,
        },
    })
}

fn draw(session: &mut PlotSession, command: CLICommand) -> PlotResult<()> {
    match command {
        CLICommand::Simple => draw_simple(session),
        CLICommand::MultipleSeries => draw_multiple_series(session),
        CLICommand::Histogram => draw_histogram(session),
        CLICommand::ErrorBars => draw_error_bars(session),
        CLICommand::ThreeD => draw_three_d(session),
        CLICommand::Vectors => draw_vectors(session),
        CLICommand::Vectors3d => draw_vectors_3d(session),
    }
}

fn draw_simple(session: &mut PlotSession) -> PlotResult<()> {
    let x = [1, 2, 3, 4, 5];
    let y = [5, 4, 3, 2, 1];
    session.append_series_2d(&x, &y, "Series #1", LineStyle::Points)?;
    session.append_series_2d(&x, &x, "Series #2", LineStyle::Points)?;
    session.set_axis_label(Axis::X, "X axis")?;
    session.set_axis_label(Axis::Y, "Y axis")?;
    // Always call `show()`, otherwise nothing is drawn.
    session.show()
}

fn draw_multiple_series(session: &mut PlotSession) -> PlotResult<()> {
    let x = [1, 2, 4];
    let y1 = [3.1, -4.6, 5.1];
    let y2 = [1.3, 1.6, 4.1];
    session.append_series_1d(&y1, "", LineStyle::Lines)?;
    session.append_series_2d(&x, &y2, "Dataset #1", LineStyle::LinesPoints)?;
    session.show()
}

fn draw_histogram(session: &mut PlotSession) -> PlotResult<()> {
    let y = [5.0, 2.0, 4.0, 1.0, 3.0];
    session.append_histogram(&y, 2, "Histogram", LineStyle::Boxes)?;
    session.set_axis_label(Axis::X, "Value")?;
    session.set_axis_label(Axis::Y, "Number of counts")?;
    session.set_range(Axis::X, 1.0, 5.0);
    session.set_range(Axis::Y, 0.0, 5.0);
    session.show()
}

fn draw_error_bars(session: &mut PlotSession) -> PlotResult<()> {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];
    let y = [5.0, 2.0, 4.0, 1.0, 3.0];
    let x_errs = [0.2, 0.2, 0.1, 0.1, 0.2];
    let y_errs = [0.3, 0.4, 0.2, 0.6, 0.7];

    session.begin_multiplot(2, 2, "Error bars")?;

    session.set_axis_label(Axis::X, "X axis")?;
    session.set_axis_label(Axis::Y, "Y axis")?;
    session.append_series_2d(&x, &y, "", LineStyle::Points)?;
    session.show()?;

    session.append_error_series_x(&x, &y, &x_errs, "x errors")?;
    session.show()?;

    session.append_error_series_y(&x, &y, &y_errs, "y errors")?;
    session.show()?;

    session.set_log_scale(AxisScale::LogY)?;
    session.append_error_series_xy(&x, &y, &x_errs, &y_errs, "x and y errors")?;
    session.show()?;

    session.end_multiplot()
}

fn draw_three_d(session: &mut PlotSession) -> PlotResult<()> {
    let angles: Vec<f64> = (0..)
        .map(|step| f64::from(step) * 0.1)
        .take_while(|angle| *angle < 6.0 * PI)
        .collect();
    let x: Vec<f64> = angles.iter().map(|angle| angle.cos()).collect();
    let y: Vec<f64> = angles.iter().map(|angle| angle.sin()).collect();
    let z: Vec<f64> = angles.iter().map(|angle| angle / 2.0 * PI).collect();
    session.append_series_3d(&x, &y, &z, "Helix", LineStyle::Lines)?;
    session.show()
}

/// Grid starting at `-10.1` so no sample sits on the origin (where the field is not
/// defined).
fn grid(step: u8) -> Vec<f64> {
    (0..=20_u8)
        .step_by(usize::from(step))
        .map(|index| -10.1 + f64::from(index))
        .collect()
}

fn draw_vectors(session: &mut PlotSession) -> PlotResult<()> {
    let (mut x, mut y, mut dx, mut dy) = (vec![], vec![], vec![], vec![]);
    for cur_x in grid(1) {
        for cur_y in grid(1) {
            let r = cur_x.hypot(cur_y);
            x.push(cur_x);
            y.push(cur_y);
            dx.push(-cur_x / r);
            dy.push(-cur_y / r);
        }
    }
    session.append_vector_field_2d(&x, &y, &dx, &dy, "")?;
    session.show()
}

fn draw_vectors_3d(session: &mut PlotSession) -> PlotResult<()> {
    let (mut x, mut y, mut z) = (vec![], vec![], vec![]);
    let (mut dx, mut dy, mut dz) = (vec![], vec![], vec![]);
    for cur_x in grid(2) {
        for cur_y in grid(2) {
            for cur_z in grid(2) {
                let r = cur_x.hypot(cur_y);
                x.push(cur_x);
                y.push(cur_y);
                z.push(cur_z);
                dx.push(-cur_x / r);
                dy.push(-cur_y / r);
                dz.push(-cur_z / r);
            }
        }
    }
    session.append_vector_field_3d(&x, &y, &z, &dx, &dy, &dz, "")?;
    session.set_range(Axis::X, -10.0, 10.0);
    session.set_range(Axis::Y, -10.0, 10.0);
    session.set_range(Axis::Z, -10.0, 10.0);
    session.show()
}
