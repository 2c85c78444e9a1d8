// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Runs the real gnuplot with the `dumb` terminal. Skipped when gnuplot is not installed.

use r3bl_gnuplot::{Axis, DataMode, LineStyle, OutputTarget, PlotSession, SessionConfig,
                   TerminalMode, try_create_temp_dir};
use serial_test::serial;
use std::{process::{Command, Stdio},
          time::Duration};

fn is_gnuplot_installed() -> bool {
    Command::new("gnuplot")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn draw_to_text_file(data_mode: DataMode) -> String {
    let temp_dir = try_create_temp_dir().unwrap();
    let output = temp_dir.join("plot.txt");
    {
        let config = SessionConfig::default()
            .with_persist(false)
            .with_data_mode(data_mode)
            .with_teardown_delay(Duration::from_millis(10));
        let mut session = PlotSession::try_new_with_config(config).unwrap();
        assert!(session.is_ok());

        session
            .redirect_to(&OutputTarget::Dumb {
                path: Some(output.clone()),
                width: 60,
                height: 20,
                mode: TerminalMode::Mono,
            })
            .unwrap();
        session.set_title("Bob's plot").unwrap();
        session.set_axis_label(Axis::X, "X axis").unwrap();
        session
            .append_series_2d(&[1, 2, 3, 4, 5], &[5, 2, 4, 1, 3], "zigzag", LineStyle::Lines)
            .unwrap();
        session.show().unwrap();
    } // Dropping the session waits for gnuplot to exit.
    std::fs::read_to_string(&output).unwrap()
}

#[test]
#[serial]
fn test_dumb_terminal_inline_data_blocks() {
    if !is_gnuplot_installed() {
        println!("gnuplot is not installed, skipping");
        return;
    }
    let text = draw_to_text_file(DataMode::InlineDataBlocks);
    assert!(text.contains("Bob's plot"));
    assert!(text.contains("zigzag"));
}

#[test]
#[serial]
fn test_dumb_terminal_temp_files() {
    if !is_gnuplot_installed() {
        println!("gnuplot is not installed, skipping");
        return;
    }
    let text = draw_to_text_file(DataMode::TempFiles);
    assert!(text.contains("X axis"));
    assert!(text.contains("zigzag"));
}
