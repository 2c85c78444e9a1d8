// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging is **DISABLED** by **default**. The library only emits [tracing] events
//! (every command sent to gnuplot is logged at `DEBUG`). Nothing is displayed unless the
//! application installs a subscriber, eg with [`try_initialize_logging_global`].
//!
//! ```no_run
//! use r3bl_gnuplot::{try_initialize_logging_global, WriterConfig};
//!
//! // Log to stderr at DEBUG level.
//! try_initialize_logging_global(WriterConfig::Stderr).unwrap();
//!
//! // Or log to a file (never rotated).
//! try_initialize_logging_global(WriterConfig::File("log.txt".into())).unwrap();
//! ```

use crate::ok;
use miette::IntoDiagnostic;
use std::path::PathBuf;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Stderr,
    File(String),
    StderrAndFile(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

// XMARK: Clever Rust, use of `impl Into<ConfigStruct>` for elegant constructor config options.

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the global default subscriber, which once set, can't be unset or changed.
///
/// A [`LevelFilter::OFF`] level, or [`WriterConfig::None`], is a no-op.
///
/// # Errors
///
/// Returns an error if:
/// - A global subscriber has already been installed
/// - The log file's folder can't be accessed
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if it.level_filter == LevelFilter::OFF
        || matches!(it.writer_config, WriterConfig::None)
    {
        return ok!();
    }

    let layers = try_create_layers(&it)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()?;

    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", config = ?it);

    ok!()
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// Returns an error if the log file's parent folder or file name can't be determined.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let level_filter = tracing_config.level_filter;
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    if let WriterConfig::Stderr | WriterConfig::StderrAndFile(_) =
        &tracing_config.writer_config
    {
        return_it.push(Box::new(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ));
    }

    if let WriterConfig::File(path) | WriterConfig::StderrAndFile(path) =
        &tracing_config.writer_config
    {
        let file = try_create_file_appender(path)?;
        return_it.push(Box::new(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(file)
                .with_filter(level_filter),
        ));
    }

    Ok(return_it)
}

/// Note that if you wrap this up in a non blocking writer, it doesn't work, since the
/// worker guard would have to outlive the global subscriber.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent directory
/// - The path has no file name
pub fn try_create_file_appender(
    path_str: &str,
) -> miette::Result<tracing_appender::rolling::RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => std::path::Path::new("."),
        Some(parent) => parent,
        None => miette::bail!(
            "Can't access the folder of {}. It might not exist, or you don't have the required permissions.",
            path.display()
        ),
    };

    let Some(file_name) = path.file_name() else {
        miette::bail!(
            "Can't access file name {}. It might not exist, or you don't have the required permissions.",
            path.display()
        );
    };

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests_log {
    use super::*;
    use crate::try_create_temp_dir;

    #[test]
    fn test_level_filter_into_config_defaults_to_file() {
        let config: TracingConfig = LevelFilter::INFO.into();
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert_eq!(
            config.writer_config,
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
    }

    #[test]
    fn test_off_is_a_no_op() {
        let config = TracingConfig {
            level_filter: LevelFilter::OFF,
            writer_config: WriterConfig::Stderr,
        };
        assert!(try_initialize_logging_global(config).is_ok());
    }

    #[test]
    fn test_try_create_layers_for_both_writers() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = dir.join("my_temp_log_file.log");
        let file_path = file_path.to_str().unwrap().to_string();

        let config: TracingConfig = WriterConfig::StderrAndFile(file_path.clone()).into();
        let layers = try_create_layers(&config).unwrap();

        assert_eq!(layers.len(), 2);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_try_create_file_appender_without_file_name() {
        assert!(try_create_file_appender("/").is_err());
    }
}
