// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{PlotError, PlotResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_EXECUTABLE: &str = "gnuplot";

/// How long to wait after closing the pipe before deleting temp data files, so gnuplot
/// gets a chance to read them.
pub const DEFAULT_TEARDOWN_DELAY: Duration = Duration::from_secs(1);

/// Sent once, right after the pipe opens. `set minussign` makes gnuplot print a real
/// minus sign (U+2212) for negative tick labels, which needs the utf8 encoding.
pub const DEFAULT_INIT_COMMANDS: [&str; 2] = ["set encoding utf8", "set minussign"];

/// Where the rows of a series end up when the session is flushed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    /// `$data0 << EOD` blocks, sent over the pipe together with the `plot` command.
    #[default]
    InlineDataBlocks,
    /// One file per series in a temp directory, referenced by its quoted path. The
    /// directory is removed when the session is dropped.
    TempFiles,
}

/// Everything needed to open a [`crate::PlotSession`]. All fields are optional in JSON.
///
/// ```
/// use r3bl_gnuplot::{DataMode, SessionConfig};
/// let config = SessionConfig::try_from_json(r#"{ "data_mode": "temp_files" }"#).unwrap();
/// assert_eq!(config.data_mode, DataMode::TempFiles);
/// assert_eq!(config.executable, "gnuplot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub executable: String,
    /// Pass `--persist` so plot windows outlive the session.
    pub persist: bool,
    pub data_mode: DataMode,
    #[serde(rename = "teardown_delay_ms", with = "duration_ms")]
    pub teardown_delay: Duration,
    pub init_commands: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            persist: true,
            data_mode: DataMode::default(),
            teardown_delay: DEFAULT_TEARDOWN_DELAY,
            init_commands: DEFAULT_INIT_COMMANDS.map(String::from).to_vec(),
        }
    }
}

impl SessionConfig {
    /// # Errors
    ///
    /// [`PlotError::InvalidConfig`] if `json` is not a JSON object with the fields of
    /// this struct (unknown fields are ignored).
    pub fn try_from_json(json: &str) -> PlotResult<Self> {
        serde_json::from_str(json).map_err(|source| PlotError::InvalidConfig { source })
    }

    /// # Errors
    ///
    /// [`PlotError::InvalidConfig`] if serialization fails.
    pub fn try_to_json(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| PlotError::InvalidConfig { source })
    }

    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    #[must_use]
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    #[must_use]
    pub fn with_data_mode(mut self, data_mode: DataMode) -> Self {
        self.data_mode = data_mode;
        self
    }

    #[must_use]
    pub fn with_teardown_delay(mut self, teardown_delay: Duration) -> Self {
        self.teardown_delay = teardown_delay;
        self
    }

    #[must_use]
    pub fn with_init_commands(mut self, init_commands: Vec<String>) -> Self {
        self.init_commands = init_commands;
        self
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
