// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config;
pub mod output;
pub mod plot_session;

// Re-export.
pub use config::*;
pub use output::*;
pub use plot_session::*;
