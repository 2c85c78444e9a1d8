// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod friendly_random_id;
pub mod log;
pub mod stack_alloc_types;
pub mod temp_dir;

// Re-export.
pub use friendly_random_id::*;
pub use log::*;
pub use stack_alloc_types::*;
pub use temp_dir::*;
