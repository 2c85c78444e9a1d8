// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod buffer;
pub mod column;
pub mod histogram;

// Re-export.
pub use buffer::*;
pub use column::*;
pub use histogram::*;
