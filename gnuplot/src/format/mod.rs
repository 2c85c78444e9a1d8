// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure, side effect free helpers that turn values into gnuplot command fragments.

// Attach sources.
pub mod escape;
pub mod range;
pub mod style;
pub mod value;

// Re-export.
pub use escape::*;
pub use range::*;
pub use style::*;
pub use value::*;
