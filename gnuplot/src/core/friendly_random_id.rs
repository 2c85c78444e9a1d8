// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;
use rand::{Rng, rngs::ThreadRng};

const COLOR_NAMES: [&str; 12] = [
    "amber", "azure", "coral", "crimson", "indigo", "ivory", "jade", "lilac", "ochre",
    "olive", "teal", "umber",
];

const CURVE_NAMES: [&str; 12] = [
    "arc",
    "cardioid",
    "catenary",
    "cycloid",
    "ellipse",
    "helix",
    "hyperbola",
    "lemniscate",
    "parabola",
    "rose",
    "spiral",
    "trochoid",
];

/// Generate a human readable id that is also unique across processes, eg:
/// `teal-helix-042-5f0c...`. Used to name the directory that holds the data files of a
/// session, so two sessions (even in two processes) never share data files.
#[must_use]
pub fn generate_friendly_random_id() -> InlineString {
    let mut rng: ThreadRng = rand::rng();

    let color = COLOR_NAMES[rng.random_range(0..COLOR_NAMES.len())];
    let curve = CURVE_NAMES[rng.random_range(0..CURVE_NAMES.len())];
    let number: u16 = rng.random_range(0..1000);
    let uuid = uuid::Uuid::new_v4();

    let mut acc = InlineString::with_capacity(
        color.len() + curve.len() + 3 + 36 + 3, // 3 for the number, 36 for the uuid, 3 for the dashes
    );
    use std::fmt::Write as _;
    _ = write!(acc, "{color}-{curve}-{number:03}-{uuid}");

    acc
}
