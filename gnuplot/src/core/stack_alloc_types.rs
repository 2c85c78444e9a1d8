// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Most of the strings this crate builds are short gnuplot commands (`set xlabel '...'`,
//! `[0:5]`, `$data3`) and most of the vectors are tiny (histogram bins, data block
//! names). Keep them on the stack until they outgrow it.

use smallstr::SmallString;
use smallvec::SmallVec;

/// Fits a range expression like `[-10:10]` or a data block name without spilling.
pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;

pub const INLINE_VEC_SIZE: usize = 8;

/// Stack allocated string storage for small strings. When this gets larger than
/// [`DEFAULT_STRING_STORAGE_SIZE`], it will be [`smallvec::SmallVec::spilled`] on the
/// heap.
pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

/// Stack allocated list. When this gets larger than [`INLINE_VEC_SIZE`], it will be
/// [`smallvec::SmallVec::spilled`] on the heap.
pub type InlineVec<T> = SmallVec<[T; INLINE_VEC_SIZE]>;
