// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrap the given value (or unit) in [`Ok`].
///
/// ```
/// use r3bl_gnuplot::{ok, PlotResult};
/// fn nothing() -> PlotResult<()> { ok!() }
/// fn something() -> PlotResult<u8> { ok!(42) }
/// assert_eq!(something().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// Format arguments into a [`crate::InlineString`], like [format!] but without
/// allocating a [String] for short results.
///
/// ```
/// use r3bl_gnuplot::inline_string;
/// let axis = "x";
/// assert_eq!(inline_string!("set {axis}label"), "set xlabel");
/// ```
#[macro_export]
macro_rules! inline_string {
    ($($format:tt)*) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        // We don't care about the result of this operation.
        _ = write!(acc, $($format)*);
        acc
    }};
}

// XMARK: Clever Rust, use of decl macro w/ `tt` to allow any number of arguments.

/// Join a collection into a [`crate::InlineString`] with a delimiter, formatting each
/// item with access to its index. This is how the comma separated series list of a
/// `plot` command is built.
///
/// ```
/// use r3bl_gnuplot::join_with_index;
/// let titles = ["up", "down"];
/// let result = join_with_index!(
///     from: titles,
///     each: title,
///     index: index,
///     delim: ", ",
///     format: "$data{index} title '{title}'"
/// );
/// assert_eq!(result, "$data0 title 'up', $data1 title 'down'");
/// ```
#[macro_export]
macro_rules! join_with_index {
    (
        from: $collection:expr,
        each: $item:ident,
        index: $index:ident,
        delim: $delim:expr,
        format: $($format:tt)*
    ) => {{
        use std::fmt::Write as _;
        let mut acc = $crate::InlineString::new();
        let mut iter = $collection.iter().enumerate();
        // First item.
        if let Some(($index, $item)) = iter.next() {
            // We don't care about the result of this operation.
            write!(&mut acc, $($format)*).ok();
        }
        // Rest of the items.
        for ($index, $item) in iter {
            // We don't care about the result of this operation.
            write!(&mut acc, "{}", $delim).ok();
            // We don't care about the result of this operation.
            write!(&mut acc, $($format)*).ok();
        }
        acc
    }};
}
