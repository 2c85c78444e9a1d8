// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::InlineString;

/// gnuplot single quoted strings can't contain a bare `'`. Inside them `''` stands for
/// one literal quote.
pub const RESERVED_QUOTE: char = '\'';

/// Double every [`RESERVED_QUOTE`] in `text`. Every other character passes through
/// unchanged. Apply this to all user supplied text (axis labels, series titles,
/// multiplot titles, file paths) that ends up between single quotes in a command.
///
/// ```
/// use r3bl_gnuplot::escape_quotes;
/// assert_eq!(escape_quotes("O'Brien"), "O''Brien");
/// ```
#[must_use]
pub fn escape_quotes(text: &str) -> InlineString {
    let mut acc = InlineString::with_capacity(text.len());
    for ch in text.chars() {
        if ch == RESERVED_QUOTE {
            acc.push(RESERVED_QUOTE);
        }
        acc.push(ch);
    }
    acc
}

#[cfg(test)]
mod tests_escape {
    use super::*;
    use test_case::test_case;

    #[test_case("O'Brien", "O''Brien" ; "single quote")]
    #[test_case("Series #1", "Series #1" ; "no quote")]
    #[test_case("''", "''''" ; "only quotes")]
    #[test_case("", "" ; "empty")]
    #[test_case("it's \"quoted\"", "it''s \"quoted\"" ; "double quotes untouched")]
    #[test_case("Δx [µm]'", "Δx [µm]''" ; "unicode")]
    fn test_escape_quotes(input: &str, expected: &str) {
        assert_eq!(escape_quotes(input), expected);
    }
}
