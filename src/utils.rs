// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Normalize extracted text: line breaks become spaces, whitespace runs
/// collapse to a single space, and the ends are trimmed.
///
/// - `"Line1\n\n  Line2"` → `"Line1 Line2"`
/// - `"  Hello\r\n world "` → `"Hello world"`
/// - `"\n\t "` → `""`
///
/// Idempotent: `normalize_text(&normalize_text(s)) == normalize_text(s)`.
pub fn normalize_text(value: &str) -> String {
    // split_whitespace covers \r and \n along with every other Unicode space,
    // so the line-break replacement and the squeeze happen in one pass.
    let mut out = String::with_capacity(value.len());
    for word in value.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Normalize each fragment, drop the empty ones, and join with single spaces.
pub fn join_normalized<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fragments
        .into_iter()
        .map(|f| normalize_text(f.as_ref()))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
