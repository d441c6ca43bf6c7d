// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Token splitting and separator assembly.

/// Separator used when the caller passes an empty one.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Characters that survive tokenization as content.
pub fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Resolve the separator, falling back to [`DEFAULT_SEPARATOR`] when empty.
pub fn effective_separator(separator: &str) -> &str {
    if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    }
}

/// Lowercase `text`, split it on runs of unsafe characters, and join the
/// non-empty tokens with `separator` (or the default when empty).
///
/// The separator is only a joining string: literal occurrences in `text` are
/// split or kept like any other character.
pub fn join_tokens(text: &str, separator: &str) -> String {
    let separator = effective_separator(separator);
    text.to_ascii_lowercase()
        .split(|c: char| !is_safe(c))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
