// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reduce Unicode text to ASCII.
//!
//! Letters that decomposition cannot resolve to a single ASCII base are
//! looked up in a fixed table first; everything else goes through NFKD with
//! combining marks stripped. Whatever is still non-ASCII is dropped.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Letters transliterated before decomposition.
const SPECIAL_LETTERS: &[(char, &str)] = &[
    ('æ', "ae"),
    ('Æ', "AE"),
    ('ø', "oe"),
    ('Ø', "OE"),
    ('å', "a"),
    ('Å', "A"),
    ('ß', "ss"),
    ('ẞ', "SS"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('đ', "d"),
    ('Đ', "D"),
    ('ð', "d"),
    ('Ð', "D"),
    ('þ', "th"),
    ('Þ', "TH"),
    ('ł', "l"),
    ('Ł', "L"),
    ('ħ', "h"),
    ('Ħ', "H"),
    ('ı', "i"),
    ('ŋ', "ng"),
    ('Ŋ', "NG"),
    ('ĸ', "k"),
];

/// Look up the fixed transliteration for `c`, if any.
pub fn special_letter(c: char) -> Option<&'static str> {
    SPECIAL_LETTERS
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, ascii)| *ascii)
}

/// Convert `input` to ASCII, preserving case.
///
/// `"Wôrķšpáçè"` becomes `"Workspace"`, `"Ærø"` becomes `"AEroe"`, and
/// characters with no ASCII form (CJK, emoji, symbols) disappear.
pub fn to_ascii(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c.is_ascii() {
            out.push(c);
        } else if let Some(ascii) = special_letter(c) {
            out.push_str(ascii);
        } else {
            out.extend(
                std::iter::once(c)
                    .nfkd()
                    .filter(|d| !is_combining_mark(*d))
                    .filter(char::is_ascii),
            );
        }
    }
    out
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
