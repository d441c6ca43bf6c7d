// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Emoji-to-name replacement.

use unicode_segmentation::UnicodeSegmentation;

const VARIATION_SELECTORS: [char; 2] = ['\u{FE0E}', '\u{FE0F}'];

/// Replace every recognized emoji grapheme in `input` with its name.
///
/// Names are padded with spaces so they always form their own token.
/// Unrecognized graphemes are left in place for normalization to drop.
pub fn replace_emoji(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for grapheme in input.graphemes(true) {
        match lookup_name(grapheme) {
            Some(name) => {
                out.push(' ');
                out.push_str(&name);
                out.push(' ');
            }
            None => out.push_str(grapheme),
        }
    }
    out
}

/// Look up the hyphenated name of a single grapheme, e.g.
/// `"🌍"` -> `"globe-showing-europe-africa"`.
pub fn lookup_name(grapheme: &str) -> Option<String> {
    if grapheme.is_ascii() {
        return None;
    }
    if let Some(emoji) = emojis::get(grapheme) {
        return Some(hyphenate(emoji.name()));
    }
    // The table keys fully-qualified forms; retry without selectors, then
    // with the emoji-presentation selector appended.
    let bare: String = grapheme
        .chars()
        .filter(|c| !VARIATION_SELECTORS.contains(c))
        .collect();
    let emoji = emojis::get(&bare).or_else(|| emojis::get(&format!("{bare}\u{FE0F}")))?;
    Some(hyphenate(emoji.name()))
}

/// Symbols that carry meaning in CLDR names and would otherwise be dropped
/// (`keycap: #` and `keycap: *` must not both become `keycap`).
const NAMED_SYMBOLS: [(char, &str); 2] = [('#', " number sign "), ('*', " asterisk ")];

/// Lowercase `name` and collapse every run of non-alphanumerics into `-`.
fn hyphenate(name: &str) -> String {
    let mut spelled = String::with_capacity(name.len());
    for c in name.chars() {
        match NAMED_SYMBOLS.iter().find(|(symbol, _)| *symbol == c) {
            Some((_, word)) => spelled.push_str(word),
            None => spelled.push(c),
        }
    }
    spelled
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[path = "emoji_tests.rs"]
mod tests;
