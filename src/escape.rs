// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// The characters that carry meta meaning in pattern text and therefore
/// need a preceding backslash when they are meant literally.
const META_CHARACTERS: [char; 14] = [
    '\\', '?', '.', '+', '*', '^', '$', '(', ')', '[', ']', '{', '}', '|',
];

/// Escape `text` so that it matches itself when dropped into a pattern.
///
/// Each metacharacter is escaped individually; nothing else is touched.
/// The backslash is listed first in [`META_CHARACTERS`] and handled by a
/// single pass over the input, so backslashes inserted by the escaping
/// itself are never re-escaped.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if META_CHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escape `chars` for use inside a bracket expression (`[...]`).
///
/// `]` would close the class early and `-` would start a range, so both are
/// escaped wherever they appear. `^` means negation only in the leading
/// position, so it is escaped when, and only when, it is the first character
/// of the input. Backslash is passed through untouched: a caller-supplied
/// `\` acts as an escape introducer for the character that follows it.
pub fn escape_for_character_class(chars: &str) -> String {
    let mut escaped = String::with_capacity(chars.len());
    for (i, c) in chars.chars().enumerate() {
        match c {
            ']' | '-' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '^' if i == 0 => {
                escaped.push('\\');
                escaped.push('^');
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
