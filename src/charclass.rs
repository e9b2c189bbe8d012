// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Bracket-expression elements: classes built from caller-supplied
//! character sets, and the fixed classes that need no escaping because
//! their contents are engine-recognized sequences.

use crate::{builder::RegexBuilder, escape::escape_for_character_class, quantifier::Quantifier};

impl RegexBuilder {
    /// Match any one of the characters in `characters`.
    ///
    /// The characters are escaped for use inside a bracket expression, so
    /// `"a-f"` matches `a`, `-` or `f`, not the range `a` through `f`.
    pub fn any_character_from(
        &mut self,
        characters: &str,
        quantifier: Option<Quantifier>,
    ) -> &mut Self {
        let class = format!("[{}]", escape_for_character_class(characters));
        self.add_part(&class, quantifier)
    }

    /// Match any single character except those in `characters`.
    pub fn any_character_except(
        &mut self,
        characters: &str,
        quantifier: Option<Quantifier>,
    ) -> &mut Self {
        let class = format!("[^{}]", escape_for_character_class(characters));
        self.add_part(&class, quantifier)
    }

    /// Match any Unicode letter or decimal digit.
    pub fn letter_or_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"[\p{L}0-9]", quantifier)
    }

    /// Match any character that is not a Unicode letter or a decimal digit.
    pub fn non_letter_or_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"[^\p{L}0-9]", quantifier)
    }

    /// Match any hexadecimal digit (a-f, A-F, 0-9).
    pub fn hex_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part("[0-9A-Fa-f]", quantifier)
    }

    /// Match any upper-case hexadecimal digit (A-F, 0-9).
    pub fn uppercase_hex_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part("[0-9A-F]", quantifier)
    }

    /// Match any lower-case hexadecimal digit (a-f, 0-9).
    pub fn lowercase_hex_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part("[0-9a-f]", quantifier)
    }

    /// Match any character that is not a hexadecimal digit.
    pub fn non_hex_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part("[^0-9A-Fa-f]", quantifier)
    }

    /// Match any Unicode letter, decimal digit, or underscore.
    pub fn word_character(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"[\p{L}0-9_]", quantifier)
    }

    /// Match any character that is not a Unicode letter, decimal digit, or
    /// underscore.
    pub fn non_word_character(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"[^\p{L}0-9_]", quantifier)
    }
}
