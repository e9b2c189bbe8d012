// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Alternation elements: `(?:a|b|c)`-style groups built from literal
//! strings or from nested sub-pattern closures.

use crate::{builder::RegexBuilder, error::BuildError, escape::escape_text, quantifier::Quantifier};

/// A closure that appends one alternative to the shared builder, used by
/// [`RegexBuilder::any_of_patterns`]. Each alternative can be an
/// arbitrarily complex chain in its own right.
pub type SubPattern<'a> = &'a dyn Fn(&mut RegexBuilder);

impl RegexBuilder {
    /// Match any one of the strings provided. Each string is escaped the
    /// same way as [`RegexBuilder::text`].
    ///
    /// A single string is appended directly with no enclosing group; two or
    /// more are joined with `|` inside one non-capturing group, with the
    /// quantifier applied to the whole group.
    ///
    /// An empty `strings` slice is an error: silently appending nothing
    /// would produce a pattern the caller did not ask for.
    pub fn any_of(
        &mut self,
        strings: &[&str],
        quantifier: Option<Quantifier>,
    ) -> Result<&mut Self, BuildError> {
        match strings {
            [] => Err(BuildError::NoAlternatives {
                pattern: self.pattern.clone(),
            }),
            [only] => {
                let safe_text = escape_text(only);
                match quantifier {
                    None => Ok(self.add_part(&safe_text, None)),
                    Some(_) => Ok(self.add_part_in_non_capturing_group(&safe_text, quantifier)),
                }
            }
            _ => {
                let alternatives = strings
                    .iter()
                    .map(|s| escape_text(s))
                    .collect::<Vec<_>>()
                    .join("|");
                Ok(self.add_part_in_non_capturing_group(&alternatives, quantifier))
            }
        }
    }

    /// Match any one of the sub-patterns provided. Each closure receives
    /// the builder and appends one alternative.
    ///
    /// The result is always wrapped in one non-capturing group, even for a
    /// single sub-pattern, because an alternative may contain several
    /// atoms. An empty slice is an error, as in [`RegexBuilder::any_of`].
    ///
    /// ```
    /// use regex_fluent::{Quantifier, RegexBuilder};
    ///
    /// let re = RegexBuilder::new()
    ///     .any_of_patterns(
    ///         &[
    ///             &|r| {
    ///                 r.digit(Some(Quantifier::exactly(3)));
    ///             },
    ///             &|r| {
    ///                 r.letter(Some(Quantifier::exactly(4)));
    ///             },
    ///         ],
    ///         None,
    ///     )
    ///     .unwrap()
    ///     .build(&[])
    ///     .unwrap();
    /// assert_eq!(re.as_str(), r"(?:\d{3}|\p{L}{4})");
    /// ```
    pub fn any_of_patterns(
        &mut self,
        sub_patterns: &[SubPattern],
        quantifier: Option<Quantifier>,
    ) -> Result<&mut Self, BuildError> {
        if sub_patterns.is_empty() {
            return Err(BuildError::NoAlternatives {
                pattern: self.pattern.clone(),
            });
        }

        self.start_non_capturing_group();
        for (i, sub_pattern) in sub_patterns.iter().enumerate() {
            if i > 0 {
                self.add_part("|", None);
            }
            sub_pattern(self);
        }

        // the group above is still open, so this cannot fail
        self.end_group(quantifier)
    }
}
