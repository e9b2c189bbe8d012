// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Grouping elements.
//!
//! The builder tracks balance with a plain counter: capturing,
//! non-capturing and named groups all owe exactly one close, so the kind
//! of an open group never matters for validation.
//!
//! The closure-taking methods are the primary interface; they pair open
//! and close mechanically, so no imbalance can arise through them. The
//! `start_*`/`end_group` primitives exist for callers who need to
//! interleave group boundaries with their own control flow, and they are
//! where the balance checks earn their keep.

use crate::{builder::RegexBuilder, error::BuildError, quantifier::Quantifier};

impl RegexBuilder {
    /// Add a capture group. Capture groups group part of the pattern so a
    /// quantifier can apply to all of it, and record what the group matched
    /// for retrieval from the host engine's match object.
    ///
    /// If the match should not be recorded, use
    /// [`RegexBuilder::non_capturing_group`].
    ///
    /// ```
    /// use regex_fluent::RegexBuilder;
    ///
    /// let re = RegexBuilder::new()
    ///     .group(
    ///         |r| {
    ///             r.letter(None).digit(None);
    ///         },
    ///         None,
    ///     )
    ///     .build(&[])
    ///     .unwrap();
    /// assert_eq!(re.as_str(), r"(\p{L}\d)");
    /// ```
    pub fn group<F>(&mut self, group_elements: F, quantifier: Option<Quantifier>) -> &mut Self
    where
        F: FnOnce(&mut RegexBuilder),
    {
        self.start_group();
        group_elements(self);
        self.close_group(quantifier)
    }

    /// Add a non-capturing group: grouping for quantification only, with
    /// nothing recorded for later retrieval.
    pub fn non_capturing_group<F>(
        &mut self,
        group_elements: F,
        quantifier: Option<Quantifier>,
    ) -> &mut Self
    where
        F: FnOnce(&mut RegexBuilder),
    {
        self.start_non_capturing_group();
        group_elements(self);
        self.close_group(quantifier)
    }

    /// Add a named capture group. The recorded match can be retrieved from
    /// the host engine's match object by `name` as well as by index.
    pub fn named_group<F>(
        &mut self,
        name: &str,
        group_elements: F,
        quantifier: Option<Quantifier>,
    ) -> &mut Self
    where
        F: FnOnce(&mut RegexBuilder),
    {
        self.start_named_group(name);
        group_elements(self);
        self.close_group(quantifier)
    }

    /// Open a capture group without closing it. Prefer
    /// [`RegexBuilder::group`], which cannot leave the pattern unbalanced;
    /// every call to a `start_*` method owes a later
    /// [`RegexBuilder::end_group`].
    pub fn start_group(&mut self) -> &mut Self {
        self.open_group_count += 1;
        self.add_part("(", None)
    }

    /// Open a non-capturing group without closing it. See
    /// [`RegexBuilder::start_group`].
    pub fn start_non_capturing_group(&mut self) -> &mut Self {
        self.open_group_count += 1;
        self.add_part("(?:", None)
    }

    /// Open a named capture group without closing it. See
    /// [`RegexBuilder::start_group`].
    pub fn start_named_group(&mut self, name: &str) -> &mut Self {
        self.open_group_count += 1;
        let part = format!("(?<{}>", name);
        self.add_part(&part, None)
    }

    /// Close the innermost open group, applying `quantifier` to the whole
    /// group. Fails immediately when no group is open.
    pub fn end_group(&mut self, quantifier: Option<Quantifier>) -> Result<&mut Self, BuildError> {
        if self.open_group_count == 0 {
            return Err(BuildError::UnopenedGroup {
                pattern: self.pattern.clone(),
            });
        }
        Ok(self.close_group(quantifier))
    }

    // Close path shared by the closure methods, which hold an open group by
    // construction, so no balance check is repeated here.
    fn close_group(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.open_group_count -= 1;
        self.add_part(")", quantifier)
    }
}
