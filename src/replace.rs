// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

//! Convenience pass-throughs over the host engine's replace primitive.
//!
//! Nothing here inspects or interprets patterns; every method delegates to
//! the compiled pattern and returns `Cow::Borrowed` when there is no match,
//! so unmatched input is handed back unchanged rather than copied.

use std::borrow::Cow;

use regex::{NoExpand, Regex};

/// Remove/replace helpers on a compiled pattern.
pub trait RegexExt {
    /// Remove all matches of this pattern from `input`.
    fn remove_all<'t>(&self, input: &'t str) -> Cow<'t, str>;

    /// Remove the first match of this pattern from `input`.
    fn remove_first<'t>(&self, input: &'t str) -> Cow<'t, str>;

    /// Remove the last match of this pattern from `input`.
    fn remove_last<'t>(&self, input: &'t str) -> Cow<'t, str>;

    /// Replace all matches of this pattern in `input` with `replacement`,
    /// taken literally: `$` in the replacement is never expanded as a
    /// capture-group reference.
    fn replace_all_literal<'t>(&self, input: &'t str, replacement: &str) -> Cow<'t, str>;
}

impl RegexExt for Regex {
    fn remove_all<'t>(&self, input: &'t str) -> Cow<'t, str> {
        self.replace_all(input, NoExpand(""))
    }

    fn remove_first<'t>(&self, input: &'t str) -> Cow<'t, str> {
        self.replace(input, NoExpand(""))
    }

    fn remove_last<'t>(&self, input: &'t str) -> Cow<'t, str> {
        match self.find_iter(input).last() {
            Some(m) => {
                let mut removed = String::with_capacity(input.len() - m.len());
                removed.push_str(&input[..m.start()]);
                removed.push_str(&input[m.end()..]);
                Cow::Owned(removed)
            }
            None => Cow::Borrowed(input),
        }
    }

    fn replace_all_literal<'t>(&self, input: &'t str, replacement: &str) -> Cow<'t, str> {
        self.replace_all(input, NoExpand(replacement))
    }
}

#[cfg(test)]
mod tests {
    use super::RegexExt;
    use crate::{builder::RegexBuilder, quantifier::Quantifier};
    use pretty_assertions::assert_eq;
    use std::borrow::Cow;

    fn digits() -> regex::Regex {
        RegexBuilder::new()
            .digit(Some(Quantifier::one_or_more()))
            .build(&[])
            .unwrap()
    }

    #[test]
    fn test_remove_all() {
        let re = digits();
        assert_eq!(re.remove_all("a1b22c333"), "abc");
    }

    #[test]
    fn test_remove_first() {
        let re = digits();
        assert_eq!(re.remove_first("a1b22c333"), "ab22c333");
    }

    #[test]
    fn test_remove_last() {
        let re = digits();
        assert_eq!(re.remove_last("a1b22c333"), "a1b22c");
    }

    #[test]
    fn test_no_match_is_identity_not_a_copy() {
        let re = digits();
        let input = "no numbers here";

        assert!(matches!(re.remove_all(input), Cow::Borrowed(s) if s == input));
        assert!(matches!(re.remove_first(input), Cow::Borrowed(s) if s == input));
        assert!(matches!(re.remove_last(input), Cow::Borrowed(s) if s == input));
        assert!(matches!(
            re.replace_all_literal(input, "x"),
            Cow::Borrowed(s) if s == input
        ));
    }

    #[test]
    fn test_replace_all_literal() {
        let re = digits();
        assert_eq!(re.replace_all_literal("a1b22c333", "#"), "a#b#c#");
    }

    #[test]
    fn test_replacement_dollar_is_not_expanded() {
        let re = RegexBuilder::new()
            .group(
                |r| {
                    r.digit(None);
                },
                None,
            )
            .build(&[])
            .unwrap();

        // "$1" stays "$1" rather than echoing the captured digit
        assert_eq!(re.replace_all_literal("a7b", "$1"), "a$1b");
    }
}
