// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Options that can be passed to `RegexBuilder::build`.
///
/// This is a closed set: each option maps to one host-engine flag, and the
/// flags of all supplied options are combined. The host engine always
/// compiles patterns ahead of time, so there is no separate
/// ahead-of-time-compilation option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildOption {
    /// Make the pattern case-insensitive.
    IgnoreCase,

    /// Make the `^` and `$` anchors also match at line breaks within a
    /// multi-line string.
    Multiline,
}

/// Fold a set of options into a configured host-engine builder for
/// `pattern`. Supplying an option more than once is harmless.
pub fn apply_options(pattern: &str, options: &[BuildOption]) -> regex::RegexBuilder {
    let mut host_builder = regex::RegexBuilder::new(pattern);
    for option in options {
        match option {
            BuildOption::IgnoreCase => {
                host_builder.case_insensitive(true);
            }
            BuildOption::Multiline => {
                host_builder.multi_line(true);
            }
        }
    }
    host_builder
}

#[cfg(test)]
mod tests {
    use super::{apply_options, BuildOption};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_options() {
        let re = apply_options("cat", &[]).build().unwrap();
        assert!(re.is_match("cat"));
        assert!(!re.is_match("CAT"));
    }

    #[test]
    fn test_ignore_case() {
        let re = apply_options("cat", &[BuildOption::IgnoreCase])
            .build()
            .unwrap();
        assert!(re.is_match("cat"));
        assert!(re.is_match("CAT"));
    }

    #[test]
    fn test_multiline() {
        let re = apply_options("^cat$", &[BuildOption::Multiline])
            .build()
            .unwrap();
        assert!(re.is_match("dog\ncat\nfish"));

        let re = apply_options("^cat$", &[]).build().unwrap();
        assert!(!re.is_match("dog\ncat\nfish"));
    }

    #[test]
    fn test_combined_options() {
        let re = apply_options("^cat$", &[BuildOption::IgnoreCase, BuildOption::Multiline])
            .build()
            .unwrap();
        assert!(re.is_match("dog\nCAT\nfish"));
    }

    #[test]
    fn test_duplicate_options_are_harmless() {
        let re = apply_options("cat", &[BuildOption::IgnoreCase, BuildOption::IgnoreCase])
            .build()
            .unwrap();
        assert_eq!(re.is_match("CAT"), true);
    }
}
