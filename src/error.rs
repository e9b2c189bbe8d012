// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Errors raised while assembling or finalizing a pattern.
///
/// These are contract violations, not transient failures: there is no
/// retry path, every error propagates to the caller. Each variant carries
/// the pattern text accumulated up to the moment of failure so the caller
/// can see exactly how far construction progressed.
#[derive(Debug)]
pub enum BuildError {
    /// `build` was called while one or more groups were still open.
    UnclosedGroup {
        /// The number of groups that were opened and never closed.
        open_groups: usize,
        /// The pattern text at the moment of failure.
        pattern: String,
    },

    /// A group was closed when none was open.
    UnopenedGroup {
        /// The pattern text at the moment of failure.
        pattern: String,
    },

    /// An alternation was requested with no alternatives supplied.
    NoAlternatives {
        /// The pattern text at the moment of failure.
        pattern: String,
    },

    /// The host matching engine rejected the assembled pattern.
    ///
    /// Only reachable through raw, unescaped pattern text (see
    /// `RegexBuilder::regex_text`); everything else the builder emits is
    /// well-formed by construction.
    Compile {
        source: regex::Error,
        /// The pattern text that was handed to the host engine.
        pattern: String,
    },
}

impl BuildError {
    /// The pattern text as it stood when the error was raised.
    pub fn pattern(&self) -> &str {
        match self {
            BuildError::UnclosedGroup { pattern, .. } => pattern,
            BuildError::UnopenedGroup { pattern } => pattern,
            BuildError::NoAlternatives { pattern } => pattern,
            BuildError::Compile { pattern, .. } => pattern,
        }
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::UnclosedGroup {
                open_groups,
                pattern,
            } => write!(
                f,
                "Cannot build the pattern: {} group(s) started but not ended.\nThe pattern so far: {}",
                open_groups, pattern
            ),
            BuildError::UnopenedGroup { pattern } => write!(
                f,
                "Cannot end a group: no group is currently open.\nThe pattern so far: {}",
                pattern
            ),
            BuildError::NoAlternatives { pattern } => write!(
                f,
                "No alternatives supplied.\nThe pattern so far: {}",
                pattern
            ),
            BuildError::Compile { source, pattern } => write!(
                f,
                "The host engine rejected the pattern: {}\nThe pattern: {}",
                source, pattern
            ),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Compile { source, .. } => Some(source),
            _ => None,
        }
    }
}
