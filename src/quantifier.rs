// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// A repetition specifier applied to the immediately preceding element or
/// group, e.g. `\d` + [`Quantifier::exactly`]`(4)` renders as `\d{4}`.
///
/// Quantifiers default to greedy matching. [`Quantifier::but_as_few_as_possible`]
/// converts a quantifier to lazy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantifier {
    repeat: Repeat,
    lazy: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    ZeroOrMore,
    OneOrMore,
    ZeroOrOne,
    Exactly(usize),
    AtLeast(usize),
    NoMoreThan(usize),
    Between(usize, usize),
}

impl Quantifier {
    /// Match the preceding element zero or more times (`*`).
    pub fn zero_or_more() -> Self {
        Self::greedy(Repeat::ZeroOrMore)
    }

    /// Match the preceding element one or more times (`+`).
    pub fn one_or_more() -> Self {
        Self::greedy(Repeat::OneOrMore)
    }

    /// Match the preceding element once or not at all (`?`).
    pub fn zero_or_one() -> Self {
        Self::greedy(Repeat::ZeroOrOne)
    }

    /// Match an exact number of occurrences of the preceding element
    /// (`{n}`).
    pub fn exactly(times: usize) -> Self {
        Self::greedy(Repeat::Exactly(times))
    }

    /// Match at least a minimum number of occurrences of the preceding
    /// element (`{n,}`).
    pub fn at_least(minimum: usize) -> Self {
        Self::greedy(Repeat::AtLeast(minimum))
    }

    /// Match no more than a maximum number of occurrences of the preceding
    /// element (`{0,m}`).
    pub fn no_more_than(maximum: usize) -> Self {
        Self::greedy(Repeat::NoMoreThan(maximum))
    }

    /// Match at least a minimum, and no more than a maximum, occurrences of
    /// the preceding element (`{n,m}`).
    pub fn between(minimum: usize, maximum: usize) -> Self {
        Self::greedy(Repeat::Between(minimum, maximum))
    }

    /// Get a lazy (non-greedy) version of this quantifier: when matching a
    /// variable number of elements it will match as few as possible.
    ///
    /// The conversion is a plain value transformation: applying it more than
    /// once is the same as applying it once. An exact count has no
    /// greedy/lazy axis, so on [`Quantifier::exactly`] this is a no-op.
    pub fn but_as_few_as_possible(mut self) -> Self {
        if !matches!(self.repeat, Repeat::Exactly(_)) {
            self.lazy = true;
        }
        self
    }

    fn greedy(repeat: Repeat) -> Self {
        Self {
            repeat,
            lazy: false,
        }
    }
}

impl Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.repeat {
            Repeat::ZeroOrMore => f.write_str("*")?,
            Repeat::OneOrMore => f.write_str("+")?,
            Repeat::ZeroOrOne => f.write_str("?")?,
            Repeat::Exactly(times) => write!(f, "{{{}}}", times)?,
            Repeat::AtLeast(minimum) => write!(f, "{{{},}}", minimum)?,
            Repeat::NoMoreThan(maximum) => write!(f, "{{0,{}}}", maximum)?,
            Repeat::Between(minimum, maximum) => write!(f, "{{{},{}}}", minimum, maximum)?,
        }

        if self.lazy {
            f.write_str("?")?;
        }

        Ok(())
    }
}
