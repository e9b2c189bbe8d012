// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

mod alternation;
mod builder;
mod charclass;
mod error;
mod escape;
mod group;
mod options;
mod quantifier;
mod replace;

pub use alternation::SubPattern;
pub use builder::RegexBuilder;
pub use error::BuildError;
pub use options::BuildOption;
pub use quantifier::Quantifier;
pub use replace::RegexExt;

// the compiled pattern type handed back by `RegexBuilder::build`
pub use regex::Regex;
