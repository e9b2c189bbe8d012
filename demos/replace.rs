// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fluent::{Quantifier, RegexBuilder, RegexExt};

pub fn main() {
    let re = RegexBuilder::new()
        .digit(Some(Quantifier::one_or_more()))
        .build(&[])
        .unwrap();

    println!("{}", re.remove_all("a1b22c333")); // should be "abc"
    println!("{}", re.remove_first("a1b22c333")); // should be "ab22c333"
    println!("{}", re.remove_last("a1b22c333")); // should be "a1b22c"
    println!("{}", re.replace_all_literal("a1b22c333", "#")); // should be "a#b#c#"
}
