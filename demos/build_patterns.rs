// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use regex_fluent::{BuildOption, Quantifier, RegexBuilder};

pub fn main() {
    date();
    key_value();
}

fn date() {
    // `^\d{4}-\d{2}-\d{2}$`
    let re = RegexBuilder::new()
        .start_of_string()
        .digit(Some(Quantifier::exactly(4)))
        .text("-", None)
        .digit(Some(Quantifier::exactly(2)))
        .text("-", None)
        .digit(Some(Quantifier::exactly(2)))
        .end_of_string()
        .build(&[])
        .unwrap();

    println!("{}", re.is_match("2025-04-22")); // should be true
    println!("{}", re.is_match("04-22")); // should be false
}

fn key_value() {
    // `^(?<key>[\p{L}0-9_]+)\s*=\s*(?<value>.*)$`, case-insensitive
    let re = RegexBuilder::new()
        .start_of_string()
        .named_group(
            "key",
            |r| {
                r.word_character(Some(Quantifier::one_or_more()));
            },
            None,
        )
        .possible_whitespace()
        .text("=", None)
        .possible_whitespace()
        .named_group(
            "value",
            |r| {
                r.any_character(Some(Quantifier::zero_or_more()));
            },
            None,
        )
        .end_of_string()
        .build(&[BuildOption::IgnoreCase])
        .unwrap();

    let caps = re.captures("Timeout = 30").unwrap();
    println!("{}", caps.name("key").unwrap().as_str()); // should be "Timeout"
    println!("{}", caps.name("value").unwrap().as_str()); // should be "30"
}
