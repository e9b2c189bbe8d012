// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;
use std::fmt::Write;

use crate::{
    error::BuildError, escape::escape_text, options::apply_options, options::BuildOption,
    quantifier::Quantifier,
};

/// Builds regular expressions in a human-readable way using a fluent API.
///
/// Chain method calls representing the elements to match, then finish with
/// [`RegexBuilder::build`] to compile the pattern with the host engine.
///
/// ```
/// use regex_fluent::RegexBuilder;
///
/// let re = RegexBuilder::new()
///     .text("cat", None)
///     .end_of_string()
///     .build(&[])
///     .unwrap();
///
/// assert!(re.is_match("tomcat"));
/// assert!(!re.is_match("category"));
/// ```
///
/// Every element method appends to a single pattern buffer and returns the
/// builder again, so the buffer is always a well-formed prefix of a pattern
/// (possibly with groups still open). The builder is not thread-safe: one
/// instance, one call site.
#[derive(Debug, Default)]
pub struct RegexBuilder {
    pub(crate) pattern: String,
    pub(crate) open_group_count: usize,
}

impl RegexBuilder {
    pub fn new() -> Self {
        Self {
            pattern: String::new(),
            open_group_count: 0,
        }
    }

    /// Build a compiled pattern from the current builder state, applying
    /// `options` to the host engine.
    ///
    /// Fails if any group is still open, or if the host engine rejects the
    /// assembled text (only possible via [`RegexBuilder::regex_text`]).
    /// After a successful build the buffer is cleared and the builder is
    /// ready for re-use; an immediate second `build` therefore compiles the
    /// empty pattern.
    pub fn build(&mut self, options: &[BuildOption]) -> Result<regex::Regex, BuildError> {
        if self.open_group_count > 0 {
            return Err(BuildError::UnclosedGroup {
                open_groups: self.open_group_count,
                pattern: self.pattern.clone(),
            });
        }

        let regex = apply_options(&self.pattern, options)
            .build()
            .map_err(|source| BuildError::Compile {
                source,
                pattern: self.pattern.clone(),
            })?;

        self.pattern.clear();
        Ok(regex)
    }

    /// Add text to the pattern. Any regex metacharacters in `text` are
    /// escaped, so `"Hello (world)"` matches the literal string
    /// `"Hello (world)"`, brackets included.
    ///
    /// A supplied quantifier applies to the whole text, not just its last
    /// character, by wrapping the text in a non-capturing group.
    pub fn text(&mut self, text: &str, quantifier: Option<Quantifier>) -> &mut Self {
        let safe_text = escape_text(text);
        match quantifier {
            None => self.add_part(&safe_text, None),
            Some(_) => self.add_part_in_non_capturing_group(&safe_text, quantifier),
        }
    }

    /// Add raw pattern text. Metacharacters are NOT escaped: `"(\d+)"` is
    /// appended verbatim and its parentheses act as a capture group. Only
    /// use this with syntax the host engine accepts; invalid text surfaces
    /// as [`BuildError::Compile`] at build time.
    ///
    /// A supplied quantifier applies to the whole text via a non-capturing
    /// group, as in [`RegexBuilder::text`].
    pub fn regex_text(&mut self, text: &str, quantifier: Option<Quantifier>) -> &mut Self {
        match quantifier {
            None => self.add_part(text, None),
            Some(_) => self.add_part_in_non_capturing_group(text, quantifier),
        }
    }

    /// Match any character.
    pub fn any_character(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(".", quantifier)
    }

    /// Match any single whitespace character.
    pub fn whitespace(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\s", quantifier)
    }

    /// Match any single non-whitespace character.
    pub fn non_whitespace(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\S", quantifier)
    }

    /// Match any amount of white space, including none. An alias for
    /// `whitespace(Some(Quantifier::zero_or_more()))`.
    pub fn possible_whitespace(&mut self) -> &mut Self {
        self.add_part(r"\s", Some(Quantifier::zero_or_more()))
    }

    /// Match a single space character. To match any kind of white space,
    /// use [`RegexBuilder::whitespace`].
    pub fn space(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(" ", quantifier)
    }

    /// Match a single tab character.
    pub fn tab(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\t", quantifier)
    }

    /// Match a single line feed character.
    pub fn line_feed(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\n", quantifier)
    }

    /// Match a single carriage return character.
    pub fn carriage_return(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\r", quantifier)
    }

    /// Match a line break: a line feed optionally preceded by a carriage
    /// return (`\r?\n`).
    ///
    /// The fragment contains two atoms, so a supplied quantifier wraps it
    /// in a non-capturing group; otherwise the quantifier would bind to the
    /// `\n` alone.
    pub fn new_line(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        match quantifier {
            None => self.add_part(r"\r?\n", None),
            Some(_) => self.add_part_in_non_capturing_group(r"\r?\n", quantifier),
        }
    }

    /// Match any single decimal digit (0-9).
    pub fn digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\d", quantifier)
    }

    /// Match any character that is not a decimal digit (0-9).
    pub fn non_digit(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\D", quantifier)
    }

    /// Match any Unicode letter.
    pub fn letter(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\p{L}", quantifier)
    }

    /// Match any character that is not a Unicode letter.
    pub fn non_letter(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\P{L}", quantifier)
    }

    /// Match any upper-case Unicode letter.
    pub fn uppercase_letter(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\p{Lu}", quantifier)
    }

    /// Match any lower-case Unicode letter.
    pub fn lowercase_letter(&mut self, quantifier: Option<Quantifier>) -> &mut Self {
        self.add_part(r"\p{Ll}", quantifier)
    }

    /// Add a zero-width anchor matching the start of the string.
    pub fn start_of_string(&mut self) -> &mut Self {
        self.add_part("^", None)
    }

    /// Add a zero-width anchor matching the end of the string.
    pub fn end_of_string(&mut self) -> &mut Self {
        self.add_part("$", None)
    }

    /// Add a zero-width anchor matching the boundary between a word
    /// character and either a non-word character or the start/end of the
    /// string.
    pub fn word_boundary(&mut self) -> &mut Self {
        self.add_part(r"\b", None)
    }

    /// Append a fragment followed by the rendered quantifier suffix, with
    /// no separator. Every element method funnels through here.
    pub(crate) fn add_part(&mut self, part: &str, quantifier: Option<Quantifier>) -> &mut Self {
        self.pattern.push_str(part);
        if let Some(quantifier) = quantifier {
            // the write cannot fail on a String
            let _ = write!(self.pattern, "{}", quantifier);
        }
        self
    }

    /// Wrap a fragment in a non-capturing group before appending, so a
    /// quantifier binds to the whole fragment rather than its last atom.
    pub(crate) fn add_part_in_non_capturing_group(
        &mut self,
        part: &str,
        quantifier: Option<Quantifier>,
    ) -> &mut Self {
        let grouped = format!("(?:{})", part);
        self.add_part(&grouped, quantifier)
    }
}

/// The pattern text accumulated so far. Useful for debugging a chain in
/// progress; [`BuildError`] carries the same snapshot at failure time.
impl Display for RegexBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBuilder;
    use crate::{error::BuildError, options::BuildOption, quantifier::Quantifier};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_plain() {
        let mut builder = RegexBuilder::new();
        builder.text("cat", None);
        assert_eq!(builder.to_string(), "cat");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match("a cat is here"));
        assert!(!re.is_match("dog"));
    }

    #[test]
    fn test_text_escapes_metacharacters() {
        let mut builder = RegexBuilder::new();
        builder.text(r"\?.+*^$()[]{}|", None);
        assert_eq!(builder.to_string(), r"\\\?\.\+\*\^\$\(\)\[\]\{\}\|");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match(r"\?.+*^$()[]{}|"));
        assert!(!re.is_match("ordinary text"));
    }

    #[test]
    fn test_text_with_quantifier_binds_to_whole_text() {
        let mut builder = RegexBuilder::new();
        builder
            .start_of_string()
            .text("ab", Some(Quantifier::one_or_more()))
            .end_of_string();
        assert_eq!(builder.to_string(), "^(?:ab)+$");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match("abab"));
        assert!(!re.is_match("abb"));
    }

    #[test]
    fn test_regex_text_is_not_escaped() {
        let mut builder = RegexBuilder::new();
        builder.regex_text(r"\d+ items", None);
        assert_eq!(builder.to_string(), r"\d+ items");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match("12 items"));
    }

    #[test]
    fn test_regex_text_invalid_syntax_fails_at_build() {
        let mut builder = RegexBuilder::new();
        builder.regex_text("(unclosed", None);

        let err = builder.build(&[]).unwrap_err();
        assert!(matches!(err, BuildError::Compile { .. }));
        assert_eq!(err.pattern(), "(unclosed");
    }

    #[test]
    fn test_single_token_elements() {
        let mut builder = RegexBuilder::new();
        builder
            .any_character(None)
            .whitespace(None)
            .non_whitespace(None)
            .tab(None)
            .line_feed(None)
            .carriage_return(None)
            .digit(None)
            .non_digit(None)
            .letter(None)
            .non_letter(None)
            .uppercase_letter(None)
            .lowercase_letter(None);
        assert_eq!(
            builder.to_string(),
            r".\s\S\t\n\r\d\D\p{L}\P{L}\p{Lu}\p{Ll}"
        );
    }

    #[test]
    fn test_possible_whitespace() {
        let mut builder = RegexBuilder::new();
        builder.text("a", None).possible_whitespace().text("b", None);
        assert_eq!(builder.to_string(), r"a\s*b");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match("ab"));
        assert!(re.is_match("a   b"));
    }

    #[test]
    fn test_new_line_quantifier_binds_to_whole_fragment() {
        let mut builder = RegexBuilder::new();
        builder.new_line(None);
        assert_eq!(builder.to_string(), "\\r?\\n");

        let mut builder = RegexBuilder::new();
        builder.new_line(Some(Quantifier::one_or_more()));
        assert_eq!(builder.to_string(), "(?:\\r?\\n)+");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match("\r\n\r\n"));
        assert!(re.is_match("\n\n"));
    }

    #[test]
    fn test_anchored_digit_count() {
        let mut builder = RegexBuilder::new();
        builder
            .start_of_string()
            .digit(Some(Quantifier::exactly(3)))
            .end_of_string();
        assert_eq!(builder.to_string(), r"^\d{3}$");

        let re = builder.build(&[]).unwrap();
        assert!(re.is_match("123"));
        assert!(!re.is_match("12"));
        assert!(!re.is_match("1234"));
    }

    #[test]
    fn test_word_boundary() {
        let mut builder = RegexBuilder::new();
        builder.word_boundary().text("cat", None).word_boundary();
        let re = builder.build(&[]).unwrap();

        assert!(re.is_match("a cat sat"));
        assert!(!re.is_match("certificate"));
    }

    #[test]
    fn test_lazy_quantifier_matches_as_few_as_possible() {
        let mut builder = RegexBuilder::new();
        builder
            .text("<", None)
            .any_character(Some(Quantifier::one_or_more().but_as_few_as_possible()))
            .text(">", None);
        assert_eq!(builder.to_string(), "<.+?>");

        let re = builder.build(&[]).unwrap();
        let m = re.find("<a><b>").unwrap();
        assert_eq!(m.as_str(), "<a>");
    }

    #[test]
    fn test_build_options_are_applied() {
        let mut builder = RegexBuilder::new();
        builder.start_of_string().text("cat", None).end_of_string();

        let re = builder
            .build(&[BuildOption::IgnoreCase, BuildOption::Multiline])
            .unwrap();
        assert!(re.is_match("dog\nCAT\nfish"));
    }

    #[test]
    fn test_build_clears_the_buffer_for_reuse() {
        let mut builder = RegexBuilder::new();
        builder.text("cat", None);
        let first = builder.build(&[]).unwrap();
        assert_eq!(first.as_str(), "cat");

        // the same instance starts over
        assert_eq!(builder.to_string(), "");
        builder.text("dog", None);
        let second = builder.build(&[]).unwrap();
        assert_eq!(second.as_str(), "dog");
    }

    #[test]
    fn test_build_twice_in_a_row_yields_empty_pattern() {
        let mut builder = RegexBuilder::new();
        builder.text("cat", None);
        builder.build(&[]).unwrap();

        let empty = builder.build(&[]).unwrap();
        assert_eq!(empty.as_str(), "");
    }

    #[test]
    fn test_same_chain_yields_identical_patterns() {
        fn chain(builder: &mut RegexBuilder) -> String {
            builder
                .start_of_string()
                .letter(Some(Quantifier::one_or_more()))
                .text("-", None)
                .digit(Some(Quantifier::between(2, 4)))
                .end_of_string();
            builder.to_string()
        }

        let first = chain(&mut RegexBuilder::new());
        let second = chain(&mut RegexBuilder::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_failed_build_keeps_the_buffer() {
        let mut builder = RegexBuilder::new();
        builder.regex_text("(bad", None);
        assert!(builder.build(&[]).is_err());

        // the snapshot is still inspectable after the failure
        assert_eq!(builder.to_string(), "(bad");
    }
}
