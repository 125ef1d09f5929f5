// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Separator and case conversions for identifiers.
//!
//! Whitespace means the ASCII set (space, tab, newline, vertical tab, form
//! feed, carriage return). Case changes that touch a single letter only apply
//! to ASCII letters; non-ASCII characters pass through untouched.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"[\t\n\x0B\x0C\r ]+",).expect("whitespace pattern should compile",)
},);
static DASH_RUN: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new("-+",).expect("dash pattern should compile",),);
static UNDERSCORE_RUN: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new("_+",).expect("underscore pattern should compile",),);

/// Replaces `_` and `-` with spaces and collapses whitespace runs.
///
/// ```
/// assert_eq!(cms_text::to_space_separated("foo_bar--baz\t qux",), "foo bar baz qux");
/// ```
pub fn to_space_separated(input: &str,) -> String
{
    let replaced = input.replace(['_', '-',], " ",);
    WHITESPACE_RUN.replace_all(&replaced, " ",).into_owned()
}

/// Replaces spaces and `_` with `-` and collapses dash runs.
pub fn to_dash_separated(input: &str,) -> String
{
    let replaced = input.replace([' ', '_',], "-",);
    DASH_RUN.replace_all(&replaced, "-",).into_owned()
}

/// Replaces spaces and `-` with `_` and collapses underscore runs.
pub fn to_underscore_separated(input: &str,) -> String
{
    let replaced = input.replace([' ', '-',], "_",);
    UNDERSCORE_RUN.replace_all(&replaced, "_",).into_owned()
}

/// Converts to upper camel case: `"foo bar"` becomes `"FooBar"`.
///
/// Only the first letter of every word is uppercased; the rest of the word
/// keeps its case.
pub fn to_camel_case(input: &str,) -> String
{
    let spaced = to_space_separated(input,);
    let mut camel = String::with_capacity(spaced.len(),);
    let mut word_start = true;

    for ch in spaced.chars() {
        if ch == ' ' {
            word_start = true;
            continue;
        }
        camel.push(if word_start { ch.to_ascii_uppercase() } else { ch },);
        word_start = false;
    }

    camel
}

/// Converts to a variable name: `"foo bar"` becomes `"fooBar"`.
///
/// A result that would start with a digit is discarded entirely and the
/// function returns an empty string.
///
/// ```
/// assert_eq!(cms_text::to_variable("FooBar",), "fooBar");
/// assert_eq!(cms_text::to_variable("123abc",), "");
/// ```
pub fn to_variable(input: &str,) -> String
{
    let camel = to_camel_case(input,);
    if camel.starts_with(|ch: char| ch.is_ascii_digit(),) {
        return String::new();
    }

    let mut chars = camel.chars();
    match chars.next() {
        Some(first,) => {
            let mut variable = String::with_capacity(camel.len(),);
            variable.push(first.to_ascii_lowercase(),);
            variable.push_str(chars.as_str(),);
            variable
        }
        None => camel,
    }
}

/// Converts to a lowercase, underscore separated key.
pub fn to_key(input: &str,) -> String
{
    to_underscore_separated(input,).to_lowercase()
}

/// Splits a camel case string into words.
///
/// A boundary is placed before an uppercase letter that follows anything other
/// than an uppercase letter or `_`, and before the last capital of a run of
/// capitals when the run continues into a new word. Underscores glue words.
///
/// ```
/// assert_eq!(cms_text::split_camel_case("FooBarABCDef",), ["Foo", "Bar", "ABC", "Def"]);
/// assert_eq!(cms_text::split_camel_case("ThisIsA_NASAAstronaut",), [
///     "This",
///     "Is",
///     "A_NASA",
///     "Astronaut"
/// ]);
/// ```
pub fn split_camel_case(input: &str,) -> Vec<&str,>
{
    let chars: Vec<(usize, char,),> = input.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for window in 1..chars.len() {
        let (offset, current,) = chars[window];
        let previous = chars[window - 1].1;
        let next = chars.get(window + 1,).map(|(_, ch,)| *ch,);

        let after_lower = !is_upper_or_underscore(previous,) && current.is_ascii_uppercase();
        let before_word = previous.is_ascii_uppercase()
            && current.is_ascii_uppercase()
            && next.is_some_and(|ch| !is_upper_or_underscore(ch,),);

        if after_lower || before_word {
            parts.push(&input[start..offset],);
            start = offset;
        }
    }

    parts.push(&input[start..],);
    parts
}

fn is_upper_or_underscore(ch: char,) -> bool
{
    ch.is_ascii_uppercase() || ch == '_'
}
