// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Small scalar formatters used by templates and admin listings.

use uuid::Uuid;

/// Roman numerals for 1 through 10.
const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X",];

/// Protects `&&` while bare ampersands are escaped.
const DOUBLE_AMPERSAND_TOKEN: &str = "*--*";
/// Protects numeric entities while bare ampersands are escaped.
const NUMERIC_ENTITY_TOKEN: &str = "*-*";

/// Formats `number` as a Roman numeral when it lies between 1 and 10.
///
/// The table is deliberately limited to ten entries; every other number is
/// returned in decimal.
///
/// ```
/// assert_eq!(cms_text::to_roman(7,), "VII");
/// assert_eq!(cms_text::to_roman(11,), "11");
/// ```
pub fn to_roman(number: i64,) -> String
{
    usize::try_from(number,)
        .ok()
        .and_then(|index| index.checked_sub(1,),)
        .and_then(|index| ROMAN_NUMERALS.get(index,),)
        .map_or_else(|| number.to_string(), |numeral| (*numeral).to_string(),)
}

/// `"ON"` or `"OFF"`.
pub fn boolean_label(value: bool,) -> &'static str
{
    if value { "ON" } else { "OFF" }
}

/// `"YES"` or `"NO"`.
pub fn yes_no_label(value: bool,) -> &'static str
{
    if value { "YES" } else { "NO" }
}

/// Truthiness of a form value: empty strings and `"0"` are false.
pub fn is_truthy(value: &str,) -> bool
{
    !(value.is_empty() || value == "0")
}

/// Describes a value for display: `"NONE"` for falsy values, the
/// HTML-escaped value otherwise.
///
/// `&`, `<`, `>`, `"` and `'` are escaped.
///
/// ```
/// assert_eq!(cms_text::describe_value("",), "NONE");
/// assert_eq!(cms_text::describe_value(r#"<a href="x">"#,), "&lt;a href=&quot;x&quot;&gt;");
/// ```
pub fn describe_value(value: &str,) -> String
{
    if !is_truthy(value,) {
        return "NONE".to_string();
    }

    let mut escaped = String::with_capacity(value.len(),);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;",),
            '<' => escaped.push_str("&lt;",),
            '>' => escaped.push_str("&gt;",),
            '"' => escaped.push_str("&quot;",),
            '\'' => escaped.push_str("&#039;",),
            _ => escaped.push(ch,),
        }
    }
    escaped
}

/// Reads the leading integer of `value`.
///
/// Leading whitespace and one sign are accepted, then decimal digits up to
/// the first other character. No digits yields `0`; values outside `i64`
/// saturate.
///
/// ```
/// assert_eq!(cms_text::to_integer("  42px",), 42);
/// assert_eq!(cms_text::to_integer("-7",), -7);
/// assert_eq!(cms_text::to_integer("abc",), 0);
/// ```
pub fn to_integer(value: &str,) -> i64
{
    let trimmed = value.trim_start_matches([' ', '\t', '\n', '\r', '\x0B', '\x0C',],);
    let (negative, digits,) = match trimmed.as_bytes().first() {
        Some(b'-',) => (true, &trimmed[1..],),
        Some(b'+',) => (false, &trimmed[1..],),
        _ => (false, trimmed,),
    };

    let mut number = 0_i64;
    for digit in digits.bytes().take_while(u8::is_ascii_digit,) {
        let digit = i64::from(digit - b'0',);
        number = if negative {
            number.saturating_mul(10,).saturating_sub(digit,)
        } else {
            number.saturating_mul(10,).saturating_add(digit,)
        };
    }
    number
}

/// Joins `values` with `separator`.
pub fn join_list<S: AsRef<str,>,>(values: &[S], separator: &str,) -> String
{
    values.iter().map(AsRef::as_ref,).collect::<Vec<&str,>>().join(separator,)
}

/// Escapes bare ampersands as `&amp;`.
///
/// Existing entities (`&amp;`, `&nbsp;`, numeric `&#...;`) and `&&` are left
/// as they are.
///
/// ```
/// assert_eq!(cms_text::escape_ampersands("a & b &amp; c",), "a &amp; b &amp; c");
/// ```
pub fn escape_ampersands(text: &str,) -> String
{
    let protected = text
        .replace("&&", DOUBLE_AMPERSAND_TOKEN,)
        .replace("&#", NUMERIC_ENTITY_TOKEN,)
        .replace("&amp;", "&",);

    let mut escaped = String::with_capacity(protected.len() + 8,);
    for (offset, ch,) in protected.char_indices() {
        escaped.push(ch,);
        if ch == '&' && !starts_with_entity_name(&protected[offset + 1..],) {
            escaped.push_str("amp;",);
        }
    }

    escaped.replace(NUMERIC_ENTITY_TOKEN, "&#",).replace(DOUBLE_AMPERSAND_TOKEN, "&&",)
}

/// `true` when `rest` starts with one or more word characters and a `;`.
fn starts_with_entity_name(rest: &str,) -> bool
{
    let name_length = rest.bytes().take_while(|byte| byte.is_ascii_alphanumeric() || *byte == b'_',).count();
    name_length > 0 && rest.as_bytes().get(name_length,) == Some(&b';',)
}

/// Generates a random identifier: a version 4 UUID in lowercase hyphenated
/// form.
pub fn random_string() -> String
{
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn roman_covers_one_to_ten_only()
    {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
        for (number, numeral) in (1..=10).zip(expected) {
            assert_eq!(to_roman(number), numeral);
        }
        assert_eq!(to_roman(0), "0");
        assert_eq!(to_roman(11), "11");
        assert_eq!(to_roman(-3), "-3");
    }

    #[test]
    fn labels_follow_truthiness()
    {
        assert_eq!(boolean_label(true), "ON");
        assert_eq!(boolean_label(false), "OFF");
        assert_eq!(yes_no_label(true), "YES");
        assert_eq!(yes_no_label(is_truthy("0")), "NO");
        assert!(is_truthy("no"));
        assert!(!is_truthy(""));
    }

    #[test]
    fn describe_value_escapes_quotes()
    {
        assert_eq!(describe_value("Tom & 'Jerry'"), "Tom &amp; &#039;Jerry&#039;");
        assert_eq!(describe_value("0"), "NONE");
        assert_eq!(describe_value("plain"), "plain");
    }

    #[test]
    fn to_integer_reads_leading_digits()
    {
        assert_eq!(to_integer("12abc"), 12);
        assert_eq!(to_integer("+5"), 5);
        assert_eq!(to_integer(" \t-0"), 0);
        assert_eq!(to_integer("- 5"), 0);
        assert_eq!(to_integer(""), 0);
        assert_eq!(to_integer("99999999999999999999"), i64::MAX);
        assert_eq!(to_integer("-99999999999999999999"), i64::MIN);
    }

    #[test]
    fn join_list_uses_separator()
    {
        assert_eq!(join_list(&["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(join_list(&[String::from("x")], "|"), "x");
        assert_eq!(join_list::<&str>(&[], ", "), "");
    }

    #[test]
    fn escape_ampersands_escapes_bare_ampersands_only()
    {
        assert_eq!(escape_ampersands("a & b &amp; c"), "a &amp; b &amp; c");
        assert_eq!(escape_ampersands("fish&chips"), "fish&amp;chips");
        assert_eq!(escape_ampersands("&nbsp;&copy;"), "&nbsp;&copy;");
        assert_eq!(escape_ampersands("&#169; &#x27;"), "&#169; &#x27;");
        assert_eq!(escape_ampersands("a && b"), "a && b");
        assert_eq!(escape_ampersands("trailing &"), "trailing &amp;");
    }

    #[test]
    fn random_string_is_a_v4_uuid()
    {
        let first = random_string();
        let second = random_string();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
        assert_eq!(first.as_bytes()[14], b'4');
        assert!(matches!(first.as_bytes()[19], b'8' | b'9' | b'a' | b'b'));
    }
}
