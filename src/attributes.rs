// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parsing and serialization of HTML start-tag attribute fragments.
//!
//! A fragment is the `name="value"` portion of a tag, without the tag name or
//! the angle brackets. Parsing is lenient: anything that does not look like a
//! double-quoted pair is skipped. Serialization produces a string that can be
//! spliced directly after a tag name, which is why it carries a leading space
//! whenever it is non-empty.

use std::sync::LazyLock;

use regex::Regex;

/// Attribute name followed by a double-quoted value.
static ATTRIBUTE_PAIR: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z0-9_:-]+)[\t\n\x0B\x0C\r ]?=[\t\n\x0B\x0C\r ]?"([^"]*)""#,)
        .expect("attribute pair pattern should compile",)
},);

/// Value stored against an attribute name.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum AttributeValue
{
    /// Plain string value.
    Text(String,),
    /// List of tokens, space-joined on serialization. Used for `class`.
    List(Vec<String,>,),
}

impl AttributeValue
{
    /// Returns the value when it is a plain string.
    pub fn as_text(&self,) -> Option<&str,>
    {
        match self {
            Self::Text(value,) => Some(value.as_str(),),
            Self::List(_,) => None,
        }
    }
}

impl From<&str,> for AttributeValue
{
    fn from(value: &str,) -> Self
    {
        Self::Text(value.to_string(),)
    }
}

impl From<String,> for AttributeValue
{
    fn from(value: String,) -> Self
    {
        Self::Text(value,)
    }
}

impl From<Vec<String,>,> for AttributeValue
{
    fn from(values: Vec<String,>,) -> Self
    {
        Self::List(values,)
    }
}

impl From<Vec<&str,>,> for AttributeValue
{
    fn from(values: Vec<&str,>,) -> Self
    {
        Self::List(values.into_iter().map(str::to_string,).collect(),)
    }
}

/// Ordered mapping from attribute name to value.
///
/// Names are unique. Re-inserting an existing name replaces its value but
/// keeps its original position, so serialization stays deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct AttributeMap
{
    entries: Vec<(String, AttributeValue,),>,
}

impl AttributeMap
{
    /// Creates an empty map.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Inserts or replaces the value stored for `name`.
    ///
    /// Returns the previous value when the name was already present.
    pub fn insert<K, V,>(&mut self, name: K, value: V,) -> Option<AttributeValue,>
    where
        K: Into<String,>,
        V: Into<AttributeValue,>,
    {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _,)| *existing == name,) {
            Some((_, slot,),) => Some(std::mem::replace(slot, value,),),
            None => {
                self.entries.push((name, value,),);
                None
            }
        }
    }

    /// Returns the value stored for `name`.
    pub fn get(&self, name: &str,) -> Option<&AttributeValue,>
    {
        self.entries.iter().find(|(existing, _,)| existing == name,).map(|(_, value,)| value,)
    }

    /// Returns `true` when `name` is present.
    pub fn contains_key(&self, name: &str,) -> bool
    {
        self.get(name,).is_some()
    }

    /// Removes `name`, returning its value.
    pub fn remove(&mut self, name: &str,) -> Option<AttributeValue,>
    {
        let index = self.entries.iter().position(|(existing, _,)| existing == name,)?;
        Some(self.entries.remove(index,).1,)
    }

    /// Number of attributes.
    pub fn len(&self,) -> usize
    {
        self.entries.len()
    }

    /// Returns `true` when the map holds no attributes.
    pub fn is_empty(&self,) -> bool
    {
        self.entries.is_empty()
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self,) -> impl Iterator<Item = (&str, &AttributeValue,),> + '_
    {
        self.entries.iter().map(|(name, value,)| (name.as_str(), value,),)
    }
}

impl<K, V,> FromIterator<(K, V,),> for AttributeMap
where
    K: Into<String,>,
    V: Into<AttributeValue,>,
{
    fn from_iter<I: IntoIterator<Item = (K, V,),>,>(iter: I,) -> Self
    {
        let mut map = Self::new();
        for (name, value,) in iter {
            map.insert(name, value,);
        }
        map
    }
}

/// Parses an attribute fragment into an ordered map.
///
/// Only `name="value"` pairs are recognized, with at most one whitespace
/// character on either side of `=`. Single-quoted or unquoted values and
/// unbalanced quotes contribute nothing. When a name repeats, the last value
/// wins.
///
/// # Examples
///
/// ```
/// use cms_text::{AttributeValue, parse_attributes};
///
/// let attributes = parse_attributes(r#"src="a.png" alt="x""#,);
/// assert_eq!(attributes.get("src"), Some(&AttributeValue::from("a.png")));
/// assert_eq!(attributes.len(), 2);
/// ```
pub fn parse_attributes(fragment: &str,) -> AttributeMap
{
    ATTRIBUTE_PAIR
        .captures_iter(fragment,)
        .map(|captures| (captures[1].to_string(), captures[2].to_string(),),)
        .collect()
}

/// Serializes attributes into a fragment suitable for splicing after a tag
/// name.
///
/// Values are trimmed and literal double quotes become `\"`. A `class` list is
/// deduplicated and space-joined; an empty `class` list is omitted. The result
/// starts with a single space unless it is empty.
///
/// # Examples
///
/// ```
/// use cms_text::{AttributeMap, merge_attributes};
///
/// let mut attributes = AttributeMap::new();
/// attributes.insert("class", vec!["a", "b", "a"],);
/// assert_eq!(merge_attributes(&attributes,), r#" class="a b""#);
/// assert_eq!(merge_attributes(&AttributeMap::new(),), "");
/// ```
pub fn merge_attributes(attributes: &AttributeMap,) -> String
{
    let mut rendered = Vec::with_capacity(attributes.len(),);

    for (name, value,) in attributes.iter() {
        let value = match value {
            AttributeValue::Text(text,) => text.clone(),
            AttributeValue::List(tokens,) if name == "class" => {
                let joined = unique_tokens(tokens,).join(" ",);
                if joined.is_empty() {
                    continue;
                }
                joined
            }
            AttributeValue::List(tokens,) => tokens.join(" ",),
        };

        rendered.push(format!("{name}=\"{}\"", value.trim().replace('"', "\\\"",)),);
    }

    if rendered.is_empty() {
        return String::new();
    }

    format!(" {}", rendered.join(" ",))
}

/// Keeps the first occurrence of every token.
fn unique_tokens(tokens: &[String],) -> Vec<&str,>
{
    let mut unique: Vec<&str,> = Vec::with_capacity(tokens.len(),);
    for token in tokens {
        if !unique.contains(&token.as_str(),) {
            unique.push(token,);
        }
    }
    unique
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{AttributeMap, AttributeValue, merge_attributes, parse_attributes};

    #[test]
    fn parse_reads_double_quoted_pairs_in_order()
    {
        let attributes = parse_attributes(r#"src="a.png" alt="x""#,);
        let collected: Vec<_,> = attributes.iter().map(|(name, value,)| (name, value.as_text(),),).collect();
        assert_eq!(collected, vec![("src", Some("a.png")), ("alt", Some("x"))]);
    }

    #[test]
    fn parse_accepts_single_space_around_equals_and_namespaced_names()
    {
        let attributes = parse_attributes(r#"xml:lang = "fr" data-src="b.png""#,);
        assert_eq!(attributes.get("xml:lang").and_then(AttributeValue::as_text), Some("fr"));
        assert_eq!(attributes.get("data-src").and_then(AttributeValue::as_text), Some("b.png"));
    }

    #[test]
    fn parse_skips_malformed_fragments()
    {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes("src='a.png' alt=x").is_empty());
        assert!(parse_attributes(r#"src="a.png"#).is_empty());
    }

    #[test]
    fn parse_only_accepts_ascii_whitespace_around_equals()
    {
        assert!(parse_attributes("alt\u{A0}=\"x\"").is_empty());
        assert!(parse_attributes("alt=\u{2003}\"x\"").is_empty());
        assert_eq!(parse_attributes("alt\t=\"x\"").get("alt").and_then(AttributeValue::as_text), Some("x"));
    }

    #[test]
    fn parse_keeps_last_duplicate_value_at_first_position()
    {
        let attributes = parse_attributes(r#"a="1" b="2" a="3""#,);
        let names: Vec<&str,> = attributes.iter().map(|(name, _,)| name,).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(attributes.get("a").and_then(AttributeValue::as_text), Some("3"));
    }

    #[test]
    fn parse_allows_empty_values()
    {
        let attributes = parse_attributes(r#"alt="""#,);
        assert_eq!(attributes.get("alt").and_then(AttributeValue::as_text), Some(""));
    }

    #[test]
    fn merge_renders_leading_space_and_pairs()
    {
        let attributes: AttributeMap = [("src", "a.png"), ("alt", "x")].into_iter().collect();
        assert_eq!(merge_attributes(&attributes,), r#" src="a.png" alt="x""#);
    }

    #[test]
    fn merge_returns_empty_string_for_empty_map()
    {
        assert_eq!(merge_attributes(&AttributeMap::new(),), "");
    }

    #[test]
    fn merge_deduplicates_class_lists()
    {
        let mut attributes = AttributeMap::new();
        attributes.insert("class", vec!["a", "b", "a"],);
        assert_eq!(merge_attributes(&attributes,), r#" class="a b""#);
    }

    #[test]
    fn merge_omits_empty_class_list()
    {
        let mut attributes = AttributeMap::new();
        attributes.insert("class", Vec::<String,>::new(),);
        assert_eq!(merge_attributes(&attributes,), "");

        attributes.insert("id", "main",);
        assert_eq!(merge_attributes(&attributes,), r#" id="main""#);
    }

    #[test]
    fn merge_trims_and_backslash_escapes_quotes()
    {
        let mut attributes = AttributeMap::new();
        attributes.insert("title", r#"  say "hi"  "#,);
        assert_eq!(merge_attributes(&attributes,), r#" title="say \"hi\"""#);
    }

    #[test]
    fn merge_joins_non_class_lists_without_deduplication()
    {
        let mut attributes = AttributeMap::new();
        attributes.insert("rel", vec!["noopener", "noopener"],);
        assert_eq!(merge_attributes(&attributes,), r#" rel="noopener noopener""#);
    }

    #[test]
    fn insert_replaces_in_place_and_remove_drops_entry()
    {
        let mut attributes = AttributeMap::new();
        assert!(attributes.insert("a", "1",).is_none());
        attributes.insert("b", "2",);
        assert_eq!(attributes.insert("a", "3",), Some(AttributeValue::from("1")));
        assert_eq!(attributes.remove("b"), Some(AttributeValue::from("2")));
        assert!(!attributes.contains_key("b"));
        assert_eq!(attributes.len(), 1);
        assert!(attributes.remove("missing").is_none());
    }

    proptest! {
        #[test]
        fn parse_then_merge_round_trips(pairs in proptest::collection::vec(("[a-z][a-z0-9-]{0,8}", "[a-zA-Z0-9./_]{1,12}"), 0..6)) {
            let attributes: AttributeMap = pairs.iter().map(|(name, value)| (name.as_str(), value.as_str())).collect();
            let fragment = merge_attributes(&attributes);
            prop_assert_eq!(parse_attributes(&fragment), attributes);
        }
    }
}
