// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Cleanup passes for submitted form fields.
//!
//! Three field flavours are handled: plain text (markup stripped), textarea
//! content (line breaks turned into paragraphs) and rich text produced by a
//! WYSIWYG editor (lazy-loaded images resolved, editor artefacts removed).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::attributes::{merge_attributes, parse_attributes};

const NBSP_ENTITY: &str = "&nbsp;";
/// Placeholder element the editor leaves over embedded iframes.
const IFRAME_OVERLAY: &str = r#"<div class="redactor-iframe-clickable"></div>"#;

static MARKUP_TAG: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--.*?-->|<[A-Za-z/!?][^>]*>",).expect("markup tag pattern should compile",)
},);
static LINE_BREAK_RUN: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"[\r\n]{2,}",).expect("line break pattern should compile",),);
static PARAGRAPH_BLOCK: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"<p>.+</p>",).expect("paragraph pattern should compile",),);
static IMAGE_TAG: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"<img ([^>]+)>",).expect("image tag pattern should compile",),);
static ALLOW_FULLSCREEN: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r#" allowfullscreen="(?:true)?""#,).expect("allowfullscreen pattern should compile",)
},);

/// Characters removed from both ends of a cleaned textarea.
fn is_trimmed(ch: char,) -> bool
{
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Cleans a plain text field: `&nbsp;` becomes a space and markup is removed,
/// keeping only the text between tags.
///
/// A `<` that is not followed by a letter, `/`, `!` or `?` is text, not
/// markup, and is kept.
///
/// ```
/// assert_eq!(cms_text::clean_text("<b>bold</b>&nbsp;move",), "bold move");
/// ```
pub fn clean_text(input: &str,) -> String
{
    let spaced = input.replace(NBSP_ENTITY, " ",);
    MARKUP_TAG.replace_all(&spaced, "",).into_owned()
}

/// Cleans a textarea field into paragraph markup.
///
/// Runs of two or more line breaks become paragraph boundaries, single line
/// breaks become `<br />`. Input that does not already contain a `<p>...</p>`
/// block on one line is wrapped in a paragraph first; input that does is
/// not, even when other parts of it are bare text.
///
/// ```
/// assert_eq!(cms_text::clean_textarea("one\ntwo\n\n\nthree",), "<p>one<br />two</p> <p>three</p>");
/// ```
pub fn clean_textarea(input: &str,) -> String
{
    let spaced = input.replace(NBSP_ENTITY, " ",);
    let mut text = LINE_BREAK_RUN.replace_all(&spaced, "\n\n",).into_owned();

    if !PARAGRAPH_BLOCK.is_match(&text,) {
        text = format!("<p>{text}</p>");
    }

    let text = text.replace("\n\n", "</p> <p>",).replace('\n', "<br />",).replace("<p></p>", "",);
    text.trim_matches(is_trimmed,).to_string()
}

/// Cleans a rich text field produced by the editor.
///
/// * `&nbsp;` becomes a space.
/// * Every `<img ...>` is rebuilt as a self-closing tag; a `data-src`
///   attribute replaces `src` and is removed. Exactly one space separates
///   `img` from the first attribute, never two.
/// * Empty iframe overlay `div`s are removed.
/// * `allowfullscreen="true"` and `allowfullscreen=""` collapse to the bare
///   `allowfullscreen` attribute.
///
/// ```
/// let html = r#"<img data-src="a.png" alt="x"><div class="redactor-iframe-clickable"></div>"#;
/// assert_eq!(cms_text::clean_rich_text(html,), r#"<img alt="x" src="a.png" />"#);
/// ```
pub fn clean_rich_text(input: &str,) -> String
{
    let spaced = input.replace(NBSP_ENTITY, " ",);

    let images = IMAGE_TAG.replace_all(&spaced, |captures: &Captures<'_,>| {
        let mut attributes = parse_attributes(&captures[1],);
        if let Some(lazy_source,) = attributes.remove("data-src",) {
            attributes.insert("src", lazy_source,);
        }
        format!("<img{} />", merge_attributes(&attributes,))
    },);

    let without_overlay = images.replace(IFRAME_OVERLAY, "",);
    ALLOW_FULLSCREEN.replace_all(&without_overlay, " allowfullscreen",).into_owned()
}
