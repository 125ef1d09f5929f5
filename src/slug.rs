// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving URL slugs and accent-free text.
//!
//! Slugs produced by this module contain only lowercase ASCII alphanumeric
//! characters separated by single hyphens. Accent folding goes through HTML
//! entity names: a character is rewritten as its entity, entities that name an
//! accented letter or a ligature collapse to their base letters and every
//! other entity is dropped.

use std::{fmt::Write as _, sync::LazyLock};

use regex::Regex;

static ACCENTED_ENTITY: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"&([A-za-z])(?:acute|cedil|caron|circ|grave|orn|ring|slash|th|tilde|uml);",)
        .expect("accented entity pattern should compile",)
},);
static LIGATURE_ENTITY: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"&([A-za-z]{2})(?:lig);",).expect("ligature entity pattern should compile",)
},);
static ANY_ENTITY: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"&[^;]+;",).expect("entity pattern should compile",),);
static WHITESPACE_RUN: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"[\t\n\x0B\x0C\r ]+",).expect("whitespace pattern should compile",)
},);
static NON_SLUG_RUN: LazyLock<Regex,> = LazyLock::new(|| {
    Regex::new(r"(?:[\t\n\x0B\x0C\r ]|[^A-Za-z0-9\-])+",).expect("slug pattern should compile",)
},);

/// Named HTML entities for letters, keyed by code point.
const LETTER_ENTITIES: &[(char, &str,)] = &[
    ('À', "Agrave",),
    ('Á', "Aacute",),
    ('Â', "Acirc",),
    ('Ã', "Atilde",),
    ('Ä', "Auml",),
    ('Å', "Aring",),
    ('Æ', "AElig",),
    ('Ç', "Ccedil",),
    ('È', "Egrave",),
    ('É', "Eacute",),
    ('Ê', "Ecirc",),
    ('Ë', "Euml",),
    ('Ì', "Igrave",),
    ('Í', "Iacute",),
    ('Î', "Icirc",),
    ('Ï', "Iuml",),
    ('Ð', "ETH",),
    ('Ñ', "Ntilde",),
    ('Ò', "Ograve",),
    ('Ó', "Oacute",),
    ('Ô', "Ocirc",),
    ('Õ', "Otilde",),
    ('Ö', "Ouml",),
    ('Ø', "Oslash",),
    ('Ù', "Ugrave",),
    ('Ú', "Uacute",),
    ('Û', "Ucirc",),
    ('Ü', "Uuml",),
    ('Ý', "Yacute",),
    ('Þ', "THORN",),
    ('ß', "szlig",),
    ('à', "agrave",),
    ('á', "aacute",),
    ('â', "acirc",),
    ('ã', "atilde",),
    ('ä', "auml",),
    ('å', "aring",),
    ('æ', "aelig",),
    ('ç', "ccedil",),
    ('è', "egrave",),
    ('é', "eacute",),
    ('ê', "ecirc",),
    ('ë', "euml",),
    ('ì', "igrave",),
    ('í', "iacute",),
    ('î', "icirc",),
    ('ï', "iuml",),
    ('ð', "eth",),
    ('ñ', "ntilde",),
    ('ò', "ograve",),
    ('ó', "oacute",),
    ('ô', "ocirc",),
    ('õ', "otilde",),
    ('ö', "ouml",),
    ('ø', "oslash",),
    ('ù', "ugrave",),
    ('ú', "uacute",),
    ('û', "ucirc",),
    ('ü', "uuml",),
    ('ý', "yacute",),
    ('þ', "thorn",),
    ('ÿ', "yuml",),
    ('Œ', "OElig",),
    ('œ', "oelig",),
    ('Š', "Scaron",),
    ('š', "scaron",),
    ('Ÿ', "Yuml",),
];

/// Rewrites `input` with HTML entities: `&`, `<` and `>` become named
/// entities, letters with a named entity use it and every other non-ASCII
/// character becomes a numeric entity. Quotes are left alone.
fn encode_entities(input: &str,) -> String
{
    let mut encoded = String::with_capacity(input.len() * 2,);

    for ch in input.chars() {
        match ch {
            '&' => encoded.push_str("&amp;",),
            '<' => encoded.push_str("&lt;",),
            '>' => encoded.push_str("&gt;",),
            _ if ch.is_ascii() => encoded.push(ch,),
            _ => match LETTER_ENTITIES.iter().find(|(letter, _,)| *letter == ch,) {
                Some((_, name,),) => {
                    let _ = write!(encoded, "&{name};");
                }
                None => {
                    let _ = write!(encoded, "&#{};", u32::from(ch));
                }
            },
        }
    }

    encoded
}

/// Folds accented Latin letters to their base letters and drops the rest of
/// the non-ASCII content.
///
/// Ligatures expand to two letters (`œ` becomes `oe`). Characters that have no
/// accent folding, including `&`, `<` and `>`, are removed.
///
/// # Examples
///
/// ```
/// assert_eq!(cms_text::remove_accents("Crème brûlée",), "Creme brulee");
/// assert_eq!(cms_text::remove_accents("cœur",), "coeur");
/// ```
pub fn remove_accents(input: &str,) -> String
{
    let encoded = encode_entities(input,);
    let folded = ACCENTED_ENTITY.replace_all(&encoded, "$1",);
    let folded = LIGATURE_ENTITY.replace_all(&folded, "$1",);
    ANY_ENTITY.replace_all(&folded, "",).into_owned()
}

/// Converts arbitrary text into a URL slug.
///
/// Hyphens are treated as word breaks, accents are folded, everything is
/// lowercased and any run of characters outside `[a-z0-9]` becomes a single
/// hyphen. Leading and trailing hyphens are removed, so the result may be
/// empty. Applying the function twice yields the same slug.
///
/// # Examples
///
/// ```
/// assert_eq!(cms_text::to_slug("Héllo World!",), "hello-world");
/// assert_eq!(cms_text::to_slug("L’été -- indien",), "l-ete-indien");
/// ```
pub fn to_slug(input: &str,) -> String
{
    let spaced = input.replace('-', " ",).replace('\u{2019}', "'",);
    let folded = remove_accents(&spaced,);
    let collapsed = WHITESPACE_RUN.replace_all(&folded, " ",);
    let lowered = collapsed.trim().to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lowered, "-",);
    slug.trim_matches('-',).to_string()
}
