// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Best-effort conversion between the character encodings content arrives in.
//!
//! Conversion never fails. Characters the target encoding cannot hold are
//! first approximated with [`deunicode`] (accented letters lose their accents,
//! ligatures split into two letters, typographic punctuation and currency
//! signs become their ASCII spelling) and dropped when no approximation exists.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::error::Error;

/// Character encodings understood by [`transcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub enum Encoding
{
    /// UTF-8.
    Utf8,
    /// 7-bit US-ASCII.
    Ascii,
    /// ISO-8859-1 (Latin-1).
    Latin1,
}

impl Encoding
{
    /// Canonical label of the encoding.
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Ascii => "US-ASCII",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    fn can_encode(self, ch: char,) -> bool
    {
        match self {
            Self::Utf8 => true,
            Self::Ascii => ch.is_ascii(),
            Self::Latin1 => u32::from(ch,) <= 0xFF,
        }
    }

    fn decode(self, source: &[u8],) -> String
    {
        match self {
            Self::Utf8 => source.utf8_chunks().map(|chunk| chunk.valid(),).collect(),
            Self::Ascii => source.iter().filter(|byte| byte.is_ascii(),).map(|&byte| char::from(byte,),).collect(),
            Self::Latin1 => source.iter().map(|&byte| char::from(byte,),).collect(),
        }
    }

    fn encode_char(self, ch: char, output: &mut Vec<u8,>,)
    {
        match self {
            Self::Utf8 => {
                let mut buffer = [0_u8; 4];
                output.extend_from_slice(ch.encode_utf8(&mut buffer,).as_bytes(),);
            }
            // Callers only hand over characters accepted by `can_encode`.
            Self::Ascii | Self::Latin1 => output.push(u32::from(ch,) as u8,),
        }
    }
}

impl fmt::Display for Encoding
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str(self.as_str(),)
    }
}

impl FromStr for Encoding
{
    type Err = Error;

    /// Parses an encoding label, ignoring case and the `-`/`_` punctuation.
    fn from_str(label: &str,) -> Result<Self, Self::Err,>
    {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, '-' | '_'),)
            .map(|ch| ch.to_ascii_lowercase(),)
            .collect();

        match normalized.as_str() {
            "utf8" => Ok(Self::Utf8,),
            "ascii" | "usascii" => Ok(Self::Ascii,),
            "iso88591" | "latin1" => Ok(Self::Latin1,),
            _ => Err(Error::UnknownEncoding {
                name: label.to_string(),
            },),
        }
    }
}

/// Converts `source` from one encoding to another.
///
/// Invalid input sequences are skipped while decoding. While encoding, each
/// character the target cannot represent is replaced by its ASCII
/// approximation; if none exists, it is dropped.
///
/// # Examples
///
/// ```
/// use cms_text::{Encoding, transcode};
///
/// let ascii = transcode("Œuvre à 5€".as_bytes(), Encoding::Utf8, Encoding::Ascii,);
/// assert_eq!(ascii, b"OEuvre a 5EUR");
///
/// let latin1 = transcode("Œuvre à 5€".as_bytes(), Encoding::Utf8, Encoding::Latin1,);
/// assert_eq!(latin1, b"OEuvre \xE0 5EUR");
/// ```
pub fn transcode(source: &[u8], from: Encoding, to: Encoding,) -> Vec<u8,>
{
    let text = from.decode(source,);
    let mut output = Vec::with_capacity(text.len(),);
    let mut dropped = 0_usize;

    for ch in text.chars() {
        if to.can_encode(ch,) {
            to.encode_char(ch, &mut output,);
            continue;
        }

        let approximation = transliterate(ch,);
        if approximation.is_empty() {
            dropped += 1;
        }
        for folded in approximation.chars().filter(|folded| to.can_encode(*folded,),) {
            to.encode_char(folded, &mut output,);
        }
    }

    if dropped > 0 {
        debug!("dropped {} character(s) not representable in {}", dropped, to);
    }

    output
}

/// ASCII approximation of a single character, empty when none exists.
fn transliterate(ch: char,) -> &'static str
{
    deunicode::deunicode_char(ch,).unwrap_or("",)
}

#[cfg(test)]
mod tests
{
    use super::{Encoding, transcode};
    use crate::Error;

    #[test]
    fn parses_common_labels()
    {
        assert_eq!("UTF-8".parse::<Encoding>().expect("utf-8"), Encoding::Utf8);
        assert_eq!("utf8".parse::<Encoding>().expect("utf8"), Encoding::Utf8);
        assert_eq!("US-ASCII".parse::<Encoding>().expect("ascii"), Encoding::Ascii);
        assert_eq!("ISO-8859-1".parse::<Encoding>().expect("latin1"), Encoding::Latin1);
        assert_eq!("latin_1".parse::<Encoding>().expect("latin1"), Encoding::Latin1);
    }

    #[test]
    fn rejects_unknown_labels()
    {
        match "EBCDIC".parse::<Encoding>() {
            Err(Error::UnknownEncoding {
                name,
            },) => assert_eq!(name, "EBCDIC"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn display_uses_canonical_label()
    {
        assert_eq!(Encoding::Latin1.to_string(), "ISO-8859-1");
    }

    #[test]
    fn utf8_to_ascii_transliterates_then_drops()
    {
        let output = transcode("Crème brûlée \u{10FFFD}".as_bytes(), Encoding::Utf8, Encoding::Ascii,);
        assert_eq!(output, b"Creme brulee ");
    }

    #[test]
    fn utf8_to_ascii_approximates_punctuation_and_currency()
    {
        let output = transcode("l’été coûte 5€ “ok”".as_bytes(), Encoding::Utf8, Encoding::Ascii,);
        assert_eq!(output, b"l'ete coute 5EUR \"ok\"");
    }

    #[test]
    fn utf8_to_latin1_approximates_only_what_latin1_lacks()
    {
        let output = transcode("café 5€".as_bytes(), Encoding::Utf8, Encoding::Latin1,);
        assert_eq!(output, b"caf\xE9 5EUR");
    }

    #[test]
    fn utf8_to_latin1_keeps_latin1_letters()
    {
        let output = transcode("été œ".as_bytes(), Encoding::Utf8, Encoding::Latin1,);
        assert_eq!(output, b"\xE9t\xE9 oe");
    }

    #[test]
    fn latin1_to_utf8_decodes_every_byte()
    {
        let output = transcode(b"caf\xE9", Encoding::Latin1, Encoding::Utf8,);
        assert_eq!(output, "café".as_bytes());
    }

    #[test]
    fn invalid_utf8_input_is_skipped()
    {
        let output = transcode(b"ab\xFFcd\xC3", Encoding::Utf8, Encoding::Utf8,);
        assert_eq!(output, b"abcd");
    }

    #[test]
    fn ascii_source_ignores_high_bytes()
    {
        let output = transcode(b"a\x80b", Encoding::Ascii, Encoding::Utf8,);
        assert_eq!(output, b"ab");
    }

    #[test]
    fn ampersands_survive_transcoding()
    {
        let output = transcode(b"a & b", Encoding::Utf8, Encoding::Ascii,);
        assert_eq!(output, b"a & b");
    }
}
