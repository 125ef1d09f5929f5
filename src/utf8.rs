// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Byte-level UTF-8 validation.
//!
//! [`is_valid_utf8`] is a strict decoder that only accepts what the Unicode
//! standard allows. [`is_loosely_valid_utf8`] checks the sequence structure
//! alone and therefore also accepts the obsolete five and six byte forms,
//! overlong encodings and surrogates. Every input accepted by the strict
//! checker is accepted by the loose one.

/// Classifies a lead byte into the sequence length it announces and the
/// payload bits it carries. Returns `None` for continuation bytes and the
/// `0xFE`/`0xFF` bytes that never start a sequence.
fn lead_byte(byte: u8,) -> Option<(u8, u32,),>
{
    let byte32 = u32::from(byte,);
    if byte & 0x80 == 0 {
        Some((1, byte32,),)
    } else if byte & 0xE0 == 0xC0 {
        Some((2, (byte32 & 0x1F) << 6,),)
    } else if byte & 0xF0 == 0xE0 {
        Some((3, (byte32 & 0x0F) << 12,),)
    } else if byte & 0xF8 == 0xF0 {
        Some((4, (byte32 & 0x07) << 18,),)
    } else if byte & 0xFC == 0xF8 {
        Some((5, (byte32 & 0x03) << 24,),)
    } else if byte & 0xFE == 0xFC {
        Some((6, (byte32 & 0x01) << 30,),)
    } else {
        None
    }
}

fn is_continuation(byte: u8,) -> bool
{
    byte & 0xC0 == 0x80
}

/// Validation state carried between bytes.
#[derive(Debug, Clone, Copy, Default,)]
struct DecoderState
{
    /// Continuation bytes still expected for the current sequence.
    pending:    u8,
    /// Code point accumulated so far.
    code_point: u32,
    /// Length of the current sequence in bytes.
    length:     u8,
}

impl DecoderState
{
    /// Checks a completed sequence against the Unicode rules.
    fn completed_sequence_is_legal(&self,) -> bool
    {
        let shortest = match self.length {
            1 => true,
            2 => self.code_point >= 0x80,
            3 => self.code_point >= 0x800,
            4 => self.code_point >= 0x1_0000,
            _ => false,
        };
        let surrogate = self.code_point & 0xFFFF_F800 == 0xD800;

        shortest && !surrogate && self.code_point <= 0x10_FFFF
    }
}

/// Returns `true` when `bytes` is well-formed UTF-8 as defined by the Unicode
/// standard.
///
/// Overlong (non-shortest) encodings, surrogate code points, code points above
/// `U+10FFFF`, five and six byte sequences, stray continuation bytes and
/// sequences cut off at the end of the input are all rejected.
///
/// # Examples
///
/// ```
/// assert!(cms_text::is_valid_utf8("héllo 世界 🎉".as_bytes(),));
/// assert!(!cms_text::is_valid_utf8(&[0xC0, 0xAF,],));
/// assert!(!cms_text::is_valid_utf8(&[0xED, 0xA0, 0x80,],));
/// ```
pub fn is_valid_utf8(bytes: &[u8],) -> bool
{
    let mut state = DecoderState::default();

    for &byte in bytes {
        if state.pending == 0 {
            let Some((length, code_point,),) = lead_byte(byte,) else {
                return false;
            };
            state = DecoderState {
                pending: length - 1,
                code_point,
                length,
            };
            continue;
        }

        if !is_continuation(byte,) {
            return false;
        }

        state.pending -= 1;
        state.code_point |= (u32::from(byte,) & 0x3F) << (u32::from(state.pending,) * 6);

        if state.pending == 0 && !state.completed_sequence_is_legal() {
            return false;
        }
    }

    state.pending == 0
}

/// Returns `true` when `bytes` is structurally UTF-8: every lead byte is
/// followed by the number of continuation bytes it announces.
///
/// This is the permissive counterpart of [`is_valid_utf8`]: code point values
/// are not inspected, so five and six byte sequences pass. An empty input is
/// valid.
///
/// ```
/// assert!(cms_text::is_loosely_valid_utf8(&[],));
/// assert!(cms_text::is_loosely_valid_utf8(&[0xF8, 0x88, 0x80, 0x80, 0x80,],));
/// assert!(!cms_text::is_loosely_valid_utf8(&[0x80,],));
/// ```
pub fn is_loosely_valid_utf8(bytes: &[u8],) -> bool
{
    let mut pending = 0_u8;

    for &byte in bytes {
        if pending > 0 {
            if !is_continuation(byte,) {
                return false;
            }
            pending -= 1;
            continue;
        }

        match lead_byte(byte,) {
            Some((length, _,),) => pending = length - 1,
            None => return false,
        }
    }

    pending == 0
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;

    use super::{is_loosely_valid_utf8, is_valid_utf8};

    #[test]
    fn accepts_ascii_and_empty_input()
    {
        assert!(is_valid_utf8(b""));
        assert!(is_valid_utf8(b"plain ascii"));
    }

    #[test]
    fn accepts_every_sequence_length_boundary()
    {
        for code_point in [0x7F_u32, 0x80, 0x7FF, 0x800, 0xD7FF, 0xE000, 0xFFFF, 0x1_0000, 0x10_FFFF,] {
            let ch = char::from_u32(code_point,).expect("valid scalar value",);
            let mut buffer = [0_u8; 4];
            assert!(is_valid_utf8(ch.encode_utf8(&mut buffer,).as_bytes()), "U+{code_point:04X}");
        }
    }

    #[test]
    fn rejects_overlong_encodings()
    {
        assert!(!is_valid_utf8(&[0xC0, 0x80]));
        assert!(!is_valid_utf8(&[0xC1, 0xBF]));
        assert!(!is_valid_utf8(&[0xE0, 0x80, 0xAF]));
        assert!(!is_valid_utf8(&[0xF0, 0x80, 0x80, 0xAF]));
    }

    #[test]
    fn rejects_surrogates_and_out_of_range_code_points()
    {
        assert!(!is_valid_utf8(&[0xED, 0xA0, 0x80]));
        assert!(!is_valid_utf8(&[0xED, 0xBF, 0xBF]));
        assert!(!is_valid_utf8(&[0xF4, 0x90, 0x80, 0x80]));
    }

    #[test]
    fn rejects_five_and_six_byte_sequences()
    {
        let five = [0xF8, 0x88, 0x80, 0x80, 0x80];
        let six = [0xFC, 0x84, 0x80, 0x80, 0x80, 0x80];
        assert!(!is_valid_utf8(&five));
        assert!(!is_valid_utf8(&six));
        assert!(is_loosely_valid_utf8(&five));
        assert!(is_loosely_valid_utf8(&six));
    }

    #[test]
    fn rejects_broken_structure()
    {
        assert!(!is_valid_utf8(&[0x80]));
        assert!(!is_valid_utf8(&[0xC3, 0x41]));
        assert!(!is_valid_utf8(&[0xC3]));
        assert!(!is_valid_utf8(&[0xFE]));
        assert!(!is_valid_utf8(&[0xFF, 0x41]));
        assert!(!is_loosely_valid_utf8(&[0xC3]));
        assert!(!is_loosely_valid_utf8(&[0xE2, 0x82]));
    }

    #[test]
    fn loose_check_accepts_overlong_and_surrogates()
    {
        assert!(is_loosely_valid_utf8(&[0xC0, 0x80]));
        assert!(is_loosely_valid_utf8(&[0xED, 0xA0, 0x80]));
        assert!(is_loosely_valid_utf8(b""));
    }

    proptest! {
        #[test]
        fn strict_validity_implies_loose_validity(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
            if is_valid_utf8(&bytes) {
                prop_assert!(is_loosely_valid_utf8(&bytes));
            }
        }

        #[test]
        fn strict_validity_matches_std(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
            prop_assert_eq!(is_valid_utf8(&bytes), std::str::from_utf8(&bytes).is_ok());
        }

        #[test]
        fn accepts_any_rust_string(text in "\\PC{0,32}") {
            prop_assert!(is_valid_utf8(text.as_bytes()));
        }
    }
}
