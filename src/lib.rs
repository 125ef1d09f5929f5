// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! String and HTML attribute helpers for a content management system.
//!
//! Every helper is a pure function of its arguments: slugs and identifier case
//! conversions, HTML attribute parsing and serialization, cleanup of submitted
//! text and rich text fields, UTF-8 validation, copy-label numbering and small
//! display formatters. [`TextHelpers`] runs any of them by name and can hand
//! the display tokens it produces to a host translator.

mod attributes;
mod case;
mod error;
mod format;
mod increment;
mod operation;
mod sanitize;
mod slug;
mod time;
mod transcode;
mod utf8;

pub use attributes::{AttributeMap, AttributeValue, merge_attributes, parse_attributes};
pub use case::{
    split_camel_case, to_camel_case, to_dash_separated, to_key, to_space_separated,
    to_underscore_separated, to_variable,
};
pub use error::{Error, io_error};
pub use format::{
    boolean_label, describe_value, escape_ampersands, is_truthy, join_list, random_string,
    to_integer, to_roman, yes_no_label,
};
pub use increment::{DASH_STYLE, DEFAULT_STYLE, IncrementStyle, increment};
pub use operation::{LOCALIZABLE_TOKENS, Operation, OperationOptions, TextHelpers, Translator};
pub use sanitize::{clean_rich_text, clean_text, clean_textarea};
pub use slug::{remove_accents, to_slug};
pub use time::{microtime, seconds_to_time};
pub use transcode::{Encoding, transcode};
pub use utf8::{is_loosely_valid_utf8, is_valid_utf8};
