// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Named entry point over every string helper.
//!
//! [`Operation`] enumerates the helpers that map one string to another so
//! callers that receive the helper name at runtime (templates, the CLI) can
//! run them without their own lookup tables. [`TextHelpers`] runs an
//! operation and optionally passes the display tokens `YES`, `NO`, `ON`,
//! `OFF` and `NONE` through a host-supplied translator.

use std::{fmt, str::FromStr};

use serde::Serialize;
use tracing::trace;

use crate::{
    case, error::Error, format, increment::increment, sanitize, slug, time::seconds_to_time, utf8,
};

/// Tokens that may be handed to a translator.
pub const LOCALIZABLE_TOKENS: [&str; 5] = ["YES", "NO", "ON", "OFF", "NONE",];

/// Every helper reachable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize,)]
#[serde(rename_all = "kebab-case")]
pub enum Operation
{
    /// [`clean_text`](crate::clean_text)
    CleanText,
    /// [`clean_textarea`](crate::clean_textarea)
    CleanTextarea,
    /// [`clean_rich_text`](crate::clean_rich_text)
    CleanRichText,
    /// [`remove_accents`](crate::remove_accents)
    RemoveAccents,
    /// [`to_slug`](crate::to_slug)
    Slug,
    /// [`to_camel_case`](crate::to_camel_case)
    CamelCase,
    /// [`to_dash_separated`](crate::to_dash_separated)
    DashSeparated,
    /// [`to_space_separated`](crate::to_space_separated)
    SpaceSeparated,
    /// [`to_underscore_separated`](crate::to_underscore_separated)
    UnderscoreSeparated,
    /// [`to_variable`](crate::to_variable)
    Variable,
    /// [`to_key`](crate::to_key)
    Key,
    /// [`split_camel_case`](crate::split_camel_case), one word per line.
    SplitCamelCase,
    /// [`to_roman`](crate::to_roman) of the leading integer.
    Roman,
    /// [`boolean_label`](crate::boolean_label) of the input's truthiness.
    Boolean,
    /// [`yes_no_label`](crate::yes_no_label) of the input's truthiness.
    YesNo,
    /// [`describe_value`](crate::describe_value)
    Describe,
    /// [`to_integer`](crate::to_integer)
    Integer,
    /// [`join_list`](crate::join_list) of the input lines.
    JoinList,
    /// [`escape_ampersands`](crate::escape_ampersands)
    EscapeAmpersands,
    /// [`increment`](crate::increment)
    Increment,
    /// [`seconds_to_time`](crate::seconds_to_time) of the leading integer.
    SecondsToTime,
    /// [`random_string`](crate::random_string); the input is ignored.
    RandomString,
    /// [`is_valid_utf8`](crate::is_valid_utf8), `true` or `false`.
    ValidUtf8,
    /// [`is_loosely_valid_utf8`](crate::is_loosely_valid_utf8), `true` or
    /// `false`.
    CompliantUtf8,
}

impl Operation
{
    /// All operations in declaration order.
    pub const ALL: [Self; 24] = [
        Self::CleanText,
        Self::CleanTextarea,
        Self::CleanRichText,
        Self::RemoveAccents,
        Self::Slug,
        Self::CamelCase,
        Self::DashSeparated,
        Self::SpaceSeparated,
        Self::UnderscoreSeparated,
        Self::Variable,
        Self::Key,
        Self::SplitCamelCase,
        Self::Roman,
        Self::Boolean,
        Self::YesNo,
        Self::Describe,
        Self::Integer,
        Self::JoinList,
        Self::EscapeAmpersands,
        Self::Increment,
        Self::SecondsToTime,
        Self::RandomString,
        Self::ValidUtf8,
        Self::CompliantUtf8,
    ];

    /// Kebab-case name accepted by [`FromStr`].
    pub const fn as_str(self,) -> &'static str
    {
        match self {
            Self::CleanText => "clean-text",
            Self::CleanTextarea => "clean-textarea",
            Self::CleanRichText => "clean-rich-text",
            Self::RemoveAccents => "remove-accents",
            Self::Slug => "slug",
            Self::CamelCase => "camel-case",
            Self::DashSeparated => "dash-separated",
            Self::SpaceSeparated => "space-separated",
            Self::UnderscoreSeparated => "underscore-separated",
            Self::Variable => "variable",
            Self::Key => "key",
            Self::SplitCamelCase => "split-camel-case",
            Self::Roman => "roman",
            Self::Boolean => "boolean",
            Self::YesNo => "yes-no",
            Self::Describe => "describe",
            Self::Integer => "integer",
            Self::JoinList => "join-list",
            Self::EscapeAmpersands => "escape-ampersands",
            Self::Increment => "increment",
            Self::SecondsToTime => "seconds-to-time",
            Self::RandomString => "random-string",
            Self::ValidUtf8 => "valid-utf8",
            Self::CompliantUtf8 => "compliant-utf8",
        }
    }

    /// Whether the result of this operation may be a localizable token.
    pub const fn is_localizable(self,) -> bool
    {
        matches!(self, Self::Boolean | Self::YesNo | Self::Describe | Self::JoinList)
    }
}

impl fmt::Display for Operation
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str(self.as_str(),)
    }
}

impl FromStr for Operation
{
    type Err = Error;

    fn from_str(name: &str,) -> Result<Self, Self::Err,>
    {
        Self::ALL.into_iter().find(|operation| operation.as_str() == name,).ok_or_else(|| {
            Error::UnknownOperation {
                name: name.to_string(),
            }
        },)
    }
}

/// Parameters used by the operations that take more than the input string.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct OperationOptions
{
    /// Increment style name for [`Operation::Increment`].
    pub style:     String,
    /// Explicit number for [`Operation::Increment`]; `0` means "next".
    pub n:         u64,
    /// Separator for [`Operation::JoinList`].
    pub separator: String,
}

impl Default for OperationOptions
{
    fn default() -> Self
    {
        Self {
            style:     crate::increment::DEFAULT_STYLE.to_string(),
            n:         0,
            separator: ", ".to_string(),
        }
    }
}

/// Signature of a host translation function.
pub type Translator = dyn Fn(&str,) -> String + Send + Sync;

/// Runs [`Operation`]s, optionally localizing display tokens.
///
/// # Examples
///
/// ```
/// use cms_text::{Operation, OperationOptions, TextHelpers};
///
/// let helpers = TextHelpers::new().with_translator(|token: &str| match token {
///     "YES" => "oui".to_string(),
///     other => other.to_string(),
/// },);
/// let options = OperationOptions::default();
///
/// assert_eq!(helpers.apply(Operation::YesNo, "1", &options,), "oui");
/// assert_eq!(helpers.apply(Operation::Slug, "Héllo World!", &options,), "hello-world");
/// ```
#[derive(Default,)]
pub struct TextHelpers
{
    translator: Option<Box<Translator,>,>,
}

impl fmt::Debug for TextHelpers
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter
            .debug_struct("TextHelpers",)
            .field("translator", &self.translator.as_ref().map(|_| "<fn>",),)
            .finish()
    }
}

impl TextHelpers
{
    /// Creates helpers without a translator; tokens are returned as is.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Installs a translator for the localizable tokens.
    pub fn with_translator<F,>(mut self, translator: F,) -> Self
    where
        F: Fn(&str,) -> String + Send + Sync + 'static,
    {
        self.translator = Some(Box::new(translator,),);
        self
    }

    /// Runs `operation` on `input`.
    pub fn apply(&self, operation: Operation, input: &str, options: &OperationOptions,) -> String
    {
        trace!("applying {} to {} byte(s)", operation, input.len());

        let output = match operation {
            Operation::CleanText => sanitize::clean_text(input,),
            Operation::CleanTextarea => sanitize::clean_textarea(input,),
            Operation::CleanRichText => sanitize::clean_rich_text(input,),
            Operation::RemoveAccents => slug::remove_accents(input,),
            Operation::Slug => slug::to_slug(input,),
            Operation::CamelCase => case::to_camel_case(input,),
            Operation::DashSeparated => case::to_dash_separated(input,),
            Operation::SpaceSeparated => case::to_space_separated(input,),
            Operation::UnderscoreSeparated => case::to_underscore_separated(input,),
            Operation::Variable => case::to_variable(input,),
            Operation::Key => case::to_key(input,),
            Operation::SplitCamelCase => case::split_camel_case(input,).join("\n",),
            Operation::Roman => format::to_roman(format::to_integer(input,),),
            Operation::Boolean => format::boolean_label(format::is_truthy(input,),).to_string(),
            Operation::YesNo => format::yes_no_label(format::is_truthy(input,),).to_string(),
            Operation::Describe => format::describe_value(input,),
            Operation::Integer => format::to_integer(input,).to_string(),
            Operation::JoinList => {
                let lines: Vec<&str,> = input.lines().collect();
                format::join_list(&lines, &options.separator,)
            }
            Operation::EscapeAmpersands => format::escape_ampersands(input,),
            Operation::Increment => increment(input, &options.style, options.n,),
            Operation::SecondsToTime => {
                seconds_to_time(format::to_integer(input,).unsigned_abs(),)
            }
            Operation::RandomString => format::random_string(),
            Operation::ValidUtf8 => utf8::is_valid_utf8(input.as_bytes(),).to_string(),
            Operation::CompliantUtf8 => utf8::is_loosely_valid_utf8(input.as_bytes(),).to_string(),
        };

        self.localize(operation, output,)
    }

    fn localize(&self, operation: Operation, output: String,) -> String
    {
        match &self.translator {
            Some(translator,)
                if operation.is_localizable() && LOCALIZABLE_TOKENS.contains(&output.as_str(),) =>
            {
                translator(&output,)
            }
            _ => output,
        }
    }
}
