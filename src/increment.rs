// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Trailing-number labels for copies: `"Label"`, `"Label (2)"`, `"Label (3)"`.
//!
//! Two styles are built in and live in a read-only table compiled on first
//! use:
//!
//! | style     | first copy    | next copy     |
//! |-----------|---------------|---------------|
//! | `default` | `Label (2)`   | `Label (3)`   |
//! | `dash`    | `Label-2`     | `Label-3`     |

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

/// Name of the parenthesized style, also the fallback for unknown names.
pub const DEFAULT_STYLE: &str = "default";
/// Name of the dash style.
pub const DASH_STYLE: &str = "dash";

/// Number written between a fixed prefix and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
struct NumberFormat
{
    prefix: &'static str,
    suffix: &'static str,
}

impl NumberFormat
{
    fn render(self, number: u64,) -> String
    {
        format!("{}{number}{}", self.prefix, self.suffix)
    }
}

/// A named increment style.
#[derive(Debug,)]
pub struct IncrementStyle
{
    name:     &'static str,
    /// Detects an existing suffix and captures its number.
    search:   Regex,
    /// Part of the label rewritten when a suffix already exists.
    replace:  Regex,
    /// Suffix appended to labels without one.
    appended: NumberFormat,
    /// Text substituted for `replace` when a suffix exists.
    existing: NumberFormat,
}

static STYLES: LazyLock<[IncrementStyle; 2],> = LazyLock::new(|| {
    [
        IncrementStyle {
            name:     DEFAULT_STYLE,
            search:   Regex::new(r"\((\d+)\)$",).expect("default search pattern should compile",),
            replace:  Regex::new(r"\(\d+\)$",).expect("default replace pattern should compile",),
            appended: NumberFormat {
                prefix: " (", suffix: ")",
            },
            existing: NumberFormat {
                prefix: "(", suffix: ")",
            },
        },
        IncrementStyle {
            name:     DASH_STYLE,
            search:   Regex::new(r"-(\d+)$",).expect("dash search pattern should compile",),
            replace:  Regex::new(r"-(\d+)$",).expect("dash replace pattern should compile",),
            appended: NumberFormat {
                prefix: "-", suffix: "",
            },
            existing: NumberFormat {
                prefix: "-", suffix: "",
            },
        },
    ]
},);

impl IncrementStyle
{
    /// Looks up a style by name, falling back to the `default` style.
    pub fn named(name: &str,) -> &'static Self
    {
        let styles: &'static [Self; 2] = &STYLES;
        match styles.iter().find(|style| style.name == name,) {
            Some(style,) => style,
            None => {
                debug!("unknown increment style '{}', using '{}'", name, DEFAULT_STYLE);
                &styles[0]
            }
        }
    }

    /// Names of the built-in styles.
    pub fn names() -> impl Iterator<Item = &'static str,>
    {
        let styles: &'static [Self; 2] = &STYLES;
        styles.iter().map(|style| style.name,)
    }

    /// Name of this style.
    pub fn name(&self,) -> &'static str
    {
        self.name
    }

    /// Applies the style to `label`. See [`increment`].
    pub fn apply(&self, label: &str, n: u64,) -> String
    {
        let current = self.search.captures(label,).map(|captures| {
            // Digit runs too long for u64 saturate rather than restart at 2.
            captures[1].parse::<u64>().unwrap_or(u64::MAX,)
        },);

        match current {
            Some(current,) => {
                let next = if n == 0 { current.saturating_add(1,) } else { n };
                let rendered = self.existing.render(next,);
                self.replace.replace(label, NoExpand(&rendered,),).into_owned()
            }
            None => {
                let next = if n == 0 { 2 } else { n };
                format!("{label}{}", self.appended.render(next,))
            }
        }
    }
}

/// Appends or increments a trailing number on `label`.
///
/// When `label` already ends in the style's suffix, its number is replaced by
/// `n`, or by the current number plus one when `n` is `0`. Otherwise a new
/// suffix carrying `n` (or `2` when `n` is `0`) is appended. Unknown style
/// names use the `default` style.
///
/// # Examples
///
/// ```
/// use cms_text::increment;
///
/// assert_eq!(increment("Label", "default", 0,), "Label (2)");
/// assert_eq!(increment("Label (2)", "default", 0,), "Label (3)");
/// assert_eq!(increment("Label", "dash", 0,), "Label-2");
/// assert_eq!(increment("Label-2", "dash", 5,), "Label-5");
/// ```
pub fn increment(label: &str, style: &str, n: u64,) -> String
{
    IncrementStyle::named(style,).apply(label, n,)
}
