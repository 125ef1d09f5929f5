// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Human readable durations and wall-clock helpers.

use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Formats a duration given in seconds as `"1 day 2 hours 3 minutes 4 seconds"`.
///
/// Zero components are omitted and each unit is singular only when its value
/// is exactly one. A zero duration yields an empty string.
///
/// # Examples
///
/// ```
/// assert_eq!(cms_text::seconds_to_time(65,), "1 minute 5 seconds");
/// assert_eq!(cms_text::seconds_to_time(90_061,), "1 day 1 hour 1 minute 1 second");
/// assert_eq!(cms_text::seconds_to_time(0,), "");
/// ```
pub fn seconds_to_time(seconds: u64,) -> String
{
    let days = seconds / SECONDS_PER_DAY;
    let hours = seconds % SECONDS_PER_DAY / SECONDS_PER_HOUR;
    let minutes = seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
    let remainder = seconds % SECONDS_PER_MINUTE;

    [(days, "day",), (hours, "hour",), (minutes, "minute",), (remainder, "second",),]
        .into_iter()
        .filter(|(value, _,)| *value > 0,)
        .map(|(value, unit,)| {
            let plural = if value == 1 { "" } else { "s" };
            format!("{value} {unit}{plural}")
        },)
        .collect::<Vec<_,>>()
        .join(" ",)
}

/// Current Unix time in seconds, with sub-second precision.
///
/// A clock set before the epoch reads as `0.0`.
pub fn microtime() -> f64
{
    SystemTime::now()
        .duration_since(UNIX_EPOCH,)
        .map(|elapsed| elapsed.as_secs_f64(),)
        .unwrap_or_default()
}
