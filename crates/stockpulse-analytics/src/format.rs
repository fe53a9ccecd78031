// Dweve StockPulse - Synthetic Warehouse Data Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Display formatting for currency, period-over-period change and
//! relative time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

/// Direction of a change between two periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeDirection {
    Positive,
    Negative,
    Neutral,
}

impl ChangeDirection {
    pub fn between(current: f64, previous: f64) -> Self {
        match current.partial_cmp(&previous) {
            Some(Ordering::Greater) => Self::Positive,
            Some(Ordering::Less) => Self::Negative,
            _ => Self::Neutral,
        }
    }
}

/// Relative change from `previous` to `current` as a signed percentage
/// with one decimal, e.g. `+12.5%` or `-3.0%`.
///
/// Returns `0%` when `previous` is zero.
///
/// # Examples
///
/// ```
/// use stockpulse_analytics::percent_change;
///
/// assert_eq!(percent_change(150.0, 100.0), "+50.0%");
/// assert_eq!(percent_change(75.0, 100.0), "-25.0%");
/// assert_eq!(percent_change(10.0, 0.0), "0%");
/// ```
pub fn percent_change(current: f64, previous: f64) -> String {
    if previous == 0.0 {
        return "0%".to_string();
    }
    let change = (current - previous) / previous * 100.0;
    if change > 0.0 {
        format!("+{:.1}%", change)
    } else {
        format!("{:.1}%", change)
    }
}

/// Pound sterling with thousands separators and at most two decimals,
/// trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use stockpulse_analytics::format_currency;
///
/// assert_eq!(format_currency(1234567.5), "£1,234,567.5");
/// assert_eq!(format_currency(42.0), "£42");
/// ```
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let mut out = String::new();
    if amount < 0.0 && cents > 0 {
        out.push('-');
    }
    out.push('£');
    out.push_str(&group_thousands(whole));
    if fraction > 0 {
        let digits = format!("{:02}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// How long ago `then` was, seen from `now`, in the largest whole unit:
/// days from 24 hours, then hours, then minutes. Anything under a minute,
/// or in the future, is `Just now`.
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - then;
    let hours = elapsed.num_hours();
    let minutes = elapsed.num_minutes();

    if hours >= 24 {
        plural(hours / 24, "day")
    } else if hours >= 1 {
        plural(hours, "hour")
    } else if minutes >= 1 {
        plural(minutes, "minute")
    } else {
        "Just now".to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(110.0, 100.0), "+10.0%");
        assert_eq!(percent_change(100.0, 100.0), "0.0%");
        assert_eq!(percent_change(0.0, 100.0), "-100.0%");
        assert_eq!(percent_change(0.0, 0.0), "0%");
        assert_eq!(percent_change(1.0, 3.0), "-66.7%");
    }

    #[test]
    fn test_change_direction() {
        assert_eq!(ChangeDirection::between(2.0, 1.0), ChangeDirection::Positive);
        assert_eq!(ChangeDirection::between(1.0, 2.0), ChangeDirection::Negative);
        assert_eq!(ChangeDirection::between(1.0, 1.0), ChangeDirection::Neutral);
    }

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(0.0), "£0");
        assert_eq!(format_currency(999.0), "£999");
        assert_eq!(format_currency(1000.0), "£1,000");
        assert_eq!(format_currency(12345.67), "£12,345.67");
        assert_eq!(format_currency(0.05), "£0.05");
        assert_eq!(format_currency(-2500.1), "-£2,500.1");
        assert_eq!(format_currency(1.999), "£2");
    }

    #[test]
    fn test_time_ago() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
        let ago = |d: Duration| format_time_ago(now - d, now);

        assert_eq!(ago(Duration::seconds(30)), "Just now");
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(59)), "59 minutes ago");
        assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
        assert_eq!(ago(Duration::hours(49)), "2 days ago");
        assert_eq!(format_time_ago(now + Duration::hours(2), now), "Just now");
    }
}
