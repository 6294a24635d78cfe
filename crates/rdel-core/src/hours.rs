//! Delivery-hours parsing and the one-line range summary shown on each card.
//!
//! Intervals follow the grammar `<day>[-<day>] HH:MM-HH:MM`, e.g.
//! `"Mon 09:00-17:00"` or `"Mon-Fri 09:00-17:00"`. Day names are English,
//! short or long, case-insensitive. Both `-` and `–` separate ranges.

use chrono::{NaiveTime, Timelike, Weekday};

use crate::error::IntervalError;

/// Label used when no interval yields a computable range.
pub const HOURS_VARY: &str = "Hours vary";

const DAYS_IN_WEEK: u8 = 7;

/// A parsed delivery window covering one day or a run of consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryInterval {
    pub first_day: Weekday,
    pub last_day: Weekday,
    pub opens: NaiveTime,
    pub closes: NaiveTime,
}

impl DeliveryInterval {
    /// Number of days covered, counting wrap-around (`Sat-Mon` is 3).
    #[must_use]
    pub fn day_count(&self) -> u8 {
        let from = self.first_day.num_days_from_monday();
        let to = self.last_day.num_days_from_monday();
        u8::try_from((to + 7 - from) % 7 + 1).unwrap_or(DAYS_IN_WEEK)
    }

    fn same_hours(&self, other: &Self) -> bool {
        self.opens == other.opens && self.closes == other.closes
    }
}

/// Parses a single interval string.
///
/// # Errors
///
/// Returns [`IntervalError`] describing the first part of the string that
/// does not fit the grammar.
pub fn parse_interval(raw: &str) -> Result<DeliveryInterval, IntervalError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(IntervalError::Empty);
    }

    let split_at = raw
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| IntervalError::MissingTimeRange(raw.to_string()))?;
    let (days, times) = raw.split_at(split_at);

    let days = days.trim();
    if days.is_empty() {
        return Err(IntervalError::UnknownDay(String::new()));
    }
    let days = days.replace('–', "-");
    let (first_day, last_day) = match days.split_once('-') {
        Some((from, to)) => (parse_day(from)?, parse_day(to)?),
        None => {
            let day = parse_day(&days)?;
            (day, day)
        }
    };

    let times = times.replace('–', "-");
    let (opens, closes) = times
        .split_once('-')
        .ok_or_else(|| IntervalError::InvalidTimeRange(times.trim().to_string()))?;

    Ok(DeliveryInterval {
        first_day,
        last_day,
        opens: parse_time(opens)?,
        closes: parse_time(closes)?,
    })
}

fn parse_day(token: &str) -> Result<Weekday, IntervalError> {
    let token = token.trim();
    token
        .parse::<Weekday>()
        .map_err(|_| IntervalError::UnknownDay(token.to_string()))
}

fn parse_time(token: &str) -> Result<NaiveTime, IntervalError> {
    let token = token.trim();
    NaiveTime::parse_from_str(token, "%H:%M")
        .map_err(|_| IntervalError::InvalidTime(token.to_string()))
}

/// Summarizes an ordered list of interval strings into a single label,
/// falling back to [`HOURS_VARY`].
///
/// Consecutive intervals with identical hours whose days follow on from one
/// another merge into a day range; everything else is listed separately, in
/// input order, joined by `"; "`. Malformed intervals are skipped.
#[must_use]
pub fn summarize<I, S>(intervals: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    summarize_with_fallback(intervals, HOURS_VARY)
}

/// Like [`summarize`] with a caller-chosen label for the no-range case.
#[must_use]
pub fn summarize_with_fallback<I, S>(intervals: I, fallback: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut groups: Vec<(DeliveryInterval, u8)> = Vec::new();

    for raw in intervals {
        let raw = raw.as_ref();
        let interval = match parse_interval(raw) {
            Ok(interval) => interval,
            Err(e) => {
                tracing::debug!(interval = raw, error = %e, "skipping malformed delivery interval");
                continue;
            }
        };

        if let Some((group, span)) = groups.last_mut() {
            let follows_on = group.last_day.succ() == interval.first_day;
            let fits_week = *span + interval.day_count() <= DAYS_IN_WEEK;
            if follows_on && fits_week && group.same_hours(&interval) {
                group.last_day = interval.last_day;
                *span += interval.day_count();
                continue;
            }
        }
        groups.push((interval, interval.day_count()));
    }

    if groups.is_empty() {
        return fallback.to_string();
    }

    groups
        .iter()
        .map(|(group, _)| format_group(group))
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_group(group: &DeliveryInterval) -> String {
    let days = if group.first_day == group.last_day {
        day_name(group.first_day).to_string()
    } else {
        format!("{}–{}", day_name(group.first_day), day_name(group.last_day))
    };
    format!(
        "{days}, {}–{}",
        format_time(group.opens),
        format_time(group.closes)
    )
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// `09:00` → `9am`, `17:30` → `5:30pm`, `00:00` → `12am`.
fn format_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let suffix = if is_pm { "pm" } else { "am" };
    match time.minute() {
        0 => format!("{hour}{suffix}"),
        minute => format!("{hour}:{minute:02}{suffix}"),
    }
}

#[cfg(test)]
#[path = "hours_test.rs"]
mod tests;
