//! Announcement text to maintenance window

use crate::window::MaintenanceWindow;
use chrono::{FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::{Captures, Regex};
use std::sync::OnceLock;

static ANNOUNCEMENT_RE: OnceLock<Regex> = OnceLock::new();

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn announcement_re() -> &'static Regex {
    ANNOUNCEMENT_RE.get_or_init(|| {
        Regex::new(
            r"(?ix)
            (?P<month>january|february|march|april|may|june|july|august|september|october|november|december)
            \s+ (?P<day>[0-9]{1,2}) \s*,\s* (?P<year>[0-9]{4})
            [^0-9]+?
            (?P<start>[0-9]{1,2}:[0-9]{2})
            [^0-9]+?
            (?P<end>[0-9]{1,2}:[0-9]{2})
            \s* \( \s* UTC \s* (?P<offset>[+\-−]?\s*[0-9]{1,2})? \s* \)
            ",
        )
        .unwrap()
    })
}

/// Extract a maintenance window from a post such as
/// `"... on March 10, 2026, 10:00-16:00 (UTC-7) ..."`.
///
/// Returns `None` when the text holds no such date, when a component is out
/// of range, or when the end does not fall after the start on the same day.
pub fn parse_announcement(text: &str) -> Option<MaintenanceWindow> {
    let caps = announcement_re().captures(text)?;

    let date = parse_date(&caps)?;
    let offset = parse_offset(caps.name("offset").map(|m| m.as_str()))?;
    let start = parse_time(&caps["start"])?;
    let end = parse_time(&caps["end"])?;

    let start = offset
        .from_local_datetime(&NaiveDateTime::new(date, start))
        .single()?;
    let end = offset
        .from_local_datetime(&NaiveDateTime::new(date, end))
        .single()?;

    match MaintenanceWindow::new(start, end) {
        Ok(window) => Some(window),
        Err(err) => {
            tracing::debug!(%err, "announcement matched but window is empty or crosses midnight");
            None
        }
    }
}

fn parse_date(caps: &Captures) -> Option<NaiveDate> {
    let month_name = caps["month"].to_lowercase();
    let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    let day: u32 = caps["day"].parse().ok()?;
    let year: i32 = caps["year"].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let (hours, minutes) = s.split_once(':')?;
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}

/// `"-7"`, `"+8"`, `"−5"` or nothing (plain `UTC`) to a fixed offset.
fn parse_offset(raw: Option<&str>) -> Option<FixedOffset> {
    let Some(raw) = raw else {
        return FixedOffset::east_opt(0);
    };
    let raw: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let (negative, digits) = match raw.chars().next()? {
        '-' | '−' => (true, &raw[raw.char_indices().nth(1)?.0..]),
        '+' => (false, &raw[1..]),
        _ => (false, raw.as_str()),
    };
    let hours: i32 = digits.parse().ok()?;
    if hours > 23 {
        return None;
    }
    let seconds = hours * 3600;
    FixedOffset::east_opt(if negative { -seconds } else { seconds })
}
