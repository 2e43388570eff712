//! Chat replies and activity strings for each classification

use chrono::{DateTime, FixedOffset, TimeZone};
use maintwatch_core::{format_duration, Classification, DurationStyle};

/// Default offset for the activity clock (UTC-7).
pub const DEFAULT_DISPLAY_OFFSET_HOURS: i32 = -7;

/// Chat-platform timestamp markup; clients render it in the reader's own zone.
pub fn chat_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    format!("<t:{}:F>", dt.timestamp())
}

fn long(duration: chrono::TimeDelta) -> String {
    let text = format_duration(duration, DurationStyle::Long);
    if text.is_empty() {
        "less than a minute".to_string()
    } else {
        text
    }
}

fn short(duration: chrono::TimeDelta) -> String {
    let text = format_duration(duration, DurationStyle::Short);
    if text.is_empty() {
        "<1m".to_string()
    } else {
        text
    }
}

/// Answer to the `/maintenance` command.
pub fn maintenance_reply(classification: &Classification) -> String {
    match classification {
        Classification::Unknown => "No upcoming maintenance announced.".to_string(),
        Classification::Concluded { end } => format!(
            "No upcoming maintenance announced; most recent maintenance ended {}",
            chat_timestamp(end)
        ),
        Classification::Upcoming {
            start,
            end,
            until_start,
            length,
        } => format!(
            "⚠️ **__Upcoming maintenance!__**\n**Start:** {}\n({} from now)\n**End:** {}\n**Duration:** {}",
            chat_timestamp(start),
            long(*until_start),
            chat_timestamp(end),
            long(*length)
        ),
        Classification::Ongoing { remaining, .. } => {
            format!("Maintenance will end in {}", short(*remaining))
        }
    }
}

/// Bot activity line: a countdown while maintenance runs, otherwise a clock.
pub fn activity_status<Tz: TimeZone>(
    now: &DateTime<Tz>,
    classification: &Classification,
    display_offset: FixedOffset,
) -> String {
    match classification {
        Classification::Ongoing { remaining, .. } => {
            format!("⚠️ Maint ends in {}", short(*remaining))
        }
        _ => format_display_time(now, display_offset),
    }
}

/// `October 14, 2026 3:05 PM (UTC-7)`
pub fn format_display_time<Tz: TimeZone>(dt: &DateTime<Tz>, offset: FixedOffset) -> String {
    let local = dt.with_timezone(&offset);
    format!(
        "{} ({})",
        local.format("%B %-d, %Y %-I:%M %p"),
        utc_label(offset)
    )
}

/// `UTC-7`, `UTC+0`, `UTC+5:30`
pub fn utc_label(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let hours = seconds.abs() / 3600;
    let minutes = (seconds.abs() % 3600) / 60;
    if minutes == 0 {
        format!("UTC{sign}{hours}")
    } else {
        format!("UTC{sign}{hours}:{minutes:02}")
    }
}
