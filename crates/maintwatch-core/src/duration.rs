//! Human-readable durations

use chrono::TimeDelta;

const SECONDS_PER_MINUTE: i64 = 60;
const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationStyle {
    /// `1d 2h 30m`
    Short,
    /// `1 day, 2 hours, 30 minutes`
    Long,
}

/// Days, hours and minutes of a span, minutes rounded to the nearest whole minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Breakdown {
    days: i64,
    hours: i64,
    minutes: i64,
}

impl Breakdown {
    fn of(duration: TimeDelta) -> Self {
        let seconds = duration.num_seconds().max(0);
        // Round half-up, then carry a rounded 60m into the hour and 24h into the day.
        let total_minutes = (seconds + SECONDS_PER_MINUTE / 2) / SECONDS_PER_MINUTE;
        let minutes = total_minutes % MINUTES_PER_HOUR;
        let total_hours = total_minutes / MINUTES_PER_HOUR;
        Self {
            days: total_hours / HOURS_PER_DAY,
            hours: total_hours % HOURS_PER_DAY,
            minutes,
        }
    }
}

fn plural(value: i64, unit: &str) -> String {
    if value == 1 {
        format!("1 {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

/// Render a duration, omitting zero components.
///
/// Spans under thirty seconds (and negative spans) render as an empty string.
pub fn format_duration(duration: TimeDelta, style: DurationStyle) -> String {
    let parts = Breakdown::of(duration);
    let components = [
        (parts.days, "d", "day"),
        (parts.hours, "h", "hour"),
        (parts.minutes, "m", "minute"),
    ];

    let rendered: Vec<String> = components
        .iter()
        .filter(|(value, _, _)| *value > 0)
        .map(|&(value, short, long)| match style {
            DurationStyle::Short => format!("{value}{short}"),
            DurationStyle::Long => plural(value, long),
        })
        .collect();

    match style {
        DurationStyle::Short => rendered.join(" "),
        DurationStyle::Long => rendered.join(", "),
    }
}
