//! Where "now" falls relative to the known maintenance window

use crate::window::MaintenanceWindow;
use chrono::{DateTime, FixedOffset, TimeDelta, TimeZone};

/// Presentation state for a maintenance query. Recomputed on every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No window has ever been observed
    Unknown,
    /// The most recent window is over
    Concluded { end: DateTime<FixedOffset> },
    /// The window has not started yet
    Upcoming {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
        until_start: TimeDelta,
        length: TimeDelta,
    },
    /// Maintenance is in progress (both bounds inclusive)
    Ongoing {
        end: DateTime<FixedOffset>,
        remaining: TimeDelta,
    },
}

impl Classification {
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Classification::Ongoing { .. })
    }
}

/// Classify `now` against `window`. Accepts `now` in any time zone.
pub fn classify<Tz: TimeZone>(now: &DateTime<Tz>, window: Option<&MaintenanceWindow>) -> Classification {
    let Some(window) = window else {
        return Classification::Unknown;
    };
    let now = now.fixed_offset();
    let (start, end) = (window.start(), window.end());

    if now > end {
        Classification::Concluded { end }
    } else if now < start {
        Classification::Upcoming {
            start,
            end,
            until_start: start - now,
            length: window.length(),
        }
    } else {
        Classification::Ongoing {
            end,
            remaining: end - now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn window() -> MaintenanceWindow {
        let start = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 10, 10, 0, 0)
            .unwrap();
        MaintenanceWindow::new(start, start + TimeDelta::hours(2)).unwrap()
    }

    #[test]
    fn test_unknown_without_window() {
        assert_eq!(classify(&Utc::now(), None), Classification::Unknown);
    }

    #[test]
    fn test_upcoming() {
        let w = window();
        let now = w.start() - TimeDelta::hours(1);
        match classify(&now, Some(&w)) {
            Classification::Upcoming {
                start,
                end,
                until_start,
                length,
            } => {
                assert_eq!(start, w.start());
                assert_eq!(end, w.end());
                assert_eq!(until_start, TimeDelta::hours(1));
                assert_eq!(length, TimeDelta::hours(2));
            }
            other => panic!("expected Upcoming, got {other:?}"),
        }
    }

    #[test]
    fn test_ongoing() {
        let w = window();
        let now = (w.start() + TimeDelta::hours(1)).with_timezone(&Utc);
        assert_eq!(
            classify(&now, Some(&w)),
            Classification::Ongoing {
                end: w.end(),
                remaining: TimeDelta::hours(1),
            }
        );
    }

    #[test]
    fn test_bounds_are_ongoing() {
        let w = window();
        assert!(classify(&w.start(), Some(&w)).is_ongoing());
        assert!(classify(&w.end(), Some(&w)).is_ongoing());
    }

    #[test]
    fn test_concluded() {
        let w = window();
        let now = w.start() + TimeDelta::hours(3);
        assert_eq!(
            classify(&now, Some(&w)),
            Classification::Concluded { end: w.end() }
        );
        let just_after = w.end() + TimeDelta::seconds(1);
        assert!(matches!(
            classify(&just_after, Some(&w)),
            Classification::Concluded { .. }
        ));
    }
}
