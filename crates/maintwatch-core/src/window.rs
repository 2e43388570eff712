//! Maintenance window type and the reconciliation rule

use chrono::{DateTime, FixedOffset, TimeDelta};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    #[error("window end {end} is not after start {start}")]
    NotAfterStart {
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    },
}

/// A scheduled outage. Both instants keep the offset they were announced in.
///
/// `start < end` always holds; the only way to build one is [`MaintenanceWindow::new`]
/// (deserialization goes through it too).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow", into = "RawWindow")]
pub struct MaintenanceWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

#[derive(Serialize, Deserialize)]
struct RawWindow {
    start: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl MaintenanceWindow {
    pub fn new(
        start: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Result<Self, WindowError> {
        if end <= start {
            return Err(WindowError::NotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        self.start
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Total length of the outage
    pub fn length(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl TryFrom<RawWindow> for MaintenanceWindow {
    type Error = WindowError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl From<MaintenanceWindow> for RawWindow {
    fn from(window: MaintenanceWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
        }
    }
}

/// True when `candidate` announces a strictly later start than `persisted`.
///
/// Comparison is between instants, so the same start written in two
/// different offsets does not count as newer.
pub fn supersedes(candidate: &MaintenanceWindow, persisted: &MaintenanceWindow) -> bool {
    candidate.start > persisted.start
}

/// Decide which window should be persisted after seeing `candidate`.
///
/// Never regresses: an older or identical announcement keeps `persisted`.
pub fn reconcile(
    persisted: Option<MaintenanceWindow>,
    candidate: Option<MaintenanceWindow>,
) -> Option<MaintenanceWindow> {
    match (persisted, candidate) {
        (current, None) => current,
        (None, Some(candidate)) => Some(candidate),
        (Some(current), Some(candidate)) => {
            if supersedes(&candidate, &current) {
                Some(candidate)
            } else {
                Some(current)
            }
        }
    }
}
