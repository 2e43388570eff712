//! Poll cycle coordination and the periodic status refresh

use crate::render;
use crate::state::WatchState;
use anyhow::Context;
use chrono::{FixedOffset, Utc};
use maintwatch_core::{classify, parse_announcement, reconcile, MaintenanceWindow};
use maintwatch_source::AnnouncementSource;
use maintwatch_store::WindowStore;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

/// What one poll cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The source could not be reached; the window is untouched until the next cycle
    FetchFailed,
    /// Nothing new: no post, no parseable window, or not newer than the current one
    Unchanged(Option<MaintenanceWindow>),
    /// A newer window was persisted
    Replaced(MaintenanceWindow),
}

pub struct Poller<S, St> {
    source: S,
    store: St,
    state: WatchState,
}

impl<S, St> Poller<S, St>
where
    S: AnnouncementSource,
    St: WindowStore,
{
    /// Seed the shared state from whatever the store already holds.
    pub fn new(source: S, store: St) -> anyhow::Result<Self> {
        let initial = store
            .get_window()
            .context("failed to read persisted window")?;
        debug!(?initial, "poller starting");
        Ok(Self {
            source,
            store,
            state: WatchState::new(initial),
        })
    }

    /// Handle for the query and status paths.
    pub fn state(&self) -> WatchState {
        self.state.clone()
    }

    /// One fetch, parse, reconcile, persist pass.
    ///
    /// Fetch failures are logged and reported as [`CycleOutcome::FetchFailed`];
    /// only store errors are returned as `Err`.
    pub async fn poll_once(&self) -> anyhow::Result<CycleOutcome> {
        let persisted = self
            .store
            .get_window()
            .context("failed to read persisted window")?;
        if let Some(window) = persisted {
            self.state.replace(window).await;
        }
        debug!(?persisted, "current window");

        let text = match self.source.latest().await {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "fetch failed; keeping current window");
                return Ok(CycleOutcome::FetchFailed);
            }
        };

        let candidate = text.as_deref().and_then(parse_announcement);
        info!(
            has_post = text.is_some(),
            matched = candidate.is_some(),
            "fetch result"
        );

        let reconciled = reconcile(persisted, candidate);
        match reconciled {
            Some(window) if reconciled != persisted => {
                self.store
                    .set_window(&window)
                    .context("failed to persist window")?;
                self.state.replace(window).await;
                info!(start = %window.start(), end = %window.end(), "window replaced");
                Ok(CycleOutcome::Replaced(window))
            }
            _ => Ok(CycleOutcome::Unchanged(reconciled)),
        }
    }

    /// Poll on a fixed schedule, forever.
    ///
    /// Ticks come from a fixed interval, not from cycle completion. A cycle
    /// that overruns its slot makes the loop skip the missed ticks rather than
    /// start cycles back to back, so cycles never overlap.
    pub async fn run(&self, every: Duration) {
        let mut ticker = interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            match self.poll_once().await {
                Ok(outcome) => debug!(?outcome, "poll cycle finished"),
                Err(err) => error!(error = %format!("{err:#}"), "poll cycle failed"),
            }
        }
    }
}

/// Current activity line for `state` at the present moment.
pub async fn status_line(state: &WatchState, display_offset: FixedOffset) -> String {
    let now = Utc::now();
    let window = state.window().await;
    render::activity_status(&now, &classify(&now, window.as_ref()), display_offset)
}

/// Refresh the activity line every `every`, publishing it on `publish`.
pub async fn run_status_loop(
    state: WatchState,
    every: Duration,
    display_offset: FixedOffset,
    publish: watch::Sender<String>,
) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        let status = status_line(&state, display_offset).await;
        info!(%status, "activity");
        publish.send_replace(status);
    }
}
