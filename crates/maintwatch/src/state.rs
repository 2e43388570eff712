//! Current-window handle shared by the poll loop, status loop and queries

use maintwatch_core::MaintenanceWindow;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cheap to clone; all clones see the same window.
///
/// The window is swapped as one value, so a reader gets either the previous
/// window or the new one.
#[derive(Debug, Clone, Default)]
pub struct WatchState {
    window: Arc<RwLock<Option<MaintenanceWindow>>>,
}

impl WatchState {
    pub fn new(initial: Option<MaintenanceWindow>) -> Self {
        Self {
            window: Arc::new(RwLock::new(initial)),
        }
    }

    pub async fn window(&self) -> Option<MaintenanceWindow> {
        *self.window.read().await
    }

    pub async fn replace(&self, window: MaintenanceWindow) {
        *self.window.write().await = Some(window);
    }
}
