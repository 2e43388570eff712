//! In-process store

use crate::{Result, StoreError, WindowStore};
use maintwatch_core::MaintenanceWindow;
use std::sync::Mutex;

/// Non-durable store, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    window: Mutex<Option<MaintenanceWindow>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(window: MaintenanceWindow) -> Self {
        Self {
            window: Mutex::new(Some(window)),
        }
    }
}

impl WindowStore for MemoryStore {
    fn get_window(&self) -> Result<Option<MaintenanceWindow>> {
        Ok(*self.window.lock().map_err(|_| StoreError::Poisoned)?)
    }

    fn set_window(&self, window: &MaintenanceWindow) -> Result<()> {
        *self.window.lock().map_err(|_| StoreError::Poisoned)? = Some(*window);
        Ok(())
    }
}
