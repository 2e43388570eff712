//! Durable storage for the most recently observed maintenance window

mod error;
mod json;
mod memory;
mod sqlite;

pub use error::{Result, StoreError};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use maintwatch_core::MaintenanceWindow;
use std::path::Path;

/// Holds at most one window, replaced as a whole.
pub trait WindowStore: Send + Sync {
    fn get_window(&self) -> Result<Option<MaintenanceWindow>>;

    fn set_window(&self, window: &MaintenanceWindow) -> Result<()>;
}

impl<S: WindowStore + ?Sized> WindowStore for Box<S> {
    fn get_window(&self) -> Result<Option<MaintenanceWindow>> {
        (**self).get_window()
    }

    fn set_window(&self, window: &MaintenanceWindow) -> Result<()> {
        (**self).set_window(window)
    }
}

/// Open the store at `path`: `.json` files use [`JsonFileStore`], anything else sqlite.
pub fn open(path: &Path) -> Result<Box<dyn WindowStore>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Ok(Box::new(JsonFileStore::new(path)))
    } else {
        Ok(Box::new(SqliteStore::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta, TimeZone};

    fn sample_window() -> MaintenanceWindow {
        let start = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, 10, 10, 0, 0)
            .unwrap();
        MaintenanceWindow::new(start, start + TimeDelta::hours(6)).unwrap()
    }

    #[test]
    fn test_open_picks_backend_by_extension() {
        let temp = tempfile::TempDir::new().unwrap();
        for name in ["window.json", "store.sqlite"] {
            let store = open(&temp.path().join(name)).unwrap();
            assert_eq!(store.get_window().unwrap(), None);
            store.set_window(&sample_window()).unwrap();
            assert_eq!(store.get_window().unwrap(), Some(sample_window()));
        }
        assert!(temp.path().join("window.json").exists());
        assert!(temp.path().join("store.sqlite").exists());
    }
}
