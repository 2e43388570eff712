//! Single-file JSON store

use crate::{Result, WindowStore};
use maintwatch_core::MaintenanceWindow;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Stores the window as `{"start": ..., "end": ...}` in one file.
///
/// Every write goes to a sibling temp file which is then renamed over the
/// target, so a reader sees the old window or the new one.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WindowStore for JsonFileStore {
    fn get_window(&self) -> Result<Option<MaintenanceWindow>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn set_window(&self, window: &MaintenanceWindow) -> Result<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| crate::StoreError::Poisoned)?;
        let json = serde_json::to_string_pretty(window)?;
        replace_file(&self.path, json.as_bytes())?;
        tracing::debug!(path = %self.path.display(), "window written");
        Ok(())
    }
}

fn replace_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("tmp");
    let mut file = std::fs::File::create(&temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeDelta, TimeZone};

    fn window(day: u32) -> MaintenanceWindow {
        let start = FixedOffset::west_opt(7 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 3, day, 10, 0, 0)
            .unwrap();
        MaintenanceWindow::new(start, start + TimeDelta::hours(6)).unwrap()
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("window.json");
        let store = JsonFileStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.get_window().unwrap(), None);
    }

    #[test]
    fn test_replace_and_survive_reopen() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("state").join("window.json");

        let store = JsonFileStore::new(&path);
        store.set_window(&window(10)).unwrap();
        store.set_window(&window(17)).unwrap();
        assert!(!path.with_extension("tmp").exists());

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.get_window().unwrap(), Some(window(17)));
    }

    #[test]
    fn test_half_written_record_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("window.json");
        std::fs::write(&path, r#"{"start":"2026-03-10T10:00:00-07:00"}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.get_window().is_err());
    }
}
