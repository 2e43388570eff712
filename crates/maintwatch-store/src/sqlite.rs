use crate::{Result, StoreError, WindowStore};
use chrono::{DateTime, FixedOffset};
use maintwatch_core::MaintenanceWindow;
use rusqlite::{params, Connection, OptionalExtension};
use serde::Deserialize;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const LEGACY_START_KEY: &str = "keyv:start";
const LEGACY_END_KEY: &str = "keyv:end";

/// Value envelope used by the old key/value layout.
#[derive(Deserialize)]
struct LegacyValue {
    value: Option<f64>,
}

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(db_path)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS maintenance_window (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                starts_at TEXT NOT NULL,
                ends_at TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn read_current(conn: &Connection) -> Result<Option<MaintenanceWindow>> {
        let row: Option<(String, String)> = conn
            .query_row(
                "SELECT starts_at, ends_at FROM maintenance_window WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((start, end)) => Ok(Some(MaintenanceWindow::new(
                parse_rfc3339(&start)?,
                parse_rfc3339(&end)?,
            )?)),
            None => Ok(None),
        }
    }

    /// Read `start`/`end` unix seconds from the old `keyv` table, if present.
    ///
    /// Only a complete, valid pair counts; anything else reads as no window.
    fn read_legacy(conn: &Connection) -> Result<Option<MaintenanceWindow>> {
        let has_table: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'keyv')",
            [],
            |row| row.get(0),
        )?;
        if !has_table {
            return Ok(None);
        }

        let start = Self::read_legacy_seconds(conn, LEGACY_START_KEY)?;
        let end = Self::read_legacy_seconds(conn, LEGACY_END_KEY)?;
        let (Some(start), Some(end)) = (start, end) else {
            return Ok(None);
        };

        match MaintenanceWindow::new(start, end) {
            Ok(window) => Ok(Some(window)),
            Err(err) => {
                tracing::warn!(%err, "ignoring invalid legacy window");
                Ok(None)
            }
        }
    }

    fn read_legacy_seconds(conn: &Connection, key: &str) -> Result<Option<DateTime<FixedOffset>>> {
        let raw: Option<Option<String>> = conn
            .query_row("SELECT value FROM keyv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        let Some(raw) = raw.flatten() else {
            return Ok(None);
        };

        let seconds = match serde_json::from_str::<LegacyValue>(&raw) {
            Ok(LegacyValue { value: Some(v) }) => v,
            Ok(LegacyValue { value: None }) => return Ok(None),
            Err(err) => {
                tracing::warn!(key, %err, "ignoring malformed legacy value");
                return Ok(None);
            }
        };

        let instant = DateTime::from_timestamp(seconds.round() as i64, 0).ok_or_else(|| {
            StoreError::InvalidTimestamp {
                value: raw.clone(),
                reason: "out of range".to_string(),
            }
        })?;
        Ok(Some(instant.fixed_offset()))
    }
}

fn parse_rfc3339(value: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).map_err(|e| StoreError::InvalidTimestamp {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

impl WindowStore for SqliteStore {
    fn get_window(&self) -> Result<Option<MaintenanceWindow>> {
        let conn = self.conn()?;
        match Self::read_current(&conn)? {
            Some(window) => Ok(Some(window)),
            None => Self::read_legacy(&conn),
        }
    }

    fn set_window(&self, window: &MaintenanceWindow) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO maintenance_window (id, starts_at, ends_at) VALUES (1, ?1, ?2)
             ON CONFLICT(id) DO UPDATE SET starts_at = excluded.starts_at, ends_at = excluded.ends_at",
            params![window.start().to_rfc3339(), window.end().to_rfc3339()],
        )?;
        Ok(())
    }
}
