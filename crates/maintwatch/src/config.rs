//! Process configuration from the environment (and an optional `.env`)

use crate::render::DEFAULT_DISPLAY_OFFSET_HOURS;
use anyhow::{bail, Context, Result};
use chrono::FixedOffset;
use maintwatch_source::{DEFAULT_API_BASE, DEFAULT_QUERY};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const BEARER_TOKEN_VAR: &str = "TWITTER_API_BEARER_TOKEN";
pub const CHECK_FREQUENCY_VAR: &str = "CHECK_FREQUENCY_IN_MINUTES";
pub const STATUS_REFRESH_VAR: &str = "STATUS_REFRESH_SECONDS";
pub const QUERY_VAR: &str = "MAINTWATCH_QUERY";
pub const API_BASE_VAR: &str = "MAINTWATCH_API_BASE";
pub const DISPLAY_OFFSET_VAR: &str = "MAINTWATCH_DISPLAY_OFFSET_HOURS";
pub const STORE_VAR: &str = "MAINTWATCH_STORE";

const DEFAULT_STATUS_REFRESH_SECONDS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Twitter app bearer token; only the polling commands need it
    pub bearer_token: Option<String>,

    /// Minutes between poll cycles; only `run` needs it
    pub check_frequency_minutes: Option<u64>,

    /// Activity line refresh period
    pub status_refresh: Duration,

    pub query: String,

    pub api_base: String,

    /// Offset for the activity clock
    pub display_offset: FixedOffset,

    /// Window store; `.json` selects the file store, anything else sqlite
    pub store_path: PathBuf,
}

impl Config {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let check_frequency_minutes = parse_var::<u64, _>(&get, CHECK_FREQUENCY_VAR)?;
        if check_frequency_minutes == Some(0) {
            bail!("{CHECK_FREQUENCY_VAR} must be a positive number of minutes");
        }

        let status_refresh_seconds: u64 =
            parse_var(&get, STATUS_REFRESH_VAR)?.unwrap_or(DEFAULT_STATUS_REFRESH_SECONDS);
        if status_refresh_seconds == 0 {
            bail!("{STATUS_REFRESH_VAR} must be a positive number of seconds");
        }

        let offset_hours: i32 =
            parse_var(&get, DISPLAY_OFFSET_VAR)?.unwrap_or(DEFAULT_DISPLAY_OFFSET_HOURS);

        Ok(Self {
            bearer_token: get(BEARER_TOKEN_VAR),
            check_frequency_minutes,
            status_refresh: Duration::from_secs(status_refresh_seconds),
            query: get(QUERY_VAR).unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            api_base: get(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            display_offset: display_offset(offset_hours)?,
            store_path: get(STORE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(default_store_path),
        })
    }

    pub fn bearer_token(&self) -> Result<&str> {
        self.bearer_token
            .as_deref()
            .with_context(|| format!("Required environment variable {BEARER_TOKEN_VAR} is not set"))
    }

    pub fn check_interval(&self) -> Result<Duration> {
        let minutes = self.check_frequency_minutes.with_context(|| {
            format!("Required environment variable {CHECK_FREQUENCY_VAR} is not set")
        })?;
        let seconds = minutes
            .checked_mul(60)
            .with_context(|| format!("{CHECK_FREQUENCY_VAR} is too large: {minutes} minutes"))?;
        Ok(Duration::from_secs(seconds))
    }
}

fn parse_var<T, G>(get: &G, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("{key} has invalid value {raw:?}: {e}"))
        })
        .transpose()
}

pub fn display_offset(hours: i32) -> Result<FixedOffset> {
    if !(-23..=23).contains(&hours) {
        bail!("display offset must be between -23 and 23 hours, got {hours}");
    }
    FixedOffset::east_opt(hours * 3600).context("invalid display offset")
}

/// `<data dir>/maintwatch/store.sqlite`, or `store.sqlite` in the working
/// directory when the platform has no data dir.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("maintwatch").join("store.sqlite"))
        .unwrap_or_else(|| PathBuf::from("store.sqlite"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.query, DEFAULT_QUERY);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.status_refresh, Duration::from_secs(30));
        assert_eq!(config.display_offset.local_minus_utc(), -7 * 3600);
        assert!(config.store_path.ends_with("store.sqlite"));
        assert!(config.bearer_token().is_err());
        assert!(config.check_interval().is_err());
    }

    #[test]
    fn test_reads_required_values() {
        let config = config_from(&[
            (BEARER_TOKEN_VAR, "abc"),
            (CHECK_FREQUENCY_VAR, "5"),
            (STORE_VAR, "/tmp/window.json"),
            (DISPLAY_OFFSET_VAR, "9"),
        ])
        .unwrap();
        assert_eq!(config.bearer_token().unwrap(), "abc");
        assert_eq!(config.check_interval().unwrap(), Duration::from_secs(300));
        assert_eq!(config.store_path, PathBuf::from("/tmp/window.json"));
        assert_eq!(config.display_offset.local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_missing_token_error_names_variable() {
        let err = config_from(&[]).unwrap().bearer_token().unwrap_err();
        assert!(err.to_string().contains(BEARER_TOKEN_VAR));
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let config = config_from(&[(BEARER_TOKEN_VAR, "  ")]).unwrap();
        assert!(config.bearer_token.is_none());
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(config_from(&[(CHECK_FREQUENCY_VAR, "soon")]).is_err());
        assert!(config_from(&[(CHECK_FREQUENCY_VAR, "0")]).is_err());
        assert!(config_from(&[(STATUS_REFRESH_VAR, "0")]).is_err());
        assert!(config_from(&[(DISPLAY_OFFSET_VAR, "30")]).is_err());
    }

    #[test]
    fn test_huge_check_frequency_is_an_error() {
        let config = config_from(&[(CHECK_FREQUENCY_VAR, &u64::MAX.to_string())]).unwrap();
        let err = config.check_interval().unwrap_err();
        assert!(err.to_string().contains(CHECK_FREQUENCY_VAR));
    }
}
