#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::frontmatter::BlockTimezone;
use crate::domain::model::RunMode;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::{self, Validate};
use chrono::FixedOffset;
use regex::Regex;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://localhost:41184";
/// Joplin caps `limit` at 100 items per page.
pub const MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    pub inspect: bool,
    #[serde(default)]
    pub stop_after_first_tagged: bool,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// `±HH:MM` or `±HHMM`; the system zone is used when unset.
    pub utc_offset: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    MAX_PAGE_SIZE
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_seconds: None,
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            inspect: false,
            stop_after_first_tagged: false,
            page_size: default_page_size(),
            utc_offset: None,
        }
    }
}

impl SyncConfig {
    pub fn run_mode(&self) -> RunMode {
        RunMode {
            inspect: self.run.inspect,
            stop_after_first_tagged: self.run.stop_after_first_tagged,
        }
    }

    pub fn block_timezone(&self) -> Result<BlockTimezone> {
        match &self.run.utc_offset {
            Some(offset) => Ok(BlockTimezone::Fixed(parse_utc_offset(offset)?)),
            None => Ok(BlockTimezone::Local),
        }
    }
}

impl Validate for SyncConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("source.base_url", &self.source.base_url)?;

        let token = validation::validate_required_field("source.token", &self.source.token)?;
        validation::validate_non_empty_string("source.token", token)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validation::validate_range("source.timeout_seconds", timeout, 1, 3600)?;
        }

        validation::validate_range("run.page_size", self.run.page_size, 1, MAX_PAGE_SIZE)?;

        self.block_timezone()?;

        if self.run.stop_after_first_tagged && !self.run.inspect {
            tracing::warn!("⚠️ stop_after_first_tagged has no effect unless inspect is enabled");
        }

        Ok(())
    }
}

/// Parses a numeric UTC offset such as `-08:00`, `+0530` or `+00:00`.
pub fn parse_utc_offset(value: &str) -> Result<FixedOffset> {
    let invalid = |reason: &str| SyncError::InvalidConfigValueError {
        field: "run.utc_offset".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let re = Regex::new(r"^([+-])(\d{2}):?(\d{2})$").map_err(|e| SyncError::ConfigError {
        message: e.to_string(),
    })?;
    let caps = re
        .captures(value.trim())
        .ok_or_else(|| invalid("Expected an offset like +02:00 or -0800"))?;

    let hours: i32 = caps[2].parse().map_err(|_| invalid("Invalid hours"))?;
    let minutes: i32 = caps[3].parse().map_err(|_| invalid("Invalid minutes"))?;
    if minutes >= 60 {
        return Err(invalid("Minutes must be below 60"));
    }

    let seconds = (hours * 3600 + minutes * 60) * if &caps[1] == "-" { -1 } else { 1 };
    FixedOffset::east_opt(seconds).ok_or_else(|| invalid("Offset out of range"))
}
