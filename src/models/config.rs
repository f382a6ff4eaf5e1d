//! Application configuration structures.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the chunk files live
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client behavior
    #[serde(default)]
    pub http: HttpConfig,

    /// Query matching behavior
    #[serde(default)]
    pub search: SearchConfig,

    /// Result rendering
    #[serde(default)]
    pub display: DisplayConfig,

    /// User-facing message strings
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.source.chunk_count == 0 {
            return Err(AppError::validation("source.chunk_count must be > 0"));
        }
        if self.source.chunk_count > 1000 {
            return Err(AppError::validation(
                "source.chunk_count must be <= 1000 (three-digit chunk names)",
            ));
        }
        if self.source.base_url.trim().is_empty() {
            return Err(AppError::validation("source.base_url is empty"));
        }
        url::Url::parse(&self.source.base_url)?;
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.http.max_concurrent == 0 {
            return Err(AppError::validation("http.max_concurrent must be > 0"));
        }
        if self.display.card_template.trim().is_empty() {
            return Err(AppError::validation("display.card_template is empty"));
        }
        Ok(())
    }
}

/// Chunk location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Base URL the chunk file names are joined onto
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Number of chunks, fetched as `chunk_000.json` .. `chunk_{N-1}.json`
    #[serde(default = "defaults::chunk_count")]
    pub chunk_count: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            chunk_count: defaults::chunk_count(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Maximum chunk fetches in flight
    #[serde(default = "defaults::max_concurrent")]
    pub max_concurrent: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            max_concurrent: defaults::max_concurrent(),
        }
    }
}

/// Query normalization and matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Strict clean, then direct containment OR split CJK/Latin containment.
    /// Checks name, id, pinyin and initials.
    #[default]
    Strict,
    /// Raw split into CJK and remainder; CJK against name or school AND
    /// remainder against pinyin or initials. No id check.
    Loose,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Strict => "strict",
            MatchMode::Loose => "loose",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" | "a" => Ok(MatchMode::Strict),
            "loose" | "b" => Ok(MatchMode::Loose),
            other => Err(AppError::config(format!(
                "unknown match mode '{other}' (expected 'strict' or 'loose')"
            ))),
        }
    }
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Matching policy
    #[serde(default)]
    pub mode: MatchMode,

    /// Delay after the last input before a query runs, in milliseconds
    #[serde(default = "defaults::debounce")]
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            debounce_ms: defaults::debounce(),
        }
    }
}

/// Result rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Template for one result card, see [`crate::models::Record::format`]
    #[serde(default = "defaults::card_template")]
    pub card_template: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            card_template: defaults::card_template(),
        }
    }
}

/// User-facing message strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "defaults::msg_load_failed")]
    pub load_failed: String,
    #[serde(default = "defaults::msg_unknown_school")]
    pub unknown_school: String,
    #[serde(default = "defaults::msg_unknown_year")]
    pub unknown_year: String,
    /// Stats line; `{total}` and `{count}` placeholders
    #[serde(default = "defaults::msg_stats")]
    pub stats: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            load_failed: defaults::msg_load_failed(),
            unknown_school: defaults::msg_unknown_school(),
            unknown_year: defaults::msg_unknown_year(),
            stats: defaults::msg_stats(),
        }
    }
}

impl Messages {
    /// Render the stats line for a loaded total and a match count.
    pub fn format_stats(&self, total: usize, count: usize) -> String {
        self.stats
            .replace("{total}", &total.to_string())
            .replace("{count}", &count.to_string())
    }
}

mod defaults {
    // Source defaults
    pub fn base_url() -> String {
        "https://cdn.jsdelivr.net/gh/kangningyuan/scholarship-query@main/data/".into()
    }
    pub fn chunk_count() -> usize {
        10
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; scholarship-query/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn max_concurrent() -> usize {
        10
    }

    // Search defaults
    pub fn debounce() -> u64 {
        400
    }

    // Display defaults
    pub fn card_template() -> String {
        "{name} [{full_id}]\n    🏫 {school}\n    📅 {year} 年获奖 | 期数：{period}".into()
    }

    // Message defaults
    pub fn msg_load_failed() -> String {
        "数据加载失败，请刷新重试".into()
    }
    pub fn msg_unknown_school() -> String {
        "未知学校".into()
    }
    pub fn msg_unknown_year() -> String {
        "未知年份".into()
    }
    pub fn msg_stats() -> String {
        "共加载 {total} 条记录，找到 {count} 条结果".into()
    }
}
