//! Application configuration structs
//!
//! Loads configuration from a `.env` file and environment variables.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;

use highlight_core::Snowflake;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub starboard: BoardSettings,
    pub evilboard: BoardSettings,
    pub eligibility: EligibilityConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Platform REST API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    /// Sent verbatim as the `Authorization` header when present
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,
}

/// Display and trigger settings for one highlight board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSettings {
    /// Stable key of the board
    pub name: String,
    /// Storage table holding the board's records
    pub table: String,
    /// Reaction emoji that feeds this board
    pub emoji: String,
    /// Minimum reaction count for a first post
    pub threshold: i64,
    /// Embed colours; one is picked per message by hashing its ID
    pub colors: Vec<u32>,
    /// Channel the mirrors are posted to
    pub channel_id: Snowflake,
}

/// Channels excluded from highlighting in addition to the boards' own channels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EligibilityConfig {
    pub denied_channel_ids: HashSet<Snowflake>,
}

/// Built-in defaults for a board, overridable per field
struct BoardDefaults {
    name: &'static str,
    prefix: &'static str,
    emoji: &'static str,
    threshold: i64,
    colors: &'static [u32],
}

const STARBOARD_DEFAULTS: BoardDefaults = BoardDefaults {
    name: "starboard",
    prefix: "STARBOARD",
    emoji: "🍡",
    threshold: 7,
    colors: &[0x00fc_b1e3, 0x00fe_d983, 0x00a6_d387],
};

const EVILBOARD_DEFAULTS: BoardDefaults = BoardDefaults {
    name: "evilboard",
    prefix: "EVILBOARD",
    emoji: "🍢",
    threshold: 7,
    colors: &[0x00cc_d6dd, 0x00d9_9e82, 0x0066_757f],
};

// Default value functions
fn default_app_name() -> String {
    "highlight-boards".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_api_base_url() -> String {
    "https://discord.com/api/v10".to_string()
}

fn default_api_timeout_secs() -> u64 {
    15
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            database: DatabaseConfig {
                url: var("DATABASE_URL")
                    .ok_or_else(|| ConfigError::MissingVar("DATABASE_URL".to_string()))?,
                max_connections: parse_or(&var, "DATABASE_MAX_CONNECTIONS", default_max_connections)?,
                min_connections: parse_or(&var, "DATABASE_MIN_CONNECTIONS", default_min_connections)?,
            },
            api: ApiConfig {
                base_url: var("API_BASE_URL")
                    .map(|url| url.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_api_base_url),
                token: var("API_TOKEN"),
                timeout_secs: parse_or(&var, "API_TIMEOUT_SECS", default_api_timeout_secs)?,
            },
            starboard: BoardSettings::from_lookup(&var, &STARBOARD_DEFAULTS)?,
            evilboard: BoardSettings::from_lookup(&var, &EVILBOARD_DEFAULTS)?,
            eligibility: EligibilityConfig {
                denied_channel_ids: var("DENIED_CHANNEL_IDS")
                    .map(|raw| parse_snowflake_list("DENIED_CHANNEL_IDS", &raw))
                    .transpose()?
                    .unwrap_or_default(),
            },
        })
    }

    /// Both boards, in fan-out order
    #[must_use]
    pub fn boards(&self) -> [&BoardSettings; 2] {
        [&self.starboard, &self.evilboard]
    }
}

impl BoardSettings {
    fn from_lookup<F>(var: &F, defaults: &BoardDefaults) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let key = |field: &str| format!("{}_{field}", defaults.prefix);

        let channel_key = key("CHANNEL_ID");
        let channel_id = var(&channel_key).ok_or_else(|| ConfigError::MissingVar(channel_key.clone()))?;
        let channel_id = Snowflake::parse(&channel_id)
            .map_err(|_| ConfigError::InvalidValue(channel_key, channel_id))?;

        let threshold_key = key("THRESHOLD");
        let threshold = match var(&threshold_key) {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(value) if value >= 1 => value,
                _ => return Err(ConfigError::InvalidValue(threshold_key, raw)),
            },
            None => defaults.threshold,
        };

        let colors_key = key("COLORS");
        let colors = match var(&colors_key) {
            Some(raw) => parse_colors(&colors_key, &raw)?,
            None => defaults.colors.to_vec(),
        };

        Ok(Self {
            name: defaults.name.to_string(),
            table: var(&key("TABLE")).unwrap_or_else(|| defaults.name.to_string()),
            emoji: var(&key("EMOJI")).unwrap_or_else(|| defaults.emoji.to_string()),
            threshold,
            colors,
            channel_id,
        })
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string(), raw)),
        None => Ok(default()),
    }
}

/// Parse `fcb1e3,#fed983,0xa6d387` into RGB values
fn parse_colors(key: &str, raw: &str) -> Result<Vec<u32>, ConfigError> {
    let colors = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let hex = s.trim_start_matches('#').trim_start_matches("0x");
            u32::from_str_radix(hex, 16)
                .ok()
                .filter(|value| *value <= 0x00ff_ffff)
                .ok_or_else(|| ConfigError::InvalidValue(key.to_string(), raw.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if colors.is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string(), raw.to_string()));
    }
    Ok(colors)
}

fn parse_snowflake_list(key: &str, raw: &str) -> Result<HashSet<Snowflake>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            Snowflake::parse(s).map_err(|_| ConfigError::InvalidValue(key.to_string(), s.to_string()))
        })
        .collect()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}
