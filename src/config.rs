use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.divar.ir/v8/web-search";
pub const DEFAULT_CITY: &str = "karaj";
pub const DEFAULT_CATEGORY: &str = "real-estate";
pub const DEFAULT_USER_AGENT: &str = "Android App/9.8.0 (com.divar; build:9800; Android 12)";
pub const BODY_PREVIEW_CHARS: usize = 1000;

/// Cities the listings site is known to serve. Other slugs are passed through.
pub const KNOWN_CITIES: &[&str] = &["tehran", "karaj"];

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config::from_lookup(|key| env::var(key).ok())
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub city: String,
    pub category: String,
    pub cursor: i64,
    pub user_agent: String,
    /// 0 disables the deadline.
    pub timeout_secs: u64,
    pub body_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config::from_lookup(|_| None)
    }
}

impl Config {
    /// Builds a config from any key/value source. `CONFIG` uses the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        Config {
            base_url: get_or_default(&lookup, "PROBE_BASE_URL", DEFAULT_BASE_URL),
            city: get_or_default(&lookup, "PROBE_CITY", DEFAULT_CITY),
            category: get_or_default(&lookup, "PROBE_CATEGORY", DEFAULT_CATEGORY),
            cursor: parse_or_default(&lookup, "PROBE_CURSOR", 0),
            user_agent: get_or_default(&lookup, "PROBE_USER_AGENT", DEFAULT_USER_AGENT),
            timeout_secs: parse_or_default(&lookup, "PROBE_TIMEOUT_SECS", 0),
            body_limit: parse_or_default(&lookup, "PROBE_BODY_LIMIT", BODY_PREVIEW_CHARS),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

fn get_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring {key}={raw:?}, not a valid number; using {default}");
            default
        }),
        None => default,
    }
}
