//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_IDLE_THRESHOLD_SECS: u64 = 60;
const DEFAULT_IDLE_POLL_INTERVAL_MS: u64 = 1000;

/// Tunables for the dashboard shell.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Inactivity window after which a non-kept session is logged out.
    pub idle_threshold: Duration,
    /// How often the watchdog re-checks the idle clock.
    pub idle_poll_interval: Duration,
    /// Directory holding the persisted client state file.
    pub state_dir: PathBuf,
    /// Optional real backend; unmatched mock requests bypass to it.
    pub upstream_api_url: Option<String>,
}

impl AppConfig {
    /// Load from `PULSEBOARD_*` variables, with defaults matching the stock
    /// dashboard (60 s threshold, 1 s poll).
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            idle_threshold: Duration::from_secs(env_parse("PULSEBOARD_IDLE_THRESHOLD_SECS", DEFAULT_IDLE_THRESHOLD_SECS)),
            idle_poll_interval: Duration::from_millis(env_parse(
                "PULSEBOARD_IDLE_POLL_INTERVAL_MS",
                DEFAULT_IDLE_POLL_INTERVAL_MS,
            )),
            state_dir: state_dir_from_env(),
            upstream_api_url: std::env::var("PULSEBOARD_API_URL").ok(),
        }
    }
}

fn state_dir_from_env() -> PathBuf {
    if let Ok(dir) = std::env::var("PULSEBOARD_STATE_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .map(|d| d.join("pulseboard"))
        .unwrap_or_else(|| PathBuf::from(".pulseboard"))
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
