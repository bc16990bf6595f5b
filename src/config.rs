//! Configuration module

use std::env;
use std::time::Duration;

use crate::prediction::WeightProfile;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Seconds between live dashboard pushes
    pub push_interval_secs: u64,

    /// Simulated assistant "thinking" delay in milliseconds
    pub ask_delay_ms: u64,

    /// Weight preset used for generated predictions
    pub weight_profile: WeightProfile,

    /// Compiled front end, served in production
    pub static_dir: String,

    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            environment: "development".to_string(),
            push_interval_secs: 30,
            ask_delay_ms: 500,
            weight_profile: WeightProfile::default(),
            static_dir: "client/build".to_string(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            push_interval_secs: env::var("PUSH_INTERVAL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|s| *s > 0)
                .unwrap_or(defaults.push_interval_secs),

            ask_delay_ms: env::var("ASK_DELAY_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(defaults.ask_delay_ms),

            weight_profile: env::var("WEIGHT_PROFILE")
                .ok()
                .and_then(|p| parse_weight_profile(&p))
                .unwrap_or(defaults.weight_profile),

            static_dir: env::var("STATIC_DIR")
                .unwrap_or(defaults.static_dir),

            log_json: Self::log_json_from_env().unwrap_or(defaults.log_json),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// `LOG_FORMAT=json`, read on its own so logging can start before the
    /// rest of the configuration is parsed
    pub fn log_json_from_env() -> Option<bool> {
        env::var("LOG_FORMAT")
            .ok()
            .map(|f| f.eq_ignore_ascii_case("json"))
    }

    pub fn push_interval(&self) -> Duration {
        Duration::from_secs(self.push_interval_secs)
    }

    pub fn ask_delay(&self) -> Duration {
        Duration::from_millis(self.ask_delay_ms)
    }
}

/// Unknown profiles fall back to the default, with a warning.
fn parse_weight_profile(value: &str) -> Option<WeightProfile> {
    match value.parse() {
        Ok(profile) => Some(profile),
        Err(e) => {
            tracing::warn!(value, "Ignoring WEIGHT_PROFILE: {}", e);
            None
        }
    }
}
