//! Server configuration.
//!
//! Every option can be given on the command line or through the environment
//! variable named in its `env` attribute.

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::usecase::{DEFAULT_EXERCISES_PER_SLOT, RetryPolicy};

#[derive(Parser, Debug, Clone)]
#[command(name = "fitlink-server")]
#[command(about = "WebRTC signaling relay and fitness plan aggregator", long_about = None)]
pub struct Config {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "FITLINK_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "FITLINK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "FITLINK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Maximum peers per room (0 = unlimited)
    #[arg(long, env = "FITLINK_ROOM_CAPACITY", default_value_t = 2)]
    pub room_capacity: usize,

    /// Secret used to verify HS256 bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// JSON file with `[{"id": ..., "goal": ...}]` records seeding the user directory
    #[arg(long, env = "FITLINK_USERS_FILE")]
    pub users_file: Option<PathBuf>,

    #[arg(long, env = "EXERCISE_DB_URL", default_value = "https://exercisedb.p.rapidapi.com")]
    pub exercise_db_url: String,

    #[arg(long, env = "RAPIDAPI_KEY", default_value = "", hide_env_values = true)]
    pub exercise_db_key: String,

    #[arg(long, env = "RAPIDAPI_HOST", default_value = "exercisedb.p.rapidapi.com")]
    pub exercise_db_host: String,

    #[arg(long, env = "SPOONACULAR_URL", default_value = "https://api.spoonacular.com")]
    pub spoonacular_url: String,

    #[arg(long, env = "SPOONACULAR_API_KEY", default_value = "", hide_env_values = true)]
    pub spoonacular_key: String,

    #[arg(long, env = "YOUTUBE_URL", default_value = "https://www.googleapis.com")]
    pub youtube_url: String,

    #[arg(long, env = "YOUTUBE_API_KEY", default_value = "", hide_env_values = true)]
    pub youtube_key: String,

    #[arg(long, env = "NUTRITIONIX_URL", default_value = "https://trackapi.nutritionix.com")]
    pub nutritionix_url: String,

    #[arg(long, env = "NUTRITIONIX_APP_ID", default_value = "", hide_env_values = true)]
    pub nutritionix_app_id: String,

    #[arg(long, env = "NUTRITIONIX_APP_KEY", default_value = "", hide_env_values = true)]
    pub nutritionix_app_key: String,

    /// Total attempts per upstream lookup, including the first one
    #[arg(long, env = "FITLINK_RETRY_ATTEMPTS", default_value_t = RetryPolicy::DEFAULT_MAX_ATTEMPTS)]
    pub retry_attempts: u32,

    /// Backoff after the first rate-limited attempt; doubles on each retry
    #[arg(long, env = "FITLINK_RETRY_BASE_DELAY_MS", default_value_t = 500)]
    pub retry_base_delay_ms: u64,

    /// Timeout of a single upstream attempt
    #[arg(long, env = "FITLINK_ATTEMPT_TIMEOUT_MS", default_value_t = 10_000)]
    pub attempt_timeout_ms: u64,

    #[arg(long, env = "FITLINK_EXERCISES_PER_SLOT", default_value_t = DEFAULT_EXERCISES_PER_SLOT)]
    pub exercises_per_slot: usize,
}

impl Config {
    /// `None` means rooms are unbounded
    pub fn room_capacity(&self) -> Option<usize> {
        (self.room_capacity > 0).then_some(self.room_capacity)
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.retry_attempts,
            Duration::from_millis(self.retry_base_delay_ms),
            self.attempt_timeout(),
        )
    }

    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }
}
