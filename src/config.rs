// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Number of entries shown in `allPerformers`, and the most `LEADERBOARD_SIZE`
/// may ask for.
pub const DEFAULT_LEADERBOARD_SIZE: usize = 9;

/// Overall feedback score above which a talent is "Outstanding".
pub const OUTSTANDING_THRESHOLD: f64 = 8.0;

/// Overall feedback score below which a talent is "Average".
pub const AVERAGE_THRESHOLD: f64 = 5.0;

/// Feedback ratios are scaled onto a 0..=10 range.
pub const FEEDBACK_SCALE: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub rust_log: String,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub leaderboard_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set");

        let jwt_secret = env::var("JWT_SECRET")
            .expect("JWT_SECRET must be set");

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let leaderboard_size = leaderboard_size(env::var("LEADERBOARD_SIZE").ok().as_deref());

        Self {
            database_url,
            jwt_secret,
            rust_log,
            bind_addr,
            db_max_connections,
            leaderboard_size,
        }
    }
}

/// Parses `LEADERBOARD_SIZE`. Unset, unparsable or zero falls back to the
/// default, and larger values are capped at it.
pub fn leaderboard_size(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .map_or(DEFAULT_LEADERBOARD_SIZE, |n| n.min(DEFAULT_LEADERBOARD_SIZE))
}
