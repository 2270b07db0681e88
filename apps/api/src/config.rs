use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Simulated latency of the catalog recommendation generator.
    pub generation_delay: Duration,
    /// Upstream endpoint the chat relay forwards `{message}` bodies to.
    pub chat_endpoint_url: String,
    pub chat_timeout: Duration,
    /// Assessment sessions and chat threads older than this are dropped.
    pub session_ttl: Duration,
    /// How often expired sessions are swept.
    pub session_sweep_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            generation_delay: Duration::from_millis(
                env_or("GENERATION_DELAY_MS", "2000")
                    .parse::<u64>()
                    .context("GENERATION_DELAY_MS must be a non-negative integer")?,
            ),
            chat_endpoint_url: env_or("CHAT_ENDPOINT_URL", "http://localhost:3000/api/chat"),
            chat_timeout: Duration::from_secs(
                env_or("CHAT_TIMEOUT_SECS", "30")
                    .parse::<u64>()
                    .context("CHAT_TIMEOUT_SECS must be a non-negative integer")?,
            ),
            session_ttl: Duration::from_secs(
                env_or("SESSION_TTL_SECS", "86400")
                    .parse::<u64>()
                    .context("SESSION_TTL_SECS must be a non-negative integer")?,
            ),
            session_sweep_interval: Duration::from_secs(
                env_or("SESSION_SWEEP_SECS", "300")
                    .parse::<u64>()
                    .context("SESSION_SWEEP_SECS must be a positive integer")?
                    .max(1),
            ),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
