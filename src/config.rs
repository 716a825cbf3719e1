use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

use crate::core::services::SessionLimits;

#[derive(Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub session_ttl_secs: u64,
    pub session_sweep_secs: u64,
    pub max_sessions: usize,
    pub max_transactions_per_session: usize,
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            session_ttl_secs: env::var("SESSION_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3600),
            session_sweep_secs: env::var("SESSION_SWEEP_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            max_sessions: env::var("MAX_SESSIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            max_transactions_per_session: env::var("MAX_TRANSACTIONS_PER_SESSION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Interval of the background idle-session sweep, never zero.
    pub fn session_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.session_sweep_secs.max(1))
    }

    pub fn session_limits(&self) -> SessionLimits {
        SessionLimits {
            idle_ttl: Duration::from_secs(self.session_ttl_secs),
            max_sessions: self.max_sessions,
            max_transactions: self.max_transactions_per_session,
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
