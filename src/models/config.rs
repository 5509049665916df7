//! Settings record resolved at start-up.

use std::time::Duration;

use crate::domain::{DEFAULT_ENABLE_CACHE, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_PORT, LogFormat};

#[derive(Clone, Debug, Eq, PartialEq)]
/// Runtime configuration of the MuchToDo server. Built once, read-only afterwards.
pub struct Settings {
    pub server_port: String,
    pub mongo_uri: String,
    pub db_name: String,
    pub jwt_secret_key: String,
    pub jwt_expiration_hours: i64,
    pub enable_cache: bool,
    pub redis_addr: String,
    pub redis_password: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Settings {
    /// Built-in defaults with every other field at its zero value.
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT.to_string(),
            mongo_uri: String::new(),
            db_name: String::new(),
            jwt_secret_key: String::new(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            enable_cache: DEFAULT_ENABLE_CACHE,
            redis_addr: String::new(),
            redis_password: String::new(),
            log_level: String::new(),
            log_format: String::new(),
        }
    }
}

impl Settings {
    /// Token lifetime; negative hour counts clamp to zero.
    pub fn token_lifetime(&self) -> Duration {
        let hours = u64::try_from(self.jwt_expiration_hours).unwrap_or(0);
        Duration::from_secs(hours.saturating_mul(3600))
    }

    /// Address the HTTP listener binds to.
    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.server_port)
    }

    pub fn log_format(&self) -> LogFormat {
        self.log_format.parse().unwrap_or_default()
    }
}
