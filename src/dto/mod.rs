use serde::Serialize;

use crate::models::config::Settings;

/// Serializable view of [`Settings`] safe to log; secrets are reduced to presence flags.
#[derive(Clone, Debug, Serialize)]
pub struct SettingsSummary {
    pub port: String,
    pub db_name: String,
    pub mongo_uri_set: bool,
    pub jwt_secret_key_set: bool,
    pub jwt_expiration_hours: i64,
    pub enable_cache: bool,
    pub redis_addr: String,
    pub redis_password_set: bool,
    pub log_level: String,
    pub log_format: String,
}

impl From<&Settings> for SettingsSummary {
    fn from(settings: &Settings) -> Self {
        Self {
            port: settings.server_port.clone(),
            db_name: settings.db_name.clone(),
            mongo_uri_set: !settings.mongo_uri.is_empty(),
            jwt_secret_key_set: !settings.jwt_secret_key.is_empty(),
            jwt_expiration_hours: settings.jwt_expiration_hours,
            enable_cache: settings.enable_cache,
            redis_addr: settings.redis_addr.clone(),
            redis_password_set: !settings.redis_password.is_empty(),
            log_level: settings.log_level.clone(),
            log_format: settings.log_format.clone(),
        }
    }
}
