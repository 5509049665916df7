//! Strongly-typed building blocks for settings resolution.
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

/// Name of the optional key/value file looked up in the settings directory.
pub const ENV_FILE_NAME: &str = ".env";

pub const DEFAULT_PORT: &str = "8080";
pub const DEFAULT_ENABLE_CACHE: bool = false;
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 72;

/// Recognized setting keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SettingKey {
    Port,
    MongoUri,
    DbName,
    JwtSecretKey,
    JwtExpirationHours,
    EnableCache,
    RedisAddr,
    RedisPassword,
    LogLevel,
    LogFormat,
}

/// Built-in fallback for a key.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefaultValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl SettingKey {
    pub const ALL: [SettingKey; 10] = [
        SettingKey::Port,
        SettingKey::MongoUri,
        SettingKey::DbName,
        SettingKey::JwtSecretKey,
        SettingKey::JwtExpirationHours,
        SettingKey::EnableCache,
        SettingKey::RedisAddr,
        SettingKey::RedisPassword,
        SettingKey::LogLevel,
        SettingKey::LogFormat,
    ];

    /// Exact environment variable (and file key) name.
    pub fn env_name(self) -> &'static str {
        match self {
            SettingKey::Port => "PORT",
            SettingKey::MongoUri => "MONGO_URI",
            SettingKey::DbName => "DB_NAME",
            SettingKey::JwtSecretKey => "JWT_SECRET_KEY",
            SettingKey::JwtExpirationHours => "JWT_EXPIRATION_HOURS",
            SettingKey::EnableCache => "ENABLE_CACHE",
            SettingKey::RedisAddr => "REDIS_ADDR",
            SettingKey::RedisPassword => "REDIS_PASSWORD",
            SettingKey::LogLevel => "LOG_LEVEL",
            SettingKey::LogFormat => "LOG_FORMAT",
        }
    }

    /// Key used inside the merge registry.
    pub fn config_key(self) -> &'static str {
        match self {
            SettingKey::Port => "port",
            SettingKey::MongoUri => "mongo_uri",
            SettingKey::DbName => "db_name",
            SettingKey::JwtSecretKey => "jwt_secret_key",
            SettingKey::JwtExpirationHours => "jwt_expiration_hours",
            SettingKey::EnableCache => "enable_cache",
            SettingKey::RedisAddr => "redis_addr",
            SettingKey::RedisPassword => "redis_password",
            SettingKey::LogLevel => "log_level",
            SettingKey::LogFormat => "log_format",
        }
    }

    pub fn default_value(self) -> Option<DefaultValue> {
        match self {
            SettingKey::Port => Some(DefaultValue::Str(DEFAULT_PORT)),
            SettingKey::JwtExpirationHours => Some(DefaultValue::Int(DEFAULT_JWT_EXPIRATION_HOURS)),
            SettingKey::EnableCache => Some(DefaultValue::Bool(DEFAULT_ENABLE_CACHE)),
            _ => None,
        }
    }

    /// Look up a key by its environment name. Matching is exact.
    pub fn from_env_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.env_name() == name)
    }

    /// Look up a key as written in the settings file, ignoring ASCII case.
    pub fn from_file_key(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.env_name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// Directory searched for the settings file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettingsDir(PathBuf);

impl SettingsDir {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Path of the env file inside this directory.
    pub fn env_file(&self) -> PathBuf {
        self.0.join(ENV_FILE_NAME)
    }
}

impl From<PathBuf> for SettingsDir {
    fn from(value: PathBuf) -> Self {
        Self::new(value)
    }
}

impl From<&Path> for SettingsDir {
    fn from(value: &Path) -> Self {
        Self::new(value.to_path_buf())
    }
}

impl From<&str> for SettingsDir {
    fn from(value: &str) -> Self {
        Self::new(PathBuf::from(value))
    }
}

/// Output layout for log records.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Ok(LogFormat::Text)
        }
    }
}

/// Parse a base-10 integer. Empty input is zero.
pub fn parse_int(raw: &str) -> Result<i64, TypeConstraintError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| TypeConstraintError::InvalidInteger)
}

/// Parse a boolean flag (`1`, `t`, `true`, `0`, `f`, `false`, any case). Empty input is false.
pub fn parse_bool(raw: &str) -> Result<bool, TypeConstraintError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(false);
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(TypeConstraintError::InvalidBoolean),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_env_names() {
        for key in SettingKey::ALL {
            assert_eq!(SettingKey::from_env_name(key.env_name()), Some(key));
            assert_eq!(key.config_key(), key.env_name().to_ascii_lowercase());
        }
        assert_eq!(SettingKey::from_env_name("port"), None);
        assert_eq!(SettingKey::from_env_name("HOME"), None);
        assert_eq!(SettingKey::from_file_key("port"), Some(SettingKey::Port));
        assert_eq!(SettingKey::from_file_key("Mongo_Uri"), Some(SettingKey::MongoUri));
    }

    #[test]
    fn only_three_keys_have_defaults() {
        let with_defaults: Vec<_> = SettingKey::ALL
            .into_iter()
            .filter(|key| key.default_value().is_some())
            .collect();

        assert_eq!(
            with_defaults,
            vec![
                SettingKey::Port,
                SettingKey::JwtExpirationHours,
                SettingKey::EnableCache
            ]
        );
    }

    #[test]
    fn settings_dir_resolves_env_file() {
        let dir = SettingsDir::from("config");
        assert_eq!(dir.env_file(), PathBuf::from("config/.env"));
    }

    #[test]
    fn log_format_parses_json_case_insensitively() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!(" JSON ".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("".parse::<LogFormat>().unwrap(), LogFormat::Text);
    }

    #[test]
    fn parse_int_accepts_trimmed_and_empty() {
        assert_eq!(parse_int(" 24 ").unwrap(), 24);
        assert_eq!(parse_int("").unwrap(), 0);
        assert_eq!(parse_int("-3").unwrap(), -3);
        assert!(parse_int("abc").is_err());
        assert!(parse_int("1.5").is_err());
    }

    #[test]
    fn parse_bool_vocabulary() {
        for raw in ["1", "t", "T", "true", "TRUE", "True"] {
            assert!(parse_bool(raw).unwrap(), "{raw}");
        }
        for raw in ["0", "f", "F", "false", "FALSE", ""] {
            assert!(!parse_bool(raw).unwrap(), "{raw}");
        }
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("enabled").is_err());
    }
}

#[derive(Debug, Error)]
pub enum TypeConstraintError {
    #[error("invalid integer")]
    InvalidInteger,
    #[error("invalid boolean")]
    InvalidBoolean,
}
