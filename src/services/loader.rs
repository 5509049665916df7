use std::collections::HashMap;
use std::path::PathBuf;

use config::{Config, ConfigError};

use crate::domain::{DefaultValue, SettingKey, SettingsDir, parse_bool, parse_int};
use crate::models::config::Settings;
use crate::services::env_file::EnvFileSource;
use crate::services::{LoadError, LoadResult};

/// Load settings from `<dir>/.env` and the process environment.
pub fn load(dir: impl Into<PathBuf>) -> LoadResult<Settings> {
    SettingsLoader::new(dir).load()
}

/// Resolves [`Settings`] with precedence environment > file > built-in default.
///
/// Each call to [`SettingsLoader::load`] builds its own merge registry, so a loader
/// can be reused and several loaders can run side by side.
#[derive(Clone, Debug)]
pub struct SettingsLoader {
    dir: SettingsDir,
    env: Option<HashMap<String, String>>,
}

impl SettingsLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: SettingsDir::new(dir.into()),
            env: None,
        }
    }

    /// Read environment values from `vars` instead of the process environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn dir(&self) -> &SettingsDir {
        &self.dir
    }

    /// Empty values count as unset.
    fn env_var(&self, key: SettingKey) -> Option<String> {
        let value = match &self.env {
            Some(vars) => vars.get(key.env_name()).cloned(),
            None => std::env::var(key.env_name()).ok(),
        };
        value.filter(|v| !v.is_empty())
    }

    pub fn load(&self) -> LoadResult<Settings> {
        let mut builder = Config::builder();
        for key in SettingKey::ALL {
            builder = match key.default_value() {
                Some(DefaultValue::Str(value)) => builder.set_default(key.config_key(), value)?,
                Some(DefaultValue::Int(value)) => builder.set_default(key.config_key(), value)?,
                Some(DefaultValue::Bool(value)) => builder.set_default(key.config_key(), value)?,
                None => builder,
            };
        }

        let env_file = self.dir.env_file();
        match EnvFileSource::read(&env_file)? {
            Some(file) => {
                log::debug!("Read {} setting(s) from {}", file.len(), env_file.display());
                builder = builder.add_source(file);
            }
            None => log::debug!(
                "No settings file at {}, using defaults and environment",
                env_file.display()
            ),
        }

        for key in SettingKey::ALL {
            builder = builder.set_override_option(key.config_key(), self.env_var(key))?;
        }

        let merged = builder.build()?;
        decode(&merged)
    }
}

fn decode(merged: &Config) -> LoadResult<Settings> {
    let mut settings = Settings {
        server_port: string_field(merged, SettingKey::Port)?,
        mongo_uri: string_field(merged, SettingKey::MongoUri)?,
        db_name: string_field(merged, SettingKey::DbName)?,
        jwt_secret_key: string_field(merged, SettingKey::JwtSecretKey)?,
        jwt_expiration_hours: int_field(merged, SettingKey::JwtExpirationHours)?,
        enable_cache: bool_field(merged, SettingKey::EnableCache)?,
        redis_addr: string_field(merged, SettingKey::RedisAddr)?,
        redis_password: string_field(merged, SettingKey::RedisPassword)?,
        log_level: string_field(merged, SettingKey::LogLevel)?,
        log_format: string_field(merged, SettingKey::LogFormat)?,
    };

    // env files often leave the quotes of a URI in place
    settings.mongo_uri = settings.mongo_uri.trim_matches('"').to_string();

    Ok(settings)
}

fn raw_field(merged: &Config, key: SettingKey) -> LoadResult<Option<String>> {
    match merged.get_string(key.config_key()) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(err) => Err(LoadError::Merge(err)),
    }
}

fn string_field(merged: &Config, key: SettingKey) -> LoadResult<String> {
    Ok(raw_field(merged, key)?.unwrap_or_default())
}

fn int_field(merged: &Config, key: SettingKey) -> LoadResult<i64> {
    match raw_field(merged, key)? {
        Some(raw) => parse_int(&raw).map_err(|_| invalid_field(key, raw, "an integer")),
        None => Ok(0),
    }
}

fn bool_field(merged: &Config, key: SettingKey) -> LoadResult<bool> {
    match raw_field(merged, key)? {
        Some(raw) => parse_bool(&raw).map_err(|_| invalid_field(key, raw, "a boolean")),
        None => Ok(false),
    }
}

fn invalid_field(key: SettingKey, value: String, expected: &'static str) -> LoadError {
    LoadError::InvalidField {
        key: key.env_name(),
        value,
        expected,
    }
}
