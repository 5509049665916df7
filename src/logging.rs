//! Process logger configured from loaded settings.
use std::io::Write;

use env_logger::{Builder, Env};
use log::SetLoggerError;

use crate::domain::LogFormat;
use crate::models::config::Settings;

/// Filter applied when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Filter used when `RUST_LOG` is absent.
pub fn default_filter(settings: &Settings) -> &str {
    match settings.log_level.trim() {
        "" => DEFAULT_LOG_LEVEL,
        level => level,
    }
}

/// Build a logger honoring `RUST_LOG`, then `LOG_LEVEL`, and `LOG_FORMAT`.
pub fn builder(settings: &Settings) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter(settings)));

    if settings.log_format() == LogFormat::Json {
        builder.format(|buf, record| {
            let line = serde_json::json!({
                "timestamp": buf.timestamp().to_string(),
                "level": record.level().as_str(),
                "target": record.target(),
                "message": record.args().to_string(),
            });
            writeln!(buf, "{line}")
        });
    }

    builder
}

/// Install the global logger. Fails if one is already installed.
pub fn init(settings: &Settings) -> Result<(), SetLoggerError> {
    builder(settings).try_init()
}
