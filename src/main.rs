//! Loads the MuchToDo settings once and reports the effective configuration.
use std::env;
use std::error::Error;

use muchtodo_config::{Settings, SettingsSummary, load, logging};

fn main() {
    // Settings directory, defaults to the working directory.
    let dir = env::args().nth(1).unwrap_or_else(|| ".".into());

    let settings = match load(&dir) {
        Ok(settings) => settings,
        Err(err) => {
            let _ = logging::init(&Settings::default());
            let mut message = err.to_string();
            let mut source = err.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            log::error!("Error loading settings: {}", message);
            std::process::exit(1);
        }
    };

    if let Err(err) = logging::init(&settings) {
        eprintln!("Error initializing logger: {err}");
        std::process::exit(1);
    }

    match serde_json::to_string(&SettingsSummary::from(&settings)) {
        Ok(summary) => log::info!("Settings loaded from {}: {}", dir, summary),
        Err(err) => log::error!("Error rendering settings summary: {}", err),
    }
}
