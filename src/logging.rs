//! Logger setup.
//!
//! The game owns the terminal in raw mode, so stderr logging is kept to
//! errors unless `RUST_LOG` says otherwise. Setting `TUI_LIFE_LOG_PATH`
//! sends logs to that file instead, at `debug` by default.

use std::fs::OpenOptions;

use env_logger::{Builder, Env, Target};

pub const LOG_PATH_ENV: &str = "TUI_LIFE_LOG_PATH";

pub fn init() {
    let log_path = std::env::var(LOG_PATH_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut builder = match log_path {
        Some(path) => match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => {
                let mut builder = Builder::from_env(Env::default().default_filter_or("debug"));
                builder.target(Target::Pipe(Box::new(file)));
                builder
            }
            Err(e) => {
                eprintln!("[Logging] cannot open {}: {}", path, e);
                Builder::from_env(Env::default().default_filter_or("error"))
            }
        },
        None => Builder::from_env(Env::default().default_filter_or("error")),
    };

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.format_timestamp_millis().try_init();
}
