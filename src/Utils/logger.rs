use crate::Utils::config::ConfigError;
use chrono::Local;
use log::{info, warn};
use simplelog::*;
use std::fs::File;

/// Maps a level name to a filter; `None` means the name is unknown.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" | "none" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs the global logger: terminal output and, if `log_to_file` is set,
/// a copy in log_<date_and_time>.txt in the working directory.
///
/// The library itself only emits records through the `log` macros; installing
/// a logger is up to the binary. Calling this a second time keeps the first logger.
pub fn init_logger(level: &str, log_to_file: bool) -> Result<(), ConfigError> {
    let log_option = parse_level(level).ok_or_else(|| ConfigError::InvalidValue {
        key: "logging.level".to_string(),
        message: format!(
            "loglevel must be off, error, warn, info, debug or trace, got '{}'",
            level
        ),
    })?;
    if log_option == LevelFilter::Off {
        return Ok(());
    }

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        log_option,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if log_to_file {
        let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let name = format!("log_{}.txt", date_and_time);
        let file = File::create(&name)?;
        loggers.push(WriteLogger::new(log_option, Config::default(), file));
    }

    match CombinedLogger::init(loggers) {
        Ok(()) => info!("logger started with loglevel: {}", log_option),
        Err(_) => warn!("logger already initialized, keeping the existing one"),
    }
    Ok(())
}
