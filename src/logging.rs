use std::fs::{self, OpenOptions};

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::config::Config;
use crate::exec::Outcome;

/// Route the `log` facade to the configured log file.
/// Best-effort: failures are silently ignored (logging must never block the shell).
pub fn init(config: &Config) {
    let Some(path) = config.log_file_path() else {
        return;
    };
    let level = config
        .settings
        .log_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Warn);
    if level == LevelFilter::Off {
        return;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = WriteLogger::init(level, log_config, file);
}

/// Record how a line ended.
pub fn log_outcome(line: &str, outcome: &Outcome) {
    let line_truncated: String = line.chars().take(200).collect();
    match &outcome.error {
        Some(e) => log::info!(
            "{}\t{}\t{}\t{}",
            outcome.kind.as_str(),
            outcome.exit_code,
            line_truncated,
            e
        ),
        None => log::info!(
            "{}\t{}\t{}",
            outcome.kind.as_str(),
            outcome.exit_code,
            line_truncated
        ),
    }
}
