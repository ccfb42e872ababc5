//! Logger setup with fern. Log lines go to stderr so command output on
//! stdout stays clean.

use crate::error::{CliError, Result};

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};

pub fn initialize(log_level: log::LevelFilter, colored: bool) -> Result<()> {
    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
            ))
        })
    } else {
        // Plain output for non-TTY (cron, systemd)
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
    };

    dispatch
        .level(log_level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CliError::Logger {
            message: e.to_string(),
        })
}
