use std::io::Write;

use chrono::Local;
use log::{Level, LevelFilter};

use crate::Args;

/// Leveled, colored console output: `HH:MM INFO message`
pub fn init_logger(args: &Args) {
    let level = if args.silent {
        LevelFilter::Off
    } else if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{} {style}{}{style:#} {}",
                Local::now().format("%H:%M"),
                level_tag(record.level()),
                record.args()
            )
        })
        .init();
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERRR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBG",
        Level::Trace => "TRCE",
    }
}
