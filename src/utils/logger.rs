pub use log::LevelFilter;
use log::{Level, Log, Metadata, Record};
use std::sync::OnceLock;
use text_colorizer::Colorize;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Stdout logger that colorizes by level.
pub struct Logger;

impl Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("{}", record.args());

            match record.level() {
                Level::Info => println!("{message}"),
                Level::Warn => println!("{}", message.yellow()),
                Level::Error => println!("{}", message.red()),
                Level::Debug => println!("{}", message.magenta()),
                Level::Trace => println!("{}", message.blue()),
            }
        }
    }

    fn flush(&self) {}
}

pub fn init_stdout(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| Logger);
    log::set_logger(logger)
        .map(|()| log::set_max_level(level))
        .expect("failed to init logger");
}
