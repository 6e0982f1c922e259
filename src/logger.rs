use log::{LevelFilter, Metadata, Record, SetLoggerError};

struct Logger;

/// Installs the stderr logger with the given maximum level.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    static LOGGER: Logger = Logger;
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("[cell][{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}
