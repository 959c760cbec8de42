use std::io;

use log::{Log, Metadata, Record, LevelFilter, SetLoggerError};
use slog::{Drain, Level, Logger};


struct SimpleLogger;


impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}


static LOGGER: SimpleLogger = SimpleLogger;


/// Installs the backend for `log` records
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info });
    Ok(())
}


/// Builds the structured root logger. Output goes to stderr, leaving stdout for results
pub fn root(verbose: bool) -> Logger {
    let decorator = slog_term::PlainSyncDecorator::new(io::stderr());
    let drain = slog_term::FullFormat::new(decorator).build();
    let drain = drain.filter_level(if verbose { Level::Debug } else { Level::Info }).fuse();

    Logger::root(drain, o!("cmd" => "expand-query"))
}
