use log::{LevelFilter, Log, Metadata, Record};
use serde::Serialize;

pub fn print_info(message: &str) {
    println!("[casekit][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[casekit][ERROR]: {message}");
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    println!("{text}");
}

pub fn print_lines<S: AsRef<str>>(lines: &[S]) {
    for line in lines {
        println!("{}", line.as_ref());
    }
}

/// Writes log records to stderr with the same prefix style as
/// [`print_error`].
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[casekit][{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbose: u8) {
    let level = level_for_verbosity(verbose);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
    log::debug!("log level {level}");
}
