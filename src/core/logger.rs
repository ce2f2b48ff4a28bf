use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use once_cell::sync::Lazy;
use log::{
    Log,
    LevelFilter,
    Metadata,
    Record
};

static MY_LOGGER: Lazy<MyLogger> = Lazy::new(|| MyLogger {
    active: AtomicBool::new(true),
    console: AtomicBool::new(true),
    file: Mutex::new(None),
});

struct MyLogger {
    active: AtomicBool,
    console: AtomicBool,
    file: Mutex<Option<File>>,
}

impl Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.active.load(Ordering::Relaxed) &&
            metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if self.console.load(Ordering::Relaxed) {
            println!("{}", line);
        }

        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = writeln!(fp, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
        if let Ok(mut guard) = self.file.lock() {
            if let Some(fp) = guard.as_mut() {
                _ = fp.flush();
            }
        }
    }
}

/// Installs the process-wide logger. Calling it again only swaps the level
/// and the log file, since `log` accepts a single logger per process.
pub fn setup(level: LevelFilter, file: Option<&str>) {
    let logger: &'static MyLogger = &MY_LOGGER;
    _ = log::set_logger(logger);
    log::set_max_level(level);

    logger.active.store(true, Ordering::Relaxed);
    logger.console.store(true, Ordering::Relaxed);

    let fp = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Failed to open log file {path} with error: {e}"))
            .ok()
    });

    if let Ok(mut guard) = logger.file.lock() {
        *guard = fp;
    }
}

pub fn revert_console_output() {
    MY_LOGGER.console.store(false, Ordering::Relaxed);
}

pub fn teardown() {
    log::logger().flush();
    MY_LOGGER.active.store(false, Ordering::Relaxed);
    if let Ok(mut guard) = MY_LOGGER.file.lock() {
        *guard = None;
    }
}
