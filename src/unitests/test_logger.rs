use std::fs;
use log::{info, debug, error, Level, LevelFilter, Metadata};
use serial_test::serial;
use crate::core::logger;

fn enabled(level: Level) -> bool {
    let metadata = Metadata::builder()
        .level(level)
        .target("contacts")
        .build();
    log::logger().enabled(&metadata)
}

#[test]
#[serial]
fn test_logger() {
    logger::setup(LevelFilter::Info, None);
    assert_eq!(log::max_level(), LevelFilter::Info);
    assert!(enabled(Level::Error));
    assert!(enabled(Level::Info));
    assert!(!enabled(Level::Debug));
    info!("info: testing....");
    error!("error: testing...");

    logger::teardown();
    assert!(!enabled(Level::Error));
}

#[test]
#[serial]
fn test_logger_disable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("disable.log");

    logger::setup(LevelFilter::Debug, path.to_str());
    logger::revert_console_output();
    debug!("still reaches the file");
    logger::teardown();
    assert!(!enabled(Level::Error));
    info!("dropped after teardown");

    let data = fs::read_to_string(&path).unwrap();
    assert!(data.contains("[DEBUG] still reaches the file"));
    assert!(!data.contains("dropped after teardown"));

    // A new setup re-activates the logger with the new level.
    logger::setup(LevelFilter::Warn, None);
    assert!(enabled(Level::Warn));
    assert!(!enabled(Level::Info));
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.log");
    let path_str = path.to_str().unwrap();

    logger::setup(log::LevelFilter::Info, Some(path_str));
    logger::revert_console_output();
    info!("written to file");
    debug!("filtered out");
    logger::teardown();

    let data = fs::read_to_string(&path).unwrap();
    assert!(data.contains("[INFO] written to file"));
    assert!(!data.contains("filtered out"));
}
