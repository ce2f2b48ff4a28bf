#[cfg(test)] mod test_logger;
