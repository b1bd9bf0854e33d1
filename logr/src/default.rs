use std::{fmt, sync::OnceLock};

use crate::Logger;

/// Process-wide logger behind the free functions.
static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the default logger, building it from the environment on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

/// Installs `logger` as the default logger.
///
/// Fails, handing the logger back, once the default has been installed or used.
pub fn init_default(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

pub fn error(message: impl fmt::Display) {
    default_logger().error(message)
}

pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args)
}

pub fn info(message: impl fmt::Display) {
    default_logger().info(message)
}

pub fn infof(args: fmt::Arguments<'_>) {
    default_logger().infof(args)
}

pub fn debug(message: impl fmt::Display) {
    default_logger().debug(message)
}

pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args)
}

pub fn fatal(message: impl fmt::Display) -> ! {
    default_logger().fatal(message)
}

pub fn fatalf(args: fmt::Arguments<'_>) -> ! {
    default_logger().fatalf(args)
}
