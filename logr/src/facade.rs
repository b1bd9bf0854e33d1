use log::{Log, Metadata, Record, SetLoggerError};
use logr_core::Level;

use crate::default_logger;

/// Routes `log` crate records into the default logger.
struct LogrFacade;

impl Log for LogrFacade {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Level::from(metadata.level()).enabled(default_logger().level())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            default_logger().log(Level::from(record.level()), record.args());
        }
    }

    fn flush(&self) {
        default_logger().flush();
    }
}

/// Installs the default logger as the `log` crate backend.
///
/// Warn records are written at INFO and trace records at DEBUG.
pub fn init_log_facade() -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(LogrFacade))?;
    log::set_max_level(default_logger().level().to_level_filter());
    Ok(())
}
