//! # logr-core
//! Core utilities for logr - severity levels, line formatting and sinks.

mod config;
mod level;
mod log_writer;
mod utils;

pub use config::LogEnvConfig;
pub use level::{Level, resolve_level};
pub use log_writer::{LogBuffer, LogFile, LogStderr, LogWriter, SharedWriter, shared_stderr};
pub use utils::{TIMESTAMP_FORMAT, format_fatal, format_line};
