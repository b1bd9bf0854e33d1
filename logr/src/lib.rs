//! # logr
//! Minimal leveled logger emitting `key=value` lines with contextual fields.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! logr = "0.1.0"
//! ```
//!
//! The default logger reads `LOG_LEVEL` (`error`, `info` or `debug`, defaulting
//! to `info`) on first use and writes to standard error:
//! ```rust
//! logr::info("service started");
//! logr::infof!("listening on port {}", 8080);
//! logr::debug("only written when LOG_LEVEL=debug");
//! ```
//! which prints
//! ```text
//! timestamp=2025-03-07T09:04:05 level=INFO msg="service started"
//! timestamp=2025-03-07T09:04:05 level=INFO msg="listening on port 8080"
//! ```
//!
//! ## Context
//! Derived loggers carry extra fields on every line. Deriving never changes the
//! original logger.
//! ```rust
//! use logr::{Level, LogBuffer, logger_config};
//!
//! let buffer = LogBuffer::new();
//! let logger = logger_config()
//!     .with_level(Level::Debug)
//!     .with_writer(buffer.clone())
//!     .build();
//! let request = logger.with_context([("request_id", "42")]);
//! request.with_context([("user", "ana")]).debug("loaded profile");
//! logger.info("no fields here");
//!
//! let lines = buffer.lines();
//! assert!(lines[0].ends_with(r#"level=DEBUG msg="loaded profile" request_id=42 user=ana"#));
//! assert!(lines[1].ends_with(r#"level=INFO msg="no fields here""#));
//! ```
//!
//! ## Log files
//! ```rust
//! use logr::logger_config;
//!
//! let path = std::env::temp_dir().join("logr_doc_example.log");
//! std::fs::remove_file(&path).ok();
//! let logger = logger_config()
//!     .with_log_file(&path)
//!     .expect("Unable to create log file")
//!     .build();
//! logger.error("Hello, world!");
//! assert!(std::fs::read_to_string(&path).unwrap().ends_with("msg=\"Hello, world!\"\n"));
//! ```
//!
//! ## Concurrency
//! Every line is formatted completely before the sink is locked, and written in
//! a single call. Loggers sharing a sink can be used from any number of threads
//! without interleaving lines.

pub mod caller;
mod default;
mod facade;
mod logger;
mod macros;

pub use default::{
    debug, debugf, default_logger, error, errorf, fatal, fatalf, info, infof, init_default,
};
pub use facade::init_log_facade;
pub use logger::{ConfigBuilder, Logger, logger_config};
pub use logr_core::{
    Level, LogBuffer, LogFile, LogStderr, LogWriter, SharedWriter, resolve_level,
};
