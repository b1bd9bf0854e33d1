use std::{
    fmt::{self, Display, Write},
    path::Path,
    sync::{Arc, Mutex, PoisonError},
};

use logr_core::{
    Level, LogEnvConfig, LogFile, LogWriter, SharedWriter, format_fatal, format_line,
    shared_stderr,
};

/// A leveled logger writing `key=value` lines to a shared sink.
///
/// Cloning and deriving are cheap: the sink is shared, the context is copied.
#[derive(Clone)]
pub struct Logger {
    /// Most verbose level still written.
    level: Level,
    writer: SharedWriter,
    /// Accumulated `" key=value"` fragments appended to every line.
    context: String,
    color: bool,
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("context", &self.context)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Logger configured from `LOG_LEVEL`/`LOG_COLOR`, writing to standard error.
    pub fn new() -> Self {
        logger_config().build()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    /// Writes `message` at `level` if the threshold admits it.
    pub fn log(&self, level: Level, message: impl Display) {
        if !level.enabled(self.level) {
            return;
        }
        let line = format_line(
            &chrono::Local::now(),
            level,
            &message.to_string(),
            &self.context,
            self.color,
        );
        self.write_line(&line);
    }

    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.regular(line).ok();
    }

    pub fn flush(&self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.flush().ok();
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message)
    }

    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args)
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message)
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args)
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message)
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args)
    }

    /// Writes a `level=FATAL` line regardless of the threshold, then exits with status 1.
    pub fn fatal(&self, message: impl Display) -> ! {
        self.write_line(&format_fatal(&message.to_string()));
        self.flush();
        std::process::exit(1)
    }

    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal(args)
    }

    /// Returns a logger sharing this one's sink and threshold, with `fields`
    /// appended to the context in iteration order.
    ///
    /// The order of a `HashMap` is unspecified; pass an array or a `BTreeMap`
    /// when the order of the fields matters.
    pub fn with_context<I, K, V>(&self, fields: I) -> Logger
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        let mut context = self.context.clone();
        for (key, value) in fields {
            write!(context, " {key}={value}").ok();
        }
        Logger {
            context,
            ..self.clone()
        }
    }

    /// Attaches the caller's source `file` and `line` to the context.
    #[track_caller]
    pub fn with_source(&self) -> Logger {
        let location = std::panic::Location::caller();
        self.with_context([
            ("file", location.file().to_string()),
            ("line", location.line().to_string()),
        ])
    }
}

/// Builder for configuring a [`Logger`].
pub struct ConfigBuilder {
    level: Level,
    writer: Option<SharedWriter>,
    color: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        let env = LogEnvConfig::load();
        Self {
            level: env.level(),
            writer: None,
            color: env.color(),
        }
    }
}

impl ConfigBuilder {
    pub fn build(self) -> Logger {
        let Self {
            level,
            writer,
            color,
        } = self;
        Logger {
            level,
            writer: writer.unwrap_or_else(shared_stderr),
            context: String::new(),
            color,
        }
    }

    /// Sets the threshold, overriding `LOG_LEVEL`.
    pub fn with_level(self, level: Level) -> Self {
        Self { level, ..self }
    }

    /// Writes to `writer` instead of the shared standard error sink.
    pub fn with_writer<W: LogWriter + 'static>(self, writer: W) -> Self {
        let writer: SharedWriter = Arc::new(Mutex::new(writer));
        self.with_shared_writer(writer)
    }

    /// Writes to a sink already shared with other loggers.
    pub fn with_shared_writer(self, writer: SharedWriter) -> Self {
        Self {
            writer: Some(writer),
            ..self
        }
    }

    /// Appends to a log file instead of standard error.
    pub fn with_log_file<P: AsRef<Path>>(self, path: P) -> Result<Self, std::io::Error> {
        Ok(self.with_writer(LogFile::new(path)?))
    }

    /// Colours level names, overriding `LOG_COLOR`.
    ///
    /// The ANSI codes are part of the line, so they reach every sink, files and
    /// buffers included. Leave colour off for loggers that do not write to a terminal.
    pub fn with_color(self, yes: bool) -> Self {
        Self { color: yes, ..self }
    }
}

/// Returns a [`ConfigBuilder`] seeded from the environment.
pub fn logger_config() -> ConfigBuilder {
    ConfigBuilder::default()
}

#[cfg(test)]
use logr_core::LogBuffer;

#[cfg(test)]
fn buffered(level: Level) -> (Logger, LogBuffer) {
    let buffer = LogBuffer::new();
    let logger = logger_config()
        .with_level(level)
        .with_color(false)
        .with_writer(buffer.clone())
        .build();
    (logger, buffer)
}

#[test]
fn test_debug_threshold_emits_all_levels() {
    let (logger, buffer) = buffered(Level::Debug);
    logger.error("e");
    logger.info("i");
    logger.debug("d");
    let lines = buffer.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("level=ERROR msg=\"e\""));
    assert!(lines[1].contains("level=INFO msg=\"i\""));
    assert!(lines[2].contains("level=DEBUG msg=\"d\""));
}

#[test]
fn test_error_threshold_filters() {
    let (logger, buffer) = buffered(Level::Error);
    logger.info("hidden");
    logger.debug("hidden");
    logger.infof(format_args!("hidden {}", 1));
    assert!(buffer.lines().is_empty());
    logger.error("shown");
    assert_eq!(buffer.lines().len(), 1);
    assert!(buffer.lines()[0].ends_with("level=ERROR msg=\"shown\""));
}

#[test]
fn test_info_threshold_filters_debug() {
    let (logger, buffer) = buffered(Level::Info);
    logger.debug("hidden");
    logger.debugf(format_args!("hidden"));
    logger.info("shown");
    logger.errorf(format_args!("code {}", 7));
    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("level=ERROR msg=\"code 7\""));
}

#[test]
fn test_line_shape() {
    let (logger, buffer) = buffered(Level::Info);
    logger.infof(format_args!("count={}", 3));
    let re = regex::Regex::new(
        r#"^timestamp=\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2} level=INFO msg="count=3"$"#,
    )
    .unwrap();
    assert!(re.is_match(&buffer.lines()[0]));
}

#[test]
fn test_non_string_messages() {
    let (logger, buffer) = buffered(Level::Info);
    logger.info(42);
    logger.info(std::io::Error::other("no route"));
    let lines = buffer.lines();
    assert!(lines[0].ends_with("msg=\"42\""));
    assert!(lines[1].ends_with("msg=\"no route\""));
}

#[test]
fn test_context_chaining() {
    let (logger, buffer) = buffered(Level::Info);
    let a = logger.with_context([("a", "1")]);
    a.info("one");
    let ab = a.with_context([("b", "2")]);
    ab.info("two");
    let lines = buffer.lines();
    assert!(lines[0].ends_with("msg=\"one\" a=1"));
    assert!(lines[1].ends_with("msg=\"two\" a=1 b=2"));
    assert_eq!(ab.context(), " a=1 b=2");
}

#[test]
fn test_context_does_not_mutate_original() {
    let (logger, buffer) = buffered(Level::Info);
    let derived = logger.with_context([("request", "abc")]);
    logger.info("plain");
    derived.info("tagged");
    let lines = buffer.lines();
    assert!(lines[0].ends_with("msg=\"plain\""));
    assert!(lines[1].ends_with("msg=\"tagged\" request=abc"));
    assert_eq!(logger.context(), "");
    assert_eq!(derived.level(), logger.level());
}

#[test]
fn test_context_from_hash_map() {
    let (logger, buffer) = buffered(Level::Info);
    let fields = std::collections::HashMap::from([("x", "1"), ("y", "2"), ("z", "3")]);
    logger.with_context(&fields).info("m");
    let line = &buffer.lines()[0];
    let (_, suffix) = line.split_once("msg=\"m\"").unwrap();
    let mut tokens: Vec<&str> = suffix.split_whitespace().collect();
    tokens.sort();
    assert_eq!(tokens, vec!["x=1", "y=2", "z=3"]);
}

#[test]
fn test_with_source() {
    let (logger, buffer) = buffered(Level::Info);
    let expected_line = line!() + 1;
    let sourced = logger.with_source();
    sourced.info("here");
    let line = &buffer.lines()[0];
    assert!(line.contains(&format!(" file={}", file!())));
    assert!(line.ends_with(&format!(" line={expected_line}")));
}

#[test]
fn test_derived_loggers_share_sink() {
    let (logger, buffer) = buffered(Level::Info);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let logger = logger.with_context([("worker", i)]);
            std::thread::spawn(move || {
                for j in 0..25 {
                    logger.infof(format_args!("job {j}"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    let lines = buffer.lines();
    assert_eq!(lines.len(), 100);
    assert!(
        lines
            .iter()
            .all(|line| line.starts_with("timestamp=") && line.contains(" worker="))
    );
}
