use std::fmt;

use log::LevelFilter;

/// Severity of a log line.
///
/// Variants are ordered by rank: `Error` (0) is the most severe, `Debug` (2) the
/// most verbose. A line is written when its level is `<=` the logger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    Error = 0,
    #[default]
    Info = 1,
    Debug = 2,
}

impl Level {
    pub const fn rank(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
        }
    }

    /// Whether a line at `self` passes a logger whose threshold is `threshold`.
    pub fn enabled(self, threshold: Level) -> bool {
        self.rank() <= threshold.rank()
    }

    /// Maximum `log` crate filter admitting every record this threshold shows.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Level::Error => LevelFilter::Error,
            Level::Info => LevelFilter::Info,
            Level::Debug => LevelFilter::Trace,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn | log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

/// Resolves a configured level name. Unknown or empty names resolve to `Info`.
pub fn resolve_level(name: &str) -> Level {
    match name.to_ascii_lowercase().as_str() {
        "error" => Level::Error,
        "debug" => Level::Debug,
        _ => Level::Info,
    }
}

#[test]
fn test_resolve_level() {
    assert_eq!(resolve_level("ERROR"), Level::Error);
    assert_eq!(resolve_level("error"), Level::Error);
    assert_eq!(resolve_level("Debug"), Level::Debug);
    assert_eq!(resolve_level("info"), Level::Info);
    assert_eq!(resolve_level("InFo"), Level::Info);
    assert_eq!(resolve_level(""), Level::Info);
    assert_eq!(resolve_level("bogus"), Level::Info);
    assert_eq!(resolve_level(" debug"), Level::Info);
}

#[test]
fn test_level_gate() {
    assert!(Level::Error.enabled(Level::Error));
    assert!(!Level::Info.enabled(Level::Error));
    assert!(!Level::Debug.enabled(Level::Error));
    assert!(Level::Error.enabled(Level::Info));
    assert!(Level::Info.enabled(Level::Info));
    assert!(!Level::Debug.enabled(Level::Info));
    for level in [Level::Error, Level::Info, Level::Debug] {
        assert!(level.enabled(Level::Debug));
    }
}

#[test]
fn test_level_ranks_and_names() {
    assert_eq!(Level::Error.rank(), 0);
    assert_eq!(Level::Info.rank(), 1);
    assert_eq!(Level::Debug.rank(), 2);
    assert_eq!(Level::Debug.to_string(), "DEBUG");
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn test_from_log_level() {
    assert_eq!(Level::from(log::Level::Error), Level::Error);
    assert_eq!(Level::from(log::Level::Warn), Level::Info);
    assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    assert!(log::Level::Trace <= Level::Debug.to_level_filter());
    assert!(log::Level::Warn > Level::Error.to_level_filter());
}
