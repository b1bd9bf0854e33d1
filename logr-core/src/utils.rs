use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use colored::Colorize;

use crate::Level;

/// `YYYY-MM-DDTHH:MM:SS`, no fraction and no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats a complete line: `timestamp=.. level=.. msg="<message>"<context>`.
///
/// The message is quoted and escaped; `context` is appended verbatim.
pub fn format_line<Tz: TimeZone>(
    time: &DateTime<Tz>,
    level: Level,
    message: &str,
    context: &str,
    color: bool,
) -> String
where
    Tz::Offset: Display,
{
    let time = time.format(TIMESTAMP_FORMAT);
    if color {
        let name = match level {
            Level::Error => level.name().red(),
            Level::Info => level.name().green(),
            Level::Debug => level.name().blue(),
        };
        format!("timestamp={time} level={name} msg={message:?}{context}")
    } else {
        format!("timestamp={time} level={level} msg={message:?}{context}")
    }
}

/// Fatal lines keep their own shape: no timestamp, unquoted message, no context.
pub fn format_fatal(message: &str) -> String {
    format!("level=FATAL msg={message}")
}

#[cfg(test)]
fn fixed_time() -> DateTime<chrono::Utc> {
    chrono::Utc.with_ymd_and_hms(2025, 3, 7, 9, 4, 5).unwrap()
}

#[test]
fn test_format_line() {
    assert_eq!(
        format_line(&fixed_time(), Level::Info, "hello", "", false),
        r#"timestamp=2025-03-07T09:04:05 level=INFO msg="hello""#
    );
    assert_eq!(
        format_line(&fixed_time(), Level::Error, "boom", " a=1 b=2", false),
        r#"timestamp=2025-03-07T09:04:05 level=ERROR msg="boom" a=1 b=2"#
    );
}

#[test]
fn test_format_line_escapes_message() {
    let line = format_line(&fixed_time(), Level::Debug, "say \"hi\"\nbye", "", false);
    assert_eq!(
        line,
        r#"timestamp=2025-03-07T09:04:05 level=DEBUG msg="say \"hi\"\nbye""#
    );
    assert!(!line.contains('\n'));
}

#[test]
fn test_format_line_shape_with_local_time() {
    let re = regex::Regex::new(r#"^timestamp=\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2} level=INFO msg="x"$"#)
        .unwrap();
    assert!(re.is_match(&format_line(&chrono::Local::now(), Level::Info, "x", "", false)));
}

#[test]
fn test_format_line_color() {
    colored::control::set_override(true);
    let line = format_line(&fixed_time(), Level::Error, "boom", "", true);
    let red = "ERROR".red().to_string();
    colored::control::unset_override();
    assert!(line.contains(&format!("level={red} ")));
    assert!(line.ends_with(r#" msg="boom""#));
}

#[test]
fn test_format_fatal() {
    assert_eq!(format_fatal("disk gone"), "level=FATAL msg=disk gone");
}
