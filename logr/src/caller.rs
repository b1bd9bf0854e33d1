//! Support for [`get_caller!`](crate::get_caller).

/// Returned when no function name can be recovered.
pub const CALLER_UNKNOWN: &str = "function name unknown";

/// Last `::` segment of a qualified function path, ignoring closure segments.
pub fn unqualified_name(path: &str) -> &str {
    path.rsplit("::")
        .find(|segment| !segment.is_empty() && *segment != "{{closure}}")
        .unwrap_or(CALLER_UNKNOWN)
}

#[test]
fn test_unqualified_name() {
    assert_eq!(unqualified_name("my_app::db::connect"), "connect");
    assert_eq!(unqualified_name("main"), "main");
    assert_eq!(unqualified_name("my_app::run::{{closure}}"), "run");
    assert_eq!(unqualified_name(""), CALLER_UNKNOWN);
    assert_eq!(unqualified_name("{{closure}}"), CALLER_UNKNOWN);
}

#[test]
fn test_get_caller() {
    fn open_store() -> &'static str {
        crate::get_caller!()
    }
    assert_eq!(open_store(), "open_store");
    assert_eq!(crate::get_caller!(), "test_get_caller");
    let from_closure = || crate::get_caller!();
    assert_eq!(from_closure(), "test_get_caller");
}
