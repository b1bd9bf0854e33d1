use logr::{Level, LogBuffer, logger_config};

#[test]
fn test_free_functions_use_installed_default() {
    let buffer = LogBuffer::new();
    logr::init_default(
        logger_config()
            .with_level(Level::Debug)
            .with_color(false)
            .with_writer(buffer.clone())
            .build(),
    )
    .unwrap();
    assert!(logr::init_default(logr::Logger::new()).is_err());
    assert_eq!(logr::default_logger().level(), Level::Debug);

    logr::error("e");
    logr::info("i");
    logr::debug("d");
    logr::errorf!("code {}", 500);
    logr::infof!("count={}", 3);
    logr::debugf!("{}-{}", "a", "b");
    logr::infof(format_args!("direct {}", true));

    let lines = buffer.lines();
    let messages: Vec<_> = lines
        .iter()
        .map(|line| line.split_once(" level=").unwrap().1)
        .collect();
    assert_eq!(
        messages,
        vec![
            r#"ERROR msg="e""#,
            r#"INFO msg="i""#,
            r#"DEBUG msg="d""#,
            r#"ERROR msg="code 500""#,
            r#"INFO msg="count=3""#,
            r#"DEBUG msg="a-b""#,
            r#"INFO msg="direct true""#,
        ]
    );
}
