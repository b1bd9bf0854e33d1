use log::Log;
use logr::{Level, LogBuffer, logger_config};

#[test]
fn test_log_macros_route_to_default_logger() {
    let buffer = LogBuffer::new();
    logr::init_default(
        logger_config()
            .with_level(Level::Info)
            .with_color(false)
            .with_writer(buffer.clone())
            .build(),
    )
    .unwrap();
    logr::init_log_facade().unwrap();
    assert!(logr::init_log_facade().is_err());
    assert_eq!(log::max_level(), log::LevelFilter::Info);

    log::error!("disk full");
    log::warn!("retrying {}", 2);
    log::info!("ready");
    log::debug!("hidden");
    log::trace!("hidden");
    log::logger().flush();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with(r#"level=ERROR msg="disk full""#));
    assert!(lines[1].ends_with(r#"level=INFO msg="retrying 2""#));
    assert!(lines[2].ends_with(r#"level=INFO msg="ready""#));
}
