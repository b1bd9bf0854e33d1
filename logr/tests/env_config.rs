use logr::{Level, Logger};

#[test]
fn test_level_and_color_from_environment() {
    // Only test in this binary, so no other thread reads the environment.
    unsafe {
        std::env::set_var("LOG_LEVEL", "DeBuG");
        std::env::remove_var("LOG_COLOR");
    }
    assert_eq!(Logger::new().level(), Level::Debug);
    assert_eq!(logr::default_logger().level(), Level::Debug);

    unsafe { std::env::set_var("LOG_LEVEL", "verbose") };
    assert_eq!(Logger::new().level(), Level::Info);

    unsafe { std::env::set_var("LOG_LEVEL", "error") };
    assert_eq!(Logger::new().level(), Level::Error);
    // The default logger read the environment once.
    assert_eq!(logr::default_logger().level(), Level::Debug);

    unsafe {
        std::env::set_var("LOG_COLOR", "not-a-bool");
        std::env::remove_var("LOG_LEVEL");
    }
    assert_eq!(Logger::new().level(), Level::Info);

    // A colour value that is not a plain bool must not reset the threshold.
    for color in ["1", "yes", "on", "not-a-bool"] {
        unsafe {
            std::env::set_var("LOG_LEVEL", "debug");
            std::env::set_var("LOG_COLOR", color);
        }
        assert_eq!(Logger::new().level(), Level::Debug, "LOG_COLOR={color}");
    }
}
