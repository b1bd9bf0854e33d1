use logr::{Level, logger_config};

fn main() {
    let logger = logger_config()
        .with_level(Level::Debug)
        .build()
        .with_context([("service", "ingest")]);
    logger.info("Hello, world!");
    let handles: Vec<_> = (0..5)
        .map(|i| {
            let logger = logger.with_context([("worker", i)]);
            std::thread::spawn(move || {
                logr::debugf!(logger: logger, "picked up batch {}", i * 10);
                if i == 3 {
                    logger.with_source().errorf(format_args!("batch {} rejected", i * 10));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    logr::infof!("done in {}", logr::get_caller!());
}
