use interlog::{interpolate, LoggerExt};

#[derive(Debug)]
struct Point {
    x: i32,
    y: i32,
}

fn main() {
    let logger = interlog::from_fn(|record| {
        assert_eq!("at Point { x: 1, y: 2 }", record.msg().to_string());
    });

    let point = Point { x: 1, y: 2 };

    logger.log_trace(interpolate!("at {point:?}"));
}
