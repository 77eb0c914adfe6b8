use interlog::{interpolate, LoggerExt};

fn main() {
    let logger = interlog::from_fn(|record| {
        assert_eq!("a = {0}, b = {1}", record.state().original_format());
        assert_eq!("a = text, b = 42", record.msg().to_string());
    });

    let a = "text";
    let b = 42;

    logger.log_info(interpolate!("a = {a}, b = {b}"));
}
