use interlog::{interpolate, LoggerExt};

fn main() {
    let logger = interlog::from_fn(|record| {
        assert_eq!("{{literal}} {0}", record.state().original_format());
        assert_eq!("{literal} 1", record.msg().to_string());
    });

    let n = 1;

    logger.log_info(interpolate!("{{literal}} {n}"));
}
