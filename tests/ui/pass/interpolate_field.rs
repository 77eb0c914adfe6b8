use interlog::{interpolate, LoggerExt};

struct Data {
    inner: Inner,
}

struct Inner {
    a: i32,
}

fn main() {
    let logger = interlog::from_fn(|record| {
        assert_eq!("Logging with a nested 42", record.msg().to_string());
    });

    let data = Data {
        inner: Inner { a: 42 },
    };

    logger.log_debug(interpolate!("Logging with a nested {data.inner.a}"));
}
