use interlog::{interpolate, LoggerExt, Logger};

struct Job {
    id: u64,
}

impl Job {
    fn run(&self, logger: &impl Logger) {
        logger.log_info_id(1, interpolate!("running job {self.id}"));
    }
}

fn main() {
    let logger = interlog::from_fn(|record| {
        assert_eq!("running job 7", record.msg().to_string());
    });

    Job { id: 7 }.run(&logger);
}
