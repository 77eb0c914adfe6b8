/*!
Forward `interlog` records to the [`log`] crate.

Records are translated into [`log::Record`]s with the rendered message as their text. The template arguments, the `{OriginalFormat}` template, and the event id and error are attached as key-values, so a `log` implementation that understands structured data can recover them.

```
use interlog::{interpolate, LoggerExt};

let logger = interlog_log::global_logger();

let user = "Ferris";

logger.log_info(interpolate!("{user} signed in"));
```
*/

use interlog::{well_known::KEY_ORIGINAL_FORMAT, Level, Logger, Record};

/**
The target assigned to records that don't set one.
*/
pub const DEFAULT_TARGET: &str = "interlog";

/**
A [`Logger`] that forwards to the global [`log::logger()`].
*/
pub fn global_logger() -> LogLogger<GlobalLog> {
    LogLogger::new(GlobalLog)
}

/**
The global [`log::Log`], resolved on each call.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalLog;

impl log::Log for GlobalLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::logger().enabled(metadata)
    }

    fn log(&self, record: &log::Record) {
        log::logger().log(record)
    }

    fn flush(&self) {
        log::logger().flush()
    }
}

/**
A [`Logger`] that forwards records to a [`log::Log`].
*/
#[derive(Debug, Clone)]
pub struct LogLogger<T> {
    log: T,
    target: &'static str,
}

impl<T: log::Log> LogLogger<T> {
    pub const fn new(log: T) -> Self {
        LogLogger {
            log,
            target: DEFAULT_TARGET,
        }
    }

    /**
    Set the target of forwarded records.
    */
    pub fn with_target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }

    pub fn inner(&self) -> &T {
        &self.log
    }
}

impl<T: log::Log> Logger for LogLogger<T> {
    fn log(&self, record: &Record) {
        let level = to_log_level(record.level());

        if !self.log.enabled(&self.metadata(level)) {
            return;
        }

        self.log.log(
            &log::Record::builder()
                .args(format_args!("{}", record.msg()))
                .level(level)
                .target(self.target)
                .key_values(&RecordSource(record))
                .build(),
        );
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.log.enabled(&self.metadata(to_log_level(level)))
    }
}

impl<T> LogLogger<T> {
    fn metadata(&self, level: log::Level) -> log::Metadata<'static> {
        log::Metadata::builder()
            .level(level)
            .target(self.target)
            .build()
    }
}

/**
Map a level onto the `log` crate's levels.

The `log` crate has no critical level, so [`Level::Critical`] maps onto [`log::Level::Error`].
*/
pub fn to_log_level(level: Level) -> log::Level {
    match level {
        Level::Trace => log::Level::Trace,
        Level::Debug => log::Level::Debug,
        Level::Info => log::Level::Info,
        Level::Warn => log::Level::Warn,
        Level::Error | Level::Critical => log::Level::Error,
    }
}

struct RecordSource<'a, 'b>(&'b Record<'a>);

impl<'a, 'b> log::kv::Source for RecordSource<'a, 'b> {
    fn visit<'kvs>(
        &'kvs self,
        visitor: &mut dyn log::kv::VisitSource<'kvs>,
    ) -> Result<(), log::kv::Error> {
        let record = self.0;
        let state = record.state();

        for (name, value) in state.iter() {
            visitor.visit_pair(log::kv::Key::from_str(name), to_log_value(value))?;
        }

        visitor.visit_pair(
            log::kv::Key::from_str(KEY_ORIGINAL_FORMAT),
            log::kv::Value::from(state.original_format()),
        )?;

        if record.level() == Level::Critical {
            visitor.visit_pair(
                log::kv::Key::from_str("level"),
                log::kv::Value::from("critical"),
            )?;
        }

        let event_id = record.event_id();

        if !event_id.is_default() {
            visitor.visit_pair(
                log::kv::Key::from_str("event_id"),
                log::kv::Value::from(event_id.id()),
            )?;

            if let Some(name) = event_id.name() {
                visitor.visit_pair(
                    log::kv::Key::from_str("event_name"),
                    log::kv::Value::from(name),
                )?;
            }
        }

        if let Some(err) = record.error() {
            visitor.visit_pair(
                log::kv::Key::from_str("error"),
                log::kv::Value::from_dyn_error(err),
            )?;
        }

        Ok(())
    }
}

fn to_log_value<'v>(value: &'v interlog::Value<'v>) -> log::kv::Value<'v> {
    if let Some(value) = value.to_borrowed_str() {
        return log::kv::Value::from(value);
    }

    if let Some(value) = value.to_bool() {
        return log::kv::Value::from(value);
    }

    if let Some(value) = value.to_i64() {
        return log::kv::Value::from(value);
    }

    if let Some(value) = value.to_u64() {
        return log::kv::Value::from(value);
    }

    if let Some(value) = value.to_f64() {
        return log::kv::Value::from(value);
    }

    log::kv::Value::from_dyn_display(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{error::Error, fmt, sync::Mutex};

    use interlog::{interpolate, EventId, LoggerExt};

    #[derive(Debug, PartialEq)]
    struct Captured {
        level: log::Level,
        target: String,
        args: String,
        kvs: Vec<(String, String)>,
    }

    struct Capture {
        max: log::LevelFilter,
        records: Mutex<Vec<Captured>>,
    }

    impl Capture {
        fn new(max: log::LevelFilter) -> Self {
            Capture {
                max,
                records: Mutex::new(Vec::new()),
            }
        }

        fn take(&self) -> Vec<Captured> {
            std::mem::take(&mut *self.records.lock().unwrap())
        }
    }

    struct Collect<'a>(&'a mut Vec<(String, String)>);

    impl<'a, 'kvs> log::kv::VisitSource<'kvs> for Collect<'a> {
        fn visit_pair(
            &mut self,
            key: log::kv::Key<'kvs>,
            value: log::kv::Value<'kvs>,
        ) -> Result<(), log::kv::Error> {
            self.0.push((key.to_string(), value.to_string()));

            Ok(())
        }
    }

    impl log::Log for Capture {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= self.max
        }

        fn log(&self, record: &log::Record) {
            let mut kvs = Vec::new();
            record.key_values().visit(&mut Collect(&mut kvs)).unwrap();

            self.records.lock().unwrap().push(Captured {
                level: record.level(),
                target: record.target().to_owned(),
                args: record.args().to_string(),
                kvs,
            });
        }

        fn flush(&self) {}
    }

    #[derive(Debug)]
    struct Failed;

    impl fmt::Display for Failed {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("failed")
        }
    }

    impl Error for Failed {}

    fn kvs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn forward_message() {
        let logger = LogLogger::new(Capture::new(log::LevelFilter::Trace));

        let a = "text";
        let b = 42;

        logger.log_info(interpolate!("message: {a}, {b}"));

        assert_eq!(
            vec![Captured {
                level: log::Level::Info,
                target: "interlog".to_owned(),
                args: "message: text, 42".to_owned(),
                kvs: kvs(&[
                    ("0", "text"),
                    ("1", "42"),
                    ("{OriginalFormat}", "message: {0}, {1}"),
                ]),
            }],
            logger.inner().take()
        );
    }

    #[test]
    fn forward_event_id_and_error() {
        let logger =
            LogLogger::new(Capture::new(log::LevelFilter::Trace)).with_target("my_app::jobs");

        logger.log_critical_id_err(
            EventId::new(3).with_name("JobFailed"),
            Some(&Failed),
            interpolate!("job failed"),
        );

        assert_eq!(
            vec![Captured {
                level: log::Level::Error,
                target: "my_app::jobs".to_owned(),
                args: "job failed".to_owned(),
                kvs: kvs(&[
                    ("{OriginalFormat}", "job failed"),
                    ("level", "critical"),
                    ("event_id", "3"),
                    ("event_name", "JobFailed"),
                    ("error", "failed"),
                ]),
            }],
            logger.inner().take()
        );
    }

    #[test]
    fn args_keep_their_types() {
        struct Check;

        impl log::Log for Check {
            fn enabled(&self, _: &log::Metadata) -> bool {
                true
            }

            fn log(&self, record: &log::Record) {
                let kvs = record.key_values();

                assert_eq!(
                    Some(42),
                    kvs.get(log::kv::Key::from_str("0"))
                        .and_then(|v| v.to_i64())
                );
                assert_eq!(
                    Some(true),
                    kvs.get(log::kv::Key::from_str("1"))
                        .and_then(|v| v.to_bool())
                );
                assert_eq!(
                    Some(1.5),
                    kvs.get(log::kv::Key::from_str("2"))
                        .and_then(|v| v.to_f64())
                );
            }

            fn flush(&self) {}
        }

        let count = 42;
        let done = true;
        let ratio = 1.5;

        LogLogger::new(Check).log_info(interpolate!("{count} {done} {ratio}"));
    }

    #[test]
    fn disabled_levels_are_skipped() {
        let logger = LogLogger::new(Capture::new(log::LevelFilter::Warn));

        assert!(!logger.is_enabled(Level::Info));
        assert!(logger.is_enabled(Level::Warn));
        assert!(logger.is_enabled(Level::Critical));

        logger.log_info(interpolate!("skipped"));
        logger.log_warn(interpolate!("kept"));

        let records = logger.inner().take();

        assert_eq!(1, records.len());
        assert_eq!("kept", records[0].args);
    }

    #[test]
    fn level_mapping() {
        for (level, expected) in [
            (Level::Trace, log::Level::Trace),
            (Level::Debug, log::Level::Debug),
            (Level::Info, log::Level::Info),
            (Level::Warn, log::Level::Warn),
            (Level::Error, log::Level::Error),
            (Level::Critical, log::Level::Error),
        ] {
            assert_eq!(expected, to_log_level(level));
        }
    }
}
