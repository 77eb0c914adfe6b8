/*!
The [`Logger`] type.

A [`Logger`] receives [`Record`]s. It's the only collaborator the interpolation adapter talks to: level filtering, rendering, and writing records to a sink are all up to the logger.

Loggers can be implemented directly, or built from a closure using [`from_fn`].
*/

use crate::{empty::Empty, level::Level, record::Record};

/**
A destination for log records.
*/
pub trait Logger {
    /**
    Log a record.

    Implementations decide whether the record's level is enabled. Any panic raised here propagates to the caller unchanged.
    */
    fn log(&self, record: &Record);

    /**
    Whether records at the given level would be written.

    Callers can use this to avoid computing expensive arguments. It isn't consulted before [`Logger::log`] is called.
    */
    fn is_enabled(&self, level: Level) -> bool {
        let _ = level;

        true
    }
}

impl<'a, T: Logger + ?Sized> Logger for &'a T {
    fn log(&self, record: &Record) {
        (**self).log(record)
    }

    fn is_enabled(&self, level: Level) -> bool {
        (**self).is_enabled(level)
    }
}

#[cfg(feature = "std")]
impl<T: Logger + ?Sized> Logger for Box<T> {
    fn log(&self, record: &Record) {
        (**self).log(record)
    }

    fn is_enabled(&self, level: Level) -> bool {
        (**self).is_enabled(level)
    }
}

#[cfg(feature = "std")]
impl<T: Logger + ?Sized> Logger for std::sync::Arc<T> {
    fn log(&self, record: &Record) {
        (**self).log(record)
    }

    fn is_enabled(&self, level: Level) -> bool {
        (**self).is_enabled(level)
    }
}

impl Logger for Empty {
    fn log(&self, _: &Record) {}

    fn is_enabled(&self, _: Level) -> bool {
        false
    }
}

/**
A [`Logger`] from a function.

Use [`from_fn`] to create one.
*/
pub struct FromFn<F>(F);

impl<F: Fn(&Record)> Logger for FromFn<F> {
    fn log(&self, record: &Record) {
        (self.0)(record)
    }
}

/**
Create a [`Logger`] that calls `f` for each record.
*/
pub fn from_fn<F: Fn(&Record)>(f: F) -> FromFn<F> {
    FromFn(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, sync::Arc};

    use crate::{
        event_id::EventId, message::Interpolated, template::Template, value::Value,
        values::LogValues,
    };

    fn log_once(logger: impl Logger) {
        let args = [Value::from(1)];

        logger.log(&Record::new(
            Level::Info,
            EventId::default(),
            None,
            LogValues::new(Interpolated::new(Template::new("{0}"), &args)),
        ));
    }

    #[test]
    fn from_fn_receives_records() {
        let calls = Cell::new(0);

        let logger = from_fn(|record| {
            assert_eq!("1", record.msg().to_string());
            calls.set(calls.get() + 1);
        });

        log_once(&logger);
        log_once(&logger);

        assert_eq!(2, calls.get());
        assert!(logger.is_enabled(Level::Trace));
    }

    #[test]
    fn empty_discards() {
        log_once(Empty);

        assert!(!Empty.is_enabled(Level::Critical));
    }

    #[test]
    fn shared_loggers_forward() {
        let calls = Arc::new(std::sync::atomic::AtomicUsize::new(0));

        let logger: Arc<dyn Logger> = Arc::new(from_fn({
            let calls = calls.clone();
            move |_| {
                calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            }
        }));

        log_once(logger.clone());
        log_once(Box::new(logger));

        assert_eq!(2, calls.load(std::sync::atomic::Ordering::Relaxed));
    }
}
