/*!
The [`Record`] type.

A record is a single request to log. It's constructed for each call, handed to a [`crate::logger::Logger`] by reference, and never retained.
*/

use core::{error::Error, fmt};

use crate::{event_id::EventId, level::Level, values::LogValues};

/**
A function that renders the state and error of a record into text.
*/
pub type Formatter =
    fn(&LogValues, Option<&(dyn Error + 'static)>, &mut fmt::Formatter) -> fmt::Result;

/**
The default [`Formatter`].

This renders the template with its arguments. The error isn't included; loggers are expected to write it separately.
*/
pub fn format_state(
    state: &LogValues,
    _: Option<&(dyn Error + 'static)>,
    f: &mut fmt::Formatter,
) -> fmt::Result {
    fmt::Display::fmt(state, f)
}

/**
A request to log.
*/
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    event_id: EventId,
    error: Option<&'a (dyn Error + 'static)>,
    state: LogValues<'a>,
    formatter: Formatter,
}

impl<'a> Record<'a> {
    /**
    Create a record that renders its state using [`format_state`].
    */
    pub fn new(
        level: Level,
        event_id: EventId,
        error: Option<&'a (dyn Error + 'static)>,
        state: LogValues<'a>,
    ) -> Self {
        Record {
            level,
            event_id,
            error,
            state,
            formatter: format_state,
        }
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }

    pub fn state(&self) -> &LogValues<'a> {
        &self.state
    }

    pub fn formatter(&self) -> Formatter {
        self.formatter
    }

    /**
    Get a value that renders the message of this record using its [`Formatter`].

    Nothing is rendered until the result is formatted.
    */
    pub fn msg(&self) -> Msg {
        Msg { record: self }
    }
}

impl<'a> fmt::Debug for Record<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DisplayError<'a>(&'a (dyn Error + 'static));

        impl<'a> fmt::Debug for DisplayError<'a> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self.0, f)
            }
        }

        f.debug_struct("Record")
            .field("level", &self.level)
            .field("event_id", &self.event_id)
            .field("error", &self.error.map(DisplayError))
            .field("state", &self.state)
            .finish()
    }
}

/**
The result of calling [`Record::msg`].
*/
pub struct Msg<'a> {
    record: &'a Record<'a>,
}

impl<'a> fmt::Display for Msg<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.record.formatter)(&self.record.state, self.record.error, f)
    }
}

impl<'a> fmt::Debug for Msg<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.record.state.render(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{message::Interpolated, template::Template, value::Value};

    #[derive(Debug)]
    struct Failed;

    impl fmt::Display for Failed {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("failed")
        }
    }

    impl Error for Failed {}

    #[test]
    fn msg_uses_default_formatter() {
        let args = [Value::from(3)];
        let record = Record::new(
            Level::Warn,
            EventId::new(2),
            None,
            LogValues::new(Interpolated::new(Template::new("retry {0}"), &args)),
        );

        assert_eq!("retry 3", record.msg().to_string());
        assert_eq!(Level::Warn, record.level());
        assert_eq!(2, record.event_id().id());
        assert!(record.error().is_none());
    }

    #[test]
    fn msg_uses_custom_formatter() {
        fn with_error(
            state: &LogValues,
            error: Option<&(dyn Error + 'static)>,
            f: &mut fmt::Formatter,
        ) -> fmt::Result {
            write!(f, "{}", state)?;

            if let Some(error) = error {
                write!(f, " ({})", error)?;
            }

            Ok(())
        }

        let args = [Value::from("disk")];
        let err = Failed;
        let record = Record::new(
            Level::Error,
            EventId::default(),
            Some(&err),
            LogValues::new(Interpolated::new(Template::new("writing to {0}"), &args)),
        )
        .with_formatter(with_error);

        assert_eq!("writing to disk (failed)", record.msg().to_string());
    }

    #[test]
    fn debug_shows_error_text() {
        let args: [Value; 0] = [];
        let err = Failed;
        let record = Record::new(
            Level::Critical,
            EventId::new(1).with_name("boot"),
            Some(&err),
            LogValues::new(Interpolated::new(Template::new("down"), &args)),
        );

        let debug = format!("{:?}", record);

        assert!(debug.contains("\"CRITICAL\""), "{}", debug);
        assert!(debug.contains("Some(failed)"), "{}", debug);
        assert!(debug.contains("\"{OriginalFormat}\": \"down\""), "{}", debug);
    }
}
