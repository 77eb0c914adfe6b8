/*!
Free functions for logging interpolated messages.

Each function accepts an optional logger and an optional message and fails with [`Error::MissingArgument`] when either is absent. The check happens before anything is done with the logger, so a failed call never produces a record.
*/

use core::error::Error as StdError;

use interlog_core::{
    error::Error, event_id::EventId, level::Level, logger::Logger, message::Interpolated,
    record::Record, values::LogValues,
};

/**
Log an interpolated message at a given level.

This is the canonical entry point that all others forward to. The logger receives exactly one [`Record`] carrying the level, event id, error, and the message's [`LogValues`]. No filtering is done here; a logger that wants to drop some levels checks [`Record::level`] itself.

```
use interlog::{interpolate, Level};

let logger = interlog::from_fn(|record| {
    assert_eq!(Level::Warn, record.level());
    assert_eq!(7, record.event_id().id());
});

let attempt = 3;

interlog::log(Some(&logger), Level::Warn, 7, None, interpolate!("retrying ({attempt})"))?;
# Ok::<(), interlog::Error>(())
```

# Errors

If `logger` is `None` this returns [`Error::MissingArgument`] naming `"logger"`. Otherwise, if `message` is `None` it names `"message"`.
*/
pub fn log<'a, L: Logger + ?Sized>(
    logger: Option<&L>,
    level: Level,
    event_id: impl Into<EventId>,
    error: Option<&'a (dyn StdError + 'static)>,
    message: impl Into<Option<Interpolated<'a>>>,
) -> Result<(), Error> {
    let logger = logger.ok_or(Error::missing("logger"))?;
    let message = message.into().ok_or(Error::missing("message"))?;

    dispatch(logger, level, event_id.into(), error, message);

    Ok(())
}

pub(crate) fn dispatch<'a, L: Logger + ?Sized>(
    logger: &L,
    level: Level,
    event_id: EventId,
    error: Option<&'a (dyn StdError + 'static)>,
    message: Interpolated<'a>,
) {
    logger.log(&Record::new(level, event_id, error, LogValues::new(message)));
}

macro_rules! level_fns {
    ($(
        $level:ident ($name:literal) => $msg:ident, $err:ident, $id:ident, $id_err:ident;
    )*) => {
        $(
            #[doc = concat!("Log a message at the `", $name, "` level.")]
            pub fn $msg<'a, L: Logger + ?Sized>(
                logger: Option<&L>,
                message: impl Into<Option<Interpolated<'a>>>,
            ) -> Result<(), Error> {
                $err(logger, None, message)
            }

            #[doc = concat!("Log a message and error at the `", $name, "` level.")]
            pub fn $err<'a, L: Logger + ?Sized>(
                logger: Option<&L>,
                error: Option<&'a (dyn StdError + 'static)>,
                message: impl Into<Option<Interpolated<'a>>>,
            ) -> Result<(), Error> {
                $id_err(logger, EventId::default(), error, message)
            }

            #[doc = concat!("Log a message with an event id at the `", $name, "` level.")]
            pub fn $id<'a, L: Logger + ?Sized>(
                logger: Option<&L>,
                event_id: impl Into<EventId>,
                message: impl Into<Option<Interpolated<'a>>>,
            ) -> Result<(), Error> {
                $id_err(logger, event_id, None, message)
            }

            #[doc = concat!("Log a message and error with an event id at the `", $name, "` level.")]
            pub fn $id_err<'a, L: Logger + ?Sized>(
                logger: Option<&L>,
                event_id: impl Into<EventId>,
                error: Option<&'a (dyn StdError + 'static)>,
                message: impl Into<Option<Interpolated<'a>>>,
            ) -> Result<(), Error> {
                log(logger, Level::$level, event_id, error, message)
            }
        )*
    };
}

level_fns! {
    Trace ("trace") => log_trace, log_trace_err, log_trace_id, log_trace_id_err;
    Debug ("debug") => log_debug, log_debug_err, log_debug_id, log_debug_id_err;
    Info ("info") => log_info, log_info_err, log_info_id, log_info_id_err;
    Warn ("warn") => log_warn, log_warn_err, log_warn_id, log_warn_id_err;
    Error ("error") => log_error, log_error_err, log_error_id, log_error_id_err;
    Critical ("critical") => log_critical, log_critical_err, log_critical_id, log_critical_id_err;
}
