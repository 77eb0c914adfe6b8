use core::error::Error as StdError;

use interlog_core::{event_id::EventId, level::Level, logger::Logger, message::Interpolated};

use crate::adapt::dispatch;

macro_rules! level_methods {
    ($(
        $level:ident ($name:literal) => $msg:ident, $err:ident, $id:ident, $id_err:ident;
    )*) => {
        $(
            #[doc = concat!("Log a message at the `", $name, "` level.")]
            fn $msg(&self, message: Interpolated) {
                self.$err(None, message)
            }

            #[doc = concat!("Log a message and error at the `", $name, "` level.")]
            fn $err(&self, error: Option<&(dyn StdError + 'static)>, message: Interpolated) {
                self.$id_err(EventId::default(), error, message)
            }

            #[doc = concat!("Log a message with an event id at the `", $name, "` level.")]
            fn $id(&self, event_id: impl Into<EventId>, message: Interpolated) {
                self.$id_err(event_id, None, message)
            }

            #[doc = concat!("Log a message and error with an event id at the `", $name, "` level.")]
            fn $id_err(
                &self,
                event_id: impl Into<EventId>,
                error: Option<&(dyn StdError + 'static)>,
                message: Interpolated,
            ) {
                self.log_interpolated(Level::$level, event_id, error, message)
            }
        )*
    };
}

/**
Methods for logging interpolated messages to any [`Logger`].

These are the same entry points as the free functions in the crate root, but since a `&self` and an [`Interpolated`] can't be absent, they can't fail.

```
use interlog::{interpolate, LoggerExt};

let logger = interlog::from_fn(|record| {
    println!("{}: {}", record.level(), record.msg());
});

let user = "Ferris";

logger.log_info_id(1, interpolate!("{user} signed in"));
```
*/
pub trait LoggerExt: Logger {
    /**
    Log an interpolated message at a given level.

    This is the method every other one forwards to.
    */
    fn log_interpolated(
        &self,
        level: Level,
        event_id: impl Into<EventId>,
        error: Option<&(dyn StdError + 'static)>,
        message: Interpolated,
    ) {
        dispatch(self, level, event_id.into(), error, message)
    }

    level_methods! {
        Trace ("trace") => log_trace, log_trace_err, log_trace_id, log_trace_id_err;
        Debug ("debug") => log_debug, log_debug_err, log_debug_id, log_debug_id_err;
        Info ("info") => log_info, log_info_err, log_info_id, log_info_id_err;
        Warn ("warn") => log_warn, log_warn_err, log_warn_id, log_warn_id_err;
        Error ("error") => log_error, log_error_err, log_error_id, log_error_id_err;
        Critical ("critical") => log_critical, log_critical_err, log_critical_id, log_critical_id_err;
    }
}

impl<L: Logger + ?Sized> LoggerExt for L {}
