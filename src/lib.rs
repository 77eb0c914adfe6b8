/*!
Log interpolated messages as structured templates.

`interlog` lets you write log messages with inline interpolation while keeping the literal template apart from the values interpolated into it. A logger receives the template `"message: {0}, {1}"` and the arguments `["text", 42]` instead of the pre-rendered string `"message: text, 42"`, so it can group records by template, record each argument as a structured value, and skip rendering entirely when a level is disabled.

```
use interlog::{interpolate, LoggerExt};

let logger = interlog::from_fn(|record| {
    assert_eq!("message: {0}, {1}", record.state().original_format());
    assert_eq!("message: text, 42", record.msg().to_string());
});

let a = "text";
let b = 42;

logger.log_info(interpolate!("message: {a}, {b}"));
```

# Entry points

There are four shapes of entry point for each of the six [`Level`]s:

- `log_info(logger, message)`.
- `log_info_err(logger, error, message)`.
- `log_info_id(logger, event_id, message)`.
- `log_info_id_err(logger, event_id, error, message)`.

They're available as methods on any [`Logger`] through [`LoggerExt`], and as free functions that accept an optional logger and message, returning an [`Error`] if either is absent. All of them forward to [`log`], which makes exactly one call to [`Logger::log`]. Level filtering is left to the logger.

# Interpolated messages

The [`interpolate!`] macro builds an [`Interpolated`] message from a string literal. Holes are identifiers or field accesses, like `{a}` or `{self.count}`, captured through [`ToValue`]. Use `{a:%}` to capture a value using its `Display` implementation, or `{a:?}` to use its `Debug` implementation instead.

An [`Interpolated`] message can also be built directly from a [`Template`] and a slice of [`Value`]s.
*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate self as interlog;

mod adapt;
mod ext;
mod macro_hooks;

#[cfg(test)]
mod test_util;

pub use interlog_core::{
    empty, error, event_id, level, logger, message, props, record, template, value, values,
    well_known,
};

#[doc(inline)]
pub use interlog_core::{
    empty::Empty,
    error::Error,
    event_id::EventId,
    level::Level,
    logger::{from_fn, Logger},
    message::Interpolated,
    props::Props,
    record::Record,
    template::Template,
    value::{ToValue, Value},
    values::LogValues,
};

#[doc(inline)]
pub use interlog_macros::interpolate;

pub use self::{adapt::*, ext::LoggerExt};

#[doc(hidden)]
pub mod __private {
    pub use crate::macro_hooks::*;
}
