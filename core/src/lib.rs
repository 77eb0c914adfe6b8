/*!
Core data model and logger abstraction for `interlog`.

This crate defines the values that flow between application code and a structured logger:

- [`message::Interpolated`]: a literal template along with the values interpolated into it.
- [`values::LogValues`]: the structured state handed to a logger, pairing placeholder names with their values.
- [`record::Record`]: a single request to log, carrying the [`level::Level`], [`event_id::EventId`], optional error, and state.
- [`logger::Logger`]: the abstraction that receives records.

Most applications should use the `interlog` crate instead of depending on this one directly.
*/

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate core;

pub mod empty;
pub mod error;
pub mod event_id;
pub mod level;
pub mod logger;
pub mod message;
pub mod props;
pub mod record;
pub mod template;
pub mod value;
pub mod values;
pub mod well_known;
