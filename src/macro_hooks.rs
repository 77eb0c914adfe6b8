use core::fmt;

use interlog_core::value::{ToValue, Value};

/**
Capture a hole written as `{a}`.
*/
pub fn capture<T: ToValue + ?Sized>(value: &T) -> Value {
    value.to_value()
}

/**
Capture a hole written as `{a:%}`.
*/
pub fn capture_display<T: fmt::Display>(value: &T) -> Value {
    Value::from_display(value)
}

/**
Capture a hole written as `{a:?}`.
*/
pub fn capture_debug<T: fmt::Debug>(value: &T) -> Value {
    Value::from_debug(value)
}
