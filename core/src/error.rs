/*!
The [`Error`] type.
*/

use thiserror::Error;

/**
An error returned when a logging call is made with invalid arguments.

These errors are programming mistakes in the caller. They're detected before the logger is touched.
*/
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /**
    A required argument was absent.
    */
    #[error("value cannot be absent (parameter `{0}`)")]
    MissingArgument(&'static str),
}

impl Error {
    /**
    Create an error for an absent argument with the given parameter name.
    */
    pub const fn missing(param: &'static str) -> Self {
        Error::MissingArgument(param)
    }

    /**
    Whether this error was caused by an invalid argument.
    */
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Error::MissingArgument(_) => true,
        }
    }

    /**
    The name of the parameter that caused this error.
    */
    pub fn param(&self) -> &'static str {
        match self {
            Error::MissingArgument(param) => *param,
        }
    }
}
