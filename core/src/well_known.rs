/*!
Well-known keys in the structured state passed to loggers.
*/

/**
The key of the trailing entry in [`crate::values::LogValues`] that holds the positional template text.
*/
pub const KEY_ORIGINAL_FORMAT: &'static str = "{OriginalFormat}";
