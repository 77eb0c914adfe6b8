/*!
The [`Empty`] type.

An [`Empty`] can be used as a default in place of a more meaningful implementation. For [`crate::logger::Logger`]s, it discards every record and reports every level as disabled.
*/

/**
A type that behaves like a default, empty, null value.
*/
#[derive(Default, Debug, Clone, Copy)]
pub struct Empty;
