/*!
The [`EventId`] type.
*/

use core::{fmt, hash};

/**
An application-defined identifier for a category of log record, independent of its level.

An event id is an integer with an optional name. Two event ids are equal when their integer ids are equal; names are only descriptive.
*/
#[derive(Clone, Copy, Default)]
pub struct EventId {
    id: i32,
    name: Option<&'static str>,
}

impl EventId {
    /**
    Create an event id without a name.
    */
    pub const fn new(id: i32) -> Self {
        EventId { id, name: None }
    }

    /**
    Give this event id a name.
    */
    pub const fn with_name(self, name: &'static str) -> Self {
        EventId {
            id: self.id,
            name: Some(name),
        }
    }

    pub const fn id(&self) -> i32 {
        self.id
    }

    pub const fn name(&self) -> Option<&'static str> {
        self.name
    }

    /**
    Whether this is the default event id of `0`.
    */
    pub const fn is_default(&self) -> bool {
        self.id == 0
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId::new(id)
    }
}

impl PartialEq for EventId {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventId {}

impl PartialEq<i32> for EventId {
    fn eq(&self, other: &i32) -> bool {
        self.id == *other
    }
}

impl hash::Hash for EventId {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventId")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => fmt::Display::fmt(&self.id, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zero() {
        let id = EventId::default();

        assert_eq!(0, id.id());
        assert_eq!(None, id.name());
        assert!(id.is_default());
    }

    #[test]
    fn eq_ignores_name() {
        assert_eq!(EventId::new(2), EventId::from(2).with_name("started"));
        assert_ne!(EventId::new(2), EventId::new(3));
        assert_eq!(EventId::new(7), 7);
    }

    #[test]
    fn display_prefers_name() {
        assert_eq!("2", EventId::new(2).to_string());
        assert_eq!("started", EventId::new(2).with_name("started").to_string());
    }
}
