/*!
The [`LogValues`] type.

[`LogValues`] is the structured state passed to a [`crate::logger::Logger`] with each record. It's a view over an [`Interpolated`] message that pairs the name of each hole with its argument, followed by a final entry holding the template itself:

```text
"message: {0}, {1}" with ["text", 42]

0                => "text"
1                => 42
{OriginalFormat} => "message: {0}, {1}"
```

Structured loggers can enumerate these pairs through [`Props`], while text loggers can render the message through [`fmt::Display`].
*/

use core::{fmt, ops::ControlFlow, slice};

use crate::{
    message::Interpolated,
    props::Props,
    template::{Part, Parts, Render, Template},
    value::Value,
    well_known::KEY_ORIGINAL_FORMAT,
};

/**
The structured state of a log record.
*/
#[derive(Clone, Copy)]
pub struct LogValues<'a> {
    message: Interpolated<'a>,
}

impl<'a> LogValues<'a> {
    pub const fn new(message: Interpolated<'a>) -> Self {
        LogValues { message }
    }

    pub const fn message(&self) -> Interpolated<'a> {
        self.message
    }

    pub const fn template(&self) -> Template<'a> {
        self.message.template
    }

    pub const fn args(&self) -> &'a [Value<'a>] {
        self.message.args
    }

    /**
    The raw template text, as stored under [`KEY_ORIGINAL_FORMAT`].
    */
    pub const fn original_format(&self) -> &'a str {
        self.message.template.as_str()
    }

    /**
    Iterate over the hole names and their arguments in order.

    This doesn't include the trailing [`KEY_ORIGINAL_FORMAT`] entry.
    */
    pub fn iter(&self) -> Iter<'a> {
        Iter {
            holes: self.message.template.parts(),
            args: self.message.args.iter(),
        }
    }

    /**
    The number of entries, including the trailing [`KEY_ORIGINAL_FORMAT`] entry.
    */
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().count() + 1
    }

    pub fn render(&self) -> Render<'a> {
        Render::new(self.message.template, self.message.args)
    }
}

/**
An iterator over the hole names and arguments of [`LogValues`].
*/
pub struct Iter<'a> {
    holes: Parts<'a>,
    args: slice::Iter<'a, Value<'a>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.holes.next()? {
                Part::Hole { name, .. } => return Some((name, self.args.next()?)),
                Part::Text(_) => continue,
            }
        }
    }
}

impl<'a> Props for LogValues<'a> {
    fn for_each<'kv, F: FnMut(&'kv str, Value<'kv>) -> ControlFlow<()>>(
        &'kv self,
        mut for_each: F,
    ) -> ControlFlow<()> {
        for (name, value) in self.iter() {
            for_each(name, value.by_ref())?;
        }

        for_each(KEY_ORIGINAL_FORMAT, Value::from(self.original_format()))
    }
}

impl<'a> fmt::Debug for LogValues<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();

        for (name, value) in self.iter() {
            map.entry(&name, value);
        }

        map.entry(&KEY_ORIGINAL_FORMAT, &self.original_format());

        map.finish()
    }
}

impl<'a> fmt::Display for LogValues<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.render(), f)
    }
}

#[cfg(feature = "serde")]
impl<'a> serde::Serialize for LogValues<'a> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap as _;

        let mut map = serializer.serialize_map(None)?;

        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }

        map.serialize_entry(KEY_ORIGINAL_FORMAT, self.original_format())?;

        map.end()
    }
}
