/*!
The [`Template`] type.

A template is the literal text of a log message with positional placeholders, like `"message: {0}, {1}"`. Keeping the template apart from its arguments lets log aggregation systems group records by template, and lets loggers defer rendering until they know a record will actually be written.

Templates are parsed lazily through [`Template::parts`]. The syntax is:

- `{{` and `}}` are escaped braces.
- `{name}` is a hole. A hole may carry an alignment or format after its name, like `{0,5}` or `{0:x}`; these are ignored when rendering.
- Any other brace is treated as text.

Holes bind to arguments by their order of occurrence, not by their name. The first hole is the first argument, the second hole is the second argument, and so on.
*/

use core::fmt;

use crate::value::Value;

/**
A log message template.
*/
#[derive(Clone, Copy)]
pub struct Template<'a>(&'a str);

impl<'a> fmt::Debug for Template<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl<'a> fmt::Display for Template<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl<'a, 'b> PartialEq<Template<'b>> for Template<'a> {
    fn eq(&self, other: &Template<'b>) -> bool {
        self.0 == other.0
    }
}

impl<'a> Eq for Template<'a> {}

impl<'a> PartialEq<str> for Template<'a> {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl<'a, 'b> PartialEq<&'b str> for Template<'a> {
    fn eq(&self, other: &&'b str) -> bool {
        self.0 == *other
    }
}

impl<'a> Template<'a> {
    pub const fn new(tpl: &'static str) -> Template<'a> {
        Template(tpl)
    }

    pub const fn new_ref(tpl: &'a str) -> Template<'a> {
        Template(tpl)
    }

    /**
    The raw text of the template, including its holes.
    */
    pub const fn as_str(&self) -> &'a str {
        self.0
    }

    pub fn parts(&self) -> Parts<'a> {
        Parts { rest: self.0 }
    }

    /**
    The names of each hole in the template, in order of occurrence.

    A name that appears in multiple holes is yielded once for each of them.
    */
    pub fn holes(&self) -> impl Iterator<Item = &'a str> {
        self.parts().filter_map(|part| match part {
            Part::Hole { name, .. } => Some(name),
            Part::Text(_) => None,
        })
    }

    pub fn hole_count(&self) -> usize {
        self.holes().count()
    }

    /**
    Render the template, filling holes with `args` by position.
    */
    pub fn render<'b>(&'b self, args: &'b [Value<'b>]) -> Render<'b> {
        Render::new(Template(self.0), args)
    }
}

/**
A fragment of a parsed [`Template`].
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part<'a> {
    /**
    A fragment of text, with any escaped braces unescaped.
    */
    Text(&'a str),
    /**
    A placeholder for an argument.

    The `raw` text is the full hole, including its braces.
    */
    Hole { name: &'a str, raw: &'a str },
}

/**
An iterator over the parts of a [`Template`].
*/
#[derive(Clone)]
pub struct Parts<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Parts<'a> {
    type Item = Part<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        let bytes = rest.as_bytes();

        match (bytes.first()?, bytes.get(1)) {
            // An escaped brace
            (b'{', Some(b'{')) | (b'}', Some(b'}')) => {
                self.rest = &rest[2..];
                Some(Part::Text(&rest[..1]))
            }
            (b'{', _) => match parse_hole(rest) {
                Some((name, len)) => {
                    self.rest = &rest[len..];
                    Some(Part::Hole {
                        name,
                        raw: &rest[..len],
                    })
                }
                // An unterminated hole is treated as text
                None => {
                    self.rest = &rest[1..];
                    Some(Part::Text(&rest[..1]))
                }
            },
            (b'}', _) => {
                self.rest = &rest[1..];
                Some(Part::Text(&rest[..1]))
            }
            _ => {
                let end = rest.find(['{', '}']).unwrap_or(rest.len());

                self.rest = &rest[end..];
                Some(Part::Text(&rest[..end]))
            }
        }
    }
}

// Parse a hole at the start of `input`, returning its name and its length including braces
fn parse_hole(input: &str) -> Option<(&str, usize)> {
    let inner_len = input[1..].find(['{', '}'])?;

    if input.as_bytes()[1 + inner_len] != b'}' {
        return None;
    }

    let inner = &input[1..1 + inner_len];
    let name = inner.split([',', ':']).next().unwrap_or("").trim();

    if name.is_empty() {
        return None;
    }

    Some((name, inner_len + 2))
}

/**
The result of calling [`Template::render`].

A `Render` implements [`fmt::Display`], and can also be written to a custom [`Write`] to control how holes are formatted.
*/
pub struct Render<'a> {
    tpl: Template<'a>,
    args: &'a [Value<'a>],
}

impl<'a> Render<'a> {
    pub const fn new(tpl: Template<'a>, args: &'a [Value<'a>]) -> Self {
        Render { tpl, args }
    }

    pub fn write(&self, mut writer: impl Write) -> fmt::Result {
        let mut args = self.args.iter();

        for part in self.tpl.parts() {
            match part {
                Part::Text(text) => writer.write_text(text)?,
                Part::Hole { name, raw } => match args.next() {
                    Some(value) => writer.write_hole_value(name, value.by_ref())?,
                    None => writer.write_hole_label(raw)?,
                },
            }
        }

        Ok(())
    }
}

/**
A writer that can format the parts of a rendered template.
*/
pub trait Write: fmt::Write {
    fn write_text(&mut self, text: &str) -> fmt::Result {
        self.write_str(text)
    }

    fn write_hole_value(&mut self, name: &str, value: Value) -> fmt::Result {
        let _ = name;

        self.write_fmt(format_args!("{}", value))
    }

    /**
    Write a hole that has no argument to fill it.
    */
    fn write_hole_label(&mut self, raw: &str) -> fmt::Result {
        self.write_str(raw)
    }
}

impl<'a, W: Write + ?Sized> Write for &'a mut W {
    fn write_text(&mut self, text: &str) -> fmt::Result {
        (**self).write_text(text)
    }

    fn write_hole_value(&mut self, name: &str, value: Value) -> fmt::Result {
        (**self).write_hole_value(name, value)
    }

    fn write_hole_label(&mut self, raw: &str) -> fmt::Result {
        (**self).write_hole_label(raw)
    }
}

impl<'a> Write for fmt::Formatter<'a> {
    fn write_hole_value(&mut self, _: &str, value: Value) -> fmt::Result {
        fmt::Display::fmt(&value, self)
    }
}

impl<'a> fmt::Display for Render<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

impl<'a> fmt::Debug for Render<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use fmt::Write as _;

        struct Escape<W>(W);

        impl<W: fmt::Write> fmt::Write for Escape<W> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                for c in s.escape_debug() {
                    self.0.write_char(c)?;
                }

                Ok(())
            }
        }

        f.write_char('"')?;
        write!(Escape(&mut *f), "{}", self)?;
        f.write_char('"')
    }
}
