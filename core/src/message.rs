/*!
The [`Interpolated`] type.
*/

use core::fmt;

use crate::{template::Template, value::Value};

/**
A literal template along with the values interpolated into it.

An interpolated message is normally built by the `interpolate!` macro, which turns `"message: {a}, {b}"` into the template `"message: {0}, {1}"` and the arguments `[a, b]`. It can also be built directly:

```
use interlog_core::{message::Interpolated, template::Template, value::Value};

let msg = Interpolated {
    template: Template::new("message: {0}, {1}"),
    args: &[Value::from("text"), Value::from(42)],
};

assert_eq!("message: text, 42", msg.to_string());
```

There should be one argument for each hole in the template, in the order the holes appear. The number of holes isn't checked against the number of arguments; holes without an argument render as their raw text.
*/
#[derive(Clone, Copy)]
pub struct Interpolated<'a> {
    pub template: Template<'a>,
    pub args: &'a [Value<'a>],
}

impl<'a> Interpolated<'a> {
    pub const fn new(template: Template<'a>, args: &'a [Value<'a>]) -> Self {
        Interpolated { template, args }
    }

    pub const fn template(&self) -> Template<'a> {
        self.template
    }

    pub const fn args(&self) -> &'a [Value<'a>] {
        self.args
    }

    /**
    The number of holes in the template.

    For a well-formed message this is the same as the number of arguments.
    */
    pub fn hole_count(&self) -> usize {
        self.template.hole_count()
    }
}

impl<'a> fmt::Debug for Interpolated<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpolated")
            .field("template", &self.template)
            .field("args", &self.args)
            .finish()
    }
}

impl<'a> fmt::Display for Interpolated<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.template.render(self.args), f)
    }
}
