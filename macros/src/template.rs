/*!
Compile-time string template parsing.

An interpolated template looks like `"message: {a}, {b:?}"`. Each hole names a place to capture, optionally followed by a format. The parsed template can be turned back into a positional template like `"message: {0}, {1}"` where each hole is replaced by its index.
*/

use std::{fmt, iter::Peekable, str::Chars};

use quote::ToTokens;
use syn::{Expr, ExprField, ExprPath};
use thiserror::Error;

/**
A parsed template.
*/
#[derive(Debug)]
pub struct Template {
    pub parts: Vec<Part>,
}

/**
A part of a parsed template.
*/
pub enum Part {
    /**
    A fragment of text, with any escaped braces unescaped.
    */
    Text(String),
    /**
    A replacement expression.
    */
    Hole { expr: Expr, capture: Capture },
}

/**
How the value of a hole is captured.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /**
    Capture through `ToValue`, like `{a}`.
    */
    Default,
    /**
    Capture through `Debug`, like `{a:?}`.
    */
    Debug,
    /**
    Capture through `Display`, like `{a:%}`.
    */
    Display,
}

/**
An error encountered while parsing a template.
*/
#[derive(Error, Debug)]
#[error("parsing failed: {reason}")]
pub struct Error {
    reason: String,
    #[source]
    source: Option<syn::Error>,
}

impl Error {
    fn incomplete_hole() -> Self {
        Error {
            reason: "unexpected end of input, expected `}`".to_owned(),
            source: None,
        }
    }

    fn unescaped_hole() -> Self {
        Error {
            reason: "`{` and `}` characters must be escaped as `{{` and `}}`".to_owned(),
            source: None,
        }
    }

    fn missing_expr() -> Self {
        Error {
            reason: "empty replacements (`{}`) aren't supported, put the replacement inside like `{some_value}`".to_owned(),
            source: None,
        }
    }

    fn parse_expr(expr: &str, err: syn::Error) -> Self {
        Error {
            reason: format!("failed to parse `{}` as an expression", expr),
            source: Some(err),
        }
    }

    fn unsupported_expr(expr: &str) -> Self {
        Error {
            reason: format!(
                "`{}` can't be interpolated, only identifiers and field accesses like `a` or `a.b` are supported",
                expr
            ),
            source: None,
        }
    }

    fn unsupported_format(format: &str) -> Self {
        Error {
            reason: format!(
                "unsupported format `{}`, use `{{a}}` to capture a value, `{{a:%}}` to capture its `Display` representation, or `{{a:?}}` to capture its `Debug` representation",
                format
            ),
            source: None,
        }
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Part::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Part::Hole { expr, capture } => f
                .debug_struct("Hole")
                .field("expr", &format_args!("`{}`", expr.to_token_stream()))
                .field("capture", capture)
                .finish(),
        }
    }
}

impl Template {
    /**
    Try to parse a template into its parts.

    The input is the value of a string literal, with any Rust escapes already processed.
    */
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut iter = input.chars().peekable();

        while let Some(c) = iter.next() {
            match c {
                // A `{` that's followed by another `{` is escaped
                // If it's followed by a different character then it's
                // the start of an interpolated expression
                '{' => {
                    if iter.peek() == Some(&'{') {
                        let _ = iter.next();
                        text.push('{');
                        continue;
                    }

                    if !text.is_empty() {
                        parts.push(Part::Text(std::mem::take(&mut text)));
                    }

                    parts.push(parse_hole(&mut iter)?);
                }
                // A `}` that's followed by another `}` is escaped
                // We should never see these in this parser unless they're escaped
                '}' => {
                    if iter.peek() == Some(&'}') {
                        let _ = iter.next();
                        text.push('}');
                        continue;
                    }

                    return Err(Error::unescaped_hole());
                }
                c => text.push(c),
            }
        }

        if !text.is_empty() {
            parts.push(Part::Text(text));
        }

        Ok(Template { parts })
    }

    /**
    The number of holes in the template.
    */
    #[cfg(test)]
    pub fn hole_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, Part::Hole { .. }))
            .count()
    }

    /**
    Build a positional template, where each hole is replaced by its index.

    Braces in text are escaped again, so the result can be parsed at runtime.
    */
    pub fn to_positional(&self) -> String {
        let mut positional = String::new();
        let mut index = 0usize;

        for part in &self.parts {
            match part {
                Part::Text(text) => {
                    for c in text.chars() {
                        match c {
                            '{' => positional.push_str("{{"),
                            '}' => positional.push_str("}}"),
                            c => positional.push(c),
                        }
                    }
                }
                Part::Hole { .. } => {
                    positional.push('{');
                    positional.push_str(&index.to_string());
                    positional.push('}');

                    index += 1;
                }
            }
        }

        positional
    }
}

// Parse a hole after its opening `{`, consuming its closing `}`
fn parse_hole(iter: &mut Peekable<Chars>) -> Result<Part, Error> {
    let mut hole = String::new();

    loop {
        match iter.next() {
            Some('}') => break,
            Some('{') => return Err(Error::unescaped_hole()),
            Some(c) => hole.push(c),
            None => return Err(Error::incomplete_hole()),
        }
    }

    // A `::` belongs to a path, not a format
    let (expr, format) = match hole.rsplit_once(':') {
        Some((expr, format)) if !expr.ends_with(':') => (expr.trim(), Some(format.trim())),
        _ => (hole.trim(), None),
    };

    if expr.is_empty() {
        return Err(Error::missing_expr());
    }

    let capture = match format {
        None => Capture::Default,
        Some("?") => Capture::Debug,
        Some("%") => Capture::Display,
        Some(format) => return Err(Error::unsupported_format(format)),
    };

    let parsed: Expr = syn::parse_str(expr).map_err(|e| Error::parse_expr(expr, e))?;

    if !is_place(&parsed) {
        return Err(Error::unsupported_expr(expr));
    }

    Ok(Part::Hole {
        expr: parsed,
        capture,
    })
}

// Whether an expression is an identifier, or a chain of field accesses on one
fn is_place(expr: &Expr) -> bool {
    match expr {
        Expr::Path(ExprPath {
            attrs, qself, path, ..
        }) => attrs.is_empty() && qself.is_none() && path.get_ident().is_some(),
        Expr::Field(ExprField { attrs, base, .. }) => attrs.is_empty() && is_place(base),
        _ => false,
    }
}
