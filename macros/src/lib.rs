/*!
Implementation details for the `interlog::interpolate!` macro.

This crate is not intended to be consumed directly.
*/

extern crate proc_macro;

#[macro_use]
extern crate quote;

use proc_macro2::TokenStream;

mod interpolate;
mod template;

/**
Build an interpolated message from a template string literal.

Holes in the template are identifiers or field accesses in scope, like `{a}` or `{self.count}`. They're captured by reference and replaced by their position, so `"message: {a}, {b}"` becomes the template `"message: {0}, {1}"` with the arguments `a` and `b`. A hole written as `{a:%}` captures its `Display` representation, and `{a:?}` captures its `Debug` representation.
*/
#[proc_macro]
pub fn interpolate(item: proc_macro::TokenStream) -> proc_macro::TokenStream {
    interpolate::expand_tokens(interpolate::ExpandTokens {
        receiver: quote!(interlog),
        input: TokenStream::from(item),
    })
    .unwrap_or_compile_error()
}

trait ResultToTokens {
    fn unwrap_or_compile_error(self) -> proc_macro::TokenStream;
}

impl ResultToTokens for Result<TokenStream, syn::Error> {
    fn unwrap_or_compile_error(self) -> proc_macro::TokenStream {
        proc_macro::TokenStream::from(match self {
            Ok(item) => item,
            Err(err) => err.into_compile_error(),
        })
    }
}
