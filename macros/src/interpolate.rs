use proc_macro2::TokenStream;
use syn::{spanned::Spanned, LitStr};

use crate::template::{Capture, Part, Template};

pub struct ExpandTokens {
    pub receiver: TokenStream,
    pub input: TokenStream,
}

pub fn expand_tokens(opts: ExpandTokens) -> Result<TokenStream, syn::Error> {
    let span = opts.input.span();

    let lit = syn::parse2::<LitStr>(opts.input)
        .map_err(|_| syn::Error::new(span, "expected a template string literal"))?;

    let template = Template::parse(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;

    let receiver = &opts.receiver;
    let positional = LitStr::new(&template.to_positional(), lit.span());

    let args = template.parts.iter().filter_map(|part| match part {
        Part::Hole {
            expr,
            capture: Capture::Default,
        } => Some(quote!(#receiver::__private::capture(&#expr))),
        Part::Hole {
            expr,
            capture: Capture::Debug,
        } => Some(quote!(#receiver::__private::capture_debug(&#expr))),
        Part::Hole {
            expr,
            capture: Capture::Display,
        } => Some(quote!(#receiver::__private::capture_display(&#expr))),
        Part::Text(_) => None,
    });

    Ok(quote!(
        #receiver::Interpolated {
            template: #receiver::Template::new(#positional),
            args: &[#(#args),*],
        }
    ))
}
