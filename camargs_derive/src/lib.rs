//! Derive macro for the `camargs` command line parser.
//! This crate is re-exported via `camargs::derive`; depend on `camargs` rather than using it directly.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::parse_macro_input;

use crate::model::DeriveParser;

/// Derive the declarations of a command line parser from a struct of `Opt` and `Positional` fields.
///
/// Generates:
/// * `declare() -> Self`: the declarations, each unmatched.
/// * `command_line_parser<'a>() -> CommandLineParser<'a>`: the parser, with the `program` and `about`.
/// * `parse() -> Self`: parse the Cli arguments, exiting on error or help.
/// * `parse_tokens(&[&str]) -> (Self, Outcome)`: parse the input tokens, reporting the outcome.
/// * An implementation of `camargs::prelude::Declarations`, registering the fields in order.
///
/// ### Struct attributes
/// * `#[camargs(program = "name")]`: the program name (defaults to the crate name).
/// * `#[camargs(about = "..")]`: the description shown at the end of the help message.
///
/// ### `Opt` attributes
/// * `flag` (default), `string`, or `integer`: the kind of option.
/// * `short = 'c'`: the short name.
/// * `long = "name"`: the long name (defaults to the field name).
/// * `no_long`: omit the long name, leaving only `short`.
/// * `alias = "name"` or `alias = 'c'`: an alternate name, may be repeated.
/// * `help = ".."`: the help message.
/// * `default = ..`: the default value, not allowed for flags.
///
/// ### `Positional` attributes
/// * `string` (default) or `integer`: the kind of positional.
/// * `required`: the positional must be matched.
/// * `name = "name"`: the display name (defaults to the field name).
/// * `help = ".."`: the help message.
/// * `default = ..`: the default value.
#[proc_macro_derive(Declarations, attributes(camargs))]
pub fn declarations(input: TokenStream) -> TokenStream {
    let derive_input = parse_macro_input!(input as syn::DeriveInput);

    DeriveParser::try_from(derive_input)
        .and_then(TokenStream2::try_from)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
