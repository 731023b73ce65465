use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::model::DeriveParser;

impl TryFrom<DeriveParser> for TokenStream2 {
    type Error = syn::Error;

    fn try_from(value: DeriveParser) -> Result<Self, Self::Error> {
        let DeriveParser {
            struct_name,
            program,
            about,
            declarations,
        } = value;
        let program = program.tokens;
        let about = about.map(|about| {
            let about = about.tokens;
            quote! { .about(#about) }
        });
        let declares = declarations
            .iter()
            .map(|declaration| declaration.generate_declare());
        let registers = declarations
            .iter()
            .map(|declaration| declaration.generate_register());

        Ok(quote! {
            impl #struct_name {
                #[doc = "Create the declarations, each unmatched."]
                pub fn declare() -> Self {
                    Self { #( #declares ),* }
                }

                #[doc = "Create the command line parser, before any declarations are registered."]
                pub fn command_line_parser<'a>() -> ::camargs::CommandLineParser<'a> {
                    ::camargs::CommandLineParser::new(#program) #about
                }

                #[doc = "Parse the declarations from the Cli arguments, exiting on error or help."]
                pub fn parse() -> Self {
                    let mut declarations = Self::declare();
                    let parser = ::camargs::prelude::Declarations::register(&mut declarations, Self::command_line_parser()).build();
                    parser.parse();
                    declarations
                }

                #[doc = "Parse the declarations from the input tokens, starting with the program name."]
                pub fn parse_tokens(tokens: &[&str]) -> (Self, ::camargs::Outcome) {
                    let mut declarations = Self::declare();
                    let parser = ::camargs::prelude::Declarations::register(&mut declarations, Self::command_line_parser()).build();
                    let outcome = parser.parse_tokens(tokens);
                    (declarations, outcome)
                }
            }

            impl<'a> ::camargs::prelude::Declarations<'a> for #struct_name {
                fn register(&'a mut self, parser: ::camargs::CommandLineParser<'a>) -> ::camargs::CommandLineParser<'a> {
                    parser #( #registers )*
                }
            }
        })
    }
}
