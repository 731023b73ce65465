use crate::model::{DeclarationType, DeriveDeclaration, OptNaming};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveDeclaration {
    /// The field initializer, ex: `verbose: ::camargs::Opt::new("verbose", 'v', ::camargs::Kind::Flag)`.
    pub(crate) fn generate_declare(&self) -> TokenStream2 {
        let DeriveDeclaration {
            field_name,
            kind,
            help,
            default,
            declaration_type,
        } = self;
        let kind = &kind.tokens;

        let constructor = match declaration_type {
            DeclarationType::Opt { naming, aliases } => {
                let aliases = aliases.iter().map(|alias| &alias.tokens);
                let constructor = match naming {
                    OptNaming::Both { long, short } => {
                        let (long, short) = (&long.tokens, &short.tokens);
                        quote! { ::camargs::Opt::new(#long, #short, #kind) }
                    }
                    OptNaming::Long(long) => {
                        let long = &long.tokens;
                        quote! { ::camargs::Opt::long(#long, #kind) }
                    }
                    OptNaming::Short(short) => {
                        let short = &short.tokens;
                        quote! { ::camargs::Opt::short(#short, #kind) }
                    }
                };

                quote! { #constructor #( .alias(#aliases) )* }
            }
            DeclarationType::Positional { name, required } => {
                let name = &name.tokens;

                if *required {
                    quote! { ::camargs::Positional::required(#name, #kind) }
                } else {
                    quote! { ::camargs::Positional::optional(#name, #kind) }
                }
            }
        };
        let help = help.as_ref().map(|help| {
            let help = &help.tokens;
            quote! { .help(#help) }
        });
        let default = default.as_ref().map(|default| {
            let default = &default.tokens;
            quote! { .default(#default) }
        });

        quote! { #field_name: #constructor #help #default }
    }

    /// The registration against the parser under construction, ex: `.add_option(&mut self.verbose)`.
    pub(crate) fn generate_register(&self) -> TokenStream2 {
        let field_name = &self.field_name;

        match self.declaration_type {
            DeclarationType::Opt { .. } => quote! { .add_option(&mut self.#field_name) },
            DeclarationType::Positional { .. } => {
                quote! { .add_positional(&mut self.#field_name) }
            }
        }
    }
}
