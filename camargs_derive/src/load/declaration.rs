use crate::load::incompatible_error;
use crate::model::{
    DeclarationType, DeriveDeclaration, DeriveValue, IntermediateAttributes, OptNaming,
};
use quote::{quote, ToTokens};

const KINDS: [&str; 3] = ["flag", "string", "integer"];

impl TryFrom<&syn::Field> for DeriveDeclaration {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - declarations must be named fields.",
                ))
            }
        };
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        let field_name_str = format!("{field_name}");

        let kinds: Vec<&str> = KINDS
            .iter()
            .copied()
            .filter(|kind| attributes.singletons.contains(*kind))
            .collect();

        if let [left, right, ..] = kinds.as_slice() {
            return Err(incompatible_error(
                "declaration",
                &field_name,
                format!("#[camargs({left})]"),
                format!("#[camargs({right})]"),
            ));
        }

        let explicit_kind = kinds.first().copied();
        let help = attributes.first("help");
        let default = attributes.first("default");

        let (kind, declaration_type) = match type_name(&value.ty).as_deref() {
            Some("Opt") => {
                attributes.check_known(
                    &field_name,
                    &["flag", "string", "integer", "no_long"],
                    &["short", "long", "alias", "help", "default"],
                )?;
                let naming = match (
                    attributes.singletons.contains("no_long"),
                    attributes.first("long"),
                    attributes.first("short"),
                ) {
                    (true, Some(_), _) => {
                        return Err(incompatible_error(
                            "declaration",
                            &field_name,
                            "#[camargs(no_long)]",
                            "#[camargs(long = ..)]",
                        ));
                    }
                    (true, None, Some(short)) => OptNaming::Short(short),
                    (true, None, None) => {
                        return Err(syn::Error::new(
                            field_name.span(),
                            format!("Invalid - field '{field_name}' uses `#[camargs(no_long)]` without `#[camargs(short = ..)]`."),
                        ));
                    }
                    (false, long, short) => {
                        let long = long.unwrap_or_else(|| DeriveValue {
                            tokens: quote! { #field_name_str },
                        });

                        match short {
                            Some(short) => OptNaming::Both { long, short },
                            None => OptNaming::Long(long),
                        }
                    }
                };

                (
                    explicit_kind.unwrap_or("flag"),
                    DeclarationType::Opt {
                        naming,
                        aliases: attributes.all("alias"),
                    },
                )
            }
            Some("Positional") => {
                attributes.check_known(
                    &field_name,
                    &["string", "integer", "required"],
                    &["name", "help", "default"],
                )?;
                let name = attributes.first("name").unwrap_or_else(|| DeriveValue {
                    tokens: quote! { #field_name_str },
                });

                (
                    explicit_kind.unwrap_or("string"),
                    DeclarationType::Positional {
                        name,
                        required: attributes.singletons.contains("required"),
                    },
                )
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &value.ty,
                    format!(
                        "Invalid - field '{field_name}' must be either `Opt` or `Positional`, found `{}`.",
                        value.ty.to_token_stream()
                    ),
                ));
            }
        };
        if default.is_some() && kind == "flag" {
            return Err(incompatible_error(
                "declaration",
                &field_name,
                "#[camargs(flag)]",
                "#[camargs(default = ..)]",
            ));
        }

        let kind = match kind {
            "flag" => quote! { ::camargs::Kind::Flag },
            "integer" => quote! { ::camargs::Kind::Integer },
            _ => quote! { ::camargs::Kind::String },
        };

        Ok(DeriveDeclaration {
            field_name,
            kind: DeriveValue { tokens: kind },
            help,
            default,
            declaration_type,
        })
    }
}

// The final path segment of the field type, ex: `camargs::Opt` -> "Opt".
fn type_name(ty: &syn::Type) -> Option<String> {
    match ty {
        syn::Type::Path(path) => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proc_macro2::{Literal, Span};
    use syn::parse_quote;

    fn field(named: syn::FieldsNamed) -> syn::Field {
        named.named.into_iter().next().unwrap()
    }

    #[test]
    fn construct_opt_default() {
        // Setup
        let value = field(parse_quote! {
            { verbose: Opt }
        });

        // Execute
        let declaration = DeriveDeclaration::try_from(&value).unwrap();

        // Verify
        assert_eq!(
            declaration,
            DeriveDeclaration {
                field_name: ident("verbose"),
                kind: DeriveValue {
                    tokens: quote! { ::camargs::Kind::Flag },
                },
                help: None,
                default: None,
                declaration_type: DeclarationType::Opt {
                    naming: OptNaming::Long(DeriveValue {
                        tokens: Literal::string("verbose").into_token_stream(),
                    }),
                    aliases: vec![],
                },
            }
        );
    }

    #[test]
    fn construct_opt() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(string, short = 'f', long = "first-value", alias = "first", alias = 'g', help = "The first.", default = "none")]
                first: camargs::Opt
            }
        });

        // Execute
        let declaration = DeriveDeclaration::try_from(&value).unwrap();

        // Verify
        assert_eq!(
            declaration,
            DeriveDeclaration {
                field_name: ident("first"),
                kind: DeriveValue {
                    tokens: quote! { ::camargs::Kind::String },
                },
                help: Some(DeriveValue {
                    tokens: Literal::string("The first.").into_token_stream(),
                }),
                default: Some(DeriveValue {
                    tokens: Literal::string("none").into_token_stream(),
                }),
                declaration_type: DeclarationType::Opt {
                    naming: OptNaming::Both {
                        long: DeriveValue {
                            tokens: Literal::string("first-value").into_token_stream(),
                        },
                        short: DeriveValue {
                            tokens: Literal::character('f').into_token_stream(),
                        },
                    },
                    aliases: vec![
                        DeriveValue {
                            tokens: Literal::string("first").into_token_stream(),
                        },
                        DeriveValue {
                            tokens: Literal::character('g').into_token_stream(),
                        },
                    ],
                },
            }
        );
    }

    #[test]
    fn construct_opt_short_only() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(string, short = 'f', no_long, alias = "first")]
                first: Opt
            }
        });

        // Execute
        let declaration = DeriveDeclaration::try_from(&value).unwrap();

        // Verify
        assert_eq!(
            declaration.declaration_type,
            DeclarationType::Opt {
                naming: OptNaming::Short(DeriveValue {
                    tokens: Literal::character('f').into_token_stream(),
                }),
                aliases: vec![DeriveValue {
                    tokens: Literal::string("first").into_token_stream(),
                }],
            }
        );
    }

    #[test]
    fn construct_opt_no_long_with_long() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(no_long, long = "abc", short = 'a')]
                abc: Opt
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - declaration cannot be both `#[camargs(no_long)]` and `#[camargs(long = ..)]`."
        );
    }

    #[test]
    fn construct_opt_no_long_without_short() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(no_long)]
                abc: Opt
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - field 'abc' uses `#[camargs(no_long)]` without `#[camargs(short = ..)]`."
        );
    }

    #[test]
    fn construct_positional_no_long() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(no_long)]
                name: Positional
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute `#[camargs(no_long)]`."
        );
    }

    #[test]
    fn construct_positional_default() {
        // Setup
        let value = field(parse_quote! {
            { name: Positional }
        });

        // Execute
        let declaration = DeriveDeclaration::try_from(&value).unwrap();

        // Verify
        assert_eq!(
            declaration,
            DeriveDeclaration {
                field_name: ident("name"),
                kind: DeriveValue {
                    tokens: quote! { ::camargs::Kind::String },
                },
                help: None,
                default: None,
                declaration_type: DeclarationType::Positional {
                    name: DeriveValue {
                        tokens: Literal::string("name").into_token_stream(),
                    },
                    required: false,
                },
            }
        );
    }

    #[test]
    fn construct_positional() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(integer, required, name = "AGE", default = 0)]
                age: Positional
            }
        });

        // Execute
        let declaration = DeriveDeclaration::try_from(&value).unwrap();

        // Verify
        assert_eq!(
            declaration.kind,
            DeriveValue {
                tokens: quote! { ::camargs::Kind::Integer },
            }
        );
        assert_eq!(
            declaration.default,
            Some(DeriveValue {
                tokens: Literal::i32_unsuffixed(0).into_token_stream(),
            })
        );
        assert_eq!(
            declaration.declaration_type,
            DeclarationType::Positional {
                name: DeriveValue {
                    tokens: Literal::string("AGE").into_token_stream(),
                },
                required: true,
            }
        );
    }

    #[test]
    fn construct_multiple_kinds() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(flag, integer)]
                level: Opt
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - declaration cannot be both `#[camargs(flag)]` and `#[camargs(integer)]`."
        );
    }

    #[test]
    fn construct_flag_default() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(default = "x")]
                verbose: Opt
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - declaration cannot be both `#[camargs(flag)]` and `#[camargs(default = ..)]`."
        );
    }

    #[test]
    fn construct_positional_flag() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(flag)]
                name: Positional
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute `#[camargs(flag)]`."
        );
    }

    #[test]
    fn construct_positional_short() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(short = 'n')]
                name: Positional
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute `#[camargs(short = ..)]`."
        );
    }

    #[test]
    fn construct_opt_required() {
        // Setup
        let value = field(parse_quote! {
            {
                #[camargs(string, required)]
                path: Opt
            }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - unknown attribute `#[camargs(required)]`."
        );
    }

    #[test]
    fn construct_invalid_type() {
        // Setup
        let value = field(parse_quote! {
            { count: u32 }
        });

        // Execute
        let error = DeriveDeclaration::try_from(&value).unwrap_err();

        // Verify
        assert_eq!(
            error.to_string(),
            "Invalid - field 'count' must be either `Opt` or `Positional`, found `u32`."
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
