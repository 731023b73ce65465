use crate::model::{DeriveDeclaration, DeriveParser, DeriveValue, IntermediateAttributes};
use quote::quote;

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = IntermediateAttributes::load(&value.attrs)?;
        attributes.check_known(&value.ident, &[], &["program", "about"])?;

        let program = attributes.first("program").unwrap_or_else(|| DeriveValue {
            tokens: quote! { env!("CARGO_CRATE_NAME") },
        });
        let about = attributes.first("about");

        match &value.data {
            syn::Data::Struct(ds) => {
                let declarations = match ds {
                    syn::DataStruct {
                        fields: syn::Fields::Named(ref fields),
                        ..
                    } => fields
                        .named
                        .iter()
                        .map(DeriveDeclaration::try_from)
                        .collect::<Result<Vec<_>, _>>()?,
                    syn::DataStruct {
                        fields: syn::Fields::Unit,
                        ..
                    } => Vec::default(),
                    syn::DataStruct { .. } => {
                        return Err(syn::Error::new(
                            value.ident.span(),
                            "Invalid - declarations must be named fields.",
                        ));
                    }
                };

                Ok(DeriveParser {
                    struct_name: value.ident.clone(),
                    program,
                    about,
                    declarations,
                })
            }
            _ => Err(syn::Error::new(
                value.ident.span(),
                "Invalid - `Declarations` may only be derived on a struct.",
            )),
        }
    }
}
