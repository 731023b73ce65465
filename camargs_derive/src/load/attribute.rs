use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut attributes = IntermediateAttributes::default();

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream();
                    attributes
                        .pairs
                        .entry(left.to_string())
                        .or_default()
                        .push(DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        });
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    attributes.singletons.insert(path.to_token_stream().to_string());
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(attributes)
    }
}

impl IntermediateAttributes {
    /// Merge all the `#[camargs(..)]` attributes, ignoring any others.
    pub(crate) fn load(attrs: &[syn::Attribute]) -> Result<Self, syn::Error> {
        let mut attributes = IntermediateAttributes::default();

        for attribute in attrs {
            if attribute.path().is_ident("camargs") {
                let IntermediateAttributes { singletons, pairs } =
                    IntermediateAttributes::try_from(attribute)?;
                attributes.singletons.extend(singletons);

                for (key, values) in pairs {
                    attributes.pairs.entry(key).or_default().extend(values);
                }
            }
        }

        Ok(attributes)
    }

    /// The first value assigned to `key`.
    pub(crate) fn first(&self, key: &str) -> Option<DeriveValue> {
        self.pairs
            .get(key)
            .and_then(|values| values.first())
            .cloned()
    }

    /// Every value assigned to `key`, in order.
    pub(crate) fn all(&self, key: &str) -> Vec<DeriveValue> {
        self.pairs.get(key).cloned().unwrap_or_default()
    }

    /// Reject any attribute not amongst the known singletons and pairs.
    pub(crate) fn check_known(
        &self,
        span: &syn::Ident,
        singletons: &[&str],
        pairs: &[&str],
    ) -> Result<(), syn::Error> {
        let mut unknown: Vec<String> = self
            .singletons
            .iter()
            .filter(|s| !singletons.contains(&s.as_str()))
            .map(|s| format!("#[camargs({s})]"))
            .chain(
                self.pairs
                    .keys()
                    .filter(|p| !pairs.contains(&p.as_str()))
                    .map(|p| format!("#[camargs({p} = ..)]")),
            )
            .collect();
        unknown.sort();

        match unknown.first() {
            Some(attribute) => Err(syn::Error::new(
                span.span(),
                format!("Invalid - unknown attribute `{attribute}`."),
            )),
            None => Ok(()),
        }
    }
}
