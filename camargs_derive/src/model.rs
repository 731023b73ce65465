use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The raw contents of the `#[camargs(..)]` attributes on a struct or field.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

/// The primary Cli spellings of a derived option.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum OptNaming {
    Long(DeriveValue),
    Short(DeriveValue),
    Both {
        long: DeriveValue,
        short: DeriveValue,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum DeclarationType {
    Opt {
        naming: OptNaming,
        aliases: Vec<DeriveValue>,
    },
    Positional {
        name: DeriveValue,
        required: bool,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveDeclaration {
    pub field_name: syn::Ident,
    pub kind: DeriveValue,
    pub help: Option<DeriveValue>,
    pub default: Option<DeriveValue>,
    pub declaration_type: DeclarationType,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program: DeriveValue,
    pub about: Option<DeriveValue>,
    pub declarations: Vec<DeriveDeclaration>,
}
