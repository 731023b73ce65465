mod core;
mod cursor;
mod model;

pub(crate) use self::core::Matcher;
pub(crate) use model::Action;
pub use model::ParseError;
