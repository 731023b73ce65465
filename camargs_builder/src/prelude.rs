//! Traits which, typically, may be imported without concern: `use camargs::prelude::*`.
use crate::api::CommandLineParser;

/// Behaviour for a set of declarations to register themselves with a [`CommandLineParser`].
// Implemented by `#[derive(Declarations)]`.
pub trait Declarations<'a> {
    /// Add each declaration to the parser, in order.
    fn register(&'a mut self, parser: CommandLineParser<'a>) -> CommandLineParser<'a>;
}
