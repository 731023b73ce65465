//! Derive Api for `camargs` configuration.
//!
//! ### Getting Started
//! Use the derive Api by starting with a declarations struct `S` of [`Opt`](crate::Opt) and [`Positional`](crate::Positional) fields, instrumented with `#[derive(Declarations)]`.
//! This generates:
//! * `S::declare() -> S`: the declarations, each unmatched.
//! * `S::command_line_parser<'a>() -> CommandLineParser<'a>`: the parser, before any declarations are registered.
//! * `S::parse() -> S`: parses the Cli arguments, exiting on error or help.
//! * `S::parse_tokens(&[&str]) -> (S, Outcome)`: parses the input tokens.
//! * An implementation of [`Declarations`](crate::prelude::Declarations), which registers each field in order.
//!
//! ```no_run
#![doc = include_str!("../demos/report_derived.rs")]
//! ```
//!
//! ### Parser Configuration
//! * `#[camargs(program = "name")]` sets the program name, defaulting to the crate name.
//! * `#[camargs(about = "..")]` sets the description shown at the end of the help message.
//!
//! ### Declaration Configuration
//! The long name of an `Opt`, and the name of a `Positional`, default to the field name.
//! ```ignore
//! #[derive(Declarations)]
//! struct Parameters {
//!     verbose: Opt,
//!     // the above generates:
//!     //  verbose: Opt::long("verbose", Kind::Flag)
//!
//!     #[camargs(integer, short = 'l', alias = "depth", default = 1, help = "How deep to go.")]
//!     level: Opt,
//!     // the above generates:
//!     //  level: Opt::new("level", 'l', Kind::Integer)
//!     //      .alias("depth")
//!     //      .help("How deep to go.")
//!     //      .default(1)
//!
//!     #[camargs(string, short = 'o', no_long, alias = "output")]
//!     output: Opt,
//!     // the above generates:
//!     //  output: Opt::short('o', Kind::String)
//!     //      .alias("output")
//!
//!     #[camargs(required, name = "NAME")]
//!     name: Positional,
//!     // the above generates:
//!     //  name: Positional::required("NAME", Kind::String)
//! }
//! ```
//!
//! `Opt` fields accept:
//! * `flag` (default), `string`, or `integer` for the [`Kind`](crate::Kind); only one may be used on the same field.
//! * `short = 'c'`, `long = "name"`, and any number of `alias = "name"` / `alias = 'c'`.
//! * `no_long`, which drops the default long name so that only `short = 'c'` (and any aliases) identify the option.
//! * `help = ".."` and `default = ..` (not allowed on a `flag`).
//!
//! `Positional` fields accept:
//! * `string` (default) or `integer` for the [`Kind`](crate::Kind).
//! * `required`, `name = "name"`, `help = ".."`, and `default = ..`.

pub use camargs_derive::*;
