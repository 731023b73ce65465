//! `camargs` is a flat, declaration driven command line parser for Rust.
//!
//! A `camargs` Cli is made of exactly one level of *options* plus an ordered list of *positional arguments*.
//! We built `camargs` for programs which want a small, predictable Cli, without sub-commands or grammars.
//! Specifically, `camargs` prioritizes the following design concerns:
//! * *Explicit declarations*:
//! The caller owns every declaration, and registers it with the parser explicitly.
//! There is no hidden global registry; constructing a declaration never registers it.
//! * *Typed values*:
//! Every declaration has a [`Kind`], and its matched [`Value`] is a tagged union of that kind.
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Detailed yet basic UX*:
//! Help and error messages are derived from the declarations, with a caret pointing at the offending token.
//! We do not aim to support rich display configurations, such as colour output, shell completions, etc.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/report_derived.rs")]
//! ```
//! or equivalently via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/report.rs")]
//! ```
//!
//! Both of these generate the same Cli program:
//! ```console
//! $ report -h
//! usage: report [OPTIONS] name [age]
//!
//! positional arguments:
//!  name                 Who the report is for.
//!  age                  Their age, in years.
//!
//! options:
//!  -h, --help           Show this help message and exit.
//!  -f, --first FIRST    The first value to report. (aliases: --primary)
//!  --second SECOND      The second value to report. (aliases: -s)
//!  --third              Whether to include the third value. (aliases: --abc, -t)
//!
//! Reports on the values provided.
//!
//! $ report -tf x --second abc
//! report: argument '--second' expects an integer, got 'abc' instead.
//! -tf x --second abc
//!                ^
//!
//! $ report -ft x
//! report: option '-f' takes a value, so it must be last in a short option cluster.
//! -ft x
//! ^
//! See 'report --help'.
//! ```
//!
//! # Builder Api
//! Configure `camargs` by starting with a [`CommandLineParser`] and adding declarations.
//! There are two classes of declarations: [`Opt`] and [`Positional`].
//!
//! ### Options
//! An [`Opt`] is identified by a long name (`--name`), a short name (`-n`), or both.
//! Further names may be added via [`Opt::alias`]; the first registered option which matches a name wins.
//! * [`Kind::Flag`] options take no value; their presence alone is the signal.
//! * [`Kind::String`] and [`Kind::Integer`] options take the following token as their value.
//! The value token must not itself begin with `-`.
//!
//! Short options may be clustered (ex: `-abc`).
//! A value-taking short option is only legal as the final character of a cluster (ex: `-abl 3`).
//!
//! ### Positionals
//! A [`Positional`] binds to the bare tokens, in the order they are registered.
//! Required positionals must be registered before optional ones.
//! An optional positional which is not matched keeps its default (if any).
//!
//! ### Outcomes
//! [`GeneralParser::parse_tokens`] returns an [`Outcome`]:
//! * [`Outcome::Success`]: the declarations were matched.
//! * [`Outcome::HelpRequested`]: the help message was displayed (via `-h` or `--help`, unless shadowed by a declared option).
//! * [`Outcome::Failed`]: a [`ParseError`] was displayed; parsing stops at the first error.
//!
//! [`GeneralParser::parse`] runs against the Cli arguments, and exits the process unless the outcome is a success.
//!
//! ### Configuration errors
//! Invalid configurations (ex: a duplicate option name, or a required positional after an optional one) are reported as a [`ConfigError`] when the parser is built.
//!
//! # Features
//! * `tracing_debug`: emit `tracing::debug!` events while matching tokens and laying out the help message.
pub use camargs_builder::*;

pub mod derive;
