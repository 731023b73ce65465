use std::env;

use crate::api::{Opt, Positional};
use crate::matcher::{Action, Matcher};
use crate::model::Outcome;
use crate::parser::interface::UserInterface;
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build).
pub struct GeneralParser<'a> {
    program: String,
    options: Vec<&'a mut Opt>,
    positionals: Vec<&'a mut Positional>,
    printer: Printer,
    user_interface: Box<dyn UserInterface>,
}

impl<'a> GeneralParser<'a> {
    pub(crate) fn new(
        program: impl Into<String>,
        options: Vec<&'a mut Opt>,
        positionals: Vec<&'a mut Positional>,
        printer: Printer,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            options,
            positionals,
            printer,
            user_interface,
        }
    }

    /// Run the command line parser against the input tokens.
    /// The first token is the program invocation name, and is never matched.
    ///
    /// Tokens are matched in order, mutating the declarations as they are found.
    /// Parsing stops at the first error, which is reported to the [`UserInterface`] and returned as [`Outcome::Failed`].
    /// Declarations matched before the error remain matched.
    ///
    /// If the help switch (`-h` or `--help`) is encountered, the parser will display the help message and return [`Outcome::HelpRequested`].
    /// The help switch may be shadowed by declaring an option with the same name.
    ///
    /// ### Example
    /// ```
    /// # use camargs_builder as camargs;
    /// use camargs::{CommandLineParser, Kind, Opt, Outcome, ParseError};
    ///
    /// let mut verbose = Opt::new("verbose", 'v', Kind::Flag);
    /// let parser = CommandLineParser::new("program")
    ///     .add_option(&mut verbose)
    ///     .build();
    ///
    /// let outcome = parser.parse_tokens(&["program", "--verbose", "--bogus"]);
    ///
    /// assert_eq!(outcome, Outcome::Failed(ParseError::UnknownOption("bogus".to_string())));
    /// assert!(verbose.found());
    /// ```
    pub fn parse_tokens(self, tokens: &[&str]) -> Outcome {
        let GeneralParser {
            program,
            mut options,
            mut positionals,
            printer,
            user_interface,
        } = self;

        match Matcher::new(&mut options, &mut positionals).consume(tokens) {
            Ok(Action::Complete) => Outcome::Success,
            Ok(Action::PrintHelp) => {
                printer.print_help(&program, &*user_interface);
                Outcome::HelpRequested
            }
            Err((index, parse_error)) => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Parse failed at token {index}: {parse_error:?}.");
                }

                // The context excludes the program name.
                let context = ErrorContext::new(
                    index.saturating_sub(1),
                    tokens.get(1..).unwrap_or_default(),
                );
                user_interface.print_error(format!("{program}: {parse_error}"));
                user_interface.print_error_context(context);

                if parse_error.suggests_help() {
                    user_interface.print_error(format!("See '{program} --help'."));
                }

                Outcome::Failed(parse_error)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// If the parser encounters an error, it will exit with error code `1` (via [`std::process::exit`]).
    /// If the help switch is encountered, it will display the help message and exit with error code `0`.
    /// Otherwise, the declarations are populated and control returns to the caller.
    pub fn parse(self) {
        let command_input: Vec<String> = env::args().collect();
        let outcome = self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        );

        if !outcome.proceed() {
            std::process::exit(outcome.exit_code());
        }
    }
}
