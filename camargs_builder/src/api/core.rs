use thiserror::Error;

use crate::api::{Alias, Opt, Positional};
use crate::model::{Kind, Value};
use crate::parser::{
    ArgumentParameter, ConsoleInterface, GeneralParser, OptionParameter, Printer, UserInterface,
};

/// A programmer error in the parser configuration.
///
/// Recorded when the offending declaration is added, and surfaced when the parser is built.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A long name or long alias which is the empty string.
    #[error("Cannot use an empty name for a parameter.")]
    EmptyName,

    /// Two options with the same primary long name.
    #[error("Cannot duplicate the option '--{0}'.")]
    DuplicateOption(String),

    /// A positional argument declared with [`Kind::Flag`].
    #[error("Positional argument '{0}' cannot be a flag.")]
    FlagPositional(String),

    /// A required positional argument added after an optional one.
    #[error("Required positional argument '{0}' cannot follow an optional positional argument.")]
    RequiredAfterOptional(String),

    /// A default which does not agree with the declared kind.
    #[error("Parameter '{name}' cannot take a default of {default:?} (it is declared as {kind}).")]
    InvalidDefault {
        /// The parameter's display name.
        name: String,
        /// The declared kind.
        kind: Kind,
        /// The offending default.
        default: Value,
    },
}

/// The command line parser configuration.
///
/// Declarations are owned by the caller and borrowed for the lifetime of the parser.
///
/// ### Example
/// ```
/// # use camargs_builder as camargs;
/// use camargs::{CommandLineParser, Outcome};
///
/// let parser = CommandLineParser::new("program")
///     // Configure with CommandLineParser::add_option and CommandLineParser::add_positional.
///     .build();
/// assert_eq!(parser.parse_tokens(&["program"]), Outcome::Success);
/// ```
pub struct CommandLineParser<'a> {
    program: String,
    about: Option<String>,
    options: Vec<&'a mut Opt>,
    positionals: Vec<&'a mut Positional>,
    deferred_error: Option<ConfigError>,
}

impl<'a> CommandLineParser<'a> {
    /// Create a command line parser.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            about: None,
            options: Vec::default(),
            positionals: Vec::default(),
            deferred_error: None,
        }
    }

    /// Document the about message for this command line parser.
    /// If repeated, only the final about message will apply.
    ///
    /// The about message is printed at the end of the help message.
    ///
    /// ### Example
    /// ```
    /// # use camargs_builder as camargs;
    /// use camargs::CommandLineParser;
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .about("--this will get discarded--")
    ///     .about("My program that does awesome stuff.  Check it out!")
    ///     .build();
    /// ```
    pub fn about(mut self, description: impl Into<String>) -> Self {
        self.about.replace(description.into());
        self
    }

    /// Add an option to the command line parser.
    ///
    /// The order of options determines the help message layout, as well as which option wins when names overlap (the first added).
    ///
    /// ### Example
    /// ```
    /// # use camargs_builder as camargs;
    /// use camargs::{CommandLineParser, Kind, Opt, Value};
    ///
    /// let mut first = Opt::short('f', Kind::String).alias("first");
    /// let parser = CommandLineParser::new("program")
    ///     .add_option(&mut first)
    ///     .build();
    ///
    /// parser.parse_tokens(&["program", "--first", "abc"]);
    ///
    /// assert!(first.found());
    /// assert_eq!(first.value(), Some(&Value::from("abc")));
    /// ```
    pub fn add_option(mut self, option: &'a mut Opt) -> Self {
        if self.deferred_error.is_none() {
            if let Err(error) = self.check_option(option) {
                self.deferred_error.replace(error);
            }
        }

        self.options.push(option);
        self
    }

    /// Add a positional argument to the command line parser.
    ///
    /// The order of positional arguments corresponds to their binding order during parsing.
    /// Required positional arguments must all be added before any optional ones.
    ///
    /// ### Example
    /// ```
    /// # use camargs_builder as camargs;
    /// use camargs::{CommandLineParser, Kind, Positional, Value};
    ///
    /// let mut a = Positional::required("a", Kind::Integer);
    /// let mut b = Positional::required("b", Kind::Integer);
    /// let parser = CommandLineParser::new("program")
    ///     .add_positional(&mut a)
    ///     .add_positional(&mut b)
    ///     .build();
    ///
    /// parser.parse_tokens(&["program", "1", "2"]);
    ///
    /// assert_eq!(a.value(), Some(&Value::Integer(1)));
    /// assert_eq!(b.value(), Some(&Value::Integer(2)));
    /// ```
    pub fn add_positional(mut self, positional: &'a mut Positional) -> Self {
        if self.deferred_error.is_none() {
            if let Err(error) = self.check_positional(positional) {
                self.deferred_error.replace(error);
            }
        }

        self.positionals.push(positional);
        self
    }

    fn check_option(&self, option: &Opt) -> Result<(), ConfigError> {
        let empty_alias = option
            .aliases()
            .iter()
            .any(|alias| matches!(alias, Alias::Long(name) if name.is_empty()));

        if option.name() == Some("") || empty_alias {
            return Err(ConfigError::EmptyName);
        }

        if let Some(name) = option.name() {
            if self.options.iter().any(|o| o.name() == Some(name)) {
                return Err(ConfigError::DuplicateOption(name.to_string()));
            }
        }

        check_default(option.display_name(), option.kind(), option.default_value())
    }

    fn check_positional(&self, positional: &Positional) -> Result<(), ConfigError> {
        if positional.name().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        if positional.kind() == Kind::Flag {
            return Err(ConfigError::FlagPositional(positional.name().to_string()));
        }

        if positional.is_required() && self.positionals.iter().any(|p| !p.is_required()) {
            return Err(ConfigError::RequiredAfterOptional(
                positional.name().to_string(),
            ));
        }

        check_default(
            positional.name().to_string(),
            positional.kind(),
            positional.default_value(),
        )
    }

    /// Build the command line parser against a custom [`UserInterface`].
    /// This finalizes the configuration and checks for errors (ex: a duplicated option name).
    ///
    /// ### Example
    /// ```
    /// # use camargs_builder as camargs;
    /// use camargs::{CommandLineParser, ConsoleInterface};
    ///
    /// let parser = CommandLineParser::new("program")
    ///     .build_with_interface(Box::new(ConsoleInterface::default()))
    ///     .unwrap();
    /// ```
    pub fn build_with_interface(
        self,
        user_interface: Box<dyn UserInterface>,
    ) -> Result<GeneralParser<'a>, ConfigError> {
        if let Some(error) = self.deferred_error {
            return Err(error);
        }

        let printer = Printer::terminal(
            self.about,
            self.options
                .iter()
                .map(|o| OptionParameter::from(&**o))
                .collect(),
            self.positionals
                .iter()
                .map(|p| ArgumentParameter::from(&**p))
                .collect(),
        );
        Ok(GeneralParser::new(
            self.program,
            self.options,
            self.positionals,
            printer,
            user_interface,
        ))
    }

    /// Build the command line parser as a Result.
    /// This finalizes the configuration and checks for errors (ex: a duplicated option name).
    pub fn build_parser(self) -> Result<GeneralParser<'a>, ConfigError> {
        self.build_with_interface(Box::new(ConsoleInterface::default()))
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a duplicated option name).
    /// If an error is encountered, exits with error code `1` (via [`std::process::exit`]).
    pub fn build(self) -> GeneralParser<'a> {
        match self.build_parser() {
            Ok(gp) => gp,
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }
}

fn check_default(name: String, kind: Kind, default: Option<&Value>) -> Result<(), ConfigError> {
    match default {
        Some(value) if kind == Kind::Flag || value.kind() != kind => {
            Err(ConfigError::InvalidDefault {
                name,
                kind,
                default: value.clone(),
            })
        }
        _ => Ok(()),
    }
}
