use crate::api::InvalidCapture;
use crate::model::{Kind, Value};

/// An additional name by which an option may be matched.
///
/// ### Example
/// ```
/// # use camargs_builder as camargs;
/// use camargs::Alias;
///
/// assert_eq!(Alias::from("first"), Alias::Long("first".to_string()));
/// assert_eq!(Alias::from('f'), Alias::Short('f'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Alias {
    /// Matched via `--NAME`.
    Long(String),
    /// Matched via `-C`, including within a short option cluster.
    Short(char),
}

impl From<&str> for Alias {
    fn from(value: &str) -> Self {
        Alias::Long(value.to_string())
    }
}

impl From<String> for Alias {
    fn from(value: String) -> Self {
        Alias::Long(value)
    }
}

impl From<char> for Alias {
    fn from(value: char) -> Self {
        Alias::Short(value)
    }
}

impl std::fmt::Display for Alias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alias::Long(name) => write!(f, "--{name}"),
            Alias::Short(short) => write!(f, "-{short}"),
        }
    }
}

// The state shared by options and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Slot {
    kind: Kind,
    help: Option<String>,
    default: Option<Value>,
    found: bool,
    value: Option<Value>,
}

impl Slot {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            help: None,
            default: None,
            found: false,
            value: None,
        }
    }

    fn set_default(&mut self, value: Value) {
        self.value.replace(value.clone());
        self.default.replace(value);
    }

    fn matched(&mut self) {
        self.found = true;

        if self.kind == Kind::Flag {
            self.value.replace(Value::Flag);
        }
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        let value = self.kind.capture(token)?;
        self.value.replace(value);
        Ok(())
    }

    fn reset(&mut self) {
        self.found = false;
        self.value = self.default.clone();
    }
}

/// A named, non-positional parameter: `--NAME` and/or `-C`.
///
/// Options are always optional on the Cli.
/// Once the parse completes, inspect [`Opt::found`] and [`Opt::value`].
///
/// ### Example
/// ```
/// # use camargs_builder as camargs;
/// use camargs::{CommandLineParser, Kind, Opt, Value};
///
/// let mut verbose = Opt::new("verbose", 'v', Kind::Flag);
/// let mut level = Opt::long("level", Kind::Integer).alias('l').default(1);
/// let parser = CommandLineParser::new("program")
///     .add_option(&mut verbose)
///     .add_option(&mut level)
///     .build();
///
/// parser.parse_tokens(&["program", "-vl", "3"]);
///
/// assert!(verbose.found());
/// assert_eq!(level.value(), Some(&Value::Integer(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    name: Option<String>,
    short: Option<char>,
    aliases: Vec<Alias>,
    slot: Slot,
}

impl Opt {
    /// Create an option with both a long name and a short name.
    pub fn new(name: impl Into<String>, short: char, kind: Kind) -> Self {
        Self::identified(Some(name.into()), Some(short), kind)
    }

    /// Create an option with only a long name.
    pub fn long(name: impl Into<String>, kind: Kind) -> Self {
        Self::identified(Some(name.into()), None, kind)
    }

    /// Create an option with only a short name.
    pub fn short(short: char, kind: Kind) -> Self {
        Self::identified(None, Some(short), kind)
    }

    fn identified(name: Option<String>, short: Option<char>, kind: Kind) -> Self {
        Self {
            name,
            short,
            aliases: Vec::default(),
            slot: Slot::new(kind),
        }
    }

    /// Add an alias (long via `&str`/`String`, short via `char`).
    /// Aliases are matched after the primary names, in the order they are added.
    pub fn alias(mut self, alias: impl Into<Alias>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Document the option on the help message.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.slot.help.replace(description.into());
        self
    }

    /// Set the value held when the option is not specified on the Cli.
    /// The value must agree with the option's [`Kind`]; this is checked when the option is added to a parser.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.slot.set_default(value.into());
        self
    }

    /// Whether the option was matched during the parse.
    pub fn found(&self) -> bool {
        self.slot.found
    }

    /// The value of the option: the captured value if matched, otherwise the default (if any).
    /// A matched [`Kind::Flag`] holds [`Value::Flag`].
    pub fn value(&self) -> Option<&Value> {
        self.slot.value.as_ref()
    }

    /// The kind of the option.
    pub fn kind(&self) -> Kind {
        self.slot.kind
    }

    /// The primary long name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The primary short name.
    pub fn short_name(&self) -> Option<char> {
        self.short
    }

    /// The aliases, in the order they were added.
    pub fn aliases(&self) -> &[Alias] {
        &self.aliases
    }

    /// The help message.
    pub fn description(&self) -> Option<&str> {
        self.slot.help.as_deref()
    }

    /// Restore the option to its pre-parse state (not found, holding the default).
    pub fn reset(&mut self) {
        self.slot.reset();
    }

    pub(crate) fn default_value(&self) -> Option<&Value> {
        self.slot.default.as_ref()
    }

    pub(crate) fn matches_long(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
            || self
                .aliases
                .iter()
                .any(|alias| matches!(alias, Alias::Long(a) if a == name))
    }

    pub(crate) fn matches_short(&self, short: char) -> bool {
        self.short == Some(short)
            || self
                .aliases
                .iter()
                .any(|alias| matches!(alias, Alias::Short(a) if *a == short))
    }

    pub(crate) fn matched(&mut self) {
        self.slot.matched();
    }

    pub(crate) fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        self.slot.capture(token)
    }

    /// The Cli spelling of the option: `--NAME` when it has a long name, otherwise `-C`.
    pub(crate) fn display_name(&self) -> String {
        match (&self.name, &self.short) {
            (Some(name), _) => format!("--{name}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => unreachable!("internal error - an option must have a name or a short"),
        }
    }
}

/// A parameter bound by position, in declaration order.
///
/// ### Example
/// ```
/// # use camargs_builder as camargs;
/// use camargs::{CommandLineParser, Kind, Positional, Value};
///
/// let mut name = Positional::required("name", Kind::String);
/// let mut age = Positional::optional("age", Kind::Integer).default(0);
/// let parser = CommandLineParser::new("program")
///     .add_positional(&mut name)
///     .add_positional(&mut age)
///     .build();
///
/// parser.parse_tokens(&["program", "report"]);
///
/// assert_eq!(name.value(), Some(&Value::String("report".to_string())));
/// assert!(!age.found());
/// assert_eq!(age.value(), Some(&Value::Integer(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Positional {
    name: String,
    required: bool,
    slot: Slot,
}

impl Positional {
    /// Create a positional argument which must be specified on the Cli.
    pub fn required(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            required: true,
            slot: Slot::new(kind),
        }
    }

    /// Create a positional argument which may be left out on the Cli.
    pub fn optional(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            required: false,
            slot: Slot::new(kind),
        }
    }

    /// Document the positional argument on the help message.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.slot.help.replace(description.into());
        self
    }

    /// Set the value held when the positional argument is not specified on the Cli.
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.slot.set_default(value.into());
        self
    }

    /// Whether the positional argument was matched during the parse.
    pub fn found(&self) -> bool {
        self.slot.found
    }

    /// The value of the positional argument: the captured value if matched, otherwise the default (if any).
    pub fn value(&self) -> Option<&Value> {
        self.slot.value.as_ref()
    }

    /// The kind of the positional argument.
    pub fn kind(&self) -> Kind {
        self.slot.kind
    }

    /// The display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the positional argument must be specified.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The help message.
    pub fn description(&self) -> Option<&str> {
        self.slot.help.as_deref()
    }

    /// Restore the positional argument to its pre-parse state (not found, holding the default).
    pub fn reset(&mut self) {
        self.slot.reset();
    }

    pub(crate) fn default_value(&self) -> Option<&Value> {
        self.slot.default.as_ref()
    }

    pub(crate) fn bind(&mut self, token: &str) -> Result<(), InvalidCapture> {
        self.slot.capture(token)?;
        self.slot.matched();
        Ok(())
    }
}
