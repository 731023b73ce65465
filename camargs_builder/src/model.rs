use crate::matcher::ParseError;

/// The type tag of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Takes no value; presence alone is the signal.
    Flag,
    /// Takes precisely one value, stored verbatim.
    String,
    /// Takes precisely one value, coerced into an `i64`.
    Integer,
}

impl Kind {
    /// Whether a declaration of this kind consumes a value token.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Kind::Flag)
    }

    pub(crate) fn metavar(&self) -> &'static str {
        match self {
            Kind::Flag => "",
            Kind::String => "STRING",
            Kind::Integer => "INTEGER",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A typed value held by a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// The value of a matched flag.
    Flag,
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
}

impl Value {
    /// The kind this value satisfies.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Flag => Kind::Flag,
            Value::String(_) => Kind::String,
            Value::Integer(_) => Kind::Integer,
        }
    }

    /// The string payload, if this is a `Value::String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// The integer payload, if this is a `Value::Integer`.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Flag => write!(f, "true"),
            Value::String(value) => write!(f, "{value}"),
            Value::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

// Un-suffixed integer literals fall back to i32.
impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

/// The terminal result of a parse.
///
/// Help is its own outcome: it is neither a success nor a failure, but the caller must not proceed with the normal program logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All tokens matched and every required positional argument was filled.
    Success,
    /// The help message was rendered.
    HelpRequested,
    /// Parsing stopped at the first error.
    Failed(ParseError),
}

impl Outcome {
    /// The process exit code conventionally associated with this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Success | Outcome::HelpRequested => 0,
            Outcome::Failed(_) => 1,
        }
    }

    /// Whether the caller should continue with its normal program logic.
    pub fn proceed(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}
