use std::num::IntErrorKind;
use thiserror::Error;

use crate::model::{Kind, Value};

/// The reason a value token could not be captured into its declared kind.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// The token is not an optionally signed run of ASCII digits.
    #[error("expects an integer, got '{token}' instead")]
    NotInteger {
        /// The offending token.
        token: String,
    },
    /// The token is a well formed integer that does not fit in an `i64`.
    #[error("expects an integer that fits in 64 bits, got '{token}' instead")]
    OutOfRange {
        /// The offending token.
        token: String,
    },
}

impl Kind {
    /// Capture a value token into a typed `Value` of this kind.
    ///
    /// Strings are always captured verbatim (as an owned copy).
    /// Integers accept an optional leading `+` or `-` followed by one or more ASCII digits.
    /// Integers which overflow `i64` are rejected rather than truncated or saturated.
    ///
    /// ### Example
    /// ```
    /// # use camargs_builder as camargs;
    /// use camargs::{Kind, Value};
    ///
    /// assert_eq!(Kind::Integer.capture("-5").unwrap(), Value::Integer(-5));
    /// assert_eq!(Kind::String.capture("-5").unwrap(), Value::String("-5".to_string()));
    /// assert!(Kind::Integer.capture("12a").is_err());
    /// ```
    pub fn capture(&self, token: &str) -> Result<Value, InvalidCapture> {
        match self {
            Kind::Flag => Ok(Value::Flag),
            Kind::String => Ok(Value::String(token.to_string())),
            Kind::Integer => capture_integer(token).map(Value::Integer),
        }
    }
}

fn capture_integer(token: &str) -> Result<i64, InvalidCapture> {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);

    // An optional sign, then one or more ASCII digits.
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidCapture::NotInteger {
            token: token.to_string(),
        });
    }

    token.parse::<i64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InvalidCapture::OutOfRange {
            token: token.to_string(),
        },
        _ => InvalidCapture::NotInteger {
            token: token.to_string(),
        },
    })
}
