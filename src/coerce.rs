//! Conversion of captured substrings into requested types.
//!
//! The conversion is driven by the requested [`Target`], never by the shape
//! of the substring: `"7"` requested as text stays `"7"`.

use std::fmt;
use std::str::FromStr;

use phf::{Map, phf_map};

use crate::error::MatchError;

/// The type a captured substring is converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Base-10 signed integer.
    Int,
    /// Exactly one character.
    Char,
    /// The substring unchanged.
    Text,
}

/// Short names accepted by [`Target::from_str`].
/// Please keep names sorted alphabetically.
const NAME_TO_TARGET_MAP: Map<&'static str, Target> = phf_map! {
    "c" => Target::Char,
    "char" => Target::Char,
    "i" => Target::Int,
    "int" => Target::Int,
    "s" => Target::Text,
    "str" => Target::Text,
    "string" => Target::Text,
    "text" => Target::Text,
};

impl Target {
    pub fn name(self) -> &'static str {
        match self {
            Target::Int => "int",
            Target::Char => "char",
            Target::Text => "text",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NAME_TO_TARGET_MAP
            .get(s.trim().to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| format!("unknown target type '{}'", s))
    }
}

/// A converted capture group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Char(char),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// Convert `text` to `target`.
pub fn coerce(text: &str, target: Target) -> Result<Value, MatchError> {
    match target {
        Target::Int => text
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| conversion(text, target.name())),
        Target::Char => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(conversion(text, target.name())),
            }
        }
        Target::Text => Ok(Value::Text(text.to_string())),
    }
}

pub(crate) fn conversion(value: &str, expected: &str) -> MatchError {
    MatchError::Conversion {
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// A Rust type that a capture group can be extracted as.
///
/// Each implementation names the [`Target`] whose conversion it goes
/// through, and narrows the resulting [`Value`] to `Self`.
pub trait FromCapture: Sized {
    const TARGET: Target;

    /// Returns `None` when the value does not fit `Self`.
    fn from_value(value: Value) -> Option<Self>;

    /// Convert one captured substring.
    fn from_capture(text: &str) -> Result<Self, MatchError> {
        let value = coerce(text, Self::TARGET)?;
        Self::from_value(value).ok_or_else(|| conversion(text, std::any::type_name::<Self>()))
    }
}

macro_rules! int_from_capture {
    ($($t:ty),*) => {
        $(
            impl FromCapture for $t {
                const TARGET: Target = Target::Int;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Int(n) => <$t>::try_from(n).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

int_from_capture!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromCapture for char {
    const TARGET: Target = Target::Char;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Char(c) => Some(c),
            _ => None,
        }
    }
}

impl FromCapture for String {
    const TARGET: Target = Target::Text;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}
