use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Maximum number of values the store will ever hold.
pub const STORE_CAPACITY: usize = 100;

/// Exclusive upper bound for values accepted into the store.
pub const MAX_STORED_VALUE: i32 = 10_000;

/// Exclusive upper bound for the length of a batch that can pass validation.
pub const MAX_BATCH_LEN: usize = 1_000;

/// Transform selector. Anything other than `double` or `triple` is kept
/// verbatim as `Unrecognized`; parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    Double,
    Triple,
    Unrecognized(String),
}

impl Mode {
    pub fn as_str(&self) -> &str {
        match self {
            Mode::Double => "double",
            Mode::Triple => "triple",
            Mode::Unrecognized(name) => name,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Mode::Unrecognized(_))
    }
}

impl From<&str> for Mode {
    fn from(value: &str) -> Self {
        match value {
            "double" => Mode::Double,
            "triple" => Mode::Triple,
            other => Mode::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Mode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "double" => Mode::Double,
            "triple" => Mode::Triple,
            _ => Mode::Unrecognized(value),
        }
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Unrecognized(name) => name,
            recognized => recognized.as_str().to_string(),
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::from(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only copy of the store contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub values: Vec<i32>,
    pub len: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformOutcome {
    pub input: i32,
    pub mode: Mode,
    pub result: i32,
    /// `false` when the result is the fallback 0 rather than a computed value.
    pub applied: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobReport {
    pub name: String,
    pub transforms: Vec<TransformOutcome>,
    pub validation: Option<bool>,
    pub appended: usize,
    pub rejected: usize,
    pub store: StoreSnapshot,
}
