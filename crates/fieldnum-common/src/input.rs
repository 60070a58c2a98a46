use std::fmt::{self, Display};

/// A raw form response as handed to the number parser.
///
/// Chat platforms deliver most answers as text, but quick replies and some
/// webhooks carry real JSON numbers and booleans. Booleans are kept distinct
/// so they can never be coerced to `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericInput<'a> {
    Text(&'a str),
    Number(f64),
    Boolean(bool),
}

impl<'a> From<&'a str> for NumericInput<'a> {
    fn from(s: &'a str) -> Self {
        NumericInput::Text(s)
    }
}

impl<'a> From<&'a String> for NumericInput<'a> {
    fn from(s: &'a String) -> Self {
        NumericInput::Text(s.as_str())
    }
}

impl From<f64> for NumericInput<'_> {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<i64> for NumericInput<'_> {
    fn from(n: i64) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<i32> for NumericInput<'_> {
    fn from(n: i32) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<bool> for NumericInput<'_> {
    fn from(b: bool) -> Self {
        NumericInput::Boolean(b)
    }
}

impl Display for NumericInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericInput::Text(s) => write!(f, "{s:?}"),
            NumericInput::Number(n) => write!(f, "{n}"),
            NumericInput::Boolean(b) => write!(f, "{b}"),
        }
    }
}
