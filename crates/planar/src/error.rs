//! Error types for parsing, expression compilation and session edits.
//!
//! Parse failures are expected outcomes: the session shows their `Display`
//! text in the symbolic output slot instead of propagating them.

use thiserror::Error;

/// Failure to turn user text into a geometric value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A required numeric field is empty, malformed or non-finite.
    #[error("{field}: '{text}' is not a finite number")]
    NotANumber { field: &'static str, text: String },

    /// `A = B = 0` in a standard-form line.
    #[error("degenerate line: A and B cannot both be zero")]
    DegenerateLine,

    /// Text does not have the shape `Ax + By + C = 0`.
    #[error("cannot read line equation '{0}'")]
    LineEquation(String),

    /// Sampling domain is not a finite interval with `min < max`.
    #[error("invalid domain [{min}, {max}]: need finite bounds with min < max")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid function: {0}")]
    Function(#[from] ExprError),
}

/// Failure to compile a function expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("unexpected {found}")]
    UnexpectedToken { found: String },

    #[error("expected {expected}, found {found}")]
    Expected { expected: String, found: String },

    /// Identifier other than the variable, `e` or `pi`.
    #[error("unknown identifier '{0}'")]
    UnknownIdentifier(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("{name} takes {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
    },

    /// Nesting or operator chains exceed the parser's depth limit.
    #[error("expression nests deeper than {0} levels")]
    TooDeep(usize),
}

/// Rejected edit coming from a hosting UI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("invalid value '{value}' for {field}")]
    InvalidChoice { field: &'static str, value: String },
}
