//! Scalar function expressions over one free variable.
//!
//! Purpose
//! - Compile user text such as `x^2 - 3sin(x)` into an evaluator.
//! - Reject anything that references a free identifier other than the
//!   variable, `e` or `pi` at compile time, so evaluation itself never fails
//!   (domain errors become NaN or ±∞ and are filtered by sampling).
//!
//! References
//! - Code cross-refs: `sample::sample_function`, `format::format_translated_function`

mod ast;
mod parser;
mod token;

pub use ast::{Expr, Func, Op};
pub use token::replace_identifier;

use crate::error::ExprError;
pub use parser::MAX_DEPTH;
use parser::Parser;
use token::Tokenizer;

/// Default free variable name.
pub const DEFAULT_VAR: &str = "x";

/// A compiled, validated expression `f(var)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    source: String,
    var: String,
    expr: Expr,
}

impl Function {
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        self.expr.eval(x)
    }

    /// The expression text as entered (trimmed).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn var(&self) -> &str {
        &self.var
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }
}

/// Compile `source` as a function of `var`.
pub fn compile_function(source: &str, var: &str) -> Result<Function, ExprError> {
    let source = source.trim();
    let tokens = Tokenizer::new(source).tokenize()?;
    let expr = Parser::new(tokens, var).parse()?;
    Ok(Function {
        source: source.to_string(),
        var: var.to_string(),
        expr,
    })
}
