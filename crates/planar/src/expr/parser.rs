//! Pratt parser: token stream to a resolved `Expr`.
//!
//! Grammar (informal):
//!   infix    = prefix (OP prefix | implicit-mul prefix)*
//!   prefix   = ('-' | '+') prefix | atom
//!   atom     = NUMBER | IDENT | FUNC '(' args ')' | '(' infix ')'
//!
//! Juxtaposition (`2x`, `3(x+1)`, `(x+1)(x-1)`) is multiplication at the
//! precedence of `*`.
//!
//! Both the recursion depth and the height of the built tree are capped at
//! `MAX_DEPTH`, so evaluating or dropping an accepted `Expr` stays shallow.

use super::ast::{Expr, Func, Op, PREFIX_BP};
use super::token::{Spanned, Token};
use crate::error::ExprError;

/// Deepest nesting (and tallest expression tree) the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// A parsed subtree and its height.
type Parsed = (Expr, usize);

pub struct Parser<'a> {
    tokens: Vec<Spanned>,
    pos: usize,
    var: &'a str,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Spanned>, var: &'a str) -> Self {
        Self {
            tokens,
            pos: 0,
            var,
            depth: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Expr, ExprError> {
        if self.peek() == &Token::Eof {
            return Err(ExprError::Empty);
        }
        let (expr, _) = self.parse_expr(0)?;
        if self.peek() != &Token::Eof {
            return Err(ExprError::UnexpectedToken {
                found: self.peek().describe(),
            });
        }
        Ok(expr)
    }

    fn parse_expr(&mut self, min_bp: u8) -> Result<Parsed, ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::TooDeep(MAX_DEPTH));
        }
        let (mut left, mut height) = self.parse_prefix()?;

        loop {
            let (op, implicit) = match self.peek() {
                Token::Plus => (Op::Add, false),
                Token::Minus => (Op::Sub, false),
                Token::Star => (Op::Mul, false),
                Token::Slash => (Op::Div, false),
                Token::Caret => (Op::Pow, false),
                Token::Number(_) | Token::Ident(_) | Token::LParen => (Op::Mul, true),
                _ => break,
            };

            let prec = op.precedence();
            if prec < min_bp {
                break;
            }
            if !implicit {
                self.advance();
            }

            let next_bp = if op.is_right_assoc() { prec } else { prec + 1 };
            let (right, right_height) = self.parse_expr(next_bp)?;
            height = grow(height.max(right_height))?;

            left = Expr::BinOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
            };
        }

        self.depth -= 1;
        Ok((left, height))
    }

    fn parse_prefix(&mut self) -> Result<Parsed, ExprError> {
        match self.peek() {
            Token::Minus => {
                self.advance();
                let (expr, height) = self.parse_expr(PREFIX_BP)?;
                Ok((Expr::Neg(Box::new(expr)), grow(height)?))
            }
            Token::Plus => {
                self.advance();
                self.parse_expr(PREFIX_BP)
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> Result<Parsed, ExprError> {
        match self.peek().clone() {
            Token::Number(n) => {
                self.advance();
                Ok((Expr::Number(n), 1))
            }
            Token::Ident(name) => {
                self.advance();
                self.resolve_ident(name)
            }
            Token::LParen => {
                self.advance();
                let parsed = self.parse_expr(0)?;
                self.expect(Token::RParen)?;
                Ok(parsed)
            }
            tok => Err(ExprError::UnexpectedToken {
                found: tok.describe(),
            }),
        }
    }

    /// The variable and constants win over function names; a following `(` then
    /// reads as implicit multiplication.
    fn resolve_ident(&mut self, name: String) -> Result<Parsed, ExprError> {
        if name == self.var {
            return Ok((Expr::Var, 1));
        }
        match name.as_str() {
            "e" => return Ok((Expr::Number(std::f64::consts::E), 1)),
            "pi" | "PI" => return Ok((Expr::Number(std::f64::consts::PI), 1)),
            _ => {}
        }
        let Some(func) = Func::lookup(&name) else {
            return Err(ExprError::UnknownIdentifier(name));
        };
        if self.peek() != &Token::LParen {
            return Err(ExprError::Expected {
                expected: format!("'(' after {name}"),
                found: self.peek().describe(),
            });
        }
        self.advance();
        let (args, height) = self.parse_args()?;
        self.expect(Token::RParen)?;
        if args.len() != func.arity() {
            return Err(ExprError::Arity {
                name,
                expected: func.arity(),
                got: args.len(),
            });
        }
        Ok((Expr::Call { func, args }, grow(height)?))
    }

    /// Arguments and the tallest argument's height.
    fn parse_args(&mut self) -> Result<(Vec<Expr>, usize), ExprError> {
        let mut args = Vec::new();
        let mut height = 0;
        if self.peek() == &Token::RParen {
            return Ok((args, height));
        }
        loop {
            let (arg, h) = self.parse_expr(0)?;
            args.push(arg);
            height = height.max(h);
            if self.peek() != &Token::Comma {
                return Ok((args, height));
            }
            self.advance();
        }
    }

    fn peek(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .map(|s| &s.token)
            .unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expect(&mut self, expected: Token) -> Result<(), ExprError> {
        if std::mem::discriminant(self.peek()) == std::mem::discriminant(&expected) {
            self.advance();
            Ok(())
        } else {
            Err(ExprError::Expected {
                expected: expected.describe(),
                found: self.peek().describe(),
            })
        }
    }
}

/// Height of a node over a child of height `child`.
fn grow(child: usize) -> Result<usize, ExprError> {
    let height = child + 1;
    if height > MAX_DEPTH {
        Err(ExprError::TooDeep(MAX_DEPTH))
    } else {
        Ok(height)
    }
}
