//! Tokenizer for function expressions.
//!
//! Supports numbers with decimals and exponents (`1.5e-3`), identifiers,
//! `+ - * / ^` (with `**` as an alias for `^`), parentheses and commas.

use crate::error::ExprError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
    Eof,
}

impl Token {
    pub fn describe(&self) -> String {
        match self {
            Token::Number(n) => format!("number {n}"),
            Token::Ident(name) => format!("'{name}'"),
            Token::Plus => "'+'".into(),
            Token::Minus => "'-'".into(),
            Token::Star => "'*'".into(),
            Token::Slash => "'/'".into(),
            Token::Caret => "'^'".into(),
            Token::LParen => "'('".into(),
            Token::RParen => "')'".into(),
            Token::Comma => "','".into(),
            Token::Eof => "end of input".into(),
        }
    }
}

/// A token with its char span `[start, end)` in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

pub struct Tokenizer {
    chars: Vec<char>,
    pos: usize,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    /// Full token stream, terminated by `Eof`.
    pub fn tokenize(&mut self) -> Result<Vec<Spanned>, ExprError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let start = self.pos;
            let Some(&ch) = self.chars.get(self.pos) else {
                tokens.push(Spanned {
                    token: Token::Eof,
                    start,
                    end: start,
                });
                return Ok(tokens);
            };
            let token = match ch {
                '+' => self.single(Token::Plus),
                '-' => self.single(Token::Minus),
                '*' if self.peek_at(1) == Some('*') => {
                    self.pos += 2;
                    Token::Caret
                }
                '*' => self.single(Token::Star),
                '/' => self.single(Token::Slash),
                '^' => self.single(Token::Caret),
                '(' => self.single(Token::LParen),
                ')' => self.single(Token::RParen),
                ',' => self.single(Token::Comma),
                c if c.is_ascii_digit() || c == '.' => self.read_number()?,
                c if c.is_alphabetic() || c == '_' || c == 'π' => self.read_ident(),
                _ => return Err(ExprError::UnexpectedChar { ch, pos: start }),
            };
            tokens.push(Spanned {
                token,
                start,
                end: self.pos,
            });
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.pos += 1;
        token
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
    }

    fn eat_digits(&mut self) {
        while self.pos < self.chars.len() && self.chars[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
    }

    /// Exponent is only consumed when digits follow, so `2e` reads as `2 · e`.
    fn read_number(&mut self) -> Result<Token, ExprError> {
        let start = self.pos;
        self.eat_digits();
        if self.peek_at(0) == Some('.') {
            self.pos += 1;
            self.eat_digits();
        }
        if matches!(self.peek_at(0), Some('e' | 'E')) {
            let has_digits = match self.peek_at(1) {
                Some(c) if c.is_ascii_digit() => true,
                Some('+' | '-') => self.peek_at(2).is_some_and(|c| c.is_ascii_digit()),
                _ => false,
            };
            if has_digits {
                self.pos += 1;
                if matches!(self.peek_at(0), Some('+' | '-')) {
                    self.pos += 1;
                }
                self.eat_digits();
            }
        }
        let s: String = self.chars[start..self.pos].iter().collect();
        s.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| ExprError::InvalidNumber(s))
    }

    fn read_ident(&mut self) -> Token {
        let start = self.pos;
        if self.chars[self.pos] == 'π' {
            self.pos += 1;
            return Token::Ident("pi".into());
        }
        while self.pos < self.chars.len()
            && (self.chars[self.pos].is_alphanumeric() || self.chars[self.pos] == '_')
            && self.chars[self.pos] != 'π'
        {
            self.pos += 1;
        }
        Token::Ident(self.chars[start..self.pos].iter().collect())
    }
}

/// Replace every whole identifier equal to `name` in `source` with `replacement`.
///
/// Numbers such as `2e5` and longer identifiers such as `exp` are left alone.
/// Text that does not tokenize is returned unchanged.
pub fn replace_identifier(source: &str, name: &str, replacement: &str) -> String {
    let Ok(tokens) = Tokenizer::new(source).tokenize() else {
        return source.to_string();
    };
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for sp in tokens {
        if let Token::Ident(ident) = &sp.token {
            if ident == name {
                out.extend(&chars[cursor..sp.start]);
                out.push_str(replacement);
                cursor = sp.end;
            }
        }
    }
    out.extend(&chars[cursor..]);
    out
}
