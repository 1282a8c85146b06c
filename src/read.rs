// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building values from the token stream, one top-level form at a
//! time.
//!
//! Grammar: `form := list | atom`, `list := '(' form* ')'`.

use crate::pos::Pos;
use crate::scan::{scan, ScanError, ScanErrorWithPos};
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::token::{Token, TokenKind};
use crate::value::{Value, ValueWithToken};
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReadError {
    #[error("{0}")]
    Scan(ScanError),
    #[error("unexpected token {0}")]
    UnexpectedToken(Token),
    #[error("expected token '{expected}', got token {got}")]
    TokenMismatch {
        expected: TokenKind,
        got: TokenKind,
    },
    #[error("number {0} out of range")]
    NumberOutOfRange(Token),
    #[error("nesting too deep")]
    NestingTooDeep,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{err} {pos}")]
pub struct ReadErrorWithPos {
    pub err: ReadError,
    pub pos: Pos
}

impl ReadError {
    fn at(self, p: Pos) -> ReadErrorWithPos {
        ReadErrorWithPos {
            err: self,
            pos: p
        }
    }
}

impl From<ScanErrorWithPos> for ReadErrorWithPos {
    fn from(ep: ScanErrorWithPos) -> ReadErrorWithPos {
        let ScanErrorWithPos { err, pos } = ep;
        ReadErrorWithPos {
            err: ReadError::Scan(err),
            pos
        }
    }
}

#[derive(Debug)]
pub struct Parser {
    /// Never empty, always ends with the EOF token.
    tokens: Vec<Token>,
    pos: usize,
    depth_fuel: u32,
}

impl Parser {
    /// Tokenizes all of `source` up front, thus scan errors anywhere
    /// in the source are reported here.
    pub fn new(source: &str) -> Result<Parser, ReadErrorWithPos> {
        Parser::with_settings(source, &DEFAULT_SETTINGS)
    }

    pub fn with_settings(
        source: &str,
        settings: &Settings
    ) -> Result<Parser, ReadErrorWithPos> {
        let tokens = scan(source).collect::<Result<Vec<Token>, _>>()?;
        Ok(Parser {
            tokens,
            pos: 0,
            depth_fuel: settings.depth_fuel,
        })
    }

    /// True if the source contained nothing but whitespace and
    /// comments.
    pub fn is_empty(&self) -> bool {
        self.tokens.len() == 1
    }

    /// Parse the form starting at the current token.
    pub fn parse_form(&mut self) -> Result<ValueWithToken, ReadErrorWithPos> {
        self.form(self.depth_fuel)
    }

    fn form(&mut self, depth_fuel: u32) -> Result<ValueWithToken, ReadErrorWithPos> {
        match self.current().kind {
            TokenKind::LeftParen => self.list(depth_fuel),
            _ => self.atom(),
        }
    }

    fn list(&mut self, depth_fuel: u32) -> Result<ValueWithToken, ReadErrorWithPos> {
        if depth_fuel == 0 {
            return Err(ReadError::NestingTooDeep.at(self.current().pos))
        }
        let left_paren = self.match_and_advance(TokenKind::LeftParen)?;
        let mut v = Vec::new();
        loop {
            match self.current().kind {
                TokenKind::RightParen | TokenKind::Eof => break,
                _ => v.push(self.form(depth_fuel - 1)?),
            }
        }
        // At EOF this reports the unclosed list.
        self.match_and_advance(TokenKind::RightParen)?;
        Ok(Value::List(v).at(left_paren))
    }

    fn atom(&mut self) -> Result<ValueWithToken, ReadErrorWithPos> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number => {
                // Digit runs always parse, but may overflow to inf,
                // which would not read back as a number.
                match token.text.parse::<f64>() {
                    Ok(n) if n.is_finite() => Ok(Value::Number(n).at(token)),
                    _ => {
                        let pos = token.pos;
                        Err(ReadError::NumberOutOfRange(token).at(pos))
                    }
                }
            }
            TokenKind::String => Ok(Value::String(token.text.clone()).at(token)),
            TokenKind::Symbol => Ok(symbol_or_literal(token)),
            _ => {
                let pos = token.pos;
                Err(ReadError::UnexpectedToken(token).at(pos))
            }
        }
    }

    fn match_and_advance(&mut self, expected: TokenKind) -> Result<Token, ReadErrorWithPos> {
        let current = self.current();
        if current.kind == expected {
            Ok(self.advance())
        } else {
            Err(ReadError::TokenMismatch { expected, got: current.kind }
                .at(current.pos))
        }
    }

    /// Past the end, keeps returning the EOF token.
    fn current(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }
}

fn symbol_or_literal(token: Token) -> ValueWithToken {
    let v = match token.text.as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "nil" => Value::Nil,
        _ => Value::Symbol(token.text.clone()),
    };
    v.at(token)
}

/// Read the first form in `source`. `Ok(None)` means there was
/// nothing to read (only whitespace and comments), which callers
/// should answer with no output at all. Input after the first form
/// is ignored.
pub fn read_str(source: &str) -> Result<Option<ValueWithToken>, ReadErrorWithPos> {
    read_str_with(source, &DEFAULT_SETTINGS)
}

pub fn read_str_with(
    source: &str,
    settings: &Settings
) -> Result<Option<ValueWithToken>, ReadErrorWithPos> {
    let mut parser = Parser::with_settings(source, settings)?;
    if parser.is_empty() {
        debug!("read_str: empty form");
        return Ok(None)
    }
    parser.parse_form().map(Some)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn read(s: &str) -> Value {
        read_str(s)
            .expect("read error")
            .expect("empty form")
            .0
    }

    fn read_err(s: &str) -> ReadError {
        read_str(s).expect_err("expected a read error").err
    }

    fn items(v: Value) -> Vec<Value> {
        match v {
            Value::List(items) => items.into_iter().map(|i| i.0).collect(),
            _ => panic!("not a list: {:?}", v),
        }
    }

    #[test]
    fn atoms() {
        assert_eq!(read("1"), Value::Number(1.0));
        assert_eq!(read("2.25"), Value::Number(2.25));
        assert_eq!(read("abc"), Value::Symbol("abc".into()));
        assert_eq!(read("\"abc\""), Value::String("\"abc\"".into()));
        assert_eq!(read("true"), Value::Bool(true));
        assert_eq!(read("false"), Value::Bool(false));
        assert_eq!(read("nil"), Value::Nil);
        assert_eq!(read("nil!"), Value::Symbol("nil!".into()));
    }

    #[test]
    fn lists() {
        assert_eq!(items(read("(1 2 3)")),
                   vec![Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]);
        assert_eq!(items(read("()")), Vec::<Value>::new());
        let v = items(read("(1 (2 3) 4)"));
        assert_eq!(v.len(), 3);
        assert_eq!(items(v[1].clone()), vec![Value::Number(2.0), Value::Number(3.0)]);
    }

    #[test]
    fn list_carries_left_paren_token() {
        let v = read_str("  (a)").unwrap().unwrap();
        assert_eq!(v.1.kind, TokenKind::LeftParen);
        assert_eq!(v.1.pos, Pos { line: 0, col: 2 });
    }

    #[test]
    fn empty_form() {
        assert_eq!(read_str(""), Ok(None));
        assert_eq!(read_str("   "), Ok(None));
        assert_eq!(read_str(";; comment only"), Ok(None));
        assert_eq!(read_str(" ;; a\n, ; b\n"), Ok(None));
    }

    #[test]
    fn only_first_form_is_read() {
        assert_eq!(read("1 2"), Value::Number(1.0));
        assert_eq!(items(read("(a) )")), vec![Value::Symbol("a".into())]);
    }

    #[test]
    fn unclosed_list() {
        assert_eq!(read_err("(1 2"),
                   ReadError::TokenMismatch { expected: TokenKind::RightParen,
                                              got: TokenKind::Eof });
        assert_eq!(read_err("((1)"),
                   ReadError::TokenMismatch { expected: TokenKind::RightParen,
                                              got: TokenKind::Eof });
    }

    #[test]
    fn unexpected_tokens() {
        match read_err(")") {
            ReadError::UnexpectedToken(t) => assert_eq!(t.kind, TokenKind::RightParen),
            e => panic!("wrong error {:?}", e),
        }
        match read_err("[1 2]") {
            ReadError::UnexpectedToken(t) => assert_eq!(t.kind, TokenKind::Special),
            e => panic!("wrong error {:?}", e),
        }
        match read_err("(1 'a)") {
            ReadError::UnexpectedToken(t) => assert_eq!(t.text.as_str(), "'"),
            e => panic!("wrong error {:?}", e),
        }
    }

    #[test]
    fn scan_errors_are_read_errors() {
        assert_eq!(read_err("\"abc"), ReadError::Scan(ScanError::UnterminatedString));
        // tokenizing is eager
        assert_eq!(read_err("1 /"), ReadError::Scan(ScanError::UnexpectedChar('/')));
    }

    #[test]
    fn error_messages() {
        let e = read_str("(1 2").unwrap_err();
        assert_eq!(e.to_string(), "expected token 'RightParen', got token EOF @1.4");
        let e = read_str("  )").unwrap_err();
        assert_eq!(e.to_string(), "unexpected token RightParen ')' @1.2");
        let e = read_str("\"ab").unwrap_err();
        assert_eq!(e.to_string(), "unterminated string starting @1.0");
    }

    #[test]
    fn overflowing_numbers() {
        let big = "9".repeat(400);
        match read_err(&big) {
            ReadError::NumberOutOfRange(t) => assert_eq!(t.text.as_str(), big),
            e => panic!("wrong error {:?}", e),
        }
        match read_err(&format!("(1 {})", big)) {
            ReadError::NumberOutOfRange(t) => assert_eq!(t.pos, Pos { line: 0, col: 3 }),
            e => panic!("wrong error {:?}", e),
        }
        // still finite
        assert_eq!(read(&"9".repeat(300)), Value::Number(1e300));
    }

    #[test]
    fn nesting_limit() {
        let settings = Settings { depth_fuel: 3 };
        assert!(read_str_with("(((1)))", &settings).is_ok());
        assert_eq!(read_str_with("((((1))))", &settings).unwrap_err().err,
                   ReadError::NestingTooDeep);
        let deep = format!("{}{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(read_err(&deep), ReadError::NestingTooDeep);
    }

    #[test]
    fn eof_is_sticky() {
        let mut p = Parser::new("x").unwrap();
        assert!(!p.is_empty());
        assert_eq!(p.parse_form().unwrap().0, Value::Symbol("x".into()));
        for _ in 0..3 {
            match p.parse_form() {
                Err(ReadErrorWithPos { err: ReadError::UnexpectedToken(t), .. }) =>
                    assert!(t.is_eof()),
                r => panic!("expected EOF error, got {:?}", r),
            }
        }
    }
}
