// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating source text to a token stream. Lexemes are kept
//! verbatim (see [Token](../token/struct.Token.html)); building values
//! from them is left to [read](../read/index.html).

use crate::pos::Pos;
use crate::token::{Token, TokenKind};
use genawaiter::rc::Gen;
use log::trace;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unterminated string starting")]
    UnterminatedString,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{err} {pos}")]
pub struct ScanErrorWithPos {
    pub err: ScanError,
    pub pos: Pos
}

impl ScanError {
    fn at(self, p: Pos) -> ScanErrorWithPos {
        ScanErrorWithPos {
            err: self,
            pos: p
        }
    }
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Anything that has distinct lower and upper case forms.
pub fn is_letter(c: char) -> bool {
    ! c.to_lowercase().eq(c.to_uppercase())
}

pub fn is_special(c: char) -> bool {
    "()[]{}'`~^@".contains(c)
}

pub fn is_symbol_char(c: char) -> bool {
    is_digit(c) || is_letter(c) || "!#$%&*_-+=:<>.|".contains(c)
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | ',' | '\t' | '\r' | '\n')
}

/// Cursor over one source string. Not restartable; create a new one
/// per input.
#[derive(Debug)]
pub struct Scanner<'s> {
    source: &'s str,
    /// byte offset into `source`
    offset: usize,
    pos: Pos,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Scanner<'s> {
        Scanner { source, offset: 0, pos: Pos::default() }
    }

    fn current(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn lookahead(&self) -> Option<char> {
        self.source[self.offset..].chars().nth(1)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.offset += c.len_utf8();
        self.pos = self.pos.after(c);
        Some(c)
    }

    fn advance_while(&mut self, accepted: fn(char) -> bool) {
        while let Some(c) = self.current() {
            if ! accepted(c) {
                break;
            }
            self.advance();
        }
    }

    /// Build a token from everything consumed since `start`.
    fn lexeme(&self, kind: TokenKind, start: usize, pos: Pos) -> Token {
        Token::new(kind, &self.source[start..self.offset], pos)
    }

    /// Returns the next token; after the end of the source, keeps
    /// returning EOF tokens. Only the end of `source` ends the input:
    /// a NUL character inside it is rejected as
    /// `ScanError::UnexpectedChar('\0')`, even though the EOF token's
    /// lexeme is `"\0"`.
    pub fn next_token(&mut self) -> Result<Token, ScanErrorWithPos> {
        self.skip_whitespace_and_comments();
        let pos = self.pos;
        let start = self.offset;
        let token = match self.current() {
            None => Token::eof(pos),
            Some('"') => self.read_string(start, pos)?,
            Some(c) if is_special(c) => self.read_special(start, pos),
            Some(c) if is_digit(c) => self.read_number(start, pos),
            Some(c) if is_symbol_char(c) => self.read_symbol(start, pos),
            Some(c) => return Err(ScanError::UnexpectedChar(c).at(pos)),
        };
        trace!("scanned {} {}", token, token.pos);
        Ok(token)
    }

    fn read_special(&mut self, start: usize, pos: Pos) -> Token {
        let kind = match self.advance() {
            Some('(') => TokenKind::LeftParen,
            Some(')') => TokenKind::RightParen,
            _ => TokenKind::Special,
        };
        self.lexeme(kind, start, pos)
    }

    fn read_symbol(&mut self, start: usize, pos: Pos) -> Token {
        self.advance_while(is_symbol_char);
        self.lexeme(TokenKind::Symbol, start, pos)
    }

    fn read_number(&mut self, start: usize, pos: Pos) -> Token {
        self.advance_while(is_digit);
        // A '.' without a digit after it is left for the next token.
        if self.current() == Some('.')
            && self.lookahead().map_or(false, is_digit)
        {
            self.advance();
            self.advance_while(is_digit);
        }
        self.lexeme(TokenKind::Number, start, pos)
    }

    /// Escapes are only recognized so that `\"` doesn't end the
    /// string; they are kept verbatim in the lexeme.
    fn read_string(&mut self, start: usize, pos: Pos)
                   -> Result<Token, ScanErrorWithPos> {
        self.advance(); // opening quote
        while let Some(c) = self.current() {
            if c == '"' {
                break;
            }
            if c == '\\' && matches!(self.lookahead(), Some('\\') | Some('"')) {
                self.advance();
            }
            self.advance();
        }
        if self.advance() != Some('"') {
            return Err(ScanError::UnterminatedString.at(pos))
        }
        Ok(self.lexeme(TokenKind::String, start, pos))
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            let mut skipped = false;
            while self.current().map_or(false, is_whitespace) {
                skipped = true;
                self.advance();
            }
            if self.current() == Some(';') {
                skipped = true;
                // up to and including the newline
                while let Some(c) = self.advance() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            if ! skipped {
                return;
            }
        }
    }
}

/// Lazily scan `source`, yielding all tokens up to and including the
/// EOF token. After an error, nothing more is yielded.
pub fn scan<'s>(
    source: &'s str
) -> impl Iterator<Item = Result<Token, ScanErrorWithPos>> + 's
{
    Gen::new(move |co| async move {
        let mut scanner = Scanner::new(source);
        loop {
            match scanner.next_token() {
                Err(e) => {
                    co.yield_(Err(e)).await;
                    return;
                }
                Ok(token) => {
                    let at_end = token.is_eof();
                    co.yield_(Ok(token)).await;
                    if at_end {
                        return;
                    }
                }
            }
        }
    }).into_iter()
}


#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<(TokenKind, String)> {
        scan(s)
            .map(|r| {
                let t = r.expect("scan error");
                (t.kind, t.text.to_string())
            })
            .collect()
    }

    fn scan_err(s: &str) -> ScanErrorWithPos {
        scan(s)
            .find_map(|r| r.err())
            .expect("expected a scan error")
    }

    use crate::token::TokenKind::{Eof, LeftParen, Number, RightParen, Special, Symbol};
    const STRING: TokenKind = TokenKind::String;

    fn t(kind: TokenKind, text: &str) -> (TokenKind, String) {
        (kind, text.to_string())
    }

    #[test]
    fn list_of_atoms() {
        assert_eq!(tokens("(+ 1 2.5 abc)"),
                   vec![t(LeftParen, "("),
                        t(Symbol, "+"),
                        t(Number, "1"),
                        t(Number, "2.5"),
                        t(Symbol, "abc"),
                        t(RightParen, ")"),
                        t(Eof, "\0")]);
    }

    #[test]
    fn trailing_dot_is_not_part_of_number() {
        assert_eq!(tokens("12."),
                   vec![t(Number, "12"), t(Symbol, "."), t(Eof, "\0")]);
        assert_eq!(tokens("12.x"),
                   vec![t(Number, "12"), t(Symbol, ".x"), t(Eof, "\0")]);
        assert_eq!(tokens("1.2.3"),
                   vec![t(Number, "1.2"), t(Symbol, ".3"), t(Eof, "\0")]);
    }

    #[test]
    fn number_followed_by_letters() {
        assert_eq!(tokens("12abc"),
                   vec![t(Number, "12"), t(Symbol, "abc"), t(Eof, "\0")]);
    }

    #[test]
    fn specials() {
        assert_eq!(tokens("[]{}'`~^@"),
                   vec![t(Special, "["), t(Special, "]"),
                        t(Special, "{"), t(Special, "}"),
                        t(Special, "'"), t(Special, "`"),
                        t(Special, "~"), t(Special, "^"),
                        t(Special, "@"), t(Eof, "\0")]);
    }

    #[test]
    fn strings_keep_quotes_and_escapes() {
        assert_eq!(tokens(r#""abc""#), vec![t(STRING, r#""abc""#), t(Eof, "\0")]);
        assert_eq!(tokens(r#""a\"b""#), vec![t(STRING, r#""a\"b""#), t(Eof, "\0")]);
        assert_eq!(tokens(r#""a\\" x"#),
                   vec![t(STRING, r#""a\\""#), t(Symbol, "x"), t(Eof, "\0")]);
        assert_eq!(tokens(r#""a\nb""#), vec![t(STRING, r#""a\nb""#), t(Eof, "\0")]);
        assert_eq!(tokens(r#""""#), vec![t(STRING, r#""""#), t(Eof, "\0")]);
    }

    #[test]
    fn unterminated_strings() {
        let e = scan_err(r#""abc"#);
        assert_eq!(e.err, ScanError::UnterminatedString);
        assert_eq!(e.pos, Pos { line: 0, col: 0 });
        assert_eq!(scan_err(r#"(1 "ab\""#).err, ScanError::UnterminatedString);
        assert_eq!(scan_err(r#"""#).err, ScanError::UnterminatedString);
    }

    #[test]
    fn unexpected_characters() {
        let e = scan_err("(a / b)");
        assert_eq!(e.err, ScanError::UnexpectedChar('/'));
        assert_eq!(e.pos, Pos { line: 0, col: 3 });
        assert_eq!(scan_err("\\").err, ScanError::UnexpectedChar('\\'));
        assert_eq!(scan_err("a\0").err, ScanError::UnexpectedChar('\0'));
        assert_eq!(e.to_string(), "unexpected character '/' @1.3");
    }

    #[test]
    fn whitespace_and_comments() {
        assert_eq!(tokens(""), vec![t(Eof, "\0")]);
        assert_eq!(tokens(" ,\t\r\n"), vec![t(Eof, "\0")]);
        assert_eq!(tokens(";; just a comment"), vec![t(Eof, "\0")]);
        assert_eq!(tokens("a ; one\n ; two\n,b;three"),
                   vec![t(Symbol, "a"), t(Symbol, "b"), t(Eof, "\0")]);
    }

    #[test]
    fn letters_beyond_ascii() {
        assert_eq!(tokens("λx"), vec![t(Symbol, "λx"), t(Eof, "\0")]);
        assert_eq!(scan_err("日").err, ScanError::UnexpectedChar('日'));
    }

    #[test]
    fn positions() {
        let ts: Vec<Token> = scan("(a\n  \"b\")")
            .collect::<Result<_, _>>()
            .expect("scan error");
        let ps: Vec<Pos> = ts.iter().map(|t| t.pos).collect();
        assert_eq!(ps, vec![Pos { line: 0, col: 0 },
                            Pos { line: 0, col: 1 },
                            Pos { line: 1, col: 2 },
                            Pos { line: 1, col: 5 },
                            Pos { line: 1, col: 6 }]);
    }

    #[test]
    fn eof_repeats() {
        let mut s = Scanner::new("x");
        assert_eq!(s.next_token().map(|t| t.kind), Ok(Symbol));
        assert_eq!(s.next_token().map(|t| t.kind), Ok(Eof));
        assert_eq!(s.next_token().map(|t| t.kind), Ok(Eof));
    }
}
