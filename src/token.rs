// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lexical tokens as produced by [scan](../scan/index.html).

use crate::pos::Pos;
use kstring::KString;

/// The lexeme of the end token.
pub const EOF_TEXT: &str = "\0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Number,
    String,
    LeftParen,
    RightParen,
    /// One of `[ ] { } ' ` ~ ^ @`; reserved for reader macros, the
    /// parser does not accept these yet.
    Special,
    Symbol,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(match self {
            TokenKind::Eof => "EOF",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::Special => "Special",
            TokenKind::Symbol => "Symbol",
        })
    }
}

/// A token keeps its lexeme exactly as it appeared in the source;
/// for strings this includes the surrounding quotes and any
/// backslash escapes.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: KString,
    pub pos: Pos,
}

impl Token {
    pub fn new(kind: TokenKind, text: &str, pos: Pos) -> Token {
        Token { kind, text: KString::from_ref(text), pos }
    }

    pub fn eof(pos: Pos) -> Token {
        Token { kind: TokenKind::Eof, text: KString::from_static(EOF_TEXT), pos }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        if self.is_eof() {
            // don't print the NUL lexeme
            std::fmt::Display::fmt(&self.kind, f)
        } else {
            f.write_fmt(format_args!("{} '{}'", self.kind, self.text))
        }
    }
}
