// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runtime data types representing a read value.

//! Lists are implemented using Rust vectors and own their elements;
//! since values are only ever built bottom-up, there are no cycles.
//! Printing is implemented in [print](../print/index.html).

use crate::token::Token;
use kstring::KString;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,
    Bool(bool),
    Number(f64),
    /// The lexeme including the surrounding quotes, escapes not
    /// resolved.
    String(KString),
    Symbol(KString),
    List(Vec<ValueWithToken>),
}

/// A value together with the token it was built from (for lists, the
/// opening paren).
#[derive(Debug, Clone)]
pub struct ValueWithToken(pub Value, pub Token);

/// Values are compared structurally; the tokens (and thus source
/// positions) are ignored.
impl PartialEq for ValueWithToken {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Value {
    pub fn at(self, token: Token) -> ValueWithToken {
        ValueWithToken(self, token)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::List(_) => "list",
        }
    }
}

impl ValueWithToken {
    pub fn token(&self) -> &Token {
        &self.1
    }
}

/// Easily create a symbol
pub fn symbol(s: &str) -> Value {
    Value::Symbol(KString::from_ref(s))
}
