// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Utilities for debugging the reader

use crate::token::Token;
use crate::value::{symbol, Value, ValueWithToken};

fn listlike(
    symname: &str,
    vals: Vec<ValueWithToken>,
    token: &Token
) -> ValueWithToken {
    let mut vals2 : Vec<ValueWithToken> = Vec::with_capacity(vals.len() + 1);
    vals2.push(symbol(symname).at(token.clone()));
    vals2.extend(vals);
    Value::List(vals2).at(token.clone())
}

impl ValueWithToken {
    /// Show the structure of a value as a value, e.g. `(1 "a")`
    /// becomes `(list (number 1) (string "a"))`. Each node keeps the
    /// token of the value it describes.
    pub fn dump(&self) -> ValueWithToken {
        let ValueWithToken(val, token) = self;
        match val {
            Value::Nil => listlike("nil", vec![], token),
            Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Symbol(_) =>
                listlike(val.kind_name(), vec![self.clone()], token),
            Value::List(vals) =>
                listlike("list", vals.iter().map(|v| v.dump()).collect(), token),
        }
    }
}
