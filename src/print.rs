// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The canonical printed form of values, via `Display`.

use crate::value::{Value, ValueWithToken};
use std::fmt::Write;

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => f.write_fmt(format_args!("{}", n)),
            // Strings were not unescaped when read, thus are not
            // escaped here either.
            Value::String(s) => f.write_str(s),
            Value::Symbol(s) => f.write_str(s),
            Value::List(v) => {
                f.write_char('(')?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    std::fmt::Display::fmt(item, f)?;
                }
                f.write_char(')')
            }
        }
    }
}

impl std::fmt::Display for ValueWithToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

pub fn print_str(v: &ValueWithToken) -> String {
    v.to_string()
}
