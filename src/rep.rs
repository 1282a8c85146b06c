// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! One read-eval-print step, as used by a REPL or a fixture runner.

use crate::print::print_str;
use crate::read::{read_str, ReadErrorWithPos};
use crate::value::ValueWithToken;
use log::debug;

/// There is no evaluator yet: values evaluate to themselves.
pub fn eval(form: ValueWithToken) -> ValueWithToken {
    form
}

/// Read the first form of `input`, evaluate it and return its printed
/// form. Input without any form gives an empty string.
pub fn rep(input: &str) -> Result<String, ReadErrorWithPos> {
    Ok(match read_str(input)? {
        Some(form) => print_str(&eval(form)),
        None => String::new(),
    })
}

/// Same as `rep` but errors are only logged and give an empty string.
pub fn rep_line(input: &str) -> String {
    rep(input).unwrap_or_else(|e| {
        debug!("rep_line: {}", e);
        String::new()
    })
}
