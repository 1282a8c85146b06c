// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The read and print front-end of a small Lisp interpreter. There is
//! no evaluator yet; values read are printed back unchanged.
//!
//! * `malread::scan` turns text into tokens lazily, keeping each
//!   lexeme verbatim along with its position.
//!
//! * `malread::read` builds one value from the first form of the
//!   text (`read_str`). Text without any forms is not an error but
//!   gives `Ok(None)`.
//!
//! * `malread::print` renders values canonically via `Display`
//!   (`print_str`), so that reading the printed text yields an equal
//!   value.
//!
//! * `malread::rep` and `malread::fixture` glue these together for
//!   REPLs and line based test files.
//!
//! Strings are neither unescaped when read nor escaped when printed.
//! Reader macros (quote, vectors, maps, ..) are scanned as `Special`
//! tokens but not accepted by the parser yet.

pub mod debug;
pub mod fixture;
pub mod pos;
pub mod print;
pub mod read;
pub mod rep;
pub mod scan;
pub mod settings;
pub mod token;
pub mod value;

pub use print::print_str;
pub use read::read_str;
