// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Not an example, but a program to show the struct sizes for
//! possible optimization.

use malread::{pos::Pos, read::{ReadError, ReadErrorWithPos}, scan::{ScanError, ScanErrorWithPos}, settings::Settings, token::{Token, TokenKind}, value::{Value, ValueWithToken}};
use kstring::KString;
use std::any::type_name;
use std::mem::size_of;

/// One line per type: size, group, type name without the crate paths.
fn show<T>(group: &str) {
    let name = type_name::<T>()
        .replace("malread::", "")
        .replace("kstring::", "")
        .replace("core::result::", "");
    println!("{}\t{group}\t{name}", size_of::<T>());
}

fn main() {
    show::<Pos>("token");
    show::<KString>("token");
    show::<TokenKind>("token");
    show::<Token>("token");

    show::<Settings>("value");
    show::<Value>("value");
    show::<ValueWithToken>("value");

    show::<ScanError>("scan");
    show::<ScanErrorWithPos>("scan");
    show::<Result<Token, ScanErrorWithPos>>("scan");

    show::<ReadError>("read");
    show::<ReadErrorWithPos>("read");
    show::<Result<ValueWithToken, ReadErrorWithPos>>("read");
    show::<Result<Option<ValueWithToken>, ReadErrorWithPos>>("read");
}
