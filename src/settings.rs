// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for reading.

#[derive(Debug, Clone)]
pub struct Settings {
    /// How deeply lists may nest before reading gives up with
    /// `ReadError::NestingTooDeep`.
    pub depth_fuel: u32,
}

pub const DEFAULT_SETTINGS : Settings = Settings {
    depth_fuel: 500, // the limit with default settings on Linux is around 1200
};
