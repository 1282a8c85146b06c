// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read-print loop, optionally running a fixture file first.
//!
//! Run as: `RUST_LOG=info cargo run --example repl -- --fixture tests/step1_read_print.mal`

use anyhow::Result;
use clap::Parser as ClapParser;
use malread::fixture::{load_fixture, run_fixture};
use malread::read::read_str;
use malread::rep::{eval, rep};
use std::io::{stdin, stdout, BufRead, Write};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Run the tests in this fixture file before starting the loop
    #[clap(long, value_parser)]
    fixture: Option<PathBuf>,
    /// Only run the fixture, don't start the loop
    #[clap(long, value_parser)]
    no_repl: bool,
    /// Print the structure of the values read instead of the values
    #[clap(short, long, value_parser)]
    dump: bool,
    /// The prompt shown before each line
    #[clap(long, value_parser, default_value = "user> ")]
    prompt: String,
}

fn dump_line(line: &str) -> Result<String, malread::read::ReadErrorWithPos> {
    Ok(match read_str(line)? {
        Some(v) => eval(v).dump().to_string(),
        None => String::new(),
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();
    let args = Args::parse();

    if let Some(path) = &args.fixture {
        let tests = load_fixture(path)?;
        let n = run_fixture(&path.to_string_lossy(), &tests)?;
        eprintln!(";; {n} tests passed");
    }
    if args.no_repl {
        return Ok(())
    }

    let mut inp = stdin().lock();
    let mut out = stdout().lock();
    let mut line = String::new();
    loop {
        write!(out, "{}", args.prompt)?;
        out.flush()?;
        line.clear();
        if inp.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let result = if args.dump { dump_line(&line) } else { rep(&line) };
        match result {
            Ok(s) => writeln!(out, "{s}")?,
            Err(e) => {
                eprintln!(">> ERROR: {e}");
                writeln!(out)?;
            }
        }
    }
    Ok(())
}
