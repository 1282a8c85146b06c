// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Line based test files: an input line followed by its expectation.
//!
//! ```text
//! ;; comment
//! (1 2 3)
//! ;=>(1 2 3)
//! (1 2
//! ;/.*(EOF|end of input|unbalanced).*
//! ```
//!
//! `;=>` gives the expected output; any other expectation line means
//! reading the input must fail. Collection stops at `;>>> deferrable`.

use crate::rep::rep;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use thiserror::Error;

const COMMENT_PREFIX: &str = ";;";
const OUTPUT_PREFIX: &str = ";=>";
const STOP_MARKER: &str = ";>>> deferrable";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Output(String),
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureTest {
    /// 1-based line number of the input line
    pub line: usize,
    pub input: String,
    pub expected: Expected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed(String),
    Failed { expected: String, actual: String },
}

#[derive(Error, Debug)]
#[error("{name}:{line} - FAILED: Expected '{expected}' != '{actual}' Actual")]
pub struct FixtureFailure {
    pub name: String,
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

impl Expected {
    fn parse(line: Option<&str>) -> Expected {
        match line.and_then(|l| l.strip_prefix(OUTPUT_PREFIX)) {
            Some(output) => Expected::Output(output.to_string()),
            None => Expected::Failure,
        }
    }
}

pub fn collect_tests(text: &str) -> Vec<FixtureTest> {
    let mut tests = Vec::new();
    let mut lines = text.lines().enumerate();
    while let Some((i, line)) = lines.next() {
        if line.starts_with(COMMENT_PREFIX) || line.trim().is_empty() {
            continue;
        }
        if line.starts_with(STOP_MARKER) {
            break;
        }
        let expected = Expected::parse(lines.next().map(|(_, l)| l));
        tests.push(FixtureTest {
            line: i + 1,
            input: line.to_string(),
            expected,
        });
    }
    tests
}

pub fn load_fixture(path: &Path) -> Result<Vec<FixtureTest>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading fixture {:?}", path))?;
    Ok(collect_tests(&text))
}

impl FixtureTest {
    pub fn run(&self) -> Outcome {
        let result = rep(&self.input);
        match (&self.expected, result) {
            (Expected::Output(expected), Ok(actual)) => {
                if *expected == actual {
                    Outcome::Passed(actual)
                } else {
                    Outcome::Failed { expected: expected.clone(), actual }
                }
            }
            (Expected::Output(expected), Err(e)) => Outcome::Failed {
                expected: expected.clone(),
                actual: format!("error: {}", e),
            },
            (Expected::Failure, Ok(actual)) => {
                // an empty form produces no output either
                if actual.is_empty() {
                    Outcome::Passed(actual)
                } else {
                    Outcome::Failed { expected: String::new(), actual }
                }
            }
            (Expected::Failure, Err(_)) => Outcome::Passed(String::new()),
        }
    }
}

/// Run `tests` in order, stopping at the first failure. Returns the
/// number of tests run.
pub fn run_fixture(name: &str, tests: &[FixtureTest]) -> Result<usize, FixtureFailure> {
    for test in tests {
        match test.run() {
            Outcome::Passed(output) => {
                info!("{}:{} - PASSED: '{}'", name, test.line, output);
            }
            Outcome::Failed { expected, actual } => {
                return Err(FixtureFailure {
                    name: name.to_string(),
                    line: test.line,
                    expected,
                    actual,
                })
            }
        }
    }
    Ok(tests.len())
}
