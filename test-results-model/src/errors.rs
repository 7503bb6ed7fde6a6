// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// An error that occurs while parsing a [`CaseStatus`](crate::CaseStatus) or
/// [`ResultStatus`](crate::ResultStatus) from a string.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unrecognized status: {input} (known values: {})", .known.join(", "))]
pub struct StatusParseError {
    input: String,
    known: &'static [&'static str],
}

impl StatusParseError {
    pub(crate) fn new(input: impl Into<String>, known: &'static [&'static str]) -> Self {
        Self {
            input: input.into(),
            known,
        }
    }

    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}
