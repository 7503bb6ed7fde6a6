// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::{OptionsParseError, UnknownFormatError};
use serde::{Deserialize, Deserializer};
use std::{fmt, str::FromStr};

/// The report ecosystems that can be converted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ReportFormat {
    /// JUnit-style XML, with either a `testsuites` or a `testsuite` root.
    JUnit,

    /// Cucumber JSON: an array of features.
    Cucumber,

    /// NUnit XML, v2 (`test-results` root) or v3 (`test-run` root).
    NUnit,
}

impl ReportFormat {
    /// Returns the identifiers of all known formats.
    pub fn variants() -> &'static [&'static str] {
        &["junit", "cucumber", "nunit"]
    }

    /// Returns the identifier of this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JUnit => "junit",
            Self::Cucumber => "cucumber",
            Self::NUnit => "nunit",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "junit" => Ok(Self::JUnit),
            "cucumber" => Ok(Self::Cucumber),
            "nunit" => Ok(Self::NUnit),
            _ => Err(UnknownFormatError::new(s)),
        }
    }
}

impl<'de> Deserialize<'de> for ReportFormat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Options for a single parse call.
///
/// Can be built in code or deserialized, e.g. from `{ "type": "junit" }`.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ParseOptions {
    /// The format of the document. Selects the transformer.
    #[serde(rename = "type")]
    pub format: ReportFormat,

    /// If true, a source "errors" counter is not propagated.
    #[serde(default)]
    pub ignore_error_count: bool,
}

impl ParseOptions {
    /// Creates options for the given format, with defaults for everything else.
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            ignore_error_count: false,
        }
    }

    /// Sets whether a source "errors" counter is ignored.
    pub fn with_ignore_error_count(mut self, ignore_error_count: bool) -> Self {
        self.ignore_error_count = ignore_error_count;
        self
    }

    /// Reads options from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, OptionsParseError> {
        Ok(toml::from_str(input)?)
    }
}
