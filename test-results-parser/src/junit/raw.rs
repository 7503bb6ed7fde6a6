// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The JUnit XML schema, as decoded before transformation.
//!
//! Fields are named after the attributes and elements they decode.

#![allow(missing_docs)]

use serde::Deserialize;

/// A `testsuites` root: a collection of suites with optional overall totals.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestsuites {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@tests")]
    pub tests: Option<String>,
    #[serde(rename = "@failures")]
    pub failures: Option<String>,
    #[serde(rename = "@errors")]
    pub errors: Option<String>,
    #[serde(rename = "@skipped")]
    pub skipped: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "testsuite", default)]
    pub testsuites: Vec<RawTestsuite>,
}

/// A `testsuite` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestsuite {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@tests")]
    pub tests: Option<String>,
    #[serde(rename = "@failures")]
    pub failures: Option<String>,
    #[serde(rename = "@errors")]
    pub errors: Option<String>,
    #[serde(rename = "@skipped")]
    pub skipped: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "@hostname")]
    pub hostname: Option<String>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
    #[serde(rename = "testcase", default)]
    pub testcases: Vec<RawTestcase>,
}

/// A `testcase` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestcase {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@classname")]
    pub classname: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
    #[serde(rename = "failure", default)]
    pub failures: Vec<RawNonSuccess>,
    #[serde(rename = "error", default)]
    pub errors: Vec<RawNonSuccess>,
    #[serde(rename = "skipped", default)]
    pub skipped: Vec<RawNonSuccess>,
    #[serde(rename = "system-out", default)]
    pub system_out: Vec<String>,
    #[serde(rename = "system-err", default)]
    pub system_err: Vec<String>,
}

/// A `failure`, `error` or `skipped` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawNonSuccess {
    #[serde(rename = "@message")]
    pub message: Option<String>,
    #[serde(rename = "@type")]
    pub ty: Option<String>,
    /// The element's body, typically a stack trace.
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

/// A `properties` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawProperties {
    #[serde(rename = "property", default)]
    pub properties: Vec<RawProperty>,
}

/// A `property` element. The value is either an attribute or the element's body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawProperty {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@value")]
    pub value: Option<String>,
    #[serde(rename = "$text")]
    pub text: Option<String>,
}

impl RawProperties {
    /// Returns name/value pairs in document order. Unnamed properties are skipped.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().filter_map(|property| {
            let name = property.name.as_deref()?;
            let value = property
                .value
                .as_deref()
                .or(property.text.as_deref())
                .unwrap_or_default();
            Some((name, value))
        })
    }
}
