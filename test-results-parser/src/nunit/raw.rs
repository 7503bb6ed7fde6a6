// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The NUnit v2 and v3 XML schemas, as decoded before transformation.
//!
//! Both versions share one `test-suite`/`test-case` shape: v2 wraps children in a `results`
//! element, while v3 nests them directly. Fields that only exist in one version are optional.

#![allow(missing_docs)]

pub use crate::junit::{RawProperties, RawProperty};
use serde::Deserialize;

/// A v2 `test-results` root.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestResults {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(default)]
    pub environment: Option<RawEnvironment>,
    #[serde(rename = "test-suite", default)]
    pub test_suites: Vec<RawTestSuite>,
}

/// A v3 `test-run` root.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestRun {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@fullname")]
    pub fullname: Option<String>,
    /// In seconds.
    #[serde(rename = "@duration")]
    pub duration: Option<String>,
    #[serde(default)]
    pub environment: Option<RawEnvironment>,
    #[serde(rename = "test-suite", default)]
    pub test_suites: Vec<RawTestSuite>,
}

/// A `test-suite` element: an assembly, namespace, fixture or parameterized method.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestSuite {
    #[serde(rename = "@type")]
    pub ty: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@fullname")]
    pub fullname: Option<String>,
    /// v2 only.
    #[serde(rename = "@description")]
    pub description: Option<String>,
    /// v2 duration, in seconds.
    #[serde(rename = "@time")]
    pub time: Option<String>,
    /// v3 duration, in seconds.
    #[serde(rename = "@duration")]
    pub duration: Option<String>,
    #[serde(default)]
    pub environment: Option<RawEnvironment>,
    /// v3 only, on the assembly.
    #[serde(default)]
    pub settings: Option<RawSettings>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
    /// v2 only.
    #[serde(default)]
    pub categories: Option<RawCategories>,
    /// v2 only.
    #[serde(default)]
    pub results: Option<RawResults>,
    #[serde(rename = "test-suite", default)]
    pub test_suites: Vec<RawTestSuite>,
    #[serde(rename = "test-case", default)]
    pub test_cases: Vec<RawTestCase>,
}

impl RawTestSuite {
    /// Child suites, in document order.
    pub fn child_suites(&self) -> impl Iterator<Item = &RawTestSuite> {
        self.results
            .iter()
            .flat_map(|results| &results.test_suites)
            .chain(&self.test_suites)
    }

    /// Test cases directly contained in this suite, in document order.
    pub fn child_cases(&self) -> impl Iterator<Item = &RawTestCase> {
        self.results
            .iter()
            .flat_map(|results| &results.test_cases)
            .chain(&self.test_cases)
    }

    /// The v3 full name, or the name.
    pub fn display_name(&self) -> &str {
        self.fullname
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// A v2 `results` wrapper.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawResults {
    #[serde(rename = "test-suite", default)]
    pub test_suites: Vec<RawTestSuite>,
    #[serde(rename = "test-case", default)]
    pub test_cases: Vec<RawTestCase>,
}

/// A `test-case` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTestCase {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@fullname")]
    pub fullname: Option<String>,
    /// v2 only.
    #[serde(rename = "@description")]
    pub description: Option<String>,
    /// v2: `Success`, `Failure`, ...; v3: `Passed`, `Failed`, ...
    #[serde(rename = "@result")]
    pub result: Option<String>,
    /// v3 qualifier of `result`, e.g. `Error` or `Invalid`.
    #[serde(rename = "@label")]
    pub label: Option<String>,
    #[serde(rename = "@time")]
    pub time: Option<String>,
    #[serde(rename = "@duration")]
    pub duration: Option<String>,
    #[serde(default)]
    pub properties: Option<RawProperties>,
    #[serde(default)]
    pub categories: Option<RawCategories>,
    #[serde(default)]
    pub failure: Option<RawFailure>,
    #[serde(default)]
    pub reason: Option<RawReason>,
    #[serde(default)]
    pub attachments: Option<RawAttachments>,
}

impl RawTestCase {
    /// The v3 full name, or the name.
    pub fn display_name(&self) -> &str {
        self.fullname
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }
}

/// An `environment` element. Attributes differ slightly between v2 and v3.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawEnvironment {
    #[serde(rename = "@nunit-version")]
    pub nunit_version: Option<String>,
    #[serde(rename = "@framework-version")]
    pub framework_version: Option<String>,
    #[serde(rename = "@clr-version")]
    pub clr_version: Option<String>,
    #[serde(rename = "@os-version")]
    pub os_version: Option<String>,
    #[serde(rename = "@os-architecture")]
    pub os_architecture: Option<String>,
    #[serde(rename = "@platform")]
    pub platform: Option<String>,
    #[serde(rename = "@cwd")]
    pub cwd: Option<String>,
    #[serde(rename = "@machine-name")]
    pub machine_name: Option<String>,
    #[serde(rename = "@user")]
    pub user: Option<String>,
    #[serde(rename = "@user-domain")]
    pub user_domain: Option<String>,
    #[serde(rename = "@culture")]
    pub culture: Option<String>,
    #[serde(rename = "@uiculture")]
    pub uiculture: Option<String>,
}

impl RawEnvironment {
    /// Returns the attributes that are present, keyed by attribute name.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            ("nunit-version", &self.nunit_version),
            ("framework-version", &self.framework_version),
            ("clr-version", &self.clr_version),
            ("os-version", &self.os_version),
            ("os-architecture", &self.os_architecture),
            ("platform", &self.platform),
            ("cwd", &self.cwd),
            ("machine-name", &self.machine_name),
            ("user", &self.user),
            ("user-domain", &self.user_domain),
            ("culture", &self.culture),
            ("uiculture", &self.uiculture),
        ]
        .into_iter()
        .filter_map(|(name, value)| Some((name, value.as_deref()?)))
    }
}

/// A v3 `settings` element: the runner settings in effect for an assembly.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawSettings {
    #[serde(rename = "setting", default)]
    pub settings: Vec<RawSetting>,
}

impl RawSettings {
    /// Returns name/value pairs in document order. Settings with nested items instead of a
    /// `value` attribute are skipped.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.settings
            .iter()
            .filter_map(|setting| Some((setting.name.as_deref()?, setting.value.as_deref()?)))
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawSetting {
    #[serde(rename = "@name")]
    pub name: Option<String>,
    #[serde(rename = "@value")]
    pub value: Option<String>,
}

/// A v2 `categories` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawCategories {
    #[serde(rename = "category", default)]
    pub categories: Vec<RawCategory>,
}

impl RawCategories {
    /// Returns the named categories in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories
            .iter()
            .filter_map(|category| category.name.as_deref())
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawCategory {
    #[serde(rename = "@name")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawFailure {
    pub message: Option<String>,
    #[serde(rename = "stack-trace")]
    pub stack_trace: Option<String>,
}

/// Why a test was not run, or was inconclusive.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawReason {
    pub message: Option<String>,
}

/// A v3 `attachments` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawAttachments {
    #[serde(rename = "attachment", default)]
    pub attachments: Vec<RawAttachment>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawAttachment {
    #[serde(rename = "filePath")]
    pub file_path: Option<String>,
    pub description: Option<String>,
}
