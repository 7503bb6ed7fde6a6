// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The Cucumber JSON schema, as decoded before transformation.
//!
//! Only the fields used by the transformer are decoded. Everything else a formatter emits
//! (`id`, `uri`, `keyword`, `line`, `match`, `embeddings`, ...) is ignored.

#![allow(missing_docs)]

use serde::Deserialize;

/// A feature. Becomes one suite.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawFeature {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<RawTag>,
    /// Scenarios, including backgrounds.
    #[serde(default)]
    pub elements: Vec<RawScenario>,
}

/// A scenario. Becomes one case.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawScenario {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<RawTag>,
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawStep {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub result: RawStepResult,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawStepResult {
    /// `passed`, `failed`, `skipped`, `undefined`, `pending`, ...
    #[serde(default)]
    pub status: String,
    /// In nanoseconds.
    pub duration: Option<f64>,
    pub error_message: Option<String>,
}

impl RawStepResult {
    pub fn is_passed(&self) -> bool {
        self.status == "passed"
    }

    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }
}

/// A tag, e.g. `@smoke` or `@priority=high`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct RawTag {
    pub name: String,
}
