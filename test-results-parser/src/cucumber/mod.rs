// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of Cucumber JSON reports.
//!
//! Each feature becomes a suite and each scenario a case. Cucumber has no declared totals, so
//! suite and result counts are always computed from scenario outcomes.

mod raw;

pub use raw::*;

use crate::{
    ReportFormat,
    aggregate::DeclaredTotals,
    duration::nanos_to_ms,
    errors::FormatError,
    helpers::non_empty,
};
use serde_json::Value;
use test_results_model::{CaseStatus, Metadata, TestCase, TestResult, TestSuite};
use tracing::debug;

/// The first line of a JavaScript-style stack trace.
const STACK_FRAME_MARKER: &str = "    at ";

/// A decoded Cucumber document: the array of features.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CucumberDocument {
    /// The features, in document order.
    pub features: Vec<RawFeature>,
}

impl CucumberDocument {
    /// Decodes a Cucumber JSON document. The root must be an array.
    pub fn from_json(content: &str) -> Result<Self, FormatError> {
        let format = ReportFormat::Cucumber;
        if content.trim().is_empty() {
            return Err(FormatError::EmptyDocument { format });
        }

        let value: Value =
            serde_json::from_str(content).map_err(|err| FormatError::Json { format, err })?;
        if !value.is_array() {
            return Err(FormatError::UnexpectedRoot {
                format,
                found: json_kind(&value).to_owned(),
                expected: &["array"],
            });
        }

        let features =
            serde_json::from_value(value).map_err(|err| FormatError::Json { format, err })?;
        Ok(Self { features })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Converts a decoded Cucumber document.
pub fn transform(document: &CucumberDocument) -> TestResult {
    let suites: Vec<_> = document.features.iter().map(transform_feature).collect();
    let totals = DeclaredTotals::none().resolve(&suites);

    let mut result = TestResult::new("");
    result
        .add_suites(suites)
        .set_counts(totals.counts)
        .set_duration_ms(totals.duration_ms)
        .derive_status();
    result
}

/// Splits a failure message into a summary and a stack trace.
///
/// The stack trace starts at the first stack frame. A message that starts with a stack frame has
/// an empty summary; a message without one has no stack trace.
pub fn split_failure(message: &str) -> (&str, Option<&str>) {
    match message.find(STACK_FRAME_MARKER) {
        Some(index) => {
            let (summary, stack_trace) = message.split_at(index);
            (summary, Some(stack_trace))
        }
        None => (message, None),
    }
}

fn transform_feature(raw: &RawFeature) -> TestSuite {
    let mut suite = TestSuite::new(raw.name.as_str());
    suite.add_cases(raw.elements.iter().map(transform_scenario));
    if suite.cases.is_empty() {
        debug!(feature = %raw.name, "feature has no scenarios");
    }

    let duration_ms = suite.case_duration_ms();
    suite
        .set_metadata(tag_metadata(&raw.tags))
        .set_duration_ms(duration_ms)
        .derive_status();
    suite
}

fn transform_scenario(raw: &RawScenario) -> TestCase {
    let passed = raw.steps.iter().all(|step| step.result.is_passed());
    let status = if passed {
        CaseStatus::Pass
    } else {
        CaseStatus::Fail
    };
    let nanos: f64 = raw.steps.iter().filter_map(|step| step.result.duration).sum();

    let mut case = TestCase::new(raw.name.as_str(), status);
    case.set_duration_ms(nanos_to_ms(nanos))
        .set_metadata(tag_metadata(&raw.tags));

    let message = raw
        .steps
        .iter()
        .filter(|step| step.result.is_failed())
        .find_map(|step| non_empty(step.result.error_message.as_deref()));
    if let Some(message) = message {
        let (summary, stack_trace) = split_failure(message);
        if !summary.is_empty() {
            case.set_failure(summary);
        }
        if let Some(stack_trace) = stack_trace {
            case.set_stack_trace(stack_trace);
        }
    }

    case
}

/// `@key=value` tags become metadata entries. Other tags are collected under `tags` (without the
/// `@`) and `tagsRaw` (as written).
fn tag_metadata(tags: &[RawTag]) -> Metadata {
    let mut metadata = Metadata::new();
    for tag in tags {
        let token = tag.name.strip_prefix('@').unwrap_or(&tag.name);
        match token.split_once('=') {
            Some((key, value)) if !value.is_empty() => {
                metadata.insert(key, value);
            }
            Some((key, _)) => {
                metadata.append_list("tags", key).append_list("tagsRaw", &tag.name);
            }
            None => {
                metadata.append_list("tags", token).append_list("tagsRaw", &tag.name);
            }
        }
    }
    metadata
}
