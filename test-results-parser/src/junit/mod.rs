// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of JUnit XML reports.
//!
//! JUnit counters exclude skipped tests from the total: a suite declaring `tests="10"` and
//! `skipped="2"` has a total of 8.

mod raw;

pub use raw::*;

use crate::{
    ParseOptions, ReportFormat,
    aggregate::DeclaredTotals,
    document::{from_xml, xml_root_name},
    duration::seconds_to_ms,
    errors::{FieldError, FormatError},
    helpers::{non_empty, parse_count, parse_declared_count, parse_declared_seconds, parse_seconds},
};
use regex::Regex;
use std::sync::LazyLock;
use test_results_model::{CaseStatus, Counts, Metadata, TestAttachment, TestCase, TestResult, TestSuite};
use tracing::debug;

static ROOTS: &[&str] = &["testsuites", "testsuite"];

/// Attachment plugin syntax: `[[ATTACHMENT|/absolute/path/to/file.png]]`.
static ATTACHMENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[ATTACHMENT\|([^\]]+)\]\]").unwrap());

/// A decoded JUnit document.
#[derive(Clone, Debug, PartialEq)]
pub enum JunitDocument {
    /// A `testsuites` collection.
    Testsuites(RawTestsuites),

    /// A lone `testsuite`, acting as both the result and its only suite.
    Testsuite(RawTestsuite),
}

impl JunitDocument {
    /// Decodes a JUnit XML document.
    pub fn from_xml(content: &str) -> Result<Self, FormatError> {
        let format = ReportFormat::JUnit;
        match xml_root_name(format, content)?.as_str() {
            "testsuites" => from_xml(format, content).map(Self::Testsuites),
            "testsuite" => from_xml(format, content).map(Self::Testsuite),
            other => Err(FormatError::UnexpectedRoot {
                format,
                found: other.to_owned(),
                expected: ROOTS,
            }),
        }
    }
}

/// Converts a decoded JUnit document.
pub fn transform(
    document: &JunitDocument,
    options: &ParseOptions,
) -> Result<TestResult, FieldError> {
    let ignore_errors = options.ignore_error_count;

    let (name, counters, time, suites) = match document {
        JunitDocument::Testsuites(root) => {
            let mut suites = Vec::with_capacity(root.testsuites.len());
            for raw in &root.testsuites {
                if raw.testcases.is_empty() {
                    debug!(
                        suite = raw.name.as_deref().unwrap_or_default(),
                        "skipping testsuite without testcases"
                    );
                    continue;
                }
                suites.push(transform_suite(raw, ignore_errors)?);
            }
            let counters = Counters {
                tests: root.tests.as_deref(),
                failures: root.failures.as_deref(),
                errors: root.errors.as_deref(),
                skipped: root.skipped.as_deref(),
            };
            (root.name.as_deref(), counters, root.time.as_deref(), suites)
        }
        JunitDocument::Testsuite(root) => (
            root.name.as_deref(),
            Counters::of_suite(root),
            root.time.as_deref(),
            vec![transform_suite(root, ignore_errors)?],
        ),
    };

    let totals = DeclaredTotals {
        counts: counters.declared(ignore_errors),
        duration_ms: parse_declared_seconds(time).map(seconds_to_ms),
    }
    .resolve(&suites);

    let mut result = TestResult::new(name.unwrap_or_default());
    result
        .add_suites(suites)
        .set_counts(totals.counts)
        .set_duration_ms(totals.duration_ms)
        .derive_status();
    Ok(result)
}

/// Extracts attachments from captured output, in order of appearance.
///
/// Each `[[ATTACHMENT|<path>]]` marker yields one attachment with the trimmed path. Markers with
/// an empty path are dropped.
pub fn extract_attachments(output: &str) -> Vec<TestAttachment> {
    scan_attachments(&ATTACHMENT_MARKER, output)
}

/// Collects the first capture group of every `marker` match. The scan always makes progress, so
/// markers that can match the empty string still terminate.
fn scan_attachments(marker: &Regex, output: &str) -> Vec<TestAttachment> {
    let mut attachments = Vec::new();
    let mut cursor = 0;
    while cursor <= output.len() {
        let Some(captures) = marker.captures_at(output, cursor) else {
            break;
        };
        let Some(matched) = captures.get(0) else {
            break;
        };
        cursor = if matched.is_empty() {
            matched.end()
                + output[matched.end()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8)
        } else {
            matched.end()
        };

        if let Some(path) = captures
            .get(1)
            .map(|path| path.as_str().trim())
            .filter(|path| !path.is_empty())
        {
            attachments.push(TestAttachment::new(path));
        }
    }
    attachments
}

#[derive(Clone, Copy, Debug)]
struct Counters<'a> {
    tests: Option<&'a str>,
    failures: Option<&'a str>,
    errors: Option<&'a str>,
    skipped: Option<&'a str>,
}

impl<'a> Counters<'a> {
    fn of_suite(suite: &'a RawTestsuite) -> Self {
        Self {
            tests: suite.tests.as_deref(),
            failures: suite.failures.as_deref(),
            errors: suite.errors.as_deref(),
            skipped: suite.skipped.as_deref(),
        }
    }

    /// Root-level counts. `tests` and `failures` are required; `errors` and `skipped` default to
    /// zero when absent but must parse when present.
    fn declared(&self, ignore_errors: bool) -> Option<Counts> {
        let tests = parse_declared_count(self.tests)?;
        let failures = parse_declared_count(self.failures)?;
        let errors = match self.errors {
            Some(errors) => parse_declared_count(Some(errors))?,
            None => 0,
        };
        let skipped = match self.skipped {
            Some(skipped) => parse_declared_count(Some(skipped))?,
            None => 0,
        };
        Some(junit_counts(tests, failures, errors, skipped, ignore_errors))
    }
}

fn junit_counts(
    tests: usize,
    failures: usize,
    errors: usize,
    skipped: usize,
    ignore_errors: bool,
) -> Counts {
    let total = tests.saturating_sub(skipped);
    let errors = if ignore_errors { 0 } else { errors };
    Counts {
        total,
        passed: total.saturating_sub(failures).saturating_sub(errors),
        failed: failures,
        errors,
        skipped,
    }
}

fn transform_suite(raw: &RawTestsuite, ignore_errors: bool) -> Result<TestSuite, FieldError> {
    let name = raw.name.as_deref().unwrap_or_default();
    let context = format!("testsuite `{name}`");

    let mut metadata: Metadata = raw
        .properties
        .iter()
        .flat_map(|properties| properties.pairs())
        .collect();
    if let Some(hostname) = non_empty(raw.hostname.as_deref()) {
        metadata.insert("hostname", hostname);
    }

    let cases = raw
        .testcases
        .iter()
        .map(|case| transform_case(case, &metadata))
        .collect::<Result<Vec<_>, _>>()?;

    let count_cases = |pred: fn(&RawTestcase) -> bool| raw.testcases.iter().filter(|c| pred(c)).count();
    let tests = parse_count(raw.tests.as_deref(), "tests", &context)?
        .unwrap_or(raw.testcases.len());
    let failures = parse_count(raw.failures.as_deref(), "failures", &context)?
        .unwrap_or_else(|| count_cases(|case| !case.failures.is_empty()));
    let errors = parse_count(raw.errors.as_deref(), "errors", &context)?
        .unwrap_or_else(|| count_cases(|case| !case.errors.is_empty()));
    let skipped = parse_count(raw.skipped.as_deref(), "skipped", &context)?
        .unwrap_or_else(|| count_cases(|case| !case.skipped.is_empty()));

    let mut suite = TestSuite::new(name);
    suite.add_cases(cases);
    let duration_ms = parse_seconds(raw.time.as_deref(), "time", &context)?
        .map_or_else(|| suite.case_duration_ms(), seconds_to_ms);
    suite
        .set_metadata(metadata)
        .set_counts(junit_counts(tests, failures, errors, skipped, ignore_errors))
        .set_duration_ms(duration_ms)
        .derive_status();
    Ok(suite)
}

fn transform_case(raw: &RawTestcase, suite_metadata: &Metadata) -> Result<TestCase, FieldError> {
    let name = raw.name.as_deref().unwrap_or_default();
    let context = format!("testcase `{name}`");

    let status = if raw.failures.is_empty() {
        CaseStatus::Pass
    } else {
        CaseStatus::Fail
    };
    let mut case = TestCase::new(name, status);
    case.set_duration_ms(
        parse_seconds(raw.time.as_deref(), "time", &context)?.map_or(0.0, seconds_to_ms),
    )
    .set_metadata(suite_metadata.resolve(
        raw.properties.iter().flat_map(|properties| properties.pairs()),
    ))
    .add_attachments(
        raw.system_out
            .iter()
            .flat_map(|output| extract_attachments(output)),
    );

    let failure = raw.failures.first();
    let error = raw.errors.first();
    if failure.is_none() && error.is_none() {
        return Ok(case);
    }

    // Some reporters (e.g. wdio) only put the message on the error element.
    let message = failure
        .and_then(|failure| non_empty(failure.message.as_deref()))
        .or_else(|| error.and_then(|error| non_empty(error.message.as_deref())));
    if let Some(message) = message {
        case.set_failure(message);
    }

    let stack_trace = non_empty(raw.system_err.first().map(String::as_str))
        .or_else(|| failure.and_then(|failure| non_empty(failure.text.as_deref())));
    if let Some(stack_trace) = stack_trace {
        case.set_stack_trace(stack_trace);
    }

    Ok(case)
}
