// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversion of NUnit v2 and v3 XML reports.
//!
//! Every fixture, and every other suite that directly contains test cases, becomes one suite.
//! Parameterized methods and theories are flattened into their fixture. Assemblies, namespaces
//! and other containers only contribute metadata, which cascades down to each test case.

mod raw;

pub use raw::*;

use crate::{
    ReportFormat,
    aggregate::DeclaredTotals,
    document::{from_xml, xml_root_name},
    duration::seconds_to_ms,
    errors::{FieldError, FormatError},
    helpers::{non_empty, parse_declared_seconds, parse_seconds},
};
use std::fmt;
use test_results_model::{
    CaseStatus, Metadata, TestAttachment, TestCase, TestResult, TestSuite,
};
use tracing::debug;

static ROOTS: &[&str] = &["test-results", "test-run"];

/// Suite types that always become a suite of their own.
static FIXTURE_TYPES: &[&str] = &["TestFixture", "GenericFixture"];

/// Suite types whose cases are flattened into the enclosing suite.
static METHOD_TYPES: &[&str] = &[
    "ParameterizedTest",
    "ParameterizedMethod",
    "Theory",
    "GenericMethod",
];

/// The v3 property holding a category.
const CATEGORY_PROPERTY: &str = "Category";

/// The metadata key collecting all categories of a case.
pub const CATEGORIES_KEY: &str = "Categories";

/// The metadata key for v2 `description` attributes.
pub const DESCRIPTION_KEY: &str = "Description";

/// A decoded NUnit document.
#[derive(Clone, Debug, PartialEq)]
pub enum NunitDocument {
    /// A v2 `test-results` document.
    V2(RawTestResults),

    /// A v3 `test-run` document.
    V3(RawTestRun),
}

impl NunitDocument {
    /// Decodes an NUnit XML document, detecting the version from the root element.
    pub fn from_xml(content: &str) -> Result<Self, FormatError> {
        let format = ReportFormat::NUnit;
        match xml_root_name(format, content)?.as_str() {
            "test-results" => from_xml(format, content).map(Self::V2),
            "test-run" => from_xml(format, content).map(Self::V3),
            other => Err(FormatError::UnexpectedRoot {
                format,
                found: other.to_owned(),
                expected: ROOTS,
            }),
        }
    }

    /// Returns the schema version of this document.
    pub fn version(&self) -> NunitVersion {
        match self {
            Self::V2(_) => NunitVersion::V2,
            Self::V3(_) => NunitVersion::V3,
        }
    }
}

/// An NUnit schema version.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NunitVersion {
    /// NUnit 2.x.
    V2,

    /// NUnit 3.x and later.
    V3,
}

/// The outcome of an NUnit test case, in v2 terms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum NunitOutcome {
    /// The test passed.
    Success,

    /// An assertion failed.
    Failure,

    /// The test threw an unexpected exception.
    Error,

    /// The test could not decide.
    Inconclusive,

    /// The test was ignored.
    Ignored,

    /// The test could not be run.
    NotRunnable,

    /// The test is malformed.
    Invalid,
}

impl NunitOutcome {
    /// Returns the v2 names of all outcomes.
    pub fn variants() -> &'static [&'static str] {
        &[
            "Success",
            "Failure",
            "Error",
            "Inconclusive",
            "Ignored",
            "NotRunnable",
            "Invalid",
        ]
    }

    /// Returns the v2 name of this outcome.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Error => "Error",
            Self::Inconclusive => "Inconclusive",
            Self::Ignored => "Ignored",
            Self::NotRunnable => "NotRunnable",
            Self::Invalid => "Invalid",
        }
    }

    /// Maps a v2 `result` value onto an outcome.
    pub fn from_v2(result: &str) -> Option<Self> {
        let outcome = match result {
            "Success" => Self::Success,
            "Failure" => Self::Failure,
            "Error" | "Cancelled" => Self::Error,
            "Inconclusive" => Self::Inconclusive,
            "Ignored" | "Skipped" => Self::Ignored,
            "NotRunnable" => Self::NotRunnable,
            "Invalid" => Self::Invalid,
            _ => return None,
        };
        Some(outcome)
    }

    /// Maps a v3 `result` and `label` pair onto an outcome.
    pub fn from_v3(result: &str, label: Option<&str>) -> Option<Self> {
        let outcome = match (result, label) {
            ("Passed" | "Warning", _) => Self::Success,
            ("Failed", Some("Error" | "Cancelled")) => Self::Error,
            ("Failed", Some("Invalid")) => Self::Invalid,
            ("Failed", _) => Self::Failure,
            ("Skipped", Some("Invalid")) => Self::Invalid,
            ("Skipped", _) => Self::Ignored,
            ("Inconclusive", _) => Self::Inconclusive,
            _ => return None,
        };
        Some(outcome)
    }

    /// The status of a test case with this outcome.
    pub fn case_status(self) -> CaseStatus {
        match self {
            Self::Success => CaseStatus::Pass,
            Self::Failure | Self::Inconclusive => CaseStatus::Fail,
            Self::Error => CaseStatus::Error,
            Self::Ignored | Self::NotRunnable | Self::Invalid => CaseStatus::Skip,
        }
    }
}

impl fmt::Display for NunitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a decoded NUnit document.
///
/// Totals are always summed from the suites: NUnit's own counters follow different rules (for
/// example, v2 excludes tests that were not run).
pub fn transform(document: &NunitDocument) -> Result<TestResult, FieldError> {
    let version = document.version();
    let (name, environment, roots, duration) = match document {
        NunitDocument::V2(root) => (
            root.name.as_deref(),
            root.environment.as_ref(),
            &root.test_suites,
            None,
        ),
        NunitDocument::V3(root) => (
            root.fullname.as_deref().or(root.name.as_deref()),
            root.environment.as_ref(),
            &root.test_suites,
            root.duration.as_deref(),
        ),
    };

    let metadata = inherit(
        &Metadata::new(),
        Level {
            environment,
            ..Level::default()
        },
    );
    let mut suites = Vec::new();
    for suite in roots {
        collect_suites(suite, &metadata, version, &mut suites)?;
    }

    let totals = DeclaredTotals {
        counts: None,
        duration_ms: parse_declared_seconds(duration).map(seconds_to_ms),
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

fn is_fixture(suite: &RawTestSuite) -> bool {
    suite
        .ty
        .as_deref()
        .is_some_and(|ty| FIXTURE_TYPES.contains(&ty))
}

fn is_method(suite: &RawTestSuite) -> bool {
    suite
        .ty
        .as_deref()
        .is_some_and(|ty| METHOD_TYPES.contains(&ty))
}

/// Walks `raw` depth-first, pushing canonical suites in document order.
fn collect_suites(
    raw: &RawTestSuite,
    parent: &Metadata,
    version: NunitVersion,
    out: &mut Vec<TestSuite>,
) -> Result<(), FieldError> {
    let metadata = inherit(parent, Level::of_suite(raw));

    if !is_fixture(raw) && raw.child_cases().next().is_none() {
        for child in raw.child_suites() {
            collect_suites(child, &metadata, version, out)?;
        }
        return Ok(());
    }

    let mut cases = Vec::new();
    let mut nested = Vec::new();
    flatten_cases(raw, &metadata, version, &mut cases, &mut nested)?;
    out.push(build_suite(raw, metadata, cases)?);

    for (child, inherited) in nested {
        collect_suites(child, &inherited, version, out)?;
    }
    Ok(())
}

/// Collects the cases of `raw` and of its method suites. Other child suites are returned in
/// `nested` along with the metadata they inherit.
fn flatten_cases<'a>(
    raw: &'a RawTestSuite,
    metadata: &Metadata,
    version: NunitVersion,
    cases: &mut Vec<TestCase>,
    nested: &mut Vec<(&'a RawTestSuite, Metadata)>,
) -> Result<(), FieldError> {
    for case in raw.child_cases() {
        cases.push(transform_case(case, metadata, version)?);
    }
    for child in raw.child_suites() {
        if is_method(child) {
            let child_metadata = inherit(metadata, Level::of_suite(child));
            flatten_cases(child, &child_metadata, version, cases, nested)?;
        } else {
            nested.push((child, metadata.clone()));
        }
    }
    Ok(())
}

fn build_suite(
    raw: &RawTestSuite,
    metadata: Metadata,
    cases: Vec<TestCase>,
) -> Result<TestSuite, FieldError> {
    let name = raw.display_name();
    let context = format!("test-suite `{name}`");
    let seconds = match raw.duration.as_deref() {
        Some(duration) => parse_seconds(Some(duration), "duration", &context)?,
        None => parse_seconds(raw.time.as_deref(), "time", &context)?,
    };

    let mut suite = TestSuite::new(name);
    if !cases.is_empty() && cases.iter().all(|case| case.status == CaseStatus::Skip) {
        debug!(suite = name, cases = cases.len(), "dropping cases of fully skipped suite");
    } else {
        suite.add_cases(cases);
    }

    let duration_ms = seconds.map_or_else(|| suite.case_duration_ms(), seconds_to_ms);
    suite
        .set_metadata(metadata)
        .set_duration_ms(duration_ms)
        .derive_status();
    Ok(suite)
}

fn transform_case(
    raw: &RawTestCase,
    parent: &Metadata,
    version: NunitVersion,
) -> Result<TestCase, FieldError> {
    let name = raw.display_name();
    let context = format!("test-case `{name}`");

    let result = raw.result.as_deref().unwrap_or_default();
    let outcome = match version {
        NunitVersion::V2 => NunitOutcome::from_v2(result),
        NunitVersion::V3 => NunitOutcome::from_v3(result, raw.label.as_deref()),
    };
    let Some(outcome) = outcome else {
        let expected = match version {
            NunitVersion::V2 => "an NUnit v2 result",
            NunitVersion::V3 => "an NUnit v3 result",
        };
        return Err(FieldError::new("result", result, context, expected));
    };

    let seconds = match version {
        NunitVersion::V2 => parse_seconds(raw.time.as_deref(), "time", &context)?,
        NunitVersion::V3 => parse_seconds(raw.duration.as_deref(), "duration", &context)?,
    };

    let mut case = TestCase::new(name, outcome.case_status());
    case.set_duration_ms(seconds.map_or(0.0, seconds_to_ms))
        .set_metadata(inherit(parent, Level::of_case(raw)));

    let failure = raw.failure.as_ref();
    let message = non_empty(failure.and_then(|failure| failure.message.as_deref())).or_else(|| {
        non_empty(
            raw.reason
                .as_ref()
                .and_then(|reason| reason.message.as_deref()),
        )
    });
    if let Some(message) = message {
        case.set_failure(message);
    }
    if let Some(stack_trace) =
        non_empty(failure.and_then(|failure| failure.stack_trace.as_deref()))
    {
        case.set_stack_trace(stack_trace);
    }

    for attachment in raw.attachments.iter().flat_map(|a| &a.attachments) {
        let Some(path) = non_empty(attachment.file_path.as_deref()) else {
            continue;
        };
        let mut converted = TestAttachment::new(path);
        if let Some(description) = non_empty(attachment.description.as_deref()) {
            converted.set_name(description);
        }
        case.add_attachment(converted);
    }

    Ok(case)
}

/// The metadata sources declared at one level of the hierarchy.
#[derive(Clone, Copy, Debug, Default)]
struct Level<'a> {
    environment: Option<&'a RawEnvironment>,
    settings: Option<&'a RawSettings>,
    properties: Option<&'a RawProperties>,
    categories: Option<&'a RawCategories>,
    description: Option<&'a str>,
}

impl<'a> Level<'a> {
    fn of_suite(suite: &'a RawTestSuite) -> Self {
        Self {
            environment: suite.environment.as_ref(),
            settings: suite.settings.as_ref(),
            properties: suite.properties.as_ref(),
            categories: suite.categories.as_ref(),
            description: non_empty(suite.description.as_deref()),
        }
    }

    fn of_case(case: &'a RawTestCase) -> Self {
        Self {
            environment: None,
            settings: None,
            properties: case.properties.as_ref(),
            categories: case.categories.as_ref(),
            description: non_empty(case.description.as_deref()),
        }
    }

    fn properties(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.properties
            .into_iter()
            .flat_map(|properties| properties.pairs())
    }

    /// v2 categories, then v3 `Category` properties.
    fn categories(&self) -> impl Iterator<Item = &'a str> {
        self.categories
            .into_iter()
            .flat_map(|categories| categories.names())
            .chain(
                self.properties()
                    .filter(|(name, _)| *name == CATEGORY_PROPERTY)
                    .map(|(_, value)| value),
            )
    }
}

/// Applies one level of the hierarchy on top of `parent`.
///
/// Environment attributes, settings, properties and descriptions override inherited keys. Each
/// category is recorded as a key with an empty value and appended to [`CATEGORIES_KEY`].
fn inherit(parent: &Metadata, level: Level<'_>) -> Metadata {
    let own = level
        .environment
        .into_iter()
        .flat_map(|environment| environment.pairs())
        .chain(level.settings.into_iter().flat_map(|settings| settings.pairs()))
        .chain(
            level
                .properties()
                .filter(|(name, _)| *name != CATEGORY_PROPERTY),
        )
        .chain(level.description.map(|description| (DESCRIPTION_KEY, description)));
    let mut metadata = parent.resolve(own);

    for category in level.categories().filter(|category| !category.is_empty()) {
        metadata.insert(category, "");
        metadata.append_list(CATEGORIES_KEY, category);
    }
    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use test_results_model::{Counts, ResultStatus};
    use test_strategy::proptest;

    fn parse(xml: &str) -> TestResult {
        let document = NunitDocument::from_xml(xml).expect("valid NUnit document");
        transform(&document).expect("transform succeeds")
    }

    #[test_case("Passed", None, NunitOutcome::Success ; "passed")]
    #[test_case("Warning", None, NunitOutcome::Success ; "warning")]
    #[test_case("Failed", None, NunitOutcome::Failure ; "failed")]
    #[test_case("Failed", Some("Error"), NunitOutcome::Error ; "failed error")]
    #[test_case("Failed", Some("Cancelled"), NunitOutcome::Error ; "failed cancelled")]
    #[test_case("Failed", Some("Invalid"), NunitOutcome::Invalid ; "failed invalid")]
    #[test_case("Skipped", Some("Invalid"), NunitOutcome::Invalid ; "skipped invalid")]
    #[test_case("Skipped", Some("Ignored"), NunitOutcome::Ignored ; "skipped ignored")]
    #[test_case("Skipped", Some("Explicit"), NunitOutcome::Ignored ; "skipped explicit")]
    #[test_case("Skipped", None, NunitOutcome::Ignored ; "skipped")]
    #[test_case("Inconclusive", None, NunitOutcome::Inconclusive ; "inconclusive")]
    fn v3_outcomes(result: &str, label: Option<&str>, expected: NunitOutcome) {
        assert_eq!(NunitOutcome::from_v3(result, label), Some(expected));
    }

    #[test_case(NunitOutcome::Success, CaseStatus::Pass ; "success")]
    #[test_case(NunitOutcome::Failure, CaseStatus::Fail ; "failure")]
    #[test_case(NunitOutcome::Error, CaseStatus::Error ; "error")]
    #[test_case(NunitOutcome::Inconclusive, CaseStatus::Fail ; "inconclusive")]
    #[test_case(NunitOutcome::Ignored, CaseStatus::Skip ; "ignored")]
    #[test_case(NunitOutcome::NotRunnable, CaseStatus::Skip ; "not runnable")]
    #[test_case(NunitOutcome::Invalid, CaseStatus::Skip ; "invalid")]
    fn case_statuses(outcome: NunitOutcome, expected: CaseStatus) {
        assert_eq!(outcome.case_status(), expected);
    }

    #[proptest]
    fn v2_names_round_trip(outcome: NunitOutcome) {
        assert_eq!(NunitOutcome::from_v2(outcome.as_str()), Some(outcome));
        assert!(NunitOutcome::variants().contains(&outcome.as_str()));
    }

    #[test]
    fn v2_fixtures_and_inheritance() {
        let result = parse(indoc! {r#"
            <?xml version="1.0" encoding="utf-8" standalone="no"?>
            <test-results name="mock-assembly.dll" total="5" errors="1" failures="1" not-run="1" date="2024-05-01" time="12:00:00">
              <environment nunit-version="2.6.4" machine-name="ci-01" platform="Win32NT"/>
              <test-suite type="Assembly" name="mock-assembly.dll" executed="True" result="Failure" time="1.5">
                <results>
                  <test-suite type="Namespace" name="Tests" executed="True" result="Failure" time="1.5">
                    <results>
                      <test-suite type="TestFixture" name="MockTestFixture" description="Fake Test Fixture" executed="True" result="Failure" time="1">
                        <categories><category name="FixtureCategory"/></categories>
                        <results>
                          <test-case name="Tests.MockTestFixture.FailingTest" executed="True" result="Failure" time="0.25">
                            <failure>
                              <message><![CDATA[Intentional failure]]></message>
                              <stack-trace><![CDATA[at Tests.MockTestFixture.FailingTest()]]></stack-trace>
                            </failure>
                          </test-case>
                          <test-case name="Tests.MockTestFixture.InconclusiveTest" executed="True" result="Inconclusive" time="0.125">
                            <reason><message><![CDATA[No valid data]]></message></reason>
                          </test-case>
                          <test-case name="Tests.MockTestFixture.MockTest3" description="Mock Test #3" executed="True" result="Success" time="0.125">
                            <categories><category name="MockCategory"/><category name="FixtureCategory"/></categories>
                            <properties><property name="Severity" value="Critical"/></properties>
                          </test-case>
                          <test-case name="Tests.MockTestFixture.TestWithException" executed="True" result="Error" time="0.5">
                            <failure><message><![CDATA[System.ApplicationException : Intentional Exception]]></message></failure>
                          </test-case>
                        </results>
                      </test-suite>
                      <test-suite type="TestFixture" name="BadFixture" executed="False" result="NotRunnable">
                        <results>
                          <test-case name="Tests.BadFixture.SomeTest" executed="False" result="NotRunnable"/>
                        </results>
                      </test-suite>
                    </results>
                  </test-suite>
                </results>
              </test-suite>
            </test-results>
        "#});

        assert_eq!(result.name, "mock-assembly.dll");
        assert_eq!(result.suites.len(), 2);

        let fixture = &result.suites[0];
        assert_eq!(fixture.name, "MockTestFixture");
        assert_eq!(fixture.duration_ms, 1000.0);
        assert_eq!(
            fixture.counts,
            Counts {
                total: 4,
                passed: 1,
                failed: 2,
                errors: 1,
                skipped: 0,
            }
        );
        assert_eq!(fixture.status, ResultStatus::Fail);
        assert_eq!(fixture.metadata.get("machine-name"), Some("ci-01"));
        assert_eq!(fixture.metadata.get(DESCRIPTION_KEY), Some("Fake Test Fixture"));
        assert_eq!(fixture.metadata.get(CATEGORIES_KEY), Some("FixtureCategory"));

        let failing = &fixture.cases[0];
        assert_eq!(failing.status, CaseStatus::Fail);
        assert_eq!(failing.failure.as_deref(), Some("Intentional failure"));
        assert_eq!(
            failing.stack_trace.as_deref(),
            Some("at Tests.MockTestFixture.FailingTest()")
        );
        assert_eq!(failing.duration_ms, 250.0);
        assert!(failing.metadata.contains_key("FixtureCategory"));

        let inconclusive = &fixture.cases[1];
        assert_eq!(inconclusive.status, CaseStatus::Fail);
        assert_eq!(inconclusive.failure.as_deref(), Some("No valid data"));

        let categorized = &fixture.cases[2].metadata;
        assert_eq!(categorized.get(CATEGORIES_KEY), Some("FixtureCategory,MockCategory"));
        assert_eq!(categorized.get("MockCategory"), Some(""));
        assert_eq!(categorized.get("Severity"), Some("Critical"));
        assert_eq!(categorized.get(DESCRIPTION_KEY), Some("Mock Test #3"));
        assert_eq!(categorized.get("platform"), Some("Win32NT"));

        assert_eq!(fixture.cases[3].status, CaseStatus::Error);

        let bad = &result.suites[1];
        assert_eq!(bad.name, "BadFixture");
        assert!(bad.cases.is_empty());
        assert_eq!(bad.counts, Counts::default());
        assert_eq!(bad.status, ResultStatus::Skip);

        assert_eq!(result.counts, fixture.counts);
        assert_eq!(result.duration_ms, 1000.0);
        assert_eq!(result.status, ResultStatus::Fail);
    }

    #[test]
    fn v3_parameterized_methods_are_flattened() {
        let result = parse(indoc! {r#"
            <test-run id="2" name="mock-assembly.dll" fullname="/build/mock-assembly.dll" result="Passed" duration="0.75">
              <test-suite type="Assembly" name="mock-assembly.dll" fullname="/build/mock-assembly.dll" result="Passed" duration="0.75">
                <properties>
                  <property name="_PID" value="4242"/>
                  <property name="_APPDOMAIN" value="test-domain"/>
                </properties>
                <test-suite type="TestFixture" name="Calc" fullname="Tests.Calc" result="Passed" duration="0.5">
                  <test-case name="Adds" fullname="Tests.Calc.Adds" result="Passed" duration="0.25"/>
                  <test-suite type="ParameterizedMethod" name="Divides" fullname="Tests.Calc.Divides" result="Passed">
                    <properties><property name="Category" value="Math"/></properties>
                    <test-case name="Divides(4,2)" fullname="Tests.Calc.Divides(4,2)" result="Passed" duration="0.125"/>
                    <test-case name="Divides(9,3)" fullname="Tests.Calc.Divides(9,3)" result="Passed" duration="0.125"/>
                  </test-suite>
                  <test-suite type="TestFixture" name="Nested" fullname="Tests.Calc+Nested" result="Passed">
                    <test-case name="Inner" fullname="Tests.Calc+Nested.Inner" result="Passed" duration="0.25"/>
                  </test-suite>
                </test-suite>
              </test-suite>
            </test-run>
        "#});

        assert_eq!(result.name, "/build/mock-assembly.dll");
        let names: Vec<_> = result.suites.iter().map(|suite| suite.name.as_str()).collect();
        assert_eq!(names, vec!["Tests.Calc", "Tests.Calc+Nested"]);

        let calc = &result.suites[0];
        let cases: Vec<_> = calc.cases.iter().map(|case| case.name.as_str()).collect();
        assert_eq!(
            cases,
            vec!["Tests.Calc.Adds", "Tests.Calc.Divides(4,2)", "Tests.Calc.Divides(9,3)"]
        );
        assert_eq!(calc.counts.total, 3);
        assert_eq!(calc.status, ResultStatus::Pass);
        assert_eq!(calc.duration_ms, 500.0);

        let assembly_only: Metadata = [("_PID", "4242"), ("_APPDOMAIN", "test-domain")]
            .into_iter()
            .collect();
        assert_eq!(calc.cases[0].metadata, assembly_only);
        assert_eq!(calc.cases[1].metadata.get(CATEGORIES_KEY), Some("Math"));
        assert!(!calc.cases[1].metadata.contains_key(CATEGORY_PROPERTY));

        let nested = &result.suites[1];
        assert_eq!(nested.duration_ms, 250.0);
        assert_eq!(nested.cases[0].metadata, assembly_only);

        assert_eq!(result.counts.total, 4);
        assert_eq!(result.duration_ms, 750.0);
        assert_eq!(result.status, ResultStatus::Pass);
    }

    #[test]
    fn v3_assembly_settings_reach_cases() {
        let result = parse(indoc! {r#"
            <test-run id="2" name="a.dll" fullname="/build/a.dll" result="Passed" duration="0.25">
              <test-suite type="Assembly" name="a.dll" fullname="/build/a.dll" result="Passed">
                <environment framework-version="3.17.0.0" clr-version="8.0.1"/>
                <settings>
                  <setting name="NumberOfTestWorkers" value="4"/>
                  <setting name="ImageRuntimeVersion" value="4.0.30319"/>
                  <setting name="TestParameters">
                    <item key="browser" value="firefox"/>
                  </setting>
                </settings>
                <properties>
                  <property name="_PID" value="1"/>
                  <property name="NumberOfTestWorkers" value="8"/>
                </properties>
                <test-suite type="TestFixture" name="Calc" fullname="Tests.Calc" result="Passed">
                  <test-case name="Adds" fullname="Tests.Calc.Adds" result="Passed" duration="0.25"/>
                </test-suite>
              </test-suite>
            </test-run>
        "#});

        let expected: Metadata = [
            ("framework-version", "3.17.0.0"),
            ("clr-version", "8.0.1"),
            ("NumberOfTestWorkers", "8"),
            ("ImageRuntimeVersion", "4.0.30319"),
            ("_PID", "1"),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.suites[0].metadata, expected);
        assert_eq!(result.suites[0].cases[0].metadata, expected);
    }

    #[test]
    fn v3_attachments_and_reasons() {
        let result = parse(indoc! {r#"
            <test-run id="2" name="a.dll">
              <test-suite type="TestFixture" name="Files" fullname="Tests.Files" result="Failed">
                <test-case name="Saves" fullname="Tests.Files.Saves" result="Passed" duration="0.25">
                  <attachments>
                    <attachment>
                      <filePath>c:\absolute\filepath\dummy.txt</filePath>
                      <description><![CDATA[my description]]></description>
                    </attachment>
                    <attachment><filePath>/tmp/log.txt</filePath></attachment>
                  </attachments>
                </test-case>
                <test-case name="NoArgs" fullname="Tests.Files.NoArgs" result="Failed" label="Invalid">
                  <reason><message><![CDATA[No arguments were provided]]></message></reason>
                </test-case>
                <test-case name="Throws" fullname="Tests.Files.Throws" result="Failed" label="Error">
                  <failure>
                    <message><![CDATA[System.ApplicationException : Intentional Exception]]></message>
                    <stack-trace><![CDATA[at Tests.Files.Throws()]]></stack-trace>
                  </failure>
                </test-case>
              </test-suite>
            </test-run>
        "#});

        let cases = &result.suites[0].cases;
        let mut named = TestAttachment::new(r"c:\absolute\filepath\dummy.txt");
        named.set_name("my description");
        assert_eq!(
            cases[0].attachments,
            vec![named, TestAttachment::new("/tmp/log.txt")]
        );

        assert_eq!(cases[1].status, CaseStatus::Skip);
        assert_eq!(cases[1].failure.as_deref(), Some("No arguments were provided"));

        assert_eq!(cases[2].status, CaseStatus::Error);
        assert_eq!(
            cases[2].failure.as_deref(),
            Some("System.ApplicationException : Intentional Exception")
        );
        assert_eq!(cases[2].stack_trace.as_deref(), Some("at Tests.Files.Throws()"));

        // No declared duration on the root.
        assert_eq!(result.duration_ms, 250.0);
        assert!(result.counts.is_consistent());
    }

    #[test]
    fn own_description_overrides_only_that_key() {
        let result = parse(indoc! {r#"
            <test-run id="2">
              <test-suite type="Assembly" name="a.dll" result="Passed">
                <properties><property name="_PID" value="1"/></properties>
                <test-suite type="TestFixture" name="F" fullname="F" result="Passed">
                  <properties>
                    <property name="Description" value="Fake Test Fixture"/>
                    <property name="Category" value="FixtureCategory"/>
                  </properties>
                  <test-case name="A" fullname="F.A" result="Passed"/>
                  <test-case name="B" fullname="F.B" result="Passed">
                    <properties><property name="Description" value="Mock Test #1"/></properties>
                  </test-case>
                </test-suite>
              </test-suite>
            </test-run>
        "#});

        let suite = &result.suites[0];
        let inherited = &suite.cases[0].metadata;
        let own = &suite.cases[1].metadata;
        assert_eq!(inherited.len(), 4);
        assert_eq!(inherited.get(DESCRIPTION_KEY), Some("Fake Test Fixture"));
        assert_eq!(own.len(), inherited.len());
        assert_eq!(own.get(DESCRIPTION_KEY), Some("Mock Test #1"));
        for (key, value) in inherited.iter().filter(|(key, _)| *key != DESCRIPTION_KEY) {
            assert_eq!(own.get(key), Some(value), "key {key} is inherited unchanged");
        }
    }

    #[test]
    fn unknown_result_is_a_field_error() {
        let document = NunitDocument::from_xml(indoc! {r#"
            <test-results name="a">
              <test-suite type="TestFixture" name="F">
                <results><test-case name="F.A" result="Exploded"/></results>
              </test-suite>
            </test-results>
        "#})
        .expect("valid document");
        let err = transform(&document).unwrap_err();
        assert_eq!(err.field(), "result");
        assert_eq!(err.value(), "Exploded");
    }

    #[test]
    fn invalid_duration_is_a_field_error() {
        let document = NunitDocument::from_xml(indoc! {r#"
            <test-run id="1">
              <test-suite type="TestFixture" name="F" duration="soon">
                <test-case name="A" result="Passed"/>
              </test-suite>
            </test-run>
        "#})
        .expect("valid document");
        let err = transform(&document).unwrap_err();
        assert_eq!(err.field(), "duration");
    }

    #[test]
    fn unexpected_root() {
        assert!(matches!(
            NunitDocument::from_xml("<testsuites/>"),
            Err(FormatError::UnexpectedRoot { .. })
        ));
    }
}
