// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{CaseStatus, Counts, Metadata, ResultStatus};
use serde::{Deserialize, Serialize};

/// The root of a converted report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// The name of this result. Empty if the source document didn't declare one.
    pub name: String,

    /// The status of this result, derived from `counts`.
    pub status: ResultStatus,

    /// The totals for this result.
    ///
    /// These are either the totals declared by the source document, or the sum of the suites'
    /// counts if the source didn't declare usable totals.
    #[serde(flatten)]
    pub counts: Counts,

    /// The overall time taken, in milliseconds.
    pub duration_ms: f64,

    /// The suites contained in this result, in document order.
    pub suites: Vec<TestSuite>,
}

impl TestResult {
    /// Creates a new, empty `TestResult` with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ResultStatus::Skip,
            counts: Counts::default(),
            duration_ms: 0.0,
            suites: vec![],
        }
    }

    /// Adds a suite. Counts are not updated: totals are resolved once all suites are known.
    pub fn add_suite(&mut self, suite: TestSuite) -> &mut Self {
        self.suites.push(suite);
        self
    }

    /// Adds several suites.
    pub fn add_suites(&mut self, suites: impl IntoIterator<Item = TestSuite>) -> &mut Self {
        self.suites.extend(suites);
        self
    }

    /// Sets the totals.
    pub fn set_counts(&mut self, counts: Counts) -> &mut Self {
        self.counts = counts;
        self
    }

    /// Sets the overall duration, in milliseconds.
    pub fn set_duration_ms(&mut self, duration_ms: f64) -> &mut Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Derives `status` from the current counts. Call once counts are final.
    pub fn derive_status(&mut self) -> &mut Self {
        self.status = ResultStatus::from_counts(&self.counts);
        self
    }

    /// Iterates over every case in every suite.
    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.suites.iter().flat_map(|suite| suite.cases.iter())
    }
}

/// A named grouping of test cases: a JUnit testsuite, an NUnit fixture or a Cucumber feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    /// The name of this suite.
    pub name: String,

    /// The status of this suite, derived from `counts`.
    pub status: ResultStatus,

    /// The totals for this suite.
    #[serde(flatten)]
    pub counts: Counts,

    /// The time taken by this suite, in milliseconds.
    pub duration_ms: f64,

    /// Properties, tags and categories attached to this suite.
    pub metadata: Metadata,

    /// The cases in this suite, in document order.
    pub cases: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a new, empty `TestSuite`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ResultStatus::Skip,
            counts: Counts::default(),
            duration_ms: 0.0,
            metadata: Metadata::new(),
            cases: vec![],
        }
    }

    /// Adds a case and records its status in the counts.
    ///
    /// Formats whose documents declare their own counters call [`Self::set_counts`] afterwards,
    /// which takes precedence.
    pub fn add_case(&mut self, case: TestCase) -> &mut Self {
        self.counts.record(case.status);
        self.cases.push(case);
        self
    }

    /// Adds several cases and records their statuses.
    pub fn add_cases(&mut self, cases: impl IntoIterator<Item = TestCase>) -> &mut Self {
        for case in cases {
            self.add_case(case);
        }
        self
    }

    /// Overrides the counts.
    pub fn set_counts(&mut self, counts: Counts) -> &mut Self {
        self.counts = counts;
        self
    }

    /// Sets the duration, in milliseconds.
    pub fn set_duration_ms(&mut self, duration_ms: f64) -> &mut Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the metadata.
    pub fn set_metadata(&mut self, metadata: Metadata) -> &mut Self {
        self.metadata = metadata;
        self
    }

    /// Returns the sum of the case durations, in milliseconds.
    pub fn case_duration_ms(&self) -> f64 {
        self.cases.iter().map(|case| case.duration_ms).sum()
    }

    /// Derives `status` from the current counts. Call once counts are final.
    pub fn derive_status(&mut self) -> &mut Self {
        self.status = ResultStatus::from_counts(&self.counts);
        self
    }
}

/// A single test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// The name of this case.
    pub name: String,

    /// The status of this case, as mapped from the source format.
    pub status: CaseStatus,

    /// The time taken by this case, in milliseconds.
    pub duration_ms: f64,

    /// A short description of why the case didn't pass.
    pub failure: Option<String>,

    /// The stack trace associated with the failure, if any.
    pub stack_trace: Option<String>,

    /// Properties, tags and categories attached to this case, including inherited ones.
    pub metadata: Metadata,

    /// Files attached to this case.
    pub attachments: Vec<TestAttachment>,
}

impl TestCase {
    /// Creates a new case with the given status.
    pub fn new(name: impl Into<String>, status: CaseStatus) -> Self {
        Self {
            name: name.into(),
            status,
            duration_ms: 0.0,
            failure: None,
            stack_trace: None,
            metadata: Metadata::new(),
            attachments: vec![],
        }
    }

    /// Sets the duration, in milliseconds.
    pub fn set_duration_ms(&mut self, duration_ms: f64) -> &mut Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Sets the failure summary.
    pub fn set_failure(&mut self, failure: impl Into<String>) -> &mut Self {
        self.failure = Some(failure.into());
        self
    }

    /// Sets the stack trace.
    pub fn set_stack_trace(&mut self, stack_trace: impl Into<String>) -> &mut Self {
        self.stack_trace = Some(stack_trace.into());
        self
    }

    /// Sets the metadata.
    pub fn set_metadata(&mut self, metadata: Metadata) -> &mut Self {
        self.metadata = metadata;
        self
    }

    /// Adds an attachment.
    pub fn add_attachment(&mut self, attachment: TestAttachment) -> &mut Self {
        self.attachments.push(attachment);
        self
    }

    /// Adds several attachments.
    pub fn add_attachments(
        &mut self,
        attachments: impl IntoIterator<Item = TestAttachment>,
    ) -> &mut Self {
        self.attachments.extend(attachments);
        self
    }
}

/// A file attached to a test case.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TestAttachment {
    /// The path to the file, as written in the source document.
    pub path: String,

    /// A display name for the file.
    pub name: Option<String>,
}

impl TestAttachment {
    /// Creates an attachment without a display name.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
        }
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }
}
