// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::StatusParseError;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign},
    str::FromStr,
};

/// The status of a single test case.
///
/// Case statuses are assigned by the format that produced the case, never derived from counts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum CaseStatus {
    /// The test passed.
    Pass,

    /// The test failed in an expected way, e.g. an assertion.
    Fail,

    /// The test failed in an unexpected way, e.g. an exception outside an assertion.
    Error,

    /// The test was not run.
    Skip,
}

impl CaseStatus {
    /// Returns the string representations of all known variants.
    pub fn variants() -> &'static [&'static str] {
        &["PASS", "FAIL", "ERROR", "SKIP"]
    }

    /// Returns the canonical upper-case name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
            Self::Skip => "SKIP",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "ERROR" => Ok(Self::Error),
            "SKIP" => Ok(Self::Skip),
            other => Err(StatusParseError::new(other, Self::variants())),
        }
    }
}

/// The status of a suite or of a whole result, derived from counts.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResultStatus {
    /// Every counted test passed.
    Pass,

    /// At least one counted test did not pass.
    Fail,

    /// Nothing was counted.
    #[default]
    Skip,
}

impl ResultStatus {
    /// Returns the string representations of all known variants.
    pub fn variants() -> &'static [&'static str] {
        &["PASS", "FAIL", "SKIP"]
    }

    /// Derives a status from final counts.
    ///
    /// * `SKIP` if `total` is zero.
    /// * `PASS` if every counted test passed.
    /// * `FAIL` otherwise.
    pub fn from_counts(counts: &Counts) -> Self {
        if counts.total == 0 {
            Self::Skip
        } else if counts.passed == counts.total {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    /// Returns the canonical upper-case name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Self::Pass),
            "FAIL" => Ok(Self::Fail),
            "SKIP" => Ok(Self::Skip),
            other => Err(StatusParseError::new(other, Self::variants())),
        }
    }
}

/// Test counts for a suite or a result.
///
/// For documents with self-consistent totals, `total == passed + failed + errors + skipped`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Counts {
    /// The number of tests counted.
    pub total: usize,

    /// The number of tests that passed.
    pub passed: usize,

    /// The number of tests that failed.
    pub failed: usize,

    /// The number of tests that errored.
    pub errors: usize,

    /// The number of tests that were skipped.
    pub skipped: usize,
}

impl Counts {
    /// Counts one more test with the given status.
    pub fn record(&mut self, status: CaseStatus) -> &mut Self {
        self.total += 1;
        match status {
            CaseStatus::Pass => self.passed += 1,
            CaseStatus::Fail => self.failed += 1,
            CaseStatus::Error => self.errors += 1,
            CaseStatus::Skip => self.skipped += 1,
        }
        self
    }

    /// Returns true if `total` equals the sum of the individual outcomes.
    pub fn is_consistent(&self) -> bool {
        self.total == self.passed + self.failed + self.errors + self.skipped
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(mut self, other: Counts) -> Counts {
        self += other;
        self
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Counts) {
        self.total += other.total;
        self.passed += other.passed;
        self.failed += other.failed;
        self.errors += other.errors;
        self.skipped += other.skipped;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Counts>>(iter: I) -> Self {
        iter.fold(Counts::default(), Add::add)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Counts>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
