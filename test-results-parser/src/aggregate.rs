// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rolling suite totals up into result totals.
//!
//! Totals declared by the source document win whenever they parse. The rollup is only used for
//! the parts the document omits or misreports, and inconsistent declared totals are kept as-is.

use test_results_model::{Counts, TestSuite};
use tracing::{debug, warn};

/// The sums of the suites' counts and durations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rollup {
    /// Sum of the suite counts.
    pub counts: Counts,

    /// Sum of the suite durations, in milliseconds.
    pub duration_ms: f64,
}

impl Rollup {
    /// Sums the counts and durations of `suites`.
    pub fn from_suites(suites: &[TestSuite]) -> Self {
        Self {
            counts: suites.iter().map(|suite| suite.counts).sum(),
            duration_ms: suites.iter().map(|suite| suite.duration_ms).sum(),
        }
    }
}

/// Totals declared at the root of a document. `None` means absent or unusable.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeclaredTotals {
    /// Declared counts.
    pub counts: Option<Counts>,

    /// Declared duration, in milliseconds.
    pub duration_ms: Option<f64>,
}

impl DeclaredTotals {
    /// Totals for a document that declares nothing usable.
    pub fn none() -> Self {
        Self::default()
    }

    /// Resolves the final totals: declared values where present, the rollup of `suites`
    /// otherwise. Counts and duration fall back independently.
    pub fn resolve(self, suites: &[TestSuite]) -> Rollup {
        let rollup = Rollup::from_suites(suites);

        let counts = match self.counts {
            Some(declared) => {
                if !suites.is_empty() && declared != rollup.counts {
                    warn!(
                        ?declared,
                        rollup = ?rollup.counts,
                        "declared totals differ from the sum of suites, keeping declared totals"
                    );
                }
                declared
            }
            None => {
                debug!(
                    suites = suites.len(),
                    "no usable declared totals, summing suites"
                );
                rollup.counts
            }
        };

        let duration_ms = match self.duration_ms {
            Some(declared) => declared,
            None => {
                debug!("no usable declared duration, summing suites");
                rollup.duration_ms
            }
        };

        Rollup {
            counts,
            duration_ms,
        }
    }
}
