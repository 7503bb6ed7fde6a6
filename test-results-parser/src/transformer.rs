// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    ParseOptions, ReportFormat, cucumber, document::RawDocument, errors::FormatError, junit,
    nunit,
};
use test_results_model::TestResult;
use tracing::debug;

/// Converts decoded documents of one format into a [`TestResult`].
///
/// The transformer is the closed set of supported formats, chosen once per call from
/// [`ParseOptions::format`].
pub type ReportTransformer = ReportFormat;

impl ReportFormat {
    /// Decodes `content` into this transformer's raw document.
    pub fn decode(self, content: &str) -> Result<RawDocument, FormatError> {
        RawDocument::decode(self, content)
    }

    /// Transforms an already-decoded document.
    ///
    /// Returns [`FormatError::MismatchedDocument`] if `document` belongs to another format.
    pub fn transform(
        self,
        document: &RawDocument,
        options: &ParseOptions,
    ) -> Result<TestResult, FormatError> {
        let result = match (self, document) {
            (Self::JUnit, RawDocument::JUnit(document)) => {
                junit::transform(document, options).map_err(FormatError::field(self))?
            }
            (Self::Cucumber, RawDocument::Cucumber(document)) => cucumber::transform(document),
            (Self::NUnit, RawDocument::NUnit(document)) => {
                nunit::transform(document).map_err(FormatError::field(self))?
            }
            (_, document) => {
                return Err(FormatError::MismatchedDocument {
                    expected: self,
                    found: document.format(),
                });
            }
        };

        debug!(
            format = %self,
            suites = result.suites.len(),
            total = result.counts.total,
            status = %result.status,
            "transformed test report"
        );
        Ok(result)
    }

    /// Decodes and transforms `content`.
    pub fn parse_str(
        self,
        content: &str,
        options: &ParseOptions,
    ) -> Result<TestResult, FormatError> {
        let document = self.decode(content)?;
        self.transform(&document, options)
    }
}
