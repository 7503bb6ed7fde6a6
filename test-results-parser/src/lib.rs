// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! Convert test reports produced by different test runners into one canonical
//! [`TestResult`](test_results_model::TestResult) tree.
//!
//! Supported formats are JUnit-style XML, NUnit XML (v2 and v3) and Cucumber JSON. The format is
//! selected through [`ParseOptions`]; each call reads exactly one document:
//!
//! ```
//! use test_results_parser::{ParseOptions, ReportFormat, parse_str};
//!
//! let xml = r#"<testsuite name="unit" tests="2" failures="0" time="0.5">
//!     <testcase name="adds" time="0.25"/>
//!     <testcase name="subtracts" time="0.25"/>
//! </testsuite>"#;
//! let result = parse_str(xml, &ParseOptions::new(ReportFormat::JUnit)).unwrap();
//! assert_eq!(result.counts.passed, 2);
//! assert_eq!(result.duration_ms, 500.0);
//! ```

pub mod aggregate;
pub mod cucumber;
pub mod document;
pub mod duration;
pub mod errors;
mod fetch;
mod helpers;
pub mod junit;
pub mod nunit;
mod options;
mod parse;
mod transformer;

pub use document::RawDocument;
pub use fetch::DocumentFetcher;
pub use options::*;
pub use parse::*;
pub use transformer::ReportTransformer;
