// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

#![warn(missing_docs)]

//! The canonical shape of a converted test report.
//!
//! Every report format (JUnit, NUnit, Cucumber) is folded into the same tree: a [`TestResult`]
//! owns [`TestSuite`]s, which own [`TestCase`]s, which own [`TestAttachment`]s. Suite and result
//! statuses are derived from their [`Counts`]; case statuses are set by the format that produced
//! them.

mod errors;
mod metadata;
mod result;
mod status;

pub use errors::*;
pub use metadata::Metadata;
pub use result::*;
pub use status::*;
