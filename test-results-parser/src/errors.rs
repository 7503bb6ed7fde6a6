// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Errors produced while converting test reports.

use crate::ReportFormat;
use camino::Utf8PathBuf;
use std::error;
use thiserror::Error;

/// An error returned by the `parse_*` entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The document could not be converted.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The document could not be read from disk.
    #[error("failed to read test report at `{path}`")]
    Io {
        /// The path that was being read.
        path: Utf8PathBuf,

        /// The underlying error.
        #[source]
        err: std::io::Error,
    },

    /// The document could not be fetched.
    #[error("failed to fetch test report from `{url}`")]
    Fetch {
        /// The URL that was being fetched.
        url: String,

        /// The error returned by the fetcher.
        #[source]
        err: Box<dyn error::Error + Send + Sync>,
    },
}

/// A document doesn't have the shape required by the selected format.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FormatError {
    /// The document has no root element or value.
    #[error("{format} document is empty")]
    EmptyDocument {
        /// The selected format.
        format: ReportFormat,
    },

    /// The document's root doesn't match the selected format.
    #[error(
        "{format} document has unexpected root `{found}` (expected one of: {})",
        .expected.join(", "),
    )]
    UnexpectedRoot {
        /// The selected format.
        format: ReportFormat,

        /// The root that was found.
        found: String,

        /// The roots accepted by the format.
        expected: &'static [&'static str],
    },

    /// The XML document is malformed.
    #[error("{format} document is not well-formed XML")]
    Xml {
        /// The selected format.
        format: ReportFormat,

        /// The underlying error.
        #[source]
        err: quick_xml::Error,
    },

    /// The XML document could not be decoded into the format's structure.
    #[error("{format} document could not be decoded")]
    XmlDecode {
        /// The selected format.
        format: ReportFormat,

        /// The underlying error.
        #[source]
        err: quick_xml::DeError,
    },

    /// The JSON document is malformed or could not be decoded into the format's structure.
    #[error("{format} document could not be decoded")]
    Json {
        /// The selected format.
        format: ReportFormat,

        /// The underlying error.
        #[source]
        err: serde_json::Error,
    },

    /// An already-decoded document was handed to the transformer for another format.
    #[error("{found} document cannot be transformed as {expected}")]
    MismatchedDocument {
        /// The format of the transformer.
        expected: ReportFormat,

        /// The format of the document.
        found: ReportFormat,
    },

    /// A field has a value that can't be used and has no fallback.
    #[error("invalid field in {format} document")]
    Field {
        /// The selected format.
        format: ReportFormat,

        /// The underlying error.
        #[source]
        err: FieldError,
    },

    /// The format identifier is not supported.
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormatError),
}

impl FormatError {
    pub(crate) fn field(format: ReportFormat) -> impl FnOnce(FieldError) -> Self {
        move |err| Self::Field { format, err }
    }
}

/// A required numeric or enumerated field is present but invalid.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("invalid value `{value}` for `{field}` in {context} (expected {expected})")]
pub struct FieldError {
    field: &'static str,
    value: String,
    context: String,
    expected: &'static str,
}

impl FieldError {
    pub(crate) fn new(
        field: &'static str,
        value: impl Into<String>,
        context: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self {
            field,
            value: value.into(),
            context: context.into(),
            expected,
        }
    }

    /// Returns the name of the invalid field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the invalid value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An error that occurs while parsing a [`ReportFormat`] from a string.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error(
    "unsupported report type: {input} (known values: {})",
    ReportFormat::variants().join(", "),
)]
pub struct UnknownFormatError {
    input: String,
}

impl UnknownFormatError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An error that occurs while reading [`ParseOptions`](crate::ParseOptions) from TOML.
#[derive(Debug, Error)]
#[error("failed to parse report options")]
pub struct OptionsParseError {
    #[from]
    err: toml::de::Error,
}
