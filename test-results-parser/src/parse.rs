// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    DocumentFetcher, ParseOptions,
    errors::{ParseError, UnknownFormatError},
};
use camino::Utf8Path;
use test_results_model::TestResult;
use tracing::debug;

/// Converts an in-memory document.
pub fn parse_str(content: &str, options: &ParseOptions) -> Result<TestResult, ParseError> {
    Ok(options.format.parse_str(content, options)?)
}

/// Reads and converts the document at `path`.
pub fn parse_file(
    path: impl AsRef<Utf8Path>,
    options: &ParseOptions,
) -> Result<TestResult, ParseError> {
    let path = path.as_ref();
    debug!(%path, format = %options.format, "reading test report");
    let content = fs_err::read_to_string(path).map_err(|err| ParseError::Io {
        path: path.to_owned(),
        err,
    })?;
    parse_str(&content, options)
}

/// Fetches the document at `url` with `fetcher`, then converts it.
///
/// The fetch is the only suspension point: conversion starts once the whole document is
/// available.
pub async fn parse_from_url<F>(
    fetcher: &F,
    url: &str,
    options: &ParseOptions,
) -> Result<TestResult, ParseError>
where
    F: DocumentFetcher,
{
    debug!(url, format = %options.format, "fetching test report");
    let content = fetcher
        .fetch(url)
        .await
        .map_err(|err| ParseError::Fetch {
            url: url.to_owned(),
            err: Box::new(err),
        })?;
    parse_str(&content, options)
}

impl From<UnknownFormatError> for ParseError {
    fn from(err: UnknownFormatError) -> Self {
        Self::Format(err.into())
    }
}
