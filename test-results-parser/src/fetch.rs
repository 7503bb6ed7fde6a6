// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::{error, future::Future};

/// Retrieves a remote document for [`parse_from_url`](crate::parse_from_url).
///
/// Transport concerns (HTTP client, headers, authentication, retries, timeouts) belong to the
/// implementor. The conversion itself starts only once the whole document is available.
pub trait DocumentFetcher {
    /// The error returned when a document can't be retrieved.
    type Error: error::Error + Send + Sync + 'static;

    /// Fetches the document at `url` and returns its contents.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;
}
