// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::errors::FieldError;

/// Parses an optional counter attribute.
///
/// Absent → `Ok(None)`, so the caller can pick a fallback. Present but not a non-negative
/// integer → `Err`.
pub(crate) fn parse_count(
    value: Option<&str>,
    field: &'static str,
    context: &str,
) -> Result<Option<usize>, FieldError> {
    value
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| FieldError::new(field, value, context, "a non-negative integer"))
        })
        .transpose()
}

/// Parses an optional duration attribute expressed in seconds.
///
/// Absent → `Ok(None)`. Present but not a finite number → `Err`.
pub(crate) fn parse_seconds(
    value: Option<&str>,
    field: &'static str,
    context: &str,
) -> Result<Option<f64>, FieldError> {
    value
        .map(|value| {
            value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|seconds| seconds.is_finite())
                .ok_or_else(|| FieldError::new(field, value, context, "a number of seconds"))
        })
        .transpose()
}

/// Parses a counter declared at the document root. Anything unusable is `None`: root totals
/// always have the suite rollup as a fallback.
pub(crate) fn parse_declared_count(value: Option<&str>) -> Option<usize> {
    value?.trim().parse().ok()
}

/// Parses a duration declared at the document root, in seconds.
pub(crate) fn parse_declared_seconds(value: Option<&str>) -> Option<f64> {
    value?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
}

/// Returns `value` unless it is absent or empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
