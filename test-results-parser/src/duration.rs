// Copyright (c) The nextest Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversions from source-specific time units to milliseconds.

/// Number of milliseconds in a second.
pub const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Number of nanoseconds in a millisecond.
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Converts seconds (JUnit `time`, NUnit `time`/`duration`) to milliseconds.
pub fn seconds_to_ms(seconds: f64) -> f64 {
    seconds * MILLIS_PER_SECOND
}

/// Converts nanoseconds (Cucumber step durations) to milliseconds, rounded to two decimals.
pub fn nanos_to_ms(nanos: f64) -> f64 {
    round2(nanos / NANOS_PER_MILLI)
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
