/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Timestamps as they are exchanged with the service.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// An instant in time with nanosecond precision.
///
/// Stored as whole seconds since the Unix epoch plus a forward offset in nanoseconds. Instants
/// before the epoch have negative `seconds`; `subsecond_nanos` always counts forward from there,
/// so `-1.5` seconds is stored as `(-2, 500_000_000)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire formats a [`DateTime`] can be read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// RFC 3339 date-time in UTC, for example `2019-12-16T23:48:18.52Z`.
    DateTime,
    /// Seconds since the Unix epoch with an optional fraction, for example `1576540098.52`.
    EpochSeconds,
}

impl DateTime {
    /// Creates a `DateTime` from whole seconds since the Unix epoch.
    pub fn from_secs(epoch_seconds: i64) -> Self {
        DateTime {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// Creates a `DateTime` from milliseconds since the Unix epoch.
    pub fn from_millis(epoch_millis: i64) -> Self {
        let seconds = epoch_millis.div_euclid(MILLIS_PER_SECOND);
        let millis = epoch_millis.rem_euclid(MILLIS_PER_SECOND) as u32;
        DateTime {
            seconds,
            subsecond_nanos: millis * NANOS_PER_MILLI,
        }
    }

    /// Creates a `DateTime` from seconds plus a forward nanosecond offset.
    ///
    /// # Panics
    /// If `subsecond_nanos` is one second or more.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        if subsecond_nanos >= NANOS_PER_SECOND {
            panic!("{} is > 1_000_000_000", subsecond_nanos)
        }
        DateTime {
            seconds,
            subsecond_nanos,
        }
    }

    /// Creates a `DateTime` from whole seconds and a fraction of a second in `[0, 1)`.
    pub fn from_fractional_secs(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * NANOS_PER_SECOND as f64) as u32;
        DateTime::from_secs_and_nanos(epoch_seconds, nanos.min(NANOS_PER_SECOND - 1))
    }

    /// Whole seconds since the Unix epoch.
    pub fn secs(&self) -> i64 {
        self.seconds
    }

    /// Nanoseconds past [`secs`](DateTime::secs).
    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Returns true if this instant is not on a whole second.
    pub fn has_subsec_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    /// Seconds since the Unix epoch as a float. Loses precision for large values.
    pub fn as_secs_f64(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / NANOS_PER_SECOND as f64
    }

    /// Parses a `DateTime` from `s` in the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    /// Formats this `DateTime` in the given `format`.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl From<SystemTime> for DateTime {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(since) => DateTime {
                seconds: since.as_secs() as i64,
                subsecond_nanos: since.subsec_nanos(),
            },
            Err(before) => {
                let before = before.duration();
                let seconds = -(before.as_secs() as i64);
                match before.subsec_nanos() {
                    0 => DateTime::from_secs(seconds),
                    nanos => DateTime::from_secs_and_nanos(seconds - 1, NANOS_PER_SECOND - nanos),
                }
            }
        }
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format::rfc3339::format(self) {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => f.write_str(&format::epoch_seconds::format(self)),
        }
    }
}

#[derive(Debug)]
enum DateTimeParseErrorKind {
    Invalid(Cow<'static, str>),
}

/// Failure to parse a [`DateTime`] from a string.
#[derive(Debug)]
pub struct DateTimeParseError {
    kind: DateTimeParseErrorKind,
}

impl DateTimeParseError {
    fn invalid(message: impl Into<Cow<'static, str>>) -> Self {
        DateTimeParseError {
            kind: DateTimeParseErrorKind::Invalid(message.into()),
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DateTimeParseErrorKind::Invalid(message) => {
                write!(f, "invalid date-time: {}", message)
            }
        }
    }
}

impl StdError for DateTimeParseError {}

/// Failure to format a [`DateTime`], for example when the year does not fit in four digits.
#[derive(Debug)]
pub struct DateTimeFormatError {
    message: Cow<'static, str>,
}

impl DateTimeFormatError {
    fn out_of_range(message: impl Into<Cow<'static, str>>) -> Self {
        DateTimeFormatError {
            message: message.into(),
        }
    }
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to format date-time: {}", self.message)
    }
}

impl StdError for DateTimeFormatError {}
