/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use super::{DateTime, DateTimeFormatError, DateTimeParseError, NANOS_PER_SECOND};

fn trimmed_fraction(nanos: u32) -> String {
    let fraction = format!("{:09}", nanos);
    fraction.trim_end_matches('0').to_owned()
}

pub(super) mod rfc3339 {
    use super::*;
    use chrono::{Datelike, Utc};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(date_time: &DateTime) -> Result<String, DateTimeFormatError> {
        let utc = chrono::DateTime::<Utc>::from_timestamp(date_time.seconds, 0).ok_or_else(|| {
            DateTimeFormatError::out_of_range(format!(
                "{} seconds is outside of the supported range",
                date_time.seconds
            ))
        })?;
        if !(1..=9999).contains(&utc.year()) {
            return Err(DateTimeFormatError::out_of_range(format!(
                "year {} cannot be represented with four digits",
                utc.year()
            )));
        }
        let mut out = utc.format("%Y-%m-%dT%H:%M:%S").to_string();
        if date_time.subsecond_nanos != 0 {
            out.push('.');
            out.push_str(&trimmed_fraction(date_time.subsecond_nanos));
        }
        out.push('Z');
        Ok(out)
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let parsed = chrono::DateTime::parse_from_rfc3339(s).map_err(|err| {
            DateTimeParseError::invalid(format!("`{}` is not an RFC 3339 date-time ({})", s, err))
        })?;
        // chrono reports a leap second as nanos past one second; fold it into the second
        let nanos = parsed.timestamp_subsec_nanos().min(NANOS_PER_SECOND - 1);
        Ok(DateTime::from_secs_and_nanos(parsed.timestamp(), nanos))
    }
}

pub(super) mod epoch_seconds {
    use super::*;

    pub(crate) fn format(date_time: &DateTime) -> String {
        if date_time.subsecond_nanos == 0 {
            return date_time.seconds.to_string();
        }
        let (sign, whole, nanos) = if date_time.seconds < 0 {
            (
                "-",
                -(date_time.seconds + 1),
                NANOS_PER_SECOND - date_time.subsecond_nanos,
            )
        } else {
            ("", date_time.seconds, date_time.subsecond_nanos)
        };
        format!("{}{}.{}", sign, whole, trimmed_fraction(nanos))
    }

    fn all_digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    pub(crate) fn parse(s: &str) -> Result<DateTime, DateTimeParseError> {
        let invalid = || DateTimeParseError::invalid(format!("`{}` is not a number of epoch seconds", s));
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits, None),
        };
        if !all_digits(whole) {
            return Err(invalid());
        }
        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let nanos = match fraction {
            None => 0,
            Some(fraction) if all_digits(fraction) && fraction.len() <= 9 => {
                let value: u32 = fraction.parse().map_err(|_| invalid())?;
                value * 10u32.pow(9 - fraction.len() as u32)
            }
            Some(_) => return Err(invalid()),
        };
        Ok(match (negative, nanos) {
            (false, nanos) => DateTime::from_secs_and_nanos(whole, nanos),
            (true, 0) => DateTime::from_secs(-whole),
            (true, nanos) => DateTime::from_secs_and_nanos(-whole - 1, NANOS_PER_SECOND - nanos),
        })
    }
}
