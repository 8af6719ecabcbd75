/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serialization of request bodies for the AWS Query protocol.
//!
//! A Query request is a single form-urlencoded body: `Action` and `Version` come first, then
//! one `Name=value` pair per scalar member. Nested members join their names with `.` and list
//! entries are numbered from 1, e.g. `Tags.Tag.1.Key=env`.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

use smithy_types::date_time::{DateTimeFormatError, Format};
use smithy_types::DateTime;
use std::borrow::Cow;
use urlencoding::encode;

/// Writes the top level of a Query request body into a `String`.
#[derive(Debug)]
pub struct QueryWriter<'a> {
    output: &'a mut String,
}

impl<'a> QueryWriter<'a> {
    /// Starts a request body for `action`, targeting API `version`.
    pub fn new(output: &'a mut String, action: &str, version: &str) -> Self {
        output.push_str("Action=");
        output.push_str(&encode(action));
        output.push_str("&Version=");
        output.push_str(&encode(version));
        QueryWriter { output }
    }

    /// Returns a writer for the top level member `prefix`.
    pub fn prefix(&mut self, prefix: &'a str) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(prefix))
    }

    /// Returns a writer whose nested members are written at the top level of the body.
    ///
    /// Only members may be written through it; a scalar written directly has no name.
    pub fn root(&mut self) -> QueryValueWriter<'_> {
        QueryValueWriter::new(self.output, Cow::Borrowed(""))
    }

    /// Finishes the request body.
    pub fn finish(self) {
        // Values are written eagerly, there is nothing left to flush.
    }
}

/// Writes a single named value, or the members nested under that name.
#[derive(Debug)]
pub struct QueryValueWriter<'a> {
    output: &'a mut String,
    prefix: Cow<'a, str>,
}

impl<'a> QueryValueWriter<'a> {
    fn new(output: &'a mut String, prefix: Cow<'a, str>) -> Self {
        QueryValueWriter { output, prefix }
    }

    /// Returns a writer for the member `prefix` nested under this one.
    pub fn prefix(&mut self, prefix: &str) -> QueryValueWriter<'_> {
        let prefix = if self.prefix.is_empty() {
            prefix.to_owned()
        } else {
            format!("{}.{}", self.prefix, prefix)
        };
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// Starts a list under this name.
    ///
    /// Entries of a flat list are named `Prefix.N`. Otherwise they are named
    /// `Prefix.member.N`, where `member_override` replaces `member` when the model renames
    /// list members.
    pub fn start_list(self, flat: bool, member_override: Option<&str>) -> QueryListWriter<'a> {
        let entry_prefix = match (flat, member_override) {
            (true, _) => self.prefix.to_string(),
            (false, Some(member)) => format!("{}.{}", self.prefix, member),
            (false, None) => format!("{}.member", self.prefix),
        };
        QueryListWriter {
            output: self.output,
            list_prefix: self.prefix,
            entry_prefix,
            next_index: 1,
        }
    }

    /// Writes a string value.
    pub fn string(mut self, value: &str) {
        self.write_param_name();
        self.output.push_str(&encode(value));
    }

    /// Writes a boolean value as `true` or `false`.
    pub fn boolean(mut self, value: bool) {
        self.write_param_name();
        self.output.push_str(if value { "true" } else { "false" });
    }

    /// Writes an integer value.
    pub fn integer(mut self, value: i64) {
        self.write_param_name();
        self.output.push_str(&value.to_string());
    }

    /// Writes a timestamp in the given format.
    pub fn date_time(
        mut self,
        value: &DateTime,
        format: Format,
    ) -> Result<(), DateTimeFormatError> {
        let formatted = value.fmt(format)?;
        self.write_param_name();
        self.output.push_str(&encode(&formatted));
        Ok(())
    }

    fn write_param_name(&mut self) {
        self.output.push('&');
        self.output.push_str(&self.prefix);
        self.output.push('=');
    }
}

/// Writes the entries of a list.
#[derive(Debug)]
pub struct QueryListWriter<'a> {
    output: &'a mut String,
    list_prefix: Cow<'a, str>,
    entry_prefix: String,
    next_index: usize,
}

impl<'a> QueryListWriter<'a> {
    /// Returns a writer for the next entry of the list.
    pub fn entry(&mut self) -> QueryValueWriter<'_> {
        let prefix = format!("{}.{}", self.entry_prefix, self.next_index);
        self.next_index += 1;
        QueryValueWriter::new(self.output, Cow::Owned(prefix))
    }

    /// Finishes the list. An empty list is still sent, as `Prefix=`.
    pub fn finish(self) {
        if self.next_index == 1 {
            QueryValueWriter::new(self.output, self.list_prefix).write_param_name();
        }
    }
}
