/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Human readable rendering of generated shapes.
//!
//! Shapes render as `{Name: value, Other: [a, b]}`, naming members by their wire name. Unset
//! members are left out entirely. The output is diagnostic and is not meant to be parsed.

use std::fmt;

/// Renders a shape member by member into a [`fmt::Formatter`].
///
/// ```
/// use smithy_types::display::ShapeDisplay;
/// use std::fmt;
///
/// struct Tag {
///     key: Option<String>,
///     value: Option<String>,
/// }
///
/// impl fmt::Display for Tag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         ShapeDisplay::new(f)
///             .field("Key", self.key.as_ref())
///             .field("Value", self.value.as_ref())
///             .finish()
///     }
/// }
///
/// let tag = Tag { key: Some("env".into()), value: None };
/// assert_eq!(tag.to_string(), "{Key: env}");
/// ```
pub struct ShapeDisplay<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl<'a, 'b> ShapeDisplay<'a, 'b> {
    /// Starts rendering a shape into `f`.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        let result = f.write_str("{");
        ShapeDisplay {
            f,
            result,
            has_fields: false,
        }
    }

    fn name(&mut self, name: &str) -> fmt::Result {
        if self.has_fields {
            self.f.write_str(", ")?;
        }
        self.has_fields = true;
        write!(self.f, "{}: ", name)
    }

    /// Renders `name: value`, or nothing when `value` is `None`.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: fmt::Display + ?Sized,
    {
        if let Some(value) = value {
            self.result = self
                .result
                .and_then(|_| self.name(name))
                .and_then(|_| write!(self.f, "{}", value));
        }
        self
    }

    /// Renders `name: [a, b]`, or nothing when `value` is `None`.
    ///
    /// An empty list is present and renders as `name: []`.
    pub fn list<T>(&mut self, name: &str, value: Option<&[T]>) -> &mut Self
    where
        T: fmt::Display,
    {
        if let Some(items) = value {
            self.result = self.result.and_then(|_| {
                self.name(name)?;
                self.f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        self.f.write_str(", ")?;
                    }
                    write!(self.f, "{}", item)?;
                }
                self.f.write_str("]")
            });
        }
        self
    }

    /// Closes the shape and returns the first error encountered, if any.
    pub fn finish(&mut self) -> fmt::Result {
        self.result = self.result.and_then(|_| self.f.write_str("}"));
        self.result
    }
}

impl fmt::Debug for ShapeDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeDisplay")
            .field("has_fields", &self.has_fields)
            .finish()
    }
}
