/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Generic errors shared by generated shapes and protocol runtimes.

use std::error::Error;
use std::fmt;

/// Error metadata returned by the service in place of a modeled response.
///
/// Query protocol services return a code, a human readable message and the ID of the failed
/// request. All three are optional since the service does not guarantee any of them.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

/// Builder for [`ErrorMetadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorMetadata,
}

impl Builder {
    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the ID of the request that failed.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Creates the error metadata.
    pub fn build(self) -> ErrorMetadata {
        self.inner
    }
}

impl ErrorMetadata {
    /// Returns a builder for `ErrorMetadata`.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the error code, for example `DBClusterNotFoundFault`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID the service assigned to the failed request.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl Error for ErrorMetadata {}

/// A string could not be converted into a member of a closed enumeration.
///
/// Raised for the empty string and for any value the enumeration does not define. Matching is
/// exact and case-sensitive, so `"Enabled"` is rejected where `"enabled"` is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEnumValue {
    enum_name: &'static str,
    value: String,
}

impl InvalidEnumValue {
    /// Creates an error for `value`, which is not a member of the enum named `enum_name`.
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        InvalidEnumValue {
            enum_name,
            value: value.into(),
        }
    }

    /// Name of the enumeration that rejected the value.
    pub fn enum_name(&self) -> &'static str {
        self.enum_name
    }

    /// The rejected value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True if the rejected value was empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for InvalidEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}: value cannot be null or empty", self.enum_name)
        } else {
            write!(
                f,
                "cannot create {} from unrecognized value `{}`",
                self.enum_name, self.value
            )
        }
    }
}

impl Error for InvalidEnumValue {}

#[cfg(test)]
mod test {
    use super::{ErrorMetadata, InvalidEnumValue};

    #[test]
    fn error_metadata_display() {
        let error = ErrorMetadata::builder()
            .code("DBClusterNotFoundFault")
            .message("DBCluster missing not found.")
            .request_id("6c1bff8c-7a33-4f4c-a0b5-3cfa9e0f6d5c")
            .build();
        assert_eq!(error.code(), Some("DBClusterNotFoundFault"));
        assert_eq!(
            error.to_string(),
            "Error { code: \"DBClusterNotFoundFault\", message: \"DBCluster missing not found.\", request_id: \"6c1bff8c-7a33-4f4c-a0b5-3cfa9e0f6d5c\" }"
        );
        assert_eq!(ErrorMetadata::builder().build().to_string(), "Error");
    }

    #[test]
    fn invalid_enum_value_messages() {
        let empty = InvalidEnumValue::new("WriteForwardingStatus", "");
        assert!(empty.is_empty());
        assert_eq!(
            empty.to_string(),
            "WriteForwardingStatus: value cannot be null or empty"
        );

        let bogus = InvalidEnumValue::new("WriteForwardingStatus", "bogus");
        assert!(!bogus.is_empty());
        assert_eq!(bogus.value(), "bogus");
        assert_eq!(
            bogus.to_string(),
            "cannot create WriteForwardingStatus from unrecognized value `bogus`"
        );
    }
}
