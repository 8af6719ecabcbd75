/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Errors raised while building requests and reading responses.

use smithy_types::date_time::DateTimeFormatError;
use smithy_types::ErrorMetadata;
use smithy_xml::XmlDecodeError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
enum BuildErrorKind {
    Serialization(DateTimeFormatError),
    InvalidEndpoint {
        endpoint: String,
        source: Option<http::uri::InvalidUri>,
    },
    MissingRegion,
    Http(http::Error),
}

/// A request could not be built.
#[derive(Debug)]
pub struct BuildError {
    kind: BuildErrorKind,
}

impl BuildError {
    pub(crate) fn invalid_endpoint(
        endpoint: impl Into<String>,
        source: Option<http::uri::InvalidUri>,
    ) -> Self {
        BuildError {
            kind: BuildErrorKind::InvalidEndpoint {
                endpoint: endpoint.into(),
                source,
            },
        }
    }

    pub(crate) fn missing_region() -> Self {
        BuildError {
            kind: BuildErrorKind::MissingRegion,
        }
    }

    pub(crate) fn http(err: http::Error) -> Self {
        BuildError {
            kind: BuildErrorKind::Http(err),
        }
    }
}

impl From<DateTimeFormatError> for BuildError {
    fn from(err: DateTimeFormatError) -> Self {
        BuildError {
            kind: BuildErrorKind::Serialization(err),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BuildErrorKind::*;
        match &self.kind {
            Serialization(_) => write!(f, "failed to serialize request"),
            InvalidEndpoint { endpoint, .. } => write!(f, "invalid endpoint: `{}`", endpoint),
            MissingRegion => write!(
                f,
                "no region was configured and no endpoint URL was set to override it"
            ),
            Http(_) => write!(f, "failed to construct HTTP request"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        use BuildErrorKind::*;
        match &self.kind {
            Serialization(err) => Some(err),
            InvalidEndpoint {
                source: Some(err), ..
            } => Some(err),
            Http(err) => Some(err),
            InvalidEndpoint { source: None, .. } | MissingRegion => None,
        }
    }
}

/// A response could not be turned into its output shape.
#[non_exhaustive]
#[derive(Debug)]
pub enum ResponseError {
    /// The service answered with an `<ErrorResponse>`.
    Service(ErrorMetadata),
    /// The response body was not the expected XML.
    Decode(XmlDecodeError),
}

impl ResponseError {
    /// Error metadata sent by the service, if this is a service error.
    pub fn meta(&self) -> Option<&ErrorMetadata> {
        match self {
            ResponseError::Service(meta) => Some(meta),
            ResponseError::Decode(_) => None,
        }
    }

    /// The service error code, for example `DBSnapshotNotFound`.
    pub fn code(&self) -> Option<&str> {
        self.meta().and_then(|meta| meta.code())
    }
}

impl From<XmlDecodeError> for ResponseError {
    fn from(err: XmlDecodeError) -> Self {
        ResponseError::Decode(err)
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::Service(meta) => write!(f, "service error: {}", meta),
            ResponseError::Decode(_) => write!(f, "failed to decode response"),
        }
    }
}

impl Error for ResponseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ResponseError::Service(meta) => Some(meta),
            ResponseError::Decode(err) => Some(err),
        }
    }
}
