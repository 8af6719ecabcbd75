/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! AWS Query protocol bindings shared by every operation.
//!
//! Requests are form-urlencoded bodies built with [`smithy_query`]. Responses are XML documents
//! of the form `<{Action}Response><{Action}Result>...</{Action}Result></{Action}Response>`, or an
//! `<ErrorResponse>` when the call failed.

use crate::config::Config;
use crate::error::{BuildError, ResponseError};
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use smithy_query::{QueryValueWriter, QueryWriter};
use smithy_types::date_time::Format;
use smithy_types::{DateTime, ErrorMetadata};
use smithy_xml::decode::{try_data, Document, ScopedDecoder};
use smithy_xml::XmlDecodeError;
use std::convert::TryFrom;

/// Version of the RDS API these shapes belong to.
pub const API_VERSION: &str = "2014-10-31";

/// A value that can be written into a Query request body.
pub trait SerializeQuery {
    /// Writes `self` under the name held by `writer`.
    fn serialize_query(&self, writer: QueryValueWriter<'_>) -> Result<(), BuildError>;
}

/// A value that can be read from the XML element `decoder` is scoped to.
pub trait DeserializeXml: Sized {
    /// Reads a value from the current element.
    fn deserialize_xml(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Self, XmlDecodeError>;
}

/// The input of an operation.
pub trait QueryRequest: SerializeQuery {
    /// Name of the operation, sent as the `Action` parameter.
    const ACTION: &'static str;

    /// Serializes the request body.
    fn serialize_body(&self) -> Result<String, BuildError> {
        let mut out = String::new();
        let mut writer = QueryWriter::new(&mut out, Self::ACTION, API_VERSION);
        self.serialize_query(writer.root())?;
        writer.finish();
        Ok(out)
    }

    /// Builds the unsigned HTTP request for this input.
    fn to_http_request(&self, config: &Config) -> Result<http::Request<Bytes>, BuildError> {
        let body = self.serialize_body()?;
        let uri = config.endpoint()?;
        tracing::trace!(action = Self::ACTION, uri = %uri, "built request");
        http::Request::builder()
            .method(http::Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(CONTENT_LENGTH, body.len())
            .body(Bytes::from(body))
            .map_err(BuildError::http)
    }
}

/// The output of an operation.
pub trait QueryResponse: DeserializeXml {
    /// Name of the operation the response belongs to.
    const ACTION: &'static str;

    /// Parses a response body.
    fn parse_response(body: &[u8]) -> Result<Self, ResponseError> {
        parse_query_response(body, Self::ACTION)
    }
}

fn parse_query_response<T: DeserializeXml>(body: &[u8], action: &str) -> Result<T, ResponseError> {
    let mut doc = Document::try_from(body)?;
    let mut root = doc.root_element()?;
    if root.start_el().matches("ErrorResponse") {
        let error = parse_error_response(&mut root)?;
        tracing::debug!(action = action, error = %error, "service returned an error response");
        return Err(ResponseError::Service(error));
    }
    let response_el = format!("{}Response", action);
    if !root.start_el().matches(&response_el) {
        return Err(XmlDecodeError::custom(format!(
            "expected <{}> but found <{}>",
            response_el,
            root.start_el().local()
        ))
        .into());
    }
    let result_el = format!("{}Result", action);
    let mut output = None;
    // the rest of the document is still read so that a truncated body is an error
    while let Some(mut tag) = root.next_tag()? {
        if output.is_none() && tag.start_el().matches(&result_el) {
            output = Some(T::deserialize_xml(&mut tag)?);
        }
    }
    output.ok_or_else(|| {
        XmlDecodeError::custom(format!("<{}> is missing <{}>", response_el, result_el)).into()
    })
}

fn parse_error_response(root: &mut ScopedDecoder<'_, '_>) -> Result<ErrorMetadata, XmlDecodeError> {
    let mut builder = ErrorMetadata::builder();
    while let Some(mut tag) = root.next_tag()? {
        match tag.start_el().local() {
            "Error" => {
                while let Some(mut field) = tag.next_tag()? {
                    match field.start_el().local() {
                        "Code" => builder = builder.code(try_data(&mut field)?),
                        "Message" => builder = builder.message(try_data(&mut field)?),
                        _ => {}
                    }
                }
            }
            "RequestId" => builder = builder.request_id(try_data(&mut tag)?),
            _ => {}
        }
    }
    Ok(builder.build())
}

impl SerializeQuery for String {
    fn serialize_query(&self, writer: QueryValueWriter<'_>) -> Result<(), BuildError> {
        writer.string(self);
        Ok(())
    }
}

impl SerializeQuery for bool {
    fn serialize_query(&self, writer: QueryValueWriter<'_>) -> Result<(), BuildError> {
        writer.boolean(*self);
        Ok(())
    }
}

impl SerializeQuery for i32 {
    fn serialize_query(&self, writer: QueryValueWriter<'_>) -> Result<(), BuildError> {
        writer.integer(i64::from(*self));
        Ok(())
    }
}

impl SerializeQuery for i64 {
    fn serialize_query(&self, writer: QueryValueWriter<'_>) -> Result<(), BuildError> {
        writer.integer(*self);
        Ok(())
    }
}

impl SerializeQuery for DateTime {
    fn serialize_query(&self, writer: QueryValueWriter<'_>) -> Result<(), BuildError> {
        Ok(writer.date_time(self, Format::DateTime)?)
    }
}

impl DeserializeXml for String {
    fn deserialize_xml(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Self, XmlDecodeError> {
        Ok(try_data(decoder)?.into_owned())
    }
}

impl DeserializeXml for bool {
    fn deserialize_xml(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Self, XmlDecodeError> {
        match try_data(decoder)?.as_ref() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(XmlDecodeError::custom(format!(
                "expected `true` or `false`, found `{}`",
                other
            ))),
        }
    }
}

macro_rules! deserialize_integer {
    ($($ty:ty),*) => {
        $(
            impl DeserializeXml for $ty {
                fn deserialize_xml(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Self, XmlDecodeError> {
                    let data = try_data(decoder)?;
                    data.trim().parse::<$ty>().map_err(|err| {
                        XmlDecodeError::custom(format!("expected {}, found `{}`: {}", stringify!($ty), data, err))
                    })
                }
            }
        )*
    };
}

deserialize_integer!(i32, i64);

impl DeserializeXml for DateTime {
    fn deserialize_xml(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Self, XmlDecodeError> {
        let data = try_data(decoder)?;
        DateTime::from_str(data.trim(), Format::DateTime)
            .map_err(|err| XmlDecodeError::custom(err.to_string()))
    }
}

/// Lists accept any element name for their entries.
impl<T: DeserializeXml> DeserializeXml for Vec<T> {
    fn deserialize_xml(decoder: &mut ScopedDecoder<'_, '_>) -> Result<Self, XmlDecodeError> {
        let mut out = Vec::new();
        while let Some(mut tag) = decoder.next_tag()? {
            out.push(T::deserialize_xml(&mut tag)?);
        }
        Ok(out)
    }
}
