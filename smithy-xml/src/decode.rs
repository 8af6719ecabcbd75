/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! XML decoding scoped to one element at a time.
//!
//! A [`Document`] yields its root element as a [`ScopedDecoder`]. Each decoder iterates the
//! tokens of its own element only, and [`ScopedDecoder::next_tag`] hands out decoders for the
//! direct children. Dropping a decoder consumes whatever is left of its element, so callers
//! may stop reading a child at any point.
//!
//! Malformed input and documents that end before an element is closed are reported as errors
//! by the decoder that reads them.

use crate::unescape::unescape;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;
use xmlparser::{ElementEnd, Token, Tokenizer};

/// Nesting depth of an element; the root element has depth 0.
pub type Depth = usize;

/// Failure while decoding an XML document.
#[derive(Debug, Error)]
pub enum XmlDecodeError {
    /// The input is not well formed XML.
    #[error("invalid XML: {0}")]
    InvalidXml(#[from] xmlparser::Error),
    /// The input is not UTF-8.
    #[error("invalid XML: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// An entity or character reference could not be unescaped.
    #[error("invalid XML escape: {esc}")]
    InvalidEscape {
        /// The offending escape sequence.
        esc: String,
    },
    /// The document is well formed but does not have the expected structure.
    #[error("error decoding XML: {0}")]
    Custom(Cow<'static, str>),
}

impl XmlDecodeError {
    /// Creates a [`XmlDecodeError::Custom`] error.
    pub fn custom(msg: impl Into<Cow<'static, str>>) -> Self {
        XmlDecodeError::Custom(msg.into())
    }
}

/// A qualified element or attribute name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Name<'a> {
    /// Namespace prefix, empty when there is none.
    pub prefix: &'a str,
    /// Local part of the name.
    pub local: &'a str,
}

impl Name<'_> {
    /// Returns true if `tag_name` names this element. `tag_name` may carry a prefix, as in
    /// `xsi:type`.
    pub fn matches(&self, tag_name: &str) -> bool {
        match tag_name.split_once(':') {
            None => tag_name == self.local,
            Some((prefix, local)) => self.prefix == prefix && self.local == local,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Attr<'a> {
    name: Name<'a>,
    value: Cow<'a, str>,
}

/// The start tag of an element: its name and attributes.
#[derive(Debug, PartialEq, Eq)]
pub struct StartEl<'a> {
    name: Name<'a>,
    attributes: Vec<Attr<'a>>,
    closed: bool,
    depth: Depth,
}

impl<'a> StartEl<'a> {
    fn new(local: &'a str, prefix: &'a str, depth: Depth) -> Self {
        StartEl {
            name: Name { prefix, local },
            attributes: vec![],
            closed: false,
            depth,
        }
    }

    /// Depth of this element in the document.
    pub fn depth(&self) -> Depth {
        self.depth
    }

    /// Value of the attribute `key`, unescaped.
    pub fn attr<'b>(&'b self, key: &'b str) -> Option<&'b str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.matches(key))
            .map(|attr| attr.value.as_ref())
    }

    /// Returns true if `pat` names this element.
    pub fn matches(&self, pat: &str) -> bool {
        self.name.matches(pat)
    }

    /// Local part of the element name. For `<rds:DBCluster>` this is `DBCluster`.
    pub fn local(&self) -> &'a str {
        self.name.local
    }

    /// Namespace prefix of the element name, empty when there is none.
    pub fn prefix(&self) -> &'a str {
        self.name.prefix
    }

    /// True if this element was self-closing, as in `<Marker/>`.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn end_el(&self, el: ElementEnd<'_>, depth: Depth) -> bool {
        if depth != self.depth {
            return false;
        }
        match el {
            ElementEnd::Open | ElementEnd::Empty => false,
            ElementEnd::Close(prefix, local) => {
                prefix.as_str() == self.name.prefix && local.as_str() == self.name.local
            }
        }
    }
}

/// A single token of the document.
#[derive(Debug)]
pub struct XmlToken<'inp>(Token<'inp>);

/// An XML document being decoded.
pub struct Document<'a> {
    tokenizer: Tokenizer<'a>,
    depth: Depth,
}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'a> TryFrom<&'a [u8]> for Document<'a> {
    type Error = XmlDecodeError;

    fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
        Ok(Document::new(std::str::from_utf8(value)?))
    }
}

impl<'inp> Document<'inp> {
    /// Starts decoding `doc`.
    pub fn new(doc: &'inp str) -> Self {
        Document {
            tokenizer: Tokenizer::from(doc),
            depth: 0,
        }
    }

    /// Returns the next start element anywhere in the document, or `None` at the end of the
    /// document.
    pub fn next_start_element(&mut self) -> Result<Option<StartEl<'inp>>, XmlDecodeError> {
        next_start_element(self)
    }

    /// Returns a decoder scoped to the root element.
    pub fn root_element<'a>(&'a mut self) -> Result<ScopedDecoder<'inp, 'a>, XmlDecodeError> {
        let start_el = self
            .next_start_element()?
            .ok_or_else(|| XmlDecodeError::custom("no root element"))?;
        Ok(ScopedDecoder {
            doc: self,
            start_el,
            terminated: false,
        })
    }
}

impl<'inp> Iterator for Document<'inp> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        let tok = match self.tokenizer.next()? {
            Ok(tok) => tok,
            Err(err) => return Some(Err(err.into())),
        };
        match tok {
            Token::ElementStart { .. } => {
                self.depth += 1;
                // the start tag reports the depth of the element it opens
                return Some(Ok((XmlToken(tok), self.depth - 1)));
            }
            Token::ElementEnd {
                end: ElementEnd::Close(_, _),
                ..
            }
            | Token::ElementEnd {
                end: ElementEnd::Empty,
                ..
            } => match self.depth.checked_sub(1) {
                Some(depth) => self.depth = depth,
                None => return Some(Err(XmlDecodeError::custom("unbalanced closing tag"))),
            },
            _ => {}
        }
        Some(Ok((XmlToken(tok), self.depth)))
    }
}

/// Decoder for the tokens of a single element.
#[derive(Debug)]
pub struct ScopedDecoder<'inp, 'a> {
    doc: &'a mut Document<'inp>,
    start_el: StartEl<'inp>,
    terminated: bool,
}

impl Drop for ScopedDecoder<'_, '_> {
    fn drop(&mut self) {
        for _ in self {}
    }
}

impl<'inp> ScopedDecoder<'inp, '_> {
    /// The start tag of the element this decoder is scoped to.
    pub fn start_el<'a>(&'a self) -> &'a StartEl<'inp> {
        &self.start_el
    }

    /// Returns a decoder for the next direct child element, or `None` once the element ends.
    ///
    /// Fails if the document is malformed or ends before this element is closed.
    pub fn next_tag<'a>(
        &'a mut self,
    ) -> Result<Option<ScopedDecoder<'inp, 'a>>, XmlDecodeError> {
        let start_el = match next_start_element(self)? {
            Some(start_el) => start_el,
            None => return Ok(None),
        };
        Ok(Some(ScopedDecoder {
            doc: &mut *self.doc,
            start_el,
            terminated: false,
        }))
    }
}

impl<'inp> Iterator for ScopedDecoder<'inp, '_> {
    type Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start_el.closed {
            self.terminated = true;
        }
        if self.terminated {
            return None;
        }
        let (tok, depth) = match self.doc.next() {
            Some(Ok(next)) => next,
            Some(Err(err)) => {
                self.terminated = true;
                return Some(Err(err));
            }
            None => {
                self.terminated = true;
                return Some(Err(XmlDecodeError::custom(format!(
                    "document ended before </{}> was found",
                    self.start_el.local()
                ))));
            }
        };
        if let Token::ElementEnd { end, .. } = tok.0 {
            if self.start_el.end_el(end, depth) {
                self.terminated = true;
                return None;
            }
        }
        Some(Ok((tok, depth)))
    }
}

fn next_start_element<'inp>(
    tokens: &mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>>,
) -> Result<Option<StartEl<'inp>>, XmlDecodeError> {
    let mut out = StartEl::new("", "", 0);
    let mut in_start_tag = false;
    loop {
        let token = match tokens.next() {
            Some(token) => token?,
            None if in_start_tag => {
                return Err(XmlDecodeError::custom(format!(
                    "document ended inside the start tag of <{}>",
                    out.name.local
                )))
            }
            None => return Ok(None),
        };
        match token {
            (XmlToken(Token::ElementStart { local, prefix, .. }), depth) => {
                out.name.local = local.as_str();
                out.name.prefix = prefix.as_str();
                out.depth = depth;
                in_start_tag = true;
            }
            (
                XmlToken(Token::Attribute {
                    prefix,
                    local,
                    value,
                    ..
                }),
                _,
            ) => out.attributes.push(Attr {
                name: Name {
                    local: local.as_str(),
                    prefix: prefix.as_str(),
                },
                value: unescape(value.as_str())?,
            }),
            (
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Open,
                    ..
                }),
                _,
            ) if in_start_tag => break,
            (
                XmlToken(Token::ElementEnd {
                    end: ElementEnd::Empty,
                    ..
                }),
                _,
            ) if in_start_tag => {
                out.closed = true;
                break;
            }
            _ => {}
        }
    }
    Ok(Some(out))
}

/// Returns the unescaped text content of the current element.
///
/// An element without text, such as `<Marker/>` or `<Marker></Marker>`, yields `""`. Finding
/// a child element instead of text is an error.
pub fn try_data<'inp>(
    tokens: &mut impl Iterator<Item = Result<(XmlToken<'inp>, Depth), XmlDecodeError>>,
) -> Result<Cow<'inp, str>, XmlDecodeError> {
    loop {
        match tokens.next() {
            None => return Ok(Cow::Borrowed("")),
            Some(Ok((XmlToken(Token::Text { text }), _))) => return unescape(text.as_str()),
            Some(Ok((XmlToken(Token::Cdata { text, .. }), _))) => {
                return Ok(Cow::Borrowed(text.as_str()))
            }
            Some(Ok((XmlToken(tok @ Token::ElementStart { .. }), _))) => {
                return Err(XmlDecodeError::custom(format!(
                    "looking for a data element, found: {:?}",
                    tok
                )))
            }
            Some(Err(err)) => return Err(err),
            Some(Ok(_)) => {}
        }
    }
}

#[cfg(test)]
mod test {
    use crate::decode::{try_data, Document, XmlDecodeError};
    use std::convert::TryFrom;

    #[test]
    fn scoped_tokens() {
        let xml = r#"<Response><A></A></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().expect("valid document");
        assert_eq!(root.start_el().local(), "Response");
        assert_eq!(root.start_el().depth(), 0);
        let a = root.next_tag().unwrap().expect("A exists");
        assert_eq!(a.start_el().local(), "A");
        assert_eq!(a.start_el().depth(), 1);
        drop(a);
        assert!(root.next_tag().unwrap().is_none());
    }

    #[test]
    fn nested_children_are_skipped() {
        let xml = r#"<Response>
            <DBClusters>
                <DBCluster><Status>available</Status></DBCluster>
                <DBCluster><Status>creating</Status></DBCluster>
            </DBClusters>
            <Marker>abc</Marker>
        </Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut names = vec![];
        while let Some(tag) = root.next_tag().unwrap() {
            names.push(tag.start_el().local());
        }
        assert_eq!(names, vec!["DBClusters", "Marker"]);
    }

    #[test]
    fn partially_read_children() {
        let xml = r#"<Response><Clusters><Cluster><Id>a</Id><Id>b</Id></Cluster></Clusters><Marker>m</Marker></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        {
            let mut clusters = root.next_tag().unwrap().unwrap();
            let mut cluster = clusters.next_tag().unwrap().unwrap();
            let mut id = cluster.next_tag().unwrap().unwrap();
            assert_eq!(try_data(&mut id).unwrap(), "a");
        }
        let mut marker = root.next_tag().unwrap().unwrap();
        assert_eq!(marker.start_el().local(), "Marker");
        assert_eq!(try_data(&mut marker).unwrap(), "m");
    }

    #[test]
    fn self_closing_elements() {
        let xml = r#"<Response><Marker/><Status>available</Status></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut marker = root.next_tag().unwrap().unwrap();
        assert!(marker.start_el().is_closed());
        assert_eq!(try_data(&mut marker).unwrap(), "");
        drop(marker);
        let mut status = root.next_tag().unwrap().unwrap();
        assert_eq!(try_data(&mut status).unwrap(), "available");
    }

    #[test]
    fn prefixes_and_attributes() {
        let xml = r#"<rds:Response xmlns:rds="http://rds.amazonaws.com/doc/2014-10-31/"><Item key="a&amp;b" xsi:type="x"/></rds:Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        assert_eq!(root.start_el().prefix(), "rds");
        assert!(root.start_el().matches("rds:Response"));
        assert!(root.start_el().matches("Response"));
        assert!(!root.start_el().matches("other:Response"));
        let item = root.next_tag().unwrap().unwrap();
        assert_eq!(item.start_el().attr("key"), Some("a&b"));
        assert_eq!(item.start_el().attr("xsi:type"), Some("x"));
        assert_eq!(item.start_el().attr("missing"), None);
    }

    #[test]
    fn unescapes_data() {
        let xml = r#"<Message>DBCluster &lt;a&gt; &amp; &#x62;</Message>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        assert_eq!(try_data(&mut root).unwrap(), "DBCluster <a> & b");
    }

    #[test]
    fn data_where_an_element_was_expected() {
        let xml = r#"<Response><Inner>a</Inner></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let err = try_data(&mut root).expect_err("child element is not data");
        assert!(matches!(err, XmlDecodeError::Custom(_)), "{:?}", err);
    }

    #[test]
    fn empty_document() {
        let mut doc = Document::new("");
        assert!(doc.root_element().is_err());
    }

    #[test]
    fn invalid_utf8() {
        let err = Document::try_from(&[0xff, 0xfe][..]).expect_err("not utf-8");
        assert!(matches!(err, XmlDecodeError::InvalidUtf8(_)));
    }

    #[test]
    fn malformed_document() {
        let mut doc = Document::new("<Response><A attr></A></Response>");
        let mut root = doc.root_element().unwrap();
        let results: Vec<_> = root.by_ref().collect();
        assert!(results.iter().any(|r| r.is_err()));
    }

    #[test]
    fn truncated_document() {
        let xml = "<Response><Clusters><Cluster><Id>a</Id>";
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let mut clusters = root.next_tag().unwrap().unwrap();
        let mut cluster = clusters.next_tag().unwrap().unwrap();
        let mut id = cluster.next_tag().unwrap().unwrap();
        assert_eq!(try_data(&mut id).unwrap(), "a");
        drop(id);
        let err = cluster.next_tag().expect_err("</Cluster> is missing");
        assert!(
            err.to_string().contains("</Cluster>"),
            "unexpected message: {}",
            err
        );
    }

    #[test]
    fn malformed_child() {
        let xml = "<Response><Cluster>a</Cluster><Cluster <<<garbage";
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        drop(root.next_tag().unwrap().unwrap());
        assert!(root.next_tag().is_err());
    }

    #[test]
    fn invalid_attribute_escape() {
        let xml = r#"<Response><Cluster key="&bogus;">a</Cluster></Response>"#;
        let mut doc = Document::new(xml);
        let mut root = doc.root_element().unwrap();
        let err = root.next_tag().expect_err("unknown entity");
        assert!(matches!(err, XmlDecodeError::InvalidEscape { .. }), "{:?}", err);
    }
}
