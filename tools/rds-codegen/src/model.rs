/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Serde representation of the subset of the Smithy JSON AST the generator understands.

use anyhow::{bail, Context, Result};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub const DOCUMENTATION_TRAIT: &str = "smithy.api#documentation";
pub const ENUM_TRAIT: &str = "smithy.api#enum";
pub const XML_NAME_TRAIT: &str = "smithy.api#xmlName";

/// A parsed model. Shapes are keyed by their absolute shape ID, e.g. `com.amazonaws.rds#Tag`.
#[derive(Debug, Deserialize)]
pub struct Model {
    pub smithy: String,
    pub shapes: BTreeMap<String, Shape>,
}

impl Model {
    pub fn from_file(path: &Path) -> Result<Model> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model at {:?}", path))?;
        Self::from_json(&contents).with_context(|| format!("invalid model at {:?}", path))
    }

    pub fn from_json(json: &str) -> Result<Model> {
        let model: Model = serde_json::from_str(json)?;
        if !model.smithy.starts_with("1.") {
            bail!("unsupported Smithy IDL version `{}`", model.smithy);
        }
        Ok(model)
    }

    pub fn shape(&self, id: &str) -> Result<&Shape> {
        self.shapes
            .get(id)
            .with_context(|| format!("shape `{}` is referenced but not defined", id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    String {
        #[serde(default)]
        traits: Traits,
    },
    Boolean {},
    Integer {},
    Long {},
    Timestamp {},
    List {
        member: MemberRef,
    },
    Structure {
        #[serde(default, deserialize_with = "deserialize_ordered_members")]
        members: Vec<(String, MemberRef)>,
        #[serde(default)]
        traits: Traits,
    },
    Operation {
        input: Option<ShapeRef>,
        output: Option<ShapeRef>,
        #[serde(default)]
        traits: Traits,
    },
    Service {
        version: String,
        #[serde(default)]
        operations: Vec<ShapeRef>,
    },
}

#[derive(Debug, Deserialize)]
pub struct ShapeRef {
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct MemberRef {
    pub target: String,
    #[serde(default)]
    pub traits: Traits,
}

#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct Traits(BTreeMap<String, serde_json::Value>);

impl Traits {
    pub fn documentation(&self) -> Option<&str> {
        self.0.get(DOCUMENTATION_TRAIT).and_then(|doc| doc.as_str())
    }

    pub fn xml_name(&self) -> Option<&str> {
        self.0.get(XML_NAME_TRAIT).and_then(|name| name.as_str())
    }

    pub fn enum_definitions(&self) -> Result<Option<Vec<EnumDefinition>>> {
        match self.0.get(ENUM_TRAIT) {
            Some(value) => Ok(Some(
                serde_json::from_value(value.clone()).context("invalid enum trait")?,
            )),
            None => Ok(None),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnumDefinition {
    pub value: String,
    pub name: Option<String>,
    pub documentation: Option<String>,
}

/// Strips the namespace from an absolute shape ID.
pub fn shape_name(id: &str) -> &str {
    id.rsplit_once('#').map_or(id, |(_, name)| name)
}

struct OrderedMembers;

impl<'de> Visitor<'de> for OrderedMembers {
    type Value = Vec<(String, MemberRef)>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("map of structure members")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut result = Vec::new();
        while let Some((name, member)) = map.next_entry::<String, MemberRef>()? {
            result.push((name, member));
        }
        Ok(result)
    }
}

// Member order is the declaration order of the generated fields, so the members can't go
// through a sorted map.
fn deserialize_ordered_members<'de, D>(de: D) -> Result<Vec<(String, MemberRef)>, D::Error>
where
    D: Deserializer<'de>,
{
    de.deserialize_map(OrderedMembers)
}
