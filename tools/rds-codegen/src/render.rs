/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Renders the `model`, `input`, `output` and `operation` modules of the service crate.
//!
//! The rendered modules only declare shapes through the `shape!` and `string_enum!` macros of
//! the service crate; accessors, builders and protocol bindings come from the macros.

use crate::model::{shape_name, EnumDefinition, Model, Shape, Traits};
use crate::naming::{field_name, setter_name, type_name};
use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::fmt::Write;

const LICENSE_HEADER: &str = "/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
";

const MAX_WIDTH: usize = 100;

/// A rendered Rust module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: &'static str,
    pub contents: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Module {
    Model,
    Input,
    Output,
}

#[derive(Debug)]
struct Operation<'a> {
    name: &'a str,
    input: Option<&'a str>,
    output: Option<&'a str>,
    documentation: Option<&'a str>,
}

struct Renderer<'a> {
    model: &'a Model,
    source: &'a str,
    operations: Vec<Operation<'a>>,
    // Structure shape ID to the operation module it is rendered into.
    roles: BTreeMap<&'a str, (Module, &'a str)>,
}

/// Renders every module for `model`. `source` names the model file in the generated headers.
pub fn render(model: &Model, source: &str) -> Result<Vec<GeneratedFile>> {
    let renderer = Renderer::new(model, source)?;
    Ok(vec![
        GeneratedFile {
            name: "model.rs",
            contents: renderer.render_model()?,
        },
        GeneratedFile {
            name: "input.rs",
            contents: renderer.render_operation_shapes(Module::Input)?,
        },
        GeneratedFile {
            name: "output.rs",
            contents: renderer.render_operation_shapes(Module::Output)?,
        },
        GeneratedFile {
            name: "operation.rs",
            contents: renderer.render_operations()?,
        },
    ])
}

impl<'a> Renderer<'a> {
    fn new(model: &'a Model, source: &'a str) -> Result<Self> {
        let mut operations = Vec::new();
        let mut roles = BTreeMap::new();
        for (id, shape) in &model.shapes {
            match shape {
                Shape::Operation {
                    input,
                    output,
                    traits,
                } => {
                    let name = shape_name(id);
                    for (module, target) in [(Module::Input, input), (Module::Output, output)] {
                        if let Some(target) = target {
                            let previous = roles.insert(target.target.as_str(), (module, name));
                            if let Some((_, other)) = previous {
                                bail!(
                                    "`{}` is bound to both `{}` and `{}`",
                                    target.target,
                                    other,
                                    name
                                );
                            }
                        }
                    }
                    operations.push(Operation {
                        name,
                        input: input.as_ref().map(|input| input.target.as_str()),
                        output: output.as_ref().map(|output| output.target.as_str()),
                        documentation: traits.documentation(),
                    });
                }
                Shape::Service {
                    version,
                    operations: bound,
                } => {
                    tracing::info!(
                        service = shape_name(id),
                        version = %version,
                        operations = bound.len(),
                        "rendering service"
                    );
                }
                _ => {}
            }
        }
        operations.sort_by(|a, b| a.name.cmp(b.name));
        Ok(Renderer {
            model,
            source,
            operations,
            roles,
        })
    }

    fn header(&self, module_doc: &str) -> String {
        format!(
            "{}\n// Code generated by rds-codegen from {}. DO NOT EDIT.\n\n//! {}\n",
            LICENSE_HEADER, self.source, module_doc
        )
    }

    fn render_model(&self) -> Result<String> {
        let mut enums = Vec::new();
        let mut structures = Vec::new();
        for (id, shape) in &self.model.shapes {
            match shape {
                Shape::String { traits } => {
                    if let Some(definitions) = traits
                        .enum_definitions()
                        .with_context(|| format!("invalid enum `{}`", id))?
                    {
                        enums.push((type_name(shape_name(id))?, definitions, traits.documentation()));
                    }
                }
                Shape::Structure { .. } if !self.roles.contains_key(id.as_str()) => {
                    structures.push((type_name(shape_name(id))?, id.as_str()));
                }
                _ => {}
            }
        }
        enums.sort_by(|a, b| a.0.cmp(&b.0));
        structures.sort();

        let mut out = self.header("Data structures and enumerations shared by the operations.");
        for (name, definitions, documentation) in &enums {
            out.push('\n');
            render_enum(&mut out, name, definitions, *documentation)?;
        }
        for (name, id) in &structures {
            out.push('\n');
            self.render_structure(&mut out, Module::Model, name, id, None)?;
        }
        tracing::debug!(
            enums = enums.len(),
            structures = structures.len(),
            "rendered model.rs"
        );
        Ok(out)
    }

    fn render_operation_shapes(&self, module: Module) -> Result<String> {
        let mut out = match module {
            Module::Input => self.header("Input shapes of the operations."),
            _ => self.header("Output shapes of the operations."),
        };
        for operation in &self.operations {
            let (id, suffix) = match module {
                Module::Input => (operation.input, "Input"),
                _ => (operation.output, "Output"),
            };
            let id = match id {
                Some(id) => id,
                None => continue,
            };
            let name = format!("{}{}", type_name(operation.name)?, suffix);
            let fallback = format!(
                "<p>{} of the <code>{}</code> operation.</p>",
                suffix, operation.name
            );
            let documentation = match module {
                Module::Input => operation.documentation.or_else(|| self.documentation(id)),
                _ => self.documentation(id),
            };
            out.push('\n');
            self.render_structure(
                &mut out,
                module,
                &name,
                id,
                Some(documentation.unwrap_or(fallback.as_str())),
            )?;
        }
        Ok(out)
    }

    fn render_operations(&self) -> Result<String> {
        let mut out = self.header("Binds operation inputs and outputs to their AWS Query actions.");
        for operation in &self.operations {
            let name = type_name(operation.name)?;
            if operation.input.is_some() {
                write!(
                    out,
                    "\nimpl crate::protocol::QueryRequest for crate::input::{}Input {{\n    const ACTION: &'static str = \"{}\";\n}}\n",
                    name, operation.name
                )?;
            }
            if operation.output.is_some() {
                write!(
                    out,
                    "\nimpl crate::protocol::QueryResponse for crate::output::{}Output {{\n    const ACTION: &'static str = \"{}\";\n}}\n",
                    name, operation.name
                )?;
            }
        }
        Ok(out)
    }

    fn documentation(&self, id: &str) -> Option<&'a str> {
        match self.model.shapes.get(id) {
            Some(Shape::Structure { traits, .. }) => traits.documentation(),
            _ => None,
        }
    }

    fn render_structure(
        &self,
        out: &mut String,
        module: Module,
        name: &str,
        id: &str,
        documentation: Option<&str>,
    ) -> Result<()> {
        let (members, traits) = match self.model.shape(id)? {
            Shape::Structure { members, traits } => (members, traits),
            other => bail!("`{}` is not a structure: {:?}", id, other),
        };
        writeln!(out, "shape! {{")?;
        if let Some(documentation) = documentation.or_else(|| traits.documentation()) {
            write_docs(out, "    ", documentation)?;
        }
        writeln!(out, "    pub struct {} => {}Builder {{", name, name)?;
        for (member_name, member) in members {
            let kind = self
                .member_kind(module, &member.target)
                .with_context(|| format!("unsupported member `{}` of `{}`", member_name, id))?;
            if let Some(documentation) = member.traits.documentation() {
                write_docs(out, "        ", documentation)?;
            }
            let field = field_name(member_name)?;
            let setter = setter_name(member_name)?;
            let line = format!(
                "        \"{}\" => {}, {}: {},",
                member_name, field, setter, kind
            );
            if line.len() <= MAX_WIDTH {
                writeln!(out, "{}", line)?;
            } else {
                writeln!(out, "        \"{}\" => {},", member_name, field)?;
                writeln!(out, "            {}: {},", setter, kind)?;
            }
        }
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
        Ok(())
    }

    fn member_kind(&self, module: Module, target: &str) -> Result<String> {
        Ok(match self.model.shape(target)? {
            Shape::String { traits } if !is_enum(traits)? => "string".into(),
            Shape::List { member } => format!(
                "list<{}> as \"{}\"",
                self.element_type(module, &member.target)?,
                member.traits.xml_name().unwrap_or("member")
            ),
            Shape::Structure { .. } => format!("shape<{}>", self.model_type(module, target)?),
            _ => format!("value<{}>", self.element_type(module, target)?),
        })
    }

    fn element_type(&self, module: Module, target: &str) -> Result<String> {
        Ok(match self.model.shape(target)? {
            Shape::String { traits } if is_enum(traits)? => self.model_type(module, target)?,
            Shape::String { .. } => "String".into(),
            Shape::Boolean {} => "bool".into(),
            Shape::Integer {} => "i32".into(),
            Shape::Long {} => "i64".into(),
            Shape::Timestamp {} => "smithy_types::DateTime".into(),
            Shape::Structure { .. } => self.model_type(module, target)?,
            other => bail!("`{}` can't be a member or list entry: {:?}", target, other),
        })
    }

    fn model_type(&self, module: Module, target: &str) -> Result<String> {
        if let Some((_, operation)) = self.roles.get(target) {
            bail!(
                "`{}` is an operation shape of `{}` and can't be nested",
                target,
                operation
            );
        }
        let name = type_name(shape_name(target))?;
        Ok(match module {
            Module::Model => name,
            _ => format!("crate::model::{}", name),
        })
    }
}

fn is_enum(traits: &Traits) -> Result<bool> {
    Ok(traits.enum_definitions()?.is_some())
}

fn render_enum(
    out: &mut String,
    name: &str,
    definitions: &[EnumDefinition],
    documentation: Option<&str>,
) -> Result<()> {
    writeln!(out, "string_enum! {{")?;
    if let Some(documentation) = documentation {
        write_docs(out, "    ", documentation)?;
    }
    writeln!(out, "    pub enum {} {{", name)?;
    for definition in definitions {
        if let Some(documentation) = &definition.documentation {
            write_docs(out, "        ", documentation)?;
        }
        let variant = type_name(definition.name.as_deref().unwrap_or(&definition.value))?;
        writeln!(out, "        {} = \"{}\",", variant, definition.value)?;
    }
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

/// Converts the HTML documentation of the model into wrapped doc comments.
fn write_docs(out: &mut String, indent: &str, html: &str) -> Result<()> {
    let width = MAX_WIDTH - indent.len() - "/// ".len();
    for (i, paragraph) in doc_paragraphs(html).iter().enumerate() {
        if i > 0 {
            writeln!(out, "{}///", indent)?;
        }
        let mut line = String::new();
        for word in paragraph.split(' ') {
            if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
                writeln!(out, "{}/// {}", indent, line)?;
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        if !line.is_empty() {
            writeln!(out, "{}/// {}", indent, line)?;
        }
    }
    Ok(())
}

fn doc_paragraphs(html: &str) -> Vec<String> {
    html.split("</p>")
        .map(|chunk| {
            let text = strip_tags(&chunk.replace("<code>", "`").replace("</code>", "`"));
            let text = text
                .replace("&lt;", "<")
                .replace("&gt;", ">")
                .replace("&amp;", "&");
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        })
        .filter(|paragraph| !paragraph.is_empty())
        .collect()
}

fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for c in text.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{doc_paragraphs, render, write_docs};
    use crate::model::Model;

    #[test]
    fn html_docs() {
        assert_eq!(
            vec![
                "The `DBCluster` identifier.".to_owned(),
                "See the user guide.".to_owned()
            ],
            doc_paragraphs(
                "<p>The <code>DBCluster</code>\n   identifier.</p><p>See the <a href=\"x\">user guide</a>.</p>"
            )
        );
        assert!(doc_paragraphs("<p> </p>").is_empty());
        assert_eq!(vec!["a < b".to_owned()], doc_paragraphs("a &lt; b"));
    }

    #[test]
    fn wraps_docs() {
        let mut out = String::new();
        let long = "word ".repeat(30);
        write_docs(&mut out, "        ", &format!("<p>{}</p><p>short</p>", long)).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(4, lines.len(), "{}", out);
        assert!(lines.iter().all(|line| line.len() <= 100));
        assert_eq!("        ///", lines[2]);
        assert_eq!("        /// short", lines[3]);
    }

    #[test]
    fn nested_operation_shapes_are_rejected() {
        let model = Model::from_json(
            r##"{
                "smithy": "1.0",
                "shapes": {
                    "ns#Op": { "type": "operation", "input": { "target": "ns#OpInput" } },
                    "ns#OpInput": { "type": "structure", "members": {} },
                    "ns#Wrapper": {
                        "type": "structure",
                        "members": { "Inner": { "target": "ns#OpInput" } }
                    }
                }
            }"##,
        )
        .unwrap();
        let err = render(&model, "test.json").expect_err("input nested in a shared shape");
        assert!(format!("{:#}", err).contains("can't be nested"), "{:#}", err);
    }
}
