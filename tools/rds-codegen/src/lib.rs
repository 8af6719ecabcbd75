/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Generates the shape declarations of the `rds` crate from a Smithy JSON AST model.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub mod model;
pub mod naming;
pub mod render;

use model::Model;
use render::GeneratedFile;

#[derive(Parser, Debug)]
#[clap(author, version, about)]
pub struct Args {
    /// Path to the Smithy JSON AST model
    #[clap(long)]
    pub model: PathBuf,
    /// Directory to write the generated modules into
    #[clap(long)]
    pub out_dir: PathBuf,
    /// Fail if the modules on disk differ from freshly generated ones instead of writing them
    #[clap(long)]
    pub check: bool,
}

pub fn run(args: &Args) -> Result<()> {
    let model = Model::from_file(&args.model)?;
    let source = args
        .model
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("{:?} doesn't name a model file", args.model))?;
    let files = render::render(&model, source)?;
    if args.check {
        check_files(&args.out_dir, &files)
    } else {
        write_files(&args.out_dir, &files)
    }
}

fn write_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {:?}", out_dir))?;
    for file in files {
        let path = out_dir.join(file.name);
        fs::write(&path, &file.contents)
            .with_context(|| format!("failed to write {:?}", path))?;
        tracing::info!("wrote {:?}", path);
    }
    Ok(())
}

fn check_files(out_dir: &Path, files: &[GeneratedFile]) -> Result<()> {
    let mut stale = Vec::new();
    for file in files {
        let path = out_dir.join(file.name);
        match fs::read_to_string(&path) {
            Ok(existing) if existing == file.contents => {
                tracing::debug!("{:?} is up to date", path);
            }
            Ok(_) => stale.push(path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => stale.push(path),
            Err(err) => return Err(err).with_context(|| format!("failed to read {:?}", path)),
        }
    }
    if !stale.is_empty() {
        let stale: Vec<_> = stale.iter().map(|path| format!("  {}", path.display())).collect();
        bail!(
            "generated code is out of date, rerun rds-codegen without `--check`:\n{}",
            stale.join("\n")
        );
    }
    tracing::info!("generated code in {:?} is up to date", out_dir);
    Ok(())
}
