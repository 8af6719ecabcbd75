/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use rds_codegen::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MODULES: &[&str] = &["model.rs", "input.rs", "output.rs", "operation.rs"];

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/widgets")
}

fn args(out_dir: &Path, check: bool) -> Args {
    Args {
        model: fixture_dir().join("widgets.json"),
        out_dir: out_dir.to_path_buf(),
        check,
    }
}

#[test]
fn generates_modules() {
    let tmp_dir = TempDir::new().unwrap();
    let out_dir = tmp_dir.path().join("src");

    rds_codegen::run(&args(&out_dir, false)).unwrap();

    for module in MODULES {
        let expected = fs::read_to_string(fixture_dir().join("expected").join(module)).unwrap();
        let actual = fs::read_to_string(out_dir.join(module)).unwrap();
        pretty_assertions::assert_str_eq!(expected, actual);
    }
}

#[test]
fn check_accepts_fresh_output() {
    let tmp_dir = TempDir::new().unwrap();

    rds_codegen::run(&args(tmp_dir.path(), false)).unwrap();
    rds_codegen::run(&args(tmp_dir.path(), true)).unwrap();
}

#[test]
fn check_lists_stale_modules() {
    let tmp_dir = TempDir::new().unwrap();
    rds_codegen::run(&args(tmp_dir.path(), false)).unwrap();

    fs::write(tmp_dir.path().join("input.rs"), "// edited by hand\n").unwrap();
    fs::remove_file(tmp_dir.path().join("operation.rs")).unwrap();

    let err = rds_codegen::run(&args(tmp_dir.path(), true)).expect_err("stale modules");
    let message = format!("{}", err);
    assert!(message.contains("input.rs"), "{}", message);
    assert!(message.contains("operation.rs"), "{}", message);
    assert!(!message.contains("model.rs"), "{}", message);

    // `--check` never writes.
    assert!(!tmp_dir.path().join("operation.rs").exists());
}

#[test]
fn missing_model() {
    let tmp_dir = TempDir::new().unwrap();
    let err = rds_codegen::run(&Args {
        model: tmp_dir.path().join("missing.json"),
        out_dir: tmp_dir.path().to_path_buf(),
        check: false,
    })
    .expect_err("model doesn't exist");
    assert!(format!("{:#}", err).contains("failed to read model"), "{:#}", err);
}
