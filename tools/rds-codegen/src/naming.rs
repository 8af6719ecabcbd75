/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversions from Smithy names to Rust identifiers.

use anyhow::{bail, Result};

const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

// Keywords that can't be raw identifiers.
const RESERVED_PATH_SEGMENTS: &[&str] = &["crate", "self", "super"];

/// Splits `name` into words.
///
/// A new word starts at every non-alphanumeric separator, at an uppercase letter following a
/// lowercase letter or a digit, and at the last uppercase letter of an acronym that is followed
/// by a lowercase letter (`DBCluster` is `DB` and `Cluster`).
pub fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }
        if c.is_ascii_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars
                .get(i + 1)
                .map_or(false, |next| next.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `DBClusterMember` becomes `DbClusterMember`.
pub fn type_name(name: &str) -> Result<String> {
    let ident: String = split_words(name)
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect();
    match ident.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => Ok(ident),
        _ => bail!("`{}` can't be turned into a Rust type name", name),
    }
}

/// `IAMDatabaseAuthenticationEnabled` becomes `iam_database_authentication_enabled`.
pub fn field_name(name: &str) -> Result<String> {
    let snake = snake_case(name)?;
    if RESERVED_PATH_SEGMENTS.contains(&snake.as_str()) {
        Ok(format!("{}_", snake))
    } else if RUST_KEYWORDS.contains(&snake.as_str()) {
        Ok(format!("r#{}", snake))
    } else {
        Ok(snake)
    }
}

/// The setter of a field, e.g. `set_multi_az` for `MultiAZ`.
pub fn setter_name(name: &str) -> Result<String> {
    Ok(format!("set_{}", snake_case(name)?))
}

fn snake_case(name: &str) -> Result<String> {
    let words = split_words(name);
    match words.first().and_then(|word| word.chars().next()) {
        Some(first) if first.is_ascii_alphabetic() => Ok(words
            .iter()
            .map(|word| word.to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("_")),
        _ => bail!("`{}` can't be turned into a Rust field name", name),
    }
}
