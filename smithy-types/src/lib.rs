/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Protocol-agnostic types shared by the generated RDS SDK and its protocol runtimes.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod date_time;
pub mod display;
pub mod error;

pub use date_time::DateTime;
pub use error::{ErrorMetadata, InvalidEnumValue};
