/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from widgets.json. DO NOT EDIT.

//! Output shapes of the operations.

shape! {
    /// Output of the `CreateWidget` operation.
    pub struct CreateWidgetOutput => CreateWidgetOutputBuilder {
        "CreatedAt" => created_at, set_created_at: value<smithy_types::DateTime>,
    }
}
