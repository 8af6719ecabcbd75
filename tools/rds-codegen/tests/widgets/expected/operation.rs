/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from widgets.json. DO NOT EDIT.

//! Binds operation inputs and outputs to their AWS Query actions.

impl crate::protocol::QueryRequest for crate::input::CreateWidgetInput {
    const ACTION: &'static str = "CreateWidget";
}

impl crate::protocol::QueryResponse for crate::output::CreateWidgetOutput {
    const ACTION: &'static str = "CreateWidget";
}
