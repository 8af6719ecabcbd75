/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from widgets.json. DO NOT EDIT.

//! Input shapes of the operations.

shape! {
    /// Creates a widget.
    pub struct CreateWidgetInput => CreateWidgetInputBuilder {
        /// The identifier of the `Widget`.
        "WidgetID" => widget_id, set_widget_id: string,
        "Tags" => tags, set_tags: list<crate::model::Tag> as "Tag",
        "Mode" => mode, set_mode: value<crate::model::WidgetMode>,
        "DryRun" => dry_run, set_dry_run: value<bool>,
    }
}
