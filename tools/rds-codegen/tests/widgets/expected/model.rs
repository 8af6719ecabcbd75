/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from widgets.json. DO NOT EDIT.

//! Data structures and enumerations shared by the operations.

string_enum! {
    /// How a widget is opened.
    pub enum WidgetMode {
        OpenReadOnly = "open-read-only",
        /// Mounted but closed.
        Mounted = "mounted",
    }
}

shape! {
    /// A key-value pair.
    pub struct Tag => TagBuilder {
        "Key" => key, set_key: string,
        "Value" => value, set_value: string,
    }
}
