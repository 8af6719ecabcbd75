/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from rds.json. DO NOT EDIT.

//! Binds operation inputs and outputs to their AWS Query actions.

impl crate::protocol::QueryRequest for crate::input::CopyDbSnapshotInput {
    const ACTION: &'static str = "CopyDBSnapshot";
}

impl crate::protocol::QueryResponse for crate::output::CopyDbSnapshotOutput {
    const ACTION: &'static str = "CopyDBSnapshot";
}

impl crate::protocol::QueryRequest for crate::input::CreateDbInstanceReadReplicaInput {
    const ACTION: &'static str = "CreateDBInstanceReadReplica";
}

impl crate::protocol::QueryRequest for crate::input::DescribeDbClustersInput {
    const ACTION: &'static str = "DescribeDBClusters";
}

impl crate::protocol::QueryResponse for crate::output::DescribeDbClustersOutput {
    const ACTION: &'static str = "DescribeDBClusters";
}

impl crate::protocol::QueryRequest for crate::input::DescribeDbInstanceAutomatedBackupsInput {
    const ACTION: &'static str = "DescribeDBInstanceAutomatedBackups";
}

impl crate::protocol::QueryResponse for crate::output::DescribeDbInstanceAutomatedBackupsOutput {
    const ACTION: &'static str = "DescribeDBInstanceAutomatedBackups";
}

impl crate::protocol::QueryRequest for crate::input::DescribeDbSnapshotsInput {
    const ACTION: &'static str = "DescribeDBSnapshots";
}

impl crate::protocol::QueryResponse for crate::output::DescribeDbSnapshotsOutput {
    const ACTION: &'static str = "DescribeDBSnapshots";
}

impl crate::protocol::QueryRequest for crate::input::DescribeExportTasksInput {
    const ACTION: &'static str = "DescribeExportTasks";
}

impl crate::protocol::QueryResponse for crate::output::DescribeExportTasksOutput {
    const ACTION: &'static str = "DescribeExportTasks";
}
