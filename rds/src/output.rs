/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from rds.json. DO NOT EDIT.

//! Output shapes of the operations.

shape! {
    /// Output of the `CopyDBSnapshot` operation.
    pub struct CopyDbSnapshotOutput => CopyDbSnapshotOutputBuilder {
        "DBSnapshot" => db_snapshot, set_db_snapshot: shape<crate::model::DbSnapshot>,
    }
}

shape! {
    /// Contains the result of a successful invocation of the `DescribeDBClusters` action.
    pub struct DescribeDbClustersOutput => DescribeDbClustersOutputBuilder {
        /// A pagination token that can be used in a later DescribeDBClusters request.
        "Marker" => marker, set_marker: string,
        /// Contains a list of DB clusters for the user.
        "DBClusters" => db_clusters, set_db_clusters: list<crate::model::DbCluster> as "DBCluster",
    }
}

shape! {
    /// Contains the result of a successful invocation of the `DescribeDBInstanceAutomatedBackups`
    /// action.
    pub struct DescribeDbInstanceAutomatedBackupsOutput => DescribeDbInstanceAutomatedBackupsOutputBuilder {
        /// An optional pagination token provided by a previous request.
        "Marker" => marker, set_marker: string,
        /// A list of `DBInstanceAutomatedBackup` instances.
        "DBInstanceAutomatedBackups" => db_instance_automated_backups,
            set_db_instance_automated_backups: list<crate::model::DbInstanceAutomatedBackup> as "DBInstanceAutomatedBackup",
    }
}

shape! {
    /// Contains the result of a successful invocation of the `DescribeDBSnapshots` action.
    pub struct DescribeDbSnapshotsOutput => DescribeDbSnapshotsOutputBuilder {
        /// An optional pagination token provided by a previous request. If this parameter is
        /// specified, the response includes only records beyond the marker, up to the value
        /// specified by `MaxRecords`.
        "Marker" => marker, set_marker: string,
        /// A list of `DBSnapshot` instances.
        "DBSnapshots" => db_snapshots,
            set_db_snapshots: list<crate::model::DbSnapshot> as "DBSnapshot",
    }
}

shape! {
    /// Output of the `DescribeExportTasks` operation.
    pub struct DescribeExportTasksOutput => DescribeExportTasksOutputBuilder {
        /// A pagination token that can be used in a later `DescribeExportTasks` request.
        "Marker" => marker, set_marker: string,
        /// Information about an export of a snapshot to Amazon S3.
        "ExportTasks" => export_tasks,
            set_export_tasks: list<crate::model::ExportTask> as "ExportTask",
    }
}
