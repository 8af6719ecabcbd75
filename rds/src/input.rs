/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from rds.json. DO NOT EDIT.

//! Input shapes of the operations.

shape! {
    /// Copies the specified DB snapshot. The source DB snapshot must be in the "available" state.
    pub struct CopyDbSnapshotInput => CopyDbSnapshotInputBuilder {
        /// The identifier for the source DB snapshot.
        "SourceDBSnapshotIdentifier" => source_db_snapshot_identifier,
            set_source_db_snapshot_identifier: string,
        /// The identifier for the copy of the snapshot.
        "TargetDBSnapshotIdentifier" => target_db_snapshot_identifier,
            set_target_db_snapshot_identifier: string,
        /// The AWS KMS key ID for an encrypted DB snapshot. The KMS key ID is the Amazon Resource
        /// Name (ARN), KMS key identifier, or the KMS key alias for the KMS encryption key.
        "KmsKeyId" => kms_key_id, set_kms_key_id: string,
        /// A list of tags. For more information, see Tagging Amazon RDS Resources in the Amazon RDS
        /// User Guide.
        "Tags" => tags, set_tags: list<crate::model::Tag> as "Tag",
        /// A value that indicates whether to copy all tags from the source DB snapshot to the
        /// target DB snapshot. By default, tags are not copied.
        "CopyTags" => copy_tags, set_copy_tags: value<bool>,
        /// The URL that contains a Signature Version 4 signed request for the `CopyDBSnapshot` API
        /// action in the source AWS Region that contains the source DB snapshot to copy.
        "PreSignedUrl" => pre_signed_url, set_pre_signed_url: string,
        /// The name of an option group to associate with the copy of the snapshot.
        "OptionGroupName" => option_group_name, set_option_group_name: string,
    }
}

shape! {
    /// Creates a new DB instance that acts as a read replica for an existing source DB instance.
    /// You can create a read replica for a DB instance running MySQL, MariaDB, Oracle, PostgreSQL,
    /// or SQL Server. For more information, see Working with Read Replicas in the Amazon RDS User
    /// Guide.
    pub struct CreateDbInstanceReadReplicaInput => CreateDbInstanceReadReplicaInputBuilder {
        /// The DB instance identifier of the read replica. This identifier is the unique key that
        /// identifies a DB instance. This parameter is stored as a lowercase string.
        "DBInstanceIdentifier" => db_instance_identifier, set_db_instance_identifier: string,
        /// The identifier of the DB instance that will act as the source for the read replica. Each
        /// DB instance can have up to five read replicas.
        "SourceDBInstanceIdentifier" => source_db_instance_identifier,
            set_source_db_instance_identifier: string,
        /// The compute and memory capacity of the read replica, for example, `db.m4.large`. Not all
        /// DB instance classes are available in all AWS Regions, or for all database engines. For
        /// the full list of DB instance classes, and availability for your engine, see DB Instance
        /// Class in the Amazon RDS User Guide.
        "DBInstanceClass" => db_instance_class, set_db_instance_class: string,
        /// The Availability Zone (AZ) where the read replica will be created.
        "AvailabilityZone" => availability_zone, set_availability_zone: string,
        /// The port number that the DB instance uses for connections.
        "Port" => port, set_port: value<i32>,
        /// A value that indicates whether the read replica is in a Multi-AZ deployment.
        "MultiAZ" => multi_az, set_multi_az: value<bool>,
        /// A value that indicates whether minor engine upgrades are applied automatically to the
        /// read replica during the maintenance window.
        "AutoMinorVersionUpgrade" => auto_minor_version_upgrade,
            set_auto_minor_version_upgrade: value<bool>,
        /// The amount of Provisioned IOPS (input/output operations per second) to be initially
        /// allocated for the DB instance.
        "Iops" => iops, set_iops: value<i32>,
        /// The option group the DB instance is associated with. If omitted, the option group
        /// associated with the source instance is used.
        "OptionGroupName" => option_group_name, set_option_group_name: string,
        /// The name of the DB parameter group to associate with this DB instance.
        "DBParameterGroupName" => db_parameter_group_name, set_db_parameter_group_name: string,
        /// A value that indicates whether the DB instance is publicly accessible.
        "PubliclyAccessible" => publicly_accessible, set_publicly_accessible: value<bool>,
        /// A list of tags. For more information, see Tagging Amazon RDS Resources in the Amazon RDS
        /// User Guide.
        "Tags" => tags, set_tags: list<crate::model::Tag> as "Tag",
        /// Specifies a DB subnet group for the DB instance. The new DB instance is created in the
        /// VPC associated with the DB subnet group. If no DB subnet group is specified, then the
        /// new DB instance isn't created in a VPC.
        "DBSubnetGroupName" => db_subnet_group_name, set_db_subnet_group_name: string,
        /// A list of EC2 VPC security groups to associate with the read replica.
        "VpcSecurityGroupIds" => vpc_security_group_ids,
            set_vpc_security_group_ids: list<String> as "VpcSecurityGroupId",
        /// Specifies the storage type to be associated with the read replica.
        "StorageType" => storage_type, set_storage_type: string,
        /// A value that indicates whether to copy all tags from the read replica to snapshots of
        /// the read replica. By default, tags are not copied.
        "CopyTagsToSnapshot" => copy_tags_to_snapshot, set_copy_tags_to_snapshot: value<bool>,
        /// The interval, in seconds, between points when Enhanced Monitoring metrics are collected
        /// for the read replica. To disable collecting Enhanced Monitoring metrics, specify 0. The
        /// default is 0.
        "MonitoringInterval" => monitoring_interval, set_monitoring_interval: value<i32>,
        /// The ARN for the IAM role that permits RDS to send enhanced monitoring metrics to Amazon
        /// CloudWatch Logs. For example, `arn:aws:iam:123456789012:role/emaccess`. For information
        /// on creating a monitoring role, go to To create an IAM role for Amazon RDS Enhanced
        /// Monitoring in the Amazon RDS User Guide.
        "MonitoringRoleArn" => monitoring_role_arn, set_monitoring_role_arn: string,
        /// The AWS KMS key ID for an encrypted read replica. The KMS key ID is the Amazon Resource
        /// Name (ARN), KMS key identifier, or the KMS key alias for the KMS encryption key.
        "KmsKeyId" => kms_key_id, set_kms_key_id: string,
        /// The URL that contains a Signature Version 4 signed request for the
        /// `CreateDBInstanceReadReplica` API action in the source AWS Region that contains the
        /// source DB instance.
        "PreSignedUrl" => pre_signed_url, set_pre_signed_url: string,
        /// A value that indicates whether to enable mapping of AWS Identity and Access Management
        /// (IAM) accounts to database accounts. By default, mapping is disabled. For information
        /// about the supported DB engines, see CreateDBInstance.
        "EnableIAMDatabaseAuthentication" => enable_iam_database_authentication,
            set_enable_iam_database_authentication: value<bool>,
        /// A value that indicates whether to enable Performance Insights for the read replica.
        "EnablePerformanceInsights" => enable_performance_insights,
            set_enable_performance_insights: value<bool>,
        /// The AWS KMS key identifier for encryption of Performance Insights data. The KMS key ID
        /// is the Amazon Resource Name (ARN), KMS key identifier, or the KMS key alias for the KMS
        /// encryption key.
        "PerformanceInsightsKMSKeyId" => performance_insights_kms_key_id,
            set_performance_insights_kms_key_id: string,
        /// The amount of time, in days, to retain Performance Insights data. Valid values are 7 or
        /// 731 (2 years).
        "PerformanceInsightsRetentionPeriod" => performance_insights_retention_period,
            set_performance_insights_retention_period: value<i32>,
        /// The list of logs that the new DB instance is to export to CloudWatch Logs. The values in
        /// the list depend on the DB engine being used. For more information, see Publishing
        /// Database Logs to Amazon CloudWatch Logs in the Amazon RDS User Guide.
        "EnableCloudwatchLogsExports" => enable_cloudwatch_logs_exports,
            set_enable_cloudwatch_logs_exports: list<String> as "member",
        /// The number of CPU cores and the number of threads per core for the DB instance class of
        /// the DB instance.
        "ProcessorFeatures" => processor_features,
            set_processor_features: list<crate::model::ProcessorFeature> as "ProcessorFeature",
        /// A value that indicates whether the DB instance class of the DB instance uses its default
        /// processor features.
        "UseDefaultProcessorFeatures" => use_default_processor_features,
            set_use_default_processor_features: value<bool>,
        /// A value that indicates whether the DB instance has deletion protection enabled. The
        /// database can't be deleted when deletion protection is enabled. By default, deletion
        /// protection is disabled. For more information, see Deleting a DB Instance.
        "DeletionProtection" => deletion_protection, set_deletion_protection: value<bool>,
        /// The Active Directory directory ID to create the DB instance in.
        "Domain" => domain, set_domain: string,
        /// Specify the name of the IAM role to be used when making API calls to the Directory
        /// Service.
        "DomainIAMRoleName" => domain_iam_role_name, set_domain_iam_role_name: string,
        /// The open mode of the replica database: mounted or read-only.
        "ReplicaMode" => replica_mode, set_replica_mode: value<crate::model::ReplicaMode>,
    }
}

shape! {
    /// Returns information about provisioned Aurora DB clusters. This API supports pagination.
    pub struct DescribeDbClustersInput => DescribeDbClustersInputBuilder {
        /// The user-supplied DB cluster identifier. If this parameter is specified, information
        /// from only the specific DB cluster is returned. This parameter isn't case-sensitive.
        "DBClusterIdentifier" => db_cluster_identifier, set_db_cluster_identifier: string,
        /// A filter that specifies one or more DB clusters to describe.
        "Filters" => filters, set_filters: list<crate::model::Filter> as "Filter",
        /// The maximum number of records to include in the response. If more records exist than the
        /// specified `MaxRecords` value, a pagination token called a marker is included in the
        /// response so you can retrieve the remaining results.
        "MaxRecords" => max_records, set_max_records: value<i32>,
        /// An optional pagination token provided by a previous `DescribeDBClusters` request.
        "Marker" => marker, set_marker: string,
        /// Optional Boolean parameter that specifies whether the output includes information about
        /// clusters shared from other AWS accounts.
        "IncludeShared" => include_shared, set_include_shared: value<bool>,
    }
}

shape! {
    /// Displays backups for both current and deleted instances. For example, use this operation to
    /// find details about automated backups for previously deleted instances.
    pub struct DescribeDbInstanceAutomatedBackupsInput => DescribeDbInstanceAutomatedBackupsInputBuilder {
        /// The resource ID of the DB instance that is the source of the automated backup. This
        /// parameter isn't case-sensitive.
        "DbiResourceId" => dbi_resource_id, set_dbi_resource_id: string,
        /// (Optional) The user-supplied instance identifier. If this parameter is specified, it
        /// must match the identifier of an existing DB instance.
        "DBInstanceIdentifier" => db_instance_identifier, set_db_instance_identifier: string,
        /// A filter that specifies which resources to return based on status.
        "Filters" => filters, set_filters: list<crate::model::Filter> as "Filter",
        /// The maximum number of records to include in the response.
        "MaxRecords" => max_records, set_max_records: value<i32>,
        /// The pagination token provided in the previous request.
        "Marker" => marker, set_marker: string,
        /// The Amazon Resource Name (ARN) of the replicated automated backups.
        "DBInstanceAutomatedBackupsArn" => db_instance_automated_backups_arn,
            set_db_instance_automated_backups_arn: string,
    }
}

shape! {
    /// Returns information about DB snapshots. This API action supports pagination.
    pub struct DescribeDbSnapshotsInput => DescribeDbSnapshotsInputBuilder {
        /// The ID of the DB instance to retrieve the list of DB snapshots for. This parameter can't
        /// be used in conjunction with `DBSnapshotIdentifier`. This parameter isn't case-sensitive.
        "DBInstanceIdentifier" => db_instance_identifier, set_db_instance_identifier: string,
        /// A specific DB snapshot identifier to describe. This parameter can't be used in
        /// conjunction with `DBInstanceIdentifier`. This value is stored as a lowercase string.
        "DBSnapshotIdentifier" => db_snapshot_identifier, set_db_snapshot_identifier: string,
        /// The type of snapshots to be returned. You can specify one of the following values:
        "SnapshotType" => snapshot_type, set_snapshot_type: string,
        /// A filter that specifies one or more DB snapshots to describe.
        "Filters" => filters, set_filters: list<crate::model::Filter> as "Filter",
        /// The maximum number of records to include in the response. If more records exist than the
        /// specified `MaxRecords` value, a pagination token called a marker is included in the
        /// response so that you can retrieve the remaining results.
        "MaxRecords" => max_records, set_max_records: value<i32>,
        /// An optional pagination token provided by a previous `DescribeDBSnapshots` request. If
        /// this parameter is specified, the response includes only records beyond the marker, up to
        /// the value specified by `MaxRecords`.
        "Marker" => marker, set_marker: string,
        /// A value that indicates whether to include shared manual DB cluster snapshots from other
        /// AWS accounts that this AWS account has been given permission to copy or restore. By
        /// default, these snapshots are not included.
        "IncludeShared" => include_shared, set_include_shared: value<bool>,
        /// A value that indicates whether to include manual DB cluster snapshots that are public
        /// and can be copied or restored by any AWS account. By default, the public snapshots are
        /// not included.
        "IncludePublic" => include_public, set_include_public: value<bool>,
        /// A specific DB resource ID to describe.
        "DbiResourceId" => dbi_resource_id, set_dbi_resource_id: string,
    }
}

shape! {
    /// Returns information about a snapshot export to Amazon S3. This API operation supports
    /// pagination.
    pub struct DescribeExportTasksInput => DescribeExportTasksInputBuilder {
        /// The identifier of the snapshot export task to be described.
        "ExportTaskIdentifier" => export_task_identifier, set_export_task_identifier: string,
        /// The Amazon Resource Name (ARN) of the snapshot exported to Amazon S3.
        "SourceArn" => source_arn, set_source_arn: string,
        /// Filters specify one or more snapshot exports to describe.
        "Filters" => filters, set_filters: list<crate::model::Filter> as "Filter",
        /// An optional pagination token provided by a previous `DescribeExportTasks` request.
        "Marker" => marker, set_marker: string,
        /// The maximum number of records to include in the response.
        "MaxRecords" => max_records, set_max_records: value<i32>,
    }
}
