/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

// Code generated by rds-codegen from rds.json. DO NOT EDIT.

//! Data structures and enumerations shared by the operations.

string_enum! {
    /// The mode of a database activity stream.
    pub enum ActivityStreamMode {
        Sync = "sync",
        Async = "async",
    }
}

string_enum! {
    /// The status of a database activity stream.
    pub enum ActivityStreamStatus {
        Stopped = "stopped",
        Starting = "starting",
        Started = "started",
        Stopping = "stopping",
    }
}

string_enum! {
    /// The open mode of an Oracle read replica.
    pub enum ReplicaMode {
        OpenReadOnly = "open-read-only",
        Mounted = "mounted",
    }
}

string_enum! {
    /// Status of write forwarding from a secondary cluster of an Aurora global database.
    pub enum WriteForwardingStatus {
        Enabled = "enabled",
        Disabled = "disabled",
        Enabling = "enabling",
        Disabling = "disabling",
        Unknown = "unknown",
    }
}

shape! {
    /// Contains the details of an Amazon Aurora DB cluster.
    pub struct DbCluster => DbClusterBuilder {
        /// For all database engines except Amazon Aurora, `AllocatedStorage` specifies the
        /// allocated storage size in gibibytes (GiB). For Aurora, `AllocatedStorage` always returns
        /// 1, because Aurora DB cluster storage size isn't fixed, but instead automatically adjusts
        /// as needed.
        "AllocatedStorage" => allocated_storage, set_allocated_storage: value<i32>,
        /// Provides the list of Availability Zones (AZs) where instances in the DB cluster can be
        /// created.
        "AvailabilityZones" => availability_zones,
            set_availability_zones: list<String> as "AvailabilityZone",
        /// Specifies the number of days for which automatic DB snapshots are retained.
        "BackupRetentionPeriod" => backup_retention_period, set_backup_retention_period: value<i32>,
        /// If present, specifies the name of the character set that this cluster is associated
        /// with.
        "CharacterSetName" => character_set_name, set_character_set_name: string,
        /// Contains the name of the initial database of this DB cluster that was provided at create
        /// time, if one was specified when the DB cluster was created. This same name is returned
        /// for the life of the DB cluster.
        "DatabaseName" => database_name, set_database_name: string,
        /// Contains a user-supplied DB cluster identifier. This identifier is the unique key that
        /// identifies a DB cluster.
        "DBClusterIdentifier" => db_cluster_identifier, set_db_cluster_identifier: string,
        /// Specifies the name of the DB cluster parameter group for the DB cluster.
        "DBClusterParameterGroup" => db_cluster_parameter_group,
            set_db_cluster_parameter_group: string,
        /// Specifies information on the subnet group associated with the DB cluster, including the
        /// name, description, and subnets in the subnet group.
        "DBSubnetGroup" => db_subnet_group, set_db_subnet_group: string,
        /// Specifies the current state of this DB cluster.
        "Status" => status, set_status: string,
        /// Specifies the progress of the operation as a percentage.
        "PercentProgress" => percent_progress, set_percent_progress: string,
        /// The earliest time to which a database can be restored with point-in-time restore.
        "EarliestRestorableTime" => earliest_restorable_time,
            set_earliest_restorable_time: value<smithy_types::DateTime>,
        /// Specifies the connection endpoint for the primary instance of the DB cluster.
        "Endpoint" => endpoint, set_endpoint: string,
        /// The reader endpoint for the DB cluster. The reader endpoint for a DB cluster
        /// load-balances connections across the Aurora Replicas that are available in a DB cluster.
        /// As clients request new connections to the reader endpoint, Aurora distributes the
        /// connection requests among the Aurora Replicas in the DB cluster. This functionality can
        /// help balance your read workload across multiple Aurora Replicas in your DB cluster.
        "ReaderEndpoint" => reader_endpoint, set_reader_endpoint: string,
        /// Identifies all custom endpoints associated with the cluster.
        "CustomEndpoints" => custom_endpoints, set_custom_endpoints: list<String> as "member",
        /// Specifies whether the DB cluster has instances in multiple Availability Zones.
        "MultiAZ" => multi_az, set_multi_az: value<bool>,
        /// Provides the name of the database engine to be used for this DB cluster.
        "Engine" => engine, set_engine: string,
        /// Indicates the database engine version.
        "EngineVersion" => engine_version, set_engine_version: string,
        /// Specifies the latest time to which a database can be restored with point-in-time
        /// restore.
        "LatestRestorableTime" => latest_restorable_time,
            set_latest_restorable_time: value<smithy_types::DateTime>,
        /// Specifies the port that the database engine is listening on.
        "Port" => port, set_port: value<i32>,
        /// Contains the master username for the DB cluster.
        "MasterUsername" => master_username, set_master_username: string,
        /// Provides the list of option group memberships for this DB cluster.
        "DBClusterOptionGroupMemberships" => db_cluster_option_group_memberships,
            set_db_cluster_option_group_memberships: list<DbClusterOptionGroupStatus> as "DBClusterOptionGroup",
        /// Specifies the daily time range during which automated backups are created if automated
        /// backups are enabled, as determined by the `BackupRetentionPeriod`.
        "PreferredBackupWindow" => preferred_backup_window, set_preferred_backup_window: string,
        /// Specifies the weekly time range during which system maintenance can occur, in Universal
        /// Coordinated Time (UTC).
        "PreferredMaintenanceWindow" => preferred_maintenance_window,
            set_preferred_maintenance_window: string,
        /// Contains the identifier of the source DB cluster if this DB cluster is a read replica.
        "ReplicationSourceIdentifier" => replication_source_identifier,
            set_replication_source_identifier: string,
        /// Contains one or more identifiers of the read replicas associated with this DB cluster.
        "ReadReplicaIdentifiers" => read_replica_identifiers,
            set_read_replica_identifiers: list<String> as "ReadReplicaIdentifier",
        /// Provides the list of instances that make up the DB cluster.
        "DBClusterMembers" => db_cluster_members,
            set_db_cluster_members: list<DbClusterMember> as "DBClusterMember",
        /// Provides a list of VPC security groups that the DB cluster belongs to.
        "VpcSecurityGroups" => vpc_security_groups,
            set_vpc_security_groups: list<VpcSecurityGroupMembership> as "VpcSecurityGroupMembership",
        /// Specifies the ID that Amazon Route 53 assigns when you create a hosted zone.
        "HostedZoneId" => hosted_zone_id, set_hosted_zone_id: string,
        /// Specifies whether the DB cluster is encrypted.
        "StorageEncrypted" => storage_encrypted, set_storage_encrypted: value<bool>,
        /// If `StorageEncrypted` is enabled, the AWS KMS key identifier for the encrypted DB
        /// cluster.
        "KmsKeyId" => kms_key_id, set_kms_key_id: string,
        /// The AWS Region-unique, immutable identifier for the DB cluster. This identifier is found
        /// in AWS CloudTrail log entries whenever the AWS KMS key for the DB cluster is accessed.
        "DbClusterResourceId" => db_cluster_resource_id, set_db_cluster_resource_id: string,
        /// The Amazon Resource Name (ARN) for the DB cluster.
        "DBClusterArn" => db_cluster_arn, set_db_cluster_arn: string,
        /// Provides a list of the AWS Identity and Access Management (IAM) roles that are
        /// associated with the DB cluster. IAM roles that are associated with a DB cluster grant
        /// permission for the DB cluster to access other AWS services on your behalf.
        "AssociatedRoles" => associated_roles,
            set_associated_roles: list<DbClusterRole> as "DBClusterRole",
        /// A value that indicates whether the mapping of AWS Identity and Access Management (IAM)
        /// accounts to database accounts is enabled.
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled,
            set_iam_database_authentication_enabled: value<bool>,
        /// Identifies the clone group to which the DB cluster is associated.
        "CloneGroupId" => clone_group_id, set_clone_group_id: string,
        /// Specifies the time when the DB cluster was created, in Universal Coordinated Time (UTC).
        "ClusterCreateTime" => cluster_create_time,
            set_cluster_create_time: value<smithy_types::DateTime>,
        /// The earliest time to which a DB cluster can be backtracked.
        "EarliestBacktrackTime" => earliest_backtrack_time,
            set_earliest_backtrack_time: value<smithy_types::DateTime>,
        /// The target backtrack window, in seconds. If this value is set to 0, backtracking is
        /// disabled for the DB cluster. Otherwise, backtracking is enabled.
        "BacktrackWindow" => backtrack_window, set_backtrack_window: value<i64>,
        /// The number of change records stored for Backtrack.
        "BacktrackConsumedChangeRecords" => backtrack_consumed_change_records,
            set_backtrack_consumed_change_records: value<i64>,
        /// A list of log types that this DB cluster is configured to export to CloudWatch Logs.
        "EnabledCloudwatchLogsExports" => enabled_cloudwatch_logs_exports,
            set_enabled_cloudwatch_logs_exports: list<String> as "member",
        /// The current capacity of an Aurora Serverless DB cluster. The capacity is 0 (zero) when
        /// the cluster is paused.
        "Capacity" => capacity, set_capacity: value<i32>,
        /// The DB engine mode of the DB cluster, either `provisioned`, `serverless`,
        /// `parallelquery`, `global`, or `multimaster`.
        "EngineMode" => engine_mode, set_engine_mode: string,
        /// Shows the scaling configuration for an Aurora DB cluster in `serverless` DB engine mode.
        "ScalingConfigurationInfo" => scaling_configuration_info,
            set_scaling_configuration_info: shape<ScalingConfigurationInfo>,
        /// Indicates if the DB cluster has deletion protection enabled. The database can't be
        /// deleted when deletion protection is enabled.
        "DeletionProtection" => deletion_protection, set_deletion_protection: value<bool>,
        /// A value that indicates whether the HTTP endpoint for an Aurora Serverless DB cluster is
        /// enabled.
        "HttpEndpointEnabled" => http_endpoint_enabled, set_http_endpoint_enabled: value<bool>,
        /// The mode of the database activity stream. Database events such as a change or access
        /// generate an activity stream event. The database session can handle these events either
        /// synchronously or asynchronously.
        "ActivityStreamMode" => activity_stream_mode,
            set_activity_stream_mode: value<ActivityStreamMode>,
        /// The status of the database activity stream.
        "ActivityStreamStatus" => activity_stream_status,
            set_activity_stream_status: value<ActivityStreamStatus>,
        /// The AWS KMS key identifier used for encrypting messages in the database activity stream.
        "ActivityStreamKmsKeyId" => activity_stream_kms_key_id,
            set_activity_stream_kms_key_id: string,
        /// The name of the Amazon Kinesis data stream used for the database activity stream.
        "ActivityStreamKinesisStreamName" => activity_stream_kinesis_stream_name,
            set_activity_stream_kinesis_stream_name: string,
        /// Specifies whether tags are copied from the DB cluster to snapshots of the DB cluster.
        "CopyTagsToSnapshot" => copy_tags_to_snapshot, set_copy_tags_to_snapshot: value<bool>,
        /// Specifies whether the DB cluster is a clone of a DB cluster owned by a different AWS
        /// account.
        "CrossAccountClone" => cross_account_clone, set_cross_account_clone: value<bool>,
        /// The Active Directory Domain membership records associated with the DB cluster.
        "DomainMemberships" => domain_memberships,
            set_domain_memberships: list<DomainMembership> as "DomainMembership",
        /// Specifies whether a secondary cluster in an Aurora global database has write forwarding
        /// enabled, not enabled, or is in the process of enabling it.
        "GlobalWriteForwardingStatus" => global_write_forwarding_status,
            set_global_write_forwarding_status: value<WriteForwardingStatus>,
        /// Specifies whether you have requested to enable write forwarding for a secondary cluster
        /// in an Aurora global database. Because write forwarding takes time to enable, check the
        /// value of `GlobalWriteForwardingStatus` to confirm that the request has completed before
        /// using the write forwarding feature for this cluster.
        "GlobalWriteForwardingRequested" => global_write_forwarding_requested,
            set_global_write_forwarding_requested: value<bool>,
    }
}

shape! {
    /// Contains information about an instance that is part of a DB cluster.
    pub struct DbClusterMember => DbClusterMemberBuilder {
        /// Specifies the instance identifier for this member of the DB cluster.
        "DBInstanceIdentifier" => db_instance_identifier, set_db_instance_identifier: string,
        /// Value that is `true` if the cluster member is the primary instance for the DB cluster
        /// and `false` otherwise.
        "IsClusterWriter" => is_cluster_writer, set_is_cluster_writer: value<bool>,
        /// Specifies the status of the DB cluster parameter group for this member of the DB
        /// cluster.
        "DBClusterParameterGroupStatus" => db_cluster_parameter_group_status,
            set_db_cluster_parameter_group_status: string,
        /// A value that specifies the order in which an Aurora Replica is promoted to the primary
        /// instance after a failure of the existing primary instance.
        "PromotionTier" => promotion_tier, set_promotion_tier: value<i32>,
    }
}

shape! {
    /// Contains status information for a DB cluster option group.
    pub struct DbClusterOptionGroupStatus => DbClusterOptionGroupStatusBuilder {
        /// Specifies the name of the DB cluster option group.
        "DBClusterOptionGroupName" => db_cluster_option_group_name,
            set_db_cluster_option_group_name: string,
        /// Specifies the status of the DB cluster option group.
        "Status" => status, set_status: string,
    }
}

shape! {
    /// Describes an AWS Identity and Access Management (IAM) role that is associated with a DB
    /// cluster.
    pub struct DbClusterRole => DbClusterRoleBuilder {
        /// The Amazon Resource Name (ARN) of the IAM role that is associated with the DB cluster.
        "RoleArn" => role_arn, set_role_arn: string,
        /// Describes the state of association between the IAM role and the DB cluster.
        "Status" => status, set_status: string,
        /// The name of the feature associated with the AWS Identity and Access Management (IAM)
        /// role.
        "FeatureName" => feature_name, set_feature_name: string,
    }
}

shape! {
    /// An automated backup of a DB instance. It consists of system backups, transaction logs, and
    /// the database instance properties that existed at the time you deleted the source instance.
    pub struct DbInstanceAutomatedBackup => DbInstanceAutomatedBackupBuilder {
        /// The Amazon Resource Name (ARN) for the automated backups.
        "DBInstanceArn" => db_instance_arn, set_db_instance_arn: string,
        /// The identifier for the source DB instance, which can't be changed and which is unique to
        /// an AWS Region.
        "DbiResourceId" => dbi_resource_id, set_dbi_resource_id: string,
        /// The AWS Region associated with the automated backup.
        "Region" => region, set_region: string,
        /// The customer id of the instance that is/was associated with the automated backup.
        "DBInstanceIdentifier" => db_instance_identifier, set_db_instance_identifier: string,
        /// Earliest and latest time an instance can be restored to.
        "RestoreWindow" => restore_window, set_restore_window: shape<RestoreWindow>,
        /// Specifies the allocated storage size in gibibytes (GiB).
        "AllocatedStorage" => allocated_storage, set_allocated_storage: value<i32>,
        /// Provides a list of status information for an automated backup: `active`, `retained` or
        /// `creating`.
        "Status" => status, set_status: string,
        /// The port number that the automated backup used for connections.
        "Port" => port, set_port: value<i32>,
        /// The Availability Zone that the automated backup was created in.
        "AvailabilityZone" => availability_zone, set_availability_zone: string,
        /// Provides the VPC ID associated with the DB instance
        "VpcId" => vpc_id, set_vpc_id: string,
        /// Provides the date and time that the DB instance was created.
        "InstanceCreateTime" => instance_create_time,
            set_instance_create_time: value<smithy_types::DateTime>,
        /// The license model of an automated backup.
        "MasterUsername" => master_username, set_master_username: string,
        /// The name of the database engine for this automated backup.
        "Engine" => engine, set_engine: string,
        /// The version of the database engine for the automated backup.
        "EngineVersion" => engine_version, set_engine_version: string,
        /// License model information for the automated backup.
        "LicenseModel" => license_model, set_license_model: string,
        /// The IOPS (I/O operations per second) value for the automated backup.
        "Iops" => iops, set_iops: value<i32>,
        /// The option group the automated backup is associated with.
        "OptionGroupName" => option_group_name, set_option_group_name: string,
        /// The ARN from the key store with which the automated backup is associated for TDE
        /// encryption.
        "TdeCredentialArn" => tde_credential_arn, set_tde_credential_arn: string,
        /// Specifies whether the automated backup is encrypted.
        "Encrypted" => encrypted, set_encrypted: value<bool>,
        /// Specifies the storage type associated with the automated backup.
        "StorageType" => storage_type, set_storage_type: string,
        /// The AWS KMS key ID for an automated backup.
        "KmsKeyId" => kms_key_id, set_kms_key_id: string,
        /// The time zone of the automated backup.
        "Timezone" => timezone, set_timezone: string,
        /// True if mapping of AWS Identity and Access Management (IAM) accounts to database
        /// accounts is enabled, and otherwise false.
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled,
            set_iam_database_authentication_enabled: value<bool>,
        /// The retention period for the automated backups.
        "BackupRetentionPeriod" => backup_retention_period, set_backup_retention_period: value<i32>,
        /// The Amazon Resource Name (ARN) for the replicated automated backups.
        "DBInstanceAutomatedBackupsArn" => db_instance_automated_backups_arn,
            set_db_instance_automated_backups_arn: string,
        /// The list of replications to different AWS Regions associated with the automated backup.
        "DBInstanceAutomatedBackupsReplications" => db_instance_automated_backups_replications,
            set_db_instance_automated_backups_replications: list<DbInstanceAutomatedBackupsReplication> as "DBInstanceAutomatedBackupsReplication",
    }
}

shape! {
    /// Automated backups of a DB instance replicated to another AWS Region. They consist of system
    /// backups, transaction logs, and database instance properties.
    pub struct DbInstanceAutomatedBackupsReplication => DbInstanceAutomatedBackupsReplicationBuilder {
        /// The Amazon Resource Name (ARN) of the replicated automated backups.
        "DBInstanceAutomatedBackupsArn" => db_instance_automated_backups_arn,
            set_db_instance_automated_backups_arn: string,
    }
}

shape! {
    /// Contains the details of an Amazon RDS DB snapshot.
    pub struct DbSnapshot => DbSnapshotBuilder {
        /// Specifies the identifier for the DB snapshot.
        "DBSnapshotIdentifier" => db_snapshot_identifier, set_db_snapshot_identifier: string,
        /// Specifies the DB instance identifier of the DB instance this DB snapshot was created
        /// from.
        "DBInstanceIdentifier" => db_instance_identifier, set_db_instance_identifier: string,
        /// Provides the time when the snapshot was taken, in Universal Coordinated Time (UTC).
        "SnapshotCreateTime" => snapshot_create_time,
            set_snapshot_create_time: value<smithy_types::DateTime>,
        /// Specifies the name of the database engine.
        "Engine" => engine, set_engine: string,
        /// Specifies the allocated storage size in gibibytes (GiB).
        "AllocatedStorage" => allocated_storage, set_allocated_storage: value<i32>,
        /// Specifies the status of this DB snapshot.
        "Status" => status, set_status: string,
        /// Specifies the port that the database engine was listening on at the time of the
        /// snapshot.
        "Port" => port, set_port: value<i32>,
        /// Specifies the name of the Availability Zone the DB instance was located in at the time
        /// of the DB snapshot.
        "AvailabilityZone" => availability_zone, set_availability_zone: string,
        /// Provides the VPC ID associated with the DB snapshot.
        "VpcId" => vpc_id, set_vpc_id: string,
        /// Specifies the time when the snapshot was taken, in Universal Coordinated Time (UTC).
        "InstanceCreateTime" => instance_create_time,
            set_instance_create_time: value<smithy_types::DateTime>,
        /// Provides the master username for the DB snapshot.
        "MasterUsername" => master_username, set_master_username: string,
        /// Specifies the version of the database engine.
        "EngineVersion" => engine_version, set_engine_version: string,
        /// License model information for the restored DB instance.
        "LicenseModel" => license_model, set_license_model: string,
        /// Provides the type of the DB snapshot.
        "SnapshotType" => snapshot_type, set_snapshot_type: string,
        /// Specifies the Provisioned IOPS (I/O operations per second) value of the DB instance at
        /// the time of the snapshot.
        "Iops" => iops, set_iops: value<i32>,
        /// Provides the option group name for the DB snapshot.
        "OptionGroupName" => option_group_name, set_option_group_name: string,
        /// The percentage of the estimated data that has been transferred.
        "PercentProgress" => percent_progress, set_percent_progress: value<i32>,
        /// The AWS Region that the DB snapshot was created in or copied from.
        "SourceRegion" => source_region, set_source_region: string,
        /// The DB snapshot Amazon Resource Name (ARN) that the DB snapshot was copied from. It only
        /// has value in case of cross-customer or cross-region copy.
        "SourceDBSnapshotIdentifier" => source_db_snapshot_identifier,
            set_source_db_snapshot_identifier: string,
        /// Specifies the storage type associated with DB snapshot.
        "StorageType" => storage_type, set_storage_type: string,
        /// The ARN from the key store with which to associate the instance for TDE encryption.
        "TdeCredentialArn" => tde_credential_arn, set_tde_credential_arn: string,
        /// Specifies whether the DB snapshot is encrypted.
        "Encrypted" => encrypted, set_encrypted: value<bool>,
        /// If `Encrypted` is true, the AWS KMS key identifier for the encrypted DB snapshot.
        "KmsKeyId" => kms_key_id, set_kms_key_id: string,
        /// The Amazon Resource Name (ARN) for the DB snapshot.
        "DBSnapshotArn" => db_snapshot_arn, set_db_snapshot_arn: string,
        /// The time zone of the DB snapshot. In most cases, the `Timezone` element is empty.
        /// `Timezone` content appears only for snapshots taken from Microsoft SQL Server DB
        /// instances that were created with a time zone specified.
        "Timezone" => timezone, set_timezone: string,
        /// True if mapping of AWS Identity and Access Management (IAM) accounts to database
        /// accounts is enabled, and otherwise false.
        "IAMDatabaseAuthenticationEnabled" => iam_database_authentication_enabled,
            set_iam_database_authentication_enabled: value<bool>,
        /// The number of CPU cores and the number of threads per core for the DB instance class of
        /// the DB instance when the DB snapshot was created.
        "ProcessorFeatures" => processor_features,
            set_processor_features: list<ProcessorFeature> as "ProcessorFeature",
        /// The identifier for the source DB instance, which can't be changed and which is unique to
        /// an AWS Region.
        "DbiResourceId" => dbi_resource_id, set_dbi_resource_id: string,
    }
}

shape! {
    /// An Active Directory Domain membership record associated with the DB instance or cluster.
    pub struct DomainMembership => DomainMembershipBuilder {
        /// The identifier of the Active Directory Domain.
        "Domain" => domain, set_domain: string,
        /// The status of the Active Directory Domain membership for the DB instance or cluster.
        "Status" => status, set_status: string,
        /// The fully qualified domain name of the Active Directory Domain.
        "FQDN" => fqdn, set_fqdn: string,
        /// The name of the IAM role to be used when making API calls to the Directory Service.
        "IAMRoleName" => iam_role_name, set_iam_role_name: string,
    }
}

shape! {
    /// Contains the details of a snapshot export to Amazon S3.
    pub struct ExportTask => ExportTaskBuilder {
        /// A unique identifier for the snapshot export task.
        "ExportTaskIdentifier" => export_task_identifier, set_export_task_identifier: string,
        /// The Amazon Resource Name (ARN) of the snapshot exported to Amazon S3.
        "SourceArn" => source_arn, set_source_arn: string,
        /// The data exported from the snapshot.
        "ExportOnly" => export_only, set_export_only: list<String> as "member",
        /// The time that the snapshot was created.
        "SnapshotTime" => snapshot_time, set_snapshot_time: value<smithy_types::DateTime>,
        /// The time that the snapshot export task started.
        "TaskStartTime" => task_start_time, set_task_start_time: value<smithy_types::DateTime>,
        /// The time that the snapshot export task completed.
        "TaskEndTime" => task_end_time, set_task_end_time: value<smithy_types::DateTime>,
        /// The Amazon S3 bucket that the snapshot is exported to.
        "S3Bucket" => s3_bucket, set_s3_bucket: string,
        /// The Amazon S3 bucket prefix that is the file name and path of the exported snapshot.
        "S3Prefix" => s3_prefix, set_s3_prefix: string,
        /// The name of the IAM role that is used to write to Amazon S3 when exporting a snapshot.
        "IamRoleArn" => iam_role_arn, set_iam_role_arn: string,
        /// The key identifier of the AWS KMS customer master key (CMK) that is used to encrypt the
        /// snapshot when it's exported to Amazon S3.
        "KmsKeyId" => kms_key_id, set_kms_key_id: string,
        /// The progress status of the export task.
        "Status" => status, set_status: string,
        /// The progress of the snapshot export task as a percentage.
        "PercentProgress" => percent_progress, set_percent_progress: value<i32>,
        /// The total amount of data exported, in gigabytes.
        "TotalExtractedDataInGB" => total_extracted_data_in_gb,
            set_total_extracted_data_in_gb: value<i32>,
        /// The reason the export failed, if it failed.
        "FailureCause" => failure_cause, set_failure_cause: string,
        /// A warning about the snapshot export task.
        "WarningMessage" => warning_message, set_warning_message: string,
    }
}

shape! {
    /// A filter name and value pair that is used to return a more specific list of results from a
    /// describe operation.
    pub struct Filter => FilterBuilder {
        /// The name of the filter. Filter names are case-sensitive.
        "Name" => name, set_name: string,
        /// One or more filter values. Filter values are case-sensitive.
        "Values" => values, set_values: list<String> as "Value",
    }
}

shape! {
    /// Contains the processor features of a DB instance class.
    pub struct ProcessorFeature => ProcessorFeatureBuilder {
        /// The name of the processor feature. Valid names are `coreCount` and `threadsPerCore`.
        "Name" => name, set_name: string,
        /// The value of a processor feature name.
        "Value" => value, set_value: string,
    }
}

shape! {
    /// Earliest and latest time an instance can be restored to.
    pub struct RestoreWindow => RestoreWindowBuilder {
        /// The earliest time you can restore an instance to.
        "EarliestTime" => earliest_time, set_earliest_time: value<smithy_types::DateTime>,
        /// The latest time you can restore an instance to.
        "LatestTime" => latest_time, set_latest_time: value<smithy_types::DateTime>,
    }
}

shape! {
    /// Shows the scaling configuration for an Aurora DB cluster in `serverless` DB engine mode.
    pub struct ScalingConfigurationInfo => ScalingConfigurationInfoBuilder {
        /// The maximum capacity for the Aurora DB cluster in `serverless` DB engine mode.
        "MinCapacity" => min_capacity, set_min_capacity: value<i32>,
        /// The maximum capacity for an Aurora DB cluster in `serverless` DB engine mode.
        "MaxCapacity" => max_capacity, set_max_capacity: value<i32>,
        /// A value that indicates whether automatic pause is allowed for the Aurora DB cluster in
        /// `serverless` DB engine mode.
        "AutoPause" => auto_pause, set_auto_pause: value<bool>,
        /// The remaining amount of time, in seconds, before the Aurora DB cluster in `serverless`
        /// mode is paused.
        "SecondsUntilAutoPause" => seconds_until_auto_pause,
            set_seconds_until_auto_pause: value<i32>,
        /// The timeout action of a call to `ModifyCurrentDBClusterCapacity`, either
        /// `ForceApplyCapacityChange` or `RollbackCapacityChange`.
        "TimeoutAction" => timeout_action, set_timeout_action: string,
    }
}

shape! {
    /// Metadata assigned to an Amazon RDS resource consisting of a key-value pair.
    pub struct Tag => TagBuilder {
        /// A key is the required name of the tag. The string value can be from 1 to 128 Unicode
        /// characters in length and can't be prefixed with `aws:` or `rds:`.
        "Key" => key, set_key: string,
        /// A value is the optional value of the tag. The string value can be from 1 to 256 Unicode
        /// characters in length and can't be prefixed with `aws:` or `rds:`.
        "Value" => value, set_value: string,
    }
}

shape! {
    /// This data type is used as a response element for queries on VPC security group membership.
    pub struct VpcSecurityGroupMembership => VpcSecurityGroupMembershipBuilder {
        /// The name of the VPC security group.
        "VpcSecurityGroupId" => vpc_security_group_id, set_vpc_security_group_id: string,
        /// The status of the VPC security group.
        "Status" => status, set_status: string,
    }
}
