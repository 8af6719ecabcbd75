/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use rds::model::{
    ActivityStreamMode, DbCluster, DbClusterMember, DbClusterRole, DbSnapshot, ExportTask,
    RestoreWindow, VpcSecurityGroupMembership, WriteForwardingStatus,
};
use rds::output::{
    CopyDbSnapshotOutput, DescribeDbClustersOutput, DescribeDbInstanceAutomatedBackupsOutput,
    DescribeExportTasksOutput,
};
use rds::{DateTime, QueryResponse, ResponseError};

const DESCRIBE_DB_CLUSTERS: &str = r#"<DescribeDBClustersResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <DescribeDBClustersResult>
    <Marker>next-page</Marker>
    <DBClusters>
      <DBCluster>
        <AllocatedStorage>1</AllocatedStorage>
        <AvailabilityZones>
          <AvailabilityZone>us-east-1a</AvailabilityZone>
          <AvailabilityZone>us-east-1b</AvailabilityZone>
        </AvailabilityZones>
        <DBClusterIdentifier>sample-cluster</DBClusterIdentifier>
        <Status>available</Status>
        <MultiAZ>false</MultiAZ>
        <Engine>aurora-postgresql</Engine>
        <Port>5432</Port>
        <DBClusterMembers>
          <DBClusterMember>
            <DBInstanceIdentifier>sample-instance</DBInstanceIdentifier>
            <IsClusterWriter>true</IsClusterWriter>
            <PromotionTier>1</PromotionTier>
          </DBClusterMember>
        </DBClusterMembers>
        <VpcSecurityGroups>
          <VpcSecurityGroupMembership>
            <VpcSecurityGroupId>sg-0123</VpcSecurityGroupId>
            <Status>active</Status>
          </VpcSecurityGroupMembership>
        </VpcSecurityGroups>
        <AssociatedRoles/>
        <ClusterCreateTime>2020-02-12T19:55:52.547Z</ClusterCreateTime>
        <BacktrackWindow>0</BacktrackWindow>
        <ActivityStreamMode>async</ActivityStreamMode>
        <CrossAccountClone>false</CrossAccountClone>
        <GlobalWriteForwardingStatus>enabled</GlobalWriteForwardingStatus>
        <TagList>
          <Tag><Key>env</Key><Value>test</Value></Tag>
        </TagList>
      </DBCluster>
    </DBClusters>
  </DescribeDBClustersResult>
  <ResponseMetadata>
    <RequestId>d2b6e6b4-1c2f-4f1e-9a0a-2e5f3e8c1a7b</RequestId>
  </ResponseMetadata>
</DescribeDBClustersResponse>"#;

#[test]
fn describe_db_clusters() {
    let output = DescribeDbClustersOutput::parse_response(DESCRIBE_DB_CLUSTERS.as_bytes()).unwrap();
    assert_eq!(output.marker(), Some("next-page"));

    let expected = DbCluster::builder()
        .allocated_storage(1)
        .availability_zones("us-east-1a")
        .availability_zones("us-east-1b")
        .db_cluster_identifier("sample-cluster")
        .status("available")
        .multi_az(false)
        .engine("aurora-postgresql")
        .port(5432)
        .db_cluster_members(
            DbClusterMember::builder()
                .db_instance_identifier("sample-instance")
                .is_cluster_writer(true)
                .promotion_tier(1)
                .build(),
        )
        .vpc_security_groups(
            VpcSecurityGroupMembership::builder()
                .vpc_security_group_id("sg-0123")
                .status("active")
                .build(),
        )
        .set_associated_roles(Some(Vec::<DbClusterRole>::new()))
        .cluster_create_time(DateTime::from_millis(1581537352547))
        .backtrack_window(0)
        .activity_stream_mode(ActivityStreamMode::Async)
        .cross_account_clone(false)
        .global_write_forwarding_status(WriteForwardingStatus::Enabled)
        .build();
    assert_eq!(output.db_clusters(), Some(&[expected][..]));
}

#[test]
fn copy_db_snapshot() {
    let body = br#"<CopyDBSnapshotResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <CopyDBSnapshotResult>
    <DBSnapshot>
      <DBSnapshotIdentifier>mydbsnapshot-copy</DBSnapshotIdentifier>
      <DBInstanceIdentifier>mydbinstance</DBInstanceIdentifier>
      <SnapshotCreateTime>2019-04-08T19:00:00Z</SnapshotCreateTime>
      <Engine>mysql</Engine>
      <AllocatedStorage>100</AllocatedStorage>
      <Status>creating</Status>
      <Encrypted>false</Encrypted>
      <ProcessorFeatures>
        <ProcessorFeature><Name>coreCount</Name><Value>4</Value></ProcessorFeature>
        <ProcessorFeature><Name>threadsPerCore</Name><Value>2</Value></ProcessorFeature>
      </ProcessorFeatures>
      <DBSnapshotArn>arn:aws:rds:us-east-1:123456789012:snapshot:mydbsnapshot-copy</DBSnapshotArn>
    </DBSnapshot>
  </CopyDBSnapshotResult>
</CopyDBSnapshotResponse>"#;
    let output = CopyDbSnapshotOutput::parse_response(body).unwrap();
    let snapshot: &DbSnapshot = output.db_snapshot().expect("snapshot is set");
    assert_eq!(snapshot.db_snapshot_identifier(), Some("mydbsnapshot-copy"));
    assert_eq!(snapshot.snapshot_create_time(), Some(DateTime::from_secs(1554750000)));
    assert_eq!(snapshot.allocated_storage(), Some(100));
    assert_eq!(snapshot.encrypted(), Some(false));
    assert_eq!(snapshot.iops(), None);
    let features: Vec<_> = snapshot
        .processor_features()
        .unwrap()
        .iter()
        .map(|feature| (feature.name().unwrap(), feature.value().unwrap()))
        .collect();
    assert_eq!(features, vec![("coreCount", "4"), ("threadsPerCore", "2")]);
    assert_eq!(
        snapshot.to_string(),
        "{DBSnapshotIdentifier: mydbsnapshot-copy, DBInstanceIdentifier: mydbinstance, \
         SnapshotCreateTime: 2019-04-08T19:00:00Z, Engine: mysql, AllocatedStorage: 100, \
         Status: creating, Encrypted: false, \
         DBSnapshotArn: arn:aws:rds:us-east-1:123456789012:snapshot:mydbsnapshot-copy, \
         ProcessorFeatures: [{Name: coreCount, Value: 4}, {Name: threadsPerCore, Value: 2}]}"
    );
}

#[test]
fn describe_automated_backups() {
    let body = br#"<DescribeDBInstanceAutomatedBackupsResponse>
  <DescribeDBInstanceAutomatedBackupsResult>
    <DBInstanceAutomatedBackups>
      <DBInstanceAutomatedBackup>
        <DbiResourceId>db-ABCDEFGHIJKLMNOP</DbiResourceId>
        <Region>us-east-1</Region>
        <RestoreWindow>
          <EarliestTime>2020-12-01T00:00:00Z</EarliestTime>
          <LatestTime>2020-12-08T00:00:00Z</LatestTime>
        </RestoreWindow>
        <Status>retained</Status>
        <DBInstanceAutomatedBackupsReplications>
          <DBInstanceAutomatedBackupsReplication>
            <DBInstanceAutomatedBackupsArn>arn:aws:rds:us-west-2:123456789012:auto-backup:ab-1</DBInstanceAutomatedBackupsArn>
          </DBInstanceAutomatedBackupsReplication>
        </DBInstanceAutomatedBackupsReplications>
      </DBInstanceAutomatedBackup>
    </DBInstanceAutomatedBackups>
  </DescribeDBInstanceAutomatedBackupsResult>
</DescribeDBInstanceAutomatedBackupsResponse>"#;
    let output = DescribeDbInstanceAutomatedBackupsOutput::parse_response(body).unwrap();
    let backups = output.db_instance_automated_backups().unwrap();
    assert_eq!(backups.len(), 1);
    let backup = &backups[0];
    assert_eq!(backup.dbi_resource_id(), Some("db-ABCDEFGHIJKLMNOP"));
    assert_eq!(backup.status(), Some("retained"));
    assert_eq!(
        backup.restore_window(),
        Some(
            &RestoreWindow::builder()
                .earliest_time(DateTime::from_secs(1606780800))
                .latest_time(DateTime::from_secs(1607385600))
                .build()
        )
    );
    let replications = backup.db_instance_automated_backups_replications().unwrap();
    assert_eq!(
        replications[0].db_instance_automated_backups_arn(),
        Some("arn:aws:rds:us-west-2:123456789012:auto-backup:ab-1")
    );
}

#[test]
fn describe_export_tasks() {
    let body = br#"<DescribeExportTasksResponse>
  <DescribeExportTasksResult>
    <ExportTasks>
      <ExportTask>
        <ExportTaskIdentifier>my-s3-export</ExportTaskIdentifier>
        <ExportOnly>
          <member>database.table</member>
        </ExportOnly>
        <S3Bucket>my-export-bucket</S3Bucket>
        <Status>COMPLETE</Status>
        <PercentProgress>100</PercentProgress>
        <TotalExtractedDataInGB>0</TotalExtractedDataInGB>
        <WarningMessage>first &amp; only</WarningMessage>
      </ExportTask>
    </ExportTasks>
  </DescribeExportTasksResult>
</DescribeExportTasksResponse>"#;
    let output = DescribeExportTasksOutput::parse_response(body).unwrap();
    assert_eq!(output.marker(), None);
    let expected = ExportTask::builder()
        .export_task_identifier("my-s3-export")
        .export_only("database.table")
        .s3_bucket("my-export-bucket")
        .status("COMPLETE")
        .percent_progress(100)
        .total_extracted_data_in_gb(0)
        .warning_message("first & only")
        .build();
    assert_eq!(output.export_tasks(), Some(&[expected][..]));
}

#[test]
fn error_response() {
    let body = br#"<ErrorResponse xmlns="http://rds.amazonaws.com/doc/2014-10-31/">
  <Error>
    <Type>Sender</Type>
    <Code>DBSnapshotNotFound</Code>
    <Message>DBSnapshot not found: missing-snapshot</Message>
  </Error>
  <RequestId>5e0f8ac8-4b3c-4c4e-8f3e-1e2d3c4b5a69</RequestId>
</ErrorResponse>"#;
    let err = CopyDbSnapshotOutput::parse_response(body).expect_err("service error");
    assert_eq!(err.code(), Some("DBSnapshotNotFound"));
    let meta = err.meta().unwrap();
    assert_eq!(meta.message(), Some("DBSnapshot not found: missing-snapshot"));
    assert_eq!(meta.request_id(), Some("5e0f8ac8-4b3c-4c4e-8f3e-1e2d3c4b5a69"));
}

#[test]
fn unknown_enum_value_is_a_decode_error() {
    let body = br#"<DescribeDBClustersResponse>
  <DescribeDBClustersResult>
    <DBClusters>
      <DBCluster>
        <GlobalWriteForwardingStatus>paused</GlobalWriteForwardingStatus>
      </DBCluster>
    </DBClusters>
  </DescribeDBClustersResult>
</DescribeDBClustersResponse>"#;
    let err = DescribeDbClustersOutput::parse_response(body).expect_err("undeclared value");
    match err {
        ResponseError::Decode(err) => assert!(
            err.to_string()
                .contains("cannot create WriteForwardingStatus from unrecognized value `paused`"),
            "{}",
            err
        ),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn response_for_another_action() {
    let err = CopyDbSnapshotOutput::parse_response(DESCRIBE_DB_CLUSTERS.as_bytes())
        .expect_err("wrong action");
    assert!(matches!(err, ResponseError::Decode(_)));
    assert_eq!(err.code(), None);
}

const CLUSTERS_PREFIX: &str = "<DescribeDBClustersResponse><DescribeDBClustersResult><DBClusters>\
     <DBCluster><DBClusterIdentifier>a</DBClusterIdentifier></DBCluster>";

fn assert_decode_error(body: &str) {
    match DescribeDbClustersOutput::parse_response(body.as_bytes()) {
        Err(ResponseError::Decode(_)) => {}
        other => panic!("expected a decode error for {:?}, got {:?}", body, other),
    }
}

#[test]
fn malformed_body_is_a_decode_error() {
    assert_decode_error(&format!("{}<DBCluster <<<garbage", CLUSTERS_PREFIX));
}

#[test]
fn truncated_body_is_a_decode_error() {
    assert_decode_error(CLUSTERS_PREFIX);
    assert_decode_error(
        "<DescribeDBClustersResponse><DescribeDBClustersResult><DBClusters>\
         <DBCluster><DBClusterIdentifier>a</DBClusterIdentifier>",
    );
    assert_decode_error(
        "<DescribeDBClustersResponse><DescribeDBClustersResult><Marker>m</Marker>\
         </DescribeDBClustersResult>",
    );
}

#[test]
fn invalid_escape_in_attribute_is_a_decode_error() {
    assert_decode_error(
        r#"<DescribeDBClustersResponse><DescribeDBClustersResult><DBClusters>
  <DBCluster x="&bogus;"><DBClusterIdentifier>a</DBClusterIdentifier></DBCluster>
</DBClusters></DescribeDBClustersResult></DescribeDBClustersResponse>"#,
    );
}
