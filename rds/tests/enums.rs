/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use proptest::prelude::*;
use rds::model::{ActivityStreamMode, ActivityStreamStatus, ReplicaMode, WriteForwardingStatus};
use std::convert::TryFrom;
use std::fmt::{Debug, Display};
use std::str::FromStr;

#[test]
fn parses_wire_values() {
    assert_eq!(
        WriteForwardingStatus::from_value("enabled").unwrap(),
        WriteForwardingStatus::Enabled
    );
    assert_eq!(
        WriteForwardingStatus::from_value("unknown").unwrap(),
        WriteForwardingStatus::Unknown
    );
    assert_eq!(
        ActivityStreamMode::from_value("async").unwrap(),
        ActivityStreamMode::Async
    );
    assert_eq!(
        ReplicaMode::from_str("open-read-only").unwrap(),
        ReplicaMode::OpenReadOnly
    );
    assert_eq!(
        ActivityStreamStatus::try_from("stopping").unwrap(),
        ActivityStreamStatus::Stopping
    );
}

#[test]
fn wire_values_in_declaration_order() {
    assert_eq!(
        WriteForwardingStatus::values(),
        &["enabled", "disabled", "enabling", "disabling", "unknown"]
    );
    assert_eq!(ReplicaMode::values(), &["open-read-only", "mounted"]);
    assert_eq!(ReplicaMode::OpenReadOnly.as_str(), "open-read-only");
    assert_eq!(ActivityStreamStatus::Started.to_string(), "started");
    assert_eq!(ActivityStreamMode::Sync.as_ref(), "sync");
}

#[test]
fn parsing_is_case_sensitive() {
    let err = WriteForwardingStatus::from_value("Enabled").expect_err("wrong case");
    assert_eq!(err.enum_name(), "WriteForwardingStatus");
    assert_eq!(err.value(), "Enabled");
    assert!(!err.is_empty());
}

#[test]
fn rejects_empty_values() {
    let err = WriteForwardingStatus::from_value("").expect_err("empty value");
    assert!(err.is_empty());
    assert_eq!(
        err.to_string(),
        "WriteForwardingStatus: value cannot be null or empty"
    );
}

#[test]
fn rejects_unknown_values() {
    let err = ActivityStreamMode::from_value("bogus").expect_err("undeclared value");
    assert_eq!(
        err.to_string(),
        "cannot create ActivityStreamMode from unrecognized value `bogus`"
    );
    assert!(ReplicaMode::from_value("open_read_only").is_err());
    assert!(ReplicaMode::from_value(" mounted").is_err());
}

fn assert_round_trips<T>(values: &[&str])
where
    T: FromStr + Display + Debug + Eq,
    T::Err: Debug,
{
    for value in values {
        let parsed: T = value.parse().unwrap();
        assert_eq!(&parsed.to_string(), value);
        assert_eq!(parsed.to_string().parse::<T>().unwrap(), parsed);
    }
}

#[test]
fn every_constant_round_trips() {
    assert_round_trips::<WriteForwardingStatus>(WriteForwardingStatus::values());
    assert_round_trips::<ActivityStreamMode>(ActivityStreamMode::values());
    assert_round_trips::<ActivityStreamStatus>(ActivityStreamStatus::values());
    assert_round_trips::<ReplicaMode>(ReplicaMode::values());

    for mode in [ActivityStreamMode::Sync, ActivityStreamMode::Async] {
        assert_eq!(ActivityStreamMode::from_value(&mode.to_string()).unwrap(), mode);
        assert_eq!(ActivityStreamMode::from_value(mode.as_str()).unwrap(), mode);
    }
    for status in [
        ActivityStreamStatus::Stopped,
        ActivityStreamStatus::Starting,
        ActivityStreamStatus::Started,
        ActivityStreamStatus::Stopping,
    ] {
        assert_eq!(ActivityStreamStatus::from_value(&status.to_string()).unwrap(), status);
        assert_eq!(ActivityStreamStatus::from_value(status.as_str()).unwrap(), status);
    }
    for mode in [ReplicaMode::OpenReadOnly, ReplicaMode::Mounted] {
        assert_eq!(ReplicaMode::from_value(&mode.to_string()).unwrap(), mode);
        assert_eq!(ReplicaMode::from_value(mode.as_str()).unwrap(), mode);
    }
}

proptest! {
    #[test]
    fn wire_values_round_trip(index in 0..WriteForwardingStatus::values().len()) {
        let value = WriteForwardingStatus::values()[index];
        let parsed = WriteForwardingStatus::from_value(value).unwrap();
        prop_assert_eq!(parsed.as_str(), value);
        prop_assert_eq!(WriteForwardingStatus::from_value(parsed.as_str()).unwrap(), parsed);
        prop_assert_eq!(WriteForwardingStatus::from_value(&parsed.to_string()).unwrap(), parsed);
    }

    #[test]
    fn only_declared_values_parse(value in "\\PC*") {
        let declared = ReplicaMode::values().contains(&value.as_str());
        prop_assert_eq!(ReplicaMode::from_value(&value).is_ok(), declared);
    }
}
