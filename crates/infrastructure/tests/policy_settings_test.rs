//! Integration tests for loading the verification policy from a file.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use stamp_domain::{RejectionReason, build, verify};
use stamp_infrastructure::load_policy_from;

#[test]
fn test_policy_from_yaml_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("stamp.yaml");
    fs::write(&path, "ttl_seconds: -1\nmax_future_skew_seconds: 2\n").unwrap();

    let policy = load_policy_from(&path).expect("Failed to load policy");
    assert_eq!(policy.max_future_skew_seconds, 2);

    let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let outcome = verify(&build(300, now), &policy, now);
    assert_eq!(outcome.reason(), Some(RejectionReason::Stale));
}

#[test]
fn test_malformed_file_is_an_error() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let path = temp_dir.path().join("stamp.toml");
    fs::write(&path, "ttl_seconds = [").unwrap();

    assert!(load_policy_from(&path).is_err());
}
