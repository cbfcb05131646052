//! Integration tests for parsing ECS response data.
//!
//! These tests validate that the aliyun-ecs models can correctly deserialize
//! response bodies as the API sends them, including the nested single-key
//! list wrappers.

use std::fs;
use std::path::PathBuf;

use aliyun_ecs::models::DescribeInstancesResponse;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load the instance list fixture from disk.
fn load_instance_list_fixture() -> String {
    let fixture_path = fixtures_dir().join("describe_instances.json");
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read instance list fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

#[test]
fn test_deserialize_instance_list() {
    let json_data = load_instance_list_fixture();

    let response: DescribeInstancesResponse =
        serde_json::from_str(&json_data).unwrap_or_else(|e| {
            panic!(
                "Failed to deserialize instance list data: {}\nJSON: {}",
                e, json_data
            )
        });

    assert_eq!(response.total_count, Some(2));
    assert_eq!(response.page_number, Some(1));
    assert_eq!(response.page_size, Some(100));
    assert_eq!(
        response.instances.instance.len(),
        2,
        "Expected 2 instances in test data"
    );
}

#[test]
fn test_running_instance_fields() {
    let json_data = load_instance_list_fixture();
    let response: DescribeInstancesResponse = serde_json::from_str(&json_data).unwrap();

    let running = response
        .instances
        .instance
        .iter()
        .find(|i| i.status.as_deref() == Some("Running"))
        .expect("Should have a running instance");

    assert_eq!(running.instance_id, "i-bp1aabbccdd0011aabbc");
    assert_eq!(running.instance_name.as_deref(), Some("web-frontend-01"));
    assert_eq!(running.instance_type.as_deref(), Some("ecs.g6.large"));
    assert_eq!(running.zone_id.as_deref(), Some("cn-hangzhou-h"));
    assert_eq!(running.key_pair_name.as_deref(), Some("deploy"));
    assert_eq!(running.spot_strategy.as_deref(), Some("SpotAsPriceGo"));

    let public = running
        .public_ip_address
        .as_ref()
        .expect("Should have public addresses");
    assert_eq!(public.ip_address, vec!["47.98.112.34"]);

    let inner = running
        .inner_ip_address
        .as_ref()
        .expect("Should have an inner address wrapper");
    assert!(inner.ip_address.is_empty(), "Classic addresses should be empty");

    let vpc = running
        .vpc_attributes
        .as_ref()
        .expect("Should have VPC attributes");
    assert_eq!(vpc.vpc_id.as_deref(), Some("vpc-bp1qqxxyyzz00112233"));
    assert_eq!(vpc.v_switch_id.as_deref(), Some("vsw-bp1ffgghh44556677889"));
    let private = vpc
        .private_ip_address
        .as_ref()
        .expect("Should have private addresses");
    assert_eq!(private.ip_address, vec!["172.16.0.10"]);

    let groups = running
        .security_group_ids
        .as_ref()
        .expect("Should have security groups");
    assert_eq!(groups.security_group_id.len(), 1);
}

#[test]
fn test_stopped_instance_fields() {
    let json_data = load_instance_list_fixture();
    let response: DescribeInstancesResponse = serde_json::from_str(&json_data).unwrap();

    let stopped = response
        .instances
        .instance
        .iter()
        .find(|i| i.status.as_deref() == Some("Stopped"))
        .expect("Should have a stopped instance");

    assert_eq!(stopped.instance_name.as_deref(), Some("batch-worker-07"));
    assert!(stopped.key_pair_name.is_none(), "No key pair attached");
    assert!(stopped.public_ip_address.is_none(), "No public address");

    let vpc = stopped
        .vpc_attributes
        .as_ref()
        .expect("Should have VPC attributes");
    let private = vpc
        .private_ip_address
        .as_ref()
        .expect("Should have private addresses");
    assert_eq!(private.ip_address.len(), 2);

    let groups = stopped
        .security_group_ids
        .as_ref()
        .expect("Should have security groups");
    assert_eq!(groups.security_group_id.len(), 2);
}

#[test]
fn test_all_instances_have_required_fields() {
    let json_data = load_instance_list_fixture();
    let response: DescribeInstancesResponse = serde_json::from_str(&json_data).unwrap();

    for instance in &response.instances.instance {
        assert!(
            !instance.instance_id.is_empty(),
            "Instance should have an id"
        );
        assert!(instance.status.is_some(), "Instance should have a status");
        assert!(
            instance.region_id.as_deref() == Some("cn-hangzhou"),
            "Instance should carry the region"
        );
        assert!(
            instance.creation_time.is_some(),
            "Instance should have a creation time"
        );
    }
}
