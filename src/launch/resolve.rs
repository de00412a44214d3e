//! Identifier resolution against the AWS directories.
//!
//! # Responsibilities
//! - Latest task definition ARN by family prefix
//! - Security group ID and subnet ID by tag filters
//! - Fail with the raw response whenever the expected list is absent,
//!   empty, or its first element is unusable

use std::collections::BTreeMap;

use crate::aws::filters::tag_filters;
use crate::aws::{ComputeApi, NetworkApi};
use crate::launch::types::{LaunchError, LaunchResult};

/// ARN of the newest task definition revision in `family`.
pub async fn latest_task_definition<C: ComputeApi>(
    compute: &C,
    family: &str,
) -> LaunchResult<String> {
    let response = compute.list_task_definitions(family).await?;
    response
        .task_definition_arns()
        .first()
        .cloned()
        .ok_or_else(|| LaunchError::unexpected("ListTaskDefinitions", &response))
}

/// ID of the first security group matching `tags`.
pub async fn security_group_id<N: NetworkApi>(
    network: &N,
    tags: &BTreeMap<String, String>,
) -> LaunchResult<String> {
    let response = network.describe_security_groups(tag_filters(tags)).await?;
    response
        .security_groups()
        .first()
        .and_then(|group| group.group_id())
        .map(str::to_string)
        .ok_or_else(|| LaunchError::unexpected("DescribeSecurityGroups", &response))
}

/// ID of the first subnet matching `tags`.
pub async fn subnet_id<N: NetworkApi>(
    network: &N,
    tags: &BTreeMap<String, String>,
) -> LaunchResult<String> {
    let response = network.describe_subnets(tag_filters(tags)).await?;
    response
        .subnets()
        .first()
        .and_then(|subnet| subnet.subnet_id())
        .map(str::to_string)
        .ok_or_else(|| LaunchError::unexpected("DescribeSubnets", &response))
}
