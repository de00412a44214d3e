//! EC2 network-directory port.
//!
//! # Responsibilities
//! - Look up security groups by tag filters
//! - Look up subnets by tag filters
//!
//! # Design Decisions
//! - Filters are built by the caller (`filters::tag_filters`) so the
//!   clause expansion is testable on its own
//! - The trait returns raw SDK outputs, same as the compute port

use async_trait::async_trait;
use aws_sdk_ec2::operation::describe_security_groups::DescribeSecurityGroupsOutput;
use aws_sdk_ec2::operation::describe_subnets::DescribeSubnetsOutput;
use aws_sdk_ec2::types::Filter;

use crate::aws::compute::api_error;
use crate::launch::types::LaunchResult;

/// Read-only access to the EC2 network directory.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// Describe security groups matching `filters`.
    async fn describe_security_groups(
        &self,
        filters: Vec<Filter>,
    ) -> LaunchResult<DescribeSecurityGroupsOutput>;

    /// Describe subnets matching `filters`.
    async fn describe_subnets(&self, filters: Vec<Filter>)
        -> LaunchResult<DescribeSubnetsOutput>;
}

/// EC2 client backed by the real network directory.
#[derive(Debug, Clone)]
pub struct Ec2Network {
    client: aws_sdk_ec2::Client,
}

impl Ec2Network {
    /// Create a client from the shared SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_ec2::Client::new(config),
        }
    }
}

#[async_trait]
impl NetworkApi for Ec2Network {
    async fn describe_security_groups(
        &self,
        filters: Vec<Filter>,
    ) -> LaunchResult<DescribeSecurityGroupsOutput> {
        self.client
            .describe_security_groups()
            .set_filters(Some(filters))
            .send()
            .await
            .map_err(|e| api_error("DescribeSecurityGroups", &e))
    }

    async fn describe_subnets(
        &self,
        filters: Vec<Filter>,
    ) -> LaunchResult<DescribeSubnetsOutput> {
        self.client
            .describe_subnets()
            .set_filters(Some(filters))
            .send()
            .await
            .map_err(|e| api_error("DescribeSubnets", &e))
    }
}
