//! Launch pipeline types and error definitions.

use aws_sdk_ecs::types::{
    AwsVpcConfiguration, LaunchType, NetworkConfiguration, NetworkMode, TaskOverride,
};
use thiserror::Error;

/// Errors raised while resolving identifiers or launching the task.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// An AWS API call failed outright.
    #[error("AWS {operation} call failed: {message}")]
    Api {
        operation: &'static str,
        message: String,
    },

    /// An AWS call succeeded but the response was not shaped as expected.
    /// The raw response rides along for diagnosis.
    #[error("unexpected response from AWS {operation}: {response}")]
    UnexpectedResponse {
        operation: &'static str,
        response: String,
    },
}

impl LaunchError {
    /// Build an `UnexpectedResponse` carrying the Debug rendering of `raw`.
    pub fn unexpected<R: std::fmt::Debug>(operation: &'static str, raw: &R) -> Self {
        Self::UnexpectedResponse {
            operation,
            response: format!("{raw:?}"),
        }
    }
}

/// Result type for launch operations.
pub type LaunchResult<T> = Result<T, LaunchError>;

/// A fully built RunTask request.
///
/// Everything is decided before the call is made; the compute client maps
/// these fields one-to-one onto the SDK request.
#[derive(Debug, Clone)]
pub struct TaskLaunch {
    pub cluster: String,
    pub task_definition: String,
    pub launch_type: LaunchType,
    pub overrides: TaskOverride,
    pub network: Option<NetworkConfiguration>,
    pub count: i32,
}

/// Whether the task needs explicit network placement.
///
/// Only the awsvpc network mode accepts a network configuration on RunTask;
/// the API rejects the block for every other mode. The decision is made
/// once, right after the task definition is described, instead of branching
/// on the mode string at request-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkPlacement {
    /// awsvpc: the task is placed in exactly one subnet and security group.
    Required {
        subnet: String,
        security_group: String,
    },
    /// Any other network mode: the placement block is omitted entirely.
    NotRequired,
}

impl NetworkPlacement {
    /// Decide placement from the task definition's network mode.
    ///
    /// Modes other than awsvpc (bridge, host, none, or anything the
    /// control plane grows later) never take a placement block.
    pub fn from_network_mode(
        mode: Option<&NetworkMode>,
        subnet: String,
        security_group: String,
    ) -> Self {
        match mode {
            Some(NetworkMode::Awsvpc) => Self::Required {
                subnet,
                security_group,
            },
            _ => Self::NotRequired,
        }
    }

    /// Convert into the optional SDK network configuration block.
    pub fn into_configuration(self) -> LaunchResult<Option<NetworkConfiguration>> {
        match self {
            Self::Required {
                subnet,
                security_group,
            } => {
                let vpc = AwsVpcConfiguration::builder()
                    .subnets(subnet)
                    .security_groups(security_group)
                    .build()
                    .map_err(|e| LaunchError::Api {
                        operation: "RunTask",
                        message: format!("invalid network configuration: {e}"),
                    })?;
                Ok(Some(
                    NetworkConfiguration::builder()
                        .awsvpc_configuration(vpc)
                        .build(),
                ))
            }
            Self::NotRequired => Ok(None),
        }
    }
}

/// The launched task, identified for console reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchedTask {
    pub task_id: String,
    pub cluster: String,
    pub region: String,
}
