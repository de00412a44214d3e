//! ECS control-plane port.
//!
//! # Responsibilities
//! - List task definition revisions for a family (latest first, limit one)
//! - Describe a task definition (network mode)
//! - Submit a RunTask request
//!
//! # Design Decisions
//! - The trait returns raw SDK outputs; the launch pipeline owns all
//!   response-shape checks so they stay testable with fakes
//! - SDK errors are flattened into their full display chain

use async_trait::async_trait;
use aws_sdk_ecs::operation::describe_task_definition::DescribeTaskDefinitionOutput;
use aws_sdk_ecs::operation::list_task_definitions::ListTaskDefinitionsOutput;
use aws_sdk_ecs::operation::run_task::RunTaskOutput;
use aws_sdk_ecs::types::SortOrder;
use aws_smithy_types::error::display::DisplayErrorContext;

use crate::launch::types::{LaunchError, LaunchResult, TaskLaunch};

/// Read/launch access to the ECS control plane.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    /// List task definition ARNs for `family_prefix`, newest revision
    /// first, limited to one result.
    async fn list_task_definitions(
        &self,
        family_prefix: &str,
    ) -> LaunchResult<ListTaskDefinitionsOutput>;

    /// Describe a task definition by ARN.
    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> LaunchResult<DescribeTaskDefinitionOutput>;

    /// Submit a RunTask request.
    async fn run_task(&self, launch: TaskLaunch) -> LaunchResult<RunTaskOutput>;
}

/// ECS client backed by the real control plane.
#[derive(Debug, Clone)]
pub struct EcsCompute {
    client: aws_sdk_ecs::Client,
}

impl EcsCompute {
    /// Create a client from the shared SDK configuration.
    pub fn new(config: &aws_config::SdkConfig) -> Self {
        Self {
            client: aws_sdk_ecs::Client::new(config),
        }
    }
}

#[async_trait]
impl ComputeApi for EcsCompute {
    async fn list_task_definitions(
        &self,
        family_prefix: &str,
    ) -> LaunchResult<ListTaskDefinitionsOutput> {
        self.client
            .list_task_definitions()
            .family_prefix(family_prefix)
            .sort(SortOrder::Desc)
            .max_results(1)
            .send()
            .await
            .map_err(|e| api_error("ListTaskDefinitions", &e))
    }

    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> LaunchResult<DescribeTaskDefinitionOutput> {
        self.client
            .describe_task_definition()
            .task_definition(task_definition)
            .send()
            .await
            .map_err(|e| api_error("DescribeTaskDefinition", &e))
    }

    async fn run_task(&self, launch: TaskLaunch) -> LaunchResult<RunTaskOutput> {
        self.client
            .run_task()
            .cluster(launch.cluster)
            .task_definition(launch.task_definition)
            .launch_type(launch.launch_type)
            .overrides(launch.overrides)
            .set_network_configuration(launch.network)
            .count(launch.count)
            .send()
            .await
            .map_err(|e| api_error("RunTask", &e))
    }
}

/// Flatten an SDK error into its full display chain.
pub(crate) fn api_error<E: std::error::Error>(operation: &'static str, err: &E) -> LaunchError {
    LaunchError::Api {
        operation,
        message: DisplayErrorContext(err).to_string(),
    }
}
