//! Task submission.
//!
//! # Responsibilities
//! - Read the task definition's network mode
//! - Decide network placement (awsvpc requires it, everything else
//!   rejects it)
//! - Build the container command override for the "app" container
//! - Submit exactly one task and extract its ID from the task ARN

use aws_sdk_ecs::types::{ContainerOverride, LaunchType, TaskOverride};

use crate::aws::ComputeApi;
use crate::config::schema::ResolvedEnvironment;
use crate::launch::types::{LaunchError, LaunchResult, NetworkPlacement, TaskLaunch};

/// Container whose command is overridden in the task definition.
pub const OVERRIDE_CONTAINER: &str = "app";

/// Launch one task and return its ID.
pub async fn run_task<C: ComputeApi>(
    compute: &C,
    env: &ResolvedEnvironment,
    task_def_arn: &str,
    security_group: String,
    subnet: String,
    command: &[String],
) -> LaunchResult<String> {
    let described = compute.describe_task_definition(task_def_arn).await?;
    let network_mode = described
        .task_definition()
        .and_then(|def| def.network_mode())
        .cloned();
    tracing::debug!(network_mode = ?network_mode, "Task definition described");

    let placement =
        NetworkPlacement::from_network_mode(network_mode.as_ref(), subnet, security_group);

    let launch = TaskLaunch {
        cluster: env.cluster.clone(),
        task_definition: task_def_arn.to_string(),
        launch_type: LaunchType::from(env.launch_type.as_str()),
        overrides: command_override(command),
        network: placement.into_configuration()?,
        count: 1,
    };

    let response = compute.run_task(launch).await?;
    let task_arn = response
        .tasks()
        .first()
        .and_then(|task| task.task_arn())
        .map(str::to_string)
        .ok_or_else(|| LaunchError::unexpected("RunTask", &response))?;

    task_id_from_arn(&task_arn).ok_or_else(|| LaunchError::unexpected("RunTask", &response))
}

/// Override for the "app" container with the verbatim command tokens.
///
/// An empty token sequence still produces an explicit empty command list;
/// the override itself is never omitted.
pub fn command_override(command: &[String]) -> TaskOverride {
    TaskOverride::builder()
        .container_overrides(
            ContainerOverride::builder()
                .name(OVERRIDE_CONTAINER)
                .set_command(Some(command.to_vec()))
                .build(),
        )
        .build()
}

/// Extract the task ID from a task ARN.
///
/// ECS returns only the full ARN, shaped
/// `arn:<partition>:ecs:<region>:<account>:task/<id>`; the ID is the
/// segment after the first slash.
pub fn task_id_from_arn(arn: &str) -> Option<String> {
    arn.split('/').nth(1).map(str::to_string)
}
