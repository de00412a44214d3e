//! The launch pipeline.
//!
//! # Data Flow
//! ```text
//! ResolvedEnvironment
//!     → resolve.rs   latest task definition ARN (ECS)
//!     → resolve.rs   security group ID, subnet ID (EC2 tag queries)
//!     → submit.rs    network mode → placement decision → RunTask
//!     → report.rs    console URL for the new task
//! ```
//!
//! # Design Decisions
//! - Strictly linear; the first failure aborts the run
//! - No retries here: transport retry belongs to the SDK client
//! - The launcher owns its configuration; nothing global is read

pub mod report;
pub mod resolve;
pub mod submit;
pub mod types;

pub use types::{LaunchError, LaunchResult, LaunchedTask, NetworkPlacement, TaskLaunch};

use crate::aws::{ComputeApi, NetworkApi};
use crate::config::schema::ResolvedEnvironment;

/// Drives one task launch from resolution through submission.
pub struct Launcher<C, N> {
    env: ResolvedEnvironment,
    compute: C,
    network: N,
}

impl<C: ComputeApi, N: NetworkApi> Launcher<C, N> {
    /// Create a launcher for one validated environment.
    pub fn new(env: ResolvedEnvironment, compute: C, network: N) -> Self {
        Self {
            env,
            compute,
            network,
        }
    }

    /// Launch one task running `command`, returning its identity.
    ///
    /// All three identifier resolutions must succeed before the RunTask
    /// request is attempted.
    pub async fn run(&self, command: &[String]) -> LaunchResult<LaunchedTask> {
        let task_def_arn =
            resolve::latest_task_definition(&self.compute, &self.env.task_definition).await?;
        tracing::info!(task_definition_arn = %task_def_arn, "Task definition resolved");

        let security_group =
            resolve::security_group_id(&self.network, &self.env.security_group_tags).await?;
        tracing::info!(security_group = %security_group, "Security group resolved");

        let subnet = resolve::subnet_id(&self.network, &self.env.subnet_tags).await?;
        tracing::info!(subnet = %subnet, "Subnet resolved");

        let task_id = submit::run_task(
            &self.compute,
            &self.env,
            &task_def_arn,
            security_group,
            subnet,
            command,
        )
        .await?;
        tracing::info!(task_id = %task_id, cluster = %self.env.cluster, "Task started");

        Ok(LaunchedTask {
            task_id,
            cluster: self.env.cluster.clone(),
            region: self.env.region.clone(),
        })
    }
}
