//! Shared fakes for integration tests.
//!
//! The fakes record every request the pipeline makes and replay canned SDK
//! outputs, so tests can assert on exact request shapes without AWS.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use aws_sdk_ec2::operation::describe_security_groups::DescribeSecurityGroupsOutput;
use aws_sdk_ec2::operation::describe_subnets::DescribeSubnetsOutput;
use aws_sdk_ec2::types::{Filter, SecurityGroup, Subnet};
use aws_sdk_ecs::operation::describe_task_definition::DescribeTaskDefinitionOutput;
use aws_sdk_ecs::operation::list_task_definitions::ListTaskDefinitionsOutput;
use aws_sdk_ecs::operation::run_task::RunTaskOutput;
use aws_sdk_ecs::types::{NetworkMode, Task, TaskDefinition};

use ecsrun::aws::{ComputeApi, NetworkApi};
use ecsrun::launch::{LaunchResult, TaskLaunch};

/// ECS fake: canned responses plus a record of every request.
#[derive(Clone, Default)]
pub struct FakeCompute {
    pub task_definition_arns: Vec<String>,
    pub task_definition: Option<TaskDefinition>,
    pub tasks: Vec<Task>,
    pub listed_families: Arc<Mutex<Vec<String>>>,
    pub described_arns: Arc<Mutex<Vec<String>>>,
    pub launches: Arc<Mutex<Vec<TaskLaunch>>>,
}

#[async_trait]
impl ComputeApi for FakeCompute {
    async fn list_task_definitions(
        &self,
        family_prefix: &str,
    ) -> LaunchResult<ListTaskDefinitionsOutput> {
        self.listed_families
            .lock()
            .unwrap()
            .push(family_prefix.to_string());
        Ok(ListTaskDefinitionsOutput::builder()
            .set_task_definition_arns(Some(self.task_definition_arns.clone()))
            .build())
    }

    async fn describe_task_definition(
        &self,
        task_definition: &str,
    ) -> LaunchResult<DescribeTaskDefinitionOutput> {
        self.described_arns
            .lock()
            .unwrap()
            .push(task_definition.to_string());
        Ok(DescribeTaskDefinitionOutput::builder()
            .set_task_definition(self.task_definition.clone())
            .build())
    }

    async fn run_task(&self, launch: TaskLaunch) -> LaunchResult<RunTaskOutput> {
        self.launches.lock().unwrap().push(launch);
        Ok(RunTaskOutput::builder()
            .set_tasks(Some(self.tasks.clone()))
            .build())
    }
}

/// EC2 fake: canned directory entries plus the filters each query used.
#[derive(Clone, Default)]
pub struct FakeNetwork {
    pub security_groups: Vec<SecurityGroup>,
    pub subnets: Vec<Subnet>,
    pub security_group_filters: Arc<Mutex<Vec<Vec<Filter>>>>,
    pub subnet_filters: Arc<Mutex<Vec<Vec<Filter>>>>,
}

#[async_trait]
impl NetworkApi for FakeNetwork {
    async fn describe_security_groups(
        &self,
        filters: Vec<Filter>,
    ) -> LaunchResult<DescribeSecurityGroupsOutput> {
        self.security_group_filters.lock().unwrap().push(filters);
        Ok(DescribeSecurityGroupsOutput::builder()
            .set_security_groups(Some(self.security_groups.clone()))
            .build())
    }

    async fn describe_subnets(
        &self,
        filters: Vec<Filter>,
    ) -> LaunchResult<DescribeSubnetsOutput> {
        self.subnet_filters.lock().unwrap().push(filters);
        Ok(DescribeSubnetsOutput::builder()
            .set_subnets(Some(self.subnets.clone()))
            .build())
    }
}

/// A task definition with the given network mode.
pub fn task_definition(mode: NetworkMode) -> TaskDefinition {
    TaskDefinition::builder().network_mode(mode).build()
}

/// A task carrying only its ARN, as RunTask returns it.
pub fn task_with_arn(arn: &str) -> Task {
    Task::builder().task_arn(arn).build()
}

/// A security group carrying only its ID.
pub fn security_group(id: &str) -> SecurityGroup {
    SecurityGroup::builder().group_id(id).build()
}

/// A subnet carrying only its ID.
pub fn subnet(id: &str) -> Subnet {
    Subnet::builder().subnet_id(id).build()
}
