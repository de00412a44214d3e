//! Configuration schema definitions.
//!
//! The registry file maps environment names to ECS launch settings:
//!
//! ```toml
//! [environments.default]
//! task_definition = "app-cli"
//! cluster = "app-cluster"
//! launch_type = "FARGATE"   # optional
//! region = "us-east-1"      # optional
//!
//! [environments.default.security_group_tags]
//! Name = "app-tasks"
//!
//! [environments.default.subnet_tags]
//! Tier = "private"
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

/// Launch type used when an environment does not set one.
pub const DEFAULT_LAUNCH_TYPE: &str = "FARGATE";

/// Region used when an environment does not set one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Root of the registry file.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Registry {
    /// Environment name → raw launch settings.
    pub environments: BTreeMap<String, EnvironmentEntry>,
}

/// Raw, unvalidated settings for one environment.
///
/// All fields are optional at this stage; `validation::resolve_environment`
/// decides which absences are fatal and which fall back to defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct EnvironmentEntry {
    /// Task definition family to launch (latest revision is used).
    pub task_definition: Option<String>,

    /// ECS cluster to run the task on.
    pub cluster: Option<String>,

    /// Tag filters selecting the task's security group.
    pub security_group_tags: Option<BTreeMap<String, String>>,

    /// Tag filters selecting the task's subnet.
    pub subnet_tags: Option<BTreeMap<String, String>>,

    /// ECS launch type (e.g. "FARGATE", "EC2").
    pub launch_type: Option<String>,

    /// AWS region the cluster lives in.
    pub region: Option<String>,
}

/// A fully validated environment, defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    pub name: String,
    pub task_definition: String,
    pub cluster: String,
    pub security_group_tags: BTreeMap<String, String>,
    pub subnet_tags: BTreeMap<String, String>,
    pub launch_type: String,
    pub region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_registry() {
        let registry: Registry = toml::from_str(
            r#"
            [environments.default]
            task_definition = "app-cli"
            cluster = "app-cluster"

            [environments.default.security_group_tags]
            Name = "app-tasks"

            [environments.default.subnet_tags]
            Tier = "private"

            [environments.staging]
            task_definition = "app-cli-staging"
            cluster = "staging-cluster"
            launch_type = "EC2"
            region = "eu-west-1"
            "#,
        )
        .unwrap();

        assert_eq!(registry.environments.len(), 2);

        let default = &registry.environments["default"];
        assert_eq!(default.task_definition.as_deref(), Some("app-cli"));
        assert_eq!(
            default.security_group_tags.as_ref().unwrap()["Name"],
            "app-tasks"
        );
        assert!(default.launch_type.is_none());

        let staging = &registry.environments["staging"];
        assert_eq!(staging.launch_type.as_deref(), Some("EC2"));
        assert_eq!(staging.region.as_deref(), Some("eu-west-1"));
        assert!(staging.subnet_tags.is_none());
    }

    #[test]
    fn test_empty_file_parses_to_empty_registry() {
        let registry: Registry = toml::from_str("").unwrap();
        assert!(registry.environments.is_empty());
    }
}
