//! Environment resolution and semantic validation.
//!
//! # Responsibilities
//! - Resolve one environment from the registry by name
//! - Apply defaults for launch type and region
//! - Reject environments missing required attributes
//!
//! # Design Decisions
//! - Serde accepts any well-formed registry; requiredness is decided here
//!   so error messages can name the environment and the field
//! - Unknown-environment errors enumerate the registry's keys

use thiserror::Error;

use crate::config::schema::{
    Registry, ResolvedEnvironment, DEFAULT_LAUNCH_TYPE, DEFAULT_REGION,
};

/// Semantic configuration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The registry defines no environments at all.
    #[error("the environment registry defines no environments")]
    EmptyRegistry,

    /// The requested environment is not defined.
    #[error(
        "environment {name:?} is not a recognized environment (environments include: {})",
        .known.join(", ")
    )]
    UnknownEnvironment { name: String, known: Vec<String> },

    /// A required attribute is absent and has no default.
    #[error("environment {environment:?} is missing required config attribute {field}")]
    MissingAttribute {
        environment: String,
        field: &'static str,
    },
}

/// Resolve `name` from the registry into a validated environment.
pub fn resolve_environment(
    registry: &Registry,
    name: &str,
) -> Result<ResolvedEnvironment, ValidationError> {
    if registry.environments.is_empty() {
        return Err(ValidationError::EmptyRegistry);
    }

    let entry = registry
        .environments
        .get(name)
        .ok_or_else(|| ValidationError::UnknownEnvironment {
            name: name.to_string(),
            known: registry.environments.keys().cloned().collect(),
        })?;

    Ok(ResolvedEnvironment {
        name: name.to_string(),
        task_definition: required(entry.task_definition.clone(), name, "task_definition")?,
        cluster: required(entry.cluster.clone(), name, "cluster")?,
        security_group_tags: required(
            entry.security_group_tags.clone(),
            name,
            "security_group_tags",
        )?,
        subnet_tags: required(entry.subnet_tags.clone(), name, "subnet_tags")?,
        launch_type: entry
            .launch_type
            .clone()
            .unwrap_or_else(|| DEFAULT_LAUNCH_TYPE.to_string()),
        region: entry
            .region
            .clone()
            .unwrap_or_else(|| DEFAULT_REGION.to_string()),
    })
}

fn required<T>(
    value: Option<T>,
    environment: &str,
    field: &'static str,
) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::MissingAttribute {
        environment: environment.to_string(),
        field,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(toml: &str) -> Registry {
        toml::from_str(toml).unwrap()
    }

    fn complete() -> Registry {
        registry(
            r#"
            [environments.default]
            task_definition = "app-cli"
            cluster = "app-cluster"

            [environments.default.security_group_tags]
            Name = "app-tasks"

            [environments.default.subnet_tags]
            Tier = "private"
            "#,
        )
    }

    #[test]
    fn test_defaults_applied() {
        let env = resolve_environment(&complete(), "default").unwrap();
        assert_eq!(env.launch_type, "FARGATE");
        assert_eq!(env.region, "us-east-1");
        assert_eq!(env.task_definition, "app-cli");
        assert_eq!(env.cluster, "app-cluster");
    }

    #[test]
    fn test_explicit_values_override_defaults() {
        let reg = registry(
            r#"
            [environments.prod]
            task_definition = "app-cli"
            cluster = "prod-cluster"
            launch_type = "EC2"
            region = "eu-central-1"
            security_group_tags = {}
            subnet_tags = {}
            "#,
        );
        let env = resolve_environment(&reg, "prod").unwrap();
        assert_eq!(env.launch_type, "EC2");
        assert_eq!(env.region, "eu-central-1");
    }

    #[test]
    fn test_empty_registry() {
        let err = resolve_environment(&Registry::default(), "default").unwrap_err();
        assert_eq!(err, ValidationError::EmptyRegistry);
    }

    #[test]
    fn test_unknown_environment_lists_known_names() {
        let reg = registry(
            r#"
            [environments.prod]
            [environments.staging]
            "#,
        );
        let err = resolve_environment(&reg, "dev").unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownEnvironment {
                name: "dev".to_string(),
                known: vec!["prod".to_string(), "staging".to_string()],
            }
        );
        let message = err.to_string();
        assert!(message.contains("dev"));
        assert!(message.contains("prod, staging"));
    }

    #[test]
    fn test_missing_required_attribute_names_the_field() {
        let reg = registry(
            r#"
            [environments.default]
            task_definition = "app-cli"
            cluster = "app-cluster"

            [environments.default.security_group_tags]
            Name = "app-tasks"
            "#,
        );
        let err = resolve_environment(&reg, "default").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingAttribute {
                environment: "default".to_string(),
                field: "subnet_tags",
            }
        );
        assert!(err.to_string().contains("subnet_tags"));
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn test_each_required_field_is_checked() {
        for (toml, field) in [
            ("[environments.e]\n", "task_definition"),
            ("[environments.e]\ntask_definition = \"t\"\n", "cluster"),
            (
                "[environments.e]\ntask_definition = \"t\"\ncluster = \"c\"\n",
                "security_group_tags",
            ),
            (
                "[environments.e]\ntask_definition = \"t\"\ncluster = \"c\"\nsecurity_group_tags = {}\n",
                "subnet_tags",
            ),
        ] {
            let err = resolve_environment(&registry(toml), "e").unwrap_err();
            assert_eq!(
                err,
                ValidationError::MissingAttribute {
                    environment: "e".to_string(),
                    field,
                },
                "for registry: {toml}"
            );
        }
    }
}
