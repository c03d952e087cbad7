//! Configuration resolver
//!
//! Turns an environment mapping into a `StackConfig`. Required keys must be
//! present and non-empty; every optional key falls back to the resolver's
//! `ConfigDefaults`. Resolution reads nothing but the given source, so the
//! same mapping always resolves to the same record.

use common::config::ConfigValidation;
use common::error::ConfigurationError;
use tracing::{debug, warn};

use super::env::*;
use super::types::{ConfigDefaults, ResourceNames, StackConfig};

/// Resolves deployment configuration against a fixed set of defaults
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    defaults: ConfigDefaults,
}

impl ConfigResolver {
    pub fn new(defaults: ConfigDefaults) -> Self {
        Self { defaults }
    }

    /// Build a configuration record from `env`
    ///
    /// Required keys are looked up first, in `REQUIRED_VARS` order, so the
    /// `MissingConfiguration` error names the first one absent. Values are
    /// taken verbatim; format checks happen in `validate`.
    pub fn resolve<E>(&self, env: &E) -> Result<StackConfig, ConfigurationError>
    where
        E: EnvSource + ?Sized,
    {
        let account_id = required(env, AWS_ACCOUNT_ID)?;
        let home_ip_address = required(env, HOME_IP_ADDRESS)?;

        let defaults = &self.defaults;
        let names = &defaults.resource_names;

        let config = StackConfig {
            region: optional(env, AWS_REGION, &defaults.region),
            account_id,
            home_ip_address,
            model_id: optional(env, BEDROCK_MODEL_ID, &defaults.model_id),
            project_name: optional(env, PROJECT_NAME, &defaults.project_name),
            environment: optional(env, ENVIRONMENT, &defaults.environment),
            resource_names: ResourceNames {
                ecr_repository: optional(env, ECR_REPOSITORY_NAME, &names.ecr_repository),
                ecs_cluster: optional(env, ECS_CLUSTER_NAME, &names.ecs_cluster),
                ecs_service: optional(env, ECS_SERVICE_NAME, &names.ecs_service),
                cloudtrail_mcp_function: optional(
                    env,
                    CLOUDTRAIL_MCP_FUNCTION_NAME,
                    &names.cloudtrail_mcp_function,
                ),
                load_balancer: optional(env, ALB_NAME, &names.load_balancer),
            },
        };

        debug!(
            account_id = %config.account_id,
            region = %config.region,
            environment = %config.environment,
            "Resolved stack configuration"
        );

        Ok(config)
    }

    /// Resolve, then validate with the first-failure semantics of `validate`
    ///
    /// Non-fatal warnings are logged.
    pub fn resolve_and_validate<E>(&self, env: &E) -> Result<StackConfig, ConfigurationError>
    where
        E: EnvSource + ?Sized,
    {
        let config = self.resolve(env)?;
        config.validate()?;

        for warning in config.warnings() {
            warn!("{}", warning);
        }

        Ok(config)
    }
}

/// Present and non-empty
fn lookup<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.get(key).filter(|value| !value.is_empty())
}

fn required<E: EnvSource + ?Sized>(env: &E, key: &str) -> Result<String, ConfigurationError> {
    lookup(env, key).ok_or_else(|| ConfigurationError::missing(key))
}

fn optional<E: EnvSource + ?Sized>(env: &E, key: &str, default: &str) -> String {
    lookup(env, key).unwrap_or_else(|| {
        debug!(key, default, "Using default value");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn minimal_env() -> HashMap<String, String> {
        env(&[
            (AWS_ACCOUNT_ID, "123456789012"),
            (HOME_IP_ADDRESS, "203.0.113.100/32"),
        ])
    }

    #[test]
    fn test_missing_account_id() {
        let vars = env(&[(HOME_IP_ADDRESS, "203.0.113.100/32")]);
        let result = ConfigResolver::default().resolve(&vars);
        assert_eq!(result, Err(ConfigurationError::missing(AWS_ACCOUNT_ID)));
    }

    #[test]
    fn test_missing_home_ip_address() {
        let vars = env(&[(AWS_ACCOUNT_ID, "123456789012")]);
        let result = ConfigResolver::default().resolve(&vars);
        assert_eq!(result, Err(ConfigurationError::missing(HOME_IP_ADDRESS)));
    }

    #[test]
    fn test_account_id_reported_first_when_both_missing() {
        let result = ConfigResolver::default().resolve(&HashMap::<String, String>::new());
        assert_eq!(result, Err(ConfigurationError::missing(AWS_ACCOUNT_ID)));
    }

    #[test]
    fn test_empty_required_value_is_missing() {
        let vars = env(&[
            (AWS_ACCOUNT_ID, ""),
            (HOME_IP_ADDRESS, "203.0.113.100/32"),
        ]);
        let result = ConfigResolver::default().resolve(&vars);
        assert_eq!(result, Err(ConfigurationError::missing(AWS_ACCOUNT_ID)));
    }

    #[test]
    fn test_defaults_applied() {
        let config = ConfigResolver::default().resolve(&minimal_env()).unwrap();
        let defaults = ConfigDefaults::default();

        assert_eq!(config.account_id(), "123456789012");
        assert_eq!(config.home_ip_address(), "203.0.113.100/32");
        assert_eq!(config.region(), defaults.region);
        assert_eq!(config.model_id(), defaults.model_id);
        assert_eq!(config.project_name(), defaults.project_name);
        assert_eq!(config.environment(), defaults.environment);
        assert_eq!(config.resource_names(), &defaults.resource_names);
    }

    #[test]
    fn test_empty_optional_value_takes_default() {
        let mut vars = minimal_env();
        vars.insert(AWS_REGION.to_string(), String::new());

        let config = ConfigResolver::default().resolve(&vars).unwrap();
        assert_eq!(config.region(), "us-east-1");
    }

    #[test]
    fn test_custom_defaults() {
        let defaults = ConfigDefaults {
            region: "ap-northeast-1".to_string(),
            ..Default::default()
        };
        let config = ConfigResolver::new(defaults)
            .resolve(&minimal_env())
            .unwrap();
        assert_eq!(config.region(), "ap-northeast-1");
    }

    #[test]
    fn test_values_are_not_validated_during_resolve() {
        let vars = env(&[(AWS_ACCOUNT_ID, "12345"), (HOME_IP_ADDRESS, "nope")]);
        let config = ConfigResolver::default().resolve(&vars).unwrap();
        assert_eq!(config.account_id(), "12345");
    }

    #[test]
    fn test_resolve_and_validate_short_circuits() {
        let vars = env(&[(AWS_ACCOUNT_ID, "12345"), (HOME_IP_ADDRESS, "nope")]);

        match ConfigResolver::default().resolve_and_validate(&vars) {
            Err(ConfigurationError::InvalidFormat { field, .. }) => {
                assert_eq!(field, "homeIpAddress")
            }
            other => panic!("Expected InvalidFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_and_validate_accepts_loose_octets() {
        let vars = env(&[
            (AWS_ACCOUNT_ID, "123456789012"),
            (HOME_IP_ADDRESS, "999.1.1.1/32"),
        ]);
        let config = ConfigResolver::default()
            .resolve_and_validate(&vars)
            .unwrap();

        assert_eq!(config.home_ip_address(), "999.1.1.1/32");
        assert_eq!(config.warnings().len(), 1);
    }
}
