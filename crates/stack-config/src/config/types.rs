//! # Configuration Types
//!
//! The resolved deployment configuration and the defaults it is resolved
//! against.

use common::config::{load_with_options, LoadOptions};
use common::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::constants::*;

/// Names of the individually named stack resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceNames {
    /// ECR repository holding the Strands app image
    pub ecr_repository: String,

    /// ECS cluster running the Fargate service
    pub ecs_cluster: String,

    /// ECS service name
    pub ecs_service: String,

    /// Lambda function serving the CloudTrail MCP server
    pub cloudtrail_mcp_function: String,

    /// Application Load Balancer name
    pub load_balancer: String,
}

impl Default for ResourceNames {
    fn default() -> Self {
        Self {
            ecr_repository: DEFAULT_ECR_REPOSITORY_NAME.to_string(),
            ecs_cluster: DEFAULT_ECS_CLUSTER_NAME.to_string(),
            ecs_service: DEFAULT_ECS_SERVICE_NAME.to_string(),
            cloudtrail_mcp_function: DEFAULT_CLOUDTRAIL_MCP_FUNCTION_NAME.to_string(),
            load_balancer: DEFAULT_ALB_NAME.to_string(),
        }
    }
}

/// Values substituted for optional environment keys that are not set
///
/// Loadable from a TOML file so a team can pin project-wide defaults;
/// fields the file leaves out keep the compiled defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigDefaults {
    pub region: String,
    pub model_id: String,
    pub project_name: String,
    pub environment: String,
    pub resource_names: ResourceNames,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            resource_names: ResourceNames::default(),
        }
    }
}

impl ConfigDefaults {
    /// Load defaults, layering a TOML file over the compiled values
    ///
    /// A path that was given explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigurationError> {
        load_with_options(LoadOptions {
            config_path: path.map(Path::to_path_buf),
            require_file: path.is_some(),
        })
    }
}

/// Resolved deployment configuration
///
/// Only the resolver constructs this type and it exposes no setters, so a
/// record cannot change after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackConfig {
    pub(crate) region: String,
    pub(crate) account_id: String,
    pub(crate) home_ip_address: String,
    pub(crate) model_id: String,
    pub(crate) project_name: String,
    pub(crate) environment: String,
    pub(crate) resource_names: ResourceNames,
}

impl StackConfig {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// CIDR block allowed to reach the stack from the operator's network
    pub fn home_ip_address(&self) -> &str {
        &self.home_ip_address
    }

    /// Bedrock model used by the Strands agent
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn resource_names(&self) -> &ResourceNames {
        &self.resource_names
    }
}
