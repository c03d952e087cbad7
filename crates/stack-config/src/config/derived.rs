//! Values derived from a resolved configuration
//!
//! Stack definitions need ARNs, image URIs and tags built from the same few
//! fields. Deriving them here keeps every stack spelling them identically.

use serde::Serialize;
use std::collections::BTreeMap;

use super::constants::MANAGED_BY;
use super::types::StackConfig;

/// Account and region every stack is deployed into
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentTarget {
    pub account: String,
    pub region: String,
}

/// Everything derived from a `StackConfig`, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedValues {
    pub bedrock_model_arn: String,
    pub ecr_image_uri: String,
    pub lambda_function_arn: String,
    pub home_ip_ingress: String,
    pub deployment_target: DeploymentTarget,
    pub tags: BTreeMap<String, String>,
}

impl StackConfig {
    pub fn deployment_target(&self) -> DeploymentTarget {
        DeploymentTarget {
            account: self.account_id.clone(),
            region: self.region.clone(),
        }
    }

    /// Tags applied to every resource in the app
    pub fn default_tags(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Project".to_string(), self.project_name.clone()),
            ("Environment".to_string(), self.environment.clone()),
            ("ManagedBy".to_string(), MANAGED_BY.to_string()),
        ])
    }

    /// Foundation model ARN granted to the agent's task role
    pub fn bedrock_model_arn(&self) -> String {
        format!(
            "arn:aws:bedrock:{}::foundation-model/{}",
            self.region, self.model_id
        )
    }

    pub fn ecr_image_uri(&self, tag: &str) -> String {
        format!(
            "{}.dkr.ecr.{}.amazonaws.com/{}:{}",
            self.account_id, self.region, self.resource_names.ecr_repository, tag
        )
    }

    pub fn lambda_function_arn(&self) -> String {
        format!(
            "arn:aws:lambda:{}:{}:function:{}",
            self.region, self.account_id, self.resource_names.cloudtrail_mcp_function
        )
    }

    /// Source CIDR for the load balancer's ingress rule
    pub fn home_ip_ingress(&self) -> &str {
        &self.home_ip_address
    }

    pub fn derived(&self) -> DerivedValues {
        DerivedValues {
            bedrock_model_arn: self.bedrock_model_arn(),
            ecr_image_uri: self.ecr_image_uri("latest"),
            lambda_function_arn: self.lambda_function_arn(),
            home_ip_ingress: self.home_ip_ingress().to_string(),
            deployment_target: self.deployment_target(),
            tags: self.default_tags(),
        }
    }
}
