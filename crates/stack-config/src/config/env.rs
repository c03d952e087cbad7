//! Environment sources
//!
//! The resolver never reads the process environment directly. It takes an
//! `EnvSource`, which lets tests hand in plain maps and lets the binary layer
//! a `.env` file underneath the real environment.

use common::error::ConfigurationError;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::path::Path;
use tracing::debug;

use super::types::ConfigDefaults;

pub const AWS_ACCOUNT_ID: &str = "AWS_ACCOUNT_ID";
pub const HOME_IP_ADDRESS: &str = "HOME_IP_ADDRESS";
pub const AWS_REGION: &str = "AWS_REGION";
pub const BEDROCK_MODEL_ID: &str = "BEDROCK_MODEL_ID";
pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const ENVIRONMENT: &str = "ENVIRONMENT";
pub const ECR_REPOSITORY_NAME: &str = "ECR_REPOSITORY_NAME";
pub const ECS_CLUSTER_NAME: &str = "ECS_CLUSTER_NAME";
pub const ECS_SERVICE_NAME: &str = "ECS_SERVICE_NAME";
pub const CLOUDTRAIL_MCP_FUNCTION_NAME: &str = "CLOUDTRAIL_MCP_FUNCTION_NAME";
pub const ALB_NAME: &str = "ALB_NAME";

/// Keys that must be present, in the order they are checked
pub const REQUIRED_VARS: [&str; 2] = [AWS_ACCOUNT_ID, HOME_IP_ADDRESS];

/// Every environment key the resolver consumes
pub const ENV_VARS: [&str; 11] = [
    AWS_ACCOUNT_ID,
    HOME_IP_ADDRESS,
    AWS_REGION,
    BEDROCK_MODEL_ID,
    PROJECT_NAME,
    ENVIRONMENT,
    ECR_REPOSITORY_NAME,
    ECS_CLUSTER_NAME,
    ECS_SERVICE_NAME,
    CLOUDTRAIL_MCP_FUNCTION_NAME,
    ALB_NAME,
];

/// Read-only key-value input to the resolver
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: BuildHasher> EnvSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

/// The real process environment
///
/// Values that are not valid unicode read as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A `.env` file layered underneath another source
///
/// Keys present in the base source win, matching dotenv semantics where a
/// file never overrides variables already set in the environment.
#[derive(Debug, Clone)]
pub struct DotenvEnv<B> {
    file_vars: HashMap<String, String>,
    base: B,
}

impl<B: EnvSource> DotenvEnv<B> {
    /// Parse `path` and layer `base` over it
    ///
    /// A missing file yields an empty layer; a malformed one is an error.
    pub fn load(path: &Path, base: B) -> Result<Self, ConfigurationError> {
        let mut file_vars = HashMap::new();

        if path.exists() {
            let iter = dotenvy::from_path_iter(path).map_err(|e| env_file_error(path, e))?;
            for item in iter {
                let (key, value) = item.map_err(|e| env_file_error(path, e))?;
                file_vars.insert(key, value);
            }
            debug!(
                "Loaded {} variables from env file {}",
                file_vars.len(),
                path.display()
            );
        } else {
            debug!("Env file {} not found, skipping", path.display());
        }

        Ok(Self { file_vars, base })
    }

    /// Number of variables read from the file
    pub fn file_var_count(&self) -> usize {
        self.file_vars.len()
    }
}

impl<B: EnvSource> EnvSource for DotenvEnv<B> {
    fn get(&self, key: &str) -> Option<String> {
        self.base
            .get(key)
            .or_else(|| self.file_vars.get(key).cloned())
    }
}

fn env_file_error(path: &Path, err: dotenvy::Error) -> ConfigurationError {
    ConfigurationError::EnvFile {
        path: path.display().to_string(),
        details: err.to_string(),
    }
}

/// Render a commented `.env` template
///
/// Required keys are left blank; optional keys are commented out with their
/// current default so uncommenting one is an explicit override.
pub fn sample_env(defaults: &ConfigDefaults) -> String {
    let names = &defaults.resource_names;
    let optional = [
        (AWS_REGION, defaults.region.as_str()),
        (BEDROCK_MODEL_ID, defaults.model_id.as_str()),
        (PROJECT_NAME, defaults.project_name.as_str()),
        (ENVIRONMENT, defaults.environment.as_str()),
        (ECR_REPOSITORY_NAME, names.ecr_repository.as_str()),
        (ECS_CLUSTER_NAME, names.ecs_cluster.as_str()),
        (ECS_SERVICE_NAME, names.ecs_service.as_str()),
        (CLOUDTRAIL_MCP_FUNCTION_NAME, names.cloudtrail_mcp_function.as_str()),
        (ALB_NAME, names.load_balancer.as_str()),
    ];

    let mut out = String::new();
    out.push_str("# Required\n");
    out.push_str("# 12-digit AWS account ID\n");
    out.push_str(&format!("{AWS_ACCOUNT_ID}=\n"));
    out.push_str("# CIDR allowed to reach the stack, e.g. 203.0.113.100/32\n");
    out.push_str(&format!("{HOME_IP_ADDRESS}=\n"));
    out.push_str("\n# Optional (defaults shown)\n");
    for (key, value) in optional {
        out.push_str(&format!("# {key}={value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_map_sources() {
        let mut hash = HashMap::new();
        hash.insert(AWS_REGION.to_string(), "eu-west-1".to_string());
        assert_eq!(
            EnvSource::get(&hash, AWS_REGION).as_deref(),
            Some("eu-west-1")
        );
        assert_eq!(EnvSource::get(&hash, ALB_NAME), None);

        let btree: BTreeMap<String, String> = hash.into_iter().collect();
        assert_eq!(
            EnvSource::get(&btree, AWS_REGION).as_deref(),
            Some("eu-west-1")
        );
    }

    #[test]
    fn test_dotenv_layer_reads_file() {
        let file = env_file("AWS_ACCOUNT_ID=123456789012\nHOME_IP_ADDRESS=\"203.0.113.100/32\"\n");
        let env = DotenvEnv::load(file.path(), BTreeMap::<String, String>::new()).unwrap();

        assert_eq!(env.file_var_count(), 2);
        assert_eq!(env.get(AWS_ACCOUNT_ID).as_deref(), Some("123456789012"));
        assert_eq!(
            env.get(HOME_IP_ADDRESS).as_deref(),
            Some("203.0.113.100/32")
        );
    }

    #[test]
    fn test_base_source_wins_over_file() {
        let file = env_file("AWS_REGION=eu-west-1\nPROJECT_NAME=from-file\n");
        let mut base = BTreeMap::new();
        base.insert(AWS_REGION.to_string(), "ap-northeast-1".to_string());

        let env = DotenvEnv::load(file.path(), base).unwrap();
        assert_eq!(env.get(AWS_REGION).as_deref(), Some("ap-northeast-1"));
        assert_eq!(env.get(PROJECT_NAME).as_deref(), Some("from-file"));
    }

    #[test]
    fn test_missing_env_file_is_empty_layer() {
        let base = BTreeMap::<String, String>::new();
        let env = DotenvEnv::load(Path::new("/non/existent/.env"), base).unwrap();
        assert_eq!(env.file_var_count(), 0);
        assert_eq!(env.get(AWS_ACCOUNT_ID), None);
    }

    #[test]
    fn test_malformed_env_file() {
        let file = env_file("AWS_ACCOUNT_ID='unterminated\n");
        let result = DotenvEnv::load(file.path(), BTreeMap::<String, String>::new());
        assert!(matches!(result, Err(ConfigurationError::EnvFile { .. })));
    }

    #[test]
    fn test_sample_env_lists_every_key() {
        let sample = sample_env(&ConfigDefaults::default());
        for key in ENV_VARS {
            assert!(sample.contains(key), "sample is missing {key}");
        }
        assert!(sample.contains("AWS_ACCOUNT_ID=\n"));
        assert!(sample.contains("# AWS_REGION=us-east-1\n"));
    }

    #[test]
    fn test_sample_env_round_trips_through_dotenv() {
        let file = env_file(&sample_env(&ConfigDefaults::default()));
        let env = DotenvEnv::load(file.path(), BTreeMap::<String, String>::new()).unwrap();

        // Only the blank required keys are live; optional keys are commented
        assert_eq!(env.file_var_count(), 2);
        assert_eq!(env.get(AWS_ACCOUNT_ID).as_deref(), Some(""));
    }
}
