//! Validation patterns and default values for deployment configuration
//!
//! The patterns mirror the checks the stack definitions have always applied.
//! Character classes are spelled `[0-9]` because `\d` in the `regex` crate
//! also matches non-ASCII digits.

use once_cell::sync::Lazy;
use regex::Regex;

/// IPv4 CIDR block, e.g. "203.0.113.100/32"
///
/// Octets and prefix length are only checked for digit count, not range:
/// "999.1.1.1/32" matches. Out-of-range values surface as warnings.
pub static CIDR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,3}\.){3}[0-9]{1,3}/[0-9]{1,2}$").expect("Invalid CIDR regex pattern")
});

/// AWS account ID: exactly 12 ASCII digits
pub static ACCOUNT_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{12}$").expect("Invalid account ID regex pattern"));

/// AWS region name, e.g. "us-east-1" or "ap-northeast-1"
pub static REGION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]{2}-[a-z]+-[0-9]$").expect("Invalid region regex pattern"));

/// Field names reported in format errors
pub const FIELD_HOME_IP_ADDRESS: &str = "homeIpAddress";
pub const FIELD_ACCOUNT_ID: &str = "accountId";
pub const FIELD_REGION: &str = "region";

/// Human-readable expected formats reported in format errors
pub const EXPECTED_CIDR: &str = "x.x.x.x/xx";
pub const EXPECTED_ACCOUNT_ID: &str = "12 digits";
pub const EXPECTED_REGION: &str = "<2 lowercase letters>-<word>-<digit>, e.g. us-east-1";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-5-sonnet-20241022-v2:0";
pub const DEFAULT_PROJECT_NAME: &str = "cloudtrail-behavior-prediction";
pub const DEFAULT_ENVIRONMENT: &str = "dev";
pub const DEFAULT_ECR_REPOSITORY_NAME: &str = "strands-app";
pub const DEFAULT_ECS_CLUSTER_NAME: &str = "strands-cluster";
pub const DEFAULT_ECS_SERVICE_NAME: &str = "strands-service";
pub const DEFAULT_CLOUDTRAIL_MCP_FUNCTION_NAME: &str = "cloudtrail-mcp-server";
pub const DEFAULT_ALB_NAME: &str = "strands-alb";

/// Value of the `ManagedBy` tag applied to every resource
pub const MANAGED_BY: &str = "CDK";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_pattern() {
        assert!(CIDR_PATTERN.is_match("203.0.113.100/32"));
        assert!(CIDR_PATTERN.is_match("10.0.0.0/8"));
        assert!(CIDR_PATTERN.is_match("999.1.1.1/32"));
        assert!(!CIDR_PATTERN.is_match("203.0.113.100"));
        assert!(!CIDR_PATTERN.is_match("203.0.113/24"));
        assert!(!CIDR_PATTERN.is_match("203.0.113.100/128"));
        assert!(!CIDR_PATTERN.is_match(" 203.0.113.100/32"));
    }

    #[test]
    fn test_account_id_pattern_is_ascii_only() {
        assert!(ACCOUNT_ID_PATTERN.is_match("123456789012"));
        assert!(!ACCOUNT_ID_PATTERN.is_match("1234567890123"));
        // Arabic-Indic digits are Unicode \d but not ASCII
        assert!(!ACCOUNT_ID_PATTERN.is_match("١٢٣٤٥٦٧٨٩٠١٢"));
    }

    #[test]
    fn test_region_pattern() {
        assert!(REGION_PATTERN.is_match("us-east-1"));
        assert!(REGION_PATTERN.is_match("ap-northeast-1"));
        assert!(!REGION_PATTERN.is_match("us-gov-west-1"));
        assert!(!REGION_PATTERN.is_match("eu-west-10"));
    }

    #[test]
    fn test_default_region_is_valid() {
        assert!(REGION_PATTERN.is_match(DEFAULT_REGION));
    }
}
