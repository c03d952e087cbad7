//! Format validation for resolved configuration

use common::config::ConfigValidation;
use common::error::ConfigurationError;
use tracing::info;

use super::constants::*;
use super::types::StackConfig;

impl StackConfig {
    fn check_home_ip_address(&self) -> Result<(), ConfigurationError> {
        if CIDR_PATTERN.is_match(&self.home_ip_address) {
            Ok(())
        } else {
            Err(ConfigurationError::invalid_format(
                FIELD_HOME_IP_ADDRESS,
                &self.home_ip_address,
                EXPECTED_CIDR,
            ))
        }
    }

    fn check_account_id(&self) -> Result<(), ConfigurationError> {
        if ACCOUNT_ID_PATTERN.is_match(&self.account_id) {
            Ok(())
        } else {
            Err(ConfigurationError::invalid_format(
                FIELD_ACCOUNT_ID,
                &self.account_id,
                EXPECTED_ACCOUNT_ID,
            ))
        }
    }

    fn check_region(&self) -> Result<(), ConfigurationError> {
        if REGION_PATTERN.is_match(&self.region) {
            Ok(())
        } else {
            Err(ConfigurationError::invalid_format(FIELD_REGION, &self.region, EXPECTED_REGION))
        }
    }

    /// Every format failure, in check order
    pub fn validation_failures(&self) -> Vec<ConfigurationError> {
        [
            self.check_home_ip_address(),
            self.check_account_id(),
            self.check_region(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }

    /// Run every check instead of stopping at the first failure
    ///
    /// One failure comes back as its own `InvalidFormat`; several are
    /// wrapped in `ValidationFailed`.
    pub fn validate_all(&self) -> Result<(), ConfigurationError> {
        match ConfigurationError::from_failures(self.validation_failures()) {
            Some(err) => Err(err),
            None => {
                info!("Configuration validation passed");
                Ok(())
            }
        }
    }
}

impl ConfigValidation for StackConfig {
    type Error = ConfigurationError;

    fn validate(&self) -> Result<(), Self::Error> {
        self.check_home_ip_address()?;
        self.check_account_id()?;
        self.check_region()?;

        info!("Configuration validation passed");
        Ok(())
    }

    /// Range problems the format patterns let through; never logs
    fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        // Range checks only make sense once the shape is right
        if !CIDR_PATTERN.is_match(&self.home_ip_address) {
            return warnings;
        }

        let Some((address, prefix)) = self.home_ip_address.split_once('/') else {
            return warnings;
        };

        if address
            .split('.')
            .filter_map(|octet| octet.parse::<u16>().ok())
            .any(|octet| octet > 255)
        {
            warnings.push(format!(
                "homeIpAddress {} has an octet above 255 and is not a valid IPv4 address",
                self.home_ip_address
            ));
        }

        match prefix.parse::<u8>() {
            Ok(len) if len > 32 => warnings.push(format!(
                "homeIpAddress {} has a prefix length above 32",
                self.home_ip_address
            )),
            Ok(0) => warnings.push(format!(
                "homeIpAddress {} allows ingress from every IPv4 address",
                self.home_ip_address
            )),
            _ => {}
        }

        warnings
    }
}
