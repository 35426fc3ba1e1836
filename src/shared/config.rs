use crate::shared::errors::SettingsError;
use crate::shared::types::{Currency, Endpoint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reference-data snapshot: every endpoint and currency the service knows about
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
    #[serde(default)]
    pub currencies: Vec<Currency>,
}

/// Reference-data loader
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Settings, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SettingsError::ReadFailed {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse settings from a TOML string
    pub fn parse(content: &str) -> Result<Settings, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::{AssetStatus, EndpointType};

    #[test]
    fn test_parse_settings() {
        let content = r#"
            [[endpoints]]
            internal_name = "ARBITRUM_MAINNET"
            is_exchange = false
            endpoint_type = "evm"
            native_currency = "ETH"
            refuel_amount_in_usd = 1.0

            [[endpoints.assets]]
            asset = "USDC"
            precision = 6
            source_base_fee = 0.2
            destination_base_fee = 0.2
            withdrawal_fee = 1.4
            deposit_fee = 0.5
            max_withdrawal_amount = 5000.0
            is_refuel_enabled = true
            status = "active"

            [[currencies]]
            asset = "USDC"
            usd_price = 1.0
            precision = 6
        "#;

        let settings = SettingsLoader::parse(content).unwrap();
        assert_eq!(settings.endpoints.len(), 1);
        assert_eq!(settings.currencies.len(), 1);

        let endpoint = &settings.endpoints[0];
        assert_eq!(endpoint.endpoint_type, EndpointType::Evm);
        assert_eq!(endpoint.assets[0].status, AssetStatus::Active);
        assert_eq!(endpoint.assets[0].withdrawal_fee, 1.4);
        assert_eq!(endpoint.authorization_flow, None);
    }

    #[test]
    fn test_parse_invalid_settings() {
        assert!(SettingsLoader::parse("endpoints = 42").is_err());
    }
}
