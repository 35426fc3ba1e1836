//! Quote assembly service
//!
//! Resolves a symbolic quote request against the loaded reference data
//! and runs every fee calculation a swap form needs to render.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::fees::{
    calculate_fee, calculate_max_allowed_amount, calculate_min_allowed_amount,
    calculate_receive_amount, calculate_refuel_amount, exchange_fee,
};
use crate::domain::settings::{currency_by_asset, network_asset};
use crate::shared::config::Settings;
use crate::shared::errors::QuoteError;
use crate::shared::types::{RefuelAmount, SwapParameters};
use crate::shared::utils::{round_decimals, truncate_decimals, usd_price_digits};

/// A quote request in symbolic form, before reference-data resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub from: String,
    pub to: String,
    pub asset: String,
    pub amount: Option<f64>,
    #[serde(default)]
    pub refuel: bool,
    /// JSON asset->balance map, e.g. forwarded from a partner URL
    #[serde(default)]
    pub balances: Option<String>,
    #[serde(default)]
    pub wallet_balance: Option<f64>,
    #[serde(default)]
    pub gas: f64,
}

/// Everything the swap form displays for one request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapQuote {
    pub fee: f64,
    pub exchange_fee: f64,
    pub min_allowed_amount: f64,
    pub max_allowed_amount: f64,
    pub receive_amount: f64,
    pub refuel: RefuelAmount,
}

/// Builds display-ready quotes from reference data
pub struct QuoteService {
    settings: Settings,
}

impl QuoteService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Resolve a symbolic request into swap parameters.
    ///
    /// The calculations themselves tolerate missing data, but a CLI or
    /// API caller naming an endpoint or asset we do not know deserves an
    /// error instead of a silent zero quote.
    pub fn resolve(&self, request: &QuoteRequest) -> Result<SwapParameters, QuoteError> {
        let from = self
            .endpoint(&request.from)
            .ok_or_else(|| QuoteError::UnknownEndpoint(request.from.clone()))?;
        let to = self
            .endpoint(&request.to)
            .ok_or_else(|| QuoteError::UnknownEndpoint(request.to.clone()))?;
        let currency = currency_by_asset(&self.settings.currencies, &request.asset)
            .ok_or_else(|| QuoteError::UnknownAsset(request.asset.clone()))?;

        for endpoint in [&from, &to] {
            if network_asset(endpoint, &request.asset).is_none() {
                return Err(QuoteError::AssetNotListed {
                    asset: request.asset.clone(),
                    endpoint: endpoint.internal_name.clone(),
                });
            }
        }

        Ok(SwapParameters {
            currency: Some(currency.clone()),
            from: Some(from.clone()),
            to: Some(to.clone()),
            amount: request.amount,
            refuel: request.refuel,
        })
    }

    /// Compute the full quote for a request
    pub fn quote(&self, request: &QuoteRequest) -> Result<SwapQuote, QuoteError> {
        let params = self.resolve(request)?;
        let currencies = &self.settings.currencies;

        // precision and price both come from the resolved currency
        let Some(currency) = params.currency.as_ref() else {
            return Err(QuoteError::UnknownAsset(request.asset.clone()));
        };
        let precision = currency.precision;
        let min_decimals = usd_price_digits(currency.usd_price);

        let fee = calculate_fee(&params);
        let exchange_fee = round_decimals(
            exchange_fee(&currency.asset, params.from.as_ref()),
            precision,
        );
        let min_allowed_amount = calculate_min_allowed_amount(&params, currencies, min_decimals);
        let max_allowed_amount = calculate_max_allowed_amount(
            &params,
            request.balances.as_deref(),
            request.wallet_balance,
            request.gas,
            min_allowed_amount,
        );
        let receive_amount = calculate_receive_amount(&params, currencies);

        let mut refuel = calculate_refuel_amount(&params, currencies);
        let native_precision = params
            .to
            .as_ref()
            .and_then(|to| to.native_currency.as_deref())
            .and_then(|native| currency_by_asset(currencies, native))
            .map(|c| c.precision)
            .unwrap_or(precision);
        refuel.in_native_currency = truncate_decimals(refuel.in_native_currency, native_precision);

        debug!(
            fee,
            min_allowed_amount, max_allowed_amount, receive_amount, "quote computed"
        );

        Ok(SwapQuote {
            fee,
            exchange_fee,
            min_allowed_amount,
            max_allowed_amount,
            receive_amount,
            refuel,
        })
    }

    fn endpoint(&self, internal_name: &str) -> Option<crate::shared::types::Endpoint> {
        self.settings
            .endpoints
            .iter()
            .find(|e| e.internal_name == internal_name)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::{
        AssetStatus, Currency, Endpoint, EndpointAsset, EndpointType,
    };

    fn settings() -> Settings {
        let listing = |withdrawal_fee: f64, deposit_fee: f64| EndpointAsset {
            asset: "USDC".to_string(),
            precision: 6,
            source_base_fee: 0.0,
            destination_base_fee: 0.0,
            withdrawal_fee,
            deposit_fee,
            min_deposit_amount: 0.0,
            max_withdrawal_amount: 5000.0,
            is_refuel_enabled: true,
            status: AssetStatus::Active,
        };

        Settings {
            endpoints: vec![
                Endpoint {
                    internal_name: "ARBITRUM_MAINNET".to_string(),
                    is_exchange: false,
                    endpoint_type: EndpointType::Evm,
                    assets: vec![listing(0.0, 0.5)],
                    authorization_flow: None,
                    native_currency: Some("ETH".to_string()),
                    refuel_amount_in_usd: 1.0,
                },
                Endpoint {
                    internal_name: "OPTIMISM_MAINNET".to_string(),
                    is_exchange: false,
                    endpoint_type: EndpointType::Evm,
                    assets: vec![listing(3.0, 0.0)],
                    authorization_flow: None,
                    native_currency: Some("ETH".to_string()),
                    refuel_amount_in_usd: 1.0,
                },
            ],
            currencies: vec![
                Currency {
                    asset: "USDC".to_string(),
                    usd_price: 1.0,
                    precision: 2,
                },
                Currency {
                    asset: "ETH".to_string(),
                    usd_price: 2000.0,
                    precision: 8,
                },
            ],
        }
    }

    fn request(amount: Option<f64>) -> QuoteRequest {
        QuoteRequest {
            from: "ARBITRUM_MAINNET".to_string(),
            to: "OPTIMISM_MAINNET".to_string(),
            asset: "USDC".to_string(),
            amount,
            refuel: false,
            balances: None,
            wallet_balance: None,
            gas: 0.0,
        }
    }

    #[test]
    fn test_quote_happy_path() {
        let service = QuoteService::new(settings());
        let quote = service.quote(&request(Some(100.0))).unwrap();

        // EVM source is sweepless, deposit fee waived
        assert_eq!(quote.fee, 3.0);
        assert_eq!(quote.exchange_fee, 0.0);
        assert_eq!(quote.min_allowed_amount, 3.6);
        assert_eq!(quote.max_allowed_amount, 5000.0);
        assert_eq!(quote.receive_amount, 97.0);
        assert_eq!(quote.refuel, RefuelAmount::ZERO);
    }

    #[test]
    fn test_quote_with_refuel() {
        let service = QuoteService::new(settings());
        let mut req = request(Some(100.0));
        req.refuel = true;
        let quote = service.quote(&req).unwrap();

        // 1 USD of USDC off the receive amount, 1 USD of ETH topped up
        assert_eq!(quote.refuel.in_selected_currency, 1.0);
        assert_eq!(quote.refuel.in_native_currency, 0.0005);
        assert_eq!(quote.receive_amount, 96.0);
    }

    #[test]
    fn test_quote_unknown_endpoint() {
        let service = QuoteService::new(settings());
        let mut req = request(None);
        req.from = "BASE_MAINNET".to_string();
        assert!(matches!(
            service.quote(&req),
            Err(QuoteError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn test_quote_unknown_asset() {
        let service = QuoteService::new(settings());
        let mut req = request(None);
        req.asset = "IMX".to_string();
        assert!(matches!(service.quote(&req), Err(QuoteError::UnknownAsset(_))));
    }
}
