//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Kind of chain (or exchange) an endpoint runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointType {
    Evm,
    Starknet,
    Solana,
    Cosmos,
    Exchange,
}

/// How a centralized exchange authorizes withdrawals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationFlow {
    OAuth2,
    ApiCredentials,
    None,
}

/// Liquidity status of an asset on an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Active,
    InsufficientLiquidity,
    Inactive,
}

/// A swappable network or exchange, together with the assets it lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub internal_name: String,
    pub is_exchange: bool,
    pub endpoint_type: EndpointType,
    pub assets: Vec<EndpointAsset>,
    #[serde(default)]
    pub authorization_flow: Option<AuthorizationFlow>,
    /// Asset used to pay gas on this endpoint
    #[serde(default)]
    pub native_currency: Option<String>,
    /// USD worth of native currency topped up when refuel is requested
    #[serde(default)]
    pub refuel_amount_in_usd: f64,
}

/// Per-endpoint fee schedule and limits for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointAsset {
    pub asset: String,
    pub precision: u32,
    #[serde(default)]
    pub source_base_fee: f64,
    #[serde(default)]
    pub destination_base_fee: f64,
    #[serde(default)]
    pub withdrawal_fee: f64,
    #[serde(default)]
    pub deposit_fee: f64,
    #[serde(default)]
    pub min_deposit_amount: f64,
    #[serde(default)]
    pub max_withdrawal_amount: f64,
    #[serde(default)]
    pub is_refuel_enabled: bool,
    pub status: AssetStatus,
}

/// Global asset record with the current USD price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub asset: String,
    pub usd_price: f64,
    /// Decimal places used when displaying amounts of this asset
    pub precision: u32,
}

/// A swap request as entered in the form; any field may still be unset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwapParameters {
    pub currency: Option<Currency>,
    pub from: Option<Endpoint>,
    pub to: Option<Endpoint>,
    pub amount: Option<f64>,
    #[serde(default)]
    pub refuel: bool,
}

/// Refuel top-up expressed in the swapped asset and in the destination's gas asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RefuelAmount {
    pub in_selected_currency: f64,
    pub in_native_currency: f64,
}

impl RefuelAmount {
    pub const ZERO: RefuelAmount = RefuelAmount {
        in_selected_currency: 0.0,
        in_native_currency: 0.0,
    };
}
