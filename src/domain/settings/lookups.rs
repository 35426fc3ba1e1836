//! Typed lookups over reference data
//!
//! Every lookup returns an `Option`; callers treat the absent case as
//! "no fee known" and degrade to zero-valued results.

use crate::shared::types::{Currency, Endpoint, EndpointAsset};

/// Fee schedule for `asset` on `endpoint`, if the endpoint lists it
pub fn network_asset<'a>(endpoint: &'a Endpoint, asset: &str) -> Option<&'a EndpointAsset> {
    endpoint.assets.iter().find(|a| a.asset == asset)
}

/// Default listing of `asset` on an exchange endpoint.
///
/// Exchanges may list the same asset on several networks; the first
/// listing carries the exchange-level withdrawal fee and deposit minimum.
pub fn default_asset<'a>(endpoint: &'a Endpoint, asset: &str) -> Option<&'a EndpointAsset> {
    endpoint.assets.iter().find(|a| a.asset == asset)
}

/// Global currency record for `asset`
pub fn currency_by_asset<'a>(currencies: &'a [Currency], asset: &str) -> Option<&'a Currency> {
    currencies.iter().find(|c| c.asset == asset)
}
