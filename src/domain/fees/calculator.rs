//! Swap fee and receive-amount calculations
//!
//! Pure functions over reference-data snapshots. Nothing here fails:
//! missing endpoint/asset/currency records yield `0.0` so the caller
//! always has a number to show.

use crate::domain::fees::limits::calculate_min_allowed_amount;
use crate::domain::fees::refuel::calculate_refuel_amount;
use crate::domain::settings::network_asset;
use crate::shared::types::{AuthorizationFlow, Currency, Endpoint, EndpointType, SwapParameters};
use crate::shared::utils::{round_decimals, usd_price_digits};

/// Withdrawal fee a centralized exchange charges for `asset`.
///
/// `0.0` when the endpoint is not an exchange or does not list the asset.
pub fn exchange_fee(asset: &str, endpoint: Option<&Endpoint>) -> f64 {
    let Some(endpoint) = endpoint else { return 0.0 };
    if !endpoint.is_exchange {
        return 0.0;
    }
    endpoint
        .assets
        .iter()
        .find(|a| a.asset == asset)
        .map(|a| a.withdrawal_fee)
        .unwrap_or(0.0)
}

/// Whether the deposit step can be skipped for this source.
///
/// Account-abstraction-capable chains can pull funds straight from the
/// user's address; so can any non-exchange source when the swap is sent
/// back to the same address. Addresses compare case-insensitively, and
/// two absent addresses count as equal.
pub fn can_sweepless_transfer(
    source: Option<&Endpoint>,
    source_address: Option<&str>,
    destination_address: Option<&str>,
) -> bool {
    let Some(source) = source else { return false };
    if source.is_exchange {
        return false;
    }
    if matches!(source.endpoint_type, EndpointType::Evm | EndpointType::Starknet) {
        return true;
    }
    source_address.map(str::to_lowercase) == destination_address.map(str::to_lowercase)
}

/// Total service fee for a swap, in the swapped asset.
///
/// Sum of both endpoints' base fees, the destination withdrawal fee and,
/// unless the transfer is sweepless, the source deposit fee. Raw value;
/// rounding happens at presentation call sites.
pub fn calculate_fee(params: &SwapParameters) -> f64 {
    let (Some(currency), Some(from), Some(to)) = (&params.currency, &params.from, &params.to)
    else {
        return 0.0;
    };

    let (Some(source_asset), Some(destination_asset)) = (
        network_asset(from, &currency.asset),
        network_asset(to, &currency.asset),
    ) else {
        return 0.0;
    };

    let base_fee = source_asset.source_base_fee + destination_asset.destination_base_fee;
    let withdrawal_fee = destination_asset.withdrawal_fee;
    let deposit_fee = if can_sweepless_transfer(params.from.as_ref(), None, None) {
        0.0
    } else {
        source_asset.deposit_fee
    };

    withdrawal_fee + deposit_fee + base_fee
}

/// Amount the user receives after fees and refuel, rounded to the
/// currency's display precision. `0.0` when no amount is entered or the
/// amount is below the allowed minimum.
pub fn calculate_receive_amount(params: &SwapParameters, currencies: &[Currency]) -> f64 {
    let amount = params.amount.unwrap_or(0.0);
    if amount == 0.0 || !amount.is_finite() {
        return 0.0;
    }

    let decimals = params
        .currency
        .as_ref()
        .map(|c| usd_price_digits(c.usd_price))
        .unwrap_or(0);
    let min_allowed_amount = calculate_min_allowed_amount(params, currencies, decimals);
    if amount < min_allowed_amount {
        return 0.0;
    }

    let fee = calculate_fee(params);
    let refuel = calculate_refuel_amount(params, currencies);
    let mut result = amount - fee - refuel.in_selected_currency;

    if let (Some(currency), Some(from)) = (&params.currency, &params.from) {
        if from.is_exchange && from.authorization_flow == Some(AuthorizationFlow::OAuth2) {
            result -= exchange_fee(&currency.asset, params.from.as_ref());
        }
    }

    let precision = params.currency.as_ref().map(|c| c.precision).unwrap_or(0);
    round_decimals(result, precision)
}

/// Minimum USD allowance to request when authorizing an OAuth exchange
/// withdrawal: the swap's USD value plus a 2% buffer, rounded up.
pub fn calculate_minimal_authorize_amount(usd_price: f64, amount: f64) -> f64 {
    ((usd_price * amount) + (usd_price * amount * 0.02)).ceil()
}
