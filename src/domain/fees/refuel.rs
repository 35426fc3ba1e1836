//! Refuel amount calculation
//!
//! Refuel tops the destination account up with a fixed USD worth of the
//! destination chain's native asset so the user can pay for follow-up
//! transactions. Exchanges never refuel.

use crate::domain::settings::{currency_by_asset, network_asset};
use crate::shared::types::{Currency, RefuelAmount, SwapParameters};

/// Refuel top-up for a swap, in the swapped asset and in the native one.
///
/// Zero unless the toggle is on, the destination is a chain with a
/// positive USD refuel budget, the asset has refuel enabled there, and
/// both the selected and the native currency have a known positive price.
pub fn calculate_refuel_amount(params: &SwapParameters, currencies: &[Currency]) -> RefuelAmount {
    let (Some(currency), Some(to)) = (&params.currency, &params.to) else {
        return RefuelAmount::ZERO;
    };
    if !params.refuel {
        return RefuelAmount::ZERO;
    }

    let Some(destination_asset) = network_asset(to, &currency.asset) else {
        return RefuelAmount::ZERO;
    };
    let Some(native_currency) = to
        .native_currency
        .as_deref()
        .and_then(|native| currency_by_asset(currencies, native))
    else {
        return RefuelAmount::ZERO;
    };

    if to.is_exchange
        || !destination_asset.is_refuel_enabled
        || to.refuel_amount_in_usd <= 0.0
        || currency.usd_price <= 0.0
        || native_currency.usd_price <= 0.0
    {
        return RefuelAmount::ZERO;
    }

    RefuelAmount {
        in_selected_currency: to.refuel_amount_in_usd / currency.usd_price,
        in_native_currency: to.refuel_amount_in_usd / native_currency.usd_price,
    }
}
