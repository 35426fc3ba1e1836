//! Minimum and maximum allowed swap amounts

use std::collections::HashMap;

use crate::domain::fees::calculator::calculate_fee;
use crate::domain::fees::refuel::calculate_refuel_amount;
use crate::domain::settings::{default_asset, known_names, network_asset};
use crate::shared::types::{Currency, SwapParameters};
use crate::shared::utils::{round_decimals, upper_case_keys};

/// Smallest amount the service accepts for this swap.
///
/// Covers the full fee plus exchange surcharges and the refuel top-up,
/// inflated by a 1.2 safety margin against price movement between quote
/// and execution. Rounded to `decimals` places before return; callers
/// without a better choice can pass
/// [`usd_price_digits`](crate::shared::utils::usd_price_digits) of the
/// currency's USD price.
pub fn calculate_min_allowed_amount(
    params: &SwapParameters,
    currencies: &[Currency],
    decimals: u32,
) -> f64 {
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

    let mut min_amount = calculate_fee(params);

    if from.internal_name == known_names::COINBASE && from.is_exchange {
        min_amount += default_asset(from, &currency.asset)
            .map(|a| a.withdrawal_fee)
            .unwrap_or(0.0);
    }
    if to.is_exchange {
        if let Some(destination_listing) = default_asset(to, &currency.asset) {
            if destination_listing.min_deposit_amount > 0.0 {
                min_amount += destination_listing.min_deposit_amount;
            }
        }
    }

    let refuel = calculate_refuel_amount(params, currencies);
    min_amount += source_asset.source_base_fee
        + destination_asset.destination_base_fee
        + refuel.in_selected_currency;

    let result = round_decimals(min_amount * 1.2, decimals);
    if result.is_finite() {
        result
    } else {
        0.0
    }
}

/// Largest amount the service accepts for this swap.
///
/// Base ceiling is the destination's `max_withdrawal_amount`. A supplied
/// balances map (JSON, e.g. from a partner URL parameter) can lower the
/// ceiling to the user's balance; failing to parse it leaves the ceiling
/// untouched. Without a balances map, a wallet balance inside
/// `[min_allowed_amount, max]` is returned directly minus `gas`.
pub fn calculate_max_allowed_amount(
    params: &SwapParameters,
    balances: Option<&str>,
    wallet_balance: Option<f64>,
    gas: f64,
    min_allowed_amount: f64,
) -> f64 {
    let (Some(currency), Some(_from), Some(to)) = (&params.currency, &params.from, &params.to)
    else {
        return 0.0;
    };

    let mut max_amount = network_asset(to, &currency.asset)
        .map(|a| a.max_withdrawal_amount)
        .unwrap_or(0.0);

    match balances {
        Some(raw) if !raw.is_empty() => {
            if let Some(parsed) = parse_balances(raw) {
                if let Some(&balance) = parsed.get(&currency.asset.to_uppercase()) {
                    if balance > min_allowed_amount {
                        max_amount = max_amount.min(balance);
                    }
                }
            }
        }
        _ => {
            if let Some(balance) = wallet_balance {
                if balance != 0.0 && balance >= min_allowed_amount && balance <= max_amount {
                    return balance - gas;
                }
            }
        }
    }

    max_amount
}

/// Parse an externally supplied asset->balance JSON map.
///
/// Keys are uppercased to match asset symbols. `None` on any parse
/// failure; the caller falls back to the unclamped ceiling.
fn parse_balances(raw: &str) -> Option<HashMap<String, f64>> {
    serde_json::from_str::<HashMap<String, f64>>(raw)
        .ok()
        .map(upper_case_keys)
}
