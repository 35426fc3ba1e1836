//! Utility functions and helpers

use std::collections::HashMap;

/// Round to `decimals` places, half away from zero
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Truncate to `decimals` places, toward zero
pub fn truncate_decimals(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).trunc() / factor
}

/// Number of digits of the USD price rounded to an integer.
///
/// Legacy precision heuristic carried over from the upstream service:
/// higher-priced assets get more decimal places on derived minimums
/// (e.g. a price of 1800 yields 4). Callers that know the real display
/// precision should pass that instead.
pub fn usd_price_digits(usd_price: f64) -> u32 {
    format!("{:.0}", usd_price).len() as u32
}

/// Uppercase all keys of a map, keeping the values
pub fn upper_case_keys<V>(map: HashMap<String, V>) -> HashMap<String, V> {
    map.into_iter()
        .map(|(k, v)| (k.to_uppercase(), v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_decimals() {
        assert_eq!(round_decimals(97.004, 2), 97.0);
        assert_eq!(round_decimals(97.0061, 2), 97.01);
        assert_eq!(round_decimals(1.2344, 3), 1.234);
        assert_eq!(round_decimals(1.2346, 3), 1.235);
        assert_eq!(round_decimals(5.0, 0), 5.0);
    }

    #[test]
    fn test_truncate_decimals() {
        assert_eq!(truncate_decimals(97.009, 2), 97.0);
        assert_eq!(truncate_decimals(1.9999, 3), 1.999);
        assert_eq!(truncate_decimals(0.5, 0), 0.0);
    }

    #[test]
    fn test_usd_price_digits() {
        assert_eq!(usd_price_digits(0.99), 1);
        assert_eq!(usd_price_digits(1.0), 1);
        assert_eq!(usd_price_digits(27.3), 2);
        assert_eq!(usd_price_digits(1800.0), 4);
    }

    #[test]
    fn test_upper_case_keys() {
        let mut map = HashMap::new();
        map.insert("usdc".to_string(), 12.0);
        map.insert("Eth".to_string(), 0.5);

        let upper = upper_case_keys(map);
        assert_eq!(upper.get("USDC"), Some(&12.0));
        assert_eq!(upper.get("ETH"), Some(&0.5));
        assert_eq!(upper.len(), 2);
    }
}
