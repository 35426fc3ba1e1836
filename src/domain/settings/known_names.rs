//! Internal names of integrations with special-cased behavior

/// Coinbase withdrawals go through the exchange's own fee schedule,
/// so its default-asset withdrawal fee is folded into swap minimums.
pub const COINBASE: &str = "COINBASE";
