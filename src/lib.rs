//! Swapfees - fee, limit and receive-amount calculator for cross-chain swaps
//!
//! The calculation core is pure and stateless: reference data in, numbers
//! out, no I/O and no failures. Missing reference data degrades to zero.

pub mod application;
pub mod domain;
pub mod shared;

// Re-export main types for convenience
pub use application::{QuoteRequest, QuoteService, SwapQuote};
pub use shared::config::{Settings, SettingsLoader};
pub use shared::types::{
    AssetStatus, AuthorizationFlow, Currency, Endpoint, EndpointAsset, EndpointType, RefuelAmount,
    SwapParameters,
};
