//! Application layer - use cases and services

pub mod quote_service;

pub use quote_service::{QuoteRequest, QuoteService, SwapQuote};
