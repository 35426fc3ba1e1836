//! Error handling for the application
//!
//! The fee calculations themselves never fail; missing reference data
//! degrades to zero-valued results. These errors cover the layers around
//! the core: loading reference data and resolving CLI input against it.

use thiserror::Error;

/// Settings-file related errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

/// Quote-request resolution errors
#[derive(Error, Debug, Clone)]
pub enum QuoteError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Unknown asset: {0}")]
    UnknownAsset(String),

    #[error("Asset {asset} is not available on {endpoint}")]
    AssetNotListed { asset: String, endpoint: String },
}
