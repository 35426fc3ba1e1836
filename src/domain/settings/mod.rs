//! Reference-data lookups and well-known endpoint names

pub mod known_names;
pub mod lookups;

pub use lookups::{currency_by_asset, default_asset, network_asset};
