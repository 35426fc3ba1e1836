//! Domain layer - core business logic and entities

pub mod fees;
pub mod settings;
