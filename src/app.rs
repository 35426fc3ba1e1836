// src/app.rs
use anyhow::Result;
use tracing::info;

use swapfees::application::{QuoteRequest, QuoteService};
use swapfees::shared::config::SettingsLoader;

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub settings_path: String,
    pub from: String,
    pub to: String,
    pub asset: String,
    pub amount: Option<f64>,
    pub refuel: bool,
    pub balances: Option<String>,
    pub wallet_balance: Option<f64>,
    pub gas: f64,
}

pub fn run(cfg: AppCfg) -> Result<()> {
    let settings = SettingsLoader::load(&cfg.settings_path)?;
    info!(
        "Loaded {} endpoints and {} currencies from {}",
        settings.endpoints.len(),
        settings.currencies.len(),
        cfg.settings_path
    );

    let service = QuoteService::new(settings);
    let request = QuoteRequest {
        from: cfg.from,
        to: cfg.to,
        asset: cfg.asset.clone(),
        amount: cfg.amount,
        refuel: cfg.refuel,
        balances: cfg.balances,
        wallet_balance: cfg.wallet_balance,
        gas: cfg.gas,
    };

    let quote = service.quote(&request)?;

    info!("Fee: {} {}", quote.fee, cfg.asset);
    if quote.exchange_fee > 0.0 {
        info!("Exchange fee: {} {}", quote.exchange_fee, cfg.asset);
    }
    info!(
        "Allowed amount: {} - {} {}",
        quote.min_allowed_amount, quote.max_allowed_amount, cfg.asset
    );
    if quote.refuel.in_selected_currency > 0.0 {
        info!(
            "Refuel: {} {} ({} native)",
            quote.refuel.in_selected_currency, cfg.asset, quote.refuel.in_native_currency
        );
    }
    match cfg.amount {
        Some(amount) => info!(
            "Sending {} {}, receiving {} {}",
            amount, cfg.asset, quote.receive_amount, cfg.asset
        ),
        None => info!("No amount entered, receive amount not computed"),
    }

    Ok(())
}
