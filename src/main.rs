mod app;

use anyhow::Result;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Fee and limit calculator for cross-chain swaps")]
struct Args {
    /// Path to the reference-data settings file
    #[arg(long, default_value = "Settings.toml")]
    settings: String,

    /// Source endpoint internal name
    #[arg(long)]
    from: String,

    /// Destination endpoint internal name
    #[arg(long)]
    to: String,

    /// Asset symbol to swap
    #[arg(long)]
    asset: String,

    /// Amount to swap (in the selected asset)
    #[arg(long)]
    amount: Option<f64>,

    /// Top the destination up with native gas currency
    #[arg(long)]
    refuel: bool,

    /// JSON asset->balance map to clamp the maximum against
    #[arg(long)]
    balances: Option<String>,

    /// Connected wallet balance (in the selected asset)
    #[arg(long)]
    wallet_balance: Option<f64>,

    /// Gas estimate to reserve when spending the full wallet balance
    #[arg(long, default_value_t = 0.0)]
    gas: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let app_cfg = app::AppCfg {
        settings_path: args.settings,
        from: args.from,
        to: args.to,
        asset: args.asset,
        amount: args.amount,
        refuel: args.refuel,
        balances: args.balances,
        wallet_balance: args.wallet_balance,
        gas: args.gas,
    };

    app::run(app_cfg)
}
