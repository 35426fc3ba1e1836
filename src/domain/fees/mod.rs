//! Fee, refuel and amount-limit calculations

pub mod calculator;
pub mod limits;
pub mod refuel;

pub use calculator::{
    calculate_fee, calculate_minimal_authorize_amount, calculate_receive_amount,
    can_sweepless_transfer, exchange_fee,
};
pub use limits::{calculate_max_allowed_amount, calculate_min_allowed_amount};
pub use refuel::calculate_refuel_amount;
