#![no_std]

mod admin;
mod airdrop;
mod events;
mod governor;
mod ledger;
mod oracle;
mod payments;
mod presale;
mod staking;
mod storage;
mod token;
mod types;
mod validation;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use oracle::{PriceFeed, PriceFeedClient};
pub use storage::{
    DECIMALS, MAX_APR, MAX_SUPPLY, MIN_APR_CHANGE_INTERVAL, MIN_STAKE_AMOUNT, MIN_STAKE_PERIOD,
    PRICE_FRESHNESS_WINDOW, SECONDS_PER_YEAR,
};
pub use token::{HashLierreToken, HashLierreTokenClient};
pub use types::*;
