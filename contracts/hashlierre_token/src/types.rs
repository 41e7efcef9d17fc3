use soroban_sdk::{contracterror, contracttype, Address, String};

// ============================================================================
// ERROS DO CONTRATO
// ============================================================================
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HashLierreError {
    AlreadyInitialized = 1,
    AccessDenied = 2,
    InvalidParameter = 3,
    ArithmeticOverflow = 4,

    // Ledger
    SupplyCapExceeded = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,

    // Staking
    StakeBelowMinimum = 8,
    InsufficientStake = 9,
    NoActiveStake = 10,
    StakeLocked = 11,
    StakingDisabled = 12,
    ClaimsDisabled = 13,
    EmergencyModeNotEnabled = 14,
    NoRewardToClaim = 15,
    RewardExceedsMaxSupply = 16,

    // Governança de APR
    AprExceedsMaximum = 17,
    AprChangeTooSoon = 18,

    // Airdrop
    AirdropNotInitialized = 19,
    InvalidProof = 20,
    AlreadyClaimed = 21,

    // Presale
    InvalidPaymentAsset = 22,
    InvalidTreasury = 23,
    MaxBelowMin = 24,
    PresaleNotConfigured = 25,
    PresaleInactive = 26,
    BelowMinimumPurchase = 27,
    AboveMaximumPurchase = 28,
    HardCapExceeded = 29,
    InsufficientTreasuryBalance = 30,
    PaymentFailed = 31,

    // Oráculo
    PriceFeedNotSet = 32,
    PriceFeedUnavailable = 33,
    InvalidPrice = 34,
    StalePrice = 35,
}

// ============================================================================
// METADADOS DO TOKEN
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

/// Allowance SEP-41: vale até `expiration_ledger` (inclusive).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ============================================================================
// STAKING
// ============================================================================

/// Posição de staking de um endereço.
///
/// `reward_debt` acumula a recompensa já liquidada (auto-compound) dentro da
/// posição atual e volta a zero junto com `initial_stake_time` quando o
/// principal zera.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakeRecord {
    pub amount: i128,
    pub reward_debt: i128,
    pub last_accrual_time: u64,
    pub initial_stake_time: u64,
}

impl StakeRecord {
    pub fn empty() -> Self {
        StakeRecord {
            amount: 0,
            reward_debt: 0,
            last_accrual_time: 0,
            initial_stake_time: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.amount > 0
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserStats {
    pub staked_amount: i128,
    pub pending_rewards: i128,
    pub compounded_rewards: i128,
    pub staking_duration: u64,
    pub estimated_yearly_reward: i128,
    pub can_unstake: bool,
    pub time_until_unstake: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContractConfig {
    pub current_apr: u32,
    pub max_supply: i128,
    pub min_stake_period: u64,
    pub min_stake_amount: i128,
    pub max_apr: u32,
    pub min_apr_change_interval: u64,
    pub last_apr_change: u64,
    pub is_staking_paused: bool,
    pub is_emergency_mode: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalStats {
    pub total_value_locked: i128,
    pub total_rewards: i128,
    pub current_total_supply: i128,
    pub current_apr: u32,
    pub current_apy: u32,
}

// ============================================================================
// PRESALE
// ============================================================================

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleConfig {
    pub payment_token: Address,
    pub treasury: Address,
    pub min_purchase: i128,
    pub max_purchase: i128,
    pub hard_cap_usd: i128,
}

/// tokens = usd * numerator / denominator
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleRate {
    pub numerator: i128,
    pub denominator: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleTotals {
    pub total_raised_usd: i128,
    pub total_sold: i128,
    pub native_total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleStats {
    pub is_active: bool,
    pub total_raised: i128,
    pub total_sold: i128,
    pub native_total_raised: i128,
    pub hard_cap: i128,
    pub remaining_cap: i128,
    pub rate_numerator: i128,
    pub rate_denominator: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresaleQuote {
    pub usd_value: i128,
    pub token_amount: i128,
}

// ============================================================================
// ORÁCULO
// ============================================================================

/// Resposta do price feed externo: `price` com `decimals` casas, atualizado
/// em `updated_at` (segundos do ledger).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceData {
    pub price: i128,
    pub decimals: u32,
    pub updated_at: u64,
}
