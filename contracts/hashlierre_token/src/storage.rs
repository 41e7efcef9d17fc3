use soroban_sdk::{symbol_short, Address, BytesN, Env, IntoVal, Val};
use crate::types::{
    AllowanceValue, PresaleConfig, PresaleRate, PresaleTotals, StakeRecord, TokenMetadata,
};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Casas decimais do HLR
pub const DECIMALS: u32 = 8;

/// Supply máximo: 120 milhões HLR com 8 decimais
pub const MAX_SUPPLY: i128 = 12_000_000_000_000_000; // 120M × 10^8

/// Stake mínimo: 100 HLR
pub const MIN_STAKE_AMOUNT: i128 = 10_000_000_000; // 100 × 10^8

/// Lock mínimo de uma posição (14 dias)
pub const MIN_STAKE_PERIOD: u64 = 14 * 24 * 60 * 60;

/// APR máximo e inicial, em basis points (12%)
pub const MAX_APR: u32 = 1200;
pub const DEFAULT_APR: u32 = 1200;

/// Intervalo mínimo entre mudanças de APR (365 dias)
pub const MIN_APR_CHANGE_INTERVAL: u64 = 365 * 24 * 60 * 60;

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Taxa padrão do presale: 4000/3 HLR (base units) por unidade base de USD,
/// ou seja 0,075 USD por HLR
pub const DEFAULT_RATE_NUMERATOR: i128 = 4000;
pub const DEFAULT_RATE_DENOMINATOR: i128 = 3;

/// Decimais do ativo estável (USDC) e do ativo nativo (XLM em stroops)
pub const USD_DECIMALS: u32 = 6;
pub const NATIVE_DECIMALS: u32 = 7;

/// Janela máxima de idade de um preço do oráculo (1 hora)
pub const PRICE_FRESHNESS_WINDOW: u64 = 3600;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL de storage crítico (admin, supply, APR, presale, flags)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

fn bump_persistent<K: IntoVal<Env, Val>>(env: &Env, key: &K) {
    if env.storage().persistent().has(key) {
        env.storage().persistent().extend_ttl(
            key,
            CRITICAL_STORAGE_THRESHOLD,
            CRITICAL_STORAGE_TTL,
        );
    }
}

/// Faz bump do TTL de balance de um endereço
pub fn bump_balance(env: &Env, addr: &Address) {
    bump_persistent(env, &(symbol_short!("balance"), addr));
}

/// Faz bump do TTL da posição de staking de um endereço
pub fn bump_stake(env: &Env, addr: &Address) {
    bump_persistent(env, &(symbol_short!("stake"), addr));
}

pub fn bump_contribution(env: &Env, addr: &Address) {
    bump_persistent(env, &(symbol_short!("contrib"), addr));
}

pub fn bump_claimed(env: &Env, addr: &Address) {
    bump_persistent(env, &(symbol_short!("claimed"), addr));
}

// ============================================================================
// ADMIN
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("admin"))
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("admin"))
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&symbol_short!("admin"), admin);
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&symbol_short!("metadata"))
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}

// ============================================================================
// SUPPLY E TOTAIS GLOBAIS
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

pub fn get_total_staked(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("t_staked"))
        .unwrap_or(0)
}

pub fn set_total_staked(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("t_staked"), &amount);
}

pub fn get_total_rewards(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("t_rewards"))
        .unwrap_or(0)
}

pub fn set_total_rewards(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("t_rewards"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
    bump_balance(env, addr);
}

// ============================================================================
// ALLOWANCE (temporary storage, expira junto com o allowance)
// ============================================================================

pub fn get_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = (symbol_short!("allow"), from, spender);
    match env.storage().temporary().get::<_, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= env.ledger().sequence() => allowance,
        _ => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn set_allowance(env: &Env, from: &Address, spender: &Address, allowance: &AllowanceValue) {
    let key = (symbol_short!("allow"), from, spender);
    env.storage().temporary().set(&key, allowance);

    if allowance.amount > 0 {
        let live_for = allowance
            .expiration_ledger
            .saturating_sub(env.ledger().sequence());
        env.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

// ============================================================================
// STAKING
// ============================================================================

pub fn get_stake(env: &Env, addr: &Address) -> StakeRecord {
    let key = (symbol_short!("stake"), addr);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or(StakeRecord::empty())
}

pub fn set_stake(env: &Env, addr: &Address, record: &StakeRecord) {
    let key = (symbol_short!("stake"), addr);
    if record.is_active() {
        env.storage().persistent().set(&key, record);
        bump_stake(env, addr);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn is_staking_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_staking_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}

pub fn is_emergency_mode(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("emergency"))
        .unwrap_or(false)
}

pub fn set_emergency_mode(env: &Env, enabled: bool) {
    env.storage().instance().set(&symbol_short!("emergency"), &enabled);
}

// ============================================================================
// APR
// ============================================================================

pub fn get_apr(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&symbol_short!("apr"))
        .unwrap_or(DEFAULT_APR)
}

pub fn set_apr(env: &Env, apr: u32) {
    env.storage().instance().set(&symbol_short!("apr"), &apr);
}

pub fn get_last_apr_change(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&symbol_short!("apr_last"))
        .unwrap_or(0)
}

pub fn set_last_apr_change(env: &Env, timestamp: u64) {
    env.storage().instance().set(&symbol_short!("apr_last"), &timestamp);
}

// ============================================================================
// PRESALE
// ============================================================================

pub fn get_presale_config(env: &Env) -> Option<PresaleConfig> {
    env.storage().instance().get(&symbol_short!("p_config"))
}

pub fn set_presale_config(env: &Env, config: &PresaleConfig) {
    env.storage().instance().set(&symbol_short!("p_config"), config);
}

pub fn get_presale_rate(env: &Env) -> PresaleRate {
    env.storage()
        .instance()
        .get(&symbol_short!("p_rate"))
        .unwrap_or(PresaleRate {
            numerator: DEFAULT_RATE_NUMERATOR,
            denominator: DEFAULT_RATE_DENOMINATOR,
        })
}

pub fn set_presale_rate(env: &Env, rate: &PresaleRate) {
    env.storage().instance().set(&symbol_short!("p_rate"), rate);
}

pub fn get_presale_totals(env: &Env) -> PresaleTotals {
    env.storage()
        .instance()
        .get(&symbol_short!("p_totals"))
        .unwrap_or(PresaleTotals {
            total_raised_usd: 0,
            total_sold: 0,
            native_total_raised: 0,
        })
}

pub fn set_presale_totals(env: &Env, totals: &PresaleTotals) {
    env.storage().instance().set(&symbol_short!("p_totals"), totals);
}

pub fn is_presale_active(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("p_active"))
        .unwrap_or(false)
}

pub fn set_presale_active(env: &Env, active: bool) {
    env.storage().instance().set(&symbol_short!("p_active"), &active);
}

pub fn get_contribution(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("contrib"), addr);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_contribution(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("contrib"), addr);
    env.storage().persistent().set(&key, &amount);
    bump_contribution(env, addr);
}

// ============================================================================
// ORÁCULO E ATIVO NATIVO
// ============================================================================

pub fn get_price_feed(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("feed"))
}

pub fn set_price_feed(env: &Env, feed: &Address) {
    env.storage().instance().set(&symbol_short!("feed"), feed);
}

pub fn get_native_asset(env: &Env) -> Option<Address> {
    env.storage().instance().get(&symbol_short!("native"))
}

pub fn set_native_asset(env: &Env, asset: &Address) {
    env.storage().instance().set(&symbol_short!("native"), asset);
}

// ============================================================================
// AIRDROP
// ============================================================================

pub fn get_merkle_root(env: &Env) -> Option<BytesN<32>> {
    env.storage().instance().get(&symbol_short!("m_root"))
}

pub fn set_merkle_root(env: &Env, root: &BytesN<32>) {
    env.storage().instance().set(&symbol_short!("m_root"), root);
}

pub fn has_claimed(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("claimed"), addr);
    env.storage().persistent().get(&key).unwrap_or(false)
}

pub fn set_claimed(env: &Env, addr: &Address) {
    let key = (symbol_short!("claimed"), addr);
    env.storage().persistent().set(&key, &true);
    bump_claimed(env, addr);
}
