use soroban_sdk::{Address, Env};
use crate::storage;
use crate::types::HashLierreError;

// ============================================================================
// VALIDAÇÕES (CHECKS do padrão CEI)
// ============================================================================

/// Valida se o caller é o admin
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), HashLierreError> {
    let admin = storage::get_admin(env).ok_or(HashLierreError::AccessDenied)?;
    if caller != &admin {
        return Err(HashLierreError::AccessDenied);
    }
    Ok(())
}

/// Valida se o amount é válido (> 0)
pub fn require_positive_amount(amount: i128) -> Result<(), HashLierreError> {
    if amount <= 0 {
        return Err(HashLierreError::InvalidParameter);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(
    env: &Env,
    addr: &Address,
    required: i128,
) -> Result<(), HashLierreError> {
    let balance = storage::get_balance(env, addr);
    if balance < required {
        return Err(HashLierreError::InsufficientBalance);
    }
    Ok(())
}

/// Valida se o supply máximo não será excedido por um mint administrativo
pub fn require_max_supply_not_exceeded(
    env: &Env,
    additional_amount: i128,
) -> Result<(), HashLierreError> {
    if !fits_supply_cap(env, additional_amount)? {
        return Err(HashLierreError::SupplyCapExceeded);
    }
    Ok(())
}

/// Mesmo teto, mas para recompensas de staking
pub fn require_reward_within_supply(env: &Env, reward: i128) -> Result<(), HashLierreError> {
    if !fits_supply_cap(env, reward)? {
        return Err(HashLierreError::RewardExceedsMaxSupply);
    }
    Ok(())
}

fn fits_supply_cap(env: &Env, additional_amount: i128) -> Result<bool, HashLierreError> {
    let new_supply = storage::get_total_supply(env)
        .checked_add(additional_amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    Ok(new_supply <= storage::MAX_SUPPLY)
}

/// O próprio contrato faz o papel do "endereço zero": nunca é um destino
/// válido para pagamentos, tesouraria ou oráculo.
pub fn require_external_address(
    env: &Env,
    addr: &Address,
    err: HashLierreError,
) -> Result<(), HashLierreError> {
    if addr == &env.current_contract_address() {
        return Err(err);
    }
    Ok(())
}
