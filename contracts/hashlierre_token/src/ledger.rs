use soroban_sdk::{Address, Env, String};
use crate::events;
use crate::storage;
use crate::types::{AllowanceValue, HashLierreError};
use crate::validation;

// ============================================================================
// BALANCE LEDGER
// ============================================================================
//
// Operações internas de saldo/supply. Não fazem `require_auth`: quem chama
// (token.rs, staking, presale, airdrop) já autenticou o ator certo.

/// Cria `amount` tokens para `to`, respeitando MAX_SUPPLY.
pub fn mint(env: &Env, to: &Address, amount: i128, tag: &String) -> Result<(), HashLierreError> {
    // === CHECKS ===
    validation::require_positive_amount(amount)?;
    validation::require_max_supply_not_exceeded(env, amount)?;

    let new_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    let new_supply = storage::get_total_supply(env)
        .checked_add(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;

    // === EFFECTS ===
    storage::set_balance(env, to, new_balance);
    storage::set_total_supply(env, new_supply);

    // === INTERACTIONS ===
    events::emit_mint(env, to, amount, tag);
    Ok(())
}

/// Move `amount` de `from` para `to`.
pub fn transfer(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), HashLierreError> {
    // === CHECKS ===
    validation::require_positive_amount(amount)?;
    validation::require_sufficient_balance(env, from, amount)?;

    let new_from_balance = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(HashLierreError::InsufficientBalance)?;

    // === EFFECTS ===
    storage::set_balance(env, from, new_from_balance);

    // Lido depois do débito para que from == to seja neutro
    let new_to_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_balance(env, to, new_to_balance);

    // === INTERACTIONS ===
    events::emit_transfer(env, from, to, amount);
    Ok(())
}

/// Destrói `amount` tokens de `from`.
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), HashLierreError> {
    validation::require_positive_amount(amount)?;
    validation::require_sufficient_balance(env, from, amount)?;

    let new_balance = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(HashLierreError::InsufficientBalance)?;
    let new_supply = storage::get_total_supply(env)
        .checked_sub(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;

    storage::set_balance(env, from, new_balance);
    storage::set_total_supply(env, new_supply);

    events::emit_burn(env, from, amount);
    Ok(())
}

// ============================================================================
// ALLOWANCE
// ============================================================================

pub fn approve(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) -> Result<(), HashLierreError> {
    if amount < 0 {
        return Err(HashLierreError::InvalidParameter);
    }
    let sequence = env.ledger().sequence();
    if amount > 0 && expiration_ledger < sequence {
        return Err(HashLierreError::InvalidParameter);
    }
    // O allowance vive em storage temporário: não pode passar do TTL máximo
    if expiration_ledger > sequence.saturating_add(env.storage().max_ttl()) {
        return Err(HashLierreError::InvalidParameter);
    }

    storage::set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount,
            expiration_ledger,
        },
    );

    events::emit_approval(env, from, spender, amount, expiration_ledger);
    Ok(())
}

/// Consome `amount` do allowance `from -> spender`.
pub fn spend_allowance(
    env: &Env,
    from: &Address,
    spender: &Address,
    amount: i128,
) -> Result<(), HashLierreError> {
    let allowance = storage::get_allowance(env, from, spender);
    if allowance.amount < amount {
        return Err(HashLierreError::InsufficientAllowance);
    }

    let remaining = allowance
        .amount
        .checked_sub(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;

    storage::set_allowance(
        env,
        from,
        spender,
        &AllowanceValue {
            amount: remaining,
            expiration_ledger: allowance.expiration_ledger,
        },
    );
    Ok(())
}
