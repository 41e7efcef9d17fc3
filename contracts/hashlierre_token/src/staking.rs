use soroban_sdk::{log, Address, Env, String};
use crate::events;
use crate::ledger;
use crate::storage;
use crate::types::{HashLierreError, StakeRecord, UserStats};
use crate::validation;

// ============================================================================
// STAKING ENGINE
// ============================================================================
//
// O principal e as recompensas compostas ficam no saldo do próprio contrato
// (vault), então balance(contrato) == total_staked.

fn vault(env: &Env) -> Address {
    env.current_contract_address()
}

/// Recompensa acumulada desde `last_accrual_time`, com o APR vigente
/// aplicado ao intervalo inteiro.
pub fn pending_reward(record: &StakeRecord, apr: u32, now: u64) -> Result<i128, HashLierreError> {
    if !record.is_active() || now <= record.last_accrual_time {
        return Ok(0);
    }

    let elapsed = (now - record.last_accrual_time) as i128;
    let numerator = record
        .amount
        .checked_mul(apr as i128)
        .and_then(|v| v.checked_mul(elapsed))
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    let denominator = storage::BPS_DENOMINATOR
        .checked_mul(storage::SECONDS_PER_YEAR as i128)
        .ok_or(HashLierreError::ArithmeticOverflow)?;

    Ok(numerator / denominator)
}

/// Segundos até o lock de `MIN_STAKE_PERIOD` terminar (0 em modo emergência).
pub fn time_until_unstake(env: &Env, record: &StakeRecord, now: u64) -> u64 {
    if !record.is_active() || storage::is_emergency_mode(env) {
        return 0;
    }
    record
        .initial_stake_time
        .saturating_add(storage::MIN_STAKE_PERIOD)
        .saturating_sub(now)
}

/// Recompensa que pode ser liquidada agora.
///
/// Com `strict` a recompensa que estoura MAX_SUPPLY é erro; sem ele é
/// limitada à folga restante, para que o principal sempre possa sair.
fn settleable_reward(
    env: &Env,
    record: &StakeRecord,
    now: u64,
    strict: bool,
) -> Result<i128, HashLierreError> {
    let reward = pending_reward(record, storage::get_apr(env), now)?;

    if strict {
        validation::require_reward_within_supply(env, reward)?;
        return Ok(reward);
    }

    let headroom = storage::MAX_SUPPLY
        .checked_sub(storage::get_total_supply(env))
        .ok_or(HashLierreError::ArithmeticOverflow)?
        .max(0);
    if reward > headroom {
        log!(env, "reward clamped to supply headroom", reward, headroom);
        return Ok(headroom);
    }
    Ok(reward)
}

/// Minta `reward` no cofre e soma na posição (auto-compound).
fn compound(
    env: &Env,
    record: &mut StakeRecord,
    reward: i128,
    now: u64,
) -> Result<(), HashLierreError> {
    record.last_accrual_time = now;
    if reward == 0 {
        return Ok(());
    }

    ledger::mint(env, &vault(env), reward, &String::from_str(env, "reward"))?;

    record.amount = record
        .amount
        .checked_add(reward)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    record.reward_debt = record
        .reward_debt
        .checked_add(reward)
        .ok_or(HashLierreError::ArithmeticOverflow)?;

    let total_staked = storage::get_total_staked(env)
        .checked_add(reward)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    let total_rewards = storage::get_total_rewards(env)
        .checked_add(reward)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_total_staked(env, total_staked);
    storage::set_total_rewards(env, total_rewards);

    Ok(())
}

// ============================================================================
// OPERAÇÕES
// ============================================================================

pub fn stake(env: &Env, user: &Address, amount: i128, now: u64) -> Result<(), HashLierreError> {
    // === CHECKS ===
    if storage::is_staking_paused(env) || storage::is_emergency_mode(env) {
        return Err(HashLierreError::StakingDisabled);
    }
    if amount < storage::MIN_STAKE_AMOUNT {
        return Err(HashLierreError::StakeBelowMinimum);
    }
    validation::require_sufficient_balance(env, user, amount)?;

    let mut record = storage::get_stake(env, user);
    let compounded = settleable_reward(env, &record, now, true)?;

    // === EFFECTS ===
    compound(env, &mut record, compounded, now)?;

    if !record.is_active() {
        record.initial_stake_time = now;
        record.reward_debt = 0;
    }

    ledger::transfer(env, user, &vault(env), amount)?;

    record.amount = record
        .amount
        .checked_add(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    record.last_accrual_time = now;

    let total_staked = storage::get_total_staked(env)
        .checked_add(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_total_staked(env, total_staked);
    storage::set_stake(env, user, &record);

    // === INTERACTIONS ===
    events::emit_staked(env, user, amount, compounded);
    Ok(())
}

pub fn unstake(env: &Env, user: &Address, amount: i128, now: u64) -> Result<(), HashLierreError> {
    // === CHECKS ===
    validation::require_positive_amount(amount)?;

    let mut record = storage::get_stake(env, user);
    if !record.is_active() {
        return Err(HashLierreError::InsufficientStake);
    }

    let held_for = now.saturating_sub(record.initial_stake_time);
    if held_for < storage::MIN_STAKE_PERIOD && !storage::is_emergency_mode(env) {
        return Err(HashLierreError::StakeLocked);
    }

    // O principal disponível já inclui a recompensa liquidada nesta chamada
    let reward = settleable_reward(env, &record, now, false)?;
    let available = record
        .amount
        .checked_add(reward)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    if available < amount {
        return Err(HashLierreError::InsufficientStake);
    }

    // === EFFECTS ===
    compound(env, &mut record, reward, now)?;

    record.amount = record
        .amount
        .checked_sub(amount)
        .ok_or(HashLierreError::InsufficientStake)?;
    let total_staked = storage::get_total_staked(env)
        .checked_sub(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_total_staked(env, total_staked);

    if !record.is_active() {
        record = StakeRecord::empty();
    }
    storage::set_stake(env, user, &record);

    ledger::transfer(env, &vault(env), user, amount)?;

    // === INTERACTIONS ===
    events::emit_unstaked(env, user, amount, reward);
    Ok(())
}

/// Liquida e re-aplica a recompensa pendente; devolve o valor composto.
pub fn claim_reward(env: &Env, user: &Address, now: u64) -> Result<i128, HashLierreError> {
    // === CHECKS ===
    if storage::is_emergency_mode(env) {
        return Err(HashLierreError::ClaimsDisabled);
    }

    let mut record = storage::get_stake(env, user);
    if !record.is_active() {
        return Err(HashLierreError::NoActiveStake);
    }

    let reward = pending_reward(&record, storage::get_apr(env), now)?;
    if reward == 0 {
        return Err(HashLierreError::NoRewardToClaim);
    }
    validation::require_reward_within_supply(env, reward)?;

    // === EFFECTS ===
    compound(env, &mut record, reward, now)?;
    storage::set_stake(env, user, &record);

    // === INTERACTIONS ===
    events::emit_reward_claimed(env, user, reward);
    Ok(reward)
}

/// Saída de emergência: devolve só o principal registrado, sem recompensa
/// pendente e sem respeitar o lock.
pub fn emergency_unstake(env: &Env, user: &Address) -> Result<i128, HashLierreError> {
    // === CHECKS ===
    if !storage::is_emergency_mode(env) {
        return Err(HashLierreError::EmergencyModeNotEnabled);
    }

    let record = storage::get_stake(env, user);
    if !record.is_active() {
        return Err(HashLierreError::NoActiveStake);
    }

    // === EFFECTS ===
    let amount = record.amount;
    let total_staked = storage::get_total_staked(env)
        .checked_sub(amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_total_staked(env, total_staked);
    storage::set_stake(env, user, &StakeRecord::empty());

    ledger::transfer(env, &vault(env), user, amount)?;

    // === INTERACTIONS ===
    events::emit_emergency_withdraw(env, user, amount);
    Ok(amount)
}

// ============================================================================
// CONSULTAS
// ============================================================================

pub fn user_stats(env: &Env, user: &Address, now: u64) -> Result<UserStats, HashLierreError> {
    let record = storage::get_stake(env, user);
    let apr = storage::get_apr(env);

    let staking_duration = if record.is_active() {
        now.saturating_sub(record.initial_stake_time)
    } else {
        0
    };
    let estimated_yearly_reward = record
        .amount
        .checked_mul(apr as i128)
        .ok_or(HashLierreError::ArithmeticOverflow)?
        / storage::BPS_DENOMINATOR;
    let time_until = time_until_unstake(env, &record, now);

    Ok(UserStats {
        staked_amount: record.amount,
        pending_rewards: pending_reward(&record, apr, now)?,
        compounded_rewards: record.reward_debt,
        staking_duration,
        estimated_yearly_reward,
        can_unstake: record.is_active() && time_until == 0,
        time_until_unstake: time_until,
    })
}
