use soroban_sdk::{Address, Env};
use crate::events;
use crate::ledger;
use crate::oracle;
use crate::payments;
use crate::storage;
use crate::types::{
    HashLierreError, PresaleConfig, PresaleQuote, PresaleRate, PresaleStats, PresaleTotals,
    PriceData,
};
use crate::validation;

// ============================================================================
// CONFIGURAÇÃO
// ============================================================================

pub fn configure(
    env: &Env,
    payment_token: &Address,
    treasury: &Address,
    min_purchase: i128,
    max_purchase: i128,
    hard_cap_usd: i128,
) -> Result<(), HashLierreError> {
    validation::require_external_address(env, payment_token, HashLierreError::InvalidPaymentAsset)?;
    validation::require_external_address(env, treasury, HashLierreError::InvalidTreasury)?;
    validation::require_positive_amount(min_purchase)?;
    if max_purchase < min_purchase {
        return Err(HashLierreError::MaxBelowMin);
    }
    validation::require_positive_amount(hard_cap_usd)?;

    // Reconfigurar mantém totais e contribuições
    storage::set_presale_config(
        env,
        &PresaleConfig {
            payment_token: payment_token.clone(),
            treasury: treasury.clone(),
            min_purchase,
            max_purchase,
            hard_cap_usd,
        },
    );

    events::emit_presale_configured(env, payment_token, treasury, hard_cap_usd);
    Ok(())
}

pub fn set_rate(env: &Env, numerator: i128, denominator: i128) -> Result<(), HashLierreError> {
    if numerator <= 0 || denominator <= 0 {
        return Err(HashLierreError::InvalidParameter);
    }
    storage::set_presale_rate(env, &PresaleRate { numerator, denominator });
    events::emit_presale_rate(env, numerator, denominator);
    Ok(())
}

pub fn set_active(env: &Env, active: bool) -> Result<(), HashLierreError> {
    if active && storage::get_presale_config(env).is_none() {
        return Err(HashLierreError::PresaleNotConfigured);
    }
    storage::set_presale_active(env, active);
    events::emit_presale_status(env, active);
    Ok(())
}

pub fn set_price_feed(env: &Env, feed: &Address) -> Result<(), HashLierreError> {
    validation::require_external_address(env, feed, HashLierreError::InvalidParameter)?;
    storage::set_price_feed(env, feed);
    events::emit_price_feed_set(env, feed);
    Ok(())
}

// ============================================================================
// CONVERSÕES
// ============================================================================

/// tokens = usd * numerator / denominator (truncado)
pub fn tokens_for_usd(rate: &PresaleRate, usd_amount: i128) -> Result<i128, HashLierreError> {
    usd_amount
        .checked_mul(rate.numerator)
        .ok_or(HashLierreError::ArithmeticOverflow)?
        .checked_div(rate.denominator)
        .ok_or(HashLierreError::InvalidParameter)
}

/// usd = native * price * 10^USD_DECIMALS / (10^NATIVE_DECIMALS * 10^price_decimals)
pub fn native_to_usd(native_amount: i128, price: &PriceData) -> Result<i128, HashLierreError> {
    let scale = storage::NATIVE_DECIMALS
        .checked_add(price.decimals)
        .and_then(|exp| 10i128.checked_pow(exp))
        .ok_or(HashLierreError::ArithmeticOverflow)?;

    native_amount
        .checked_mul(price.price)
        .and_then(|v| v.checked_mul(10i128.pow(storage::USD_DECIMALS)))
        .ok_or(HashLierreError::ArithmeticOverflow)?
        .checked_div(scale)
        .ok_or(HashLierreError::ArithmeticOverflow)
}

/// Preço em unidades base de USD por 1 HLR inteiro: 10^8 * den / num
pub fn price_per_token(rate: &PresaleRate) -> Result<i128, HashLierreError> {
    10i128
        .pow(storage::DECIMALS)
        .checked_mul(rate.denominator)
        .ok_or(HashLierreError::ArithmeticOverflow)?
        .checked_div(rate.numerator)
        .ok_or(HashLierreError::InvalidParameter)
}

// ============================================================================
// COMPRAS
// ============================================================================

/// Checks comuns às duas moedas; devolve (config, totals, tokens).
fn check_purchase(
    env: &Env,
    usd_amount: i128,
) -> Result<(PresaleConfig, PresaleTotals, i128), HashLierreError> {
    if !storage::is_presale_active(env) {
        return Err(HashLierreError::PresaleInactive);
    }
    let config = storage::get_presale_config(env).ok_or(HashLierreError::PresaleNotConfigured)?;

    if usd_amount < config.min_purchase {
        return Err(HashLierreError::BelowMinimumPurchase);
    }
    if usd_amount > config.max_purchase {
        return Err(HashLierreError::AboveMaximumPurchase);
    }

    let totals = storage::get_presale_totals(env);
    let raised = totals
        .total_raised_usd
        .checked_add(usd_amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    if raised > config.hard_cap_usd {
        return Err(HashLierreError::HardCapExceeded);
    }

    let tokens = tokens_for_usd(&storage::get_presale_rate(env), usd_amount)?;
    validation::require_positive_amount(tokens)?;
    if storage::get_balance(env, &config.treasury) < tokens {
        return Err(HashLierreError::InsufficientTreasuryBalance);
    }

    Ok((config, totals, tokens))
}

fn record_purchase(
    env: &Env,
    buyer: &Address,
    mut totals: PresaleTotals,
    usd_amount: i128,
    native_amount: i128,
    tokens: i128,
) -> Result<(), HashLierreError> {
    totals.total_raised_usd = totals
        .total_raised_usd
        .checked_add(usd_amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    totals.total_sold = totals
        .total_sold
        .checked_add(tokens)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    totals.native_total_raised = totals
        .native_total_raised
        .checked_add(native_amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_presale_totals(env, &totals);

    let contribution = storage::get_contribution(env, buyer)
        .checked_add(usd_amount)
        .ok_or(HashLierreError::ArithmeticOverflow)?;
    storage::set_contribution(env, buyer, contribution);
    Ok(())
}

/// Compra com o ativo estável; devolve os tokens entregues.
pub fn buy(env: &Env, buyer: &Address, usd_amount: i128) -> Result<i128, HashLierreError> {
    // === CHECKS ===
    let (config, totals, tokens) = check_purchase(env, usd_amount)?;

    // === EFFECTS ===
    record_purchase(env, buyer, totals, usd_amount, 0, tokens)?;
    ledger::transfer(env, &config.treasury, buyer, tokens)?;

    // === INTERACTIONS ===
    payments::pull_stable(env, &config.payment_token, buyer, &config.treasury, usd_amount)?;
    events::emit_presale_purchase(env, buyer, usd_amount, tokens);
    Ok(tokens)
}

/// Compra com o ativo nativo convertido pelo oráculo; devolve a cotação
/// efetivamente aplicada.
pub fn buy_native(
    env: &Env,
    buyer: &Address,
    native_amount: i128,
    now: u64,
) -> Result<PresaleQuote, HashLierreError> {
    // === CHECKS ===
    validation::require_positive_amount(native_amount)?;
    if !storage::is_presale_active(env) {
        return Err(HashLierreError::PresaleInactive);
    }
    let native_asset = storage::get_native_asset(env).ok_or(HashLierreError::InvalidPaymentAsset)?;

    let price = oracle::read_price(env, now)?;
    let usd_value = native_to_usd(native_amount, &price)?;
    let (config, totals, tokens) = check_purchase(env, usd_value)?;

    // === EFFECTS ===
    record_purchase(env, buyer, totals, usd_value, native_amount, tokens)?;
    ledger::transfer(env, &config.treasury, buyer, tokens)?;

    // === INTERACTIONS ===
    payments::pay_native(env, &native_asset, buyer, &config.treasury, native_amount)?;
    events::emit_presale_native_purchase(env, buyer, native_amount, usd_value, tokens);

    Ok(PresaleQuote {
        usd_value,
        token_amount: tokens,
    })
}

// ============================================================================
// CONSULTAS
// ============================================================================

pub fn quote(env: &Env, usd_amount: i128) -> Result<i128, HashLierreError> {
    if usd_amount < 0 {
        return Err(HashLierreError::InvalidParameter);
    }
    tokens_for_usd(&storage::get_presale_rate(env), usd_amount)
}

pub fn quote_native(env: &Env, native_amount: i128, now: u64) -> Result<PresaleQuote, HashLierreError> {
    if native_amount < 0 {
        return Err(HashLierreError::InvalidParameter);
    }
    let price = oracle::read_price(env, now)?;
    let usd_value = native_to_usd(native_amount, &price)?;
    Ok(PresaleQuote {
        usd_value,
        token_amount: tokens_for_usd(&storage::get_presale_rate(env), usd_value)?,
    })
}

pub fn stats(env: &Env) -> PresaleStats {
    let totals = storage::get_presale_totals(env);
    let rate = storage::get_presale_rate(env);
    let hard_cap = storage::get_presale_config(env)
        .map(|c| c.hard_cap_usd)
        .unwrap_or(0);

    PresaleStats {
        is_active: storage::is_presale_active(env),
        total_raised: totals.total_raised_usd,
        total_sold: totals.total_sold,
        native_total_raised: totals.native_total_raised,
        hard_cap,
        remaining_cap: hard_cap.saturating_sub(totals.total_raised_usd).max(0),
        rate_numerator: rate.numerator,
        rate_denominator: rate.denominator,
    }
}
