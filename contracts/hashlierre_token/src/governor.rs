use soroban_sdk::Env;
use crate::events;
use crate::storage;
use crate::types::HashLierreError;

// ============================================================================
// APR GOVERNOR
// ============================================================================

/// Troca o APR respeitando o teto e o intervalo mínimo entre mudanças.
/// Posições abertas passam a acumular com o novo APR desde o último acerto.
pub fn set_apr(env: &Env, new_apr: u32, now: u64) -> Result<u32, HashLierreError> {
    // === CHECKS ===
    if new_apr > storage::MAX_APR {
        return Err(HashLierreError::AprExceedsMaximum);
    }
    let since_last = now.saturating_sub(storage::get_last_apr_change(env));
    if since_last < storage::MIN_APR_CHANGE_INTERVAL {
        return Err(HashLierreError::AprChangeTooSoon);
    }

    // === EFFECTS ===
    let old_apr = storage::get_apr(env);
    storage::set_apr(env, new_apr);
    storage::set_last_apr_change(env, now);

    // === INTERACTIONS ===
    events::emit_apr_changed(env, old_apr, new_apr);
    Ok(old_apr)
}

/// APY aproximado em bps: apr + apr² / 20000
pub fn apy(apr: u32) -> u32 {
    let apr = apr as u64;
    (apr + apr * apr / 20_000) as u32
}
