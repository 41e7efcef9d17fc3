use crate::events;
use crate::storage;
use crate::types::HashLierreError;
use crate::validation;
use soroban_sdk::{log, Address, Env};

// ============================================================================
// ADMIN OPS - PAUSA, EMERGÊNCIA E OWNERSHIP
// ============================================================================

/// Auth + checagem de admin, usada por todas as entradas administrativas.
pub fn authorize(env: &Env, caller: &Address) -> Result<(), HashLierreError> {
    caller.require_auth();
    storage::bump_critical_storage(env);
    validation::require_admin(env, caller)
}

/// Pausa (ou retoma) novos stakes. Unstake e claim seguem liberados.
pub fn pause_staking(env: &Env, caller: &Address, paused: bool) -> Result<(), HashLierreError> {
    authorize(env, caller)?;

    storage::set_staking_paused(env, paused);
    events::emit_staking_paused(env, paused);
    Ok(())
}

/// Liga o modo emergência: bloqueia stake e claim, libera unstake sem lock
/// e o `emergency_unstake`.
pub fn enable_emergency(env: &Env, caller: &Address, enabled: bool) -> Result<(), HashLierreError> {
    authorize(env, caller)?;

    storage::set_emergency_mode(env, enabled);
    log!(env, "emergency mode", enabled);
    events::emit_emergency_mode(env, enabled);
    Ok(())
}

/// Transfere a administração. O novo admin também precisa assinar.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_admin: &Address,
) -> Result<(), HashLierreError> {
    authorize(env, caller)?;
    if new_admin == caller {
        return Err(HashLierreError::InvalidParameter);
    }
    validation::require_external_address(env, new_admin, HashLierreError::InvalidParameter)?;
    new_admin.require_auth();

    storage::set_admin(env, new_admin);
    events::emit_ownership_transferred(env, caller, new_admin);
    Ok(())
}
