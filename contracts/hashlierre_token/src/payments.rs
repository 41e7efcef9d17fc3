use soroban_sdk::{log, token, Address, Env};
use crate::types::HashLierreError;

// ============================================================================
// STABLE / NATIVE ASSET ADAPTER (SEP-41)
// ============================================================================

/// Puxa `amount` do ativo estável de `buyer` para `treasury`, usando o
/// allowance que o comprador concedeu a este contrato.
pub fn pull_stable(
    env: &Env,
    payment_token: &Address,
    buyer: &Address,
    treasury: &Address,
    amount: i128,
) -> Result<(), HashLierreError> {
    let client = token::Client::new(env, payment_token);
    let spender = env.current_contract_address();

    match client.try_transfer_from(&spender, buyer, treasury, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "stable transfer_from failed", buyer, amount);
            Err(HashLierreError::PaymentFailed)
        }
    }
}

/// Envia `amount` do ativo nativo do comprador direto para a tesouraria.
pub fn pay_native(
    env: &Env,
    native_asset: &Address,
    buyer: &Address,
    treasury: &Address,
    amount: i128,
) -> Result<(), HashLierreError> {
    let client = token::Client::new(env, native_asset);

    match client.try_transfer(buyer, treasury, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "native transfer failed", buyer, amount);
            Err(HashLierreError::PaymentFailed)
        }
    }
}
