use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, String, Vec};
use crate::events;
use crate::ledger;
use crate::storage;
use crate::types::HashLierreError;
use crate::validation;

// ============================================================================
// AIRDROP (MERKLE)
// ============================================================================

/// Folha da árvore: keccak256(keccak256(xdr(endereço) || amount em 16 bytes BE)).
/// O hash duplo impede que um nó interno seja aceito como folha.
pub fn leaf(env: &Env, account: &Address, amount: i128) -> BytesN<32> {
    let mut data = account.clone().to_xdr(env);
    data.extend_from_array(&amount.to_be_bytes());

    let inner: Bytes = env.crypto().keccak256(&data).into();
    env.crypto().keccak256(&inner).into()
}

/// Hash de um par ordenado: keccak256(min || max)
pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut data = Bytes::from(lo);
    data.append(&Bytes::from(hi));
    env.crypto().keccak256(&data).into()
}

pub fn verify(env: &Env, proof: &Vec<BytesN<32>>, root: &BytesN<32>, leaf: BytesN<32>) -> bool {
    let mut computed = leaf;
    for node in proof.iter() {
        computed = hash_pair(env, &computed, &node);
    }
    &computed == root
}

fn active_root(env: &Env) -> Option<BytesN<32>> {
    storage::get_merkle_root(env).filter(|root| root.to_array() != [0u8; 32])
}

pub fn set_root(env: &Env, root: &BytesN<32>) {
    storage::set_merkle_root(env, root);
    events::emit_merkle_root(env, root);
}

pub fn claim(
    env: &Env,
    user: &Address,
    amount: i128,
    proof: &Vec<BytesN<32>>,
) -> Result<(), HashLierreError> {
    // === CHECKS ===
    let root = active_root(env).ok_or(HashLierreError::AirdropNotInitialized)?;
    validation::require_positive_amount(amount)?;
    if storage::has_claimed(env, user) {
        return Err(HashLierreError::AlreadyClaimed);
    }
    if !verify(env, proof, &root, leaf(env, user, amount)) {
        return Err(HashLierreError::InvalidProof);
    }
    validation::require_max_supply_not_exceeded(env, amount)?;

    // === EFFECTS ===
    storage::set_claimed(env, user);
    ledger::mint(env, user, amount, &String::from_str(env, "airdrop"))?;

    // === INTERACTIONS ===
    events::emit_airdrop_claimed(env, user, amount);
    Ok(())
}
