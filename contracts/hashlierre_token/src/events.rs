use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

//
// EVENTOS DO TOKEN
//

// Transferência padrão SEP‑0041
pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("transfer"), from, to),
        amount,
    );
}

// Mint com tag de auditoria ("admin", "reward", "airdrop")
pub fn emit_mint(env: &Env, to: &Address, amount: i128, tag: &String) {
    env.events().publish(
        (symbol_short!("mint"), to),
        (amount, tag.clone()),
    );
}

// Burn padrão SEP‑0041
pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("burn"), from),
        amount,
    );
}

// Aprovação (SEP‑41)
pub fn emit_approval(
    env: &Env,
    owner: &Address,
    spender: &Address,
    amount: i128,
    expiration_ledger: u32,
) {
    env.events().publish(
        (symbol_short!("approve"), owner, spender),
        (amount, expiration_ledger),
    );
}

//
// EVENTOS DE STAKING
//

pub fn emit_staked(env: &Env, user: &Address, amount: i128, auto_compounded: i128) {
    env.events().publish(
        (symbol_short!("staked"), user),
        (amount, auto_compounded),
    );
}

pub fn emit_unstaked(env: &Env, user: &Address, amount: i128, reward: i128) {
    env.events().publish(
        (symbol_short!("unstaked"), user),
        (amount, reward),
    );
}

pub fn emit_reward_claimed(env: &Env, user: &Address, reward: i128) {
    env.events().publish(
        (symbol_short!("claimed"), user),
        reward,
    );
}

pub fn emit_emergency_withdraw(env: &Env, user: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("emrg_wd"), user),
        amount,
    );
}

pub fn emit_apr_changed(env: &Env, old_apr: u32, new_apr: u32) {
    env.events().publish(
        (symbol_short!("apr_set"),),
        (old_apr, new_apr),
    );
}

//
// EVENTOS ADMINISTRATIVOS
//

pub fn emit_staking_paused(env: &Env, paused: bool) {
    env.events().publish(
        (symbol_short!("paused"),),
        paused,
    );
}

pub fn emit_emergency_mode(env: &Env, enabled: bool) {
    env.events().publish(
        (symbol_short!("emergency"),),
        enabled,
    );
}

pub fn emit_ownership_transferred(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("owner"), old_admin),
        new_admin.clone(),
    );
}

//
// EVENTOS DE PRESALE
//

pub fn emit_presale_configured(
    env: &Env,
    payment_token: &Address,
    treasury: &Address,
    hard_cap_usd: i128,
) {
    env.events().publish(
        (symbol_short!("p_config"), payment_token),
        (treasury.clone(), hard_cap_usd),
    );
}

pub fn emit_presale_rate(env: &Env, numerator: i128, denominator: i128) {
    env.events().publish(
        (symbol_short!("p_rate"),),
        (numerator, denominator),
    );
}

pub fn emit_presale_status(env: &Env, active: bool) {
    env.events().publish(
        (symbol_short!("p_status"),),
        active,
    );
}

pub fn emit_price_feed_set(env: &Env, feed: &Address) {
    env.events().publish(
        (symbol_short!("feed_set"),),
        feed.clone(),
    );
}

// Compra com ativo estável: (usd pago, tokens recebidos)
pub fn emit_presale_purchase(env: &Env, buyer: &Address, usd_amount: i128, tokens: i128) {
    env.events().publish(
        (symbol_short!("p_buy"), buyer),
        (usd_amount, tokens),
    );
}

// Compra com ativo nativo: (valor nativo, usd convertido, tokens recebidos)
pub fn emit_presale_native_purchase(
    env: &Env,
    buyer: &Address,
    native_amount: i128,
    usd_value: i128,
    tokens: i128,
) {
    env.events().publish(
        (symbol_short!("p_buy_nat"), buyer),
        (native_amount, usd_value, tokens),
    );
}

//
// EVENTOS DE AIRDROP
//

pub fn emit_merkle_root(env: &Env, root: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("m_root"),),
        root.clone(),
    );
}

pub fn emit_airdrop_claimed(env: &Env, user: &Address, amount: i128) {
    env.events().publish(
        (symbol_short!("airdrop"), user),
        amount,
    );
}

//
// TESTES
//
