use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};
use crate::admin;
use crate::airdrop;
use crate::governor;
use crate::ledger;
use crate::oracle;
use crate::presale;
use crate::staking;
use crate::storage;
use crate::types::{
    ContractConfig, GlobalStats, HashLierreError, PresaleConfig, PresaleQuote, PresaleStats,
    PresaleRate, PriceData, StakeRecord, TokenMetadata, UserStats,
};
use crate::validation;

//
// CONTRATO PRINCIPAL - HASHLIERRE TOKEN
//

#[contract]
pub struct HashLierreToken;

#[contractimpl]
impl HashLierreToken {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o contrato HashLierre.
    ///
    /// # Parâmetros
    /// - `admin`: Endereço do administrador
    /// - `name`: Nome do token (ex: "HashLierre")
    /// - `symbol`: Símbolo do token (ex: "HLR")
    /// - `native_asset`: contrato SAC do ativo nativo aceito no presale
    ///
    /// # Erros
    /// - `AlreadyInitialized`: Se o contrato já foi inicializado
    pub fn initialize(
        env: Env,
        admin: Address,
        name: String,
        symbol: String,
        native_asset: Address,
    ) -> Result<(), HashLierreError> {
        // === CHECKS ===
        if storage::has_admin(&env) {
            return Err(HashLierreError::AlreadyInitialized);
        }
        admin.require_auth();
        validation::require_external_address(&env, &native_asset, HashLierreError::InvalidPaymentAsset)?;

        // === EFFECTS ===
        storage::set_admin(&env, &admin);
        storage::set_metadata(
            &env,
            &TokenMetadata {
                name,
                symbol,
                decimals: storage::DECIMALS,
            },
        );
        storage::set_total_supply(&env, 0);
        storage::set_apr(&env, storage::DEFAULT_APR);
        storage::set_last_apr_change(&env, env.ledger().timestamp());
        storage::set_presale_rate(
            &env,
            &PresaleRate {
                numerator: storage::DEFAULT_RATE_NUMERATOR,
                denominator: storage::DEFAULT_RATE_DENOMINATOR,
            },
        );
        storage::set_presale_active(&env, false);
        storage::set_staking_paused(&env, false);
        storage::set_emergency_mode(&env, false);
        storage::set_native_asset(&env, &native_asset);
        storage::bump_critical_storage(&env);

        Ok(())
    }

    //
    // FUNÇÕES SEP-41 (Leitura)
    //

    /// Retorna o nome do token.
    pub fn name(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env)
            .map(|m| m.name)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    /// Retorna o símbolo do token.
    pub fn symbol(env: Env) -> String {
        storage::bump_critical_storage(&env);
        storage::get_metadata(&env)
            .map(|m| m.symbol)
            .unwrap_or_else(|| String::from_str(&env, ""))
    }

    /// Retorna o número de decimais.
    pub fn decimals(_env: Env) -> u32 {
        storage::DECIMALS
    }

    /// Retorna o balance de um endereço.
    pub fn balance(env: Env, id: Address) -> i128 {
        storage::bump_balance(&env, &id);
        storage::get_balance(&env, &id)
    }

    /// Retorna o supply total.
    pub fn total_supply(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_supply(&env)
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &from, &spender).amount
    }

    //
    // TRANSFERÊNCIAS E ALLOWANCE
    // O saldo do próprio contrato é o cofre do staking: ninguém transfere
    // para ele por fora do fluxo de stake.
    //

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), HashLierreError> {
        from.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_external_address(&env, &to, HashLierreError::InvalidParameter)?;

        ledger::transfer(&env, &from, &to, amount)
    }

    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), HashLierreError> {
        from.require_auth();
        storage::bump_critical_storage(&env);

        ledger::approve(&env, &from, &spender, amount, expiration_ledger)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), HashLierreError> {
        // === CHECKS ===
        spender.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_external_address(&env, &to, HashLierreError::InvalidParameter)?;
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        // === EFFECTS ===
        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::transfer(&env, &from, &to, amount)
    }

    //
    // MINT E BURN
    //

    /// Cria novos tokens (apenas admin). `tag` vai só para o evento de mint.
    pub fn mint(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
        tag: String,
    ) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;
        validation::require_external_address(&env, &to, HashLierreError::InvalidParameter)?;

        ledger::mint(&env, &to, amount, &tag)
    }

    pub fn burn(env: Env, from: Address, amount: i128) -> Result<(), HashLierreError> {
        from.require_auth();
        storage::bump_critical_storage(&env);

        ledger::burn(&env, &from, amount)
    }

    pub fn burn_from(
        env: Env,
        spender: Address,
        from: Address,
        amount: i128,
    ) -> Result<(), HashLierreError> {
        spender.require_auth();
        storage::bump_critical_storage(&env);
        validation::require_positive_amount(amount)?;
        validation::require_sufficient_balance(&env, &from, amount)?;

        ledger::spend_allowance(&env, &from, &spender, amount)?;
        ledger::burn(&env, &from, amount)
    }

    //
    // STAKING
    //

    pub fn stake(env: Env, user: Address, amount: i128) -> Result<(), HashLierreError> {
        user.require_auth();
        storage::bump_critical_storage(&env);

        staking::stake(&env, &user, amount, env.ledger().timestamp())
    }

    pub fn unstake(env: Env, user: Address, amount: i128) -> Result<(), HashLierreError> {
        user.require_auth();
        storage::bump_critical_storage(&env);

        staking::unstake(&env, &user, amount, env.ledger().timestamp())
    }

    /// Recompensa pendente é mintada e re-aplicada na posição.
    pub fn claim_reward(env: Env, user: Address) -> Result<i128, HashLierreError> {
        user.require_auth();
        storage::bump_critical_storage(&env);

        staking::claim_reward(&env, &user, env.ledger().timestamp())
    }

    pub fn emergency_unstake(env: Env, user: Address) -> Result<i128, HashLierreError> {
        user.require_auth();
        storage::bump_critical_storage(&env);

        staking::emergency_unstake(&env, &user)
    }

    pub fn pending_reward(env: Env, user: Address) -> Result<i128, HashLierreError> {
        let record = storage::get_stake(&env, &user);
        staking::pending_reward(&record, storage::get_apr(&env), env.ledger().timestamp())
    }

    pub fn stakes(env: Env, user: Address) -> StakeRecord {
        storage::bump_stake(&env, &user);
        storage::get_stake(&env, &user)
    }

    pub fn get_user_stats(env: Env, user: Address) -> Result<UserStats, HashLierreError> {
        staking::user_stats(&env, &user, env.ledger().timestamp())
    }

    pub fn get_time_until_unstake(env: Env, user: Address) -> u64 {
        let record = storage::get_stake(&env, &user);
        staking::time_until_unstake(&env, &record, env.ledger().timestamp())
    }

    pub fn total_staked(env: Env) -> i128 {
        storage::get_total_staked(&env)
    }

    pub fn get_total_value_locked(env: Env) -> i128 {
        storage::bump_critical_storage(&env);
        storage::get_total_staked(&env)
    }

    pub fn total_rewards_distributed(env: Env) -> i128 {
        storage::get_total_rewards(&env)
    }

    //
    // APR
    //

    pub fn set_apr(env: Env, caller: Address, new_apr: u32) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;

        governor::set_apr(&env, new_apr, env.ledger().timestamp())?;
        Ok(())
    }

    pub fn get_apr(env: Env) -> u32 {
        storage::get_apr(&env)
    }

    pub fn get_apy(env: Env) -> u32 {
        governor::apy(storage::get_apr(&env))
    }

    //
    // PRESALE
    //

    pub fn configure_presale(
        env: Env,
        caller: Address,
        payment_token: Address,
        treasury: Address,
        min_purchase: i128,
        max_purchase: i128,
        hard_cap_usd: i128,
    ) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;

        presale::configure(
            &env,
            &payment_token,
            &treasury,
            min_purchase,
            max_purchase,
            hard_cap_usd,
        )
    }

    pub fn set_presale_rate(
        env: Env,
        caller: Address,
        numerator: i128,
        denominator: i128,
    ) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;
        presale::set_rate(&env, numerator, denominator)
    }

    pub fn set_presale_active(env: Env, caller: Address, active: bool) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;
        presale::set_active(&env, active)
    }

    pub fn set_native_price_feed(env: Env, caller: Address, feed: Address) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;
        presale::set_price_feed(&env, &feed)
    }

    /// Compra com o ativo estável. O comprador precisa ter aprovado este
    /// contrato como spender de `usd_amount` no token de pagamento.
    pub fn buy_presale(env: Env, buyer: Address, usd_amount: i128) -> Result<i128, HashLierreError> {
        buyer.require_auth();
        storage::bump_critical_storage(&env);

        presale::buy(&env, &buyer, usd_amount)
    }

    pub fn buy_presale_native(
        env: Env,
        buyer: Address,
        native_amount: i128,
    ) -> Result<PresaleQuote, HashLierreError> {
        buyer.require_auth();
        storage::bump_critical_storage(&env);

        presale::buy_native(&env, &buyer, native_amount, env.ledger().timestamp())
    }

    pub fn calculate_presale_return(env: Env, usd_amount: i128) -> Result<i128, HashLierreError> {
        presale::quote(&env, usd_amount)
    }

    pub fn calculate_presale_return_native(
        env: Env,
        native_amount: i128,
    ) -> Result<PresaleQuote, HashLierreError> {
        presale::quote_native(&env, native_amount, env.ledger().timestamp())
    }

    pub fn get_presale_stats(env: Env) -> PresaleStats {
        presale::stats(&env)
    }

    pub fn get_presale_contribution(env: Env, buyer: Address) -> i128 {
        storage::bump_contribution(&env, &buyer);
        storage::get_contribution(&env, &buyer)
    }

    pub fn get_presale_config(env: Env) -> Option<PresaleConfig> {
        storage::get_presale_config(&env)
    }

    pub fn get_presale_price(env: Env) -> Result<i128, HashLierreError> {
        presale::price_per_token(&storage::get_presale_rate(&env))
    }

    pub fn get_native_price(env: Env) -> Result<PriceData, HashLierreError> {
        oracle::read_price(&env, env.ledger().timestamp())
    }

    //
    // AIRDROP
    //

    pub fn set_merkle_root(env: Env, caller: Address, root: BytesN<32>) -> Result<(), HashLierreError> {
        admin::authorize(&env, &caller)?;
        airdrop::set_root(&env, &root);
        Ok(())
    }

    pub fn claim_airdrop(
        env: Env,
        user: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), HashLierreError> {
        user.require_auth();
        storage::bump_critical_storage(&env);

        airdrop::claim(&env, &user, amount, &proof)
    }

    pub fn get_merkle_root(env: Env) -> Option<BytesN<32>> {
        storage::get_merkle_root(&env)
    }

    pub fn has_claimed(env: Env, user: Address) -> bool {
        storage::has_claimed(&env, &user)
    }

    /// Folha esperada para (endereço, amount), útil para conferir a árvore
    /// gerada off-chain.
    pub fn airdrop_leaf(env: Env, user: Address, amount: i128) -> BytesN<32> {
        airdrop::leaf(&env, &user, amount)
    }

    //
    // ADMIN
    //

    pub fn pause_staking(env: Env, caller: Address, paused: bool) -> Result<(), HashLierreError> {
        admin::pause_staking(&env, &caller, paused)
    }

    pub fn enable_emergency(env: Env, caller: Address, enabled: bool) -> Result<(), HashLierreError> {
        admin::enable_emergency(&env, &caller, enabled)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), HashLierreError> {
        admin::transfer_ownership(&env, &caller, &new_admin)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        storage::get_admin(&env)
    }

    pub fn is_staking_paused(env: Env) -> bool {
        storage::is_staking_paused(&env)
    }

    pub fn is_emergency_mode(env: Env) -> bool {
        storage::is_emergency_mode(&env)
    }

    //
    // PAINEL
    //

    pub fn get_contract_config(env: Env) -> ContractConfig {
        storage::bump_critical_storage(&env);
        ContractConfig {
            current_apr: storage::get_apr(&env),
            max_supply: storage::MAX_SUPPLY,
            min_stake_period: storage::MIN_STAKE_PERIOD,
            min_stake_amount: storage::MIN_STAKE_AMOUNT,
            max_apr: storage::MAX_APR,
            min_apr_change_interval: storage::MIN_APR_CHANGE_INTERVAL,
            last_apr_change: storage::get_last_apr_change(&env),
            is_staking_paused: storage::is_staking_paused(&env),
            is_emergency_mode: storage::is_emergency_mode(&env),
        }
    }

    pub fn get_global_stats(env: Env) -> GlobalStats {
        let apr = storage::get_apr(&env);
        GlobalStats {
            total_value_locked: storage::get_total_staked(&env),
            total_rewards: storage::get_total_rewards(&env),
            current_total_supply: storage::get_total_supply(&env),
            current_apr: apr,
            current_apy: governor::apy(apr),
        }
    }
}

//
// TESTES
//
