#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::{TestEnv, DAY, HLR};

use hashlierre_token::{HashLierreError, MAX_SUPPLY, MIN_STAKE_PERIOD, SECONDS_PER_YEAR};
use soroban_sdk::TryFromVal;

fn expected_reward(amount: i128, apr: i128, seconds: u64) -> i128 {
    amount * apr * seconds as i128 / (10_000 * SECONDS_PER_YEAR as i128)
}

fn assert_custody(t: &TestEnv) {
    assert_eq!(
        t.client.balance(&t.contract_id),
        t.client.total_staked(),
        "cofre diverge de total_staked"
    );
}

// ============================================================================
// STAKE
// ============================================================================

#[test]
fn test_stake_moves_balance_into_vault() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);

    t.client.stake(&user, &(1_000 * HLR));

    let record = t.client.stakes(&user);
    assert_eq!(record.amount, 1_000 * HLR);
    assert_eq!(record.initial_stake_time, t.now());
    assert_eq!(record.last_accrual_time, t.now());
    assert_eq!(t.client.balance(&user), 0);
    assert_eq!(t.client.total_staked(), 1_000 * HLR);
    assert_eq!(t.client.get_total_value_locked(), 1_000 * HLR);
    assert_eq!(t.client.total_supply(), 1_000 * HLR);
    assert_custody(&t);
}

#[test]
fn test_stake_minimum_is_inclusive() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);

    let result = t.client.try_stake(&user, &(100 * HLR - 1));
    assert_eq!(result, Err(Ok(HashLierreError::StakeBelowMinimum)));

    t.client.stake(&user, &(100 * HLR));
    assert_eq!(t.client.stakes(&user).amount, 100 * HLR);
}

#[test]
fn test_stake_requires_balance() {
    let t = TestEnv::new();
    let user = t.create_user(150 * HLR);

    let result = t.client.try_stake(&user, &(151 * HLR));
    assert_eq!(result, Err(Ok(HashLierreError::InsufficientBalance)));
    assert_eq!(t.client.total_staked(), 0);
}

#[test]
fn test_second_stake_compounds_pending_reward() {
    let t = TestEnv::new();
    let user = t.create_user(1_100 * HLR);

    t.client.stake(&user, &(1_000 * HLR));
    let first_stake_time = t.now();
    t.advance(30 * DAY);

    let pending = t.client.pending_reward(&user);
    assert_eq!(pending, expected_reward(1_000 * HLR, 1200, 30 * DAY));

    t.client.stake(&user, &(100 * HLR));

    let record = t.client.stakes(&user);
    assert_eq!(record.amount, 1_100 * HLR + pending);
    assert_eq!(record.reward_debt, pending);
    assert_eq!(record.initial_stake_time, first_stake_time);
    assert_eq!(record.last_accrual_time, t.now());
    assert_eq!(t.client.total_rewards_distributed(), pending);
    assert_eq!(t.client.total_supply(), 1_100 * HLR + pending);
    assert_eq!(t.client.pending_reward(&user), 0);
    assert_custody(&t);

    let (_, data) = t.last_event("staked").unwrap();
    let (amount, compounded) = <(i128, i128)>::try_from_val(&t.env, &data).unwrap();
    assert_eq!(amount, 100 * HLR);
    assert_eq!(compounded, pending);
}

// ============================================================================
// UNSTAKE
// ============================================================================

#[test]
fn test_unstake_respects_lock_period() {
    let t = TestEnv::new();
    let user = t.create_user(500 * HLR);
    t.client.stake(&user, &(500 * HLR));

    t.advance(MIN_STAKE_PERIOD - 1);
    let result = t.client.try_unstake(&user, &(100 * HLR));
    assert_eq!(result, Err(Ok(HashLierreError::StakeLocked)));
    assert_eq!(t.client.get_time_until_unstake(&user), 1);

    t.advance(1);
    assert_eq!(t.client.get_time_until_unstake(&user), 0);
    t.client.unstake(&user, &(100 * HLR));
    assert_eq!(t.client.balance(&user), 100 * HLR);
}

#[test]
fn test_top_up_keeps_original_lock() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);
    let first_stake = t.now();
    t.client.stake(&user, &(500 * HLR));

    t.advance(7 * DAY);
    t.client.stake(&user, &(500 * HLR));
    assert_eq!(t.client.stakes(&user).initial_stake_time, first_stake);

    // 14 dias menos 1 segundo desde o primeiro stake
    t.advance(7 * DAY - 1);
    assert_eq!(
        t.client.try_unstake(&user, &(100 * HLR)),
        Err(Ok(HashLierreError::StakeLocked))
    );

    t.advance(1);
    assert_eq!(t.now() - first_stake, MIN_STAKE_PERIOD);
    t.client.unstake(&user, &(100 * HLR));
    assert_eq!(t.client.balance(&user), 100 * HLR);
    assert_custody(&t);
}

#[test]
fn test_unstake_after_a_year_keeps_reward_in_position() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);
    t.client.stake(&user, &(1_000 * HLR));

    t.advance(365 * DAY);
    assert_eq!(t.client.pending_reward(&user), 120 * HLR);

    t.client.unstake(&user, &(1_000 * HLR));

    let record = t.client.stakes(&user);
    assert_eq!(record.amount, 120 * HLR);
    assert_eq!(record.reward_debt, 120 * HLR);
    assert_eq!(t.client.balance(&user), 1_000 * HLR);
    assert_eq!(t.client.total_staked(), 120 * HLR);
    assert_eq!(t.client.total_rewards_distributed(), 120 * HLR);
    assert_eq!(t.client.total_supply(), 1_120 * HLR);
    assert_custody(&t);

    let (_, data) = t.last_event("unstaked").unwrap();
    let (amount, reward) = <(i128, i128)>::try_from_val(&t.env, &data).unwrap();
    assert_eq!(amount, 1_000 * HLR);
    assert_eq!(reward, 120 * HLR);
}

#[test]
fn test_full_exit_resets_position() {
    let t = TestEnv::new();
    let user = t.create_user(300 * HLR);
    t.client.stake(&user, &(200 * HLR));
    t.advance(20 * DAY);

    let everything = t.client.stakes(&user).amount + t.client.pending_reward(&user);
    t.client.unstake(&user, &everything);

    let record = t.client.stakes(&user);
    assert_eq!(record.amount, 0);
    assert_eq!(record.reward_debt, 0);
    assert_eq!(record.initial_stake_time, 0);
    assert_eq!(t.client.total_staked(), 0);
    assert_eq!(t.client.balance(&user), 100 * HLR + everything);
    assert_custody(&t);

    // Nova posição recomeça o lock
    t.advance(DAY);
    t.client.stake(&user, &(100 * HLR));
    assert_eq!(t.client.stakes(&user).initial_stake_time, t.now());
    assert_eq!(t.client.get_time_until_unstake(&user), MIN_STAKE_PERIOD);
}

#[test]
fn test_unstake_rejects_bad_amounts() {
    let t = TestEnv::new();
    let user = t.create_user(200 * HLR);
    t.client.stake(&user, &(200 * HLR));
    t.advance(MIN_STAKE_PERIOD);

    assert_eq!(
        t.client.try_unstake(&user, &0),
        Err(Ok(HashLierreError::InvalidParameter))
    );
    // Disponível = posição + recompensa liquidada na própria chamada
    let too_much = t.client.stakes(&user).amount + t.client.pending_reward(&user) + 1;
    assert_eq!(
        t.client.try_unstake(&user, &too_much),
        Err(Ok(HashLierreError::InsufficientStake))
    );

    let stranger = t.create_user(0);
    assert_eq!(
        t.client.try_unstake(&stranger, &1),
        Err(Ok(HashLierreError::InsufficientStake))
    );
}

// ============================================================================
// CLAIM
// ============================================================================

#[test]
fn test_claim_reward_restakes() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);
    t.client.stake(&user, &(1_000 * HLR));
    t.advance(10 * DAY);

    let expected = expected_reward(1_000 * HLR, 1200, 10 * DAY);
    let claimed = t.client.claim_reward(&user);

    assert_eq!(claimed, expected);
    assert_eq!(t.client.stakes(&user).amount, 1_000 * HLR + expected);
    assert_eq!(t.client.balance(&user), 0);
    assert_eq!(t.client.total_rewards_distributed(), expected);
    assert_eq!(t.client.pending_reward(&user), 0);
    assert_custody(&t);

    assert_eq!(
        t.client.try_claim_reward(&user),
        Err(Ok(HashLierreError::NoRewardToClaim))
    );
}

#[test]
fn test_claim_without_position() {
    let t = TestEnv::new();
    let user = t.create_user(0);
    assert_eq!(
        t.client.try_claim_reward(&user),
        Err(Ok(HashLierreError::NoActiveStake))
    );
}

#[test]
fn test_claim_uses_current_apr_for_whole_interval() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);
    t.client.stake(&user, &(1_000 * HLR));

    // Primeira troca de APR só é possível um ano após o deploy
    t.advance(365 * DAY);
    t.client.set_apr(&t.admin, &600);

    let claimed = t.client.claim_reward(&user);
    assert_eq!(claimed, expected_reward(1_000 * HLR, 600, 365 * DAY));
}

// ============================================================================
// PAUSA E EMERGÊNCIA
// ============================================================================

#[test]
fn test_paused_staking_blocks_only_new_stakes() {
    let t = TestEnv::new();
    let user = t.create_user(500 * HLR);
    t.client.stake(&user, &(200 * HLR));

    t.client.pause_staking(&t.admin, &true);
    assert_eq!(
        t.client.try_stake(&user, &(200 * HLR)),
        Err(Ok(HashLierreError::StakingDisabled))
    );

    t.advance(MIN_STAKE_PERIOD);
    t.client.claim_reward(&user);
    t.client.unstake(&user, &(100 * HLR));

    t.client.pause_staking(&t.admin, &false);
    t.client.stake(&user, &(200 * HLR));
}

#[test]
fn test_emergency_unstake_returns_principal_only() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);
    t.client.stake(&user, &(1_000 * HLR));
    t.advance(5 * DAY);

    assert_eq!(
        t.client.try_emergency_unstake(&user),
        Err(Ok(HashLierreError::EmergencyModeNotEnabled))
    );

    t.client.enable_emergency(&t.admin, &true);
    assert!(t.client.pending_reward(&user) > 0);

    let returned = t.client.emergency_unstake(&user);
    assert_eq!(returned, 1_000 * HLR);
    assert_eq!(t.client.balance(&user), 1_000 * HLR);
    assert_eq!(t.client.stakes(&user).amount, 0);
    assert_eq!(t.client.total_staked(), 0);
    assert_eq!(t.client.total_rewards_distributed(), 0);
    assert_eq!(t.client.total_supply(), 1_000 * HLR);
    assert_custody(&t);

    assert_eq!(
        t.client.try_emergency_unstake(&user),
        Err(Ok(HashLierreError::NoActiveStake))
    );
}

#[test]
fn test_emergency_mode_gates() {
    let t = TestEnv::new();
    let user = t.create_user(1_000 * HLR);
    t.client.stake(&user, &(500 * HLR));
    t.advance(DAY);

    t.client.enable_emergency(&t.admin, &true);

    assert_eq!(
        t.client.try_stake(&user, &(100 * HLR)),
        Err(Ok(HashLierreError::StakingDisabled))
    );
    assert_eq!(
        t.client.try_claim_reward(&user),
        Err(Ok(HashLierreError::ClaimsDisabled))
    );
    assert_eq!(t.client.get_time_until_unstake(&user), 0);

    // Lock ignorado em emergência
    t.client.unstake(&user, &(100 * HLR));
    assert_eq!(t.client.balance(&user), 600 * HLR);
    assert_custody(&t);
}

// ============================================================================
// TETO DE SUPPLY
// ============================================================================

#[test]
fn test_rewards_never_breach_max_supply() {
    let t = TestEnv::new();
    let user = t.create_user(1_100 * HLR);
    t.client.stake(&user, &(1_000 * HLR));

    let whale = t.create_user(MAX_SUPPLY - 1_100 * HLR - 5);
    assert_eq!(t.client.total_supply(), MAX_SUPPLY - 5);
    assert_eq!(t.client.balance(&whale), MAX_SUPPLY - 1_100 * HLR - 5);

    t.advance(365 * DAY);

    assert_eq!(
        t.client.try_claim_reward(&user),
        Err(Ok(HashLierreError::RewardExceedsMaxSupply))
    );
    assert_eq!(
        t.client.try_stake(&user, &(100 * HLR)),
        Err(Ok(HashLierreError::RewardExceedsMaxSupply))
    );

    // Unstake limita a recompensa à folga e devolve o principal
    t.client.unstake(&user, &(1_000 * HLR));
    assert_eq!(t.client.total_supply(), MAX_SUPPLY);
    assert_eq!(t.client.balance(&user), 1_100 * HLR);
    assert_eq!(t.client.stakes(&user).amount, 5);
    assert_eq!(t.client.total_rewards_distributed(), 5);
    assert_custody(&t);
}
