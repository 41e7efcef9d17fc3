#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use setup::{TestEnv, HLR, NATIVE, USD};

use hashlierre_token::{HashLierreError, PRICE_FRESHNESS_WINDOW};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, TryFromVal};

/// 0,12 USD com 8 decimais
const PRICE_12_CENTS: i128 = 12_000_000;

// ============================================================================
// ORÁCULO
// ============================================================================

#[test]
fn test_price_feed_must_be_set() {
    let t = TestEnv::new();
    t.open_presale();
    let buyer = Address::generate(&t.env);
    t.fund_native(&buyer, 1_000 * NATIVE);

    assert_eq!(
        t.client.try_buy_presale_native(&buyer, &(100 * NATIVE)),
        Err(Ok(HashLierreError::PriceFeedNotSet))
    );
    assert_eq!(
        t.client.try_get_native_price(),
        Err(Ok(HashLierreError::PriceFeedNotSet))
    );
}

#[test]
fn test_failing_feed_is_reported_as_unavailable() {
    let t = TestEnv::new();
    t.open_presale();
    // Feed registrado mas sem preço publicado: a chamada entra em pânico
    t.client.set_native_price_feed(&t.admin, &t.feed.address);

    assert_eq!(
        t.client.try_get_native_price(),
        Err(Ok(HashLierreError::PriceFeedUnavailable))
    );
    assert_eq!(
        t.client.try_calculate_presale_return_native(&(100 * NATIVE)),
        Err(Ok(HashLierreError::PriceFeedUnavailable))
    );
}

#[test]
fn test_non_positive_price_is_rejected() {
    let t = TestEnv::new();
    t.set_native_price(0);
    assert_eq!(
        t.client.try_get_native_price(),
        Err(Ok(HashLierreError::InvalidPrice))
    );

    t.feed.set_price(&-5, &8, &t.now());
    assert_eq!(
        t.client.try_get_native_price(),
        Err(Ok(HashLierreError::InvalidPrice))
    );
}

#[test]
fn test_freshness_window_is_inclusive() {
    let t = TestEnv::new();
    t.client.set_native_price_feed(&t.admin, &t.feed.address);

    t.feed
        .set_price(&PRICE_12_CENTS, &8, &(t.now() - PRICE_FRESHNESS_WINDOW - 1));
    assert_eq!(
        t.client.try_get_native_price(),
        Err(Ok(HashLierreError::StalePrice))
    );

    t.feed
        .set_price(&PRICE_12_CENTS, &8, &(t.now() - PRICE_FRESHNESS_WINDOW));
    assert_eq!(t.client.get_native_price().price, PRICE_12_CENTS);

    // Timestamp adiantado não é considerado velho
    t.feed.set_price(&PRICE_12_CENTS, &8, &(t.now() + 60));
    assert_eq!(t.client.get_native_price().updated_at, t.now() + 60);
}

#[test]
fn test_feed_cannot_be_the_token_itself() {
    let t = TestEnv::new();
    assert_eq!(
        t.client.try_set_native_price_feed(&t.admin, &t.contract_id),
        Err(Ok(HashLierreError::InvalidParameter))
    );
}

// ============================================================================
// COMPRAS
// ============================================================================

#[test]
fn test_quote_native_purchase() {
    let t = TestEnv::new();
    t.set_native_price(PRICE_12_CENTS);

    // 100 XLM a 0,12 = 12 USD = 160 HLR
    let quote = t.client.calculate_presale_return_native(&(100 * NATIVE));
    assert_eq!(quote.usd_value, 12 * USD);
    assert_eq!(quote.token_amount, 160 * HLR);

    assert_eq!(
        t.client.try_calculate_presale_return_native(&-1),
        Err(Ok(HashLierreError::InvalidParameter))
    );
}

#[test]
fn test_buy_with_native_asset() {
    let t = TestEnv::new();
    t.open_presale();
    t.set_native_price(PRICE_12_CENTS);
    let buyer = Address::generate(&t.env);
    t.fund_native(&buyer, 1_000 * NATIVE);

    let quote = t.client.buy_presale_native(&buyer, &(100 * NATIVE));

    assert_eq!(quote.usd_value, 12 * USD);
    assert_eq!(quote.token_amount, 160 * HLR);
    assert_eq!(t.client.balance(&buyer), 160 * HLR);
    assert_eq!(t.native_balance(&buyer), 900 * NATIVE);
    assert_eq!(t.native_balance(&t.treasury), 100 * NATIVE);
    assert_eq!(t.client.get_presale_contribution(&buyer), 12 * USD);

    let stats = t.client.get_presale_stats();
    assert_eq!(stats.total_raised, 12 * USD);
    assert_eq!(stats.native_total_raised, 100 * NATIVE);
    assert_eq!(stats.total_sold, 160 * HLR);

    let (_, data) = t.last_event("p_buy_nat").unwrap();
    let (native, usd, tokens) = <(i128, i128, i128)>::try_from_val(&t.env, &data).unwrap();
    assert_eq!((native, usd, tokens), (100 * NATIVE, 12 * USD, 160 * HLR));
}

#[test]
fn test_native_purchase_uses_usd_bounds() {
    let t = TestEnv::new();
    t.open_presale();
    t.set_native_price(PRICE_12_CENTS);
    let buyer = Address::generate(&t.env);
    t.fund_native(&buyer, 1_000 * NATIVE);

    // 10 XLM = 1,2 USD, abaixo do mínimo de 10 USD
    assert_eq!(
        t.client.try_buy_presale_native(&buyer, &(10 * NATIVE)),
        Err(Ok(HashLierreError::BelowMinimumPurchase))
    );
    assert_eq!(
        t.client.try_buy_presale_native(&buyer, &0),
        Err(Ok(HashLierreError::InvalidParameter))
    );
}

#[test]
fn test_both_assets_share_the_hard_cap() {
    let t = TestEnv::new();
    t.open_presale();
    t.client.configure_presale(
        &t.admin,
        &t.stable,
        &t.treasury,
        &(10 * USD),
        &(100 * USD),
        &(112 * USD),
    );
    t.set_native_price(PRICE_12_CENTS);

    let buyer = Address::generate(&t.env);
    t.fund_stable(&buyer, 100 * USD);
    t.fund_native(&buyer, 1_000 * NATIVE);

    t.client.buy_presale(&buyer, &(100 * USD));
    assert_eq!(
        t.client.try_buy_presale_native(&buyer, &(101 * NATIVE)),
        Err(Ok(HashLierreError::HardCapExceeded))
    );

    t.client.buy_presale_native(&buyer, &(100 * NATIVE));
    let stats = t.client.get_presale_stats();
    assert_eq!(stats.total_raised, 112 * USD);
    assert_eq!(stats.remaining_cap, 0);
    assert_eq!(t.client.get_presale_contribution(&buyer), 112 * USD);
}

#[test]
fn test_native_purchase_requires_funds() {
    let t = TestEnv::new();
    t.open_presale();
    t.set_native_price(PRICE_12_CENTS);
    let buyer = Address::generate(&t.env);

    assert_eq!(
        t.client.try_buy_presale_native(&buyer, &(100 * NATIVE)),
        Err(Ok(HashLierreError::PaymentFailed))
    );
    assert_eq!(t.client.balance(&buyer), 0);
    assert_eq!(t.client.get_presale_stats().native_total_raised, 0);
}

#[test]
fn test_native_purchase_needs_open_presale() {
    let t = TestEnv::new();
    t.set_native_price(PRICE_12_CENTS);
    let buyer = Address::generate(&t.env);
    t.fund_native(&buyer, 1_000 * NATIVE);

    assert_eq!(
        t.client.try_buy_presale_native(&buyer, &(100 * NATIVE)),
        Err(Ok(HashLierreError::PresaleInactive))
    );
}
