use soroban_sdk::{contractclient, log, Env};
use crate::storage;
use crate::types::{HashLierreError, PriceData};

// ============================================================================
// ORACLE ADAPTER
// ============================================================================

/// Interface mínima do price feed (preço do ativo nativo em USD).
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeed {
    fn get_price(env: Env) -> PriceData;
}

/// Lê o preço do feed configurado e valida positividade e frescor.
///
/// # Erros
/// - `PriceFeedNotSet`: nenhum feed configurado
/// - `PriceFeedUnavailable`: a chamada ao feed falhou
/// - `InvalidPrice`: preço <= 0
/// - `StalePrice`: preço mais velho que `PRICE_FRESHNESS_WINDOW`
pub fn read_price(env: &Env, now: u64) -> Result<PriceData, HashLierreError> {
    let feed = storage::get_price_feed(env).ok_or(HashLierreError::PriceFeedNotSet)?;
    let client = PriceFeedClient::new(env, &feed);

    let data = match client.try_get_price() {
        Ok(Ok(data)) => data,
        _ => {
            log!(env, "price feed call failed", feed);
            return Err(HashLierreError::PriceFeedUnavailable);
        }
    };

    if data.price <= 0 {
        return Err(HashLierreError::InvalidPrice);
    }

    // Timestamp no futuro conta como idade zero
    let age = now.saturating_sub(data.updated_at);
    if age > storage::PRICE_FRESHNESS_WINDOW {
        log!(env, "stale price", data.updated_at, now);
        return Err(HashLierreError::StalePrice);
    }

    Ok(data)
}
