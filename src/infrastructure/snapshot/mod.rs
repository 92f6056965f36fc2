//! Decoding of upstream market snapshots into domain coins.

pub mod dto;

pub use dto::*;

use crate::domain::errors::BoardResult;
use crate::domain::logging::LogComponent;
use crate::domain::market_data::Coin;
use crate::{log_debug, log_warn};

/// Decode a JSON array of market entries.
///
/// Malformed JSON is an error. Entries that parse but cannot be displayed
/// (no id, no symbol, no finite price) are skipped with a warning.
pub fn decode_market_snapshot(json: &str) -> BoardResult<Vec<Coin>> {
    let entries: Vec<MarketCoinDto> = serde_json::from_str(json)?;
    let coins: Vec<Coin> = entries
        .iter()
        .filter_map(|entry| match entry.to_domain_coin() {
            Ok(coin) => Some(coin),
            Err(err) => {
                log_warn!(LogComponent::Infrastructure("Snapshot"), "skipping entry: {}", err);
                None
            }
        })
        .collect();

    log_debug!(
        LogComponent::Infrastructure("Snapshot"),
        "decoded {} of {} market entries",
        coins.len(),
        entries.len()
    );
    Ok(coins)
}
