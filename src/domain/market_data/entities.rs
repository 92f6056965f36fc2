pub use super::value_objects::{CoinId, PercentChange, Price, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Domain entity - one coin's display snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: Symbol,
    pub name: String,
    pub image_url: String,
    pub current_price: Price,
    pub price_change_percent: PercentChange,
    /// Chronological closing prices over the history window
    pub price_history: Vec<f64>,
}

impl Coin {
    pub fn new(id: CoinId, symbol: Symbol, name: impl Into<String>, current_price: Price) -> Self {
        Self {
            id,
            symbol,
            name: name.into(),
            image_url: String::new(),
            current_price,
            price_change_percent: PercentChange::default(),
            price_history: Vec::new(),
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    pub fn with_change(mut self, percent: PercentChange) -> Self {
        self.price_change_percent = percent;
        self
    }

    pub fn with_history(mut self, history: Vec<f64>) -> Self {
        self.price_history = history;
        self
    }

    pub fn is_gain(&self) -> bool {
        self.price_change_percent.is_gain()
    }
}

/// Domain entity - ordered, id-unique coin snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinCollection {
    coins: Vec<Coin>,
}

impl CoinCollection {
    /// Build from upstream order. A repeated id keeps its first occurrence.
    pub fn new(coins: Vec<Coin>) -> Self {
        let mut seen = HashSet::new();
        let coins = coins.into_iter().filter(|coin| seen.insert(coin.id.clone())).collect();
        Self { coins }
    }

    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    pub fn first(&self) -> Option<&Coin> {
        self.coins.first()
    }

    pub fn get(&self, id: &CoinId) -> Option<&Coin> {
        self.coins.iter().find(|coin| &coin.id == id)
    }

    pub fn contains(&self, id: &CoinId) -> bool {
        self.get(id).is_some()
    }

    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Coin> {
        self.coins.iter().find(|coin| coin.symbol.matches(symbol))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Coin> {
        self.coins.iter()
    }
}

impl From<Vec<Coin>> for CoinCollection {
    fn from(coins: Vec<Coin>) -> Self {
        Self::new(coins)
    }
}
