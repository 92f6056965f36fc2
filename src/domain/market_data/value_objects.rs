use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Value Object - quoted price in the display currency
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - signed percent change over the quoting window
#[derive(Debug, Clone, Copy, PartialEq, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct PercentChange(f64);

impl PercentChange {
    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_gain(&self) -> bool {
        self.0 > 0.0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

/// Value Object - stable coin identifier from the upstream provider (e.g. "bitcoin")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Coin id cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CoinId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - ticker symbol, compared case-insensitively
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(from = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: String) -> Result<Self, String> {
        if symbol.trim().is_empty() {
            return Err("Symbol cannot be empty".to_string());
        }
        Ok(Self::from(symbol))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Tap comparison, folded the same way the stored ticker is
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw.trim().to_uppercase()
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.trim().to_uppercase())
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
