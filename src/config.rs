//! Board configuration: which coin opens first, how prices are formatted and
//! how big the chart surface is.

use serde::{Deserialize, Serialize};

use crate::domain::chart::Viewport;
use crate::domain::errors::BoardResult;
use crate::domain::market_data::Symbol;
use crate::formatting::CurrencyFormatter;

pub const DEFAULT_SYMBOL: &str = "BTC";
pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub default_symbol: Symbol,
    pub locale: String,
    pub currency: String,
    pub viewport: Viewport,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_symbol: Symbol::from(DEFAULT_SYMBOL),
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            viewport: Viewport::default(),
        }
    }
}

impl BoardConfig {
    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Formatter for the configured codes. `None` when a code is unsupported,
    /// in which case price labels render empty.
    pub fn currency_formatter(&self) -> Option<CurrencyFormatter> {
        CurrencyFormatter::from_codes(&self.locale, &self.currency).ok()
    }
}
