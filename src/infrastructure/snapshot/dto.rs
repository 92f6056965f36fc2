use serde::Deserialize;

use crate::domain::errors::{BoardError, BoardResult};
use crate::domain::market_data::{Coin, CoinId, PercentChange, Price, Symbol};

/// One entry of a CoinGecko `/coins/markets?sparkline=true` response
#[derive(Debug, Deserialize)]
pub struct MarketCoinDto {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub current_price: Option<f64>,
    #[serde(default, alias = "price_change")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, alias = "last_7days_price")]
    pub sparkline_in_7d: Option<SparklineDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SparklineDto {
    #[serde(default)]
    pub price: Vec<Option<f64>>,
}

impl MarketCoinDto {
    /// Convert the DTO into a domain coin, rejecting records the board cannot show
    pub fn to_domain_coin(&self) -> BoardResult<Coin> {
        let id = CoinId::new(self.id.as_str()).map_err(BoardError::Validation)?;
        let symbol = Symbol::new(self.symbol.clone())
            .map_err(|e| BoardError::Validation(format!("{}: {}", id, e)))?;

        let current_price = match self.current_price {
            Some(price) if price.is_finite() => Price::from(price),
            _ => {
                return Err(BoardError::Validation(format!("{}: missing current price", id)));
            }
        };

        let change = self
            .price_change_percentage_24h
            .filter(|change| change.is_finite())
            .unwrap_or_default();

        // Upstream pads gaps in the sparkline with nulls
        let history = self
            .sparkline_in_7d
            .as_ref()
            .map(|sparkline| sparkline.price.iter().flatten().copied().collect())
            .unwrap_or_default();

        Ok(Coin::new(id, symbol, self.name.clone(), current_price)
            .with_image_url(self.image.clone())
            .with_change(PercentChange::from(change))
            .with_history(history))
    }
}
