use super::entities::ChartGeometry;
use super::value_objects::{ChartPoint, PriceTrend};
use crate::domain::market_data::Coin;

/// Smallest price span used as a divisor
pub const PRICE_EPSILON: f64 = 1e-12;

/// Y used for flat series and for prices that are not finite
pub const MID_LINE: f64 = 0.5;

/// Maps a price history onto the unit square.
///
/// X is spread evenly from 0 to 1, Y is normalized against the series range and
/// inverted so the highest price sits at the top (y = 0). The transform is pure
/// and total: empty, flat and single-point series all produce a defined result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartTransform;

impl ChartTransform {
    pub fn new() -> Self {
        Self
    }

    pub fn transform(&self, prices: &[f64], trend: PriceTrend) -> ChartGeometry {
        if prices.is_empty() {
            return ChartGeometry::empty(trend);
        }

        let x_step = (prices.len() - 1).max(1) as f64;
        let range = Self::finite_range(prices);

        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| {
                let x = i as f64 / x_step;
                let y = match range {
                    Some((min, max)) if max > min && price.is_finite() => {
                        // halves keep the span finite for prices near f64::MAX
                        let span = (max / 2.0 - min / 2.0).max(PRICE_EPSILON);
                        let t = (price / 2.0 - min / 2.0) / span;
                        1.0 - t.clamp(0.0, 1.0)
                    }
                    _ => MID_LINE,
                };
                ChartPoint::new(x, y)
            })
            .collect();

        ChartGeometry { points, trend }
    }

    /// Trend follows the series' own endpoints.
    pub fn transform_series(&self, prices: &[f64]) -> ChartGeometry {
        self.transform(prices, PriceTrend::from_series(prices))
    }

    /// Trend follows the coin's reported change percent.
    pub fn transform_coin(&self, coin: &Coin) -> ChartGeometry {
        self.transform(
            &coin.price_history,
            PriceTrend::from_change_percent(coin.price_change_percent.value()),
        )
    }

    fn finite_range(prices: &[f64]) -> Option<(f64, f64)> {
        prices.iter().copied().filter(|p| p.is_finite()).fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((min, max)) => Some((min.min(p), max.max(p))),
        })
    }
}
