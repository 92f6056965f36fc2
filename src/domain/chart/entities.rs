use super::value_objects::{ChartPoint, Color, PriceTrend, Viewport};
use serde::{Deserialize, Serialize};

/// Normalized polyline of a price history plus its trend token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub trend: PriceTrend,
}

impl ChartGeometry {
    pub fn empty(trend: PriceTrend) -> Self {
        Self { points: Vec::new(), trend }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn color(&self) -> Color {
        self.trend.color()
    }

    /// Points stretched onto a pixel surface
    pub fn to_pixels(&self, viewport: &Viewport) -> Vec<(f32, f32)> {
        self.points.iter().map(|p| viewport.to_pixels(p)).collect()
    }

    /// `[x0, y0, x1, y1, ...]` for hosts that want a flat buffer
    pub fn flatten(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}
