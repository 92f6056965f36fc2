use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Value Object - gain/loss classification that picks the line colour
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PriceTrend {
    Gain,
    Loss,
}

impl PriceTrend {
    /// Positive change is a gain; zero and negative are a loss.
    pub fn from_change_percent(percent: f64) -> Self {
        if percent > 0.0 { Self::Gain } else { Self::Loss }
    }

    /// Trend of a chronological series, comparing last against first.
    pub fn from_series(prices: &[f64]) -> Self {
        match (prices.first(), prices.last()) {
            (Some(first), Some(last)) if last - first > 0.0 => Self::Gain,
            _ => Self::Loss,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Gain => Color::LIGHT_GREEN,
            Self::Loss => Color::RED,
        }
    }
}

/// Value Object - point in the unit drawing area, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Value Object - pixel surface the unit geometry is stretched onto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub padding_top: f32,
    pub padding_bottom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 390, height: 300, padding_top: 30.0, padding_bottom: 50.0 }
    }
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Default::default() }
    }

    pub fn with_padding(mut self, top: f32, bottom: f32) -> Self {
        self.padding_top = top;
        self.padding_bottom = bottom;
        self
    }

    /// Height left for the plot once padding is removed, never negative
    pub fn plot_height(&self) -> f32 {
        (self.height as f32 - self.padding_top - self.padding_bottom).max(0.0)
    }

    pub fn to_pixels(&self, point: &ChartPoint) -> (f32, f32) {
        let x = point.x as f32 * self.width as f32;
        let y = self.padding_top + point.y as f32 * self.plot_height();
        (x, y)
    }

    /// Convert a unit-square point to clip space (-1..1, y up)
    pub fn to_clip(&self, point: &ChartPoint) -> (f32, f32) {
        let (px, py) = self.to_pixels(point);
        let w = self.width.max(1) as f32;
        let h = self.height.max(1) as f32;
        (px / w * 2.0 - 1.0, 1.0 - py / h * 2.0)
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn to_hex(&self) -> u32 {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// `#rrggbb` for CSS hosts
    pub fn to_css(&self) -> String {
        format!("#{:06x}", self.to_hex())
    }

    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.231, b: 0.188, a: 1.0 };
    pub const LIGHT_GREEN: Color = Color { r: 0.549, g: 0.929, b: 0.627, a: 1.0 };
    pub const TAB: Color = Color { r: 0.204, g: 0.204, b: 0.204, a: 1.0 };
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}
