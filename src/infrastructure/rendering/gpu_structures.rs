use bytemuck::{Pod, Zeroable};

use crate::domain::chart::{ChartGeometry, ChartPoint, PriceTrend, Viewport};

/// Element type tag read by the shader
pub const ELEMENT_LINE: f32 = 0.0;
pub const ELEMENT_FILL: f32 = 1.0;

/// GPU representation of one chart vertex, positions in clip space
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position_x: f32,
    pub position_y: f32,
    /// 0 = price line, 1 = area fill under the line
    pub element_type: f32,
    /// 1 = gain colour, 0 = loss colour
    pub color_type: f32,
}

impl LineVertex {
    pub fn line_vertex(x: f32, y: f32, trend: PriceTrend) -> Self {
        Self { position_x: x, position_y: y, element_type: ELEMENT_LINE, color_type: color_type(trend) }
    }

    pub fn fill_vertex(x: f32, y: f32, trend: PriceTrend) -> Self {
        Self { position_x: x, position_y: y, element_type: ELEMENT_FILL, color_type: color_type(trend) }
    }
}

fn color_type(trend: PriceTrend) -> f32 {
    match trend {
        PriceTrend::Gain => 1.0,
        PriceTrend::Loss => 0.0,
    }
}

/// Builds vertex buffers from normalized chart geometry
pub struct LineGeometry;

impl LineGeometry {
    /// Line-strip vertices, one per price point
    pub fn create_line_vertices(geometry: &ChartGeometry, viewport: &Viewport) -> Vec<LineVertex> {
        geometry
            .points
            .iter()
            .map(|point| {
                let (x, y) = viewport.to_clip(point);
                LineVertex::line_vertex(x, y, geometry.trend)
            })
            .collect()
    }

    /// Triangle-strip vertices filling the area between the line and the plot bottom
    pub fn create_fill_vertices(geometry: &ChartGeometry, viewport: &Viewport) -> Vec<LineVertex> {
        if geometry.len() < 2 {
            return Vec::new();
        }

        let baseline = viewport.to_clip(&ChartPoint::new(0.0, 1.0)).1;
        geometry
            .points
            .iter()
            .flat_map(|point| {
                let (x, y) = viewport.to_clip(point);
                [
                    LineVertex::fill_vertex(x, y, geometry.trend),
                    LineVertex::fill_vertex(x, baseline, geometry.trend),
                ]
            })
            .collect()
    }

    /// Raw bytes for a vertex buffer upload
    pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::ChartTransform;

    #[test]
    fn vertex_is_sixteen_bytes() {
        assert_eq!(std::mem::size_of::<LineVertex>(), 16);
    }

    #[test]
    fn single_point_has_no_fill() {
        let geometry = ChartTransform::new().transform(&[1.0], PriceTrend::Gain);
        assert!(LineGeometry::create_fill_vertices(&geometry, &Viewport::default()).is_empty());
        assert_eq!(LineGeometry::create_line_vertices(&geometry, &Viewport::default()).len(), 1);
    }
}
