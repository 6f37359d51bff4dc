use crate::color::Color;
use crate::shapes::{Canvas, Shape};
use glam::Vec2;
use std::f32::consts::{FRAC_PI_6, TAU};

/// Default number of segments around a circle
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 24;

/// Vertex format for shape rendering with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self {
            pos: pos.to_array(),
            color: color.to_array(),
        }
    }

    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: &[wgpu::VertexAttribute] = &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRIBUTES,
        }
    }
}

/// Indexed triangle list
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn base(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Quad from four corners in winding order
    fn quad(&mut self, corners: [Vec2; 4], color: Color) {
        let base = self.base();
        self.vertices
            .extend(corners.iter().map(|&corner| Vertex::new(corner, color)));
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Converts a [`Canvas`] into a triangle mesh
///
/// Shapes with non-finite coordinates are skipped; an unstable simulation
/// simply stops drawing instead of poisoning the vertex buffer.
pub struct Tessellator {
    mesh: Mesh,
    circle_segments: u32,
}

impl Tessellator {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            mesh: Mesh::new(),
            circle_segments: circle_segments.max(3),
        }
    }

    pub fn circle_segments(&self) -> u32 {
        self.circle_segments
    }

    /// Tessellate the background and every shape, in painting order
    pub fn tessellate(&mut self, canvas: &Canvas) -> &Mesh {
        self.mesh.clear();

        self.add_rect(Vec2::ZERO, canvas.size, canvas.background);
        for shape in &canvas.shapes {
            match shape {
                Shape::Circle {
                    center,
                    radius,
                    color,
                } => self.add_circle(*center, *radius, *color),
                Shape::Rect { min, max, color } => self.add_rect(*min, *max, *color),
                Shape::Area {
                    points,
                    baseline,
                    color,
                } => self.add_area(points, *baseline, *color),
                Shape::Polyline {
                    points,
                    width,
                    dash,
                    color,
                } => self.add_polyline(points, *width, *dash, *color),
                Shape::Arrow {
                    from,
                    to,
                    width,
                    head,
                    color,
                } => self.add_arrow(*from, *to, *width, *head, *color),
            }
        }

        &self.mesh
    }

    fn add_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }

        let base = self.mesh.base();
        self.mesh.vertices.push(Vertex::new(center, color));
        for i in 0..self.circle_segments {
            let angle = i as f32 / self.circle_segments as f32 * TAU;
            let rim = center + radius * Vec2::from_angle(angle);
            self.mesh.vertices.push(Vertex::new(rim, color));
        }
        for i in 0..self.circle_segments {
            let next = (i + 1) % self.circle_segments;
            self.mesh
                .indices
                .extend_from_slice(&[base, base + 1 + i, base + 1 + next]);
        }
    }

    fn add_rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        if !min.is_finite() || !max.is_finite() || color.a <= 0.0 {
            return;
        }
        self.mesh.quad(
            [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)],
            color,
        );
    }

    fn add_area(&mut self, points: &[Vec2], baseline: f32, color: Color) {
        if points.len() < 2 || !baseline.is_finite() || points.iter().any(|p| !p.is_finite()) {
            return;
        }

        // Column pairs: surface point, then its foot on the baseline
        let base = self.mesh.base();
        for point in points {
            self.mesh.vertices.push(Vertex::new(*point, color));
            self.mesh
                .vertices
                .push(Vertex::new(Vec2::new(point.x, baseline), color));
        }
        for i in 0..points.len() as u32 - 1 {
            let top = base + 2 * i;
            let foot = top + 1;
            let next_top = top + 2;
            let next_foot = top + 3;
            self.mesh
                .indices
                .extend_from_slice(&[top, foot, next_foot, top, next_foot, next_top]);
        }
    }

    fn add_polyline(&mut self, points: &[Vec2], width: f32, dash: Option<f32>, color: Color) {
        match dash {
            Some(dash) if dash > 0.0 => self.add_dashed(points, width, dash, color),
            _ => {
                for pair in points.windows(2) {
                    self.add_segment(pair[0], pair[1], width, color);
                }
            }
        }
    }

    fn add_dashed(&mut self, points: &[Vec2], width: f32, dash: f32, color: Color) {
        let mut on = true;
        let mut remaining = dash;

        for pair in points.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let length = start.distance(end);
            if !length.is_finite() || length <= f32::EPSILON {
                continue;
            }
            let dir = (end - start) / length;

            let mut t = 0.0;
            while t < length {
                let step = remaining.min(length - t);
                if on {
                    self.add_segment(start + dir * t, start + dir * (t + step), width, color);
                }
                t += step;
                remaining -= step;
                if remaining <= 0.0 {
                    on = !on;
                    remaining = dash;
                }
            }
        }
    }

    fn add_segment(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let delta = to - from;
        let length = delta.length();
        if !length.is_finite() || length <= f32::EPSILON {
            return;
        }

        let normal = delta.perp() / length * (width * 0.5);
        self.mesh
            .quad([from - normal, to - normal, to + normal, from + normal], color);
    }

    fn add_arrow(&mut self, from: Vec2, to: Vec2, width: f32, head: f32, color: Color) {
        let delta = to - from;
        if !delta.is_finite() || delta.length() <= f32::EPSILON {
            return;
        }
        self.add_segment(from, to, width, color);

        let back = -delta.normalize();
        let left = to + Vec2::from_angle(FRAC_PI_6).rotate(back) * head;
        let right = to + Vec2::from_angle(-FRAC_PI_6).rotate(back) * head;

        let base = self.mesh.base();
        self.mesh.vertices.extend([
            Vertex::new(to, color),
            Vertex::new(left, color),
            Vertex::new(right, color),
        ]);
        self.mesh
            .indices
            .extend_from_slice(&[base, base + 1, base + 2]);
    }
}

impl Default for Tessellator {
    fn default() -> Self {
        Self::new(DEFAULT_CIRCLE_SEGMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    fn canvas() -> Canvas {
        Canvas::new(Vec2::new(200.0, 100.0), palette::BLACK)
    }

    fn assert_valid(mesh: &Mesh) {
        assert_eq!(mesh.indices.len() % 3, 0);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
    }

    #[test]
    fn test_background_only() {
        let mut tessellator = Tessellator::default();
        let mesh = tessellator.tessellate(&canvas());
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_valid(mesh);
    }

    #[test]
    fn test_circle_fan() {
        let mut canvas = canvas();
        canvas.circle(Vec2::new(50.0, 50.0), 10.0, palette::SAND);

        let mut tessellator = Tessellator::new(12);
        let mesh = tessellator.tessellate(&canvas);

        assert_eq!(mesh.vertices.len(), 4 + 13);
        assert_eq!(mesh.triangle_count(), 2 + 12);
        assert_valid(mesh);

        let rim = Vec2::from(mesh.vertices[5].pos);
        assert!((rim.distance(Vec2::new(50.0, 50.0)) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_area_columns() {
        let mut canvas = canvas();
        canvas.push(Shape::Area {
            points: vec![
                Vec2::new(0.0, 60.0),
                Vec2::new(100.0, 80.0),
                Vec2::new(200.0, 60.0),
            ],
            baseline: 0.0,
            color: palette::WATER,
        });

        let mut tessellator = Tessellator::default();
        let mesh = tessellator.tessellate(&canvas);

        assert_eq!(mesh.vertices.len(), 4 + 6);
        assert_eq!(mesh.triangle_count(), 2 + 4);
        assert_valid(mesh);
        assert_eq!(mesh.vertices[5].pos, [0.0, 0.0]);
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let points = vec![Vec2::ZERO, Vec2::new(100.0, 0.0)];

        let mut solid = canvas();
        solid.push(Shape::Polyline {
            points: points.clone(),
            width: 2.0,
            dash: None,
            color: palette::WHITE,
        });
        let mut dashed = canvas();
        dashed.push(Shape::Polyline {
            points,
            width: 2.0,
            dash: Some(10.0),
            color: palette::WHITE,
        });

        let mut tessellator = Tessellator::default();
        assert_eq!(tessellator.tessellate(&solid).triangle_count(), 2 + 2);

        let mesh = tessellator.tessellate(&dashed);
        // Five dashes and five gaps over 100 px
        assert_eq!(mesh.triangle_count(), 2 + 5 * 2);
        assert_valid(mesh);
    }

    #[test]
    fn test_arrow_head_points_at_target() {
        let mut canvas = canvas();
        canvas.arrow(Vec2::ZERO, Vec2::new(50.0, 0.0), 2.0, 10.0, palette::RED);

        let mut tessellator = Tessellator::default();
        let mesh = tessellator.tessellate(&canvas);
        assert_eq!(mesh.triangle_count(), 2 + 2 + 1);
        assert_valid(mesh);

        let head = &mesh.vertices[mesh.vertices.len() - 3..];
        assert_eq!(head[0].pos, [50.0, 0.0]);
        assert!(head[1].pos[0] < 50.0 && head[2].pos[0] < 50.0);
        assert!(head[1].pos[1] * head[2].pos[1] < 0.0);
    }

    #[test]
    fn test_degenerate_shapes_are_skipped() {
        let mut canvas = canvas();
        canvas.arrow(Vec2::ONE, Vec2::ONE, 2.0, 10.0, palette::CYAN);
        canvas.circle(Vec2::new(f32::NAN, 0.0), 5.0, palette::WHITE);
        canvas.line(Vec2::ZERO, Vec2::new(f32::INFINITY, 0.0), 1.0, palette::WHITE);

        let mut tessellator = Tessellator::default();
        assert_eq!(tessellator.tessellate(&canvas).triangle_count(), 2);
    }
}
