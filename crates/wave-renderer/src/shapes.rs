//! Flat 2D shapes in canvas space
//!
//! Canvas coordinates are pixels of the scene viewport with the origin in
//! the bottom-left corner and y pointing up.

use crate::color::Color;
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    Rect {
        min: Vec2,
        max: Vec2,
        color: Color,
    },
    /// Region between an x-sorted polyline and a horizontal baseline
    Area {
        points: Vec<Vec2>,
        baseline: f32,
        color: Color,
    },
    /// Open polyline; `dash` gives the on/off length when set
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        dash: Option<f32>,
        color: Color,
    },
    /// Line with a triangular head at `to`
    Arrow {
        from: Vec2,
        to: Vec2,
        width: f32,
        head: f32,
        color: Color,
    },
}

/// Everything a painter draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub size: Vec2,
    pub background: Color,
    pub shapes: Vec<Shape>,
}

impl Canvas {
    pub fn new(size: Vec2, background: Color) -> Self {
        Self {
            size,
            background,
            shapes: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(Shape::Circle {
            center,
            radius,
            color,
        });
    }

    pub fn rect(&mut self, min: Vec2, max: Vec2, color: Color) {
        self.push(Shape::Rect { min, max, color });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(Shape::Polyline {
            points: vec![from, to],
            width,
            dash: None,
            color,
        });
    }

    pub fn arrow(&mut self, from: Vec2, to: Vec2, width: f32, head: f32, color: Color) {
        self.push(Shape::Arrow {
            from,
            to,
            width,
            head,
            color,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
