use glam::Vec2;

/// Scene rectangle inside the window, in physical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Largest rectangle of the given aspect ratio (width / height),
    /// centered in the container
    pub fn fit(container_width: f32, container_height: f32, aspect_ratio: f32) -> Self {
        let container_width = container_width.max(0.0);
        let container_height = container_height.max(0.0);

        let (width, height) = if container_width > container_height * aspect_ratio {
            (container_height * aspect_ratio, container_height)
        } else {
            (container_width, container_width / aspect_ratio)
        };

        Self {
            x: (container_width - width) * 0.5,
            y: (container_height - height) * 0.5,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wide_container_letterboxes_sides() {
        let viewport = Viewport::fit(1000.0, 300.0, 2.0);
        assert_relative_eq!(viewport.width, 600.0);
        assert_relative_eq!(viewport.height, 300.0);
        assert_relative_eq!(viewport.x, 200.0);
        assert_relative_eq!(viewport.y, 0.0);
    }

    #[test]
    fn test_tall_container_letterboxes_top_and_bottom() {
        let viewport = Viewport::fit(400.0, 800.0, 1.0);
        assert_relative_eq!(viewport.width, 400.0);
        assert_relative_eq!(viewport.height, 400.0);
        assert_relative_eq!(viewport.x, 0.0);
        assert_relative_eq!(viewport.y, 200.0);
    }

    #[test]
    fn test_exact_fit() {
        let viewport = Viewport::fit(1600.0, 800.0, 2.0);
        assert_eq!(viewport.size(), Vec2::new(1600.0, 800.0));
        assert_eq!((viewport.x, viewport.y), (0.0, 0.0));
    }

    #[test]
    fn test_minimized_window_is_empty() {
        assert!(Viewport::fit(0.0, 0.0, 2.0).is_empty());
        assert!(!Viewport::fit(640.0, 480.0, 2.0).is_empty());
    }
}
