use glam::Vec2;

/// Screen bounds in scene coordinates (origin at the center, Y-up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Clamps a point so that a circle of `padding` radius around it stays
    /// fully on screen.
    pub fn clamp(&self, p: Vec2, padding: f32) -> Vec2 {
        let half = self.half_extents() - Vec2::splat(padding);
        p.clamp(-half, half)
    }

    pub fn contains(&self, p: Vec2, padding: f32) -> bool {
        let half = self.half_extents() - Vec2::splat(padding);
        p.x >= -half.x && p.x <= half.x && p.y >= -half.y && p.y <= half.y
    }
}

/// Reserved UI region, anchored to the bottom-right corner of the screen.
///
/// Obstacle scatter and light retargeting treat this region as off limits so
/// entities never hide behind the on-screen controls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPanel {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            width: 484.0,
            height: 275.0,
            margin: 20.0,
        }
    }
}

impl ControlPanel {
    /// Left edge of the reserved column, in scene coordinates.
    pub fn left_edge(&self, bounds: &Bounds) -> f32 {
        bounds.width * 0.5 - self.width - self.margin
    }

    /// Bottom edge of the reserved region.
    pub fn bottom_edge(&self, bounds: &Bounds) -> f32 {
        -bounds.height * 0.5 + self.margin
    }

    /// Whether `p` falls inside the reserved region.
    ///
    /// The region is open-ended toward the bottom-right corner: anything to
    /// the right of the panel's left edge and above its bottom margin counts
    /// as covered.
    pub fn covers(&self, bounds: &Bounds, p: Vec2) -> bool {
        p.x > self.left_edge(bounds) && p.y > self.bottom_edge(bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_padded_circle_inside() {
        let bounds = Bounds::new(800.0, 600.0);

        let p = bounds.clamp(Vec2::new(1000.0, -1000.0), 25.0);
        assert_eq!(p, Vec2::new(375.0, -275.0));

        // A point already inside is untouched.
        let q = Vec2::new(10.0, -20.0);
        assert_eq!(bounds.clamp(q, 25.0), q);
    }

    #[test]
    fn contains_respects_padding() {
        let bounds = Bounds::new(800.0, 600.0);

        assert!(bounds.contains(Vec2::new(370.0, 0.0), 25.0));
        assert!(!bounds.contains(Vec2::new(380.0, 0.0), 25.0));
        assert!(!bounds.contains(Vec2::new(0.0, -290.0), 25.0));
    }

    #[test]
    fn panel_covers_bottom_right_corner() {
        let bounds = Bounds::default();
        let panel = ControlPanel::default();

        // left_edge = 640 - 484 - 20 = 136, bottom_edge = -360 + 20 = -340.
        assert_eq!(panel.left_edge(&bounds), 136.0);
        assert_eq!(panel.bottom_edge(&bounds), -340.0);

        assert!(panel.covers(&bounds, Vec2::new(300.0, -100.0)));
        assert!(!panel.covers(&bounds, Vec2::new(0.0, -100.0)));
        assert!(!panel.covers(&bounds, Vec2::new(300.0, -350.0)));
    }
}
