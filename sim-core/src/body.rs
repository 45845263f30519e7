use glam::{Vec2, Vec3};

pub const LIGHT_RADIUS: f32 = 20.0;
pub const MAIN_OBJECT_RADIUS: f32 = 25.0;
pub const OBSTACLE_RADIUS: f32 = 30.0;

/// Warm yellow, shared with the primary ray tier.
pub const LIGHT_COLOR: Vec3 = Vec3::new(1.0, 0.95, 0.4);
pub const MAIN_OBJECT_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// A circular scene entity: the light source, the main object, or one of the
/// scattered obstacles.
#[derive(Clone, Debug)]
pub struct Body {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Vec3,
    pub dragging: bool,
}

impl Body {
    /// Radius must be strictly positive; a degenerate circle is a logic
    /// fault, not a runtime condition.
    pub fn new(pos: Vec2, radius: f32, color: Vec3) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            pos,
            radius,
            color,
            dragging: false,
        }
    }

    pub fn light(pos: Vec2) -> Self {
        Self::new(pos, LIGHT_RADIUS, LIGHT_COLOR)
    }

    pub fn main_object(pos: Vec2) -> Self {
        Self::new(pos, MAIN_OBJECT_RADIUS, MAIN_OBJECT_COLOR)
    }

    /// Obstacles are gray; `gray` is the brightness of all three channels.
    pub fn obstacle(pos: Vec2, gray: f32) -> Self {
        Self::new(pos, OBSTACLE_RADIUS, Vec3::splat(gray))
    }

    /// Surface overlap test against another body.
    pub fn overlaps(&self, other: &Body) -> bool {
        self.pos.distance(other.pos) < self.radius + other.radius
    }

    /// Circular hit test for pointer picking.
    pub fn contains(&self, p: Vec2) -> bool {
        self.pos.distance(p) < self.radius
    }
}
