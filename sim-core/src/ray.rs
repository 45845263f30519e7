use glam::{Vec2, Vec3};

/// Hard cap on reflection depth.
pub const MAX_REFLECTIONS: u32 = 3;
/// How far a primary ray can travel.
pub const MAX_RAY_LENGTH: f32 = 2000.0;
/// Length kept by the first reflection, as a fraction of [`MAX_RAY_LENGTH`].
pub const REFLECTION_LENGTH_FACTOR: f32 = 0.05;

const PRIMARY_COLOR: Vec3 = Vec3::new(1.0, 0.95, 0.4);
const FIRST_BOUNCE_COLOR: Vec3 = Vec3::new(1.0, 0.65, 0.2);
const DEEP_BOUNCE_COLOR: Vec3 = Vec3::new(1.0, 0.3, 0.1);

/// One light ray segment of the current tick.
///
/// Rays are transient: the whole fan is rebuilt from entity geometry every
/// tick and never reused across ticks.
#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: Vec2,
    /// Unit direction of travel.
    pub dir: Vec2,
    pub length: f32,
    pub color: Vec3,
    /// 0 for primary rays, up to [`MAX_REFLECTIONS`] for children.
    pub bounces: u32,
    pub reflected: bool,
}

impl Ray {
    pub fn end(&self) -> Vec2 {
        self.origin + self.dir * self.length
    }
}

/// Palette keyed on bounce depth: warm yellow primaries, orange first
/// bounce, red for everything deeper.
pub fn bounce_color(bounces: u32) -> Vec3 {
    match bounces {
        0 => PRIMARY_COLOR,
        1 => FIRST_BOUNCE_COLOR,
        _ => DEEP_BOUNCE_COLOR,
    }
}

/// Length budget for a reflected ray, shrinking by 0.7 per extra bounce.
pub fn bounce_length(bounces: u32) -> f32 {
    debug_assert!(bounces >= 1);
    MAX_RAY_LENGTH * REFLECTION_LENGTH_FACTOR * 0.7f32.powi(bounces as i32 - 1)
}
