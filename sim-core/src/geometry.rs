use glam::Vec2;

/// Minimum travel distance before a hit counts.
///
/// A ray spawned on a circle's boundary would otherwise re-intersect its own
/// source surface at `t ≈ 0` and bounce in place forever.
pub const HIT_EPS: f32 = 1e-3;

/// Distance along `dir` at which a ray from `origin` first crosses the
/// circle at `center` with `radius`, if it does so within `max_len`.
///
/// Solves the ray/circle quadratic and keeps the near root. Roots behind the
/// origin, closer than [`HIT_EPS`], or beyond `max_len` are discarded.
pub fn intersect(origin: Vec2, dir: Vec2, max_len: f32, center: Vec2, radius: f32) -> Option<f32> {
    let to_circle = center - origin;
    let a = dir.dot(dir);
    let b = -2.0 * to_circle.dot(dir);
    let c = to_circle.dot(to_circle) - radius * radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let t = (-b - discriminant.sqrt()) / (2.0 * a);
    if t < HIT_EPS || t >= max_len {
        return None;
    }
    Some(t)
}

/// Mirror reflection of `dir` about the unit `normal`.
pub fn reflect(dir: Vec2, normal: Vec2) -> Vec2 {
    dir - 2.0 * dir.dot(normal) * normal
}
