//! Per-tick ray cascade: emission, nearest-hit resolution, and bounded
//! reflection expansion.
//!
//! The typical tick looks like:
//! 1. Emit `cfg.ray_count` primary rays uniformly spaced around the light.
//! 2. Truncate each ray at its nearest hit against the main object and the
//!    obstacles (linear scan; entity counts stay small).
//! 3. When reflections are enabled, spawn one child per hit through an
//!    explicit LIFO work list until every branch misses, runs out of
//!    length, or reaches [`ray::MAX_REFLECTIONS`].

use crate::{
    body::Body,
    config::Config,
    geometry,
    ray::{self, Ray},
};
use glam::Vec2;
use std::f32::consts::TAU;

/// Output of one tick of the cascade engine: the draw contract for the
/// rendering side.
#[derive(Debug, Default)]
pub struct RayFan {
    pub primary: Vec<Ray>,
    pub reflected: Vec<Ray>,
}

impl RayFan {
    pub fn len(&self) -> usize {
        self.primary.len() + self.reflected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.reflected.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ray> {
        self.primary.iter().chain(self.reflected.iter())
    }
}

struct Hit {
    dist: f32,
    center: Vec2,
}

/// Nearest eps-guarded intersection of `r` against the main object and
/// every obstacle. The light itself never occludes rays.
fn nearest_hit(r: &Ray, main_object: &Body, obstacles: &[Body]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for body in std::iter::once(main_object).chain(obstacles.iter()) {
        if let Some(dist) = geometry::intersect(r.origin, r.dir, r.length, body.pos, body.radius)
            && best.as_ref().is_none_or(|h| dist < h.dist)
        {
            best = Some(Hit {
                dist,
                center: body.pos,
            });
        }
    }
    best
}

/// Builds the child ray for a hit, one bounce deeper than its parent.
fn spawn_reflection(parent: &Ray, hit_point: Vec2, normal: Vec2) -> Ray {
    let bounces = parent.bounces + 1;
    Ray {
        origin: hit_point,
        dir: geometry::reflect(parent.dir, normal),
        length: ray::bounce_length(bounces),
        color: ray::bounce_color(bounces),
        bounces,
        reflected: true,
    }
}

/// Traces the full ray fan for one tick from the current entity geometry.
///
/// Disabling reflections short-circuits child spawning entirely: the
/// returned fan then contains no reflected rays at all, not merely hidden
/// ones.
pub fn trace(light: &Body, main_object: &Body, obstacles: &[Body], cfg: &Config) -> RayFan {
    let mut fan = RayFan {
        primary: Vec::with_capacity(cfg.ray_count),
        reflected: Vec::new(),
    };
    let mut pending: Vec<Ray> = Vec::new();

    for i in 0..cfg.ray_count {
        let angle = TAU * i as f32 / cfg.ray_count as f32;
        let mut r = Ray {
            origin: light.pos,
            dir: Vec2::from_angle(angle),
            length: ray::MAX_RAY_LENGTH,
            color: ray::bounce_color(0),
            bounces: 0,
            reflected: false,
        };

        if let Some(hit) = nearest_hit(&r, main_object, obstacles) {
            r.length = hit.dist;
            if cfg.reflections_enabled && r.bounces < ray::MAX_REFLECTIONS {
                let hit_point = r.end();
                let normal = (hit_point - hit.center).normalize_or_zero();
                pending.push(spawn_reflection(&r, hit_point, normal));
            }
        }
        fan.primary.push(r);
    }

    // LIFO expansion; depth is bounded, so the list stays small.
    while let Some(mut r) = pending.pop() {
        if let Some(hit) = nearest_hit(&r, main_object, obstacles) {
            r.length = hit.dist;
            if r.bounces < ray::MAX_REFLECTIONS {
                let hit_point = r.end();
                let normal = (hit_point - hit.center).normalize_or_zero();
                pending.push(spawn_reflection(&r, hit_point, normal));
            }
        }
        fan.reflected.push(r);
    }

    fan
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn far_main_object() -> Body {
        // Parked well outside every ray's reach.
        Body::main_object(Vec2::new(50_000.0, 50_000.0))
    }

    #[test]
    fn emission_is_uniform_and_full_length_without_hits() {
        let light = Body::light(Vec2::ZERO);
        let cfg = Config::default();

        let fan = trace(&light, &far_main_object(), &[], &cfg);

        assert_eq!(fan.primary.len(), cfg.ray_count);
        assert!(fan.reflected.is_empty());

        for (i, r) in fan.primary.iter().enumerate() {
            let expected = Vec2::from_angle(TAU * i as f32 / cfg.ray_count as f32);
            assert!((r.dir - expected).length() < 1e-5);
            assert_eq!(r.length, ray::MAX_RAY_LENGTH);
            assert_eq!(r.bounces, 0);
            assert!(!r.reflected);
        }
    }

    #[test]
    fn ray_is_truncated_at_nearest_surface() {
        let light = Body::light(Vec2::ZERO);
        let obstacles = [
            Body::obstacle(Vec2::new(300.0, 0.0), 0.5),
            // A second, farther obstacle on the same line must not win.
            Body::obstacle(Vec2::new(600.0, 0.0), 0.5),
        ];
        let cfg = Config::default();

        let fan = trace(&light, &far_main_object(), &obstacles, &cfg);

        // Ray 0 travels along +X; the near surface of the first obstacle
        // sits at x = 270.
        assert!((fan.primary[0].length - 270.0).abs() < 1e-3);
    }

    #[test]
    fn reflection_depth_never_exceeds_bound() {
        let light = Body::light(Vec2::ZERO);
        // Box the light in so almost every branch keeps bouncing.
        let obstacles = [
            Body::obstacle(Vec2::new(100.0, 0.0), 0.5),
            Body::obstacle(Vec2::new(-100.0, 0.0), 0.5),
            Body::obstacle(Vec2::new(0.0, 100.0), 0.5),
            Body::obstacle(Vec2::new(0.0, -100.0), 0.5),
        ];
        let cfg = Config::default();

        let fan = trace(&light, &far_main_object(), &obstacles, &cfg);

        assert!(!fan.reflected.is_empty());
        for r in fan.iter() {
            assert!(r.bounces <= ray::MAX_REFLECTIONS);
        }
        for r in &fan.reflected {
            assert!(r.reflected);
            assert!(r.bounces >= 1);
        }
    }

    #[test]
    fn disabling_reflections_short_circuits_spawning() {
        let light = Body::light(Vec2::ZERO);
        let obstacles = [
            Body::obstacle(Vec2::new(100.0, 0.0), 0.5),
            Body::obstacle(Vec2::new(-100.0, 0.0), 0.5),
        ];
        let cfg = Config {
            reflections_enabled: false,
            ..Config::default()
        };

        let fan = trace(&light, &far_main_object(), &obstacles, &cfg);

        assert!(fan.reflected.is_empty());
        assert_eq!(fan.len(), cfg.ray_count);
    }

    #[test]
    fn first_bounce_mirrors_off_the_surface() {
        let light = Body::light(Vec2::ZERO);
        let obstacles = [Body::obstacle(Vec2::new(300.0, 0.0), 0.5)];
        let cfg = Config::default();

        let fan = trace(&light, &far_main_object(), &obstacles, &cfg);

        // The +X primary hits head on at (270, 0); its child comes straight
        // back with the first-bounce budget and color.
        let child = fan
            .reflected
            .iter()
            .find(|r| r.bounces == 1 && (r.origin - Vec2::new(270.0, 0.0)).length() < 1e-2)
            .expect("head-on child ray");

        assert!((child.dir - Vec2::new(-1.0, 0.0)).length() < 1e-5);
        assert_eq!(child.length, ray::bounce_length(1));
        assert_eq!(child.color, ray::bounce_color(1));
    }

    #[test]
    fn child_colors_follow_the_palette() {
        let light = Body::light(Vec2::ZERO);
        let obstacles = [
            Body::obstacle(Vec2::new(100.0, 0.0), 0.5),
            Body::obstacle(Vec2::new(-100.0, 0.0), 0.5),
            Body::obstacle(Vec2::new(0.0, 100.0), 0.5),
            Body::obstacle(Vec2::new(0.0, -100.0), 0.5),
        ];
        let cfg = Config::default();

        let fan = trace(&light, &far_main_object(), &obstacles, &cfg);

        for r in &fan.reflected {
            assert_eq!(r.color, ray::bounce_color(r.bounces));
            assert_ne!(r.color, Vec3::ZERO);
        }
    }
}
