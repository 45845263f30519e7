//! Autonomous "seek a new random spot" behavior for the light source.
//!
//! Retargeting is tiered rejection sampling: each tier relaxes the minimum
//! travel distance and clearance until a candidate sticks, and a guaranteed
//! safe position backs the whole ladder. Every steering step is re-validated
//! before it commits; a bad step parks the light instead of retrying.

use crate::{
    body::Body,
    bounds::{Bounds, ControlPanel},
    placement::{self, Probe},
};
use glam::Vec2;
use rand::Rng;

/// Seconds between voluntary retargets.
const RETARGET_INTERVAL: f32 = 1.0;
/// Steering speed in units per second.
const LIGHT_SPEED: f32 = 50.0;
/// Draws per tier before relaxing to the next one.
const TIER_ATTEMPTS: u32 = 300;
/// (minimum travel distance, clearance) ladder, tightest tier first. The
/// exact values are empirical tunables; only the ordering is meaningful.
const SEEK_TIERS: [(f32, f32); 4] = [(400.0, 40.0), (250.0, 35.0), (150.0, 30.0), (75.0, 25.0)];
/// Draws for the safe-position fallback before settling on the corner.
const SAFE_ATTEMPTS: u32 = 100;
/// Extra screen padding around the light while seeking.
const SEEK_PADDING: f32 = 30.0;
/// Flat clearance applied when validating a single steering step.
const STEP_CLEARANCE: f32 = 20.0;
/// No steering happens once the light is this close to its target.
const ARRIVE_DISTANCE: f32 = 5.0;

/// Axis-aligned rectangle the seek sampling draws from: the screen padded
/// for the light, with the reserved panel column cut off on the right.
#[derive(Clone, Copy, Debug)]
struct SeekArea {
    min: Vec2,
    max: Vec2,
}

impl SeekArea {
    fn new(light_radius: f32, bounds: &Bounds, panel: &ControlPanel) -> Self {
        let padding = light_radius + SEEK_PADDING;
        let min = Vec2::new(
            -bounds.width * 0.5 + padding,
            -bounds.height * 0.5 + padding,
        );
        // A degenerate window collapses the area to its left edge instead of
        // producing an inverted sampling range.
        let max = Vec2::new(
            (panel.left_edge(bounds) - padding).max(min.x),
            (bounds.height * 0.5 - padding).max(min.y),
        );
        Self { min, max }
    }

    fn sample(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(self.min.x..=self.max.x),
            rng.random_range(self.min.y..=self.max.y),
        )
    }

    fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Deterministic default when even safe sampling fails: top-left inset.
    fn fallback_corner(&self, light_radius: f32) -> Vec2 {
        let padding = light_radius + SEEK_PADDING;
        Vec2::new(self.min.x + padding, self.max.y - padding)
    }
}

/// Auto-move controller state for the light source.
#[derive(Clone, Debug)]
pub struct AutoMove {
    timer: f32,
    target: Vec2,
}

impl AutoMove {
    pub fn new(target: Vec2) -> Self {
        Self { timer: 0.0, target }
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Advances the controller by `dt` seconds, steering `light`.
    ///
    /// A new target is chosen when the retarget interval elapses, the light
    /// arrives within one unit of the current target, or the target has
    /// become invalid (an obstacle moved onto it, the window shrank, ...).
    /// If the whole tier ladder fails, the light snaps to a safe position
    /// and skips steering for this tick.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        dt: f32,
        light: &mut Body,
        main_object: &Body,
        obstacles: &[Body],
        bounds: &Bounds,
        panel: &ControlPanel,
        rng: &mut impl Rng,
    ) {
        self.timer += dt;

        let needs_target = self.timer >= RETARGET_INTERVAL
            || light.pos.distance(self.target) < 1.0
            || !placement::valid_position(
                self.target,
                light.radius,
                Probe::Light,
                light,
                main_object,
                obstacles,
                bounds,
            );

        if needs_target {
            self.timer = 0.0;
            match pick_target(light, main_object, obstacles, bounds, panel, rng) {
                Some(target) => self.target = target,
                None => {
                    let safe = find_safe_position(light, main_object, obstacles, bounds, panel, rng);
                    light.pos = safe;
                    self.target = safe;
                    return;
                }
            }
        }

        self.steer(dt, light, main_object, obstacles, bounds, panel, rng);
    }

    fn steer(
        &mut self,
        dt: f32,
        light: &mut Body,
        main_object: &Body,
        obstacles: &[Body],
        bounds: &Bounds,
        panel: &ControlPanel,
        rng: &mut impl Rng,
    ) {
        let offset = self.target - light.pos;
        let distance = offset.length();
        if distance <= ARRIVE_DISTANCE {
            return;
        }

        // Capped so the light never overshoots its target in one tick.
        let step = (LIGHT_SPEED * dt).min(distance);
        let candidate = light.pos + offset.normalize_or_zero() * step;

        if step_is_valid(candidate, light.radius, main_object, obstacles, bounds, panel) {
            light.pos = candidate;
        } else {
            // Do not retry the same heading; park somewhere safe instead.
            let safe = find_safe_position(light, main_object, obstacles, bounds, panel, rng);
            light.pos = safe;
            self.target = safe;
        }
    }
}

/// Runs the tier ladder and returns the first valid candidate, if any.
fn pick_target(
    light: &Body,
    main_object: &Body,
    obstacles: &[Body],
    bounds: &Bounds,
    panel: &ControlPanel,
    rng: &mut impl Rng,
) -> Option<Vec2> {
    let area = SeekArea::new(light.radius, bounds, panel);
    for (min_travel, clearance) in SEEK_TIERS {
        for _ in 0..TIER_ATTEMPTS {
            let candidate = area.sample(rng);
            if candidate.distance(light.pos) < min_travel {
                continue;
            }
            if panel.covers(bounds, candidate) {
                continue;
            }
            if !clears_bodies(candidate, light.radius, clearance, main_object, obstacles) {
                continue;
            }
            if !area.contains(candidate) {
                continue;
            }
            return Some(candidate);
        }
    }
    None
}

fn clears_bodies(
    candidate: Vec2,
    radius: f32,
    clearance: f32,
    main_object: &Body,
    obstacles: &[Body],
) -> bool {
    if candidate.distance(main_object.pos) < radius + main_object.radius + clearance {
        return false;
    }
    obstacles
        .iter()
        .all(|o| candidate.distance(o.pos) >= radius + o.radius + clearance)
}

fn step_is_valid(
    candidate: Vec2,
    radius: f32,
    main_object: &Body,
    obstacles: &[Body],
    bounds: &Bounds,
    panel: &ControlPanel,
) -> bool {
    if panel.covers(bounds, candidate) {
        return false;
    }
    if !clears_bodies(candidate, radius, STEP_CLEARANCE, main_object, obstacles) {
        return false;
    }
    let padding = radius + STEP_CLEARANCE;
    candidate.x >= -bounds.width * 0.5 + padding
        && candidate.x <= panel.left_edge(bounds) - padding
        && candidate.y >= -bounds.height * 0.5 + padding
        && candidate.y <= bounds.height * 0.5 - padding
}

/// A position the light can always be parked at: sampled from the seek
/// rectangle and validated, else the deterministic fallback corner.
pub fn find_safe_position(
    light: &Body,
    main_object: &Body,
    obstacles: &[Body],
    bounds: &Bounds,
    panel: &ControlPanel,
    rng: &mut impl Rng,
) -> Vec2 {
    let area = SeekArea::new(light.radius, bounds, panel);
    for _ in 0..SAFE_ATTEMPTS {
        let candidate = area.sample(rng);
        if placement::valid_position(
            candidate,
            light.radius,
            Probe::Light,
            light,
            main_object,
            obstacles,
            bounds,
        ) {
            return candidate;
        }
    }
    area.fallback_corner(light.radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn default_scene() -> (Body, Body, Bounds, ControlPanel) {
        (
            Body::light(Vec2::new(-500.0, 0.0)),
            Body::main_object(Vec2::ZERO),
            Bounds::default(),
            ControlPanel::default(),
        )
    }

    #[test]
    fn retarget_picks_a_distant_valid_spot() {
        let (mut light, main_object, bounds, panel) = default_scene();
        let mut rng = StdRng::seed_from_u64(7);
        let mut auto = AutoMove::new(light.pos);

        // Target equals the light's position, so retargeting fires at once.
        auto.update(0.016, &mut light, &main_object, &[], &bounds, &panel, &mut rng);

        let target = auto.target();
        assert_ne!(target, Vec2::new(-500.0, 0.0));
        // At worst the loosest tier accepted the candidate.
        assert!(target.distance(Vec2::new(-500.0, 0.0)) >= 75.0);
        assert!(!panel.covers(&bounds, target));
        assert!(target.distance(main_object.pos) >= light.radius + main_object.radius + 25.0);
    }

    #[test]
    fn steering_is_capped_and_never_overshoots() {
        let (mut light, main_object, bounds, panel) = default_scene();
        let mut rng = StdRng::seed_from_u64(7);

        let target = Vec2::new(0.0, 300.0);
        let mut auto = AutoMove::new(target);
        let before = light.pos.distance(target);

        auto.update(0.1, &mut light, &main_object, &[], &bounds, &panel, &mut rng);

        // Timer has not elapsed and the target is valid, so this tick only
        // steers: 50 u/s * 0.1 s = 5 units toward the target.
        assert_eq!(auto.target(), target);
        let after = light.pos.distance(target);
        assert!((before - after - 5.0).abs() < 1e-3);
    }

    #[test]
    fn invalid_step_snaps_to_a_safe_position() {
        let (mut light, main_object, bounds, panel) = default_scene();
        let mut rng = StdRng::seed_from_u64(7);

        // An obstacle sits right in the steering path: the first step lands
        // within its 20-unit clearance and must be discarded.
        let blocker = Body::obstacle(Vec2::new(-470.0, 0.0), 0.5);
        let obstacles = [blocker.clone()];

        let target = Vec2::new(-300.0, 0.0);
        let mut auto = AutoMove::new(target);

        auto.update(0.1, &mut light, &main_object, &obstacles, &bounds, &panel, &mut rng);

        // The light was parked somewhere safe and the target follows it.
        assert_eq!(auto.target(), light.pos);
        assert!(light.pos.distance(blocker.pos) >= light.radius + blocker.radius + 20.0);
        assert!(!panel.covers(&bounds, light.pos));
    }

    #[test]
    fn elapsed_timer_forces_a_retarget() {
        let (mut light, main_object, bounds, panel) = default_scene();
        let mut rng = StdRng::seed_from_u64(7);

        // Perfectly good target, but the interval expires this tick.
        let target = Vec2::new(0.0, 300.0);
        let mut auto = AutoMove::new(target);

        auto.update(1.0, &mut light, &main_object, &[], &bounds, &panel, &mut rng);

        assert_ne!(auto.target(), target);
        assert!(!panel.covers(&bounds, auto.target()));
    }

    #[test]
    fn safe_position_falls_back_to_the_corner() {
        // A main object this large invalidates every sample, forcing the
        // deterministic corner.
        let light = Body::light(Vec2::new(-500.0, 0.0));
        let huge = Body::new(Vec2::ZERO, 2000.0, glam::Vec3::ONE);
        let bounds = Bounds::default();
        let panel = ControlPanel::default();
        let mut rng = StdRng::seed_from_u64(7);

        let safe = find_safe_position(&light, &huge, &[], &bounds, &panel, &mut rng);

        // Seek padding = 20 + 30 = 50: min.x = -590, max.y = 310, inset once
        // more by the padding.
        assert_eq!(safe, Vec2::new(-540.0, 260.0));
    }
}
