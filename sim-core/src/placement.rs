//! Obstacle scatter and the position-validity predicate it shares with the
//! auto-move controller.

use crate::{
    body::{self, Body},
    bounds::{Bounds, ControlPanel},
};
use glam::Vec2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Margin kept between scattered obstacles and the screen edge.
const SCATTER_MARGIN: f32 = 50.0;
/// Attempt budget for one scatter; placement under-fills rather than spins.
const SCATTER_ATTEMPTS: u32 = 1000;
/// Odd multiplier turning the scatter counter into a seed stream.
const SEED_MULTIPLIER: u64 = 2654435761;

const GRAY_MIN: f32 = 0.3;
const GRAY_MAX: f32 = 0.7;

/// Which entity a validity probe is placing. Clearances are tiered: probing
/// for the light source itself uses much tighter gaps than placing a new
/// obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Probe {
    Light,
    Obstacle,
}

impl Probe {
    fn clearance_to_light(self) -> f32 {
        match self {
            Probe::Light => 20.0,
            Probe::Obstacle => 100.0,
        }
    }

    fn clearance_to_main(self) -> f32 {
        match self {
            Probe::Light => 20.0,
            Probe::Obstacle => 80.0,
        }
    }

    fn clearance_to_obstacle(self) -> f32 {
        match self {
            Probe::Light => 20.0,
            Probe::Obstacle => 60.0,
        }
    }

    fn edge_padding(self) -> f32 {
        match self {
            Probe::Light => 20.0,
            Probe::Obstacle => 50.0,
        }
    }
}

/// Whether a circle of `radius` at `candidate` keeps the probe's clearance
/// from the light, the main object, every obstacle, and the screen edge.
///
/// A candidate equal to the light's current position skips the light check,
/// so probing the light's own location does not reject itself.
pub fn valid_position(
    candidate: Vec2,
    radius: f32,
    probe: Probe,
    light: &Body,
    main_object: &Body,
    obstacles: &[Body],
    bounds: &Bounds,
) -> bool {
    if candidate != light.pos {
        let min = radius + light.radius + probe.clearance_to_light();
        if candidate.distance(light.pos) < min {
            return false;
        }
    }

    let min = radius + main_object.radius + probe.clearance_to_main();
    if candidate.distance(main_object.pos) < min {
        return false;
    }

    for obstacle in obstacles {
        let min = radius + obstacle.radius + probe.clearance_to_obstacle();
        if candidate.distance(obstacle.pos) < min {
            return false;
        }
    }

    bounds.contains(candidate, radius + probe.edge_padding())
}

/// Scatters up to `count` obstacles by rejection sampling.
///
/// Candidates are drawn uniformly inside the screen minus a fixed margin and
/// rejected when they fall inside the reserved panel region or fail
/// [`valid_position`] against everything placed so far. The attempt budget
/// makes this a best-effort contract: a crowded scene may yield fewer
/// obstacles than requested.
///
/// The RNG is seeded from `seed_counter` alone, so the nth scatter of a
/// scene reproduces exactly regardless of wall clock or platform entropy.
pub fn scatter_obstacles(
    count: usize,
    seed_counter: u64,
    light: &Body,
    main_object: &Body,
    bounds: &Bounds,
    panel: &ControlPanel,
) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(seed_counter.wrapping_mul(SEED_MULTIPLIER));

    let half_w = (bounds.width * 0.5 - SCATTER_MARGIN).max(0.0);
    let half_h = (bounds.height * 0.5 - SCATTER_MARGIN).max(0.0);

    let mut obstacles = Vec::with_capacity(count);
    let mut attempts = 0;
    while obstacles.len() < count && attempts < SCATTER_ATTEMPTS {
        attempts += 1;
        let candidate = Vec2::new(
            rng.random_range(-half_w..=half_w),
            rng.random_range(-half_h..=half_h),
        );

        if panel.covers(bounds, candidate) {
            continue;
        }
        if !valid_position(
            candidate,
            body::OBSTACLE_RADIUS,
            Probe::Obstacle,
            light,
            main_object,
            &obstacles,
            bounds,
        ) {
            continue;
        }

        let gray = rng.random_range(GRAY_MIN..=GRAY_MAX);
        obstacles.push(Body::obstacle(candidate, gray));
    }
    obstacles
}
