//! Scene aggregate: owns every entity and drives one simulation tick.

use crate::{
    body::Body,
    bounds::{Bounds, ControlPanel},
    cascade::{self, RayFan},
    config::{Config, RAY_COUNT_OPTIONS},
    drag::{DragState, Grab},
    motion::AutoMove,
    placement,
};
use glam::Vec2;
use rand::Rng;

/// Largest dt a single tick will integrate, so a stall never causes a jump.
const MAX_TICK_DT: f32 = 0.1;

const LIGHT_START: Vec2 = Vec2::new(-500.0, 0.0);

/// The scene owns the light source, the main object, the obstacle set, and
/// all controller state. Entities are mutated only through its methods, and
/// always before the ray cascade reads them within the same tick.
pub struct Scene {
    light: Body,
    main_object: Body,
    obstacles: Vec<Body>,
    bounds: Bounds,
    panel: ControlPanel,
    cfg: Config,
    drag: DragState,
    auto_move: AutoMove,
    scatter_counter: u64,
}

impl Scene {
    pub fn new() -> Self {
        let light = Body::light(LIGHT_START);
        let auto_move = AutoMove::new(light.pos);
        let mut scene = Self {
            light,
            main_object: Body::main_object(Vec2::ZERO),
            obstacles: Vec::new(),
            bounds: Bounds::default(),
            panel: ControlPanel::default(),
            cfg: Config::default(),
            drag: DragState::default(),
            auto_move,
            scatter_counter: 0,
        };
        scene.refresh_obstacles();
        scene
    }

    pub fn light(&self) -> &Body {
        &self.light
    }

    pub fn main_object(&self) -> &Body {
        &self.main_object
    }

    pub fn obstacles(&self) -> &[Body] {
        &self.obstacles
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Replaces the obstacle set wholesale with a fresh scatter.
    pub fn refresh_obstacles(&mut self) {
        self.scatter_counter += 1;
        self.obstacles = placement::scatter_obstacles(
            self.cfg.obstacle_count,
            self.scatter_counter,
            &self.light,
            &self.main_object,
            &self.bounds,
            &self.panel,
        );
    }

    pub fn set_obstacle_count(&mut self, count: usize) {
        self.cfg.obstacle_count = count;
        self.refresh_obstacles();
    }

    /// Sets the emission fan size; counts outside the supported set are
    /// ignored.
    pub fn set_ray_count(&mut self, count: usize) {
        if RAY_COUNT_OPTIONS.contains(&count) {
            self.cfg.ray_count = count;
        }
    }

    pub fn set_reflections_enabled(&mut self, enabled: bool) {
        self.cfg.reflections_enabled = enabled;
    }

    pub fn set_auto_move(&mut self, enabled: bool) {
        self.cfg.light_auto_move = enabled;
    }

    /// Advances one tick: motion first, then the ray cascade, so rays are
    /// always cast against a settled snapshot of entity positions.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> RayFan {
        let dt = dt.clamp(0.0, MAX_TICK_DT);

        if self.cfg.light_auto_move {
            self.auto_move.update(
                dt,
                &mut self.light,
                &self.main_object,
                &self.obstacles,
                &self.bounds,
                &self.panel,
                rng,
            );
        }

        cascade::trace(&self.light, &self.main_object, &self.obstacles, &self.cfg)
    }

    pub fn pointer_pressed(&mut self, pointer: Vec2) {
        if self.drag.press(pointer, &mut self.light, &mut self.main_object) == Some(Grab::Light) {
            // Manual control takes over from the auto-move controller.
            self.cfg.light_auto_move = false;
        }
    }

    pub fn pointer_moved(&mut self, pointer: Vec2) {
        self.drag.pointer_moved(
            pointer,
            &mut self.light,
            &mut self.main_object,
            &self.obstacles,
            &self.bounds,
        );
    }

    pub fn pointer_released(&mut self) {
        self.drag.release(&mut self.light, &mut self.main_object);
    }

    /// Updates the screen bounds and clamps every entity back inside them.
    ///
    /// Obstacles are only clamped, never re-scattered, so shrinking the
    /// window can leave them overlapping. Applying the same size twice
    /// changes nothing.
    pub fn handle_window_resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        self.light.pos = self.bounds.clamp(self.light.pos, self.light.radius);
        self.main_object.pos = self.bounds.clamp(self.main_object.pos, self.main_object.radius);
        for obstacle in &mut self.obstacles {
            obstacle.pos = self.bounds.clamp(obstacle.pos, obstacle.radius);
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
