//! Interactive 2D light-reflection viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the simulation state
//! ([`Scene`]) and implements [`eframe::App`] to render the entities and
//! ray fan and to expose the control panel.

use eframe::App;
use glam::{Vec2, Vec3};
use rand::rng;
use sim_core::{body::Body, cascade::RayFan, config::RAY_COUNT_OPTIONS, ray::Ray, scene::Scene};

/// Length of each crosshair arm drawn over the light source.
const CROSSHAIR_LENGTH: f32 = 10.0;
/// Dash pattern for reflected rays.
const DASH_LENGTH: f32 = 5.0;
const GAP_LENGTH: f32 = 5.0;

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Resize the scene to the drawable area and forward pointer input.
/// 2. Advance one simulation tick via [`Scene::update`].
/// 3. Paint the ray fan, the entities, and the crosshair.
///
/// ### Fields
/// - `scene` - The simulation aggregate (entities, controllers, config).
/// - `rng` - Random number generator for target seeking and safe-position
///   fallback; the obstacle scatter keeps its own seeded stream.
/// - `fan` - Ray output of the last tick, redrawn every frame.
/// - `last_dt` - Frame delta of the last tick (for display only).
pub struct Viewer {
    scene: Scene,
    rng: rand::rngs::ThreadRng,
    fan: RayFan,
    last_dt: f32,
}

impl Viewer {
    /// Creates a viewer around a freshly generated scene.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            rng: rng(),
            fan: RayFan::default(),
            last_dt: 0.0,
        }
    }

    /// Converts a scene-space position to screen-space.
    ///
    /// Scene coordinates have their origin at the center of `rect` with
    /// positive y pointing up; the mapping is 1:1 in pixels.
    fn world_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(center.x + p.x, center.y - p.y)
    }

    /// Inverse of [`Viewer::world_to_screen`].
    fn screen_to_world(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        Vec2::new(p.x - center.x, center.y - p.y)
    }

    fn color32(c: Vec3) -> egui::Color32 {
        egui::Color32::from_rgb(
            (c.x * 255.0).round() as u8,
            (c.y * 255.0).round() as u8,
            (c.z * 255.0).round() as u8,
        )
    }

    fn draw_body(painter: &egui::Painter, rect: egui::Rect, body: &Body) {
        painter.circle_filled(
            Self::world_to_screen(body.pos, rect),
            body.radius,
            Self::color32(body.color),
        );
    }

    fn draw_ray(painter: &egui::Painter, rect: egui::Rect, ray: &Ray) {
        let a = Self::world_to_screen(ray.origin, rect);
        let b = Self::world_to_screen(ray.end(), rect);
        let color = Self::color32(ray.color);

        if ray.reflected {
            painter.extend(egui::Shape::dashed_line(
                &[a, b],
                egui::Stroke::new(1.0, color),
                DASH_LENGTH,
                GAP_LENGTH,
            ));
        } else {
            painter.line_segment([a, b], egui::Stroke::new(1.5, color));
        }
    }

    fn draw_crosshair(painter: &egui::Painter, rect: egui::Rect, center: Vec2) {
        let stroke = egui::Stroke::new(2.0, egui::Color32::RED);
        let h = [
            Self::world_to_screen(center - Vec2::new(CROSSHAIR_LENGTH, 0.0), rect),
            Self::world_to_screen(center + Vec2::new(CROSSHAIR_LENGTH, 0.0), rect),
        ];
        let v = [
            Self::world_to_screen(center - Vec2::new(0.0, CROSSHAIR_LENGTH), rect),
            Self::world_to_screen(center + Vec2::new(0.0, CROSSHAIR_LENGTH), rect),
        ];
        painter.line_segment(h, stroke);
        painter.line_segment(v, stroke);
    }

    /// Builds the bottom-right controls window. Its footprint matches the
    /// scene's reserved rectangle, so the simulation never places anything
    /// underneath it.
    fn ui_controls(&mut self, ctx: &egui::Context) {
        let panel = *self.scene.panel();

        egui::Window::new("Controls")
            .anchor(
                egui::Align2::RIGHT_BOTTOM,
                egui::vec2(-panel.margin, -panel.margin),
            )
            .fixed_size(egui::vec2(panel.width - 20.0, panel.height - 40.0))
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("obstacles:");
                    let mut count = self.scene.config().obstacle_count;
                    if ui
                        .add(egui::DragValue::new(&mut count).range(0..=50).speed(1.0))
                        .changed()
                    {
                        self.scene.set_obstacle_count(count);
                    }
                    if ui.button("Refresh").clicked() {
                        self.scene.refresh_obstacles();
                    }
                });

                let mut ray_count = self.scene.config().ray_count;
                egui::ComboBox::from_label("rays per emission")
                    .selected_text(ray_count.to_string())
                    .show_ui(ui, |ui| {
                        for option in RAY_COUNT_OPTIONS {
                            if ui
                                .selectable_value(&mut ray_count, option, option.to_string())
                                .clicked()
                            {
                                self.scene.set_ray_count(option);
                            }
                        }
                    });

                let mut reflections = self.scene.config().reflections_enabled;
                if ui.checkbox(&mut reflections, "reflections").changed() {
                    self.scene.set_reflections_enabled(reflections);
                }

                let mut auto_move = self.scene.config().light_auto_move;
                if ui.checkbox(&mut auto_move, "light auto-move").changed() {
                    self.scene.set_auto_move(auto_move);
                }

                ui.separator();
                ui.label(format!(
                    "obstacles placed = {}",
                    self.scene.obstacles().len()
                ));
                ui.label(format!(
                    "rays = {} primary + {} reflected",
                    self.fan.primary.len(),
                    self.fan.reflected.len()
                ));
                ui.label(format!("dt = {:.3} s", self.last_dt));
            });
    }

    /// Builds the central panel: input forwarding, one simulation tick, and
    /// all painting.
    fn ui_scene(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Keep simulation bounds in lockstep with the drawable area.
            self.scene.handle_window_resize(rect.width(), rect.height());

            // Forward pointer input in scene coordinates. Entity mutations
            // land before this frame's tick reads positions.
            if response.drag_started()
                && let Some(p) = response.interact_pointer_pos()
            {
                self.scene.pointer_pressed(Self::screen_to_world(p, rect));
            }
            if response.dragged()
                && let Some(p) = response.interact_pointer_pos()
            {
                self.scene.pointer_moved(Self::screen_to_world(p, rect));
            }
            if response.drag_stopped() {
                self.scene.pointer_released();
            }

            let dt = ctx.input(|i| i.stable_dt);
            self.last_dt = dt;
            self.fan = self.scene.update(dt, &mut self.rng);

            for ray in &self.fan.primary {
                Self::draw_ray(&painter, rect, ray);
            }
            for ray in &self.fan.reflected {
                Self::draw_ray(&painter, rect, ray);
            }

            for obstacle in self.scene.obstacles() {
                Self::draw_body(&painter, rect, obstacle);
            }
            Self::draw_body(&painter, rect, self.scene.main_object());
            Self::draw_body(&painter, rect, self.scene.light());
            Self::draw_crosshair(&painter, rect, self.scene.light().pos);

            // The scene animates continuously; keep frames coming.
            ctx.request_repaint();
        });
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_scene(ctx);
        self.ui_controls(ctx);
    }
}
