//! Pointer-driven dragging with smoothing and revert-on-overlap.

use crate::{body::Body, bounds::Bounds};
use glam::Vec2;

/// Smoothing factor applied to the raw pointer position each move event.
const POINTER_LERP: f32 = 0.8;

/// Which entity is currently grabbed. Obstacles are not draggable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grab {
    Light,
    MainObject,
}

/// Drag controller state.
#[derive(Clone, Debug, Default)]
pub struct DragState {
    grabbed: Option<Grab>,
    current: Vec2,
    target: Vec2,
}

impl DragState {
    pub fn grabbed(&self) -> Option<Grab> {
        self.grabbed
    }

    /// Hit-tests the draggables and grabs the first match; the light wins
    /// when both circles are under the pointer.
    pub fn press(&mut self, pointer: Vec2, light: &mut Body, main_object: &mut Body) -> Option<Grab> {
        let grab = if light.contains(pointer) {
            light.dragging = true;
            Some(Grab::Light)
        } else if main_object.contains(pointer) {
            main_object.dragging = true;
            Some(Grab::MainObject)
        } else {
            None
        };

        if grab.is_some() {
            // Start both smoothing endpoints at the pointer so the grabbed
            // body does not jump on the first move event.
            self.current = pointer;
            self.target = pointer;
        }
        self.grabbed = grab;
        grab
    }

    pub fn release(&mut self, light: &mut Body, main_object: &mut Body) {
        light.dragging = false;
        main_object.dragging = false;
        self.grabbed = None;
    }

    /// Applies one pointer move: smooth, clamp, commit, then revert if the
    /// dragged body ends up overlapping an obstacle or the other draggable.
    pub fn pointer_moved(
        &mut self,
        pointer: Vec2,
        light: &mut Body,
        main_object: &mut Body,
        obstacles: &[Body],
        bounds: &Bounds,
    ) {
        self.target = pointer;
        self.current = self.current.lerp(self.target, POINTER_LERP);

        let Some(grab) = self.grabbed else {
            return;
        };

        let (dragged, other) = match grab {
            Grab::Light => (light, main_object),
            Grab::MainObject => (main_object, light),
        };
        if !dragged.dragging {
            return;
        }

        let old_pos = dragged.pos;
        dragged.pos = bounds.clamp(self.current, dragged.radius);

        let collided = obstacles.iter().any(|o| dragged.overlaps(o)) || dragged.overlaps(other);
        if collided {
            dragged.pos = old_pos;
        }
    }
}
