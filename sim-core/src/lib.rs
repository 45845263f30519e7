//! Core 2-D light-reflection scene simulation library.
//!
//! Main components:
//! - [`body`] - circular scene entities (light, main object, obstacles).
//! - [`bounds`] - screen bounds and the reserved control-panel region.
//! - [`geometry`] - ray/circle intersection and mirror reflection.
//! - [`ray`] - ray segments, bounce palette and attenuation.
//! - [`cascade`] - per-tick ray emission and reflection expansion.
//! - [`placement`] - constrained obstacle scatter and position validity.
//! - [`motion`] - autonomous light-source retargeting and steering.
//! - [`drag`] - pointer dragging with collision rejection.
//! - [`config`] - user-facing tunables.
//! - [`scene`] - the aggregate owning all of the above.

pub mod body;
pub mod bounds;
pub mod cascade;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod motion;
pub mod placement;
pub mod ray;
pub mod scene;
