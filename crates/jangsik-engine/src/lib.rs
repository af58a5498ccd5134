//! Procedural decorative-animation engine.
//!
//! Generates, places and animates ornamental 3D shapes (cloud particle
//! bursts, expanding rings, oscillating spheres) behind foreground content.
//! The engine knows nothing about its surroundings beyond a [`HostBridge`]
//! drawing interface and viewport dimensions: the host drives it with one
//! [`Engine::render_frame`] call per frame and optional
//! [`Engine::trigger`] calls for user input.

mod context;
mod engine;
mod factory;
mod host;
mod instance;
mod models;
mod placement;

#[cfg(test)]
pub(crate) mod test_util;

pub use context::RenderContext;
pub use engine::{Engine, EngineSettings};
pub use factory::DEFAULT_TYPE_COUNT;
pub use host::HostBridge;
pub use instance::{GraphicInstance, GraphicMode, UPDATE_WINDOW_CAP};
pub use models::{Cloud, MotionModel, Ring, Sphere};
pub use placement::{PlacementError, Region, exclusion_zone, select_placement};
