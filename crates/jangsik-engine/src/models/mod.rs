//! Motion models: self-contained animated shapes.
//!
//! Each variant owns its kinematic state and a decay-based motion law. The
//! shared integrator accumulates the current speed as this step's
//! displacement, then decays the speed geometrically, so after `k` steps
//! `speed_k = speed_0 * (1 - rate)^k` and the accumulated displacement
//! converges to `speed_0 / rate`.

mod cloud;
mod ring;
mod sphere;

pub use cloud::Cloud;
pub use ring::Ring;
pub use sphere::Sphere;

use crate::context::RenderContext;
use crate::host::HostBridge;

/// One decorative animated shape.
#[derive(Debug, Clone)]
pub enum MotionModel {
    Cloud(Cloud),
    Ring(Ring),
    Sphere(Sphere),
}

impl MotionModel {
    /// Advance the motion law by one time step.
    pub fn update(&mut self) {
        match self {
            MotionModel::Cloud(m) => m.update(),
            MotionModel::Ring(m) => m.update(),
            MotionModel::Sphere(m) => m.update(),
        }
    }

    /// Draw the current state. Never mutates the model.
    pub fn render(&self, host: &mut dyn HostBridge, ctx: &RenderContext) {
        match self {
            MotionModel::Cloud(m) => m.render(host, ctx),
            MotionModel::Ring(m) => m.render(host, ctx),
            MotionModel::Sphere(m) => m.render(host, ctx),
        }
    }

    /// Whether the internal frame counter has reached `n` steps.
    pub fn window_elapsed(&self, n: u32) -> bool {
        let window = match self {
            MotionModel::Cloud(m) => m.window(),
            MotionModel::Ring(m) => m.window(),
            MotionModel::Sphere(m) => m.window(),
        };
        window >= n
    }
}

/// One integrator step: returns this step's displacement and decays `speed`.
pub(crate) fn decay_step(speed: &mut f32, rate: f32) -> f32 {
    let displacement = *speed;
    *speed -= *speed * rate;
    displacement
}

/// Linear remap of `v` from `[in_start, in_end]` to `[out_start, out_end]`.
pub(crate) fn map_range(v: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    out_start + (v - in_start) / (in_end - in_start) * (out_end - out_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_closed_form() {
        // speed_k = speed_0 * (1 - rate)^k
        let mut speed = 100.0_f32;
        for _ in 0..5 {
            decay_step(&mut speed, 0.15);
        }
        assert!((speed - 100.0 * 0.85_f32.powi(5)).abs() < 1e-3);
        assert!((speed - 44.37).abs() < 1e-2);
    }

    #[test]
    fn test_decay_accumulation_converges() {
        // Accumulated displacement approaches speed_0 / rate.
        let mut speed = 100.0_f32;
        let mut total = 0.0_f32;
        for _ in 0..500 {
            total += decay_step(&mut speed, 0.15);
        }
        assert!((total - 100.0 / 0.15).abs() < 1e-2);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(map_range(0.0, 0.0, 10.0, 0.0, std::f32::consts::PI), 0.0);
        // Inverted output range, as used by the sphere silhouette.
        assert_eq!(map_range(1.0, 1.0, -1.0, -50.0, 50.0), -50.0);
        assert_eq!(map_range(-1.0, 1.0, -1.0, -50.0, 50.0), 50.0);
    }
}
