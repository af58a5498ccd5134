//! Ring: a single circle expanding outward in a tilted plane.

use rand::Rng;
use ratatui::style::Color;
use std::f32::consts::FRAC_PI_2;

use jangsik_core::Palette;

use super::decay_step;
use crate::context::RenderContext;
use crate::host::HostBridge;

const DECAY_RATE: f32 = 0.15;

/// Expanding-ring motion model.
#[derive(Debug, Clone)]
pub struct Ring {
    /// Current ring size, grown by each update step.
    radius: f32,
    /// Remaining growth speed.
    speed: f32,
    color: Color,
    window: u32,
}

impl Ring {
    pub fn new<R: Rng>(rng: &mut R, palette: &Palette, scale: f32) -> Self {
        Self {
            radius: 0.0,
            speed: rng.gen_range(50.0..140.0) * scale,
            color: palette.grab_random(rng),
            window: 0,
        }
    }

    pub fn update(&mut self) {
        self.radius += decay_step(&mut self.speed, DECAY_RATE);
        self.window += 1;
    }

    pub fn render(&self, host: &mut dyn HostBridge, _ctx: &RenderContext) {
        host.push_matrix();
        // Lay the circle flat, 90 degrees off the default orientation.
        host.rotate_x(FRAC_PI_2);

        host.no_fill();
        host.stroke(self.color);
        host.stroke_weight(1.0);
        host.ellipse(0.0, 0.0, self.radius, self.radius);
        host.pop_matrix();
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
