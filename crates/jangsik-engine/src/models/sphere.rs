//! Sphere: expanding latitude-ring shells with three drawing strategies.

use rand::Rng;
use ratatui::style::Color;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use jangsik_core::Palette;

use super::{decay_step, map_range};
use crate::context::RenderContext;
use crate::host::HostBridge;

const DECAY_RATE: f32 = 0.125;
const LAT_COUNT: u32 = 10;

/// Oscillating-sphere motion model.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Current shell size, grown by each update step.
    radius: f32,
    /// Remaining growth speed.
    speed: f32,
    color: Color,
    window: u32,
    /// Drawing strategy, 0..=2, fixed at creation.
    variant: u8,
}

impl Sphere {
    pub fn new<R: Rng>(rng: &mut R, palette: &Palette, scale: f32) -> Self {
        Self {
            radius: 0.0,
            speed: rng.gen_range(50.0..140.0) * scale,
            color: palette.grab_random(rng),
            window: 0,
            variant: rng.gen_range(0..3),
        }
    }

    pub fn update(&mut self) {
        self.radius += decay_step(&mut self.speed, DECAY_RATE);
        self.window += 1;
    }

    pub fn render(&self, host: &mut dyn HostBridge, ctx: &RenderContext) {
        // Rings creep along the shell as the frame clock advances.
        let phase = (ctx.frame_count() as f32 / 120.0) % 1.0;
        let lat_angle = TAU / LAT_COUNT as f32 / 2.0;

        host.push_matrix();
        host.rotate_x(FRAC_PI_2);
        host.no_fill();
        host.stroke(self.color);
        host.stroke_weight(1.0);

        let mut p = phase;
        while p < LAT_COUNT as f32 {
            match self.variant {
                0 => {
                    // Evenly rotated rings of full radius.
                    host.push_matrix();
                    host.rotate_y(-p * lat_angle);
                    host.ellipse(0.0, 0.0, self.radius, self.radius);
                    host.pop_matrix();
                }
                1 => {
                    // Rings shrink toward the poles along a sine profile.
                    let step = map_range(p, 0.0, LAT_COUNT as f32, 0.0, PI);
                    let ring = step.sin() * self.radius;
                    let depth = step.cos() * (self.radius / 2.0);

                    host.push_matrix();
                    host.translate(0.0, 0.0, depth);
                    host.ellipse(0.0, 0.0, ring, ring);
                    host.pop_matrix();
                }
                _ => {
                    // Silhouette rings plus a longitude pass for a
                    // wireframe-globe look.
                    let step = map_range(p, 0.0, LAT_COUNT as f32, 0.0, PI);
                    let ring = step.sin() * self.radius;
                    let depth = map_range(
                        step.cos(),
                        1.0,
                        -1.0,
                        -self.radius / 2.0,
                        self.radius / 2.0,
                    );

                    host.push_matrix();
                    host.translate(0.0, 0.0, depth);
                    host.ellipse(0.0, 0.0, ring, ring);
                    host.pop_matrix();

                    host.push_matrix();
                    host.rotate_x(FRAC_PI_2);
                    host.rotate_y(p * lat_angle);
                    host.ellipse(0.0, 0.0, self.radius, self.radius);
                    host.pop_matrix();
                }
            }
            p += 1.0;
        }

        host.pop_matrix();
    }

    pub fn window(&self) -> u32 {
        self.window
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
