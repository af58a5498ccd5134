//! Cloud: a burst of particles drifting outward on a sphere of directions.

use rand::Rng;
use ratatui::style::Color;
use std::f32::consts::TAU;

use jangsik_core::Palette;

use super::decay_step;
use crate::context::RenderContext;
use crate::host::HostBridge;

const PARTICLE_COUNT: usize = 50;
const DECAY_RATE: f32 = 0.15;
const PARTICLE_DIAMETER: f32 = 10.0;

/// One cloud particle. Direction angles are fixed at creation; only the
/// speed and the accumulated offset change.
#[derive(Debug, Clone)]
struct Particle {
    /// Rotation about the vertical axis.
    azimuth: f32,
    /// Inclination from the vertical axis.
    polar: f32,
    /// Remaining drift speed.
    speed: f32,
    /// Accumulated 3D offset from the cloud origin.
    offset: (f32, f32, f32),
}

impl Particle {
    /// Spherical-to-Cartesian unit direction for this particle.
    fn direction(&self) -> (f32, f32, f32) {
        (
            self.polar.sin() * self.azimuth.cos(),
            self.polar.sin() * self.azimuth.sin(),
            self.polar.cos(),
        )
    }
}

/// Particle-burst motion model.
#[derive(Debug, Clone)]
pub struct Cloud {
    particles: Vec<Particle>,
    color: Color,
    window: u32,
    /// Particle circle diameter after tier scaling.
    size: f32,
}

impl Cloud {
    pub fn new<R: Rng>(rng: &mut R, palette: &Palette, scale: f32) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                azimuth: rng.gen_range(0.0..TAU),
                polar: rng.gen_range(0.0..TAU),
                speed: rng.gen_range(10.0..140.0) * scale,
                offset: (0.0, 0.0, 0.0),
            })
            .collect();

        Self {
            particles,
            color: palette.grab_random(rng),
            window: 0,
            size: PARTICLE_DIAMETER * scale,
        }
    }

    pub fn update(&mut self) {
        for p in &mut self.particles {
            let step = decay_step(&mut p.speed, DECAY_RATE);
            let (dx, dy, dz) = p.direction();
            p.offset.0 += step * dx;
            p.offset.1 += step * dy;
            p.offset.2 += step * dz;
        }
        self.window += 1;
    }

    pub fn render(&self, host: &mut dyn HostBridge, ctx: &RenderContext) {
        let spin = ctx.frame_count() as f32 * 0.001;

        host.push_matrix();
        host.rotate_y(spin);

        host.no_fill();
        host.stroke(self.color);
        host.stroke_weight(1.0);
        for p in &self.particles {
            host.push_matrix();
            host.translate(p.offset.0, p.offset.1, p.offset.2);
            // Counter-rotation keeps each circle camera-facing.
            host.rotate_y(-spin);
            host.ellipse(0.0, 0.0, self.size, self.size);
            host.pop_matrix();
        }
        host.pop_matrix();
    }

    pub fn window(&self) -> u32 {
        self.window
    }
}
