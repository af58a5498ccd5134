//! The animation loop driver and responsive generation controller.

use std::collections::VecDeque;

use jangsik_core::{DeviceTier, MotionPreference, Theme};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::context::RenderContext;
use crate::factory;
use crate::host::HostBridge;
use crate::instance::{GraphicInstance, UPDATE_WINDOW_CAP};
use crate::placement::select_placement;

/// Engine construction parameters, typically mapped from the app config.
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub type_count: usize,
    pub max_graphics: usize,
    pub theme: Theme,
    pub motion: MotionPreference,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            type_count: factory::DEFAULT_TYPE_COUNT,
            max_graphics: 64,
            theme: Theme::Dark,
            motion: MotionPreference::Full,
        }
    }
}

/// The decorative-animation engine.
///
/// Owns the graphic collection and drives it one frame at a time. All state
/// mutation happens inside [`Engine::render_frame`], [`Engine::trigger`] and
/// [`Engine::handle_resize`], each of which runs to completion before any
/// other engine code.
#[derive(Debug)]
pub struct Engine {
    graphics: VecDeque<GraphicInstance>,
    width: f32,
    height: f32,
    type_count: usize,
    max_graphics: usize,
    ctx: RenderContext,
    rng: SmallRng,
}

impl Engine {
    /// Create an engine for the given viewport. Call [`Engine::seed`] to
    /// populate it.
    pub fn new(width: f32, height: f32, settings: EngineSettings) -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};

        // Capture system time as seed for randomness
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);

        Self::with_seed(width, height, settings, seed)
    }

    /// Create an engine with a fixed randomness seed.
    pub fn with_seed(width: f32, height: f32, settings: EngineSettings, seed: u64) -> Self {
        let type_count = if settings.type_count == 0 {
            log::warn!(
                "type count of 0 is unusable, using default {}",
                factory::DEFAULT_TYPE_COUNT
            );
            factory::DEFAULT_TYPE_COUNT
        } else {
            settings.type_count
        };

        let tier = DeviceTier::from_width(width);
        Self {
            graphics: VecDeque::with_capacity(settings.max_graphics.min(256)),
            width,
            height,
            type_count,
            max_graphics: settings.max_graphics.max(1),
            ctx: RenderContext::new(settings.theme, tier, settings.motion),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seed the startup population for the current tier.
    pub fn seed(&mut self) {
        let count = self.ctx.tier().seed_count();
        for _ in 0..count {
            self.spawn_one();
        }
        log::info!(
            "seeded {} graphics for {:?} tier ({}x{})",
            self.graphics.len(),
            self.ctx.tier(),
            self.width,
            self.height
        );
    }

    /// External trigger event: generate exactly one additional graphic.
    pub fn trigger(&mut self) {
        self.spawn_one();
    }

    fn spawn_one(&mut self) {
        let tier = self.ctx.tier();
        let position = match select_placement(self.width, self.height, tier, &mut self.rng) {
            Ok(position) => position,
            Err(err) => {
                log::warn!("skipping graphic generation: {err}");
                return;
            }
        };

        let type_id = self.rng.gen_range(0..self.type_count) as i32;
        let mut instance = factory::create(
            position.0,
            position.1,
            type_id,
            self.type_count,
            tier.scale_factor(),
            self.ctx.palette(),
            &mut self.rng,
        );

        if self.ctx.motion() == MotionPreference::Reduced {
            // Settle the shape immediately: full layout, no motion.
            for _ in 0..UPDATE_WINDOW_CAP {
                instance.update();
            }
        }

        if self.graphics.len() >= self.max_graphics {
            self.graphics.pop_front();
            log::debug!("graphic cap {} reached, evicted oldest", self.max_graphics);
        }
        self.graphics.push_back(instance);
    }

    /// Drive one frame: clear, render every instance in insertion order,
    /// then advance each live motion model by one step.
    pub fn render_frame(&mut self, host: &mut dyn HostBridge) {
        host.clear(self.ctx.theme().background());

        host.push_matrix();
        // Instance positions are top-left viewport coordinates; the host
        // origin is the viewport center.
        host.translate(-self.width / 2.0, -self.height / 2.0, 0.0);
        for instance in &self.graphics {
            instance.render(host, &self.ctx);
        }
        host.pop_matrix();

        for instance in &mut self.graphics {
            instance.update();
        }

        self.ctx.advance_frame();
    }

    /// Record new viewport dimensions after a host resize.
    ///
    /// The tier used for future generation follows the new width; existing
    /// instances keep their positions.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.ctx.set_tier(DeviceTier::from_width(width));
    }

    /// Swap the theme, rebuilding the palette for future graphics.
    pub fn set_theme(&mut self, theme: Theme) {
        self.ctx.set_theme(theme);
    }

    pub fn context(&self) -> &RenderContext {
        &self.ctx
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn graphics(&self) -> impl Iterator<Item = &GraphicInstance> {
        self.graphics.iter()
    }

    pub fn graphic_count(&self) -> usize {
        self.graphics.len()
    }
}
