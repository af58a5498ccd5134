//! Graphic instances: one placed decorative shape.

use crate::context::RenderContext;
use crate::host::HostBridge;
use crate::models::MotionModel;

/// Number of update steps a motion model executes before its physics stop.
/// Rendering continues indefinitely afterwards.
pub const UPDATE_WINDOW_CAP: u32 = 90;

/// How an instance is drawn.
#[derive(Debug, Clone)]
pub enum GraphicMode {
    /// A flat texture reference. Inert: flat instances draw nothing.
    Flat { texture_index: usize },
    /// An owned animated 3D shape.
    Volumetric(MotionModel),
}

/// One placed decorative graphic.
///
/// Position and scale factor are fixed at creation and never change for the
/// instance's life.
#[derive(Debug, Clone)]
pub struct GraphicInstance {
    x: f32,
    y: f32,
    mode: GraphicMode,
    scale_factor: f32,
}

impl GraphicInstance {
    pub(crate) fn new(x: f32, y: f32, mode: GraphicMode, scale_factor: f32) -> Self {
        Self {
            x,
            y,
            mode,
            scale_factor,
        }
    }

    /// Viewport-space placement.
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub fn mode(&self) -> &GraphicMode {
        &self.mode
    }

    pub fn is_volumetric(&self) -> bool {
        matches!(self.mode, GraphicMode::Volumetric(_))
    }

    /// Draw this instance at its position. Flat instances draw nothing.
    pub fn render(&self, host: &mut dyn HostBridge, ctx: &RenderContext) {
        host.push_matrix();
        host.translate(self.x, self.y, 0.0);
        if let GraphicMode::Volumetric(model) = &self.mode {
            model.render(host, ctx);
        }
        host.pop_matrix();
    }

    /// Advance the motion model one step, if the update window allows it.
    pub fn update(&mut self) {
        if let GraphicMode::Volumetric(model) = &mut self.mode
            && !model.window_elapsed(UPDATE_WINDOW_CAP)
        {
            model.update();
        }
    }

    /// Whether this instance has exhausted its update window.
    pub fn window_elapsed(&self) -> bool {
        match &self.mode {
            GraphicMode::Flat { .. } => true,
            GraphicMode::Volumetric(model) => model.window_elapsed(UPDATE_WINDOW_CAP),
        }
    }
}
