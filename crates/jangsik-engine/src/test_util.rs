//! Test doubles shared across the engine's unit tests.

use jangsik_core::{DeviceTier, MotionPreference, Theme};
use ratatui::style::Color;

use crate::context::RenderContext;
use crate::host::HostBridge;

/// A host bridge that records every drawing call as a formatted op string.
pub(crate) struct RecordingHost {
    pub ops: Vec<String>,
    width: f32,
    height: f32,
}

impl RecordingHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ops: Vec::new(),
            width,
            height,
        }
    }

    pub fn ellipse_count(&self) -> usize {
        self.ops.iter().filter(|op| op.starts_with("ellipse")).count()
    }
}

impl HostBridge for RecordingHost {
    fn push_matrix(&mut self) {
        self.ops.push("push".to_string());
    }

    fn pop_matrix(&mut self) {
        self.ops.push("pop".to_string());
    }

    fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.ops.push(format!("translate({x:?}, {y:?}, {z:?})"));
    }

    fn rotate_x(&mut self, angle: f32) {
        self.ops.push(format!("rotate_x({angle:?})"));
    }

    fn rotate_y(&mut self, angle: f32) {
        self.ops.push(format!("rotate_y({angle:?})"));
    }

    fn rotate_z(&mut self, angle: f32) {
        self.ops.push(format!("rotate_z({angle:?})"));
    }

    fn stroke(&mut self, color: Color) {
        self.ops.push(format!("stroke({color:?})"));
    }

    fn stroke_weight(&mut self, weight: f32) {
        self.ops.push(format!("stroke_weight({weight:?})"));
    }

    fn no_fill(&mut self) {
        self.ops.push("no_fill".to_string());
    }

    fn fill(&mut self, color: Color) {
        self.ops.push(format!("fill({color:?})"));
    }

    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.ops.push(format!("ellipse({x:?}, {y:?}, {w:?}, {h:?})"));
    }

    fn clear(&mut self, color: Color) {
        self.ops.push(format!("clear({color:?})"));
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn viewport_height(&self) -> f32 {
        self.height
    }
}

/// A context with the frame clock at zero, desktop tier, dark theme.
pub(crate) fn test_context() -> RenderContext {
    RenderContext::new(Theme::Dark, DeviceTier::Desktop, MotionPreference::Full)
}
