//! Host-environment drawing boundary.

use ratatui::style::Color;

/// Drawing capabilities the engine requires from its host.
///
/// The engine is injected with an implementation of this trait and must not
/// assume anything beyond it. Transform state is a stack: `push_matrix` /
/// `pop_matrix` bracket local coordinate changes, and `translate` /
/// `rotate_*` compose onto the current matrix. Coordinates are 3D with the
/// host deciding projection; the origin convention is the host's own (the
/// engine applies its own global shift, see
/// [`Engine::render_frame`](crate::Engine::render_frame)).
///
/// Implementations never report failure. A host missing a real surface is
/// expected to degrade (draw nothing) rather than interrupt the frame loop.
pub trait HostBridge {
    /// Save the current transform state.
    fn push_matrix(&mut self);
    /// Restore the most recently saved transform state.
    fn pop_matrix(&mut self);

    fn translate(&mut self, x: f32, y: f32, z: f32);
    fn rotate_x(&mut self, angle: f32);
    fn rotate_y(&mut self, angle: f32);
    fn rotate_z(&mut self, angle: f32);

    /// Set the outline color for subsequent shapes.
    fn stroke(&mut self, color: Color);
    /// Set the outline weight for subsequent shapes.
    fn stroke_weight(&mut self, weight: f32);
    /// Disable interior fill for subsequent shapes.
    fn no_fill(&mut self);
    /// Set the interior fill color for subsequent shapes.
    fn fill(&mut self, color: Color);

    /// Draw an ellipse centered at `(x, y)` in the current local frame,
    /// with width `w` and height `h`.
    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32);

    /// Clear the whole surface to `color`.
    fn clear(&mut self, color: Color);

    fn viewport_width(&self) -> f32;
    fn viewport_height(&self) -> f32;
}
