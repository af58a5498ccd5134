//! Terminal implementation of the engine's host bridge.
//!
//! Buffers the engine's 3D drawing calls as projected 2D points; the app
//! paints them through ratatui's braille canvas each frame.

use ratatui::style::Color;

use jangsik_engine::HostBridge;

use crate::transform::Mat4;

/// Braille subpixels per terminal cell.
const SUBPIXELS_X: f32 = 2.0;
const SUBPIXELS_Y: f32 = 4.0;

/// Viewport size in braille subpixels for a terminal of `cols` x `rows`.
pub fn pixel_dims(cols: u16, rows: u16) -> (f32, f32) {
    (cols as f32 * SUBPIXELS_X, rows as f32 * SUBPIXELS_Y)
}

/// Host bridge over a braille point buffer.
///
/// The origin is the viewport center with y growing downward, matching the
/// drawing convention the engine shifts into; plotted points are flipped to
/// the canvas's y-up coordinates.
pub struct TermHost {
    width: f32,
    height: f32,
    stack: Vec<Mat4>,
    current: Mat4,
    stroke: Option<Color>,
    fill: Option<Color>,
    background: Color,
    points: Vec<(f64, f64, Color)>,
}

impl TermHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stack: Vec::new(),
            current: Mat4::IDENTITY,
            stroke: None,
            fill: None,
            background: Color::Reset,
            points: Vec::new(),
        }
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Plotted points grouped into runs of one color, in draw order.
    pub fn color_batches(&self) -> Vec<(Color, Vec<(f64, f64)>)> {
        let mut batches: Vec<(Color, Vec<(f64, f64)>)> = Vec::new();
        for &(x, y, color) in &self.points {
            match batches.last_mut() {
                Some((last, coords)) if *last == color => coords.push((x, y)),
                _ => batches.push((color, vec![(x, y)])),
            }
        }
        batches
    }

    fn plot(&mut self, x: f32, y: f32, z: f32, color: Color) {
        let (tx, ty, _tz) = self.current.transform_point(x, y, z);
        // Orthographic projection: drop z, recenter, flip y for the canvas.
        let sx = tx + self.width / 2.0;
        let sy = ty + self.height / 2.0;
        if sx < 0.0 || sx >= self.width || sy < 0.0 || sy >= self.height {
            return;
        }
        self.points
            .push((sx as f64, (self.height - sy) as f64, color));
    }
}

impl HostBridge for TermHost {
    fn push_matrix(&mut self) {
        self.stack.push(self.current);
    }

    fn pop_matrix(&mut self) {
        match self.stack.pop() {
            Some(m) => self.current = m,
            None => log::error!("transform stack underflow, keeping current matrix"),
        }
    }

    fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.current = self.current.mul(&Mat4::translation(x, y, z));
    }

    fn rotate_x(&mut self, angle: f32) {
        self.current = self.current.mul(&Mat4::rotation_x(angle));
    }

    fn rotate_y(&mut self, angle: f32) {
        self.current = self.current.mul(&Mat4::rotation_y(angle));
    }

    fn rotate_z(&mut self, angle: f32) {
        self.current = self.current.mul(&Mat4::rotation_z(angle));
    }

    fn stroke(&mut self, color: Color) {
        self.stroke = Some(color);
    }

    fn stroke_weight(&mut self, _weight: f32) {
        // Braille dots have a fixed weight.
    }

    fn no_fill(&mut self) {
        self.fill = None;
    }

    fn fill(&mut self, color: Color) {
        self.fill = Some(color);
    }

    fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) {
        let Some(color) = self.stroke.or(self.fill) else {
            return;
        };

        let rx = w / 2.0;
        let ry = h / 2.0;
        if rx <= 0.0 && ry <= 0.0 {
            self.plot(x, y, 0.0, color);
            return;
        }

        // Dot density scales with size, bounded to keep frames cheap.
        let segments = (rx.max(ry) as usize).clamp(12, 72);
        for i in 0..segments {
            let angle = std::f32::consts::TAU * i as f32 / segments as f32;
            self.plot(x + rx * angle.cos(), y + ry * angle.sin(), 0.0, color);
        }
    }

    fn clear(&mut self, color: Color) {
        self.background = color;
        self.points.clear();
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }

    fn viewport_height(&self) -> f32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_dims() {
        assert_eq!(pixel_dims(100, 40), (200.0, 160.0));
    }

    #[test]
    fn test_plot_recenters_and_flips() {
        let mut host = TermHost::new(200.0, 160.0);
        host.stroke(Color::Rgb(1, 2, 3));
        // Zero-size ellipse at the origin lands at the viewport center.
        host.ellipse(0.0, 0.0, 0.0, 0.0);
        assert_eq!(host.points, vec![(100.0, 80.0, Color::Rgb(1, 2, 3))]);
    }

    #[test]
    fn test_translate_moves_plots() {
        let mut host = TermHost::new(200.0, 160.0);
        host.stroke(Color::Rgb(1, 2, 3));
        host.push_matrix();
        host.translate(10.0, 20.0, 0.0);
        host.ellipse(0.0, 0.0, 0.0, 0.0);
        host.pop_matrix();
        // y grows downward in engine space, upward on the canvas.
        assert_eq!(host.points, vec![(110.0, 60.0, Color::Rgb(1, 2, 3))]);
    }

    #[test]
    fn test_pop_restores_transform() {
        let mut host = TermHost::new(200.0, 160.0);
        host.stroke(Color::Rgb(9, 9, 9));
        host.push_matrix();
        host.translate(50.0, 0.0, 0.0);
        host.pop_matrix();
        host.ellipse(0.0, 0.0, 0.0, 0.0);
        assert_eq!(host.points, vec![(100.0, 80.0, Color::Rgb(9, 9, 9))]);
    }

    #[test]
    fn test_offscreen_points_are_clipped() {
        let mut host = TermHost::new(200.0, 160.0);
        host.stroke(Color::Rgb(1, 2, 3));
        host.translate(500.0, 0.0, 0.0);
        host.ellipse(0.0, 0.0, 0.0, 0.0);
        assert!(host.points.is_empty());
    }

    #[test]
    fn test_no_color_draws_nothing() {
        let mut host = TermHost::new(200.0, 160.0);
        host.no_fill();
        host.ellipse(0.0, 0.0, 40.0, 40.0);
        assert!(host.points.is_empty());
    }

    #[test]
    fn test_ellipse_points_lie_on_perimeter() {
        let mut host = TermHost::new(400.0, 400.0);
        host.stroke(Color::Rgb(1, 2, 3));
        host.ellipse(0.0, 0.0, 60.0, 60.0);
        assert!(!host.points.is_empty());
        for &(x, y, _) in &host.points {
            let dx = x - 200.0;
            let dy = y - 200.0;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 30.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_color_batches_group_runs() {
        let mut host = TermHost::new(200.0, 160.0);
        host.stroke(Color::Rgb(1, 1, 1));
        host.ellipse(0.0, 0.0, 0.0, 0.0);
        host.ellipse(1.0, 0.0, 0.0, 0.0);
        host.stroke(Color::Rgb(2, 2, 2));
        host.ellipse(2.0, 0.0, 0.0, 0.0);
        let batches = host.color_batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].1.len(), 2);
        assert_eq!(batches[1].1.len(), 1);
    }

    #[test]
    fn test_clear_resets_points() {
        let mut host = TermHost::new(200.0, 160.0);
        host.stroke(Color::Rgb(1, 2, 3));
        host.ellipse(0.0, 0.0, 0.0, 0.0);
        host.clear(Color::Rgb(10, 10, 10));
        assert!(host.points.is_empty());
        assert_eq!(host.background(), Color::Rgb(10, 10, 10));
    }
}
