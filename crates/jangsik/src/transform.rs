//! Minimal 4x4 transform matrices for the terminal host.
//!
//! Row-major storage, points treated as column vectors: `p' = M * p`.
//! Local transforms compose by right-multiplication, so `translate` then
//! `rotate` applies the rotation inside the translated frame.

/// A 4x4 affine transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4 {
            m: [
                [1.0, 0.0, 0.0, x],
                [0.0, 1.0, 0.0, y],
                [0.0, 0.0, 1.0, z],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_x(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4 {
            m: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, c, -s, 0.0],
                [0.0, s, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_y(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4 {
            m: [
                [c, 0.0, s, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [-s, 0.0, c, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn rotation_z(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Mat4 {
            m: [
                [c, -s, 0.0, 0.0],
                [s, c, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// `self * other`: apply `other` in the frame established by `self`.
    pub fn mul(&self, other: &Mat4) -> Mat4 {
        let mut out = [[0.0f32; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Mat4 { m: out }
    }

    /// Transform a point (w = 1).
    pub fn transform_point(&self, x: f32, y: f32, z: f32) -> (f32, f32, f32) {
        let v = [x, y, z, 1.0];
        let mut out = [0.0f32; 3];
        for (i, cell) in out.iter_mut().enumerate() {
            *cell = (0..4).map(|k| self.m[i][k] * v[k]).sum();
        }
        (out[0], out[1], out[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_close(a: (f32, f32, f32), b: (f32, f32, f32)) {
        assert!((a.0 - b.0).abs() < 1e-5, "{a:?} vs {b:?}");
        assert!((a.1 - b.1).abs() < 1e-5, "{a:?} vs {b:?}");
        assert!((a.2 - b.2).abs() < 1e-5, "{a:?} vs {b:?}");
    }

    #[test]
    fn test_identity() {
        assert_close(Mat4::IDENTITY.transform_point(3.0, -4.0, 5.0), (3.0, -4.0, 5.0));
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(10.0, 20.0, -5.0);
        assert_close(m.transform_point(1.0, 2.0, 3.0), (11.0, 22.0, -2.0));
    }

    #[test]
    fn test_rotations() {
        assert_close(
            Mat4::rotation_z(FRAC_PI_2).transform_point(1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
        );
        assert_close(
            Mat4::rotation_y(FRAC_PI_2).transform_point(1.0, 0.0, 0.0),
            (0.0, 0.0, -1.0),
        );
        assert_close(
            Mat4::rotation_x(FRAC_PI_2).transform_point(0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
        );
    }

    #[test]
    fn test_composition_order() {
        // Translate-then-rotate is not rotate-then-translate.
        let tr = Mat4::translation(10.0, 0.0, 0.0).mul(&Mat4::rotation_z(FRAC_PI_2));
        let rt = Mat4::rotation_z(FRAC_PI_2).mul(&Mat4::translation(10.0, 0.0, 0.0));
        assert_close(tr.transform_point(1.0, 0.0, 0.0), (10.0, 1.0, 0.0));
        assert_close(rt.transform_point(1.0, 0.0, 0.0), (0.0, 11.0, 0.0));
    }
}
