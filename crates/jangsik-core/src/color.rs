//! Theme and color utilities for the decorative graphics.

use rand::Rng;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Light/dark rendering theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Background clear color.
    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(10, 10, 10),
            Theme::Light => Color::Rgb(255, 255, 255),
        }
    }

    /// Foreground text color for host UI chrome.
    pub fn foreground(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(245, 245, 245),
            Theme::Light => Color::Rgb(30, 30, 30),
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Stroke-color generator for decorative graphics.
///
/// Produces one color per call, hue chosen uniformly at random with
/// saturation and lightness fixed per theme so strokes stay legible on the
/// theme background.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    saturation: f32,
    lightness: f32,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                saturation: 0.35,
                lightness: 0.70,
            },
            Theme::Light => Self {
                saturation: 0.45,
                lightness: 0.35,
            },
        }
    }

    /// Draw one stroke color.
    pub fn grab_random<R: Rng>(&self, rng: &mut R) -> Color {
        let hue = rng.gen_range(0.0..360.0);
        hsl_to_rgb(hue, self.saturation, self.lightness)
    }
}

/// Convert HSL to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
