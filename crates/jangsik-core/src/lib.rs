//! Core types shared across the jangsik crates.
//!
//! Device-tier classification, motion preference, and the theme/palette
//! color utilities used by both the engine and its hosts.

mod color;
mod tier;

pub use color::{Palette, Theme, hsl_to_rgb};
pub use tier::{DeviceTier, MotionPreference};
