//! Device-tier classification driving generation density and placement.

use serde::{Deserialize, Serialize};

/// Viewport size class, derived from viewport width.
///
/// The tier decides how many graphics are seeded at startup, how they are
/// scaled, and how large the central exclusion zone is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeviceTier {
    /// Width of 480 or less.
    SmallPhone,
    /// Width of 768 or less.
    Phone,
    /// Anything wider.
    Desktop,
}

impl DeviceTier {
    /// Classify a viewport width in pixels.
    pub fn from_width(width: f32) -> Self {
        if width <= 480.0 {
            DeviceTier::SmallPhone
        } else if width <= 768.0 {
            DeviceTier::Phone
        } else {
            DeviceTier::Desktop
        }
    }

    /// Number of graphics seeded at startup.
    pub fn seed_count(self) -> usize {
        match self {
            DeviceTier::SmallPhone => 14,
            DeviceTier::Phone => 18,
            DeviceTier::Desktop => 24,
        }
    }

    /// Scale factor stamped on every graphic created at this tier.
    pub fn scale_factor(self) -> f32 {
        match self {
            DeviceTier::SmallPhone => 0.5,
            DeviceTier::Phone => 0.6,
            DeviceTier::Desktop => 1.0,
        }
    }

    /// Width/height fractions of the centered exclusion zone.
    ///
    /// Smaller screens get a smaller exclusion box so more of the viewport
    /// stays usable for placement.
    pub fn exclusion_fraction(self) -> (f32, f32) {
        match self {
            DeviceTier::SmallPhone => (0.50, 0.60),
            DeviceTier::Phone => (0.55, 0.65),
            DeviceTier::Desktop => (0.60, 0.80),
        }
    }

    /// Minimum usable corner-region side length in pixels.
    pub fn min_region_px(self) -> f32 {
        if self.is_mobile() { 20.0 } else { 30.0 }
    }

    /// Whether this is one of the phone tiers.
    pub fn is_mobile(self) -> bool {
        matches!(self, DeviceTier::SmallPhone | DeviceTier::Phone)
    }
}

/// User motion preference.
///
/// `Reduced` keeps the decorative layout but skips the animated drift:
/// graphics are fast-forwarded to their settled state at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionPreference {
    #[default]
    Full,
    Reduced,
}
