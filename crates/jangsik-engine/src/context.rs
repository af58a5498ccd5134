//! Shared per-frame rendering context.

use jangsik_core::{DeviceTier, MotionPreference, Palette, Theme};

/// State shared by every render/update call.
///
/// Owns the palette, theme, device-tier configuration and the frame clock.
/// Built once at setup; afterwards only the frame clock advances and the
/// tier follows viewport resizes.
#[derive(Debug, Clone)]
pub struct RenderContext {
    palette: Palette,
    theme: Theme,
    tier: DeviceTier,
    motion: MotionPreference,
    frame_count: u64,
}

impl RenderContext {
    pub fn new(theme: Theme, tier: DeviceTier, motion: MotionPreference) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            theme,
            tier,
            motion,
            frame_count: 0,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn tier(&self) -> DeviceTier {
        self.tier
    }

    pub fn motion(&self) -> MotionPreference {
        self.motion
    }

    /// Monotonically increasing frame counter.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance the frame clock by one. Called once per rendered frame.
    pub(crate) fn advance_frame(&mut self) {
        self.frame_count += 1;
    }

    /// Reclassify the tier after a viewport resize.
    pub(crate) fn set_tier(&mut self, tier: DeviceTier) {
        self.tier = tier;
    }

    /// Swap the theme, rebuilding the palette. The frame clock is kept.
    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_only_increments() {
        let mut ctx = RenderContext::new(Theme::Dark, DeviceTier::Desktop, MotionPreference::Full);
        assert_eq!(ctx.frame_count(), 0);
        ctx.advance_frame();
        ctx.advance_frame();
        assert_eq!(ctx.frame_count(), 2);
    }

    #[test]
    fn test_theme_swap_keeps_clock() {
        let mut ctx = RenderContext::new(Theme::Dark, DeviceTier::Phone, MotionPreference::Full);
        ctx.advance_frame();
        ctx.set_theme(Theme::Light);
        assert_eq!(ctx.theme(), Theme::Light);
        assert_eq!(ctx.frame_count(), 1);
    }
}
