//! Placement: corner-constrained position selection for new graphics.
//!
//! A centered exclusion zone keeps decorative shapes clear of foreground
//! content; candidates are drawn from the four corner regions between the
//! viewport edges and the zone.

use jangsik_core::DeviceTier;
use rand::Rng;
use thiserror::Error;

/// An axis-aligned rectangle in viewport space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// No corner region was large enough to place a graphic.
#[derive(Debug, Error, PartialEq)]
#[error("no placement region available in {width}x{height} viewport")]
pub struct PlacementError {
    pub width: f32,
    pub height: f32,
}

/// The centered rectangle in which no graphic may be placed, sized per tier.
pub fn exclusion_zone(width: f32, height: f32, tier: DeviceTier) -> Region {
    let (fx, fy) = tier.exclusion_fraction();
    let zone_w = width * fx;
    let zone_h = height * fy;
    Region {
        x: (width - zone_w) / 2.0,
        y: (height - zone_h) / 2.0,
        width: zone_w,
        height: zone_h,
    }
}

/// Pick a position for a new graphic, outside the exclusion zone.
///
/// Selects one sufficiently large corner region uniformly at random, then a
/// uniform point within it. Fails when every corner region is narrower than
/// the tier minimum; callers log and skip generation for that request.
pub fn select_placement<R: Rng>(
    width: f32,
    height: f32,
    tier: DeviceTier,
    rng: &mut R,
) -> Result<(f32, f32), PlacementError> {
    let zone = exclusion_zone(width, height, tier);
    let min_side = tier.min_region_px();

    let left = zone.x;
    let top = zone.y;
    let right_x = zone.x + zone.width;
    let bottom_y = zone.y + zone.height;
    let right_w = width - right_x;
    let bottom_h = height - bottom_y;

    let corners = [
        // Top-left, top-right, bottom-left, bottom-right.
        Region { x: 0.0, y: 0.0, width: left, height: top },
        Region { x: right_x, y: 0.0, width: right_w, height: top },
        Region { x: 0.0, y: bottom_y, width: left, height: bottom_h },
        Region { x: right_x, y: bottom_y, width: right_w, height: bottom_h },
    ];

    let usable: Vec<&Region> = corners
        .iter()
        .filter(|r| r.width >= min_side && r.height >= min_side)
        .collect();

    if usable.is_empty() {
        return Err(PlacementError { width, height });
    }

    let region = usable[rng.gen_range(0..usable.len())];
    let x = rng.gen_range(region.x..region.x + region.width);
    let y = rng.gen_range(region.y..region.y + region.height);
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_small_phone_exclusion_zone() {
        // 400x800 at the small-phone tier: 50% x 60% centered.
        let zone = exclusion_zone(400.0, 800.0, DeviceTier::SmallPhone);
        assert_eq!(zone.width, 200.0);
        assert_eq!(zone.height, 480.0);
        assert_eq!(zone.x, 100.0);
        assert_eq!(zone.y, 160.0);
    }

    #[test]
    fn test_placement_outside_exclusion_zone() {
        let mut rng = SmallRng::seed_from_u64(42);
        for (w, h, tier) in [
            (1920.0, 1080.0, DeviceTier::Desktop),
            (700.0, 900.0, DeviceTier::Phone),
            (400.0, 800.0, DeviceTier::SmallPhone),
        ] {
            let zone = exclusion_zone(w, h, tier);
            for _ in 0..200 {
                let (x, y) = select_placement(w, h, tier, &mut rng).expect("placement available");
                assert!(!zone.contains(x, y), "({x}, {y}) inside zone for {w}x{h}");
                assert!((0.0..w).contains(&x));
                assert!((0.0..h).contains(&y));
            }
        }
    }

    #[test]
    fn test_placement_exhaustion() {
        // 100x100 desktop: corner regions are 20x10, below the 30px
        // desktop minimum on both sides.
        let mut rng = SmallRng::seed_from_u64(1);
        let err = select_placement(100.0, 100.0, DeviceTier::Desktop, &mut rng).unwrap_err();
        assert_eq!(
            err,
            PlacementError {
                width: 100.0,
                height: 100.0
            }
        );
    }

    #[test]
    fn test_mobile_minimum_is_smaller() {
        // 110x140 small phone: corners are 27.5 x 28 which clears the 20px
        // mobile minimum but would fail the 30px desktop one.
        let mut rng = SmallRng::seed_from_u64(2);
        assert!(select_placement(110.0, 140.0, DeviceTier::SmallPhone, &mut rng).is_ok());
    }

    #[test]
    fn test_all_four_corners_reachable() {
        let mut rng = SmallRng::seed_from_u64(3);
        let (w, h) = (1000.0, 1000.0);
        let zone = exclusion_zone(w, h, DeviceTier::Desktop);
        let mut seen = [false; 4];
        for _ in 0..400 {
            let (x, y) = select_placement(w, h, DeviceTier::Desktop, &mut rng).unwrap();
            let right = x >= zone.x + zone.width;
            let bottom = y >= zone.y + zone.height;
            seen[(right as usize) | ((bottom as usize) << 1)] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
