//! Graphic factory: maps type identifiers to motion-model instances.

use jangsik_core::Palette;
use rand::Rng;

use crate::instance::{GraphicInstance, GraphicMode};
use crate::models::{Cloud, MotionModel, Ring, Sphere};

/// Default number of graphic type identifiers.
pub const DEFAULT_TYPE_COUNT: usize = 17;

/// Type identifiers routed to volumetric motion models. Everything else in
/// range falls back to an inert flat texture.
const TYPE_CLOUD: i32 = 0;
const TYPE_RING: i32 = 15;
const TYPE_SPHERE: i32 = 16;

/// Construct a graphic instance for the given type identifier.
///
/// Identifiers outside `[0, type_count)` are diagnostic-logged and produce a
/// flat instance with texture index 0; creation never fails. No rendering
/// happens here.
pub(crate) fn create<R: Rng>(
    x: f32,
    y: f32,
    type_id: i32,
    type_count: usize,
    scale: f32,
    palette: &Palette,
    rng: &mut R,
) -> GraphicInstance {
    if type_id < 0 || type_id as usize >= type_count {
        log::error!("graphic type {type_id} out of range 0..{type_count}, defaulting to flat");
        return GraphicInstance::new(x, y, GraphicMode::Flat { texture_index: 0 }, scale);
    }

    let mode = match type_id {
        TYPE_CLOUD => GraphicMode::Volumetric(MotionModel::Cloud(Cloud::new(rng, palette, scale))),
        TYPE_RING => GraphicMode::Volumetric(MotionModel::Ring(Ring::new(rng, palette, scale))),
        TYPE_SPHERE => {
            GraphicMode::Volumetric(MotionModel::Sphere(Sphere::new(rng, palette, scale)))
        }
        _ => {
            log::debug!("graphic type {type_id} has no volumetric mapping, using flat texture");
            GraphicMode::Flat { texture_index: 0 }
        }
    };

    GraphicInstance::new(x, y, mode, scale)
}
