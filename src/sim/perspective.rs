//! Pseudo-3D perspective projection
//!
//! Maps normalized world coordinates (lateral, vertical, depth) to screen
//! space with depth-correct scale. Pure and stateless: same inputs always
//! produce the same projection, so it is safe to call from anywhere.

use crate::consts::{FAR_Z, NEAR_Z, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::lerp;

/// Result of projecting a world-space point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Screen x (pixels)
    pub x: f32,
    /// Screen y (pixels)
    pub y: f32,
    /// Sprite scale factor at this depth
    pub scale: f32,
    /// Normalized depth: 0 at the far plane, 1 at the near plane
    pub depth: f32,
    /// False when worldZ is outside [NEAR_Z, FAR_Z]
    pub visible: bool,
}

/// Sentinel returned for points outside the depth band
const OFF_SCREEN: Projection = Projection {
    x: -1000.0,
    y: -1000.0,
    scale: 0.0,
    depth: 0.0,
    visible: false,
};

/// Screen y of the horizon line
pub const HORIZON_Y: f32 = 112.0;
/// Screen y of the near ground line
pub const GROUND_Y: f32 = SCREEN_HEIGHT - 24.0;

/// Project a world-space point to screen space.
///
/// Lateral spread, vertical row shift and scale all widen toward the near
/// plane, which is what sells the 2.5D illusion without a camera matrix.
pub fn project(world_x: f32, world_y: f32, world_z: f32) -> Projection {
    if !(NEAR_Z..=FAR_Z).contains(&world_z) {
        return OFF_SCREEN;
    }

    let depth = ((FAR_Z - world_z) / (FAR_Z - NEAR_Z)).clamp(0.0, 1.0);
    let spread = lerp(28.0, 460.0, depth);
    let row_shift = world_y * lerp(8.0, 132.0, depth);

    Projection {
        x: SCREEN_WIDTH / 2.0 + world_x * spread,
        y: lerp(HORIZON_Y, GROUND_Y, depth) + row_shift,
        scale: lerp(0.2, 1.35, depth),
        depth,
        visible: true,
    }
}
