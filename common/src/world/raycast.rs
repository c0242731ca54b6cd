//! Ray intersection against the block set.

use super::{BlockPos, World, BLOCK_SIZE};
use nalgebra::Vector3;

/// A half-line starting at `origin` and going along the unit vector `dir`.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vector3<f64>,
    pub dir: Vector3<f64>,
}

/// The nearest block intersected by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Position of the intersected block.
    pub pos: BlockPos,
    /// Outward normal of the intersected face. Blocks are axis-aligned
    /// cubes, so this is always one of the six axis-aligned unit vectors.
    pub face: Vector3<i64>,
    /// Distance from the ray origin to the entry point.
    pub distance: f64,
}

/// Slab test of `ray` against the cube centered on `pos`.
///
/// Returns the entry distance and the entry face. Cubes behind the origin
/// and cubes the origin is inside of are not hits.
fn intersect_block(ray: &Ray, pos: BlockPos) -> Option<(f64, Vector3<i64>)> {
    let center = pos.center();
    let half = BLOCK_SIZE / 2.0;

    let mut t_enter = std::f64::NEG_INFINITY;
    let mut t_exit = std::f64::INFINITY;
    let mut entry_axis = 0;
    let mut entry_sign = 0i64;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.dir[axis];
        let slab_min = center[axis] - half;
        let slab_max = center[axis] + half;

        if dir.abs() < 1e-12 {
            // Parallel to the slab: either always inside it or never.
            if origin < slab_min || origin > slab_max {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir;
        let (t_near, t_far) = if inv >= 0.0 {
            ((slab_min - origin) * inv, (slab_max - origin) * inv)
        } else {
            ((slab_max - origin) * inv, (slab_min - origin) * inv)
        };

        if t_near > t_enter {
            t_enter = t_near;
            entry_axis = axis;
            entry_sign = if dir > 0.0 { -1 } else { 1 };
        }
        if t_far < t_exit {
            t_exit = t_far;
        }
        if t_enter > t_exit {
            return None;
        }
    }

    if t_enter <= 0.0 {
        return None;
    }

    let mut face = Vector3::new(0i64, 0, 0);
    face[entry_axis] = entry_sign;
    Some((t_enter, face))
}

impl World {
    /// The nearest block intersected by `ray`, by distance from the origin.
    pub fn pointed_block(&self, ray: &Ray) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for block in self.blocks() {
            if let Some((distance, face)) = intersect_block(ray, block.pos) {
                let closer = match nearest {
                    None => true,
                    Some(hit) => distance < hit.distance,
                };
                if closer {
                    nearest = Some(RayHit {
                        pos: block.pos,
                        face,
                        distance,
                    });
                }
            }
        }
        nearest
    }
}
