//! Block picking by grid traversal (Amanatides-Woo DDA)

use crate::core::types::{IVec3, Vec3};
use crate::math::Ray;

use super::block::{BlockFace, BlockType};
use super::grid::WorldGrid;

/// Result of a single raycast. Position, normal and distance are only
/// meaningful when `hit` is true.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    pub hit: bool,
    /// Grid coordinate of the first solid block along the ray
    pub block_position: IVec3,
    /// Normal of the face the ray entered through
    pub face_normal: IVec3,
    /// Ray length at the entry face
    pub distance: f32,
    pub block: BlockType,
}

impl RaycastHit {
    pub const MISS: RaycastHit = RaycastHit {
        hit: false,
        block_position: IVec3::ZERO,
        face_normal: IVec3::ZERO,
        distance: 0.0,
        block: BlockType::Air,
    };

    /// The struck face, if this is a hit
    pub fn face(&self) -> Option<BlockFace> {
        if self.hit {
            BlockFace::from_normal(self.face_normal)
        } else {
            None
        }
    }

    /// Cell adjacent to the struck face, where a placed block would go
    pub fn placement_target(&self) -> Option<IVec3> {
        self.hit.then(|| self.block_position + self.face_normal)
    }
}

/// Walks a [`WorldGrid`] one voxel boundary at a time
pub struct Raycaster<'a> {
    grid: &'a WorldGrid,
}

impl<'a> Raycaster<'a> {
    pub fn new(grid: &'a WorldGrid) -> Self {
        Self { grid }
    }

    /// Cast from `origin` along `direction` (normalized here), up to
    /// `max_distance`
    pub fn cast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> RaycastHit {
        self.cast_ray(&Ray::new(origin, direction), max_distance)
    }

    /// Return the first solid block whose entry face lies closer than
    /// `max_distance`.
    ///
    /// The voxel containing the origin is never tested. At each step the
    /// axis with the smallest boundary distance is advanced; when several
    /// axes tie the ray passes exactly through an edge or corner, and the
    /// first tied axis in x, y, z order whose neighbour is still inside the
    /// world is taken. The distance checked against `max_distance` is the
    /// advanced axis's boundary distance before stepping.
    pub fn cast_ray(&self, ray: &Ray, max_distance: f32) -> RaycastHit {
        if ray.is_degenerate() || !(max_distance > 0.0) {
            log::debug!(
                "Degenerate raycast (origin {:?}, direction {:?}, max {})",
                ray.origin,
                ray.direction,
                max_distance
            );
            return RaycastHit::MISS;
        }

        let origin = ray.origin;
        let dir = ray.direction;
        let delta_dist = ray.inv_direction;

        let mut map_pos = origin.floor().as_ivec3();
        let step = IVec3::new(
            if dir.x > 0.0 { 1 } else { -1 },
            if dir.y > 0.0 { 1 } else { -1 },
            if dir.z > 0.0 { 1 } else { -1 },
        );

        let mut side_dist = Vec3::ZERO;
        for axis in 0..3 {
            side_dist[axis] = if dir[axis] == 0.0 {
                f32::INFINITY
            } else if dir[axis] > 0.0 {
                (map_pos[axis] as f32 + 1.0 - origin[axis]) * delta_dist[axis]
            } else {
                (origin[axis] - map_pos[axis] as f32) * delta_dist[axis]
            };
        }

        for _ in 0..self.step_budget(dir, max_distance) {
            let axis = self.next_axis(side_dist, map_pos, step);
            let traveled = side_dist[axis];
            side_dist[axis] += delta_dist[axis];
            let Some(next) = map_pos[axis].checked_add(step[axis]) else {
                return RaycastHit::MISS;
            };
            map_pos[axis] = next;

            if traveled >= max_distance {
                return RaycastHit::MISS;
            }

            match self.grid.get_pos(map_pos) {
                Err(_) => return RaycastHit::MISS,
                Ok(block) if block.is_solid() => {
                    let mut face_normal = IVec3::ZERO;
                    face_normal[axis] = -step[axis];
                    return RaycastHit {
                        hit: true,
                        block_position: map_pos,
                        face_normal,
                        distance: traveled,
                        block,
                    };
                }
                Ok(_) => {}
            }
        }

        RaycastHit::MISS
    }

    /// Axis to advance next
    fn next_axis(&self, side_dist: Vec3, map_pos: IVec3, step: IVec3) -> usize {
        let nearest = side_dist.min_element();
        let mut first_tied = None;
        for axis in 0..3 {
            if side_dist[axis] != nearest {
                continue;
            }
            let Some(coord) = map_pos[axis].checked_add(step[axis]) else {
                first_tied.get_or_insert(axis);
                continue;
            };
            let mut next = map_pos;
            next[axis] = coord;
            if self.grid.contains_pos(next) {
                return axis;
            }
            first_tied.get_or_insert(axis);
        }
        first_tied.unwrap_or(0)
    }

    /// Upper bound on iterations: a ray crossing distance `d` meets at most
    /// `d * |dir|_1 + 3` boundaries, and cannot take more than `extent + 1`
    /// steps along any axis before leaving the world.
    fn step_budget(&self, dir: Vec3, max_distance: f32) -> usize {
        let extents = self.grid.extents();
        let by_world = extents.x as usize + extents.y as usize + extents.z as usize + 3;
        let by_distance = (max_distance * dir.abs().element_sum()).ceil();
        if by_distance.is_finite() {
            by_world.min(by_distance as usize + 4)
        } else {
            by_world
        }
    }
}
