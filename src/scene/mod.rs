// scene/ - Fixed world-space facts of the gallery room
//
// Wall transforms and the frame lift off the wall plane. The renderer
// owns meshes, lighting and textures; this module only says where
// things go.

use std::f32::consts::PI;

use crate::layout::{FramePlacement, Wall};

/// Wall height; walls stand on the floor, centered at half that.
pub const WALL_HEIGHT: f32 = 4.5;

/// Distance a frame stands off its wall plane, toward the room.
pub const FRAME_LIFT: f32 = 0.15;

/// A wall's world transform: center position and yaw about +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallTransform {
    pub position: [f32; 3],
    pub yaw: f32,
}

/// World transform of a wall in a room with the given half-size.
/// Each wall faces the room center.
pub fn wall_transform(wall: Wall, half: f32) -> WallTransform {
    let y = WALL_HEIGHT / 2.0;
    match wall {
        Wall::North => WallTransform { position: [0.0, y, -half], yaw: 0.0 },
        Wall::East => WallTransform { position: [half, y, 0.0], yaw: -PI / 2.0 },
        Wall::South => WallTransform { position: [0.0, y, half], yaw: PI },
        Wall::West => WallTransform { position: [-half, y, 0.0], yaw: PI / 2.0 },
    }
}

/// World position and yaw for one frame hung on a wall: the wall-local
/// placement rotated by the wall yaw and moved to the wall center,
/// lifted slightly into the room.
pub fn frame_transform(wall: Wall, half: f32, placement: &FramePlacement) -> ([f32; 3], f32) {
    let t = wall_transform(wall, half);
    let (sin, cos) = t.yaw.sin_cos();
    let (lx, lz) = (placement.x, FRAME_LIFT);

    let x = t.position[0] + lx * cos + lz * sin;
    let z = t.position[2] - lx * sin + lz * cos;
    ([x, t.position[1], z], t.yaw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn placement(x: f32) -> FramePlacement {
        FramePlacement { x, width: 2.0, height: 2.5 }
    }

    #[test]
    fn walls_sit_on_the_room_edges() {
        let half = 10.0;
        assert_eq!(wall_transform(Wall::North, half).position, [0.0, 2.25, -10.0]);
        assert_eq!(wall_transform(Wall::East, half).position, [10.0, 2.25, 0.0]);
        assert_eq!(wall_transform(Wall::South, half).position, [0.0, 2.25, 10.0]);
        assert_eq!(wall_transform(Wall::West, half).position, [-10.0, 2.25, 0.0]);
    }

    #[test]
    fn north_frames_keep_their_local_x() {
        let ([x, y, z], yaw) = frame_transform(Wall::North, 10.0, &placement(-3.0));
        assert!((x - -3.0).abs() < EPS);
        assert!((y - 2.25).abs() < EPS);
        assert!((z - (-10.0 + FRAME_LIFT)).abs() < EPS);
        assert_eq!(yaw, 0.0);
    }

    #[test]
    fn east_frames_are_lifted_toward_the_center() {
        let ([x, _, z], yaw) = frame_transform(Wall::East, 10.0, &placement(4.0));
        assert!((x - (10.0 - FRAME_LIFT)).abs() < EPS);
        assert!((z - 4.0).abs() < EPS);
        assert!((yaw - (-PI / 2.0)).abs() < EPS);
    }

    #[test]
    fn south_frames_mirror_their_local_x() {
        let ([x, _, z], _) = frame_transform(Wall::South, 10.0, &placement(4.0));
        assert!((x - -4.0).abs() < EPS);
        assert!((z - (10.0 - FRAME_LIFT)).abs() < EPS);
    }
}
