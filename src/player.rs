// player.rs - First-person walk controller
//
// Movement is host-driven: the camera yaw and the pressed keys come in
// each tick, the clamped position comes out. Axes are accepted
// independently so the player slides along a wall instead of sticking
// to it.

use crate::layout::RoomDimensions;

const MOVEMENT_SPEED: f32 = 0.1;
const RUN_MULTIPLIER: f32 = 2.0;

// Wall clearance shrinks as the room grows, with a floor.
const BASE_WALL_MARGIN: f32 = 1.2;
const MIN_WALL_MARGIN: f32 = 0.8;
const BASE_ROOM_SIZE: f32 = 20.0;

/// Camera height above the floor, roughly an average human.
pub const EYE_HEIGHT: f32 = 1.6;

/// Pressed-key snapshot for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
}

/// Player position on the floor plane, starting at the room center.
pub struct Player {
    pub x: f32,
    pub z: f32,
}

impl Player {
    pub fn new() -> Self {
        Self { x: 0.0, z: 0.0 }
    }

    /// How far from the center the player may walk in the given room.
    pub fn room_limit(room: RoomDimensions) -> f32 {
        let margin = (BASE_WALL_MARGIN * BASE_ROOM_SIZE / room.size).max(MIN_WALL_MARGIN);
        room.half - margin
    }

    /// Advance one tick: accumulate yaw-relative movement, clamp each
    /// axis against the room limit.
    pub fn step(&mut self, input: MoveInput, yaw: f32, limit: f32) {
        let speed = if input.run {
            MOVEMENT_SPEED * RUN_MULTIPLIER
        } else {
            MOVEMENT_SPEED
        };

        // Camera-relative unit vectors on the xz plane.
        let (sin, cos) = yaw.sin_cos();
        let (fwd_x, fwd_z) = (-sin, -cos);
        let (right_x, right_z) = (cos, -sin);

        let mut dx = 0.0;
        let mut dz = 0.0;
        if input.forward {
            dx += fwd_x * speed;
            dz += fwd_z * speed;
        }
        if input.backward {
            dx -= fwd_x * speed;
            dz -= fwd_z * speed;
        }
        if input.right {
            dx += right_x * speed;
            dz += right_z * speed;
        }
        if input.left {
            dx -= right_x * speed;
            dz -= right_z * speed;
        }

        if dx == 0.0 && dz == 0.0 {
            return;
        }

        let nx = self.x + dx;
        let nz = self.z + dz;
        if nx.abs() < limit {
            self.x = nx;
        }
        if nz.abs() < limit {
            self.z = nz;
        }
    }
}
