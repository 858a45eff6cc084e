// room.rs - Room sizing from image count
//
// The room grows with the collection: 3 units of edge for every 2
// images past what a wall comfortably holds. The per-wall estimate
// carries a +1 slack even when the count divides evenly; the only
// cost is empty floor space, so it stays.

/// Edge length of a standard room.
const BASE_SIZE: f32 = 20.0;

/// Images a wall at base size holds comfortably.
const MAX_IMAGES_PER_WALL: usize = 6;

/// Edge growth per 2 extra images on the fullest wall.
const GROWTH_STEP: f32 = 3.0;

/// Square room edge length and its half, the anchor for every other
/// geometry computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomDimensions {
    pub size: f32,
    pub half: f32,
}

impl RoomDimensions {
    fn of(size: f32) -> Self {
        Self { size, half: size / 2.0 }
    }
}

/// Derive the room edge length from the number of hung images.
/// Monotone: more images never shrinks the room.
pub fn room_size(image_count: usize) -> RoomDimensions {
    if image_count == 0 {
        return RoomDimensions::of(BASE_SIZE);
    }

    let per_wall = image_count / 4;
    let max_on_any_wall = per_wall + 1;

    if max_on_any_wall > MAX_IMAGES_PER_WALL {
        let extra = max_on_any_wall - MAX_IMAGES_PER_WALL;
        return RoomDimensions::of(BASE_SIZE + extra.div_ceil(2) as f32 * GROWTH_STEP);
    }

    RoomDimensions::of(BASE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_gallery_gets_base_room() {
        assert_eq!(room_size(0), RoomDimensions { size: 20.0, half: 10.0 });
    }

    #[test]
    fn base_size_until_walls_fill_up() {
        // Up to 23 images the per-wall estimate stays within capacity.
        for count in 1..=23 {
            assert_eq!(room_size(count).size, 20.0, "count {count}");
        }
    }

    #[test]
    fn grows_in_three_unit_steps() {
        // 24 images: estimate 7 per wall, one over capacity.
        assert_eq!(room_size(24).size, 23.0);
        assert_eq!(room_size(28).size, 23.0);
        // Two over rounds the same as one; three over adds another step.
        assert_eq!(room_size(32).size, 26.0);
        assert_eq!(room_size(36).size, 26.0);
    }

    #[test]
    fn half_is_always_half() {
        for count in 0..100 {
            let room = room_size(count);
            assert_eq!(room.half, room.size / 2.0);
        }
    }

    #[test]
    fn size_never_shrinks_with_more_images() {
        let mut prev = 0.0f32;
        for count in 0..200 {
            let size = room_size(count).size;
            assert!(size >= prev, "shrank at count {count}");
            assert!(size >= 20.0);
            prev = size;
        }
    }
}
