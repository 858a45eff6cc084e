// layout/ - Procedural gallery layout
//
// Pure geometry, recomputed wholesale whenever the image list changes:
// image count -> room size, image list -> per-wall partition, per-wall
// count -> a packed row of frame placements.

mod frames;
mod room;
mod walls;

pub use frames::{FramePlacement, pack};
pub use room::{RoomDimensions, room_size};
pub use walls::{Wall, WallAssignment, distribute};

use crate::catalog::ImageDescriptor;

/// One image joined with its wall and computed placement.
pub struct PlacedFrame<'a> {
    pub image: &'a ImageDescriptor,
    pub wall: Wall,
    pub placement: FramePlacement,
}

/// The full layout for one snapshot of the image list.
pub struct GalleryPlan<'a> {
    pub room: RoomDimensions,
    pub frames: Vec<PlacedFrame<'a>>,
}

/// Compute the complete layout: room size, wall partition, packing.
/// Walls span the whole room edge, so the wall width is the room size.
pub fn plan(images: &[ImageDescriptor]) -> GalleryPlan<'_> {
    let room = room_size(images.len());
    let assignment = distribute(images);

    let mut frames = Vec::with_capacity(images.len());
    for (wall, group) in assignment.iter() {
        let row = pack(room.size, group.len());
        for (image, placement) in group.iter().zip(row) {
            frames.push(PlacedFrame { image, wall, placement });
        }
    }

    GalleryPlan { room, frames }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ImageDescriptor, ManifestEntry};

    fn descriptors(count: usize) -> Vec<ImageDescriptor> {
        (0..count)
            .map(|i| {
                ImageDescriptor::from_entry(&ManifestEntry {
                    filename: format!("piece-{i}.jpg"),
                    ..ManifestEntry::default()
                })
            })
            .collect()
    }

    #[test]
    fn empty_list_plans_an_empty_base_room() {
        let plan = plan(&[]);
        assert_eq!(plan.room.size, 20.0);
        assert!(plan.frames.is_empty());
    }

    #[test]
    fn plan_keeps_input_order_and_wall_priority() {
        let images = descriptors(10);
        let plan = plan(&images);

        assert_eq!(plan.frames.len(), 10);

        let walls: Vec<Wall> = plan.frames.iter().map(|f| f.wall).collect();
        let expected = [
            Wall::North, Wall::North, Wall::North,
            Wall::East, Wall::East, Wall::East,
            Wall::South, Wall::South,
            Wall::West, Wall::West,
        ];
        assert_eq!(walls, expected);

        for (frame, image) in plan.frames.iter().zip(&images) {
            assert_eq!(frame.image.id, image.id);
        }
    }

    #[test]
    fn every_wall_row_is_freshly_packed() {
        let images = descriptors(10);
        let plan = plan(&images);

        // North holds 3 frames, south 2; the gap depends on the
        // per-wall count, so the second frame of each row differs.
        let north_second = plan.frames[1].placement;
        let south_second = plan.frames[7].placement;
        assert_ne!(north_second.x, south_second.x);
    }
}
