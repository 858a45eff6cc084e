// encode.rs - Flatten a gallery plan for the rendering layer
//
// Output layout, FRAME_STRIDE f32 values per frame:
//   [image index, wall index, world x, y, z, yaw, width, height]
// The host reads the buffer straight out of wasm memory via ptr/len.

use crate::layout::GalleryPlan;
use crate::scene;

pub const FRAME_STRIDE: usize = 8;

pub struct PlanEncoder {
    out: Vec<f32>,
}

impl PlanEncoder {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    pub fn clear(&mut self) {
        self.out.clear();
    }

    pub fn ptr(&self) -> *const f32 {
        self.out.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn data(&self) -> &[f32] {
        &self.out
    }

    pub fn frame_count(&self) -> usize {
        self.out.len() / FRAME_STRIDE
    }

    /// Encode every placed frame in plan order.
    pub fn encode(&mut self, plan: &GalleryPlan<'_>) {
        self.clear();
        self.out.reserve(plan.frames.len() * FRAME_STRIDE);

        for (i, frame) in plan.frames.iter().enumerate() {
            let (pos, yaw) = scene::frame_transform(frame.wall, plan.room.half, &frame.placement);
            self.out.push(i as f32);
            self.out.push(frame.wall.index() as f32);
            self.out.extend_from_slice(&pos);
            self.out.push(yaw);
            self.out.push(frame.placement.width);
            self.out.push(frame.placement.height);
        }
    }
}
