// exhibition-engine - Walkable virtual gallery, layout side
//
// Everything the renderer needs comes out of here: room dimensions,
// per-frame world transforms in a flat f32 buffer, and a clamped
// first-person position. The host owns the canvas, textures, lighting
// and raw input events.

pub mod catalog;
pub mod classify;
pub mod encode;
pub mod layout;
pub mod player;
pub mod scene;

use wasm_bindgen::prelude::*;

use catalog::ImageDescriptor;
use encode::{FRAME_STRIDE, PlanEncoder};
use layout::RoomDimensions;
use player::{MoveInput, Player};

/// The exhibition state exposed to the browser host.
#[wasm_bindgen]
pub struct Exhibition {
    images: Vec<ImageDescriptor>,
    room: RoomDimensions,
    encoder: PlanEncoder,
    player: Player,
    input: MoveInput,
    selected: Option<usize>,
}

#[wasm_bindgen]
impl Exhibition {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let mut exhibition = Self {
            images: Vec::new(),
            room: layout::room_size(0),
            encoder: PlanEncoder::new(),
            player: Player::new(),
            input: MoveInput::default(),
            selected: None,
        };
        exhibition.rebuild();
        exhibition
    }

    /// Replace the image list from a manifest JSON and relayout.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), JsValue> {
        let images =
            catalog::parse_manifest(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("loaded {} images from manifest", images.len());

        self.images = images;
        self.selected = None;
        self.rebuild();
        Ok(())
    }

    // Recompute the whole layout from the current image list. Cheap
    // enough to run on every list change.
    fn rebuild(&mut self) {
        let plan = layout::plan(&self.images);
        self.room = plan.room;
        self.encoder.encode(&plan);
    }

    // Room geometry

    pub fn room_size(&self) -> f32 {
        self.room.size
    }

    pub fn half_room_size(&self) -> f32 {
        self.room.half
    }

    pub fn wall_height(&self) -> f32 {
        scene::WALL_HEIGHT
    }

    // Frame buffer, FRAME_STRIDE floats per frame

    pub fn frame_stride(&self) -> usize {
        FRAME_STRIDE
    }

    pub fn frame_count(&self) -> usize {
        self.encoder.frame_count()
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.encoder.ptr()
    }

    pub fn frame_len(&self) -> usize {
        self.encoder.len()
    }

    /// Copying view for hosts that prefer not to touch wasm memory.
    pub fn frames(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(self.encoder.data())
    }

    // Player

    pub fn set_input(&mut self, forward: bool, backward: bool, left: bool, right: bool, run: bool) {
        self.input = MoveInput { forward, backward, left, right, run };
    }

    /// Advance one frame with the camera's current yaw.
    pub fn tick(&mut self, yaw: f32) {
        let limit = Player::room_limit(self.room);
        self.player.step(self.input, yaw, limit);
    }

    pub fn player_x(&self) -> f32 {
        self.player.x
    }

    pub fn player_y(&self) -> f32 {
        player::EYE_HEIGHT
    }

    pub fn player_z(&self) -> f32 {
        self.player.z
    }

    // Selection: at most one image at a time; clicking the selected
    // frame again deselects it.

    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.selected = if self.selected == Some(index) { None } else { Some(index) };
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Selected image index, or -1.
    pub fn selected_index(&self) -> i32 {
        self.selected.map_or(-1, |i| i as i32)
    }

    /// Style label for the selected image. Browser builds only carry
    /// the filename heuristic; the model runs offline in genmanifest.
    pub fn classify_selected(&self) -> Option<String> {
        let image = self.images.get(self.selected?)?;
        Some(classify::categorize(&image.url).label().to_owned())
    }

    // Image metadata

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Descriptor metadata as JSON for the host UI.
    pub fn image_json(&self, index: usize) -> Option<String> {
        let image = self.images.get(index)?;
        serde_json::to_string(image).ok()
    }
}

impl Default for Exhibition {
    fn default() -> Self {
        Self::new()
    }
}
