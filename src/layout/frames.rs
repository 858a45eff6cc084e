// frames.rs - Single-row frame packing along one wall
//
// Frame width adapts to the count, clamped for visibility and taste;
// leftover width becomes even gaps. A width clamped up past what fits
// gives a negative gap (overlapping frames); that degenerate case is
// accepted as-is rather than guarded.

/// Minimum gap budgeted between adjacent frames.
const MIN_GAP: f32 = 0.8;

/// Frame width bounds.
const MAX_FRAME_WIDTH: f32 = 2.2;
const MIN_FRAME_WIDTH: f32 = 1.2;

/// Edge clearance: at least 1.5 units, or 7.5% of the wall.
const SIDE_MARGIN_MIN: f32 = 1.5;
const SIDE_MARGIN_RATIO: f32 = 0.075;

/// Portrait 4:5 aspect; frame height never adapts to the wall.
const HEIGHT_RATIO: f32 = 1.25;

/// Where one frame hangs, in wall-local coordinates: x measured from
/// the wall center, vertically centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FramePlacement {
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

/// Pack `count` frames into a single centered row on a wall of the
/// given width. Placements come back in hanging order, left to right.
pub fn pack(wall_width: f32, count: usize) -> Vec<FramePlacement> {
    if count == 0 {
        return Vec::new();
    }

    let margin = (wall_width * SIDE_MARGIN_RATIO).max(SIDE_MARGIN_MIN);
    let effective = wall_width - margin * 2.0;

    let n = count as f32;
    let raw = (effective - MIN_GAP * (n - 1.0)) / n;
    let width = raw.clamp(MIN_FRAME_WIDTH, MAX_FRAME_WIDTH);
    let height = width * HEIGHT_RATIO;

    // Whatever the clamped width leaves over is spread into the gaps.
    let slack = effective - width * n;
    let gap = if count > 1 { slack / (n - 1.0) } else { 0.0 };
    let start = -effective / 2.0 + width / 2.0;

    (0..count)
        .map(|i| FramePlacement {
            x: start + i as f32 * (width + gap),
            width,
            height,
        })
        .collect()
}
