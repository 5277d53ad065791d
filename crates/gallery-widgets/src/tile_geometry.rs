//! Conversions between scene coordinates and widget coordinates

use cosmic::iced::{Point, Rectangle, Size, mouse::ScrollDelta};
use gallery_pan::{Scene, Surface, WheelEvent};

/// Share of a tile's height covered by the caption band
pub const CAPTION_BAND_RATIO: f32 = 0.2;

/// Place a scene rectangle inside the widget bounds
pub fn to_screen(rect: shared::Rect, bounds: Rectangle) -> Rectangle {
    Rectangle::new(
        Point::new(bounds.x + rect.x as f32, bounds.y + rect.y as f32),
        Size::new(rect.width as f32, rect.height as f32),
    )
}

/// Whether any part of `rect` is inside `bounds`
pub fn is_visible(rect: Rectangle, bounds: Rectangle) -> bool {
    rect.x < bounds.x + bounds.width
        && rect.x + rect.width > bounds.x
        && rect.y < bounds.y + bounds.height
        && rect.y + rect.height > bounds.y
}

/// Strip along the bottom edge of a tile where the caption sits
pub fn caption_band(tile: Rectangle) -> Rectangle {
    let height = tile.height * CAPTION_BAND_RATIO;
    Rectangle::new(
        Point::new(tile.x, tile.y + tile.height - height),
        Size::new(tile.width, height),
    )
}

/// Caption font size relative to the height of its line box
pub const CAPTION_TEXT_RATIO: f32 = 0.6;

/// Horizontal inset of caption text inside the band
pub const CAPTION_PADDING: f32 = 8.0;

/// Split a caption band into `count` equal line boxes, top to bottom
pub fn caption_line_boxes(band: Rectangle, count: usize) -> Vec<Rectangle> {
    if count == 0 {
        return Vec::new();
    }

    let height = band.height / count as f32;
    let width = (band.width - CAPTION_PADDING * 2.0).max(0.0);

    (0..count)
        .map(|i| {
            Rectangle::new(
                Point::new(band.x + CAPTION_PADDING, band.y + height * i as f32),
                Size::new(width, height),
            )
        })
        .collect()
}

pub fn viewport_size(bounds: Rectangle) -> shared::Size {
    shared::Size::new(bounds.width as f64, bounds.height as f64)
}

/// New viewport size when the widget bounds no longer match the scene
pub fn resized_viewport(scene: &Scene, bounds: Rectangle) -> Option<shared::Size> {
    let size = viewport_size(bounds);
    (size != scene.viewport()).then_some(size)
}

/// Convert an iced wheel delta to the pan convention.
///
/// iced reports positive `y` when scrolling up; pan deltas are positive
/// when scrolling down, so both axes are negated.
pub fn wheel_event(delta: ScrollDelta) -> WheelEvent {
    match delta {
        ScrollDelta::Lines { x, y } => WheelEvent::lines(-x as f64, -y as f64),
        ScrollDelta::Pixels { x, y } => WheelEvent::pixels(-x as f64, -y as f64),
    }
}
